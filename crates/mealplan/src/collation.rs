//! Case-insensitive ordering for ingredient names.
//!
//! Strings are compared on their lower-cased form in two passes. The first
//! pass decomposes every character (NFD), drops the combining marks and
//! ranks characters by class: spaces, then punctuation and symbols, then
//! digits, then letters. Accented letters therefore sort with their base
//! letter ("crème" between "cream" and "cress", "chả giò" before "cheese").
//! Only strings that are equal at that level fall back to the full
//! lower-cased form, which keeps the order total.

use std::cmp::Ordering;

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Dedup and sort key: the lower-cased form of an ingredient.
pub fn key(value: &str) -> String {
    value.to_lowercase()
}

/// Compares two strings the way the grocery list is sorted.
pub fn compare(a: &str, b: &str) -> Ordering {
    let (a, b) = (key(a), key(b));

    primary(&a)
        .cmp(primary(&b))
        .then_with(|| a.nfd().cmp(b.nfd()))
        .then_with(|| a.cmp(&b))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Class {
    Space,
    Punctuation,
    Digit,
    Letter,
}

impl Class {
    fn of(c: char) -> Self {
        if c.is_whitespace() {
            Class::Space
        } else if c.is_alphabetic() {
            Class::Letter
        } else if c.is_numeric() {
            Class::Digit
        } else {
            Class::Punctuation
        }
    }
}

fn primary(value: &str) -> impl Iterator<Item = (Class, char)> + '_ {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(expand)
        .map(|c| (Class::of(c), c))
}

// Letters with no canonical decomposition.
fn expand(c: char) -> Expanded {
    match c {
        'ß' => Expanded::Pair('s', 's'),
        'æ' => Expanded::Pair('a', 'e'),
        'œ' => Expanded::Pair('o', 'e'),
        'ø' => Expanded::One('o'),
        'ł' => Expanded::One('l'),
        'đ' => Expanded::One('d'),
        'ı' => Expanded::One('i'),
        other => Expanded::One(other),
    }
}

enum Expanded {
    One(char),
    Pair(char, char),
    Done,
}

impl Iterator for Expanded {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        match *self {
            Expanded::One(c) => {
                *self = Expanded::Done;
                Some(c)
            }
            Expanded::Pair(a, b) => {
                *self = Expanded::One(b);
                Some(a)
            }
            Expanded::Done => None,
        }
    }
}
