use std::str::FromStr;

use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::ValidationError;

#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
)]
#[strum(ascii_case_insensitive)]
pub enum Day {
    #[default]
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Slot {
    #[default]
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
)]
#[strum(ascii_case_insensitive)]
pub enum Category {
    #[default]
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl Day {
    /// Position in the week, Monday first.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn parse(value: &str) -> crate::Result<Self> {
        Self::from_str(value.trim()).map_err(|_| ValidationError::invalid_slot(value))
    }
}

impl Slot {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn parse(value: &str) -> crate::Result<Self> {
        Self::from_str(value.trim()).map_err(|_| ValidationError::invalid_slot(value))
    }
}
