use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Which constraint a rejected input violated.
#[derive(
    EnumString, VariantArray, Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Hash,
)]
pub enum Reason {
    InvalidSlot,
    EmptyName,
    NoIngredients,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub reason: Reason,
    pub message: String,
}

impl ValidationError {
    pub fn new(reason: Reason, message: impl Into<String>) -> Self {
        Self {
            reason,
            message: message.into(),
        }
    }

    pub fn invalid_slot(identifier: &str) -> Self {
        Self::new(
            Reason::InvalidSlot,
            format!("'{identifier}' is not a known day or meal slot"),
        )
    }
}

pub type Result<T> = std::result::Result<T, ValidationError>;

#[macro_export]
macro_rules! bail {
    ($reason:ident, $msg:literal $(,)?) => {
        return Err($crate::ValidationError::new($crate::Reason::$reason, format!($msg)))
    };
    ($reason:ident, $fmt:expr, $($arg:tt)*) => {
        return Err($crate::ValidationError::new($crate::Reason::$reason, format!($fmt, $($arg)*)))
    };
}
