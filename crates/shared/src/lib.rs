mod error;
pub mod mealplan;

pub use error::*;
pub use mealplan::{Category, Day, Slot};
