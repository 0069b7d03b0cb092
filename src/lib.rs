pub mod command;
pub mod config;
pub mod error;
pub mod observability;
pub mod render;
pub mod session;

pub use config::Config;
pub use error::AppError;
pub use session::{MealDraft, Session};
