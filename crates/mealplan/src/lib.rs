pub mod collation;
mod grocery;
mod meal;
mod week_plan;

pub use grocery::*;
pub use meal::*;
pub use week_plan::*;
