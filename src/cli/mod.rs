pub mod script;
pub mod session;
