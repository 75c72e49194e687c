pub mod engine;
pub mod history;
pub mod session;
