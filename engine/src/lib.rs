pub mod decision;
pub mod engine;
pub mod types;
