pub mod feed;
pub mod signal;
pub mod types;
pub mod window;
