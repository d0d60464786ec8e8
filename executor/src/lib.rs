pub mod notifier;
pub mod trader;
pub mod types;
