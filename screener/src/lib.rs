pub mod blacklist;
pub mod chain;
pub mod oracles;
pub mod types;
