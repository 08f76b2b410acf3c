pub mod chain;
pub mod filter_ops;
