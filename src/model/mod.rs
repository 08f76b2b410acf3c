pub mod config;
pub mod option;
pub mod producer;
pub mod selection;

pub use config::*;
pub use option::*;
pub use producer::*;
pub use selection::*;
