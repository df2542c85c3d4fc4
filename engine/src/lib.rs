pub mod config;
pub mod games;
pub mod identifiers;
pub mod logger;
mod defaults;

pub use identifiers::*;
