pub mod cli;
pub mod dex;
pub mod error;
pub mod rpc;

pub use error::{LaunchLabError, Result};
