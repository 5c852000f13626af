pub mod logging;
pub mod settings;

pub use settings::{Cli, Settings};
