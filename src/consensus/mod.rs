pub mod sighash;
pub mod tip;
pub mod types;

pub use sighash::{input_sighash, partial_sighash, whole_sighash};
pub use tip::{HttpTipState, StaticTipState, TipError, TipState};
pub use types::*;
