//! Run outcome types.

mod result;

pub use result::RunOutcome;
