//! Command implementations

mod detect;

pub use detect::{DetectOutcome, execute_detect};
