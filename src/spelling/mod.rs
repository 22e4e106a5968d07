//! Word suggestion engine for respell.
//!
//! This module turns "word not in dictionary" into a ranked list of
//! plausible corrections: a dictionary membership test, pure pairwise
//! similarity measures, and a bounded top-N ranking structure drained
//! best-first.

pub mod dictionary;
pub mod ranking;
pub mod similarity;
pub mod suggest;

// Re-export commonly used types
pub use dictionary::*;
pub use ranking::*;
pub use similarity::*;
pub use suggest::*;
