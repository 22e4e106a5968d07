//! # respell
//!
//! An interactive spell checker with character-similarity word suggestions.
//!
//! ## Features
//!
//! - Line-oriented word dictionary with a fast membership test
//! - Positional and character-overlap similarity scoring
//! - Capacity-bounded best-N candidate ranking with deterministic ties
//! - Streaming file sessions that pause on each flagged word
//! - Interactive CLI for checking files and looking up suggestions

pub mod checker;
pub mod cli;
pub mod error;
pub mod spelling;

pub mod prelude {
    //! Convenience re-exports of the most commonly used types.

    pub use crate::checker::SpellChecker;
    pub use crate::error::{RespellError, Result};
    pub use crate::spelling::{
        Dictionary, SuggestConfig, Suggestion, SuggestionEngine, WordRanking,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
