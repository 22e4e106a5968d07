//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, RespellArgs};
use crate::error::Result;

/// Result structure for a completed check session.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckReport {
    pub input_path: String,
    pub output_path: String,
    pub words_flagged: usize,
}

/// Result structure for a one-shot suggestion lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestReport {
    pub word: String,
    pub valid: bool,
    pub suggestions: Vec<String>,
}

/// Dictionary statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct DictionaryStats {
    pub path: String,
    pub word_count: usize,
}

/// Render a command result: the human message on stdout (unless quiet),
/// or the serialized structure when JSON output is selected.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &RespellArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 0 && !message.is_empty() {
                println!("{message}");
            }
        }
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            println!("{json}");
        }
    }
    Ok(())
}
