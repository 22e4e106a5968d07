//! Command line argument parsing for the respell CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// respell - an interactive spell checker with ranked word suggestions
#[derive(Parser, Debug, Clone)]
#[command(name = "respell")]
#[command(about = "An interactive spell checker with ranked word suggestions")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct RespellArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl RespellArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Interactively check a file and write a corrected copy
    Check(CheckArgs),

    /// Print ranked suggestions for a single word
    Suggest(SuggestArgs),

    /// Show dictionary statistics
    Stats(StatsArgs),
}

/// Arguments for checking a file
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Path to the input text file
    #[arg(value_name = "INPUT_FILE")]
    pub input_file: PathBuf,

    /// Path to the dictionary file (one word per line)
    #[arg(short, long, value_name = "DICTIONARY", env = "RESPELL_DICTIONARY")]
    pub dictionary: PathBuf,

    /// Maximum length difference between a word and a candidate
    #[arg(long, default_value = "2")]
    pub max_length_diff: usize,

    /// Minimum character-overlap ratio for a candidate
    #[arg(long, default_value = "0.7")]
    pub min_common_percent: f64,

    /// Maximum number of suggestions per flagged word
    #[arg(short = 'n', long, default_value = "10")]
    pub limit: usize,
}

/// Arguments for a one-shot suggestion lookup
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// The word to look up
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Path to the dictionary file (one word per line)
    #[arg(short, long, value_name = "DICTIONARY", env = "RESPELL_DICTIONARY")]
    pub dictionary: PathBuf,

    /// Maximum length difference between the word and a candidate
    #[arg(long, default_value = "2")]
    pub max_length_diff: usize,

    /// Minimum character-overlap ratio for a candidate
    #[arg(long, default_value = "0.7")]
    pub min_common_percent: f64,

    /// Maximum number of suggestions
    #[arg(short = 'n', long, default_value = "10")]
    pub limit: usize,

    /// Keep every candidate that passes the filters
    #[arg(long, conflicts_with = "limit")]
    pub unlimited: bool,

    /// Annotate each suggestion with its similarity score
    #[arg(long)]
    pub debug_scores: bool,
}

impl SuggestArgs {
    /// Effective suggestion cap; `None` means unbounded
    pub fn max_suggestions(&self) -> Option<usize> {
        if self.unlimited { None } else { Some(self.limit) }
    }
}

/// Arguments for dictionary statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the dictionary file (one word per line)
    #[arg(short, long, value_name = "DICTIONARY", env = "RESPELL_DICTIONARY")]
    pub dictionary: PathBuf,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_basic_check_command() {
        let args = RespellArgs::try_parse_from([
            "respell",
            "check",
            "essay.txt",
            "--dictionary",
            "words.txt",
            "--limit",
            "5",
        ])
        .unwrap();

        if let Command::Check(check_args) = args.command {
            assert_eq!(check_args.input_file, PathBuf::from("essay.txt"));
            assert_eq!(check_args.dictionary, PathBuf::from("words.txt"));
            assert_eq!(check_args.limit, 5);
            assert_eq!(check_args.max_length_diff, 2);
            assert_eq!(check_args.min_common_percent, 0.7);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_suggest_command_limits() {
        let args = RespellArgs::try_parse_from([
            "respell",
            "suggest",
            "ewook",
            "--dictionary",
            "words.txt",
            "--unlimited",
            "--debug-scores",
        ])
        .unwrap();

        if let Command::Suggest(suggest_args) = args.command {
            assert_eq!(suggest_args.word, "ewook");
            assert_eq!(suggest_args.max_suggestions(), None);
            assert!(suggest_args.debug_scores);
        } else {
            panic!("Expected Suggest command");
        }

        let args = RespellArgs::try_parse_from([
            "respell",
            "suggest",
            "ewook",
            "--dictionary",
            "words.txt",
            "-n",
            "3",
        ])
        .unwrap();

        if let Command::Suggest(suggest_args) = args.command {
            assert_eq!(suggest_args.max_suggestions(), Some(3));
        } else {
            panic!("Expected Suggest command");
        }
    }

    #[test]
    fn test_limit_conflicts_with_unlimited() {
        let result = RespellArgs::try_parse_from([
            "respell",
            "suggest",
            "ewook",
            "--dictionary",
            "words.txt",
            "-n",
            "3",
            "--unlimited",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbosity_levels() {
        let args =
            RespellArgs::try_parse_from(["respell", "stats", "--dictionary", "words.txt"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args =
            RespellArgs::try_parse_from(["respell", "-vv", "stats", "--dictionary", "words.txt"])
                .unwrap();
        assert_eq!(args.verbosity(), 2);

        let args = RespellArgs::try_parse_from([
            "respell",
            "--quiet",
            "stats",
            "--dictionary",
            "words.txt",
        ])
        .unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args = RespellArgs::try_parse_from([
            "respell",
            "--format",
            "json",
            "stats",
            "--dictionary",
            "words.txt",
        ])
        .unwrap();
        assert!(matches!(args.output_format, OutputFormat::Json));
    }
}
