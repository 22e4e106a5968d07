//! Command implementations for the respell CLI.

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::checker::{SpellChecker, output_path};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{RespellError, Result};
use crate::spelling::{Dictionary, SuggestConfig, Suggestion, SuggestionEngine, render_numbered};

/// Execute a CLI command.
pub fn execute_command(args: RespellArgs) -> Result<()> {
    match &args.command {
        Command::Check(check_args) => check_file(check_args.clone(), &args),
        Command::Suggest(suggest_args) => suggest_word(suggest_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
    }
}

/// Load the dictionary and build an engine with the given configuration.
fn load_engine(
    dictionary_path: &Path,
    config: SuggestConfig,
    cli_args: &RespellArgs,
) -> Result<SuggestionEngine> {
    if cli_args.verbosity() > 1 {
        println!("Loading dictionary from: {}", dictionary_path.display());
    }
    let dictionary = Dictionary::load(dictionary_path)?;
    if cli_args.verbosity() > 1 {
        println!("Loaded {} words", dictionary.len());
    }
    Ok(SuggestionEngine::with_config(dictionary, config))
}

/// Interactively check a file, prompting on each flagged word.
fn check_file(args: CheckArgs, cli_args: &RespellArgs) -> Result<()> {
    let config = SuggestConfig {
        max_length_diff: args.max_length_diff,
        min_common_percent: args.min_common_percent,
        max_suggestions: Some(args.limit),
    };
    let engine = load_engine(&args.dictionary, config, cli_args)?;
    let corrected_path = output_path(&args.input_file);
    let mut checker = SpellChecker::new(engine, &args.input_file)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut words_flagged = 0;

    while let Some(suggestion) = checker.next_error()? {
        words_flagged += 1;
        let correction = prompt_correction(&mut input, &suggestion)?;
        checker.set_correction(&correction)?;
    }
    checker.finish()?;

    output_result(
        &format!("Corrected file written to: {}", corrected_path.display()),
        &CheckReport {
            input_path: args.input_file.to_string_lossy().to_string(),
            output_path: corrected_path.to_string_lossy().to_string(),
            words_flagged,
        },
        cli_args,
    )
}

/// Print the accept/replace/retype instructions for a flagged word.
fn print_instructions(candidate_count: usize) {
    if candidate_count == 0 {
        println!("Press 'a' for accept as is, 't' for type in manually.");
    } else {
        println!("Press 'r' for replace, 'a' for accept as is, 't' for type in manually.");
    }
}

/// Read one line of user input, without its trailing newline.
fn read_line(input: &mut impl BufRead) -> Result<String> {
    let mut buffer = String::new();
    if input.read_line(&mut buffer)? == 0 {
        return Err(RespellError::other("unexpected end of input"));
    }
    Ok(buffer.trim_end_matches(['\r', '\n']).to_string())
}

/// Show a flagged word with its suggestions and prompt until the user
/// picks a disposition: replace by number, accept as is, or retype.
fn prompt_correction(input: &mut impl BufRead, suggestion: &Suggestion) -> Result<String> {
    print!("The word '{}' is misspelled.", suggestion.word);
    let candidate_count = suggestion.candidate_count();
    if candidate_count == 0 {
        println!("\nThere are 0 suggestions in our dictionary for this word.");
    } else {
        println!(" The following suggestions are available:");
        println!("{}", suggestion.render_list());
    }
    print_instructions(candidate_count);
    io::stdout().flush()?;

    loop {
        let choice = read_line(input)?;
        match choice.as_str() {
            "r" if candidate_count > 0 => {
                println!("Your word will now be replaced with one of the suggestions.");
                println!(
                    "Enter the number corresponding to the word that you want to use for replacement."
                );
                loop {
                    let picked = read_line(input)?;
                    match picked.parse::<usize>() {
                        Ok(number) if number >= 1 && number <= candidate_count => {
                            return Ok(suggestion.candidate(number - 1)?.to_string());
                        }
                        _ => {
                            println!(
                                "Invalid number entered. Please enter the number corresponding to the word that you want to use for replacement."
                            );
                        }
                    }
                }
            }
            "a" => return Ok(suggestion.word.clone()),
            "t" => return read_line(input),
            _ => {
                println!("Invalid input!");
                print_instructions(candidate_count);
            }
        }
    }
}

/// Look up suggestions for a single word.
fn suggest_word(args: SuggestArgs, cli_args: &RespellArgs) -> Result<()> {
    let config = SuggestConfig {
        max_length_diff: args.max_length_diff,
        min_common_percent: args.min_common_percent,
        max_suggestions: args.max_suggestions(),
    };
    let engine = load_engine(&args.dictionary, config, cli_args)?;

    let valid = engine.is_valid_word(&args.word);
    let suggestions = if args.debug_scores {
        engine.suggest_debug(&args.word)
    } else {
        engine.suggest(&args.word)
    };

    let mut message = if valid {
        format!("'{}' is in the dictionary.", args.word)
    } else {
        format!("'{}' is not in the dictionary.", args.word)
    };
    if suggestions.is_empty() {
        message.push_str("\nNo suggestions.");
    } else {
        message.push_str("\nSuggestions:\n");
        message.push_str(&render_numbered(&suggestions));
    }

    output_result(
        &message,
        &SuggestReport {
            word: args.word,
            valid,
            suggestions,
        },
        cli_args,
    )
}

/// Show statistics about a dictionary file.
fn show_stats(args: StatsArgs, cli_args: &RespellArgs) -> Result<()> {
    let dictionary = Dictionary::load(&args.dictionary)?;
    let stats = DictionaryStats {
        path: args.dictionary.to_string_lossy().to_string(),
        word_count: dictionary.len(),
    };

    output_result(
        &format!("Dictionary {} contains {} words", stats.path, stats.word_count),
        &stats,
        cli_args,
    )
}
