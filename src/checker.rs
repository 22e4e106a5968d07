//! Streaming spell-check session over a text file.
//!
//! A [`SpellChecker`] reads an input file token by token, copies valid
//! words straight to the corrected output file, and pauses on each
//! flagged word until the caller supplies a correction. The caller (the
//! interactive CLI, or a test harness) drives the loop:
//! [`next_error`](SpellChecker::next_error) until it returns `None`, then
//! [`finish`](SpellChecker::finish).

use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Lines, Write};
use std::path::{Path, PathBuf};

use crate::error::{RespellError, Result};
use crate::spelling::suggest::{Suggestion, SuggestionEngine};

/// Derive the corrected-output path for an input file: `notes.txt`
/// becomes `notes_chk.txt`. Names without an extension (including
/// dotfiles such as `.notes`) get a plain `_chk` suffix.
pub fn output_path<P: AsRef<Path>>(input: P) -> PathBuf {
    let input = input.as_ref();
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut name = format!("{stem}_chk");
    if let Some(ext) = input.extension() {
        name.push('.');
        name.push_str(&ext.to_string_lossy());
    }
    input.with_file_name(name)
}

/// A spell-check session bound to one input file and its derived output
/// file. Tokens are whitespace-delimited; corrected lines are written
/// space-joined with a trailing newline, and blank input lines are
/// preserved as empty output lines.
pub struct SpellChecker {
    engine: SuggestionEngine,
    lines: Lines<BufReader<File>>,
    current: VecDeque<String>,
    pending: bool,
    writer: BufWriter<File>,
}

impl SpellChecker {
    /// Open a session: the input for reading and the derived output path
    /// for writing.
    pub fn new<P: AsRef<Path>>(engine: SuggestionEngine, input: P) -> Result<Self> {
        let input = input.as_ref();
        let reader = BufReader::new(File::open(input)?);
        let writer = BufWriter::new(File::create(output_path(input))?);

        Ok(SpellChecker {
            engine,
            lines: reader.lines(),
            current: VecDeque::new(),
            pending: false,
            writer,
        })
    }

    /// Get the suggestion engine driving this session.
    pub fn engine(&self) -> &SuggestionEngine {
        &self.engine
    }

    /// Write one token with its separator: a space when more tokens
    /// remain on the current line, a newline otherwise. Empty words are
    /// skipped, closing the line if they fell at its end.
    fn write_word(&mut self, word: &str) -> Result<()> {
        if word.is_empty() {
            if self.current.is_empty() {
                self.writer.write_all(b"\n")?;
            }
            return Ok(());
        }
        self.writer.write_all(word.as_bytes())?;
        if self.current.is_empty() {
            self.writer.write_all(b"\n")?;
        } else {
            self.writer.write_all(b" ")?;
        }
        Ok(())
    }

    /// Advance to the next flagged word, copying valid tokens through to
    /// the output. Returns `None` once the whole input has been written.
    ///
    /// After a `Some` result the session is suspended until
    /// [`set_correction`](Self::set_correction) is called.
    pub fn next_error(&mut self) -> Result<Option<Suggestion>> {
        if self.pending {
            return Err(RespellError::invalid_operation(
                "a flagged word is still awaiting its correction",
            ));
        }
        loop {
            while let Some(token) = self.current.pop_front() {
                if self.engine.is_valid_word(&token) {
                    self.write_word(&token)?;
                } else {
                    let candidates = self.engine.suggest(&token);
                    self.pending = true;
                    return Ok(Some(Suggestion::new(token, candidates)));
                }
            }
            match self.lines.next() {
                Some(line) => {
                    let line = line?;
                    self.current = line.split_whitespace().map(str::to_owned).collect();
                    if self.current.is_empty() {
                        // Blank (or whitespace-only) line: keep it as an
                        // empty output line.
                        self.writer.write_all(b"\n")?;
                    }
                }
                None => return Ok(None),
            }
        }
    }

    /// Write the chosen correction for the most recently flagged word and
    /// resume the session.
    pub fn set_correction(&mut self, word: &str) -> Result<()> {
        if !self.pending {
            return Err(RespellError::invalid_operation(
                "no flagged word is awaiting a correction",
            ));
        }
        self.pending = false;
        self.write_word(word)
    }

    /// Flush the corrected output file. Call once
    /// [`next_error`](Self::next_error) has returned `None`.
    pub fn finish(mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_with_extension() {
        assert_eq!(
            output_path(Path::new("notes.txt")),
            PathBuf::from("notes_chk.txt")
        );
        assert_eq!(
            output_path(Path::new("dir/sub/essay.md")),
            PathBuf::from("dir/sub/essay_chk.md")
        );
    }

    #[test]
    fn test_output_path_without_extension() {
        assert_eq!(output_path(Path::new("notes")), PathBuf::from("notes_chk"));
    }

    #[test]
    fn test_output_path_for_dotfile() {
        // A leading dot is part of the name, not an extension separator.
        assert_eq!(
            output_path(Path::new(".notes")),
            PathBuf::from(".notes_chk")
        );
    }

    #[test]
    fn test_output_path_keeps_only_last_extension() {
        assert_eq!(
            output_path(Path::new("archive.tar.gz")),
            PathBuf::from("archive.tar_chk.gz")
        );
    }
}
