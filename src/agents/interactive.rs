//! Human-controlled seat.
//!
//! Moves arrive as text lines from an [`InputSource`]. Each line is parsed
//! strictly into two bounded integers and checked against the available
//! moves; anything else is rejected and the source is asked again.

use std::io::{self, BufRead, Write};

use crate::core::{Board, Coord, Player, SIZE};
use crate::error::{InputError, PlayError};

use super::traits::Agent;

/// Prompt shown before every read.
pub const PROMPT: &str = "Enter action (row, col): ";

/// Where interactive moves come from.
pub trait InputSource {
    /// Next raw line, or `None` once the source is exhausted.
    fn next_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Called once per rejected line.
    fn reject(&mut self, _error: &InputError) {}
}

/// Line-oriented source over any reader, echoing prompts and rejections to a
/// writer.
pub struct LineInput<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consume the source, returning the writer (for inspecting output).
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl LineInput<io::StdinLock<'static>, io::Stdout> {
    /// Read from standard input, prompting on standard output.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> InputSource for LineInput<R, W> {
    fn next_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn reject(&mut self, error: &InputError) {
        // Prompt output is best-effort; a broken writer surfaces on the next read.
        let _ = writeln!(self.writer, "{error}");
    }
}

/// Parse `row, col` into a coordinate on the board.
///
/// Accepts two unsigned integers separated by a comma and/or whitespace,
/// optionally wrapped in `()` or `[]`.
pub fn parse_coord(input: &str) -> Result<Coord, InputError> {
    let trimmed = input.trim();
    let inner = trimmed
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .or_else(|| trimmed.strip_prefix('[').and_then(|s| s.strip_suffix(']')))
        .unwrap_or(trimmed);

    let parts: Vec<&str> = inner
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();

    let &[row, col] = parts.as_slice() else {
        return Err(InputError::Parse(trimmed.to_string()));
    };

    let parse = |s: &str| {
        s.parse::<usize>()
            .map_err(|_| InputError::Parse(trimmed.to_string()))
    };
    let (row, col) = (parse(row)?, parse(col)?);

    if row >= SIZE || col >= SIZE {
        return Err(InputError::OutOfRange { row, col });
    }
    Ok(Coord::new(row, col))
}

/// Seat driven by an external input source. Has no learning state.
pub struct InteractiveAgent<S> {
    name: String,
    source: S,
}

impl<S: InputSource> InteractiveAgent<S> {
    pub fn new(name: impl Into<String>, source: S) -> Self {
        Self {
            name: name.into(),
            source,
        }
    }

    /// Consume the agent, returning its input source.
    pub fn into_source(self) -> S {
        self.source
    }

    fn validate(line: &str, moves: &[Coord]) -> Result<Coord, InputError> {
        let coord = parse_coord(line)?;
        if moves.contains(&coord) {
            Ok(coord)
        } else {
            Err(InputError::Unavailable(coord))
        }
    }
}

impl<S: InputSource> Agent for InteractiveAgent<S> {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_action(
        &mut self,
        moves: &[Coord],
        _board: &Board,
        _symbol: Player,
    ) -> Result<Coord, PlayError> {
        if moves.is_empty() {
            return Err(PlayError::NoAvailableMoves);
        }

        loop {
            let Some(line) = self.source.next_line(PROMPT)? else {
                return Err(PlayError::InputClosed);
            };
            match Self::validate(&line, moves) {
                Ok(coord) => return Ok(coord),
                Err(err) => {
                    log::warn!("{}: rejected input: {err}", self.name);
                    self.source.reject(&err);
                }
            }
        }
    }
}
