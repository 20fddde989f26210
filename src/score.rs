// Copyright (C) 2026 Michael Wilson <mike@mdwn.dev>
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, version 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//

use std::fmt;

use crate::error::ScoreError;
use crate::frequency::HOLD;

/// The built-in transcription of "Bad Apple!!".
pub const BAD_APPLE: &str = include_str!("../assets/bad-apple.score");

/// A single row of a score: an octave and one symbol per column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    /// The 1-based line the track was read from. Missing lines keep the number they would have.
    line: usize,
    octave: u8,
    symbols: Vec<char>,
}

impl Track {
    /// Creates a new track.
    pub fn new(line: usize, octave: u8, body: &str) -> Track {
        Track {
            line,
            octave,
            symbols: body.chars().collect(),
        }
    }

    /// A track with no columns.
    pub fn empty(line: usize) -> Track {
        Track {
            line,
            octave: 0,
            symbols: Vec::new(),
        }
    }

    /// Parses a `<octave>|<body>|` line.
    fn parse(line: usize, text: &str) -> Result<Track, ScoreError> {
        let malformed = |reason: &str| ScoreError::Malformed {
            line,
            reason: reason.to_string(),
        };

        let text = text.trim_end();
        let mut chars = text.chars();
        let octave = chars
            .next()
            .and_then(|c| c.to_digit(10))
            .ok_or_else(|| malformed("expected an octave digit at the start of the line"))?;
        let rest = chars.as_str();
        let Some(rest) = rest.strip_prefix('|') else {
            return Err(malformed("expected '|' after the octave digit"));
        };
        let Some(body) = rest.strip_suffix('|') else {
            return Err(malformed("expected the line to end with '|'"));
        };

        // to_digit(10) never exceeds 9.
        Ok(Track::new(line, octave as u8, body))
    }

    /// Gets the line number the track came from.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Gets the octave of the track.
    pub fn octave(&self) -> u8 {
        self.octave
    }

    /// Gets the number of columns in the track.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns true if the track has no columns.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Gets the symbol at the given column.
    pub fn symbol(&self, column: usize) -> Option<char> {
        self.symbols.get(column).copied()
    }

    /// Gets the symbol at the given column if it is a note rather than a hold.
    pub fn note(&self, column: usize) -> Option<char> {
        self.symbol(column).filter(|symbol| *symbol != HOLD)
    }

    /// Counts the consecutive holds starting at the given column.
    pub fn hold_run(&self, column: usize) -> usize {
        self.symbols
            .iter()
            .skip(column)
            .take_while(|symbol| **symbol == HOLD)
            .count()
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|", self.octave)?;
        for symbol in self.symbols.iter() {
            write!(f, "{}", symbol)?;
        }
        write!(f, "|")
    }
}

/// Two tracks covering the same span of time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    lead: Track,
    follow: Track,
}

impl Pair {
    /// Creates a new pair.
    pub fn new(lead: Track, follow: Track) -> Pair {
        Pair { lead, follow }
    }

    /// Gets the first track of the pair.
    pub fn lead(&self) -> &Track {
        &self.lead
    }

    /// Gets the second track of the pair.
    pub fn follow(&self) -> &Track {
        &self.follow
    }
}

/// A parsed score.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Score {
    pairs: Vec<Pair>,
    skipped: usize,
}

impl Score {
    /// Parses score text. Lines are paired up in document order. A pair whose first line is
    /// blank is skipped without looking at its second line. A missing or blank second line
    /// is an empty track.
    pub fn parse(text: &str) -> Result<Score, ScoreError> {
        let lines: Vec<&str> = text.lines().collect();
        let mut score = Score::default();

        for (index, chunk) in lines.chunks(2).enumerate() {
            let lead_line = index * 2 + 1;
            let follow_line = lead_line + 1;

            if chunk[0].trim().is_empty() {
                score.skipped += 1;
                continue;
            }

            let lead = Track::parse(lead_line, chunk[0])?;
            let follow = match chunk.get(1) {
                Some(text) if !text.trim().is_empty() => Track::parse(follow_line, text)?,
                _ => Track::empty(follow_line),
            };
            score.pairs.push(Pair::new(lead, follow));
        }

        Ok(score)
    }

    /// Parses the built-in score.
    pub fn bad_apple() -> Result<Score, ScoreError> {
        Score::parse(BAD_APPLE)
    }

    /// Gets the pairs that will be compiled.
    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    /// Gets the number of pairs that were skipped because their first line was blank.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}
