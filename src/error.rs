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

/// A symbol that has no entry in the frequency table for its octave.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no frequency for '{letter}' in octave {octave}")]
pub struct LookupError {
    pub octave: u8,
    pub letter: char,
}

/// Errors raised while reading score text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoreError {
    #[error("Malformed score line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

/// Errors raised while writing instructions out.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that abort a compilation.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("Line {line}, column {column}: {source}")]
    Lookup {
        line: usize,
        column: usize,
        #[source]
        source: LookupError,
    },

    #[error("Unable to write instruction: {0}")]
    Sink(#[from] SinkError),
}
