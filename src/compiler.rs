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

use std::time::Duration;

use tracing::{debug, trace};

use crate::error::CompileError;
use crate::frequency;
use crate::instruction::Instruction;
use crate::score::{Pair, Score, Track};
use crate::sink::Sink;


/// The delay per hold column used when nothing else is configured.
pub const DEFAULT_DASH_DELAY: Duration = Duration::from_millis(2);

/// Totals for a finished compilation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Pairs that were walked.
    pub pairs: usize,
    /// Pairs skipped because their first line was blank.
    pub skipped: usize,
    /// Instructions handed to the sink.
    pub instructions: usize,
}

/// Turns a score into a stream of instructions.
///
/// Each pair is walked in two passes. The lead pass walks the first track and plays any note
/// in the second track that shares a column with a lead note at the same time. The follow pass
/// then walks the second track and plays the notes the lead pass did not, which are the ones
/// sitting under a lead hold or past the end of the lead track. Hold runs in either track
/// become a single delay.
pub struct Compiler {
    /// Seconds per hold column.
    dash_unit: f64,
}

impl Compiler {
    /// Creates a compiler with the given delay per hold column. A zero delay drops all delays.
    pub fn new(dash_delay: Duration) -> Compiler {
        Compiler {
            dash_unit: dash_delay.as_secs_f64(),
        }
    }

    /// Compiles the score into the sink. The first failure stops the compilation; whatever was
    /// already appended stays in the sink.
    pub fn compile(&self, score: &Score, sink: &mut dyn Sink) -> Result<Summary, CompileError> {
        let mut emitter = Emitter { sink, emitted: 0 };

        for pair in score.pairs() {
            let before = emitter.emitted;
            self.lead_pass(pair, &mut emitter)?;
            self.follow_pass(pair, &mut emitter)?;
            debug!(
                line = pair.lead().line(),
                instructions = emitter.emitted - before,
                "Compiled pair"
            );
        }

        if score.skipped() > 0 {
            debug!(skipped = score.skipped(), "Skipped pairs with a blank first line");
        }

        Ok(Summary {
            pairs: score.pairs().len(),
            skipped: score.skipped(),
            instructions: emitter.emitted,
        })
    }

    fn lead_pass(&self, pair: &Pair, emitter: &mut Emitter<'_>) -> Result<(), CompileError> {
        let (lead, follow) = (pair.lead(), pair.follow());
        let mut column = 0;

        while column < lead.len() {
            let Some(letter) = lead.note(column) else {
                let run = lead.hold_run(column);
                self.delay(run, emitter)?;
                column += run;
                continue;
            };

            let lead_hz = resolve(lead, column, letter)?;
            let instruction = match follow.note(column) {
                Some(other) => {
                    Instruction::PlaySimultaneous(lead_hz, resolve(follow, column, other)?)
                }
                None => Instruction::PlayOne(lead_hz),
            };
            emitter.emit(instruction)?;
            column += 1;
        }

        Ok(())
    }

    fn follow_pass(&self, pair: &Pair, emitter: &mut Emitter<'_>) -> Result<(), CompileError> {
        let (lead, follow) = (pair.lead(), pair.follow());
        let mut column = 0;

        while column < follow.len() {
            let Some(letter) = follow.note(column) else {
                let run = follow.hold_run(column);
                self.delay(run, emitter)?;
                column += run;
                continue;
            };

            // Lead notes in this column were already played together with this one.
            if lead.note(column).is_none() {
                emitter.emit(Instruction::PlayOne(resolve(follow, column, letter)?))?;
            }
            column += 1;
        }

        Ok(())
    }

    fn delay(&self, run: usize, emitter: &mut Emitter<'_>) -> Result<(), CompileError> {
        if self.dash_unit > 0.0 {
            emitter.emit(Instruction::Delay(run as f64 * self.dash_unit))?;
        }
        Ok(())
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Compiler::new(DEFAULT_DASH_DELAY)
    }
}

/// Counts what goes into the sink.
struct Emitter<'a> {
    sink: &'a mut dyn Sink,
    emitted: usize,
}

impl Emitter<'_> {
    fn emit(&mut self, instruction: Instruction) -> Result<(), CompileError> {
        trace!(%instruction, "Emitting");
        self.sink.append(instruction)?;
        self.emitted += 1;
        Ok(())
    }
}

/// Resolves a note read from the given column of the track.
fn resolve(track: &Track, column: usize, letter: char) -> Result<f64, CompileError> {
    frequency::resolve(track.octave(), letter).map_err(|source| CompileError::Lookup {
        line: track.line(),
        column: column + 1,
        source,
    })
}
