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

/// A single playback step. Frequencies are in Hz and delays in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Instruction {
    /// Wait before the next instruction.
    Delay(f64),
    /// Play one tone and wait for it to finish.
    PlayOne(f64),
    /// Start two tones together and wait for both to finish.
    PlaySimultaneous(f64, f64),
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Delay(seconds) => write!(f, "delay {}s", seconds),
            Instruction::PlayOne(hz) => write!(f, "play {}Hz", hz),
            Instruction::PlaySimultaneous(a, b) => write!(f, "play {}Hz + {}Hz", a, b),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Instruction;

    #[test]
    fn test_display() {
        assert_eq!("delay 0.004s", Instruction::Delay(0.004).to_string());
        assert_eq!("play 440Hz", Instruction::PlayOne(440.0).to_string());
        assert_eq!(
            "play 311.127Hz + 277.183Hz",
            Instruction::PlaySimultaneous(311.127, 277.183).to_string()
        );
    }
}
