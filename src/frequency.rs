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

//! Octave and letter to frequency lookups.
//!
//! Letters follow the piano letter note convention: lowercase letters are the
//! natural notes and uppercase letters are the sharp of the same letter, so `C`
//! is C#. There is no B# or E#, which is why `B` and `E` never resolve.

use crate::error::LookupError;

/// The highest octave present in the table.
pub const MAX_OCTAVE: u8 = 6;

/// The symbol used for a rest or hold in a track body.
pub const HOLD: char = '-';

/// Column order of the frequency table.
const LETTERS: [char; 12] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'A', 'C', 'D', 'F', 'G'];

/// Frequencies in Hz, one row per octave, columns ordered as in `LETTERS`.
const FREQUENCIES: [[f64; 12]; MAX_OCTAVE as usize + 1] = [
    [
        27.5, 30.868, 32.703, 18.354, 20.601, 21.827, 24.499, 29.135, 17.324, 19.445, 23.124,
        25.956,
    ],
    [
        55.0, 61.735, 32.703, 36.708, 41.203, 43.654, 48.999, 58.27, 34.648, 38.891, 46.249,
        51.913,
    ],
    [
        110.0, 123.471, 65.406, 73.416, 82.407, 87.307, 97.999, 116.541, 69.296, 77.782, 92.499,
        103.826,
    ],
    [
        220.0, 246.942, 130.813, 146.832, 164.814, 174.614, 195.998, 233.082, 138.591, 155.563,
        184.997, 207.652,
    ],
    [
        440.0, 493.883, 261.626, 293.665, 329.628, 349.228, 391.995, 466.164, 277.183, 311.127,
        369.994, 415.305,
    ],
    [
        880.0, 987.767, 523.251, 587.33, 659.255, 698.456, 783.991, 932.328, 554.365, 622.254,
        739.911, 830.609,
    ],
    [
        1760.0, 1975.533, 1046.502, 1174.659, 1318.51, 1396.913, 1567.982, 1864.655, 1108.731,
        1244.508, 1479.978, 1661.219,
    ],
];

/// Returns the frequency in Hz of the given letter in the given octave, or `None` if the
/// table has no entry for it. Every octave and character is a valid input.
pub fn frequency(octave: u8, letter: char) -> Option<f64> {
    let row = FREQUENCIES.get(usize::from(octave))?;
    let column = LETTERS.iter().position(|candidate| *candidate == letter)?;
    Some(row[column])
}

/// Resolves the frequency of a letter, failing if the table has no entry for it.
pub fn resolve(octave: u8, letter: char) -> Result<f64, LookupError> {
    frequency(octave, letter).ok_or(LookupError { octave, letter })
}

/// Returns every letter the table knows about.
pub fn letters() -> &'static [char] {
    &LETTERS
}
