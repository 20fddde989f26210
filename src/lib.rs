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

//! Compiles letter-note piano transcriptions into shell scripts of `beep` calls.
//!
//! A score is a list of line pairs such as:
//!
//! ```text
//! 4|D--D-D--DC-dD--D-D--DC-dD-|
//! 4|-D-D--DC-dD--D-FG--F-GD--D|
//! ```
//!
//! Each line starts with an octave digit, and each character between the pipes is one column
//! of time: a note letter or `-` for a hold. The two lines of a pair are played together.
pub mod compiler;
pub mod config;
pub mod error;
pub mod frequency;
pub mod instruction;
pub mod score;
pub mod sink;

use std::path::Path;

use tracing::info;

use crate::compiler::{Compiler, Summary};
use crate::error::CompileError;
use crate::score::Score;
use crate::sink::{ScriptOptions, ShellScript};

/// Compiles the score into a script file at the given path. The file is closed on every path
/// out of this function, including failures part way through.
pub fn write_script(
    score: &Score,
    compiler: &Compiler,
    options: ScriptOptions,
    path: &Path,
) -> Result<Summary, CompileError> {
    let mut script = ShellScript::create(path, options)?;
    let summary = compiler.compile(score, &mut script)?;
    script.finish()?;

    info!(
        path = %path.display(),
        pairs = summary.pairs,
        skipped = summary.skipped,
        instructions = summary.instructions,
        "Wrote script"
    );
    Ok(summary)
}

#[cfg(test)]
mod test {
    use std::fs;
    use std::time::Duration;

    use tempfile::tempdir;

    use crate::compiler::Compiler;
    use crate::error::CompileError;
    use crate::score::Score;
    use crate::sink::ScriptOptions;

    use super::write_script;

    #[test]
    fn test_write_script() {
        let tempdir = tempdir().unwrap();
        let path = tempdir.path().join("bad-beep");
        let score = Score::parse("4|D-|\n4|C-|\n\n4|B|\n4|--A|\n4|GG-|\n").unwrap();

        let summary = write_script(
            &score,
            &Compiler::new(Duration::from_millis(2)),
            ScriptOptions::default(),
            &path,
        )
        .unwrap();

        assert_eq!(2, summary.pairs);
        assert_eq!(1, summary.skipped);
        assert_eq!(8, summary.instructions);
        assert_eq!(
            "#!/usr/bin/env bash\n\
             set -x\n\
             beep -f 311.127 &\n\
             beep -f 277.183 &\n\
             wait\n\
             sleep 0.002\n\
             sleep 0.002\n\
             sleep 0.004\n\
             beep -f 466.164\n\
             beep -f 415.305\n\
             beep -f 415.305\n\
             sleep 0.002\n",
            fs::read_to_string(&path).unwrap()
        );
    }

    #[test]
    fn test_write_script_overwrites() {
        let tempdir = tempdir().unwrap();
        let path = tempdir.path().join("bad-beep");
        fs::write(&path, "stale contents that are much longer than the new script\n").unwrap();

        let score = Score::parse("4|a|\n").unwrap();
        write_script(
            &score,
            &Compiler::new(Duration::ZERO),
            ScriptOptions {
                tone_command: "beep".to_string(),
                trace: false,
            },
            &path,
        )
        .unwrap();

        assert_eq!(
            "#!/usr/bin/env bash\nbeep -f 440\n",
            fs::read_to_string(&path).unwrap()
        );
    }

    #[test]
    fn test_write_script_lookup_failure() {
        let tempdir = tempdir().unwrap();
        let path = tempdir.path().join("bad-beep");
        let score = Score::parse("4|a|\n4|E|\n").unwrap();

        let result = write_script(&score, &Compiler::default(), ScriptOptions::default(), &path);
        assert!(matches!(result, Err(CompileError::Lookup { line: 2, .. })));
    }

    #[test]
    fn test_write_script_unwritable_path() {
        let tempdir = tempdir().unwrap();
        let path = tempdir.path().join("missing").join("bad-beep");
        let score = Score::parse("4|a|\n").unwrap();

        let result = write_script(&score, &Compiler::default(), ScriptOptions::default(), &path);
        assert!(matches!(result, Err(CompileError::Sink(_))));
    }
}
