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

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::SinkError;
use crate::instruction::Instruction;

/// The default command used to play a tone.
pub const DEFAULT_TONE_COMMAND: &str = "beep";

/// Something that instructions can be appended to, in order.
pub trait Sink {
    /// Appends an instruction.
    fn append(&mut self, instruction: Instruction) -> Result<(), SinkError>;
}

/// Controls how a shell script is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptOptions {
    /// The command to play a tone. Invoked as `<command> -f <hz>`.
    pub tone_command: String,
    /// Whether the script should echo each command as it runs.
    pub trace: bool,
}

impl Default for ScriptOptions {
    fn default() -> Self {
        ScriptOptions {
            tone_command: DEFAULT_TONE_COMMAND.to_string(),
            trace: true,
        }
    }
}

/// Renders instructions as a bash script.
pub struct ShellScript<W: Write> {
    writer: W,
    options: ScriptOptions,
}

impl ShellScript<BufWriter<File>> {
    /// Creates the script file at the given path, truncating it if it exists.
    pub fn create(path: &Path, options: ScriptOptions) -> Result<Self, SinkError> {
        debug!(path = %path.display(), "Creating script");
        ShellScript::new(BufWriter::new(File::create(path)?), options)
    }
}

impl<W: Write> ShellScript<W> {
    /// Wraps the given writer and writes the script header to it.
    pub fn new(mut writer: W, options: ScriptOptions) -> Result<Self, SinkError> {
        writeln!(writer, "#!/usr/bin/env bash")?;
        if options.trace {
            writeln!(writer, "set -x")?;
        }

        Ok(ShellScript { writer, options })
    }

    /// Flushes the script and hands back the underlying writer.
    pub fn finish(mut self) -> Result<W, SinkError> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> Sink for ShellScript<W> {
    fn append(&mut self, instruction: Instruction) -> Result<(), SinkError> {
        let command = &self.options.tone_command;
        match instruction {
            Instruction::Delay(seconds) => writeln!(self.writer, "sleep {}", seconds)?,
            Instruction::PlayOne(hz) => writeln!(self.writer, "{} -f {}", command, hz)?,
            Instruction::PlaySimultaneous(a, b) => {
                writeln!(self.writer, "{} -f {} &", command, a)?;
                writeln!(self.writer, "{} -f {} &", command, b)?;
                writeln!(self.writer, "wait")?;
            }
        }
        Ok(())
    }
}

/// Keeps instructions in memory.
#[derive(Debug, Default)]
pub struct Recorder {
    instructions: Vec<Instruction>,
}

impl Recorder {
    /// Creates an empty recorder.
    pub fn new() -> Recorder {
        Recorder::default()
    }

    /// Gets the recorded instructions.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Consumes the recorder, returning the recorded instructions.
    pub fn into_instructions(self) -> Vec<Instruction> {
        self.instructions
    }
}

impl Sink for Recorder {
    fn append(&mut self, instruction: Instruction) -> Result<(), SinkError> {
        self.instructions.push(instruction);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use std::fs;
    use std::io::{self, Write};

    use tempfile::tempdir;

    use crate::error::SinkError;
    use crate::instruction::Instruction;

    use super::{Recorder, ScriptOptions, ShellScript, Sink};

    fn render(options: ScriptOptions, instructions: &[Instruction]) -> String {
        let mut script = ShellScript::new(Vec::<u8>::new(), options).unwrap();
        for instruction in instructions {
            script.append(*instruction).unwrap();
        }
        String::from_utf8(script.finish().unwrap()).unwrap()
    }

    #[test]
    fn test_render_script() {
        let script = render(
            ScriptOptions::default(),
            &[
                Instruction::PlaySimultaneous(311.127, 277.183),
                Instruction::Delay(0.002),
                Instruction::PlayOne(440.0),
                Instruction::Delay(3.0 * 0.002),
            ],
        );

        assert_eq!(
            "#!/usr/bin/env bash\n\
             set -x\n\
             beep -f 311.127 &\n\
             beep -f 277.183 &\n\
             wait\n\
             sleep 0.002\n\
             beep -f 440\n\
             sleep 0.006\n",
            script
        );
    }

    #[test]
    fn test_render_options() {
        let script = render(
            ScriptOptions {
                tone_command: "/usr/bin/beep".to_string(),
                trace: false,
            },
            &[Instruction::PlayOne(1975.533)],
        );

        assert_eq!(
            "#!/usr/bin/env bash\n/usr/bin/beep -f 1975.533\n",
            script
        );
    }

    #[test]
    fn test_create_file() {
        let tempdir = tempdir().unwrap();
        let path = tempdir.path().join("script");

        let mut script = ShellScript::create(&path, ScriptOptions::default()).unwrap();
        script.append(Instruction::PlayOne(55.0)).unwrap();
        script.finish().unwrap();

        assert_eq!(
            "#!/usr/bin/env bash\nset -x\nbeep -f 55\n",
            fs::read_to_string(&path).unwrap()
        );
    }

    #[test]
    fn test_create_in_missing_directory() {
        let tempdir = tempdir().unwrap();
        let path = tempdir.path().join("missing").join("script");

        assert!(matches!(
            ShellScript::create(&path, ScriptOptions::default()),
            Err(SinkError::Io(_))
        ));
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure() {
        assert!(matches!(
            ShellScript::new(Broken, ScriptOptions::default()),
            Err(SinkError::Io(_))
        ));
    }

    #[test]
    fn test_recorder() {
        let mut recorder = Recorder::new();
        recorder.append(Instruction::Delay(1.0)).unwrap();
        recorder.append(Instruction::PlayOne(2.0)).unwrap();
        assert_eq!(
            &[Instruction::Delay(1.0), Instruction::PlayOne(2.0)],
            recorder.instructions()
        );
        assert_eq!(2, recorder.into_instructions().len());
    }
}
