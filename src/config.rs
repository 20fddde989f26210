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

use std::path::Path;
use std::time::Duration;

use config::{Config, File};
use duration_string::DurationString;
use serde::Deserialize;

use crate::compiler::DEFAULT_DASH_DELAY;
use crate::sink::{ScriptOptions, DEFAULT_TONE_COMMAND};

pub mod error;

pub use error::ConfigError;

/// A YAML representation of the compiler settings. Every field is optional.
#[derive(Deserialize, Clone, Default)]
pub struct Settings {
    /// How long each hold column lasts, e.g. "2ms". "0ms" drops all delays.
    dash_delay: Option<String>,

    /// The command used to play a tone (default: beep).
    tone_command: Option<String>,

    /// Whether the generated script echoes its commands (default: true).
    trace: Option<bool>,
}

impl Settings {
    /// Parse settings from a configuration file.
    pub fn deserialize(path: &Path) -> Result<Settings, ConfigError> {
        Ok(Config::builder()
            .add_source(File::from(path))
            .build()?
            .try_deserialize::<Settings>()?)
    }

    /// Returns the delay per hold column.
    pub fn dash_delay(&self) -> Result<Duration, ConfigError> {
        match &self.dash_delay {
            Some(dash_delay) => Ok(DurationString::from_string(dash_delay.clone())
                .map_err(|e| ConfigError::DashDelay {
                    value: dash_delay.clone(),
                    reason: e.to_string(),
                })?
                .into()),
            None => Ok(DEFAULT_DASH_DELAY),
        }
    }

    /// Returns the command used to play a tone.
    pub fn tone_command(&self) -> &str {
        self.tone_command.as_deref().unwrap_or(DEFAULT_TONE_COMMAND)
    }

    /// Returns whether the script echoes its commands.
    pub fn trace(&self) -> bool {
        self.trace.unwrap_or(true)
    }

    /// Returns the rendering options for the generated script.
    pub fn script_options(&self) -> Result<ScriptOptions, ConfigError> {
        let tone_command = self.tone_command().trim();
        if tone_command.is_empty() {
            return Err(ConfigError::EmptyToneCommand);
        }

        Ok(ScriptOptions {
            tone_command: tone_command.to_string(),
            trace: self.trace(),
        })
    }
}
