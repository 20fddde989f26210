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

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use beepscore::compiler::Compiler;
use beepscore::config::Settings;
use beepscore::score::Score;
use clap::{crate_version, Parser};
use tracing::info;

const DEFAULT_OUTPUT: &str = "bad-beep";

#[derive(Parser)]
#[clap(
    author = "Michael Wilson",
    version = crate_version!(),
    about = "Compiles a letter-note score into a script of beep commands."
)]
struct Cli {
    /// The path to write the script to.
    #[arg(default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
    /// A YAML file with the dash delay, tone command and tracing settings.
    #[arg[short, long]]
    config: Option<PathBuf>,
    /// Reads the score from this file instead of the built-in one.
    #[arg[short, long]]
    score: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::deserialize(path)?,
        None => Settings::default(),
    };
    let compiler = Compiler::new(settings.dash_delay()?);
    let options = settings.script_options()?;

    let score = match &cli.score {
        Some(path) => {
            info!(path = %path.display(), "Reading score");
            Score::parse(&fs::read_to_string(path)?)?
        }
        None => Score::bad_apple()?,
    };

    beepscore::write_script(&score, &compiler, options, &cli.output)?;

    Ok(())
}
