//! Command-line interface for replaying grid scripts

use crate::io::configuration::SCRIPT_EXTENSION;
use crate::io::error::{GridError, Result, file_system_error};
use crate::io::script::Session;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "arraygrid")]
#[command(author, version, about = "Replay a grid command script")]
/// Command-line arguments for the script runner
pub struct Cli {
    /// Script file with one grid command per line
    #[arg(value_name = "SCRIPT")]
    pub target: PathBuf,

    /// Suppress warnings and error reports on stderr
    #[arg(short, long)]
    pub quiet: bool,

    /// Report failing commands and continue instead of stopping
    #[arg(short, long)]
    pub keep_going: bool,
}

/// Replays a script file against a fresh session
pub struct ScriptRunner {
    cli: Cli,
    session: Session,
}

impl ScriptRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self {
            cli,
            session: Session::new(),
        }
    }

    /// Session state after the commands replayed so far
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Replay the script, writing command output to stdout
    ///
    /// # Errors
    ///
    /// Returns the first failing command's error unless `--keep-going` is set,
    /// and any error reading the script or writing output
    pub fn process(&mut self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run(&mut out)?;
        out.flush()?;
        Ok(())
    }

    /// Replay the script, writing command output to `out`
    ///
    /// Returns the number of commands that failed and were skipped, which is
    /// always zero without `--keep-going`.
    ///
    /// # Errors
    ///
    /// Returns the first failing command's error unless `--keep-going` is set,
    /// and any error reading the script or writing output
    // Allow print for user feedback on skipped commands
    #[allow(clippy::print_stderr)]
    pub fn run(&mut self, out: &mut impl Write) -> Result<usize> {
        let source = self.read_script()?;
        let mut skipped = 0;

        for (index, line) in source.lines().enumerate() {
            let Err(error) = self.session.run_line(index + 1, line, out) else {
                continue;
            };

            // Output failures are never skipped
            let recoverable =
                self.cli.keep_going && !matches!(error, GridError::FileSystem { .. });
            if !recoverable {
                return Err(error);
            }

            skipped += 1;
            if !self.cli.quiet {
                eprintln!("Skipping line {}: {error}", index + 1);
            }
        }

        Ok(skipped)
    }

    // Allow print for user feedback on unexpected file extensions
    #[allow(clippy::print_stderr)]
    fn read_script(&self) -> Result<String> {
        let path = &self.cli.target;

        if !self.cli.quiet
            && path.extension().and_then(|s| s.to_str()) != Some(SCRIPT_EXTENSION)
        {
            eprintln!(
                "Warning: {} does not have the .{SCRIPT_EXTENSION} extension",
                path.display()
            );
        }

        std::fs::read_to_string(path).map_err(|e| file_system_error(path, "read", e))
    }
}
