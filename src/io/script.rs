//! Line-oriented command language for driving a grid of strings
//!
//! One command per line, blank lines and `#` comments ignored:
//!
//! ```text
//! new 3 3
//! add 0 0 king
//! get 0 0
//! remove 0 0
//! resize 5 5
//! clear
//! show
//! ```

use std::io::Write;

use crate::io::configuration::{COMMENT_PREFIX, EMPTY_CELL_REPORT};
use crate::io::error::{GridError, Result, WithLine, script_error};
use crate::io::render::render;
use crate::spatial::array::ArrayGrid;
use crate::spatial::grid::Grid;

/// A single parsed script command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the current grid with an empty one
    New {
        /// Width of the new grid
        width: i32,
        /// Height of the new grid
        height: i32,
    },
    /// Store a value at a coordinate
    Add {
        /// x-coordinate
        x: i32,
        /// y-coordinate
        y: i32,
        /// Value to store, may contain spaces
        value: String,
    },
    /// Print the value at a coordinate
    Get {
        /// x-coordinate
        x: i32,
        /// y-coordinate
        y: i32,
    },
    /// Empty a coordinate and print whether anything was removed
    Remove {
        /// x-coordinate
        x: i32,
        /// y-coordinate
        y: i32,
    },
    /// Empty every cell
    Clear,
    /// Change the grid dimensions
    Resize {
        /// New width
        width: i32,
        /// New height
        height: i32,
    },
    /// Print the rendered board
    Show,
}

impl Command {
    /// Parse one script line
    ///
    /// Returns `Ok(None)` for blank lines and comments.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Script`] for unknown commands, missing or extra
    /// arguments, and non-integer coordinates
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIX) {
            return Ok(None);
        }

        let mut tokens = trimmed.split_whitespace();
        let Some(keyword) = tokens.next() else {
            return Ok(None);
        };

        let command = match keyword {
            "new" => {
                let (width, height) = parse_pair(&mut tokens)?;
                Self::New { width, height }
            }
            "add" => {
                let (x, y) = parse_pair(&mut tokens)?;
                let value = tokens.collect::<Vec<_>>().join(" ");
                if value.is_empty() {
                    return Err(script_error(&"add requires a value"));
                }
                return Ok(Some(Self::Add { x, y, value }));
            }
            "get" => {
                let (x, y) = parse_pair(&mut tokens)?;
                Self::Get { x, y }
            }
            "remove" => {
                let (x, y) = parse_pair(&mut tokens)?;
                Self::Remove { x, y }
            }
            "clear" => Self::Clear,
            "resize" => {
                let (width, height) = parse_pair(&mut tokens)?;
                Self::Resize { width, height }
            }
            "show" => Self::Show,
            other => return Err(script_error(&format!("unknown command '{other}'"))),
        };

        if let Some(extra) = tokens.next() {
            return Err(script_error(&format!(
                "unexpected argument '{extra}' for '{keyword}'"
            )));
        }

        Ok(Some(command))
    }
}

fn parse_pair<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<(i32, i32)> {
    let first = parse_integer(tokens.next())?;
    let second = parse_integer(tokens.next())?;
    Ok((first, second))
}

fn parse_integer(token: Option<&str>) -> Result<i32> {
    let token = token.ok_or_else(|| script_error(&"missing integer argument"))?;
    token
        .parse::<i32>()
        .map_err(|e| script_error(&format!("invalid integer '{token}': {e}")))
}

/// Grid state carried across script lines
#[derive(Debug, Default)]
pub struct Session {
    grid: Option<ArrayGrid<String>>,
}

impl Session {
    /// Create a session with no grid
    pub const fn new() -> Self {
        Self { grid: None }
    }

    /// Current grid, if one has been created
    pub const fn grid(&self) -> Option<&ArrayGrid<String>> {
        self.grid.as_ref()
    }

    /// Parse and execute one script line
    ///
    /// # Errors
    ///
    /// Returns parse errors and [`GridError::NoGrid`] tagged with
    /// `line_number`, grid errors as raised by the grid, and I/O errors from
    /// writing to `out`
    pub fn run_line(&mut self, line_number: usize, line: &str, out: &mut impl Write) -> Result<()> {
        let Some(command) = Command::parse(line).with_line(line_number)? else {
            return Ok(());
        };
        self.execute(&command, out).with_line(line_number)
    }

    /// Execute a parsed command, writing any report to `out`
    ///
    /// A failed command leaves the session unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::NoGrid`] if no grid exists yet, any error raised
    /// by the grid, and I/O errors from writing to `out`
    pub fn execute(&mut self, command: &Command, out: &mut impl Write) -> Result<()> {
        if let Command::New { width, height } = command {
            self.grid = Some(ArrayGrid::new(*width, *height)?);
            return Ok(());
        }

        let grid = self.grid.as_mut().ok_or(GridError::NoGrid { line: 0 })?;

        match command {
            Command::New { .. } => {}
            Command::Add { x, y, value } => grid.add(*x, *y, value.clone())?,
            Command::Get { x, y } => match grid.get(*x, *y)? {
                Some(value) => writeln!(out, "{value}")?,
                None => writeln!(out, "{EMPTY_CELL_REPORT}")?,
            },
            Command::Remove { x, y } => {
                let removed = grid.remove(*x, *y)?;
                writeln!(out, "{removed}")?;
            }
            Command::Clear => grid.clear(),
            Command::Resize { width, height } => grid.resize(*width, *height)?,
            Command::Show => write!(out, "{}", render::<String, _>(&*grid))?,
        }

        Ok(())
    }
}
