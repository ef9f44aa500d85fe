use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

pub mod keyset;
pub mod search;
pub mod vault;

pub use keyset::KeySet;
pub use search::{min_collect_steps_n, CollectorState, KeyCollector};
pub use vault::{paths::KeyPath, Cell, TileType, Vault, VaultBuilder};

#[derive(Debug)]
pub enum Error {
    InconsistentRow(usize, usize),
    EmptyVault,
    NoEntrance,
    MultipleEntrances(usize),
    EntranceNotSplittable(Position),
    UnreachableKeys(KeySet),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InconsistentRow(expect_col_n, this_col_n) => write!(
                f,
                "Expect {} column(s) in each row, given {}.",
                expect_col_n, this_col_n
            ),
            Error::EmptyVault => write!(f, "No rows in given vault."),
            Error::NoEntrance => write!(f, "No entrance in vault."),
            Error::MultipleEntrances(entrance_n) => write!(
                f,
                "Expect only one entrance to split, given {}.",
                entrance_n
            ),
            Error::EntranceNotSplittable(pos) => write!(
                f,
                "Entrance at {} isn't surrounded by open floor, can't split it.",
                pos
            ),
            Error::UnreachableKeys(keys) => write!(
                f,
                "There're no moves can collect all keys{} in vault.",
                keys
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    /// Vault map to read, standard input is used if not given.
    pub input_path: Option<PathBuf>,
    /// Replace the area around the only entrance with four entrances before searching.
    #[arg(long)]
    pub split_entrance: bool,
    /// Log more details on standard error, repeat for even more.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub fn all_dirs() -> &'static [Direction] {
        static ALL_DIRECTIONS: [Direction; 4] = [
            Direction::North,
            Direction::East,
            Direction::South,
            Direction::West,
        ];

        &ALL_DIRECTIONS
    }

    pub fn turn_clockwise(&self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    r: usize,
    c: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }

    pub fn r(&self) -> usize {
        self.r
    }

    pub fn c(&self) -> usize {
        self.c
    }

    pub fn neighbor(&self, dir: Direction) -> Option<Self> {
        match dir {
            Direction::North if self.r > 0 => Some(Self::new(self.r - 1, self.c)),
            Direction::East => Some(Self::new(self.r, self.c + 1)),
            Direction::South => Some(Self::new(self.r + 1, self.c)),
            Direction::West if self.c > 0 => Some(Self::new(self.r, self.c - 1)),
            _ => None,
        }
    }
}

pub fn read_vault<P: AsRef<Path>>(path: P) -> Result<Vault> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    read_vault_from(
        BufReader::new(file),
        &format!("given file({})", path.as_ref().display()),
    )
}

/// Read vault from any buffered reader, `source` only shows up in error messages.
pub fn read_vault_from<R: BufRead>(reader: R, source: &str) -> Result<Vault> {
    let mut builder = VaultBuilder::new();
    for (ind, line) in reader.lines().enumerate() {
        let line =
            line.with_context(|| format!("Failed to read line {} in {}.", ind + 1, source))?;
        builder
            .add_row(line.as_str())
            .with_context(|| format!("Failed to parse line {} in {}.", ind + 1, source))?;
    }

    Ok(builder.build()?)
}
