use std::{fmt::Display, str::FromStr};

use tracing::{debug, trace};

use crate::{Direction, Error, KeySet, Position};

use paths::KeyPath;

pub mod paths;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileType {
    Open(char),
    Entrance,
    Key(char),
    Door(char),
}

impl TileType {
    /// Walls have no tile, they're left out of vault.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '#' => None,
            '@' => Some(Self::Entrance),
            c if c.is_ascii_lowercase() => Some(Self::Key(c)),
            c if c.is_ascii_uppercase() => Some(Self::Door(c)),
            c => Some(Self::Open(c)),
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            TileType::Open(c) | TileType::Key(c) | TileType::Door(c) => *c,
            TileType::Entrance => '@',
        }
    }

    pub fn key(&self) -> Option<char> {
        if let Self::Key(c) = self {
            Some(*c)
        } else {
            None
        }
    }

    pub fn key_of_door(&self) -> Option<char> {
        if let Self::Door(c) = self {
            Some(c.to_ascii_lowercase())
        } else {
            None
        }
    }

    pub fn is_landmark(&self) -> bool {
        matches!(self, TileType::Entrance | TileType::Key(_))
    }
}

#[derive(Debug, Clone)]
pub struct Cell {
    pos: Position,
    tile: TileType,
    neighbors: Vec<usize>,
    paths: Vec<KeyPath>,
}

impl Cell {
    fn new(pos: Position, tile: TileType) -> Self {
        Self {
            pos,
            tile,
            neighbors: Vec::new(),
            paths: Vec::new(),
        }
    }

    pub fn pos(&self) -> Position {
        self.pos
    }

    pub fn tile(&self) -> TileType {
        self.tile
    }

    pub fn symbol(&self) -> char {
        self.tile.symbol()
    }

    /// Indices of orthogonally adjacent cells which aren't walls.
    pub fn neighbors(&self) -> &[usize] {
        &self.neighbors
    }

    /// Shortest paths to reachable keys, only landmarks have them.
    pub fn paths(&self) -> &[KeyPath] {
        &self.paths
    }
}

#[derive(Debug)]
pub struct Vault {
    cells: Vec<Option<Cell>>,
    row_n: usize,
    col_n: usize,
    all_keys: KeySet,
    entrances: Vec<usize>,
}

impl Display for Vault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.symbol_rows().iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", row.iter().collect::<String>())?;
        }

        Ok(())
    }
}

impl FromStr for Vault {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut builder = VaultBuilder::new();
        for line in s.lines() {
            builder.add_row(line)?;
        }

        builder.build()
    }
}

impl Vault {
    pub fn row_n(&self) -> usize {
        self.row_n
    }

    pub fn col_n(&self) -> usize {
        self.col_n
    }

    /// Every key present in vault, collecting all of them completes the search.
    pub fn all_keys(&self) -> KeySet {
        self.all_keys
    }

    /// Indices of entrances in row-major order, which is also the order of collectors.
    pub fn entrances(&self) -> &[usize] {
        &self.entrances
    }

    pub fn entrance_n(&self) -> usize {
        self.entrances.len()
    }

    pub fn cell(&self, ind: usize) -> Option<&Cell> {
        self.cells.get(ind).and_then(Option::as_ref)
    }

    pub fn cell_at(&self, pos: &Position) -> Option<&Cell> {
        self.pos_to_ind(pos).and_then(|ind| self.cell(ind))
    }

    pub fn pos_to_ind(&self, pos: &Position) -> Option<usize> {
        if pos.r() < self.row_n && pos.c() < self.col_n {
            Some(pos.r() * self.col_n + pos.c())
        } else {
            None
        }
    }

    pub fn landmarks(&self) -> impl Iterator<Item = usize> + '_ {
        landmark_inds(&self.cells)
    }

    pub fn paths_from(&self, ind: usize) -> &[KeyPath] {
        self.cell(ind).map(|cell| cell.paths()).unwrap_or(&[])
    }

    /// Wall up the only entrance and its orthogonal neighbors, and put entrances on its diagonal neighbors.
    pub fn split_entrance(&self) -> Result<Vault, Error> {
        if self.entrance_n() != 1 {
            return Err(Error::MultipleEntrances(self.entrance_n()));
        }

        let entrance_pos = self.cells[self.entrances[0]]
            .as_ref()
            .map(|cell| cell.pos)
            .ok_or(Error::NoEntrance)?;
        let mut rewrites = vec![(Some(entrance_pos), '#')];
        for dir in Direction::all_dirs() {
            let side_pos = entrance_pos.neighbor(*dir);
            let corner_pos = side_pos.and_then(|pos| pos.neighbor(dir.turn_clockwise()));
            rewrites.push((side_pos, '#'));
            rewrites.push((corner_pos, '@'));
        }

        let mut rows = self.symbol_rows();
        for (pos, symbol) in rewrites {
            let pos = pos.ok_or(Error::EntranceNotSplittable(entrance_pos))?;
            match self.cell_at(&pos).map(|cell| cell.tile) {
                Some(TileType::Open(_)) | Some(TileType::Entrance) => {
                    rows[pos.r()][pos.c()] = symbol
                }
                _ => return Err(Error::EntranceNotSplittable(entrance_pos)),
            }
        }

        let mut builder = VaultBuilder::new();
        for row in rows {
            builder.add_row(row.into_iter().collect::<String>().as_str())?;
        }

        builder.build()
    }

    fn symbol_rows(&self) -> Vec<Vec<char>> {
        self.cells
            .chunks(self.col_n.max(1))
            .map(|row| {
                row.iter()
                    .map(|cell| cell.as_ref().map(|cell| cell.symbol()).unwrap_or('#'))
                    .collect()
            })
            .collect()
    }
}

fn landmark_inds(cells: &[Option<Cell>]) -> impl Iterator<Item = usize> + '_ {
    cells
        .iter()
        .enumerate()
        .filter(|(_, cell)| matches!(cell, Some(cell) if cell.tile.is_landmark()))
        .map(|(ind, _)| ind)
}

#[derive(Debug)]
pub struct VaultBuilder {
    cells: Vec<Option<Cell>>,
    row_n: usize,
    col_n: Option<usize>,
    all_keys: KeySet,
    entrances: Vec<usize>,
}

impl Default for VaultBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl VaultBuilder {
    pub fn new() -> Self {
        Self {
            cells: Vec::new(),
            row_n: 0,
            col_n: None,
            all_keys: KeySet::new(),
            entrances: Vec::new(),
        }
    }

    pub fn add_row(&mut self, text: &str) -> Result<(), Error> {
        let text = text.trim_end_matches('\r');
        if text.is_empty() {
            return Ok(());
        }

        let this_col_n = text.chars().count();
        let col_n = *self.col_n.get_or_insert(this_col_n);
        if col_n != this_col_n {
            return Err(Error::InconsistentRow(col_n, this_col_n));
        }

        for (c, symbol) in text.chars().enumerate() {
            let pos = Position::new(self.row_n, c);
            self.place(TileType::from_symbol(symbol).map(|tile| Cell::new(pos, tile)), col_n);
        }
        self.row_n += 1;

        Ok(())
    }

    pub fn build(mut self) -> Result<Vault, Error> {
        if self.row_n == 0 {
            return Err(Error::EmptyVault);
        }
        if self.entrances.is_empty() {
            return Err(Error::NoEntrance);
        }

        let landmark_paths = landmark_inds(&self.cells)
            .map(|ind| (ind, paths::bfs_for_keys(&self.cells, ind)))
            .collect::<Vec<_>>();
        for (ind, paths) in landmark_paths {
            if let Some(cell) = self.cells[ind].as_mut() {
                trace!("{} paths to keys from {:?} at {}", paths.len(), cell.tile, cell.pos);
                cell.paths = paths;
            }
        }

        debug!(
            "Built vault of {}x{} with {} entrance(s) and keys {}.",
            self.row_n,
            self.col_n.unwrap_or(0),
            self.entrances.len(),
            self.all_keys
        );

        Ok(Vault {
            cells: self.cells,
            row_n: self.row_n,
            col_n: self.col_n.unwrap_or(0),
            all_keys: self.all_keys,
            entrances: self.entrances,
        })
    }

    fn place(&mut self, cell: Option<Cell>, col_n: usize) {
        let ind = self.cells.len();
        let Some(cell) = cell else {
            self.cells.push(None);
            return;
        };

        match cell.tile {
            TileType::Entrance => self.entrances.push(ind),
            TileType::Key(key) => self.all_keys = self.all_keys.with(key),
            _ => (),
        }
        self.cells.push(Some(cell));

        // Placed row by row, so only the neighbors above and to the left can exist yet.
        let up_ind = ind.checked_sub(col_n);
        let left_ind = if ind % col_n > 0 { Some(ind - 1) } else { None };
        for neighbor_ind in [up_ind, left_ind].into_iter().flatten() {
            self.join(ind, neighbor_ind);
        }
    }

    fn join(&mut self, ind: usize, other_ind: usize) {
        if let Some(other) = self.cells[other_ind].as_mut() {
            other.neighbors.push(ind);
        } else {
            return;
        }

        if let Some(cell) = self.cells[ind].as_mut() {
            cell.neighbors.push(other_ind);
        }
    }
}
