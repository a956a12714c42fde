/*
grid.rs

Copyright 2025 Hervé Quatremain

This file is part of Mazegen.

Mazegen is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Mazegen is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Mazegen. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Rectangular grid of cells.
//!
//! The grid is an arena: cells are stored row by row in a vector and reference each other by
//! their index, a [`CellId`].
//! The links between grid-adjacent cells are created with the grid and never change.
//! Each cell can receive one occupant, the corridor section that covers it.

use log::{Level, debug, log_enabled};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::corridors::SectionId;
use super::maze_error::MazeError;
use super::orientation::Orientation;

/// Index of a cell in the grid.
pub type CellId = usize;

/// Grid cell.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Index of the cell in the grid.
    pub id: CellId,

    /// Row, from 0 at the top.
    pub row: usize,

    /// Column, from 0 on the left.
    pub column: usize,

    /// Grid-adjacent cells, indexed by [`Orientation::slot`].
    neighbors: [Option<CellId>; 4],

    /// Section that covers the cell.
    occupant: Option<SectionId>,

    /// Whether the player went through the cell. The generator does not use this flag.
    visited: bool,
}

impl Cell {
    fn new(id: CellId, row: usize, column: usize) -> Self {
        Self {
            id,
            row,
            column,
            neighbors: [None; 4],
            occupant: None,
            visited: false,
        }
    }

    /// Whether no section covers the cell yet.
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    /// Return the section that covers the cell.
    pub fn occupant(&self) -> Option<SectionId> {
        self.occupant
    }

    /// Return the grid-adjacent cell in the given orientation.
    pub fn neighbor(&self, orientation: Orientation) -> Option<CellId> {
        self.neighbors[orientation.slot()]
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }
}

/// Represent the grid.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Grid {
    /// Number of columns.
    width: usize,

    /// Number of rows.
    height: usize,

    /// Cells, row by row.
    cells: Vec<Cell>,

    /// Number of cells with an occupant. Speeds up [`Grid::is_full`].
    num_occupied: usize,
}

impl Grid {
    /// Create a [`Grid`] object with `width` columns and `height` rows.
    ///
    /// Each new cell is linked to the cells already created at its north and at its west.
    ///
    /// # Errors
    ///
    /// The method returns [`MazeError::InvalidSize`] if a dimension is zero.
    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidSize { width, height });
        }

        let mut grid: Grid = Self {
            width,
            height,
            cells: Vec::with_capacity(width * height),
            num_occupied: 0,
        };
        for row in 0..height {
            for column in 0..width {
                let id: CellId = grid.cells.len();
                grid.cells.push(Cell::new(id, row, column));
                if column > 0 {
                    grid.link(id, Orientation::West, id - 1)?;
                }
                if row > 0 {
                    grid.link(id, Orientation::North, id - width)?;
                }
            }
        }
        debug!("Grid created: width = {width}  height = {height}");
        Ok(grid)
    }

    /// Link two grid-adjacent cells in both directions.
    fn link(
        &mut self,
        cell_id: CellId,
        orientation: Orientation,
        neighbor_id: CellId,
    ) -> Result<(), MazeError> {
        let slot: usize = orientation.slot();
        let back_slot: usize = orientation.opposite().slot();

        if self.cells[cell_id].neighbors[slot].is_some()
            || self.cells[neighbor_id].neighbors[back_slot].is_some()
        {
            let cell: &Cell = &self.cells[cell_id];
            return Err(MazeError::TopologyConflict {
                row: cell.row,
                column: cell.column,
                orientation,
            });
        }
        self.cells[cell_id].neighbors[slot] = Some(neighbor_id);
        self.cells[neighbor_id].neighbors[back_slot] = Some(cell_id);
        Ok(())
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// A grid always has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Return the index of the cell at the given coordinates.
    ///
    /// # Errors
    ///
    /// The method returns [`MazeError::CellNotFound`] if the coordinates are outside the grid.
    pub fn cell_id(&self, row: usize, column: usize) -> Result<CellId, MazeError> {
        if row >= self.height || column >= self.width {
            return Err(MazeError::CellNotFound { row, column });
        }
        Ok(row * self.width + column)
    }

    /// Return the cell at the given coordinates.
    ///
    /// # Errors
    ///
    /// The method returns [`MazeError::CellNotFound`] if the coordinates are outside the grid.
    pub fn cell(&self, row: usize, column: usize) -> Result<&Cell, MazeError> {
        let id: CellId = self.cell_id(row, column)?;
        Ok(&self.cells[id])
    }

    /// Return the cell with the given index.
    ///
    /// Indexes come from this grid, so an unknown index is a bug and panics.
    pub fn get(&self, cell_id: CellId) -> &Cell {
        &self.cells[cell_id]
    }

    /// Iterate over all the cells, row by row.
    pub fn cells(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Return the grid-adjacent cells of the given cell.
    ///
    /// The map has two entries for a corner, three for a cell on the border, and four otherwise.
    pub fn neighbors_of(&self, cell_id: CellId) -> BTreeMap<Orientation, CellId> {
        let cell: &Cell = &self.cells[cell_id];
        Orientation::ALL
            .iter()
            .filter_map(|o| cell.neighbor(*o).map(|n| (*o, n)))
            .collect()
    }

    /// Return the grid-adjacent cells that already have an occupant.
    pub fn non_empty_neighbors_of(&self, cell_id: CellId) -> BTreeMap<Orientation, CellId> {
        self.neighbors_of(cell_id)
            .into_iter()
            .filter(|(_, n)| !self.cells[*n].is_empty())
            .collect()
    }

    /// Return the grid-adjacent cells that have no occupant yet.
    pub fn empty_neighbors_of(&self, cell_id: CellId) -> BTreeMap<Orientation, CellId> {
        self.neighbors_of(cell_id)
            .into_iter()
            .filter(|(_, n)| self.cells[*n].is_empty())
            .collect()
    }

    /// Return the orientations at which the cell has no neighbor.
    pub fn borders_of(&self, cell_id: CellId) -> Vec<Orientation> {
        let cell: &Cell = &self.cells[cell_id];
        Orientation::ALL
            .iter()
            .filter(|o| cell.neighbor(**o).is_none())
            .copied()
            .collect()
    }

    /// Iterate over the cells without occupant, row by row.
    ///
    /// The iterator borrows the grid, so it cannot go stale: call the method again after
    /// occupying cells to get the new state.
    pub fn empty_cells(&self) -> EmptyCells<'_> {
        EmptyCells {
            grid: self,
            next: 0,
        }
    }

    /// Number of cells without occupant.
    pub fn num_empty(&self) -> usize {
        self.cells.len() - self.num_occupied
    }

    /// Whether every cell has an occupant.
    pub fn is_full(&self) -> bool {
        self.num_occupied == self.cells.len()
    }

    /// Set the occupant of the given cell.
    ///
    /// # Errors
    ///
    /// The method returns [`MazeError::ContentAlreadyOccupied`] if the cell already has an
    /// occupant. The cell is not modified in that case.
    pub fn set_occupant(&mut self, cell_id: CellId, section: SectionId) -> Result<(), MazeError> {
        let cell: &mut Cell = &mut self.cells[cell_id];
        if cell.occupant.is_some() {
            return Err(MazeError::ContentAlreadyOccupied {
                row: cell.row,
                column: cell.column,
            });
        }
        cell.occupant = Some(section);
        self.num_occupied += 1;
        Ok(())
    }

    /// Return the occupant of the given cell.
    pub fn occupant(&self, cell_id: CellId) -> Option<SectionId> {
        self.cells[cell_id].occupant
    }

    /// Mark the given cell as visited by the player.
    pub fn set_visited(&mut self, cell_id: CellId, visited: bool) {
        self.cells[cell_id].visited = visited;
    }

    /// Print the occupancy of the grid in the debug log.
    pub fn debug(&self) {
        if log_enabled!(Level::Debug) {
            for line in self.to_string().lines() {
                debug!("{line}");
            }
        }
    }
}

/// Occupancy dump, one line per row: `X` for an occupied cell and `/` for an empty cell.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            for cell in row {
                write!(f, "|{}", if cell.is_empty() { '/' } else { 'X' })?;
            }
            writeln!(f, "|")?;
        }
        Ok(())
    }
}

/// Iterator over the empty cells of a grid.
pub struct EmptyCells<'a> {
    grid: &'a Grid,
    next: CellId,
}

impl<'a> Iterator for EmptyCells<'a> {
    type Item = &'a Cell;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next < self.grid.cells.len() {
            let cell: &Cell = &self.grid.cells[self.next];
            self.next += 1;
            if cell.is_empty() {
                return Some(cell);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_dimensions() {
        assert_eq!(
            Grid::new(0, 3).unwrap_err(),
            MazeError::InvalidSize {
                width: 0,
                height: 3
            }
        );
        assert!(Grid::new(4, 0).is_err());
    }

    #[test]
    fn row_and_column() {
        let grid: Grid = Grid::new(4, 3).unwrap();
        for row in 0..3 {
            for column in 0..4 {
                let cell: &Cell = grid.cell(row, column).unwrap();
                assert_eq!((cell.row, cell.column), (row, column));
                assert_eq!(grid.get(cell.id), cell);
            }
        }
    }

    #[test]
    fn cell_not_found() {
        let grid: Grid = Grid::new(4, 3).unwrap();
        assert_eq!(
            grid.cell(3, 0).unwrap_err(),
            MazeError::CellNotFound { row: 3, column: 0 }
        );
        assert_eq!(
            grid.cell_id(0, 4).unwrap_err(),
            MazeError::CellNotFound { row: 0, column: 4 }
        );
    }

    #[test]
    fn neighbor_count_matches_borders() {
        let grid: Grid = Grid::new(5, 4).unwrap();
        for cell in grid.cells() {
            let neighbors: usize = grid.neighbors_of(cell.id).len();
            let borders: usize = grid.borders_of(cell.id).len();
            assert_eq!(neighbors + borders, 4);
            let on_row_edge: bool = cell.row == 0 || cell.row == 3;
            let on_column_edge: bool = cell.column == 0 || cell.column == 4;
            let expected: usize = match (on_row_edge, on_column_edge) {
                (true, true) => 2,
                (true, false) | (false, true) => 3,
                (false, false) => 4,
            };
            assert_eq!(neighbors, expected, "cell ({}, {})", cell.row, cell.column);
        }
    }

    #[test]
    fn neighbors_are_reciprocal() {
        let grid: Grid = Grid::new(3, 3).unwrap();
        for cell in grid.cells() {
            for (orientation, neighbor) in grid.neighbors_of(cell.id) {
                assert_eq!(grid.get(neighbor).neighbor(orientation.opposite()), Some(cell.id));
                let (dr, dc) = orientation.offset();
                assert_eq!(grid.get(neighbor).row as isize, cell.row as isize + dr);
                assert_eq!(grid.get(neighbor).column as isize, cell.column as isize + dc);
            }
        }
    }

    #[test]
    fn borders_of_corner() {
        let grid: Grid = Grid::new(3, 2).unwrap();
        let top_left: CellId = grid.cell_id(0, 0).unwrap();
        assert_eq!(
            grid.borders_of(top_left),
            vec![Orientation::North, Orientation::West]
        );
        let bottom_right: CellId = grid.cell_id(1, 2).unwrap();
        assert_eq!(
            grid.borders_of(bottom_right),
            vec![Orientation::East, Orientation::South]
        );
        let single: Grid = Grid::new(1, 1).unwrap();
        assert_eq!(single.borders_of(0).len(), 4);
    }

    #[test]
    fn occupancy_filters() {
        let mut grid: Grid = Grid::new(3, 3).unwrap();
        let center: CellId = grid.cell_id(1, 1).unwrap();
        let north: CellId = grid.cell_id(0, 1).unwrap();
        grid.set_occupant(north, 0).unwrap();

        let non_empty = grid.non_empty_neighbors_of(center);
        assert_eq!(non_empty.len(), 1);
        assert_eq!(non_empty.get(&Orientation::North), Some(&north));
        assert_eq!(grid.empty_neighbors_of(center).len(), 3);
    }

    #[test]
    fn occupant_is_set_once() {
        let mut grid: Grid = Grid::new(2, 2).unwrap();
        grid.set_occupant(3, 7).unwrap();
        assert_eq!(grid.occupant(3), Some(7));
        assert_eq!(
            grid.set_occupant(3, 8).unwrap_err(),
            MazeError::ContentAlreadyOccupied { row: 1, column: 1 }
        );
        assert_eq!(grid.occupant(3), Some(7));
        assert_eq!(grid.num_empty(), 3);
    }

    #[test]
    fn empty_cells_follow_mutations() {
        let mut grid: Grid = Grid::new(2, 2).unwrap();
        assert_eq!(grid.empty_cells().count(), 4);
        assert!(!grid.is_full());

        grid.set_occupant(0, 0).unwrap();
        grid.set_occupant(2, 1).unwrap();
        let empty: Vec<CellId> = grid.empty_cells().map(|c| c.id).collect();
        assert_eq!(empty, vec![1, 3]);

        grid.set_occupant(1, 2).unwrap();
        grid.set_occupant(3, 3).unwrap();
        assert_eq!(grid.empty_cells().next(), None);
        assert!(grid.is_full());
    }

    #[test]
    fn display_shows_occupancy() {
        let mut grid: Grid = Grid::new(3, 2).unwrap();
        grid.set_occupant(1, 0).unwrap();
        assert_eq!(grid.to_string(), "|/|X|/|\n|/|/|/|\n");
    }

    #[test]
    fn visited_flag() {
        let mut grid: Grid = Grid::new(2, 1).unwrap();
        assert!(!grid.get(1).is_visited());
        grid.set_visited(1, true);
        assert!(grid.get(1).is_visited());
    }
}
