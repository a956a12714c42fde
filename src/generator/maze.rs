/*
maze.rs

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

//! Generated maze.
//!
//! A [`Maze`] is the read-only result of [`super::maze_generator::MazeGenerator::generate`].
//! Walls are derived from the corridor graph: two grid-adjacent cells are separated by a wall
//! unless their sections are linked.

use serde::{Deserialize, Serialize};

use super::corridors::{Corridors, Landmark, SectionId};
use super::grid::{Cell, CellId, Grid};
use super::maze_generator::GenerationStats;
use super::orientation::Orientation;

/// Maze object.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Maze {
    grid: Grid,
    corridors: Corridors,

    /// Section of the start cell.
    start: SectionId,

    /// Section of the end cell.
    end: SectionId,

    /// Seed used to generate the maze.
    seed: u64,

    stats: GenerationStats,
}

impl Maze {
    pub(super) fn new(
        grid: Grid,
        corridors: Corridors,
        start: SectionId,
        end: SectionId,
        seed: u64,
        stats: GenerationStats,
    ) -> Self {
        Self {
            grid,
            corridors,
            start,
            end,
            seed,
            stats,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn corridors(&self) -> &Corridors {
        &self.corridors
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn stats(&self) -> &GenerationStats {
        &self.stats
    }

    /// Return the start cell.
    pub fn start(&self) -> &Cell {
        self.grid.get(self.corridors.get(self.start).cell())
    }

    /// Return the end cell.
    pub fn end(&self) -> &Cell {
        self.grid.get(self.corridors.get(self.end).cell())
    }

    /// Number of steps between the start and the end.
    pub fn length(&self) -> usize {
        self.stats.length
    }

    /// Whether the player can walk from the cell to its neighbor in the given orientation.
    pub fn is_open(&self, cell: CellId, orientation: Orientation) -> bool {
        match self.grid.occupant(cell) {
            Some(s) => self.corridors.neighbor(s, orientation).is_some(),
            None => false,
        }
    }

    /// Whether a wall closes the given side of the cell. The outer border is always a wall.
    pub fn has_wall(&self, cell: CellId, orientation: Orientation) -> bool {
        !self.is_open(cell, orientation)
    }

    /// Return the closed sides of the cell.
    pub fn walls(&self, cell: CellId) -> Vec<Orientation> {
        Orientation::ALL
            .iter()
            .filter(|o| self.has_wall(cell, **o))
            .copied()
            .collect()
    }

    /// Return the cells from the given cell to the landmark, both included.
    ///
    /// This is how the player's trail is traced back to the start or forward to the end.
    pub fn path_to(&self, cell: CellId, landmark: Landmark) -> Vec<CellId> {
        match self.grid.occupant(cell) {
            Some(s) => self
                .corridors
                .trace(s, landmark)
                .into_iter()
                .map(|s| self.corridors.get(s).cell())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Return the cells of the solution, from the start to the end.
    pub fn solution(&self) -> Vec<CellId> {
        self.path_to(self.start().id, Landmark::End)
    }
}
