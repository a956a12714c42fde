/*
maze_error.rs

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

//! Errors raised by the grid, the corridor graph, and the generator.

use thiserror::Error;

use super::orientation::Orientation;

/// Type of errors.
///
/// [`MazeError::TopologyConflict`] and [`MazeError::ContentAlreadyOccupied`] cannot happen when
/// the generator works correctly. They report a bug, not a run-time condition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// The grid must have at least one row and one column.
    #[error("invalid grid size {width}x{height}: both dimensions must be at least 1")]
    InvalidSize { width: usize, height: usize },

    /// Coordinates outside the grid.
    #[error("no cell with row {row} and column {column}")]
    CellNotFound { row: usize, column: usize },

    /// A neighbor slot is already linked.
    #[error("cell ({row}, {column}) is already linked to the {orientation}")]
    TopologyConflict {
        row: usize,
        column: usize,
        orientation: Orientation,
    },

    /// A cell already contains a section.
    #[error("cell ({row}, {column}) already contains a section")]
    ContentAlreadyOccupied { row: usize, column: usize },

    /// The average number of steps between two branches must be at least one.
    #[error("the average number of steps to the next branch must be at least 1")]
    InvalidBranchInterval,

    /// The generator has already filled its grid.
    #[error("the maze has already been generated")]
    AlreadyGenerated,

    /// The maze is requested before the generation completed.
    #[error("the maze has not been generated yet")]
    NotGenerated,
}
