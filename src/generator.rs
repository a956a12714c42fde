/*
generator.rs

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

//! Generate random mazes.
//!
//! A maze is built over a [`grid::Grid`] of cells.
//! Each cell is covered by a section of the corridor graph, [`corridors::Corridors`].
//! Linked sections are open to each other; every other pair of adjacent cells is separated by a
//! wall.
//! The corridor graph is a tree that covers the whole grid, so there is exactly one way between
//! any two cells.
//!
//! To generate a maze, create a [`grid::Grid`], give it to a
//! [`maze_generator::MazeGenerator`] object, and use its
//! [`maze_generator::MazeGenerator::generate`] method.
//! The start and the end of the maze are the two dead ends that are the farthest apart.
//! Convert the generator into a [`maze::Maze`] object to query walls and the solution.
//!
//! ```
//! use mazegen::generator::grid::Grid;
//! use mazegen::generator::maze_generator::MazeGenerator;
//!
//! let grid: Grid = Grid::new(10, 12).unwrap();
//! let mut generator: MazeGenerator = MazeGenerator::with_seed(grid, 42);
//! generator.generate().unwrap();
//! let maze = generator.into_maze().unwrap();
//! assert_eq!(maze.solution().len(), maze.length() + 1);
//! ```
//!
//! Generation can take a while for large grids.
//! Run it in a worker thread and follow [`maze_generator::MazeGenerator::subscribe_progress`].

pub mod corridors;
pub mod grid;
pub mod maze;
pub mod maze_error;
pub mod maze_generator;
pub mod orientation;
pub mod progress;
pub mod walker;
