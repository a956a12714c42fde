/*
common/mod.rs

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

//! Helpers shared by the integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;

use mazegen::generator::grid::{CellId, Grid};
use mazegen::generator::maze::Maze;
use mazegen::generator::maze_generator::MazeGenerator;
use mazegen::generator::orientation::Orientation;

/// Generate a maze with the given seed and branch interval.
pub fn generate(width: usize, height: usize, seed: u64, branch: u32) -> Maze {
    let grid: Grid = Grid::new(width, height).unwrap();
    let mut generator: MazeGenerator = MazeGenerator::with_seed(grid, seed);
    generator.set_average_steps_to_next_branch(branch).unwrap();
    generator.generate().unwrap();
    generator.into_maze().unwrap()
}

/// Walk the open sides of the cells and return the distance from `from` to every cell.
/// Unreachable cells get `None`.
pub fn distances(maze: &Maze, from: CellId) -> Vec<Option<usize>> {
    let mut distances: Vec<Option<usize>> = vec![None; maze.grid().len()];
    let mut queue: VecDeque<CellId> = VecDeque::from([from]);
    distances[from] = Some(0);
    while let Some(cell) = queue.pop_front() {
        let d: usize = distances[cell].unwrap();
        for orientation in Orientation::ALL {
            if !maze.is_open(cell, orientation) {
                continue;
            }
            let next: CellId = maze.grid().get(cell).neighbor(orientation).unwrap();
            if distances[next].is_none() {
                distances[next] = Some(d + 1);
                queue.push_back(next);
            }
        }
    }
    distances
}

/// Return the dead ends of the maze.
pub fn dead_ends(maze: &Maze) -> Vec<CellId> {
    maze.grid()
        .cells()
        .filter(|c| maze.walls(c.id).len() == 3)
        .map(|c| c.id)
        .collect()
}

/// Longest distance between two dead ends, measured by walking the maze.
pub fn longest_dead_end_distance(maze: &Maze) -> usize {
    let leaves: Vec<CellId> = dead_ends(maze);
    let mut longest: usize = 0;
    for leaf in &leaves {
        let d: Vec<Option<usize>> = distances(maze, *leaf);
        for other in &leaves {
            longest = longest.max(d[*other].unwrap());
        }
    }
    longest
}

/// Check that the corridors form a tree that covers the whole grid.
pub fn assert_spanning_tree(maze: &Maze) {
    let grid: &Grid = maze.grid();
    assert!(grid.is_full());
    assert_eq!(maze.corridors().len(), grid.len());
    assert_eq!(maze.corridors().num_edges(), grid.len() - 1);

    // Every opening is shared by both sides
    for cell in grid.cells() {
        for orientation in Orientation::ALL {
            if maze.is_open(cell.id, orientation) {
                let next: CellId = cell.neighbor(orientation).unwrap();
                assert!(maze.is_open(next, orientation.opposite()));
            }
        }
    }

    // Connected with n - 1 edges, so acyclic
    assert!(distances(maze, 0).iter().all(|d| d.is_some()));
}
