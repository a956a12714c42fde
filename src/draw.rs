/*
draw.rs

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

//! Draw mazes as text.
//!
//! [`Draw`] renders the walls with ASCII characters.
//! [`MazeLayout`] is a flat description of the maze that is serialized in JSON by using
//! [`serde`].
//! Both read the walls from the corridor graph, never from the grid alone.

use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::generator::grid::{Cell, CellId};
use crate::generator::maze::Maze;
use crate::generator::orientation::Orientation;

/// Bits of the wall mask in [`MazeLayout::walls`].
pub const NORTH_WALL: u8 = 1;
pub const EAST_WALL: u8 = 2;
pub const SOUTH_WALL: u8 = 4;
pub const WEST_WALL: u8 = 8;

/// Width of the cells in the text output.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, ValueEnum, Default)]
pub enum Style {
    /// One character per cell.
    Narrow,
    /// Three characters per cell.
    #[default]
    Wide,
}

impl Style {
    /// Number of characters inside a cell.
    pub fn cell_width(self) -> usize {
        match self {
            Style::Narrow => 1,
            Style::Wide => 3,
        }
    }
}

/// Draw object that renders a maze as text.
#[derive(Debug)]
pub struct Draw<'a> {
    /// Maze to draw.
    maze: &'a Maze,

    style: Style,

    /// Cells to mark as part of the solution. Empty when the solution is hidden.
    solution: HashSet<CellId>,
}

impl<'a> Draw<'a> {
    /// Create a [`Draw`] object.
    pub fn new(maze: &'a Maze) -> Self {
        Self {
            maze,
            style: Style::default(),
            solution: HashSet::new(),
        }
    }

    /// Select the cell width.
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Whether to mark the cells of the solution.
    pub fn show_solution(mut self, show: bool) -> Self {
        self.solution = if show {
            self.maze.solution().into_iter().collect()
        } else {
            HashSet::new()
        };
        debug!("Solution drawn over {} cells", self.solution.len());
        self
    }

    /// Return the character drawn inside the cell.
    fn marker(&self, cell: &Cell) -> char {
        if cell.id == self.maze.start().id {
            'S'
        } else if cell.id == self.maze.end().id {
            'E'
        } else if self.solution.contains(&cell.id) {
            '.'
        } else {
            ' '
        }
    }

    /// Horizontal line above the cells of a row, or below them for the last row.
    fn horizontal_line(&self, row: &[Cell], side: Orientation) -> String {
        let width: usize = self.style.cell_width();
        let mut line: String = String::with_capacity(row.len() * (width + 1) + 1);
        for cell in row {
            line.push('+');
            let c: char = if self.maze.has_wall(cell.id, side) {
                '-'
            } else {
                ' '
            };
            line.extend(std::iter::repeat_n(c, width));
        }
        line.push('+');
        line
    }

    /// Line with the inside of the cells of a row.
    fn cell_line(&self, row: &[Cell]) -> String {
        let padding: usize = (self.style.cell_width() - 1) / 2;
        let mut line: String = String::new();
        for cell in row {
            line.push(if self.maze.has_wall(cell.id, Orientation::West) {
                '|'
            } else {
                ' '
            });
            line.extend(std::iter::repeat_n(' ', padding));
            line.push(self.marker(cell));
            line.extend(std::iter::repeat_n(' ', padding));
        }
        line.push('|');
        line
    }

    /// Render the maze.
    pub fn render(&self) -> String {
        let cells: Vec<Cell> = self.maze.grid().cells().cloned().collect();
        let mut lines: Vec<String> = Vec::with_capacity(self.maze.height() * 2 + 1);
        let mut last_row: &[Cell] = &[];
        for row in cells.chunks(self.maze.width()) {
            lines.push(self.horizontal_line(row, Orientation::North));
            lines.push(self.cell_line(row));
            last_row = row;
        }
        lines.push(self.horizontal_line(last_row, Orientation::South));

        let mut s: String = lines.join("\n");
        s.push('\n');
        s
    }
}

/// Flat description of a maze.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MazeLayout {
    pub width: usize,
    pub height: usize,
    pub seed: u64,

    /// Row and column of the start cell.
    pub start: (usize, usize),

    /// Row and column of the end cell.
    pub end: (usize, usize),

    /// Number of steps between the start and the end.
    pub length: usize,

    /// For each row, the wall mask of each cell. See [`NORTH_WALL`], [`EAST_WALL`],
    /// [`SOUTH_WALL`], and [`WEST_WALL`].
    pub walls: Vec<Vec<u8>>,

    /// Row and column of the cells from the start to the end.
    pub solution: Vec<(usize, usize)>,
}

impl MazeLayout {
    /// Create a [`MazeLayout`] object for the given maze.
    pub fn new(maze: &Maze) -> Self {
        let walls: Vec<Vec<u8>> = maze
            .grid()
            .cells()
            .map(|c| wall_mask(maze, c.id))
            .collect::<Vec<u8>>()
            .chunks(maze.width())
            .map(|r| r.to_vec())
            .collect();
        let position = |id: CellId| -> (usize, usize) {
            let cell: &Cell = maze.grid().get(id);
            (cell.row, cell.column)
        };

        Self {
            width: maze.width(),
            height: maze.height(),
            seed: maze.seed(),
            start: position(maze.start().id),
            end: position(maze.end().id),
            length: maze.length(),
            walls,
            solution: maze.solution().into_iter().map(position).collect(),
        }
    }

    /// Serialize the layout in JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Return the wall mask of a cell.
pub fn wall_mask(maze: &Maze, cell: CellId) -> u8 {
    maze.walls(cell)
        .iter()
        .map(|o| match o {
            Orientation::North => NORTH_WALL,
            Orientation::East => EAST_WALL,
            Orientation::South => SOUTH_WALL,
            Orientation::West => WEST_WALL,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::grid::Grid;
    use crate::generator::maze_generator::MazeGenerator;

    fn maze(width: usize, height: usize, seed: u64) -> Maze {
        let grid: Grid = Grid::new(width, height).unwrap();
        let mut generator: MazeGenerator = MazeGenerator::with_seed(grid, seed);
        generator.generate().unwrap();
        generator.into_maze().unwrap()
    }

    #[test]
    fn single_cell() {
        let maze: Maze = maze(1, 1, 0);
        assert_eq!(Draw::new(&maze).render(), "+---+\n| S |\n+---+\n");
        assert_eq!(
            Draw::new(&maze).style(Style::Narrow).render(),
            "+-+\n|S|\n+-+\n"
        );
    }

    #[test]
    fn straight_corridor() {
        let maze: Maze = maze(3, 1, 8);
        let text: String = Draw::new(&maze).show_solution(true).render();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "+---+---+---+");
        assert!(
            lines[1] == "| S   .   E |" || lines[1] == "| E   .   S |",
            "{}",
            lines[1]
        );
        assert_eq!(lines[2], "+---+---+---+");

        let hidden: String = Draw::new(&maze).render();
        assert!(!hidden.contains('.'));
    }

    #[test]
    fn render_size() {
        let maze: Maze = maze(5, 4, 21);
        let text: String = Draw::new(&maze).render();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4 * 2 + 1);
        assert!(lines.iter().all(|l| l.len() == 5 * 4 + 1));
        assert_eq!(text.matches('S').count(), 1);
        assert_eq!(text.matches('E').count(), 1);
    }

    #[test]
    fn layout_matches_maze() {
        let maze: Maze = maze(4, 3, 17);
        let layout: MazeLayout = MazeLayout::new(&maze);
        assert_eq!(layout.walls.len(), 3);
        assert!(layout.walls.iter().all(|r| r.len() == 4));
        assert_eq!(layout.solution.first(), Some(&layout.start));
        assert_eq!(layout.solution.last(), Some(&layout.end));

        // The outer border is closed
        assert!(layout.walls[0].iter().all(|m| m & NORTH_WALL != 0));
        assert!(layout.walls[2].iter().all(|m| m & SOUTH_WALL != 0));
        assert!(layout.walls.iter().all(|r| r[0] & WEST_WALL != 0));
        assert!(layout.walls.iter().all(|r| r[3] & EAST_WALL != 0));

        let json: String = layout.to_json().unwrap();
        let back: MazeLayout = serde_json::from_str(&json).unwrap();
        assert_eq!(back, layout);
    }
}
