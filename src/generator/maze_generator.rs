/*
maze_generator.rs

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

//! Grow a random corridor tree over a grid and select its endpoints.
//!
//! Generation runs in four stages:
//!
//! 1. A walker starts in the top-left cell.
//! 2. Walkers grow corridors until none of them can move.
//!    At each step, a walker tries to turn left, go ahead, or turn right, in a random order.
//!    From time to time, instead of moving, the walker starts a new branch.
//! 3. Empty pockets that no walker could reach are attached to the tree, and grown from there.
//! 4. The two dead ends that are the farthest apart become the start and the end of the maze.
//!
//! Only the last stage reports progress.

use async_channel::Receiver;
use chrono::Utc;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Instant;

use super::corridors::{Corridors, Landmark, SectionId};
use super::grid::{Cell, CellId, Grid};
use super::maze::Maze;
use super::maze_error::MazeError;
use super::orientation::{Direction, Orientation};
use super::progress::Progress;
use super::walker::Walker;
use crate::config::DEFAULT_AVERAGE_STEPS_TO_NEXT_BRANCH;

/// Statistics about the last generation.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct GenerationStats {
    /// Number of walkers that have been started, including the first one.
    pub walkers: usize,

    /// Number of branches started at random while growing corridors.
    pub branches: usize,

    /// Number of empty pockets attached to the tree after the main growth.
    pub fill_passes: usize,

    /// Number of dead ends.
    pub leaves: usize,

    /// Number of dead end pairs measured during the endpoint search.
    pub pairs: usize,

    /// Number of steps between the start and the end.
    pub length: usize,

    /// Duration in seconds of the generation.
    pub duration: f32,
}

/// [`MazeGenerator`] object.
pub struct MazeGenerator {
    /// Seed of the random generator.
    pub seed: u64,

    /// Statistics about the last generation.
    pub stats: GenerationStats,

    grid: Grid,
    corridors: Corridors,
    rng: StdRng,

    /// On average, a walker takes that many steps before a branch starts from its tip.
    average_steps_to_next_branch: u32,

    progress: Progress,
    start: Option<SectionId>,
    end: Option<SectionId>,
    generated: bool,
}

impl MazeGenerator {
    /// Create the object. The random generator is seeded from the current time.
    pub fn new(grid: Grid) -> Self {
        let seed: u64 = Utc::now().timestamp_millis().unsigned_abs();
        Self::with_seed(grid, seed)
    }

    /// Create the object with a given seed. The same seed on the same grid size produces the same
    /// maze.
    pub fn with_seed(grid: Grid, seed: u64) -> Self {
        let capacity: usize = grid.len();
        Self {
            seed,
            stats: GenerationStats::default(),
            grid,
            corridors: Corridors::with_capacity(capacity),
            rng: StdRng::seed_from_u64(seed),
            average_steps_to_next_branch: DEFAULT_AVERAGE_STEPS_TO_NEXT_BRANCH,
            progress: Progress::new(),
            start: None,
            end: None,
            generated: false,
        }
    }

    /// Set the average number of steps a walker takes before a branch starts.
    ///
    /// Smaller values produce more dead ends. Large values produce long winding corridors.
    ///
    /// # Errors
    ///
    /// The method returns [`MazeError::InvalidBranchInterval`] if `steps` is zero.
    pub fn set_average_steps_to_next_branch(&mut self, steps: u32) -> Result<(), MazeError> {
        if steps == 0 {
            return Err(MazeError::InvalidBranchInterval);
        }
        self.average_steps_to_next_branch = steps;
        Ok(())
    }

    pub fn average_steps_to_next_branch(&self) -> u32 {
        self.average_steps_to_next_branch
    }

    /// Register a progress subscriber.
    ///
    /// The receiver gets percentages, from 0 to 100, while the generator searches for the start
    /// and the end of the maze. The last value is always 100.
    pub fn subscribe_progress(&mut self) -> Receiver<u8> {
        self.progress.subscribe()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn corridors(&self) -> &Corridors {
        &self.corridors
    }

    /// Return the start cell, once the maze is generated.
    pub fn start(&self) -> Option<&Cell> {
        self.start.map(|s| self.grid.get(self.corridors.get(s).cell()))
    }

    /// Return the end cell, once the maze is generated.
    pub fn end(&self) -> Option<&Cell> {
        self.end.map(|s| self.grid.get(self.corridors.get(s).cell()))
    }

    /// Generate the maze in the grid.
    ///
    /// # Errors
    ///
    /// The method returns [`MazeError::AlreadyGenerated`] if the grid already contains sections.
    /// The other errors report bugs in the generator.
    pub fn generate(&mut self) -> Result<(), MazeError> {
        if self.generated || self.grid.num_empty() != self.grid.len() {
            return Err(MazeError::AlreadyGenerated);
        }
        self.generated = true;
        self.stats = GenerationStats::default();
        let start: Instant = Instant::now();

        info!(
            "Generating a {}x{} maze (seed = {}, average steps to next branch = {})",
            self.grid.width(),
            self.grid.height(),
            self.seed,
            self.average_steps_to_next_branch
        );

        let walker: Walker = self.seed_walker()?;
        let first_section: SectionId = walker.tip();
        self.grow(vec![walker])?;
        debug!(
            "Growth done: {} walkers, {} branches, {} empty cells",
            self.stats.walkers,
            self.stats.branches,
            self.grid.num_empty()
        );
        self.grid.debug();

        self.fill_empty_cells()?;
        debug!(
            "Fill done: {} passes, {} sections, {} edges",
            self.stats.fill_passes,
            self.corridors.len(),
            self.corridors.num_edges()
        );

        self.find_endpoints(first_section);

        self.stats.duration = start.elapsed().as_secs_f32();
        info!(
            "Maze generated: {} dead ends, solution length = {}, duration = {}s",
            self.stats.leaves, self.stats.length, self.stats.duration
        );
        Ok(())
    }

    /// Return the generated maze.
    ///
    /// # Errors
    ///
    /// The method returns [`MazeError::NotGenerated`] if [`MazeGenerator::generate`] has not
    /// completed.
    pub fn into_maze(self) -> Result<Maze, MazeError> {
        let (Some(start), Some(end)) = (self.start, self.end) else {
            return Err(MazeError::NotGenerated);
        };
        Ok(Maze::new(
            self.grid,
            self.corridors,
            start,
            end,
            self.seed,
            self.stats,
        ))
    }

    /// Create the first walker in the top-left cell, heading away from the border.
    fn seed_walker(&mut self) -> Result<Walker, MazeError> {
        let cell: CellId = self.grid.cell_id(0, 0)?;
        let heading: Orientation = match self.grid.borders_of(cell).first() {
            Some(border) => border.opposite(),
            None => Orientation::South,
        };
        let section: SectionId = self.occupy(cell)?;
        self.stats.walkers += 1;
        debug!("First walker at (0, 0) heading {heading}");
        Ok(Walker::new(section, heading))
    }

    /// Create a section in the given cell.
    fn occupy(&mut self, cell: CellId) -> Result<SectionId, MazeError> {
        let section: SectionId = self.corridors.create(cell);
        self.grid.set_occupant(cell, section)?;
        Ok(section)
    }

    /// Link two sections.
    fn link(
        &mut self,
        section: SectionId,
        orientation: Orientation,
        target: SectionId,
    ) -> Result<(), MazeError> {
        let cell: &Cell = self.grid.get(self.corridors.get(section).cell());
        let position: (usize, usize) = (cell.row, cell.column);
        self.corridors
            .add_neighbor(section, orientation, target, position)
    }

    /// Move the walkers, and the branches they start, until none of them can move.
    fn grow(&mut self, mut walkers: Vec<Walker>) -> Result<(), MazeError> {
        while !walkers.is_empty() {
            let mut active: Vec<Walker> = Vec::with_capacity(walkers.len());
            for mut walker in walkers {
                if self.step(&mut walker, &mut active)? {
                    active.push(walker);
                }
            }
            walkers = active;
        }
        Ok(())
    }

    /// Try to move the walker by one cell.
    ///
    /// The turns are tried in a random order. Every empty neighbor found before the walker moves
    /// may start a branch, which is added to `branches`.
    ///
    /// Return `true` if the walker moved.
    fn step(&mut self, walker: &mut Walker, branches: &mut Vec<Walker>) -> Result<bool, MazeError> {
        let mut turns: [Direction; 3] = Direction::ALL;
        turns.shuffle(&mut self.rng);

        let cell: CellId = self.corridors.get(walker.tip()).cell();
        for direction in turns {
            let heading: Orientation = walker.heading_after(direction);
            let neighbor: CellId = match self.grid.get(cell).neighbor(heading) {
                Some(n) if self.grid.get(n).is_empty() => n,
                _ => continue,
            };

            let section: SectionId = self.occupy(neighbor)?;
            self.link(walker.tip(), heading, section)?;
            if self.branching_time() {
                branches.push(Walker::new(section, heading));
                self.stats.walkers += 1;
                self.stats.branches += 1;
            } else {
                walker.advance(section, heading);
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Whether a branch must start instead of moving the walker.
    fn branching_time(&mut self) -> bool {
        self.rng.random_range(0..self.average_steps_to_next_branch) == 0
    }

    /// Attach the empty pockets to the tree and grow them.
    fn fill_empty_cells(&mut self) -> Result<(), MazeError> {
        while let Some((cell, orientation, target)) = self.find_pocket() {
            self.stats.fill_passes += 1;
            let section: SectionId = self.occupy(cell)?;
            self.link(section, orientation, target)?;
            self.stats.walkers += 1;
            debug!(
                "Filling from cell ({}, {})",
                self.grid.get(cell).row,
                self.grid.get(cell).column
            );
            self.grow(vec![Walker::new(section, orientation.opposite())])?;
        }
        Ok(())
    }

    /// Return the first empty cell that touches the tree, the orientation of its first occupied
    /// neighbor, and the section of that neighbor.
    fn find_pocket(&self) -> Option<(CellId, Orientation, SectionId)> {
        self.grid.empty_cells().find_map(|cell| {
            let (orientation, neighbor) = self
                .grid
                .non_empty_neighbors_of(cell.id)
                .into_iter()
                .next()?;
            Some((cell.id, orientation, self.grid.occupant(neighbor)?))
        })
    }

    /// Select the two dead ends that are the farthest apart.
    ///
    /// For each dead end, the landmark is flooded from it, and then the distance to all the
    /// following dead ends is read from their landmark chain.
    fn find_endpoints(&mut self, first_section: SectionId) {
        let leaves: Vec<SectionId> = self
            .grid
            .cells()
            .filter_map(|c| c.occupant())
            .filter(|s| self.corridors.degree(*s) == 1)
            .collect();
        let num_leaves: usize = leaves.len();
        let total: usize = num_leaves * num_leaves.saturating_sub(1) / 2;
        debug!("{num_leaves} dead ends, {total} pairs to measure");

        let mut best: (SectionId, SectionId, usize) = (first_section, first_section, 0);
        let mut completed: usize = 0;
        let mut candidates: VecDeque<SectionId> = VecDeque::from(leaves);
        while let Some(root) = candidates.pop_front() {
            if candidates.is_empty() {
                break;
            }
            self.corridors.set_landmark(Landmark::Start, root);
            for other in &candidates {
                if let Some(distance) = self.corridors.distance_to_landmark(*other, Landmark::Start)
                    && distance > best.2
                {
                    best = (root, *other, distance);
                }
                completed += 1;
                self.progress.report(completed, total);
            }
        }
        if total == 0 {
            self.progress.report(0, 0);
        }

        let (start, end, length) = best;
        self.corridors.set_landmark(Landmark::Start, start);
        self.corridors.set_landmark(Landmark::End, end);
        self.start = Some(start);
        self.end = Some(end);
        self.stats.leaves = num_leaves;
        self.stats.pairs = completed;
        self.stats.length = length;
    }
}
