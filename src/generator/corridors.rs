/*
corridors.rs

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

//! Corridor graph of the maze.
//!
//! A section is a piece of corridor that covers exactly one grid cell.
//! Two sections are linked when the player can walk from one cell to the other.
//! Links are set once and in both directions, so trying to link a slot twice, which would close a
//! loop, is detected.
//!
//! Landmarks answer "how far is this section from a given root" without a distance table: after
//! [`Corridors::set_landmark`], each section points to its neighbor one hop closer to the root.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::grid::CellId;
use super::maze_error::MazeError;
use super::orientation::Orientation;

/// Index of a section in the corridor graph.
pub type SectionId = usize;

/// Landmarks that sections can point to.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Landmark {
    Start,
    End,
}

impl Landmark {
    fn slot(self) -> usize {
        match self {
            Landmark::Start => 0,
            Landmark::End => 1,
        }
    }
}

/// Corridor section.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Cell that the section covers.
    cell: CellId,

    /// Linked sections, indexed by [`Orientation::slot`].
    neighbors: [Option<SectionId>; 4],

    /// For each landmark, the next section on the way to it. The landmark root points to itself.
    landmarks: [Option<SectionId>; 2],
}

impl Section {
    /// Return the cell that the section covers.
    pub fn cell(&self) -> CellId {
        self.cell
    }

    /// Return the section linked in the given orientation.
    pub fn neighbor(&self, orientation: Orientation) -> Option<SectionId> {
        self.neighbors[orientation.slot()]
    }

    /// Iterate over the linked sections and their orientation.
    pub fn neighbors(&self) -> impl Iterator<Item = (Orientation, SectionId)> + '_ {
        self.neighbors
            .iter()
            .enumerate()
            .filter_map(|(slot, n)| Some((Orientation::from_repr(slot)?, (*n)?)))
    }

    /// Number of linked sections. A leaf (dead end) has one.
    pub fn degree(&self) -> usize {
        self.neighbors.iter().filter(|n| n.is_some()).count()
    }

    /// Return the next section on the way to the given landmark.
    pub fn landmark(&self, landmark: Landmark) -> Option<SectionId> {
        self.landmarks[landmark.slot()]
    }
}

/// Represent the corridor graph.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Corridors {
    sections: Vec<Section>,

    /// Number of links. A spanning tree over `n` cells has `n - 1` links.
    num_edges: usize,
}

impl Corridors {
    /// Create an empty graph able to hold `capacity` sections without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sections: Vec::with_capacity(capacity),
            num_edges: 0,
        }
    }

    /// Create a section that covers the given cell and return its index.
    ///
    /// The caller is responsible for setting the section as the occupant of the cell.
    pub fn create(&mut self, cell: CellId) -> SectionId {
        self.sections.push(Section {
            cell,
            neighbors: [None; 4],
            landmarks: [None; 2],
        });
        self.sections.len() - 1
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Number of links between sections.
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Return the section with the given index.
    pub fn get(&self, section: SectionId) -> &Section {
        &self.sections[section]
    }

    /// Iterate over the sections in creation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Section> {
        self.sections.iter()
    }

    /// Return the section linked to `section` in the given orientation.
    pub fn neighbor(&self, section: SectionId, orientation: Orientation) -> Option<SectionId> {
        self.sections[section].neighbor(orientation)
    }

    /// Return the linked sections of `section`.
    pub fn neighbors(&self, section: SectionId) -> Vec<(Orientation, SectionId)> {
        self.sections[section].neighbors().collect()
    }

    /// Number of links of `section`.
    pub fn degree(&self, section: SectionId) -> usize {
        self.sections[section].degree()
    }

    /// Link `target` to `section` in the given orientation, and `section` to `target` in the
    /// opposite orientation.
    ///
    /// Return `false`, and leave both sections unchanged, if one of the two slots is already
    /// used or if a section would be linked to itself.
    pub fn try_link(
        &mut self,
        section: SectionId,
        orientation: Orientation,
        target: SectionId,
    ) -> bool {
        if section == target
            || self.sections[section].neighbors[orientation.slot()].is_some()
            || self.sections[target].neighbors[orientation.opposite().slot()].is_some()
        {
            return false;
        }
        self.sections[section].neighbors[orientation.slot()] = Some(target);
        self.sections[target].neighbors[orientation.opposite().slot()] = Some(section);
        self.num_edges += 1;
        true
    }

    /// Link two sections, see [`Corridors::try_link`].
    ///
    /// # Errors
    ///
    /// The method returns [`MazeError::TopologyConflict`] if the link cannot be created.
    /// `row` and `column` locate `section` in the grid and are only used for the error report.
    pub fn add_neighbor(
        &mut self,
        section: SectionId,
        orientation: Orientation,
        target: SectionId,
        (row, column): (usize, usize),
    ) -> Result<(), MazeError> {
        if self.try_link(section, orientation, target) {
            Ok(())
        } else {
            debug!("Cannot link section {section} to section {target} at {orientation}");
            Err(MazeError::TopologyConflict {
                row,
                column,
                orientation,
            })
        }
    }

    /// Flood the given landmark from `root` over its whole connected component.
    ///
    /// After the call, the root points to itself and every other section of the component
    /// points to its neighbor one hop closer to the root.
    /// The graph is a tree, so each section is reached once through its only path from the root.
    pub fn set_landmark(&mut self, landmark: Landmark, root: SectionId) {
        let slot: usize = landmark.slot();
        let mut queue: VecDeque<(SectionId, SectionId)> = VecDeque::new();
        queue.push_back((root, root));

        while let Some((section, origin)) = queue.pop_front() {
            self.sections[section].landmarks[slot] = Some(origin);
            for (_, n) in self.sections[section].neighbors() {
                if n != origin {
                    queue.push_back((n, section));
                }
            }
        }
    }

    /// Return the next section on the way from `section` to the given landmark.
    pub fn landmark(&self, section: SectionId, landmark: Landmark) -> Option<SectionId> {
        self.sections[section].landmark(landmark)
    }

    /// Count the hops from `section` to the landmark root by following the landmark chain.
    ///
    /// Return [`None`] if the section has never been reached by a flood of that landmark.
    pub fn distance_to_landmark(&self, section: SectionId, landmark: Landmark) -> Option<usize> {
        let mut current: SectionId = section;
        let mut hops: usize = 0;
        loop {
            let next: SectionId = self.landmark(current, landmark)?;
            if next == current {
                return Some(hops);
            }
            current = next;
            hops += 1;
            // A chain longer than the graph means a broken flood
            if hops > self.sections.len() {
                return None;
            }
        }
    }

    /// Return the sections from `section` to the landmark root, both included.
    ///
    /// The vector is empty if the section has never been reached by a flood of that landmark.
    pub fn trace(&self, section: SectionId, landmark: Landmark) -> Vec<SectionId> {
        let mut path: Vec<SectionId> = Vec::new();
        let mut current: SectionId = section;
        while let Some(next) = self.landmark(current, landmark) {
            path.push(current);
            if next == current || path.len() > self.sections.len() {
                return path;
            }
            current = next;
        }
        path.clear();
        path
    }
}
