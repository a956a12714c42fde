/*
walker.rs

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

//! Tip of a growing corridor.

use super::corridors::SectionId;
use super::orientation::{Direction, Orientation};

/// Walker object.
///
/// A walker only lives during generation. It remembers the last section of its corridor and the
/// heading it arrived with, so that it never turns back.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Walker {
    /// Last section of the corridor.
    tip: SectionId,

    /// Current heading.
    heading: Orientation,
}

impl Walker {
    /// Create a [`Walker`] object at the given section.
    pub fn new(tip: SectionId, heading: Orientation) -> Self {
        Self { tip, heading }
    }

    pub fn tip(&self) -> SectionId {
        self.tip
    }

    pub fn heading(&self) -> Orientation {
        self.heading
    }

    /// Heading the walker would have after taking the given turn.
    pub fn heading_after(&self, direction: Direction) -> Orientation {
        self.heading.turn(direction)
    }

    /// Move the tip to a new section reached with the given heading.
    pub fn advance(&mut self, tip: SectionId, heading: Orientation) {
        self.tip = tip;
        self.heading = heading;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_moves_tip_and_heading() {
        let mut walker: Walker = Walker::new(0, Orientation::South);
        assert_eq!(walker.heading_after(Direction::Left), Orientation::East);

        walker.advance(4, Orientation::East);
        assert_eq!(walker.tip(), 4);
        assert_eq!(walker.heading(), Orientation::East);
        assert_eq!(walker.heading_after(Direction::Right), Orientation::South);
    }
}
