/*
orientation.rs

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

//! Absolute headings and relative turns.
//!
//! An [`Orientation`] is a compass heading on the grid. A [`Direction`] is a turn that a walker
//! takes relative to its current heading. [`Orientation::turn`] combines both.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

/// Absolute heading on the grid.
///
/// The discriminant is the index of the corresponding neighbor slot in cells and sections.
/// Variants are listed clockwise.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, FromRepr,
)]
#[repr(usize)]
pub enum Orientation {
    North,
    East,
    South,
    West,
}

/// Turn relative to the current heading.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Ahead,
    Right,
}

impl Orientation {
    /// All the orientations, in slot order.
    pub const ALL: [Orientation; 4] = [
        Orientation::North,
        Orientation::East,
        Orientation::South,
        Orientation::West,
    ];

    /// Index of the neighbor slot for this orientation.
    pub fn slot(self) -> usize {
        self as usize
    }

    /// Return the orientation pointing the other way.
    pub fn opposite(self) -> Self {
        match self {
            Orientation::North => Orientation::South,
            Orientation::East => Orientation::West,
            Orientation::South => Orientation::North,
            Orientation::West => Orientation::East,
        }
    }

    /// Return the heading obtained after taking the given turn.
    pub fn turn(self, direction: Direction) -> Self {
        match (self, direction) {
            (_, Direction::Ahead) => self,
            (Orientation::North, Direction::Left) => Orientation::West,
            (Orientation::North, Direction::Right) => Orientation::East,
            (Orientation::East, Direction::Left) => Orientation::North,
            (Orientation::East, Direction::Right) => Orientation::South,
            (Orientation::South, Direction::Left) => Orientation::East,
            (Orientation::South, Direction::Right) => Orientation::West,
            (Orientation::West, Direction::Left) => Orientation::South,
            (Orientation::West, Direction::Right) => Orientation::North,
        }
    }

    /// Row and column offsets of a step in this orientation.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Orientation::North => (-1, 0),
            Orientation::East => (0, 1),
            Orientation::South => (1, 0),
            Orientation::West => (0, -1),
        }
    }
}

impl Direction {
    /// All the turns a walker can take. A walker never turns back.
    pub const ALL: [Direction; 3] = [Direction::Left, Direction::Ahead, Direction::Right];
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Orientation::North => write!(f, "north"),
            Orientation::East => write!(f, "east"),
            Orientation::South => write!(f, "south"),
            Orientation::West => write!(f, "west"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_table() {
        use Direction::*;
        use Orientation::*;

        let table: [(Orientation, Direction, Orientation); 12] = [
            (North, Left, West),
            (North, Ahead, North),
            (North, Right, East),
            (East, Left, North),
            (East, Ahead, East),
            (East, Right, South),
            (South, Left, East),
            (South, Ahead, South),
            (South, Right, West),
            (West, Left, South),
            (West, Ahead, West),
            (West, Right, North),
        ];
        for (from, direction, expected) in table {
            assert_eq!(from.turn(direction), expected, "{from} turning {direction:?}");
        }
    }

    #[test]
    fn turns_are_consistent() {
        for o in Orientation::ALL {
            assert_eq!(o.turn(Direction::Left).turn(Direction::Right), o);
            assert_eq!(o.turn(Direction::Right).turn(Direction::Left), o);
            assert_eq!(o.turn(Direction::Ahead), o);
            assert_eq!(o.opposite().opposite(), o);
            assert_ne!(o.opposite(), o);
            assert_eq!(
                o.turn(Direction::Right).turn(Direction::Right),
                o.opposite()
            );
        }
    }

    #[test]
    fn slots_round_trip() {
        for o in Orientation::ALL {
            assert_eq!(Orientation::from_repr(o.slot()), Some(o));
        }
        assert_eq!(Orientation::from_repr(4), None);
    }

    #[test]
    fn opposite_offsets_cancel() {
        for o in Orientation::ALL {
            let (dr, dc) = o.offset();
            let (or, oc) = o.opposite().offset();
            assert_eq!((dr + or, dc + oc), (0, 0));
        }
    }
}
