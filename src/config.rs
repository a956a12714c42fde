/*
config.rs

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

//! Build-time settings.

pub const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "
Copyright 2025 Hervé Quatremain
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law."
);

/// Default number of columns.
pub const DEFAULT_WIDTH: u16 = 12;

/// Default number of rows. Mazes are a bit taller than wide.
pub const DEFAULT_HEIGHT: u16 = 14;

/// On average, a walker takes that many steps before a branch starts from its tip.
/// Small values give more dead ends.
pub const DEFAULT_AVERAGE_STEPS_TO_NEXT_BRANCH: u32 = 15;

/// Capacity of each progress channel. When a channel is full, the oldest value is dropped.
pub const PROGRESS_CHANNEL_CAPACITY: usize = 16;
