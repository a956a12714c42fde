/*
progress.rs

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

//! Progress of the endpoint search.
//!
//! The generator publishes percentages into bounded [`async_channel`] channels.
//! Sending never blocks the generation thread: when a channel is full, its oldest value is
//! dropped. Consumers drain their [`async_channel::Receiver`] whenever they want, from any thread
//! or from an async task.

use async_channel::{Receiver, Sender};
use log::debug;

use crate::config::PROGRESS_CHANNEL_CAPACITY;

/// Set of progress subscribers.
#[derive(Debug, Default)]
pub struct Progress {
    senders: Vec<Sender<u8>>,

    /// Last published value.
    last: Option<u8>,
}

impl Progress {
    /// Create a [`Progress`] object without subscriber.
    pub fn new() -> Self {
        Self {
            senders: Vec::new(),
            last: None,
        }
    }

    /// Register a new subscriber and return its receiving end.
    pub fn subscribe(&mut self) -> Receiver<u8> {
        let (sender, receiver) = async_channel::bounded::<u8>(PROGRESS_CHANNEL_CAPACITY);
        self.senders.push(sender);
        receiver
    }

    /// Number of subscribers that still listen.
    pub fn num_subscribers(&self) -> usize {
        self.senders.iter().filter(|s| !s.is_closed()).count()
    }

    /// Return the last published percentage.
    pub fn last(&self) -> Option<u8> {
        self.last
    }

    /// Publish `completed * 100 / total` to every subscriber.
    ///
    /// A `total` of zero publishes 100.
    pub fn report(&mut self, completed: usize, total: usize) {
        let percent: u8 = if total == 0 {
            100
        } else {
            (completed.min(total) * 100 / total) as u8
        };
        self.last = Some(percent);

        // Forget about the subscribers that dropped their receiver
        self.senders.retain(|s| !s.is_closed());
        for sender in &self.senders {
            if let Err(e) = sender.force_send(percent) {
                debug!("Cannot publish progress {percent}%: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_subscriber_receives_values() {
        let mut progress: Progress = Progress::new();
        let first: Receiver<u8> = progress.subscribe();
        let second: Receiver<u8> = progress.subscribe();

        progress.report(1, 4);
        progress.report(4, 4);

        for receiver in [first, second] {
            assert_eq!(receiver.try_recv(), Ok(25));
            assert_eq!(receiver.try_recv(), Ok(100));
            assert!(receiver.try_recv().is_err());
        }
        assert_eq!(progress.last(), Some(100));
    }

    #[test]
    fn zero_total_reports_completion() {
        let mut progress: Progress = Progress::new();
        let receiver: Receiver<u8> = progress.subscribe();
        progress.report(0, 0);
        assert_eq!(receiver.try_recv(), Ok(100));
    }

    #[test]
    fn full_channel_keeps_latest_values() {
        let mut progress: Progress = Progress::new();
        let receiver: Receiver<u8> = progress.subscribe();
        let total: usize = PROGRESS_CHANNEL_CAPACITY * 3;
        for completed in 1..=total {
            progress.report(completed, total);
        }

        let values: Vec<u8> = std::iter::from_fn(|| receiver.try_recv().ok()).collect();
        assert_eq!(values.len(), PROGRESS_CHANNEL_CAPACITY);
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(values.last(), Some(&100));
    }

    #[test]
    fn dropped_receivers_are_forgotten() {
        let mut progress: Progress = Progress::new();
        let receiver: Receiver<u8> = progress.subscribe();
        drop(progress.subscribe());
        assert_eq!(progress.num_subscribers(), 1);

        progress.report(1, 2);
        assert_eq!(receiver.try_recv(), Ok(50));
    }
}
