/*
cli_options.rs

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

//! Process command-line options.
//!
//! # Examples
//!
//! Generate a small maze and show its solution. The output looks like this:
//!
//! ```text
//! $ mazegen -x 4 -y 3 --solution
//! +---+---+---+---+
//! | S   .   .   . |
//! +---+---+---+   +
//! | E   .     | . |
//! +---+   +---+   +
//! |     .   .   . |
//! +---+---+---+---+
//! ```
//!
//! Generate three mazes with many dead ends, in JSON, and print some statistics on stderr:
//!
//! ```text
//! $ mazegen -x 30 -y 36 -b 4 -c 3 --json --summary
//! ```

use clap::Parser;
use log::{LevelFilter, debug};
use std::io::Write;
use std::thread;

use mazegen::config::{
    COPYRIGHT_NOTICE, DEFAULT_AVERAGE_STEPS_TO_NEXT_BRANCH, DEFAULT_HEIGHT, DEFAULT_WIDTH,
};
use mazegen::draw::{Draw, MazeLayout, Style};
use mazegen::generator::grid::Grid;
use mazegen::generator::maze::Maze;
use mazegen::generator::maze_error::MazeError;
use mazegen::generator::maze_generator::MazeGenerator;

/// Generate random mazes.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Number of columns
    #[arg(short = 'x', long, default_value_t = DEFAULT_WIDTH, value_parser = clap::value_parser!(u16).range(1..))]
    width: u16,

    /// Number of rows
    #[arg(short = 'y', long, default_value_t = DEFAULT_HEIGHT, value_parser = clap::value_parser!(u16).range(1..))]
    height: u16,

    /// Average number of steps before a corridor branches. Smaller values give more dead ends
    #[arg(short, long, default_value_t = DEFAULT_AVERAGE_STEPS_TO_NEXT_BRANCH, value_parser = clap::value_parser!(u32).range(1..))]
    branch: u32,

    /// Seed of the random generator. The current time is used by default
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of mazes to generate. Each maze uses the next seed
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Mark the solution path
    #[arg(long, default_value_t = false)]
    solution: bool,

    /// Width of the cells in the text output
    #[arg(value_enum, long, default_value_t = Style::Wide)]
    style: Style,

    /// Print the mazes in JSON instead of text
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// Show the progress of the endpoint search on stderr
    #[arg(short, long, default_value_t = false)]
    progress: bool,

    /// Print some statistics after generating the mazes
    #[arg(long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options. Return the exit code.
pub fn run() -> u8 {
    let args: Args = Args::parse();

    let mut builder: env_logger::Builder = env_logger::Builder::from_default_env();
    if args.debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();

    let base_seed: u64 = args
        .seed
        .unwrap_or_else(|| chrono::Utc::now().timestamp_millis().unsigned_abs());

    let mut mazes: Vec<Maze> = Vec::with_capacity(args.count);
    for i in 0..args.count {
        let seed: u64 = base_seed.wrapping_add(i as u64);
        debug!("Maze {i}: seed {seed}");
        match generate(&args, seed) {
            Ok(maze) => mazes.push(maze),
            Err(e) => {
                eprintln!("Error: {e}");
                return 1;
            }
        }
    }

    //
    // Print the mazes
    //
    if args.json {
        let layouts: Vec<MazeLayout> = mazes.iter().map(MazeLayout::new).collect();
        let ret: Result<String, serde_json::Error> = if layouts.len() == 1 {
            layouts[0].to_json()
        } else {
            serde_json::to_string_pretty(&layouts)
        };
        match ret {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: cannot serialize the mazes: {e}");
                return 1;
            }
        }
    } else {
        let texts: Vec<String> = mazes
            .iter()
            .map(|m| {
                Draw::new(m)
                    .style(args.style)
                    .show_solution(args.solution)
                    .render()
            })
            .collect();
        print!("{}", texts.join("\n"));
    }

    // Print some stats
    if args.summary && !mazes.is_empty() {
        let count: f32 = mazes.len() as f32;
        let total: f32 = mazes.iter().map(|m| m.stats().duration).sum();
        let max: f32 = mazes
            .iter()
            .map(|m| m.stats().duration)
            .fold(0.0, f32::max);
        let length: usize = mazes.iter().map(|m| m.length()).sum();
        let leaves: usize = mazes.iter().map(|m| m.stats().leaves).sum();
        let branches: usize = mazes.iter().map(|m| m.stats().branches).sum();
        let fills: usize = mazes.iter().map(|m| m.stats().fill_passes).sum();
        eprintln!(
            "
        total time = {}s
      average time = {}s
          max time = {}s
    average length = {}
 average dead ends = {}
  average branches = {}
     average fills = {}",
            total,
            total / count,
            max,
            length as f32 / count,
            leaves as f32 / count,
            branches as f32 / count,
            fills as f32 / count,
        );
    }
    0
}

/// Generate one maze.
///
/// With the `--progress` option, the generation runs in a worker thread while the current thread
/// prints the progress.
fn generate(args: &Args, seed: u64) -> Result<Maze, MazeError> {
    let grid: Grid = Grid::new(args.width as usize, args.height as usize)?;
    let mut generator: MazeGenerator = MazeGenerator::with_seed(grid, seed);
    generator.set_average_steps_to_next_branch(args.branch)?;

    if !args.progress {
        generator.generate()?;
        return generator.into_maze();
    }

    let receiver: async_channel::Receiver<u8> = generator.subscribe_progress();
    let handle: thread::JoinHandle<Result<Maze, MazeError>> = thread::spawn(move || {
        generator.generate()?;
        // Dropping the generator closes the progress channel
        generator.into_maze()
    });

    let mut stderr: std::io::Stderr = std::io::stderr();
    while let Ok(percent) = receiver.recv_blocking() {
        let _ = write!(stderr, "\rSearching for the start and the end: {percent:>3}%");
        let _ = stderr.flush();
    }
    let _ = writeln!(stderr);

    match handle.join() {
        Ok(ret) => ret,
        Err(e) => std::panic::resume_unwind(e),
    }
}
