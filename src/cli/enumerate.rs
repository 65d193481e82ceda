use std::time::Instant;

use indicatif::ProgressBar;
use polyominoes::{EnumerateError, Enumeration, Level};

use crate::{finish_bar, make_bar, EnumerateOpts};

/// Build every level up to `n`, drawing a progress bar for each one
/// unless `show_progress` is off. Returns the final level.
fn run_levels(n: usize, show_progress: bool, all_sizes: bool) -> Result<Level, EnumerateError> {
    let mut enumeration = Enumeration::new(n)?;
    let mut last = None;

    while let Some(next_n) = enumeration.next_n() {
        let bar = if show_progress && next_n > 1 {
            let bar = make_bar(0);
            bar.set_message(format!("Expanding base polyominoes of N = {}...", next_n - 1));
            bar
        } else {
            ProgressBar::hidden()
        };

        let start = Instant::now();

        let level = match enumeration.next_level(&bar) {
            Some(level) => level,
            None => break,
        };

        if show_progress && next_n > 1 {
            finish_bar(&bar, start.elapsed(), level.len(), level.n);
        }

        if all_sizes && level.n != n {
            println!("Unique polyominoes found for N = {}: {}.", level.n, level.len());
        }

        last = Some(level);
    }

    last.ok_or(EnumerateError::ZeroSize)
}

pub fn enumerate(opts: &EnumerateOpts) -> Result<(), EnumerateError> {
    let n = opts.n;

    let start = Instant::now();

    let level = run_levels(n, !opts.no_progress, opts.all_sizes)?;

    let duration = start.elapsed();

    if opts.list {
        for polyomino in level.polyominoes.iter() {
            println!("{}", polyomino.representation());
        }
    }

    println!("Unique polyominoes found for N = {n}: {}.", level.len());
    println!("Duration: {} ms", duration.as_millis());

    Ok(())
}
