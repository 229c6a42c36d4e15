//! Console formatting for the reports.

use std::io::{self, Write};

use crate::reports::TopMovie;
use crate::seed::SeedOutcome;

const TITLE_WIDTH: usize = 30;
const RULE_WIDTH: usize = 66;

/// Shorten `title` to at most 30 characters, ending in `...` when cut.
pub fn truncate_title(title: &str) -> String {
    if title.chars().count() > TITLE_WIDTH {
        let head: String = title.chars().take(TITLE_WIDTH - 3).collect();
        format!("{head}...")
    } else {
        title.to_string()
    }
}

pub fn write_seed_outcome(out: &mut impl Write, outcome: SeedOutcome) -> io::Result<()> {
    match outcome {
        SeedOutcome::Skipped => writeln!(out, "Database already has data — skipping seeding."),
        SeedOutcome::Seeded { .. } => writeln!(out, "Sample data seeded into database."),
    }
}

/// Fixed-width table of the top-rented report, ranked from 1.
pub fn write_top_movies(out: &mut impl Write, movies: &[TopMovie]) -> io::Result<()> {
    writeln!(out, "\nTop rented movies:")?;
    writeln!(
        out,
        "{:<4} {:<30} {:<10} {:<6} {:>7}",
        "Rank", "Title", "Genre", "Year", "Rentals"
    )?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    for (rank, movie) in movies.iter().enumerate() {
        let year = movie
            .release_year
            .map(|y| y.to_string())
            .unwrap_or_default();
        writeln!(
            out,
            "{:<4} {:<30} {:<10} {:<6} {:>7}",
            rank + 1,
            truncate_title(&movie.title),
            movie.genre.as_deref().unwrap_or(""),
            year,
            movie.rental_count
        )?;
    }
    Ok(())
}

pub fn write_average_duration(out: &mut impl Write, avg_days: Option<f64>) -> io::Result<()> {
    match avg_days {
        Some(days) => writeln!(
            out,
            "\nAverage rental duration (completed rentals): {days:.2} days"
        ),
        None => writeln!(
            out,
            "\nNo completed rentals found to compute average duration."
        ),
    }
}
