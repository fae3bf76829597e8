//! City-file loading and result reports.
//!
//! City files hold one city per line: `<id> <x> <y>`, whitespace-separated
//! integers. Cities are numbered by line order; the `id` token must parse but
//! does not re-index the table. Blank lines are skipped.

use std::fmt;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};
use crate::ga::SearchResult;
use crate::geometry::{CityTable, Point};
use crate::tour::Tour;

/// Parses a city table from `reader`.
///
/// # Errors
/// [`Error::Parse`] for a line with the wrong number of fields or a
/// non-integer field, [`Error::EmptyCityTable`] if no cities were read,
/// [`Error::Io`] if reading fails.
pub fn parse_cities<R: BufRead>(reader: R) -> Result<CityTable> {
    let mut points = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() != 3 {
            return Err(Error::Parse {
                line: line_no,
                message: format!("expected `<id> <x> <y>`, found {} fields", fields.len()),
            });
        }
        let parse = |field: &str| {
            field.parse::<i64>().map_err(|e| Error::Parse {
                line: line_no,
                message: format!("`{field}` is not an integer: {e}"),
            })
        };
        let _id = parse(fields[0])?;
        let x = parse(fields[1])?;
        let y = parse(fields[2])?;
        points.push(Point::new(x as f64, y as f64));
    }
    CityTable::from_points(points)
}

/// Loads a city table from the file at `path`.
pub fn load_cities(path: impl AsRef<Path>) -> Result<CityTable> {
    let file = File::open(path.as_ref())?;
    let cities = parse_cities(BufReader::new(file))?;
    tracing::info!(path = %path.as_ref().display(), cities = cities.len(), "loaded cities");
    Ok(cities)
}

/// The persisted summary of a run.
///
/// Rendered as the tour's ids on one line, a blank line, then score,
/// population size, generation count, and elapsed seconds on their own lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub tour: Tour,
    pub score: f64,
    pub population_size: usize,
    pub max_generations: usize,
    pub elapsed_secs: f64,
}

impl From<&SearchResult> for Report {
    fn from(result: &SearchResult) -> Self {
        Self {
            tour: result.best_tour.clone(),
            score: result.best_score,
            population_size: result.population_size,
            max_generations: result.generations,
            elapsed_secs: result.elapsed.as_secs_f64(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.tour)?;
        writeln!(f)?;
        writeln!(f, "Score: {}", self.score)?;
        writeln!(f, "Pop Size: {}", self.population_size)?;
        writeln!(f, "Max itr: {}", self.max_generations)?;
        writeln!(f, "Time: {}", self.elapsed_secs)
    }
}

/// Writes the report for `result` to `path`, replacing any existing file.
pub fn write_report(path: impl AsRef<Path>, result: &SearchResult) -> Result<()> {
    let report = Report::from(result);
    fs::write(path.as_ref(), report.to_string())?;
    tracing::info!(path = %path.as_ref().display(), "report written");
    Ok(())
}
