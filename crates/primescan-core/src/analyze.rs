//! Solution file analysis.
//!
//! Reads a log of reported interval starts, verifies each one and
//! summarises the spacing between the verified starts. A [`Neighbourhood`]
//! restricts the analysis to starts near a known solution and yields a
//! density figure.
//!
//! Recognised entries are `N=<digits>` anywhere on a line (spaces around
//! `=` allowed) and search output lines of the form `SUCCESS:<digits>`.
//! Everything else is ignored.

use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use tracing::{debug, warn};

use crate::cursor::PrimeCursor;
use crate::error::{Error, Result};
use crate::verify::{Verification, verify_start};

/// The integers within `radius` of `center`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Neighbourhood {
    pub center: u64,
    pub radius: u64,
}

impl Neighbourhood {
    pub fn new(center: u64, radius: u64) -> Self {
        Self { center, radius }
    }

    pub fn contains(&self, n: u64) -> bool {
        n.abs_diff(self.center) <= self.radius
    }

    /// Verified starts per integer, over a span of `2 * radius`
    pub fn density(&self, count: usize) -> Option<f64> {
        let span = self.radius.saturating_mul(2);
        (span > 0).then(|| count as f64 / span as f64)
    }
}

/// Spacing between consecutive verified starts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GapStats {
    pub count: usize,
    pub min: u64,
    pub max: u64,
    pub mean: f64,
    pub median: f64,
}

impl GapStats {
    /// Gaps between consecutive values of an ascending slice
    pub fn from_sorted(values: &[u64]) -> Option<Self> {
        let mut gaps: Vec<u64> = values.windows(2).map(|w| w[1] - w[0]).collect();
        if gaps.is_empty() {
            return None;
        }
        gaps.sort_unstable();

        let count = gaps.len();
        let mean = gaps.iter().map(|&g| g as f64).sum::<f64>() / count as f64;
        let median = if count % 2 == 1 {
            gaps[count / 2] as f64
        } else {
            (gaps[count / 2 - 1] as f64 + gaps[count / 2] as f64) / 2.0
        };

        Some(Self {
            count,
            min: gaps[0],
            max: gaps[count - 1],
            mean,
            median,
        })
    }
}

/// Summary of a solutions file
#[derive(Debug, Clone, Serialize)]
pub struct SolutionReport {
    /// Distinct entries read
    pub total: usize,
    pub neighbourhood: Option<Neighbourhood>,
    /// Entries skipped for lying outside the neighbourhood
    pub outside: usize,
    pub verified: Vec<u64>,
    pub rejected: Vec<Verification>,
    /// `None` with fewer than two verified starts
    pub gaps: Option<GapStats>,
    /// Verified starts per integer of the neighbourhood
    pub density: Option<f64>,
    /// Whether the neighbourhood's center is among the verified starts
    pub includes_center: Option<bool>,
}

impl SolutionReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Extract the interval start from one line, if it carries one
pub fn parse_solution_line(line: &str) -> Option<Result<u64>> {
    let digits = if let Some(rest) = line.trim().strip_prefix("SUCCESS:") {
        rest.trim()
    } else {
        line.match_indices('N').find_map(|(i, _)| {
            let rest = line[i + 1..].trim_start().strip_prefix('=')?.trim_start();
            let end = rest
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(rest.len());
            (end > 0).then(|| &rest[..end])
        })?
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(
        digits
            .parse::<u64>()
            .map_err(|e| Error::InvalidSolution(format!("{}: {}", digits, e))),
    )
}

/// All distinct starts in `text`, ascending.
///
/// Entries that do not fit in a `u64` are skipped with a warning.
pub fn parse_solutions(text: &str) -> Vec<u64> {
    let mut solutions = BTreeSet::new();
    for (line_no, line) in text.lines().enumerate() {
        match parse_solution_line(line) {
            Some(Ok(n)) => {
                solutions.insert(n);
            }
            Some(Err(e)) => warn!("Skipping line {}: {}", line_no + 1, e),
            None => {}
        }
    }
    debug!("Parsed {} distinct solutions", solutions.len());
    solutions.into_iter().collect()
}

/// Verify every start in `solutions` and summarise the verified ones.
///
/// With a `neighbourhood`, starts outside it are counted and skipped.
pub fn analyze_solutions<C: PrimeCursor + ?Sized>(
    solutions: &[u64],
    cursor: &mut C,
    neighbourhood: Option<Neighbourhood>,
) -> SolutionReport {
    let candidates: Vec<u64> = solutions
        .iter()
        .copied()
        .filter(|&n| neighbourhood.is_none_or(|hood| hood.contains(n)))
        .collect();
    let outside = solutions.len() - candidates.len();
    if outside > 0 {
        debug!("{} entries outside the neighbourhood", outside);
    }

    let mut verified = Vec::new();
    let mut rejected = Vec::new();
    for &start in &candidates {
        let result = verify_start(cursor, start);
        if result.verified {
            verified.push(start);
        } else {
            rejected.push(result);
        }
    }

    let gaps = GapStats::from_sorted(&verified);
    let density = neighbourhood.and_then(|hood| hood.density(verified.len()));
    let includes_center =
        neighbourhood.map(|hood| verified.binary_search(&hood.center).is_ok());
    SolutionReport {
        total: solutions.len(),
        neighbourhood,
        outside,
        verified,
        rejected,
        gaps,
        density,
        includes_center,
    }
}

/// Read, verify and summarise a solutions file
pub fn analyze_file<P: AsRef<Path>, C: PrimeCursor + ?Sized>(
    path: P,
    cursor: &mut C,
    neighbourhood: Option<Neighbourhood>,
) -> Result<SolutionReport> {
    let text = fs::read_to_string(path)?;
    let solutions = parse_solutions(&text);
    Ok(analyze_solutions(&solutions, cursor, neighbourhood))
}

/// Write `solutions` as `N=<n>` lines, replacing the file
pub fn write_solutions<P: AsRef<Path>>(path: P, solutions: &[u64]) -> Result<()> {
    let mut out = BufWriter::new(File::create(path.as_ref())?);
    for n in solutions {
        writeln!(out, "N={}", n)?;
    }
    out.flush()?;
    debug!(
        "Wrote {} solutions to {}",
        solutions.len(),
        path.as_ref().display()
    );
    Ok(())
}
