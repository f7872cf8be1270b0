//! Analyze command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use primescan_core::pattern::WINDOW_SIZE;
use primescan_core::{Neighbourhood, SieveCursor, SolutionReport, analyze_file, write_solutions};

/// Run the analyze command
pub fn run(
    file: &Path,
    neighbourhood: Option<Neighbourhood>,
    export: Option<&Path>,
    json: bool,
) -> Result<()> {
    let mut cursor = SieveCursor::new();
    let report = analyze_file(file, &mut cursor, neighbourhood)
        .with_context(|| format!("Failed to analyze {}", file.display()))?;

    if let Some(path) = export {
        write_solutions(path, &report.verified)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        eprintln!(
            "Saved {} verified solutions to {}",
            report.verified.len(),
            path.display()
        );
    }

    if json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", format_report(&report));
    }
    Ok(())
}

fn format_report(report: &SolutionReport) -> String {
    let mut text = format!("Solutions: {}\n", report.total);
    if let Some(hood) = &report.neighbourhood {
        text.push_str(&format!(
            "Within {} of {}: {} ({} outside)\n",
            hood.radius,
            hood.center,
            report.total - report.outside,
            report.outside
        ));
    }
    text.push_str(&format!("Verified: {}\n", report.verified.len()));
    for rejected in &report.rejected {
        let count = if rejected.prime_count > WINDOW_SIZE {
            format!(">{}", WINDOW_SIZE)
        } else {
            rejected.prime_count.to_string()
        };
        text.push_str(&format!("  rejected N={} ({} primes)\n", rejected.start, count));
    }

    match &report.gaps {
        Some(gaps) => {
            text.push_str(&format!("Gaps between verified solutions ({}):\n", gaps.count));
            text.push_str(&format!("  min:    {}\n", gaps.min));
            text.push_str(&format!("  max:    {}\n", gaps.max));
            text.push_str(&format!("  mean:   {:.1}\n", gaps.mean));
            text.push_str(&format!("  median: {:.1}\n", gaps.median));
        }
        None => text.push_str("Fewer than two verified solutions, no gap statistics\n"),
    }

    if let (Some(first), Some(last)) = (report.verified.first(), report.verified.last()) {
        text.push_str(&format!("First: {}\nLast: {}\n", first, last));
    }
    if let Some(density) = report.density {
        text.push_str(&format!("Density: {:.2e} per integer\n", density));
    }
    match report.includes_center {
        Some(true) => text.push_str("Center is among the verified solutions\n"),
        Some(false) => text.push_str("Center is not among the verified solutions\n"),
        None => {}
    }
    text
}
