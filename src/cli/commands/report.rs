//! Report command handler

use gradesheet::core::config::Config;
use gradesheet::core::loader::parse_roster_csv;
use gradesheet::core::report::{ReportContext, ReportFormat};
use gradesheet::core::Roster;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;

/// Load a roster CSV, save it, and write a report for it
///
/// # Errors
/// Returns a message if the format is unknown, the roster cannot be loaded,
/// the roster fails validation, or the report cannot be written
pub fn run(
    input_file: &Path,
    output_file: Option<&Path>,
    format_str: &str,
    config: &Config,
    verbose: bool,
) -> Result<(), String> {
    let format = ReportFormat::from_str(format_str)
        .map_err(|e| format!("✗ {e}. Use: markdown or html"))?;

    let records = parse_roster_csv(input_file)
        .map_err(|e| format!("✗ Failed to load roster {}: {e}", input_file.display()))?;
    let mut roster = Roster::with_records(records, config.grading_scale());

    let notice = roster.commit().map_err(|e| format!("✗ {e}"))?;
    if verbose {
        println!("{notice}");
    }

    let stem = input_file
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("roster")
        .to_string();

    let output_path: PathBuf = if let Some(output) = output_file {
        output.to_path_buf()
    } else {
        let reports_dir = PathBuf::from(&config.paths.reports_dir);
        std::fs::create_dir_all(&reports_dir).map_err(|e| {
            format!(
                "✗ Failed to create reports directory {}: {e}",
                reports_dir.display()
            )
        })?;
        reports_dir.join(format!("{stem}_report.{}", format.extension()))
    };

    let ctx = ReportContext::from_roster(stem, config.session.year.clone(), &roster);
    format
        .generator()
        .generate(&ctx, &output_path)
        .map_err(|e| format!("✗ Failed to generate {format} report: {e}"))?;

    println!("✓ Report generated: {}", output_path.display());
    info!("Report exported to: {}", output_path.display());

    if verbose {
        print_summary(&ctx);
    }
    Ok(())
}

fn print_summary(ctx: &ReportContext) {
    println!("\n=== Summary ===");
    println!("Year: {}", ctx.year);
    println!("Courses: {}", ctx.rows.len());
    if let Some(summary) = &ctx.summary {
        println!("Credits: {}", summary.credits);
        println!("Average: {}", summary.average_label());
        println!("Overall grade: {}", summary.overall_grade_label());
    }
    if ctx.failing_count() > 0 {
        println!("⚠️  {} failing course(s)", ctx.failing_count());
    }
}
