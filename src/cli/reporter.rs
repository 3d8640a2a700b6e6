// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI output reporter with colored formatting

use super::runner::{FileReport, Outcome};
use crate::geometry::Confidence;
use crate::pricing::Estimate;
use colored::*;
use std::time::Duration;

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// Report one file's outcome
    pub fn report_file(report: &FileReport) {
        let file = report.path.display().to_string();
        match &report.outcome {
            Outcome::Estimated(estimate) => Self::report_estimate(&file, estimate, report.duration),
            Outcome::Skipped(reason) => {
                println!("{} {} ({})", "Skipped:".yellow().bold(), file, reason)
            }
            Outcome::Failed(message) => Self::report_error(&format!("{}: {}", file, message)),
        }
    }

    pub fn report_estimate(file: &str, estimate: &Estimate, duration: Duration) {
        println!("\n{}", "━".repeat(80).bright_black());
        println!("{} {}", "File:".bold(), file.cyan());
        println!("{}", "━".repeat(80).bright_black());

        let confidence = match estimate.confidence {
            Confidence::High => estimate.confidence.as_str().green(),
            Confidence::Medium => estimate.confidence.as_str().yellow(),
            Confidence::Low => estimate.confidence.as_str().red(),
        };
        println!("  {} {}", "Confidence:".bright_black(), confidence);

        println!("\n{}", "Geometry:".bold());
        Self::print_field("Triangles", estimate.triangle_count.to_string());
        Self::print_field("Volume", format!("{:.2} cm³", estimate.volume_cm3));
        Self::print_field("Surface area", format!("{:.2} cm²", estimate.surface_area_cm2));
        let size = estimate.bounding_box_mm.size();
        Self::print_field(
            "Size",
            format!("{:.2} × {:.2} × {:.2} mm", size.x, size.y, size.z),
        );

        println!("\n{}", "Estimate:".bold());
        Self::print_field(
            "Material",
            format!("{:.1} g {}", estimate.estimated_grams, estimate.material),
        );
        Self::print_field("Print time", format!("{:.2} h", estimate.estimated_hours));
        Self::print_field("Infill", format!("{}%", estimate.recommended_infill));
        println!(
            "  {} {}",
            "Price:".bright_black(),
            format!("{:.2}", estimate.estimated_price).green().bold()
        );

        for warning in &estimate.warnings {
            Self::report_warning(warning);
        }

        println!(
            "\n  {} {}",
            "Time:".bright_black(),
            Self::format_duration(duration).yellow()
        );
        println!("{}", "━".repeat(80).bright_black());
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("{} {}", "Error:".red().bold(), message);
    }

    /// Report warning
    pub fn report_warning(message: &str) {
        println!("  {} {}", "Warning:".yellow().bold(), message);
    }

    fn print_field(name: &str, value: String) {
        println!("  {} {}", format!("{}:", name).bright_black(), value.cyan());
    }

    /// Format duration for display
    fn format_duration(duration: Duration) -> String {
        let micros = duration.as_micros();

        if micros < 1_000 {
            format!("{}µs", micros)
        } else if micros < 1_000_000 {
            format!("{:.2}ms", micros as f64 / 1_000.0)
        } else {
            format!("{:.2}s", micros as f64 / 1_000_000.0)
        }
    }
}
