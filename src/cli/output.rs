//! Terminal output and spinners for the CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::{Error, Result, pipeline::AtlasSummary};

/// Create a spinner for a pipeline stage
pub fn create_spinner(message: &str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template("{spinner:.green} {msg}")
        .map_err(|e| Error::ProgressBarTemplate {
            message: e.to_string(),
        })?;
    pb.set_style(style);
    pb.set_message(message.to_string());
    Ok(pb)
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print the headline numbers and the per-ply outcome table
pub fn print_summary(summary: &AtlasSummary) {
    print_subsection("Graph");
    print_kv("Boards", &format_number(summary.vertices));
    print_kv("Moves", &format_number(summary.edges));
    print_kv("Value-keeping moves", &format_number(summary.core_edges));
    print_kv(
        "Value-changing moves",
        &format_number(summary.informational_edges),
    );
    let root = summary
        .root_outcome
        .map_or_else(|| "n/a".to_string(), |o| o.to_string());
    print_kv("Root value", &root);

    print_subsection("Values by ply");
    println!("  {:>4} {:>8} {:>8} {:>8}", "ply", "O wins", "draw", "X wins");
    for row in &summary.plies {
        println!(
            "  {:>4} {:>8} {:>8} {:>8}",
            row.ply,
            format_number(row.o_wins),
            format_number(row.draws),
            format_number(row.x_wins)
        );
    }
}
