//! Operator-facing output and prompts
//!
//! All status lines go through this module so the whole run reads as one
//! timestamped transcript, the way the operator sees it on the terminal.
//! Fatal failures are reported by `main` via the error type instead.

use chrono::Local;
use console::Style;
use indicatif::{ProgressBar, ProgressStyle};
use inquire::{Confirm, Text};

use crate::error::Result;

fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Informational status line
pub fn info(msg: &str) {
    println!("{} {}", Style::new().dim().apply_to(timestamp()), msg);
}

/// Successful action line
pub fn done(msg: &str) {
    println!(
        "{} {} {}",
        Style::new().dim().apply_to(timestamp()),
        Style::new().green().bold().apply_to("ok"),
        msg
    );
}

/// Skipped action line (tool absent, value already set)
pub fn skip(msg: &str) {
    println!(
        "{} {} {}",
        Style::new().dim().apply_to(timestamp()),
        Style::new().yellow().apply_to("skip"),
        msg
    );
}

/// Non-fatal problem line (e.g. a tool-native config command failed)
pub fn warn(msg: &str) {
    println!(
        "{} {} {}",
        Style::new().dim().apply_to(timestamp()),
        Style::new().red().bold().apply_to("warn"),
        msg
    );
}

/// Raw diagnostic output, shown only with --debug
pub fn debug(label: &str, output: &str) {
    println!("{} {}", Style::new().dim().apply_to(timestamp()), label);
    for line in output.lines() {
        println!("    {}", Style::new().dim().apply_to(line));
    }
}

/// Prompt for a missing configuration value, blocking until provided
pub fn prompt_value(label: &str) -> Result<String> {
    Ok(Text::new(label).prompt()?)
}

/// Yes/no confirmation with an explicit default
pub fn confirm(question: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new(question)
        .with_default(default)
        .with_help_message("Press Enter to accept the default")
        .prompt()?)
}

/// Spinner shown while a single download is in flight
pub fn download_spinner(url: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(format!("downloading {url}"));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Progress bar over the tool registry
pub fn tool_progress(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    if let Ok(style) =
        ProgressStyle::default_bar().template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
    {
        pb.set_style(style.progress_chars("#>-"));
    }
    pb
}
