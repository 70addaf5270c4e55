//! Progress indicators for CLI operations

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress bar counting processed identifiers
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let style = ProgressStyle::default_bar()
        .template("{msg}\n{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");

    let pb = ProgressBar::new(total);
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb
}

/// Spinner for a single long-running lookup chain
pub fn create_spinner(message: &str) -> ProgressBar {
    let style = ProgressStyle::default_spinner()
        .template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());

    let pb = ProgressBar::new_spinner();
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
