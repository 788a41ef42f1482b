//! CLI presenter for output formatting

use std::sync::Arc;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

/// Presenter for CLI output formatting
pub struct Presenter {
    spinner: Option<ProgressBar>,
}

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self { spinner: None }
    }

    /// Start a spinner with message
    pub fn start_spinner(&mut self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    /// Mark spinner as success and finish
    pub fn spinner_success(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_with_message(format!("{} {}", "✓".green(), message));
        }
    }

    /// Mark spinner as failed and finish
    pub fn spinner_fail(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_with_message(format!("{} {}", "✗".red(), message));
        }
    }

    /// Stop spinner without status
    pub fn stop_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout (the actual recipe/transcript output)
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print a heading to stdout
    pub fn heading(&self, text: &str) {
        println!("{}", text.bold());
    }

    /// Print a numbered list of choices to stdout
    pub fn numbered_list(&self, items: &[String]) {
        for (i, item) in items.iter().enumerate() {
            println!("  {} {}", format!("{}.", i + 1).cyan(), item);
        }
    }

    /// Show a progress bar for recording
    pub fn show_recording_progress(&mut self, message: &str) {
        self.start_spinner(message);
    }

    /// Build a Send + Sync callback that updates the active spinner line.
    /// Returns None when no spinner is running.
    pub fn recording_progress_callback(
        &self,
    ) -> Option<Arc<dyn Fn(u64, u64) + Send + Sync>> {
        let spinner = self.spinner.clone()?;
        Some(Arc::new(move |elapsed_ms, total_ms| {
            let progress = render_progress(elapsed_ms, total_ms);
            spinner.set_message(format!("Listening... {}", progress));
        }))
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

fn render_progress(elapsed_ms: u64, total_ms: u64) -> String {
    let elapsed_secs = elapsed_ms / 1000;
    let total_secs = total_ms / 1000;
    let percent = if total_ms > 0 {
        (elapsed_ms as f64 / total_ms as f64 * 100.0).min(100.0)
    } else {
        0.0
    };

    let bar_width = 20;
    let filled = ((percent / 100.0) * bar_width as f64) as usize;
    let empty = bar_width - filled;

    format!(
        "[{}{}] {:>3}s / {}s",
        "█".repeat(filled).cyan(),
        "░".repeat(empty),
        elapsed_secs,
        total_secs
    )
}
