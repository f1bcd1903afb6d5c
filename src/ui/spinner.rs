//! Progress spinner shown while a pipeline run is in flight.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const TICK_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const TICK_INTERVAL: Duration = Duration::from_millis(80);

/// A terminal spinner tied to one in-flight operation.
///
/// Clears itself from the terminal when stopped or dropped, so the rendered
/// panel is never interleaved with spinner frames.
pub struct Spinner {
    progress_bar: ProgressBar,
}

impl Spinner {
    /// Starts a spinner with the given message.
    #[allow(clippy::unwrap_used)]
    pub fn new(message: &str) -> Self {
        // unwrap is safe: template string is a compile-time constant
        let style = ProgressStyle::default_spinner()
            .tick_strings(TICK_FRAMES)
            .template("{spinner} {msg}")
            .unwrap();

        let progress_bar = ProgressBar::new_spinner();
        progress_bar.set_style(style);
        progress_bar.set_message(message.to_string());
        progress_bar.enable_steady_tick(TICK_INTERVAL);

        Self { progress_bar }
    }

    /// Starts the spinner shown while translation and summarization run
    /// concurrently. Speech synthesis follows under the same spinner.
    pub fn pipeline_run() -> Self {
        Self::new("Translating and summarizing...")
    }

    /// The message currently shown next to the spinner.
    pub fn message(&self) -> String {
        self.progress_bar.message()
    }

    /// Stops the spinner and clears it from the terminal.
    pub fn stop(&self) {
        self.progress_bar.finish_and_clear();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.progress_bar.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_run_message() {
        let spinner = Spinner::pipeline_run();
        assert_eq!(spinner.message(), "Translating and summarizing...");
        spinner.stop();
    }

    #[test]
    fn test_stop_is_idempotent() {
        let spinner = Spinner::new("working");
        spinner.stop();
        spinner.stop();
    }
}
