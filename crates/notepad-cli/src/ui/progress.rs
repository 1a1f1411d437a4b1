//! Spinner for the simulated persistence round trip, using indicatif.

use std::time::Duration;

use indicatif::{ProgressBar as IndicatifBar, ProgressStyle};

use super::context::UiContext;

/// A spinner for indeterminate progress.
///
/// Only animates on an interactive pretty terminal; elsewhere it is inert so
/// piped output stays clean.
pub struct Spinner {
    bar: Option<IndicatifBar>,
}

impl Spinner {
    /// Create and start a spinner with the given message.
    pub fn start(ctx: &UiContext, message: &str) -> Self {
        if !ctx.allows_animation() {
            return Self { bar: None };
        }

        let bar = IndicatifBar::new_spinner();
        let (template, frames): (&str, &[&str]) = if ctx.unicode {
            (
                "{spinner:.cyan} {msg}...",
                &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", ""],
            )
        } else {
            ("{spinner} {msg}...", &["|", "/", "-", "\\", ""])
        };
        if let Ok(style) = ProgressStyle::default_spinner().template(template) {
            bar.set_style(style.tick_strings(frames));
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar: Some(bar) }
    }

    /// Clear the spinner line.
    pub fn finish(mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}
