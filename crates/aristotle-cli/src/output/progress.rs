//! Progress display for research runs

use aristotle_core::{SessionObserver, Transition};
use indicatif::{ProgressBar, ProgressStyle};

use super::text::log_line;

const BAR_TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>3}% {msg}";

/// Mirrors a research session on stderr: a percentage bar plus one line per
/// activity log entry.
///
/// When stderr is not a terminal the bar is hidden by indicatif and the log
/// lines are written directly instead.
pub struct ProgressObserver {
    bar: ProgressBar,
    show_log: bool,
}

impl ProgressObserver {
    /// Observer for interactive output.
    pub fn new() -> Self {
        let bar = ProgressBar::new(100);
        bar.set_style(
            ProgressStyle::default_bar()
                .template(BAR_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        Self {
            bar,
            show_log: true,
        }
    }

    /// Observer that draws nothing, for machine-readable output.
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            show_log: false,
        }
    }

    /// Remove the bar once the stream has ended.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionObserver for ProgressObserver {
    fn on_transition(&mut self, transition: &Transition) {
        match transition {
            Transition::Started { topic } => self.bar.set_message(topic.clone()),
            Transition::Progress(percent) => self.bar.set_position(u64::from(*percent)),
            Transition::LogAppended(entry) => {
                if !self.show_log {
                    return;
                }
                let line = log_line(entry);
                if self.bar.is_hidden() {
                    eprintln!("{line}");
                } else {
                    self.bar.println(line);
                }
            },
            Transition::Completed(_) => {},
            Transition::InputEnabled(enabled) => {
                tracing::debug!(enabled, "Input state changed");
            },
        }
    }
}
