//! Progress reporting for CLI invocations

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use inspector_application::InvocationProgressNotifier;
use std::sync::Mutex;
use std::time::Duration;

/// Shows a spinner on stderr while a tool runs
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl InvocationProgressNotifier for ProgressReporter {
    fn on_invocation_start(&self, tool_name: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(tool_name.to_string());
        pb.set_message("running...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut spinner) = self.spinner.lock() {
            *spinner = Some(pb);
        }
    }

    fn on_invocation_complete(&self, tool_name: &str, success: bool) {
        let Ok(mut spinner) = self.spinner.lock() else {
            return;
        };
        if let Some(pb) = spinner.take() {
            let status = if success {
                format!("{} {}", "v".green(), tool_name)
            } else {
                format!("{} {}", "x".red(), tool_name)
            };
            pb.finish_and_clear();
            eprintln!("{}", status);
        }
    }
}
