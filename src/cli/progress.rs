//! CLI outcome listener with a spinner and styled result output

use crate::cli::style::{Stylize, check, cross, spinner_style};
use anstream::{eprintln, println};
use async_trait::async_trait;
use capacity_predict::present::{View, present};
use capacity_predict::submit::OutcomeListener;
use capacity_predict::types::OutcomeState;
use indicatif::ProgressBar;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Prints each outcome as it arrives; spins while the request is pending
pub struct CliListener {
    spinner: Mutex<Option<ProgressBar>>,
}

impl CliListener {
    /// Create a listener with no spinner running
    pub const fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn start_spinner(&self, message: String) {
        let bar = ProgressBar::new_spinner();
        bar.set_style(spinner_style());
        bar.set_message(message);
        bar.enable_steady_tick(Duration::from_millis(80));
        *self.spinner.lock().unwrap_or_else(PoisonError::into_inner) = Some(bar);
    }

    fn stop_spinner(&self) {
        if let Some(bar) = self
            .spinner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            bar.finish_and_clear();
        }
    }
}

/// Print a settled view to the matching stream
pub fn print_view(view: &View) {
    match view {
        View::Loading => println!("{}", view.muted()),
        View::Result(value) => {
            let shown = if value.is_empty() {
                "(no value returned)".muted().to_string()
            } else {
                value.accent().to_string()
            };
            println!(
                "{} {} {shown}",
                check(),
                "Predicted Reversible Capacity:".success()
            );
        }
        View::Error(message) => {
            eprintln!("{} {} {message}", cross(), "Error:".error());
        }
    }
}

#[async_trait]
impl OutcomeListener for CliListener {
    async fn on_transition(&self, state: &OutcomeState) {
        let Some(view) = present(state) else {
            return;
        };

        if state.is_loading() {
            self.start_spinner(view.to_string());
        } else {
            self.stop_spinner();
            print_view(&view);
        }
    }
}
