//! Utility functions for user interaction and common operations.

use std::time::Duration;

use console::Term;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

const SPINNER_FRAMES: &[&str] = &[
    "[    ]", "[=   ]", "[==  ]", "[=== ]", "[====]", "[ ===]", "[  ==]", "[   =]",
];
const SPINNER_TICK: Duration = Duration::from_millis(120);

/// Indeterminate progress indicator drawn on stderr while a blocking job runs.
///
/// Drawing is skipped when stderr is not a terminal. The line is cleared by
/// [`Spinner::stop`], which must be awaited before the caller reports back.
pub struct Spinner {
    stop: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    pub fn start(prefix: &str) -> Self {
        let prefix = prefix.to_string();
        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            let term = Term::stderr();
            if !term.is_term() {
                let _ = stop_rx.await;
                return;
            }

            let mut ticker = tokio::time::interval(SPINNER_TICK);
            let mut frames = SPINNER_FRAMES.iter().cycle();
            loop {
                tokio::select! {
                    _ = &mut stop_rx => break,
                    _ = ticker.tick() => {
                        let frame = frames.next().copied().unwrap_or_default();
                        let _ = term.clear_line();
                        let _ = term.write_str(&format!("{prefix}{frame}"));
                    }
                }
            }
            let _ = term.clear_line();
        });

        Self {
            stop: Some(stop_tx),
            handle: Some(handle),
        }
    }

    pub async fn stop(mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
    }
}

/// Summarize the entries about to be removed, mirroring what was ticked
pub fn format_removal_message(labels: &[String]) -> String {
    let mut message = format!("Removing {} item(s):", labels.len());
    for label in labels.iter().take(5) {
        message.push_str(&format!("\n  {label}"));
    }
    if labels.len() > 5 {
        message.push_str(&format!("\n  ... and {} more", labels.len() - 5));
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn spinner_stops_cleanly() {
        let spinner = Spinner::start("Searching: ");
        tokio::time::sleep(Duration::from_millis(10)).await;
        spinner.stop().await;
    }

    #[test]
    fn removal_message_truncates_long_lists() {
        let labels: Vec<String> = (1..=7).map(|i| format!("App {i}")).collect();
        let message = format_removal_message(&labels);
        assert!(message.starts_with("Removing 7 item(s):"));
        assert!(message.contains("App 5"));
        assert!(!message.contains("App 6"));
        assert!(message.ends_with("... and 2 more"));
    }
}
