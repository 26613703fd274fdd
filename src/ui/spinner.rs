//! Spinner shown while a request is in flight. Each user action issues at
//! most one outstanding call, so a single spinner is all the progress UI the
//! client needs.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Start a spinner with the given message. Call [`finish`] or
/// [`finish_and_clear`] on the returned bar when the request resolves.
pub fn network_spinner(message: &str) -> ProgressBar {
    let style = ProgressStyle::default_spinner()
        .template("{spinner} {msg}")
        .expect("progress bar template is a valid static string");
    let bar = ProgressBar::new_spinner();
    bar.set_style(style);
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

/// Run `future` behind a spinner, clearing it when the future resolves.
pub async fn with_spinner<T, F>(message: &str, future: F) -> T
where
    F: std::future::Future<Output = T>,
{
    let bar = network_spinner(message);
    let result = future.await;
    bar.finish_and_clear();
    result
}
