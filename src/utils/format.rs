//! Human readable rendering of elapsed time

/// Format elapsed milliseconds as `MM:SS.cc`.
///
/// Minutes wrap at 60 and the fractional part is truncated to hundredths,
/// matching a classic stopwatch face.
pub fn format_elapsed(elapsed_millis: u64) -> String {
    let minutes = (elapsed_millis / 60_000) % 60;
    let seconds = (elapsed_millis / 1_000) % 60;
    let centis = (elapsed_millis % 1_000) / 10;
    format!("{:02}:{:02}.{:02}", minutes, seconds, centis)
}
