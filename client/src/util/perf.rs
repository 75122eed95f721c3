//! Page-load timing arithmetic for the development performance log.

#[cfg(test)]
#[path = "perf_test.rs"]
mod perf_test;

/// Hostname on which the load-time log is enabled.
pub const DEV_HOSTNAME: &str = "localhost";

#[must_use]
pub fn is_dev_host(hostname: &str) -> bool {
    hostname == DEV_HOSTNAME
}

/// Milliseconds between navigation start and the end of the load event.
///
/// Navigation Timing reports `0` for events that have not happened yet, so an
/// unfinished load clamps to zero instead of going negative.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn page_load_ms(navigation_start: f64, load_event_end: f64) -> u64 {
    let elapsed = load_event_end - navigation_start;
    if elapsed.is_finite() && elapsed > 0.0 { elapsed.round() as u64 } else { 0 }
}
