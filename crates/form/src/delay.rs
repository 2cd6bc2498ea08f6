use std::time::Duration;

/// Presentation delay for a staggered element: `offset + step * multiplier`,
/// rounded to whole milliseconds.
pub fn stagger_delay(step: Duration, offset: Duration, multiplier: f64) -> Duration {
    let ms = offset.as_millis() as f64 + step.as_millis() as f64 * multiplier;

    Duration::from_millis(ms.max(0.0).round() as u64)
}

/// Delays for `count` elements revealed one step apart after `offset`.
pub fn stagger_sequence(
    step: Duration,
    offset: Duration,
    count: usize,
) -> impl Iterator<Item = Duration> {
    (0..count).map(move |index| stagger_delay(step, offset, index as f64))
}

pub fn css_ms(delay: Duration) -> String {
    format!("{}ms", delay.as_millis())
}
