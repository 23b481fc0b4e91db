use crate::constants::ROLLING_INTERVAL_MS;
use std::time::Duration;

pub const PHRASES: [&str; 6] = [
    "Coune LabWorks",
    "BASED IN BANDUNG",
    "INDONESIA",
    "ACCESSIBLE WORLDWIDE",
    "DESIGN AND CODE",
    "GENERATIVE VISUAL",
];

/// Index of the phrase on screen `elapsed` after the ticker started.
#[inline]
pub fn phrase_index_at(elapsed: Duration) -> usize {
    ((elapsed.as_millis() as u64 / ROLLING_INTERVAL_MS) % PHRASES.len() as u64) as usize
}

pub fn phrase_at(elapsed: Duration) -> &'static str {
    PHRASES[phrase_index_at(elapsed)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_every_two_seconds_and_wraps() {
        assert_eq!(phrase_at(Duration::ZERO), "Coune LabWorks");
        assert_eq!(phrase_at(Duration::from_millis(1999)), "Coune LabWorks");
        assert_eq!(phrase_at(Duration::from_millis(2000)), "BASED IN BANDUNG");
        assert_eq!(phrase_at(Duration::from_millis(10_500)), "GENERATIVE VISUAL");
        assert_eq!(phrase_at(Duration::from_millis(12_000)), "Coune LabWorks");
    }
}
