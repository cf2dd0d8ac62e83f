use std::time::{SystemTime, UNIX_EPOCH};
use sr_core::ports::ClockPort;

pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now_ms(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_utc_agrees_with_now_ms() {
        let clock = SystemClock;
        let ms = clock.now_ms();
        let utc = clock.now_utc();
        assert!((utc.timestamp_millis() - ms).abs() < 5_000);
    }
}
