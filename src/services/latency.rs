use std::sync::LazyLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Last average gateway heartbeat latency, shown by `/ping`.
pub struct LatencyService;

static LAST_LATENCY_MS: LazyLock<AtomicU64> = LazyLock::new(|| AtomicU64::new(0));

impl LatencyService {
    pub fn update(latency: Option<Duration>) {
        let ms = latency.map(|d| d.as_millis() as u64).unwrap_or(0);
        LAST_LATENCY_MS.store(ms, Ordering::Relaxed);
    }

    pub fn get() -> Option<u64> {
        match LAST_LATENCY_MS.load(Ordering::Relaxed) {
            0 => None,
            ms => Some(ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latency_round_trip() {
        LatencyService::update(Some(Duration::from_millis(42)));
        assert_eq!(LatencyService::get(), Some(42));
        LatencyService::update(None);
        assert_eq!(LatencyService::get(), None);
    }
}
