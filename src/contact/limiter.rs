//! Sliding-window rate limiter keyed by client address

use std::collections::HashMap;
use std::time::{Duration, Instant};

pub struct RateLimiter {
    max_requests: usize,
    window: Duration,
    hits: HashMap<String, Vec<Instant>>,
}

impl RateLimiter {
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            hits: HashMap::new(),
        }
    }

    /// Record a request from `key` and report whether it is allowed
    pub fn check(&mut self, key: &str) -> bool {
        self.check_at(key, Instant::now())
    }

    pub fn check_at(&mut self, key: &str, now: Instant) -> bool {
        self.prune(now);

        let recent = self.hits.get(key).map_or(0, Vec::len);
        if recent >= self.max_requests {
            return false;
        }
        self.hits.entry(key.to_string()).or_default().push(now);
        true
    }

    /// Apply new limits, keeping the recorded hits
    pub fn reconfigure(&mut self, max_requests: usize, window: Duration) {
        self.max_requests = max_requests;
        self.window = window;
    }

    /// Drop clients whose window has emptied
    fn prune(&mut self, now: Instant) {
        let window = self.window;
        self.hits.retain(|_, hits| {
            hits.retain(|t| now.saturating_duration_since(*t) < window);
            !hits.is_empty()
        });
    }

    #[cfg(test)]
    fn tracked(&self) -> usize {
        self.hits.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_expiry() {
        let mut limiter = RateLimiter::new(2, Duration::from_secs(10));
        let t0 = Instant::now();

        assert!(limiter.check_at("a", t0));
        assert!(limiter.check_at("a", t0 + Duration::from_secs(1)));
        assert!(!limiter.check_at("a", t0 + Duration::from_secs(2)));
        // first hit has aged out
        assert!(limiter.check_at("a", t0 + Duration::from_secs(10)));
        assert!(!limiter.check_at("a", t0 + Duration::from_secs(10)));
    }

    #[test]
    fn test_zero_limit_blocks_everything() {
        let mut limiter = RateLimiter::new(0, Duration::from_secs(10));
        assert!(!limiter.check("a"));
        assert_eq!(limiter.tracked(), 0);
    }

    #[test]
    fn test_idle_clients_are_forgotten() {
        let mut limiter = RateLimiter::new(2, Duration::from_secs(10));
        let t0 = Instant::now();

        assert!(limiter.check_at("a", t0));
        assert!(limiter.check_at("b", t0 + Duration::from_secs(5)));
        assert_eq!(limiter.tracked(), 2);

        limiter.prune(t0 + Duration::from_secs(10));
        assert_eq!(limiter.tracked(), 1);

        // other clients are pruned when anyone checks in
        assert!(limiter.check_at("c", t0 + Duration::from_secs(20)));
        assert_eq!(limiter.tracked(), 1);
    }

    #[test]
    fn test_reconfigure_keeps_hits() {
        let mut limiter = RateLimiter::new(3, Duration::from_secs(10));
        let t0 = Instant::now();

        assert!(limiter.check_at("a", t0));
        assert!(limiter.check_at("a", t0));
        limiter.reconfigure(2, Duration::from_secs(10));
        assert!(!limiter.check_at("a", t0));
    }
}
