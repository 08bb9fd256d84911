use std::{collections::HashSet, sync::Mutex};

/// A mutation-safe set recording which keys have been claimed.
///
/// The set has exactly one operation, [`VisitedSet::try_claim`], which checks for and
/// marks a key in a single indivisible step. Contenders racing on the same key do not
/// queue for turns; they race, and every caller except the winner is told to back
/// off.
///
/// A `VisitedSet` is meant to be created per operation (one per crawl) and shared
/// into every task by reference or [`Arc`][std::sync::Arc], not held in a global.
#[derive(Debug, Default)]
pub struct VisitedSet {
    keys: Mutex<HashSet<String>>,
}

impl VisitedSet {
    /// Creates a set with no claimed keys.
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically checks whether `key` has been claimed, claiming it if it hasn't.
    ///
    /// Returns `true` exactly once per distinct key, no matter how many threads call
    /// this concurrently. The caller that receives `true` owns the key and may
    /// proceed; every other caller must treat the key as taken. A key never becomes
    /// unclaimed again for the lifetime of the set.
    pub fn try_claim(&self, key: &str) -> bool {
        let mut keys = self.keys.lock().unwrap();
        if keys.contains(key) {
            return false;
        }
        keys.insert(key.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::atomic::{AtomicUsize, Ordering},
        thread,
    };

    use super::*;

    #[test]
    fn first_claim_wins() {
        let set = VisitedSet::new();
        assert!(set.try_claim("a"));
        assert!(!set.try_claim("a"));
        assert!(!set.try_claim("a"));
    }

    #[test]
    fn distinct_keys_are_independent() {
        let set = VisitedSet::new();
        assert!(set.try_claim("a"));
        assert!(set.try_claim("b"));
        assert!(!set.try_claim("a"));
        assert!(!set.try_claim("b"));
    }

    #[test]
    fn concurrent_claims_have_a_single_winner() {
        let set = VisitedSet::new();
        let winners = AtomicUsize::new(0);
        thread::scope(|s| {
            for _ in 0..16 {
                s.spawn(|| {
                    if set.try_claim("contended") {
                        winners.fetch_add(1, Ordering::Relaxed);
                    }
                });
            }
        });
        assert_eq!(winners.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn concurrent_claims_on_many_keys() {
        let set = VisitedSet::new();
        let winners = AtomicUsize::new(0);
        thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    for key in ["a", "b", "c", "d"] {
                        if set.try_claim(key) {
                            winners.fetch_add(1, Ordering::Relaxed);
                        }
                    }
                });
            }
        });
        assert_eq!(winners.load(Ordering::Relaxed), 4);
    }
}
