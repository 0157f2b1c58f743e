//! Codename pool and allocation logic.
//!
//! The pool is a fixed, ordered list of Nordic names defined at compile time.
//! Availability is always computed against a snapshot of the records currently
//! in the store; this module holds no state of its own.

use rand::seq::SliceRandom;

use crate::error::{ApiError, Result};

/// The fixed pool of assignable codenames.
pub const NORDIC_NAMES: &[&str] = &[
    "Bjorn", "Erik", "Freya", "Astrid", "Leif", "Ragnar", "Sigrid", "Tor", "Ulf",
    "Einar", "Hilda", "Knut", "Ivar", "Solveig", "Sven", "Gudrun", "Arne", "Ylva",
    "Olav", "Thora", "Sigurd", "Runa", "Harald", "Ingrid", "Fenrir", "Alva",
    "Skadi", "Bragi", "Trygve", "Vidar", "Odin", "Loki", "Frigg", "Helga", "Tyr",
    "Balder", "Njord", "Hodur", "Magnus", "Gunnar", "Torsten", "Dag", "Halvard",
    "Ragnhild", "Kari", "Eydis", "Bodil", "Agni", "Yrsa", "Jorund", "Viggo",
    "Steinar", "Geir", "Eivor", "Hakon", "Snorri", "Sigyn", "Alrek", "Ingvar",
];

/// Names from the pool not present in `used`, in pool order.
pub fn available_names(used: &[String]) -> Vec<&'static str> {
    NORDIC_NAMES
        .iter()
        .copied()
        .filter(|name| !used.iter().any(|u| u == name))
        .collect()
}

/// Pick one name uniformly at random from the available slice.
pub fn allocate(available: &[&'static str]) -> Result<&'static str> {
    available
        .choose(&mut rand::thread_rng())
        .copied()
        .ok_or(ApiError::NoNamesAvailable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_size_and_uniqueness() {
        assert_eq!(NORDIC_NAMES.len(), 58);

        let mut seen = std::collections::HashSet::new();
        for name in NORDIC_NAMES {
            assert!(seen.insert(name), "duplicate name in pool: {}", name);
        }
    }

    #[test]
    fn test_availability_excludes_used_and_preserves_order() {
        let used = vec!["Erik".to_string(), "Odin".to_string()];
        let available = available_names(&used);

        assert_eq!(available.len(), NORDIC_NAMES.len() - 2);
        assert!(!available.contains(&"Erik"));
        assert!(!available.contains(&"Odin"));

        // Pool order is preserved
        let positions: Vec<usize> = available
            .iter()
            .map(|n| NORDIC_NAMES.iter().position(|p| p == n).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_availability_with_nothing_used() {
        let available = available_names(&[]);
        assert_eq!(available, NORDIC_NAMES);
    }

    #[test]
    fn test_allocate_picks_from_available() {
        let available = vec!["Freya", "Loki", "Tyr"];
        for _ in 0..20 {
            let name = allocate(&available).unwrap();
            assert!(available.contains(&name));
        }
    }

    #[test]
    fn test_allocate_fails_on_empty_pool() {
        let err = allocate(&[]).unwrap_err();
        assert!(matches!(err, ApiError::NoNamesAvailable));
    }
}
