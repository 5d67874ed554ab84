//! Utility functions and traits for `LinearProbingMap`

use crate::LinearProbingMap;
use std::{borrow::Borrow, hash::Hash};

/// Summary of probe lengths over a set of lookups
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeStats {
    /// Number of lookups measured
    pub lookups: usize,
    /// Mean number of slots examined per lookup
    pub mean: f64,
    /// Largest number of slots examined by a single lookup
    pub max: usize,
}

impl ProbeStats {
    /// Builds the summary from individual probe lengths
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    fn from_lengths<I: IntoIterator<Item = usize>>(lengths: I) -> Self {
        let (lookups, total, max) = lengths.into_iter().fold(
            (0usize, 0usize, 0usize),
            |(lookups, total, max), length| {
                (lookups.saturating_add(1), total.saturating_add(length), max.max(length))
            },
        );
        let mean = if lookups == 0 { 0.0 } else { total as f64 / lookups as f64 };

        Self { lookups, mean, max }
    }
}

/// Probe statistics for looking up every key stored in the map
pub fn probe_stats<K, V>(map: &LinearProbingMap<K, V>) -> ProbeStats
where
    K: Eq + Hash,
{
    ProbeStats::from_lengths(map.iter().map(|(key, _)| map.probe_length(key)))
}

/// Probe statistics for looking up each of `keys`, present or not
pub fn probe_stats_for<'a, K, V, Q, I>(map: &LinearProbingMap<K, V>, keys: I) -> ProbeStats
where
    K: Eq + Hash + Borrow<Q>,
    Q: Hash + Eq + ?Sized + 'a,
    I: IntoIterator<Item = &'a Q>,
{
    ProbeStats::from_lengths(keys.into_iter().map(|key| map.probe_length(key)))
}

impl<K, V> FromIterator<(K, V)> for LinearProbingMap<K, V>
where
    K: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}
