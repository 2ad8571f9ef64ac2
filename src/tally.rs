//! Event counting owned by the caller.

use alloc::string::String;
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

/// Counts occurrences of labelled events.
///
/// There is no shared instance: whoever starts a counting session creates
/// the counter, passes it where events happen, and reads the summary at
/// the end.
///
/// ```
/// use cardkit::EventCounter;
///
/// let mut counter = EventCounter::new();
/// counter.record("deal");
/// counter.record("deal");
/// counter.record("shuffle");
/// assert_eq!(counter.summary(), vec![("deal".to_string(), 2), ("shuffle".to_string(), 1)]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EventCounter {
    counts: HashMap<String, usize>,
}

impl EventCounter {
    /// Creates an empty counter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `label`.
    pub fn record(&mut self, label: &str) {
        self.record_n(label, 1);
    }

    /// Records `n` occurrences of `label`.
    pub fn record_n(&mut self, label: &str, n: usize) {
        if n == 0 {
            return;
        }
        if let Some(count) = self.counts.get_mut(label) {
            *count += n;
        } else {
            self.counts.insert(String::from(label), n);
        }
    }

    /// Returns how many times `label` was recorded.
    #[must_use]
    pub fn count(&self, label: &str) -> usize {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// Returns the number of events recorded under any label.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Returns every label with its count, most frequent first; ties are
    /// ordered by label.
    #[must_use]
    pub fn summary(&self) -> Vec<(String, usize)> {
        let mut summary: Vec<(String, usize)> = self
            .counts
            .iter()
            .map(|(label, &count)| (label.clone(), count))
            .collect();
        summary.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        summary
    }

    /// Forgets every recorded event.
    pub fn clear(&mut self) {
        self.counts.clear();
    }
}
