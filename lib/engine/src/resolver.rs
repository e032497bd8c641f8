//! Free-text query to known restaurant name

use etoile_core::{normalize_key, Dataset};
use etoile_similarity::{partial_ratio, ratio};
use tracing::debug;

/// Resolves queries against the names of a [`Dataset`].
///
/// Resolution order: exact canonical match, then the best [`ratio`] score
/// over all names if it reaches the threshold. Equal best scores resolve to
/// the earliest name in dataset order.
#[derive(Debug, Clone, Copy)]
pub struct NameResolver<'a> {
    dataset: &'a Dataset,
    threshold: u8,
}

impl<'a> NameResolver<'a> {
    pub fn new(dataset: &'a Dataset, threshold: u8) -> Self {
        Self { dataset, threshold }
    }

    pub fn resolve(&self, query: &str) -> Option<&'a str> {
        let query = normalize_key(query);
        if let Some(record) = self.dataset.get(&query) {
            return Some(record.name.as_str());
        }

        match self.best_match(&query) {
            Some((name, score)) if score >= self.threshold => {
                debug!("Resolved {:?} to {:?} (score {})", query, name, score);
                Some(name)
            }
            Some((name, score)) => {
                debug!("Best match for {:?} is {:?} (score {}), below threshold {}", query, name, score, self.threshold);
                None
            }
            None => None,
        }
    }

    /// Highest-scoring name for an already normalized query, first wins on ties
    pub fn best_match(&self, query: &str) -> Option<(&'a str, u8)> {
        let mut best: Option<(&'a str, u8)> = None;
        for name in self.dataset.names() {
            let score = ratio(query, name);
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((name, score));
            }
        }
        best
    }

    /// Names containing `partial`, or failing that the best fuzzy
    /// [`partial_ratio`] matches scoring at least `threshold`.
    pub fn suggest(&self, partial: &str, limit: usize, threshold: u8) -> Vec<&'a str> {
        let partial = normalize_key(partial);

        let contained: Vec<&'a str> = self
            .dataset
            .names()
            .filter(|name| name.contains(partial.as_str()))
            .take(limit)
            .collect();
        if !contained.is_empty() {
            return contained;
        }

        let mut scored: Vec<(&'a str, u8)> = self
            .dataset
            .names()
            .map(|name| (name, partial_ratio(&partial, name)))
            .filter(|&(_, score)| score >= threshold)
            .collect();
        // stable, so equal scores keep dataset order
        scored.sort_by(|a, b| b.1.cmp(&a.1));
        scored.into_iter().take(limit).map(|(name, _)| name).collect()
    }
}
