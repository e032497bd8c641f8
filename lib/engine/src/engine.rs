use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::recommend::{NotFoundReason, Recommendation, ScoredRestaurant};
use crate::resolver::NameResolver;
use etoile_core::{normalize_key, DataSources, Dataset, DatasetStatistics, RestaurantRecord};
use etoile_similarity::{SimilarityMatrix, SparseVector, TfIdfVectorizer};
use ordered_float::OrderedFloat;
use std::time::Instant;
use tracing::{debug, info};

/// The loaded dataset and its cuisine similarity model.
///
/// Built once at startup and read-only afterwards; share it behind an `Arc`
/// between request handlers. Any change to the records means building a new
/// engine, since vocabulary and IDF weights are dataset-wide.
#[derive(Debug)]
pub struct RecommendationEngine {
    config: EngineConfig,
    dataset: Dataset,
    vectorizer: TfIdfVectorizer,
    vectors: Vec<SparseVector>,
    matrix: SimilarityMatrix,
}

impl RecommendationEngine {
    /// Load the three star-tier files and build the model
    pub fn load(sources: &DataSources, config: EngineConfig) -> Result<Self> {
        info!("Loading restaurants from {:?}", sources);
        let dataset = Dataset::load(sources)?;
        Ok(Self::from_dataset(dataset, config))
    }

    pub fn from_records(records: Vec<RestaurantRecord>, config: EngineConfig) -> Self {
        Self::from_dataset(Dataset::new(records), config)
    }

    pub fn from_dataset(dataset: Dataset, config: EngineConfig) -> Self {
        let start = Instant::now();
        let cuisines: Vec<&str> = dataset.records().iter().map(|r| r.cuisine.as_str()).collect();
        let (vectorizer, vectors) = TfIdfVectorizer::fit_transform(cuisines.as_slice(), config.tfidf);
        let matrix = SimilarityMatrix::build(&vectors);

        info!(
            "Built similarity model: {} restaurants, {} terms, {} non-zero weights in {:?}",
            dataset.len(),
            vectorizer.vocabulary_size(),
            vectors.iter().map(SparseVector::nnz).sum::<usize>(),
            start.elapsed()
        );

        Self {
            config,
            dataset,
            vectorizer,
            vectors,
            matrix,
        }
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[inline]
    pub fn vectorizer(&self) -> &TfIdfVectorizer {
        &self.vectorizer
    }

    #[inline]
    pub fn matrix(&self) -> &SimilarityMatrix {
        &self.matrix
    }

    /// Feature vector of a restaurant by canonical name
    pub fn vector(&self, name: &str) -> Option<&SparseVector> {
        self.dataset.position(name).map(|i| &self.vectors[i])
    }

    /// Cuisine similarity between two canonical names
    pub fn similarity(&self, a: &str, b: &str) -> Option<f32> {
        let i = self.dataset.position(a)?;
        let j = self.dataset.position(b)?;
        Some(self.matrix.get(i, j))
    }

    fn resolver(&self) -> NameResolver<'_> {
        NameResolver::new(&self.dataset, self.config.match_threshold)
    }

    pub fn statistics(&self) -> DatasetStatistics {
        self.dataset.statistics()
    }

    /// Every canonical name, in dataset order
    pub fn restaurant_names(&self) -> Vec<&str> {
        self.dataset.names().collect()
    }

    /// Resolve free text to a known name (exact, then fuzzy above threshold)
    pub fn find_closest_match(&self, query: &str) -> Option<&str> {
        self.resolver().resolve(query)
    }

    /// Rank every other restaurant by cuisine similarity to the one `query`
    /// resolves to.
    ///
    /// Results are sorted by score descending, then by name ascending, and
    /// hold exactly `min(top_n, len - 1)` entries. Returns
    /// [`EngineError::InvalidArgument`] when `top_n` is zero.
    pub fn recommend(&self, query: &str, top_n: usize) -> Result<Recommendation> {
        if top_n == 0 {
            return Err(EngineError::InvalidArgument(
                "top_n must be a positive integer".to_string(),
            ));
        }

        if normalize_key(query).is_empty() {
            return Ok(Recommendation::not_found(query, NotFoundReason::EmptyQuery, Vec::new()));
        }

        let Some(matched) = self.find_closest_match(query) else {
            let suggestions = self
                .suggestions(query, self.config.default_limit)
                .into_iter()
                .map(str::to_string)
                .collect();
            debug!("No restaurant matches {:?}", query);
            return Ok(Recommendation::not_found(query, NotFoundReason::NoMatch, suggestions));
        };

        let Some((idx, row)) = self
            .dataset
            .position(matched)
            .and_then(|i| self.matrix.row(i).map(|row| (i, row)))
        else {
            return Ok(Recommendation::not_found(matched, NotFoundReason::NoMatch, Vec::new()));
        };
        let records = self.dataset.records();

        let mut ranked: Vec<(usize, f32)> = row
            .iter()
            .copied()
            .enumerate()
            .filter(|&(j, _)| j != idx)
            .collect();
        ranked.sort_by(|a, b| {
            OrderedFloat(b.1)
                .cmp(&OrderedFloat(a.1))
                .then_with(|| records[a.0].name.cmp(&records[b.0].name))
        });
        ranked.truncate(top_n);

        let results = ranked
            .into_iter()
            .map(|(j, score)| ScoredRestaurant {
                name: records[j].name.clone(),
                score,
            })
            .collect();

        Ok(Recommendation::Found {
            matched: matched.to_string(),
            results,
        })
    }

    /// Full record for an exact canonical name
    pub fn restaurant_details(&self, name: &str) -> Option<&RestaurantRecord> {
        self.dataset.get(name)
    }

    /// Autocomplete candidates: substring hits first, fuzzy matches otherwise
    pub fn suggestions(&self, partial: &str, limit: usize) -> Vec<&str> {
        self.resolver()
            .suggest(partial, limit, self.config.suggestion_threshold)
    }

    pub fn search_by_cuisine(&self, cuisine: &str, limit: usize) -> Vec<&RestaurantRecord> {
        self.dataset.search_by_cuisine(cuisine, limit)
    }

    /// Records whose city or region contains `location`
    pub fn search_by_location(&self, location: &str, limit: usize) -> Vec<&RestaurantRecord> {
        self.dataset.search_by_location(location, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use etoile_core::StarRating;

    fn record(name: &str, cuisine: &str) -> RestaurantRecord {
        RestaurantRecord::new(name, cuisine, "New York", "New York", "$$$$", StarRating::One)
    }

    fn engine(rows: &[(&str, &str)]) -> RecommendationEngine {
        RecommendationEngine::from_records(
            rows.iter().map(|(n, c)| record(n, c)).collect(),
            EngineConfig::default(),
        )
    }

    #[test]
    fn test_scenario_shared_term_ranks_first() {
        let engine = engine(&[("a", "french seafood"), ("b", "seafood"), ("c", "italian pizza")]);
        assert!(engine.similarity("a", "b").unwrap() > engine.similarity("a", "c").unwrap());

        let rec = engine.recommend("A", 2).unwrap();
        let names: Vec<_> = rec.results().iter().map(|r| r.name.as_str()).collect();
        assert!(rec.is_found());
        assert_eq!(rec.matched(), Some("a"));
        assert_eq!(names, vec!["b", "c"]);

        // french, seafood and the bigram between them
        let vector = engine.vector("a").unwrap();
        assert_eq!(vector.nnz(), 3);
        assert!((vector.norm() - 1.0).abs() < 1e-5);
        assert_eq!(engine.vectorizer().vocabulary_size(), 6);
        assert!(engine.vector("d").is_none());
    }

    #[test]
    fn test_ties_break_by_name() {
        let engine = engine(&[
            ("zeta", "sushi"),
            ("omega", "sushi"),
            ("alpha", "sushi"),
            ("query", "sushi"),
        ]);
        let rec = engine.recommend("query", 3).unwrap();
        let names: Vec<_> = rec.results().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "omega", "zeta"]);
    }

    #[test]
    fn test_zero_top_n_is_invalid() {
        let engine = engine(&[("a", "french"), ("b", "french")]);
        assert!(matches!(engine.recommend("a", 0), Err(EngineError::InvalidArgument(_))));
    }

    #[test]
    fn test_large_top_n_returns_everything_else() {
        let engine = engine(&[("a", "french"), ("b", "french"), ("c", "thai")]);
        let rec = engine.recommend("a", 50).unwrap();
        assert_eq!(rec.results().len(), 2);
        assert!(rec.results().iter().all(|r| r.name != "a"));
    }

    #[test]
    fn test_not_found_is_a_value() {
        let engine = engine(&[("le bernardin", "seafood"), ("per se", "french")]);
        match engine.recommend("zzqxw123", 5).unwrap() {
            Recommendation::NotFound { reason, suggestions, .. } => {
                assert_eq!(reason, NotFoundReason::NoMatch);
                assert!(suggestions.is_empty());
            }
            other => panic!("expected not found, got {:?}", other),
        }

        let rec = engine.recommend("   ", 5).unwrap();
        assert!(!rec.is_found());
        assert!(matches!(
            rec,
            Recommendation::NotFound { reason: NotFoundReason::EmptyQuery, .. }
        ));
    }

    #[test]
    fn test_not_found_suggests_containing_names() {
        // "bern" scores 50 against "le bernardin", below the match threshold
        let engine = engine(&[("le bernardin", "seafood"), ("per se", "french")]);
        assert_eq!(engine.find_closest_match("bern"), None);
        match engine.recommend("bern", 5).unwrap() {
            Recommendation::NotFound { reason, suggestions, .. } => {
                assert_eq!(reason, NotFoundReason::NoMatch);
                assert_eq!(suggestions, vec!["le bernardin".to_string()]);
            }
            other => panic!("expected not found, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_cuisine_does_not_fail() {
        let engine = engine(&[("a", "unknown"), ("b", ""), ("c", "seafood")]);
        let rec = engine.recommend("b", 2).unwrap();
        assert!(rec.results().iter().all(|r| r.score == 0.0));
        assert_eq!(engine.similarity("b", "b"), Some(0.0));
        assert!(engine.vector("b").unwrap().is_empty());
        assert_eq!(engine.similarity("a", "a"), Some(1.0));
    }

    #[test]
    fn test_details_and_names() {
        let engine = engine(&[("a", "french"), ("b", "thai")]);
        assert_eq!(engine.restaurant_names(), vec!["a", "b"]);
        assert_eq!(engine.restaurant_details("b").unwrap().cuisine, "thai");
        assert!(engine.restaurant_details("B").is_none());
        assert!(engine.restaurant_details("nope").is_none());
    }
}
