use etoile_similarity::TfIdfConfig;

/// Minimum `ratio` score for a fuzzy name match to be accepted
pub const DEFAULT_MATCH_THRESHOLD: u8 = 60;

/// Minimum `partial_ratio` score for a fuzzy suggestion
pub const DEFAULT_SUGGESTION_THRESHOLD: u8 = 50;

pub const DEFAULT_TOP_N: usize = 5;

pub const DEFAULT_LIMIT: usize = 10;

/// Tuning knobs for a [`RecommendationEngine`](crate::RecommendationEngine)
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub match_threshold: u8,
    pub suggestion_threshold: u8,
    /// Recommendation count used when the caller gives none
    pub default_top_n: usize,
    /// Result cap for suggestions and searches when the caller gives none
    pub default_limit: usize,
    pub tfidf: TfIdfConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            match_threshold: DEFAULT_MATCH_THRESHOLD,
            suggestion_threshold: DEFAULT_SUGGESTION_THRESHOLD,
            default_top_n: DEFAULT_TOP_N,
            default_limit: DEFAULT_LIMIT,
            tfidf: TfIdfConfig::default(),
        }
    }
}
