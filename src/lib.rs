//! # Etoile
//!
//! Recommends Michelin-starred restaurants with a similar cuisine to one you
//! already know.
//!
//! Etoile loads the one-, two- and three-star restaurant lists, builds a
//! TF-IDF model over the cuisine descriptions, precomputes the pairwise
//! cosine similarity matrix, and resolves free-text restaurant names with
//! edit-distance matching.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! etoile --data-dir ./data --http-port 8080
//! curl 'http://localhost:8080/recommend?q=le%20bernardin&top_n=5'
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use etoile::prelude::*;
//!
//! let engine = RecommendationEngine::load(
//!     &DataSources::from_dir("./data"),
//!     EngineConfig::default(),
//! ).unwrap();
//!
//! match engine.recommend("le bernardin", 5).unwrap() {
//!     Recommendation::Found { matched, results } => {
//!         println!("Because you liked {matched}:");
//!         for r in results {
//!             println!("  {} ({:.2})", r.name, r.score);
//!         }
//!     }
//!     Recommendation::NotFound { message, suggestions, .. } => {
//!         println!("{message} Did you mean: {suggestions:?}");
//!     }
//! }
//! ```
//!
//! ## Crate Structure
//!
//! - `etoile-core` - Records, CSV loading and normalization, dataset statistics
//! - `etoile-similarity` - Tokenizer, TF-IDF vectors, similarity matrix, string ratios
//! - `etoile-engine` - Name resolution and ranked recommendations
//! - `etoile-api` - REST API

// Re-export core types
pub use etoile_core::{
    DataLoadError, DataSources, Dataset, DatasetStatistics,
    RestaurantRecord, StarRating,
};

// Re-export similarity primitives
pub use etoile_similarity::{
    SimilarityMatrix, SparseVector, TfIdfConfig, TfIdfVectorizer,
};

// Re-export engine
pub use etoile_engine::{
    EngineConfig, EngineError, NameResolver, NotFoundReason,
    Recommendation, RecommendationEngine, ScoredRestaurant,
};

// Re-export API
pub use etoile_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        DataSources, Dataset, RestaurantRecord, StarRating,
        EngineConfig, EngineError, Recommendation, RecommendationEngine,
        ScoredRestaurant, RestApi,
    };
}

/// Edit-distance string ratios
pub mod fuzzy {
    pub use etoile_similarity::distance::{partial_ratio, ratio};
}
