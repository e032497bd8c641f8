//! # Etoile Engine
//!
//! Cuisine-based restaurant recommendations over a fixed dataset.
//!
//! A [`RecommendationEngine`] is built once from the three star-tier
//! partitions. It owns the deduplicated [`Dataset`](etoile_core::Dataset),
//! the fitted TF-IDF vocabulary and the precomputed similarity matrix, and
//! answers every query from that immutable state.
//!
//! ## Example
//!
//! ```rust
//! use etoile_core::{RestaurantRecord, StarRating};
//! use etoile_engine::{EngineConfig, RecommendationEngine};
//!
//! let records = vec![
//!     RestaurantRecord::new("a", "french seafood", "Paris", "France", "$$$", StarRating::One),
//!     RestaurantRecord::new("b", "seafood", "Paris", "France", "$$", StarRating::Two),
//!     RestaurantRecord::new("c", "italian pizza", "Rome", "Italy", "$", StarRating::One),
//! ];
//! let engine = RecommendationEngine::from_records(records, EngineConfig::default());
//!
//! let recommendation = engine.recommend("A", 2).unwrap();
//! let names: Vec<_> = recommendation.results().iter().map(|r| r.name.as_str()).collect();
//! assert_eq!(names, vec!["b", "c"]);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod recommend;
pub mod resolver;

pub use config::{EngineConfig, DEFAULT_LIMIT, DEFAULT_MATCH_THRESHOLD, DEFAULT_SUGGESTION_THRESHOLD, DEFAULT_TOP_N};
pub use engine::RecommendationEngine;
pub use error::{EngineError, Result};
pub use recommend::{NotFoundReason, Recommendation, ScoredRestaurant};
pub use resolver::NameResolver;
