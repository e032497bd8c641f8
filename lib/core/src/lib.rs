//! # Etoile Core
//!
//! Core data layer for the Etoile restaurant recommender.
//!
//! This crate provides:
//!
//! - [`RestaurantRecord`] - A normalized restaurant row with its [`StarRating`]
//! - [`loader`] - CSV loading of the three star-tier partitions
//! - [`Dataset`] - The deduplicated, read-only restaurant table
//!
//! ## Example
//!
//! ```rust
//! use etoile_core::{loader, Dataset};
//!
//! let header = "name,year,latitude,longitude,city,region,zipCode,cuisine,price,url";
//! let one = format!("{header}\nKilo,2019,,,San Francisco,California,,Creative,$$$,");
//! let two = format!("{header}\nAlinea,2019,,,Chicago,Chicago,,Contemporary,$$$$,");
//! let three = header.to_string();
//!
//! let records = loader::load_from_readers(one.as_bytes(), two.as_bytes(), three.as_bytes()).unwrap();
//! let dataset = Dataset::new(records);
//! assert_eq!(dataset.statistics().total_restaurants, 2);
//! assert!(dataset.contains("alinea"));
//! ```

pub mod dataset;
pub mod error;
pub mod loader;
pub mod record;

pub use dataset::{Dataset, DatasetStatistics};
pub use error::{DataLoadError, Result};
pub use loader::{normalize_key, DataSources};
pub use record::{RestaurantRecord, StarRating, UNKNOWN};
