use crate::error::Result;
use crate::loader::{self, normalize_key, DataSources};
use crate::record::{RestaurantRecord, StarRating};
use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

/// Aggregate counts over a loaded dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetStatistics {
    pub total_restaurants: usize,
    pub unique_cuisines: usize,
    pub unique_cities: usize,
    /// Distinct `region` values. Serialized under the historical
    /// `unique_countries` key even though regions are not countries.
    #[serde(rename = "unique_countries")]
    pub unique_regions: usize,
    pub one_star: usize,
    pub two_star: usize,
    pub three_star: usize,
}

/// The deduplicated, immutable restaurant table.
///
/// Row order is the load order; row `i` here is row `i` of every model built
/// on top of it.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<RestaurantRecord>,
    index: AHashMap<String, usize>,
}

impl Dataset {
    /// Wrap already-normalized records.
    ///
    /// Duplicate names keep their first occurrence so the uniqueness
    /// invariant holds even for hand-built record lists.
    pub fn new(records: Vec<RestaurantRecord>) -> Self {
        let mut seen = AHashSet::with_capacity(records.len());
        let records: Vec<_> = records
            .into_iter()
            .filter(|r| seen.insert(r.name.clone()))
            .collect();

        let index = records
            .iter()
            .enumerate()
            .map(|(i, r)| (r.name.clone(), i))
            .collect();

        Self { records, index }
    }

    pub fn load(sources: &DataSources) -> Result<Self> {
        Ok(Self::new(loader::load(sources)?))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[inline]
    pub fn records(&self) -> &[RestaurantRecord] {
        &self.records
    }

    /// Names in row order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.iter().map(|r| r.name.as_str())
    }

    /// Row position of an exact canonical name
    #[inline]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&RestaurantRecord> {
        self.position(name).map(|i| &self.records[i])
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn statistics(&self) -> DatasetStatistics {
        let distinct = |field: fn(&RestaurantRecord) -> &str| {
            self.records.iter().map(field).collect::<AHashSet<_>>().len()
        };
        let with_stars = |stars: StarRating| self.records.iter().filter(|r| r.stars == stars).count();

        DatasetStatistics {
            total_restaurants: self.records.len(),
            unique_cuisines: distinct(|r| r.cuisine.as_str()),
            unique_cities: distinct(|r| r.city.as_str()),
            unique_regions: distinct(|r| r.region.as_str()),
            one_star: with_stars(StarRating::One),
            two_star: with_stars(StarRating::Two),
            three_star: with_stars(StarRating::Three),
        }
    }

    /// Records whose cuisine contains `cuisine` (case-insensitive), in row order
    pub fn search_by_cuisine(&self, cuisine: &str, limit: usize) -> Vec<&RestaurantRecord> {
        let needle = normalize_key(cuisine);
        self.records
            .iter()
            .filter(|r| r.cuisine.to_lowercase().contains(&needle))
            .take(limit)
            .collect()
    }

    /// Records whose city or region contains `location` (case-insensitive)
    pub fn search_by_location(&self, location: &str, limit: usize) -> Vec<&RestaurantRecord> {
        let needle = normalize_key(location);
        self.records
            .iter()
            .filter(|r| {
                r.city.to_lowercase().contains(&needle) || r.region.to_lowercase().contains(&needle)
            })
            .take(limit)
            .collect()
    }
}
