use serde::{Deserialize, Serialize};

/// Sentinel stored in place of a missing city, region, price or cuisine.
pub const UNKNOWN: &str = "Unknown";

/// Michelin star tier of a restaurant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum StarRating {
    One = 1,
    Two = 2,
    Three = 3,
}

impl StarRating {
    /// All tiers in ascending order, which is also the partition merge order.
    pub const ALL: [StarRating; 3] = [StarRating::One, StarRating::Two, StarRating::Three];

    #[inline]
    #[must_use]
    pub fn count(self) -> u8 {
        self as u8
    }
}

impl From<StarRating> for u8 {
    fn from(rating: StarRating) -> Self {
        rating.count()
    }
}

impl TryFrom<u8> for StarRating {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(StarRating::One),
            2 => Ok(StarRating::Two),
            3 => Ok(StarRating::Three),
            other => Err(format!("invalid star rating: {}", other)),
        }
    }
}

impl std::fmt::Display for StarRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.count())
    }
}

/// A normalized restaurant row.
///
/// `name` is the canonical (lowercased, trimmed) key and is unique within a
/// loaded [`Dataset`](crate::Dataset). Optional numeric fields stay `None`
/// when the source cell is empty or unparseable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantRecord {
    pub name: String,
    pub cuisine: String,
    pub city: String,
    pub region: String,
    pub price: String,
    pub stars: StarRating,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub url: Option<String>,
    pub year: Option<u16>,
}

impl RestaurantRecord {
    /// Create a record with the required fields only
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        cuisine: impl Into<String>,
        city: impl Into<String>,
        region: impl Into<String>,
        price: impl Into<String>,
        stars: StarRating,
    ) -> Self {
        Self {
            name: name.into(),
            cuisine: cuisine.into(),
            city: city.into(),
            region: region.into(),
            price: price.into(),
            stars,
            latitude: None,
            longitude: None,
            url: None,
            year: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn with_year(mut self, year: u16) -> Self {
        self.year = Some(year);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_rating_conversion() {
        assert_eq!(StarRating::try_from(2), Ok(StarRating::Two));
        assert!(StarRating::try_from(0).is_err());
        assert!(StarRating::try_from(4).is_err());
        assert_eq!(u8::from(StarRating::Three), 3);
        let counts: Vec<u8> = StarRating::ALL.iter().map(|s| s.count()).collect();
        assert_eq!(counts, vec![1, 2, 3]);
    }

    #[test]
    fn test_record_serializes_stars_as_number() {
        let record = RestaurantRecord::new("le bernardin", "seafood", "New York", "New York", "$$$$", StarRating::Three)
            .with_year(2019);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["stars"], 3);
        assert_eq!(json["year"], 2019);
        assert!(json["latitude"].is_null());
        assert!(json["url"].is_null());

        let back: RestaurantRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);

        let record = record
            .with_coordinates(40.7615, -73.9818)
            .with_url("https://guide.michelin.com/us/en/new-york-state/new-york/restaurant/le-bernardin");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["latitude"], 40.7615);
        assert_eq!(json["longitude"], -73.9818);
        assert!(json["url"].as_str().unwrap().ends_with("le-bernardin"));

        let back: RestaurantRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
