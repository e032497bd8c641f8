//! CSV loading and normalization of the three star-tier partitions
//!
//! Partitions are read in ascending star order, normalized row by row and
//! deduplicated by canonical name (first occurrence wins). The resulting order
//! is what every downstream index (vocabulary rows, similarity matrix) is
//! keyed on, so it must only depend on the input order.

use crate::error::{DataLoadError, Result};
use crate::record::{RestaurantRecord, StarRating, UNKNOWN};
use ahash::AHashSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

pub const ONE_STAR_FILE: &str = "one-star-michelin-restaurants.csv";
pub const TWO_STARS_FILE: &str = "two-stars-michelin-restaurants.csv";
pub const THREE_STARS_FILE: &str = "three-stars-michelin-restaurants.csv";

/// Columns every partition must carry
pub const REQUIRED_COLUMNS: [&str; 5] = ["name", "cuisine", "city", "region", "price"];

/// Placeholder cells that count as missing, compared case-insensitively
const NA_MARKERS: [&str; 5] = ["na", "n/a", "nan", "null", "none"];

/// Locations of the three partitions on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSources {
    pub one_star: PathBuf,
    pub two_stars: PathBuf,
    pub three_stars: PathBuf,
}

impl DataSources {
    pub fn new(
        one_star: impl Into<PathBuf>,
        two_stars: impl Into<PathBuf>,
        three_stars: impl Into<PathBuf>,
    ) -> Self {
        Self {
            one_star: one_star.into(),
            two_stars: two_stars.into(),
            three_stars: three_stars.into(),
        }
    }

    /// Use the conventional file names inside `dir`
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self::new(
            dir.join(ONE_STAR_FILE),
            dir.join(TWO_STARS_FILE),
            dir.join(THREE_STARS_FILE),
        )
    }

    fn partitions(&self) -> [(StarRating, &Path); 3] {
        [
            (StarRating::One, self.one_star.as_path()),
            (StarRating::Two, self.two_stars.as_path()),
            (StarRating::Three, self.three_stars.as_path()),
        ]
    }
}

/// Load, normalize and deduplicate all three partitions from disk.
///
/// Fails if any file is missing before reading the others, so a partially
/// available dataset never loads.
pub fn load(sources: &DataSources) -> Result<Vec<RestaurantRecord>> {
    for (_, path) in sources.partitions() {
        if !path.is_file() {
            return Err(DataLoadError::MissingSource(path.to_path_buf()));
        }
    }

    let mut rows = Vec::new();
    for (stars, path) in sources.partitions() {
        let file = File::open(path)?;
        rows.extend(read_partition(file, stars, &path.display().to_string())?);
    }

    Ok(deduplicate(rows))
}

/// Same as [`load`] over in-memory readers, one per star tier.
pub fn load_from_readers<R: Read>(one_star: R, two_stars: R, three_stars: R) -> Result<Vec<RestaurantRecord>> {
    let readers = [
        (one_star, "one-star partition"),
        (two_stars, "two-stars partition"),
        (three_stars, "three-stars partition"),
    ];
    let mut rows = Vec::new();
    for (stars, (reader, source_name)) in StarRating::ALL.into_iter().zip(readers) {
        rows.extend(read_partition(reader, stars, source_name)?);
    }
    Ok(deduplicate(rows))
}

/// Header positions resolved once per partition
struct ColumnIndex {
    name: usize,
    cuisine: usize,
    city: usize,
    region: usize,
    price: usize,
    latitude: Option<usize>,
    longitude: Option<usize>,
    url: Option<usize>,
    year: Option<usize>,
}

impl ColumnIndex {
    fn resolve(headers: &csv::StringRecord, source_name: &str) -> Result<Self> {
        let find = |column: &str| {
            headers
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}').trim() == column)
        };
        let require = |column: &str| {
            find(column).ok_or_else(|| DataLoadError::MissingColumn {
                source_name: source_name.to_string(),
                column: column.to_string(),
            })
        };

        // zipCode is never mapped, which drops it
        Ok(Self {
            name: require(REQUIRED_COLUMNS[0])?,
            cuisine: require(REQUIRED_COLUMNS[1])?,
            city: require(REQUIRED_COLUMNS[2])?,
            region: require(REQUIRED_COLUMNS[3])?,
            price: require(REQUIRED_COLUMNS[4])?,
            latitude: find("latitude"),
            longitude: find("longitude"),
            url: find("url"),
            year: find("year"),
        })
    }
}

fn read_partition<R: Read>(reader: R, stars: StarRating, source_name: &str) -> Result<Vec<RestaurantRecord>> {
    let csv_error = |e: csv::Error| DataLoadError::Csv {
        source_name: source_name.to_string(),
        message: e.to_string(),
    };

    let mut csv_reader = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
    let headers = csv_reader.headers().map_err(csv_error)?.clone();
    let columns = ColumnIndex::resolve(&headers, source_name)?;

    let mut records = Vec::new();
    for (i, row) in csv_reader.records().enumerate() {
        let row = row.map_err(csv_error)?;
        let cell = |idx: usize| present(row.get(idx));
        let optional = |idx: Option<usize>| idx.and_then(|i| present(row.get(i)));

        let name = cell(columns.name)
            .map(normalize_key)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| DataLoadError::Malformed {
                source_name: source_name.to_string(),
                row: i + 1,
                message: "empty restaurant name".to_string(),
            })?;

        let text_or_unknown = |idx: usize| cell(idx).unwrap_or(UNKNOWN).to_string();

        records.push(RestaurantRecord {
            name,
            cuisine: normalize_key(cell(columns.cuisine).unwrap_or(UNKNOWN)),
            city: text_or_unknown(columns.city),
            region: text_or_unknown(columns.region),
            price: text_or_unknown(columns.price),
            stars,
            latitude: optional(columns.latitude).and_then(parse_float),
            longitude: optional(columns.longitude).and_then(parse_float),
            url: optional(columns.url).map(str::to_string),
            year: optional(columns.year).and_then(parse_year),
        });
    }

    Ok(records)
}

/// Lowercase and trim, the canonical form of names and cuisines
#[inline]
pub fn normalize_key(text: &str) -> String {
    text.trim().to_lowercase()
}

fn present(cell: Option<&str>) -> Option<&str> {
    cell.filter(|c| {
        let trimmed = c.trim();
        !trimmed.is_empty() && !NA_MARKERS.iter().any(|m| trimmed.eq_ignore_ascii_case(m))
    })
}

fn parse_float(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_year(cell: &str) -> Option<u16> {
    let cell = cell.trim();
    cell.parse::<u16>().ok().or_else(|| {
        // Years sometimes come through as "2019.0"
        parse_float(cell)
            .filter(|y| y.fract() == 0.0 && *y >= 0.0 && *y <= u16::MAX as f64)
            .map(|y| y as u16)
    })
}

fn deduplicate(rows: Vec<RestaurantRecord>) -> Vec<RestaurantRecord> {
    let mut seen = AHashSet::with_capacity(rows.len());
    rows.into_iter()
        .filter(|record| seen.insert(record.name.clone()))
        .collect()
}
