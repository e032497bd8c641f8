use serde::{Deserialize, Serialize};

/// A recommended restaurant with its cuisine similarity to the query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRestaurant {
    pub name: String,
    pub score: f32,
}

/// Why a query did not resolve to a restaurant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotFoundReason {
    /// Query was blank after normalization
    EmptyQuery,
    /// No name scored at or above the match threshold
    NoMatch,
}

/// Outcome of a recommendation query.
///
/// A query that resolves to no restaurant is an ordinary value, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Recommendation {
    Found {
        /// Canonical name the query resolved to
        matched: String,
        results: Vec<ScoredRestaurant>,
    },
    NotFound {
        query: String,
        reason: NotFoundReason,
        message: String,
        /// Alternatives to offer instead
        suggestions: Vec<String>,
    },
}

impl Recommendation {
    pub(crate) fn not_found(query: &str, reason: NotFoundReason, suggestions: Vec<String>) -> Self {
        let message = match reason {
            NotFoundReason::EmptyQuery => "Please enter a restaurant name.".to_string(),
            NotFoundReason::NoMatch => format!(
                "Restaurant '{}' not found! Please try a different name or check the spelling.",
                query
            ),
        };
        Recommendation::NotFound {
            query: query.to_string(),
            reason,
            message,
            suggestions,
        }
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Recommendation::Found { .. })
    }

    /// Ranked results, empty when not found
    pub fn results(&self) -> &[ScoredRestaurant] {
        match self {
            Recommendation::Found { results, .. } => results,
            Recommendation::NotFound { .. } => &[],
        }
    }

    pub fn matched(&self) -> Option<&str> {
        match self {
            Recommendation::Found { matched, .. } => Some(matched),
            Recommendation::NotFound { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_shape_is_tagged() {
        let found = Recommendation::Found {
            matched: "benu".to_string(),
            results: vec![ScoredRestaurant { name: "saison".to_string(), score: 0.5 }],
        };
        let json = serde_json::to_value(&found).unwrap();
        assert_eq!(json["status"], "found");
        assert_eq!(json["results"][0]["name"], "saison");

        let missing = Recommendation::not_found("zzz", NotFoundReason::NoMatch, vec![]);
        let json = serde_json::to_value(&missing).unwrap();
        assert_eq!(json["status"], "not_found");
        assert_eq!(json["reason"], "no_match");
        assert!(json["message"].as_str().unwrap().contains("'zzz' not found"));
        assert!(missing.results().is_empty());
        assert!(missing.matched().is_none());
    }
}
