use crate::vector::SparseVector;
use rayon::prelude::*;

/// Dense pairwise cosine similarity over a fixed set of unit vectors.
///
/// Row-major, `n * n` entries, every entry in `[0, 1]`. The diagonal is 1 for
/// non-empty vectors and 0 for empty ones. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    n: usize,
    data: Vec<f32>,
}

impl SimilarityMatrix {
    /// Compute all pairs from L2-normalized vectors.
    ///
    /// Rows are filled in parallel. Each off-diagonal value is the same merge
    /// dot product whichever side it is computed from, so the result is
    /// exactly symmetric.
    pub fn build(vectors: &[SparseVector]) -> Self {
        let n = vectors.len();
        let mut data = vec![0.0f32; n * n];

        if n > 0 {
            data.par_chunks_mut(n).enumerate().for_each(|(i, row)| {
                let a = &vectors[i];
                for (j, cell) in row.iter_mut().enumerate() {
                    *cell = if i == j {
                        if a.is_empty() { 0.0 } else { 1.0 }
                    } else {
                        a.dot(&vectors[j]).clamp(0.0, 1.0)
                    };
                }
            });
        }

        Self { n, data }
    }

    /// Number of rows (and columns)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Similarity between rows `i` and `j`
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f32 {
        assert!(i < self.n && j < self.n, "index out of bounds");
        self.data[i * self.n + j]
    }

    /// All similarities of row `i`, in column order
    #[inline]
    pub fn row(&self, i: usize) -> Option<&[f32]> {
        if i < self.n {
            Some(&self.data[i * self.n..(i + 1) * self.n])
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tfidf::{TfIdfConfig, TfIdfVectorizer};

    fn build(docs: &[&str]) -> SimilarityMatrix {
        let (_, vectors) = TfIdfVectorizer::fit_transform(docs, TfIdfConfig::default());
        SimilarityMatrix::build(&vectors)
    }

    #[test]
    fn test_matches_pairwise_cosine() {
        let docs = ["french, seafood", "seafood bar", "modern french", "the"];
        let (_, vectors) = TfIdfVectorizer::fit_transform(&docs, TfIdfConfig::default());
        let matrix = SimilarityMatrix::build(&vectors);
        for i in 0..vectors.len() {
            for j in 0..vectors.len() {
                if i == j {
                    continue;
                }
                let expected = vectors[i].cosine_similarity(&vectors[j]);
                assert!((matrix.get(i, j) - expected).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn test_shared_terms_rank_higher() {
        let matrix = build(&["french seafood", "seafood", "italian pizza"]);
        assert!(matrix.get(0, 1) > matrix.get(0, 2));
        assert_eq!(matrix.get(0, 2), 0.0);
    }

    #[test]
    fn test_symmetric_with_unit_diagonal() {
        let matrix = build(&[
            "french, seafood",
            "modern french",
            "contemporary",
            "seafood, contemporary",
            "unknown",
        ]);
        for i in 0..matrix.len() {
            assert_eq!(matrix.get(i, i), 1.0);
            for j in 0..matrix.len() {
                let v = matrix.get(i, j);
                assert!((0.0..=1.0).contains(&v));
                assert_eq!(v, matrix.get(j, i));
            }
        }
    }

    #[test]
    fn test_empty_vector_is_zero_everywhere() {
        let matrix = build(&["the", "seafood", "seafood"]);
        assert_eq!(matrix.get(0, 0), 0.0);
        assert_eq!(matrix.get(0, 1), 0.0);
        assert!((matrix.get(1, 2) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty_input() {
        let matrix = SimilarityMatrix::build(&[]);
        assert!(matrix.is_empty());
        assert!(matrix.row(0).is_none());
    }
}
