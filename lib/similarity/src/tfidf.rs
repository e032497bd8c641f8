//! TF-IDF vectorization over a fixed corpus
//!
//! Weight of term `t` in document `d` is `count(t, d) * idf(t)` with the
//! smoothed inverse document frequency
//!
//! ```text
//! idf(t) = ln((1 + n) / (1 + df(t))) + 1
//! ```
//!
//! where `n` is the corpus size and `df(t)` the number of documents containing
//! `t`. Every document vector is then L2-normalized so that cosine similarity
//! is a plain dot product.

use crate::tokenizer::ngrams;
use crate::vector::SparseVector;
use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

/// Vectorizer settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TfIdfConfig {
    /// Smallest n-gram length
    pub min_n: usize,
    /// Largest n-gram length
    pub max_n: usize,
    pub remove_stop_words: bool,
}

impl Default for TfIdfConfig {
    fn default() -> Self {
        Self {
            min_n: 1,
            max_n: 2,
            remove_stop_words: true,
        }
    }
}

/// A vocabulary and IDF table fitted on a corpus
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    config: TfIdfConfig,
    /// Terms sorted alphabetically; position is the feature index
    vocabulary: Vec<String>,
    term_index: AHashMap<String, u32>,
    idf: Vec<f32>,
    n_docs: usize,
}

impl TfIdfVectorizer {
    /// Fit vocabulary and document frequencies on `documents`
    pub fn fit<S: AsRef<str>>(documents: &[S], config: TfIdfConfig) -> Self {
        let mut doc_freq: AHashMap<String, u32> = AHashMap::new();
        for doc in documents {
            let unique: AHashSet<String> = Self::terms(doc.as_ref(), &config).into_iter().collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let mut vocabulary: Vec<String> = doc_freq.keys().cloned().collect();
        vocabulary.sort_unstable();

        let n = documents.len() as f64;
        let idf = vocabulary
            .iter()
            .map(|term| {
                let df = doc_freq.get(term).copied().unwrap_or(0) as f64;
                (((1.0 + n) / (1.0 + df)).ln() + 1.0) as f32
            })
            .collect();

        let term_index = vocabulary
            .iter()
            .enumerate()
            .map(|(i, term)| (term.clone(), i as u32))
            .collect();

        Self {
            config,
            vocabulary,
            term_index,
            idf,
            n_docs: documents.len(),
        }
    }

    /// Fit on `documents` and return one normalized vector per document
    pub fn fit_transform<S: AsRef<str>>(documents: &[S], config: TfIdfConfig) -> (Self, Vec<SparseVector>) {
        let vectorizer = Self::fit(documents, config);
        let vectors = documents
            .iter()
            .map(|doc| vectorizer.transform(doc.as_ref()))
            .collect();
        (vectorizer, vectors)
    }

    /// Vectorize a document; terms outside the vocabulary are ignored
    pub fn transform(&self, document: &str) -> SparseVector {
        let mut counts: AHashMap<u32, u32> = AHashMap::new();
        for term in Self::terms(document, &self.config) {
            if let Some(&idx) = self.term_index.get(&term) {
                *counts.entry(idx).or_insert(0) += 1;
            }
        }

        let pairs = counts
            .into_iter()
            .map(|(idx, count)| (idx, count as f32 * self.idf[idx as usize]))
            .collect();

        let mut vector = SparseVector::from_pairs(pairs);
        vector.normalize();
        vector
    }

    fn terms(document: &str, config: &TfIdfConfig) -> Vec<String> {
        ngrams(document, config.min_n, config.max_n, config.remove_stop_words)
    }

    #[inline]
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    #[inline]
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Feature index of a term
    #[inline]
    pub fn index_of(&self, term: &str) -> Option<u32> {
        self.term_index.get(term).copied()
    }

    /// IDF weight of a term, `None` if it is not in the vocabulary
    pub fn idf(&self, term: &str) -> Option<f32> {
        self.index_of(term).map(|i| self.idf[i as usize])
    }

    #[inline]
    pub fn n_docs(&self) -> usize {
        self.n_docs
    }

    #[inline]
    pub fn config(&self) -> &TfIdfConfig {
        &self.config
    }
}
