//! # Etoile Similarity
//!
//! Text similarity primitives for the Etoile restaurant recommender.
//!
//! ## Features
//!
//! - **Tokenizer**: word tokens, English stop words, unigram/bigram terms
//! - **TF-IDF**: sparse, L2-normalized term vectors over a fitted vocabulary
//! - **Similarity Matrix**: precomputed pairwise cosine similarity
//! - **String Ratios**: edit-distance scores for fuzzy name matching
//!
//! ## Example
//!
//! ```rust
//! use etoile_similarity::{SimilarityMatrix, TfIdfConfig, TfIdfVectorizer};
//!
//! let cuisines = ["french seafood", "seafood", "italian pizza"];
//! let (_, vectors) = TfIdfVectorizer::fit_transform(&cuisines, TfIdfConfig::default());
//! let matrix = SimilarityMatrix::build(&vectors);
//!
//! assert!(matrix.get(0, 1) > matrix.get(0, 2));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Tokenizer  │────>│   TF-IDF    │────>│   Sparse    │
//! │  (n-grams)  │     │ (vocab, idf)│     │   Vectors   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                                         ┌─────────────┐
//!                                         │ Similarity  │
//!                                         │   Matrix    │
//!                                         └─────────────┘
//! ```

pub mod distance;
pub mod matrix;
pub mod tfidf;
pub mod tokenizer;
pub mod vector;

pub use distance::{partial_ratio, ratio};
pub use matrix::SimilarityMatrix;
pub use tfidf::{TfIdfConfig, TfIdfVectorizer};
pub use tokenizer::{ngrams, tokenize, ENGLISH_STOP_WORDS};
pub use vector::SparseVector;
