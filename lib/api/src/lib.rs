//! # Etoile API
//!
//! JSON REST facade over a shared [`RecommendationEngine`](etoile_engine::RecommendationEngine).
//!
//! The engine is built once at startup and handed to every handler as
//! application data; handlers only read from it.

pub mod rest;

pub use rest::RestApi;
