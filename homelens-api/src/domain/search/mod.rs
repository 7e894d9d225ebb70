//! AI Search - free-text queries over the listing set.
//!
//! A query like "3-family homes in Ridgewood under $900k" is sent to the
//! Gemini API, which answers with a small JSON object of filter bounds plus
//! an explanation. The bounds are then applied as a deterministic conjunctive
//! filter over the in-memory listings.
//!
//! The module is built around one trait abstraction for testability:
//!
//! - [`FilterExtractor`] - query-to-filters translation (Gemini, mocks)
//!
//! # Example
//!
//! ```ignore
//! use homelens_api::domain::search::{AiSearchService, GeminiExtractor};
//!
//! let extractor = GeminiExtractor::try_from_env().expect("GEMINI_API_KEY not set");
//! let service = AiSearchService::new(Arc::new(extractor));
//!
//! let outcome = service.search("two families under 900k", &listings).await?;
//! println!("{}: {} matches", outcome.explanation, outcome.results.len());
//! ```

mod extractor;
mod filter;
mod parser;
mod service;
mod types;

pub use extractor::{ExtractionError, FilterExtractor, GeminiExtractor, MockExtractor};
pub use filter::apply_filters;
pub use service::AiSearchService;
pub use types::{AiSearchOutcome, ListingFilters};
