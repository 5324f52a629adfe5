//! Error-tolerant prefix search over a corpus of named entities.
//!
//! Build a [`prelude::QGramIndex`] once from your records, then query
//! it with normalized prefixes. Matching tolerates typos up to a
//! prefix edit distance you pick per call, and ranking puts the
//! closest, most popular entities first.
//!
//! ```
//! use prefikso::prelude::*;
//!
//! let mut index = QGramIndex::from_config(IndexConfig::default().with_synonyms(true));
//! index
//!     .build(vec![
//!         EntityRecord::new("Freiburg im Breisgau", 3).with_synonym("Freiburg"),
//!         EntityRecord::new("Breisach am Rhein", 2),
//!     ])
//!     .unwrap();
//!
//! let query = normalize("Freibrug"); // a typo
//! let (matches, _stats) = index.find_matches(&query, suggested_delta(&query));
//!
//! let best = rank_matches(matches)[0];
//! assert_eq!(index.entity(best.ent).name(), "Freiburg im Breisgau");
//! ```
pub mod models;
pub mod prelude;
pub mod testing;
