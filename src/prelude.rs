pub use crate::models::index::{IndexConfig, IndexError, QGramIndex};
pub use crate::models::tsv;
pub use crate::models::normalize::normalize;
pub use crate::models::ranking::{Match, rank_matches, suggested_delta};
pub use crate::models::record::EntityRecord;
pub use crate::models::stats::{IndexStats, QueryStats};
pub use crate::models::types::{EntId, NameId};
