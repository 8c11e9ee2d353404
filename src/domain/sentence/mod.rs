pub mod model;
pub mod repository;

pub use model::{FIXED_RECORD_KEY, SentenceRecord, Sentiment};
pub use repository::{SentenceRepository, SqliteSentenceRepository};
