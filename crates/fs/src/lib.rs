mod error;
mod record;
mod walker;

pub use error::FileAccessError;
pub use record::FileRecord;
pub use walker::{WalkStats, walk_files};
