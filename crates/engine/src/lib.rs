mod criteria;
mod error;
mod filter;
mod finder;
mod report;

pub use criteria::{DateRange, SearchCriteria, SearchOptions};
pub use error::{DateField, FindError, PathRole};
pub use filter::{ExtensionFilter, MatchPolicy};
pub use finder::{FilesFinder, FindSummary};
pub use report::{BlockHeader, ReportBlock, ReportKind, append_block};
