pub mod outcome;
pub mod record;
pub mod report;
pub mod result;

pub use outcome::{MatchOutcome, MismatchKind, Verdict};
pub use record::{ParsedRecord, RawRow};
pub use report::{DETAIL_HEADERS, DetailRow, DetailSection, Report, SummaryEntry, TOTAL_LABEL};
pub use result::FileResult;
