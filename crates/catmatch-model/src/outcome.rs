use serde::{Deserialize, Serialize};

use crate::record::ParsedRecord;

/// Why a record did not match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MismatchKind {
    /// The Spanish category has no entry in the mapping table.
    Unmapped,
    /// No English slug could be extracted from the result blob.
    MissingSlug,
    /// Both sides are present but disagree.
    Different { expected: String },
}

impl MismatchKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unmapped => "unmapped",
            Self::MissingSlug => "missing_slug",
            Self::Different { .. } => "different",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Match,
    Mismatch(MismatchKind),
}

impl Verdict {
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match)
    }
}

/// A parsed record together with its classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub record: ParsedRecord,
    pub verdict: Verdict,
}

impl MatchOutcome {
    pub fn is_match(&self) -> bool {
        self.verdict.is_match()
    }
}
