use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Display icon for a report section, selected by title.
/// `Info` is the fallback for unrecognized titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SectionIcon {
    Profile,
    Strengths,
    Attention,
    Tips,
    Info,
}

/// One named section extracted from the model's analysis text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReportSection {
    pub title: String,
    pub icon: SectionIcon,
    pub body: SectionBody,
}

/// Section content: free text, a bullet list (markers stripped), or the
/// structured profile overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
#[ts(export)]
pub enum SectionBody {
    Text(String),
    Items(Vec<String>),
    Profile(ProfileOverview),
}

/// Parsed contents of the profile-overview section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProfileOverview {
    /// Free-form lines that didn't match a score-line pattern.
    pub general: Option<String>,
    /// Structured score insights, one per recognized line, in source order.
    pub insights: Vec<ProfileScoreEntry>,
}

/// A single "name, score, comment" line from the profile overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProfileScoreEntry {
    pub profile_name: String,
    pub score: f64,
    pub comment: String,
}
