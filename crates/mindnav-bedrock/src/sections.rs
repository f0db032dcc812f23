//! Report-section parsing.
//!
//! The analysis model is asked for four fixed Dutch headers, but its output
//! is plain text and only loosely follows the convention. This module
//! splits one response into renderable sections without ever failing:
//! unrecognized text lands in an "Overige Informatie" bucket and empty
//! sections are dropped.
//!
//! Two behaviors are deliberate and covered by tests, because changing them
//! changes what already-persisted reports display:
//!
//! - Headers are claimed in a fixed priority order, not source order. A
//!   lower-priority header that appears *before* a higher-priority one ends
//!   up inside that header's leading text.
//! - Orphaned leading text is captured into "Overige Informatie" at most
//!   once; later orphans are dropped.

use std::sync::LazyLock;

use regex::Regex;

use mindnav_core::models::section::{
    ProfileOverview, ProfileScoreEntry, ReportSection, SectionBody, SectionIcon,
};

/// Canonical section headers, in claim priority order.
const KNOWN_HEADERS: [(&str, SectionIcon); 4] = [
    ("Jouw Profiel In Vogelvlucht", SectionIcon::Profile),
    ("Sterke Kanten", SectionIcon::Strengths),
    ("Aandachtspunten", SectionIcon::Attention),
    ("Tips voor Jou", SectionIcon::Tips),
];

/// Title of the catch-all section for unmatched text.
pub const OTHER_TITLE: &str = "Overige Informatie";

static HEADER_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    KNOWN_HEADERS
        .iter()
        .map(|(title, _)| {
            // The header on a line of its own, optionally with a colon.
            Regex::new(&format!(
                r"(?mi)^[ \t]*{}[ \t]*:?[ \t]*$",
                regex::escape(title)
            ))
            .expect("static header pattern")
        })
        .collect()
});

static HEADING_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*#{1,2}[ \t]*").expect("static heading pattern"));

// "Naam: 85 (toelichting)" or "Naam: 85"
static NAME_SCORE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<name>[^:]+?)\s*:\s*(?P<score>\d+(?:[.,]\d+)?)\s*(?:\((?P<comment>[^)]*)\))?\s*$")
        .expect("static score-line pattern")
});

// "Naam (85): toelichting"
static NAME_PAREN_SCORE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<name>[^:(]+?)\s*\(\s*(?P<score>\d+(?:[.,]\d+)?)\s*\)\s*:?\s*(?P<comment>.*)$")
        .expect("static score-line pattern")
});

// "Naam: toelichting" — the score may still lead the comment.
static NAME_COMMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<name>[^:]+?)\s*:\s*(?P<comment>.+)$").expect("static name-line pattern")
});

// "(85) toelichting" at the start of a comment.
static INLINE_SCORE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(\s*(?P<score>\d+(?:[.,]\d+)?)\s*\)\s*(?P<comment>.*)$")
        .expect("static inline-score pattern")
});

struct RawSection {
    title: &'static str,
    icon: SectionIcon,
    content: String,
}

/// Split a raw analysis response into renderable sections.
///
/// Total over arbitrary input: empty, headerless, or partially structured
/// text produces a (possibly empty) section list, never an error.
pub fn parse_report_sections(raw: &str) -> Vec<ReportSection> {
    let cleaned = strip_heading_markers(&strip_emphasis(raw));

    let mut matched: Vec<RawSection> = Vec::new();
    let mut other_content: Option<String> = None;
    let mut other_position = 0usize;
    let mut leading_captured = false;

    let mut remaining: &str = &cleaned;

    for (header_index, &(title, icon)) in KNOWN_HEADERS.iter().enumerate() {
        let Some(header_match) = HEADER_PATTERNS[header_index].find(remaining) else {
            continue;
        };

        // Text before the claimed header that no section owns yet. Captured
        // into the catch-all once; later orphans are dropped.
        let leading = &remaining[..header_match.start()];
        if !leading_captured && !leading.trim().is_empty() {
            other_content = Some(leading.trim().to_string());
            other_position = matched.len();
            leading_captured = true;
        }

        let after_header = &remaining[header_match.end()..];
        let content_end = next_known_header_start(after_header, header_index);

        matched.push(RawSection {
            title,
            icon,
            content: after_header[..content_end].trim().to_string(),
        });

        remaining = &after_header[content_end..];
    }

    if !remaining.trim().is_empty() {
        match &mut other_content {
            Some(existing) => {
                existing.push_str("\n\n");
                existing.push_str(remaining.trim());
            }
            None => {
                other_content = Some(remaining.trim().to_string());
                other_position = matched.len();
            }
        }
    }

    assemble(matched, other_content, other_position)
}

/// Remove bold/italic markers globally. Idempotent.
fn strip_emphasis(text: &str) -> String {
    text.replace("**", "").replace('*', "")
}

/// Remove `#`/`##` markers at line starts.
fn strip_heading_markers(text: &str) -> String {
    HEADING_MARKER.replace_all(text, "").into_owned()
}

/// Byte offset of the nearest other known header in `text`, or its length.
fn next_known_header_start(text: &str, current: usize) -> usize {
    (0..KNOWN_HEADERS.len())
        .filter(|&i| i != current)
        .filter_map(|i| HEADER_PATTERNS[i].find(text).map(|m| m.start()))
        .min()
        .unwrap_or(text.len())
}

fn assemble(
    mut raw: Vec<RawSection>,
    other: Option<String>,
    other_position: usize,
) -> Vec<ReportSection> {
    if let Some(content) = other {
        raw.insert(
            other_position.min(raw.len()),
            RawSection {
                title: OTHER_TITLE,
                icon: SectionIcon::Info,
                content,
            },
        );
    }

    let mut out = Vec::with_capacity(raw.len());
    for section in raw {
        if section.title == KNOWN_HEADERS[0].0 {
            let overview = parse_profile_overview(&section.content);
            // Kept only if it yielded something renderable.
            if overview.general.is_some() || !overview.insights.is_empty() {
                out.push(ReportSection {
                    title: section.title.to_string(),
                    icon: section.icon,
                    body: SectionBody::Profile(overview),
                });
            }
        } else if !section.content.is_empty() {
            out.push(ReportSection {
                title: section.title.to_string(),
                icon: section.icon,
                body: body_for(&section.content),
            });
        }
    }
    out
}

/// Bullet-list content becomes `Items` with markers stripped; anything else
/// stays text.
fn body_for(content: &str) -> SectionBody {
    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let items: Vec<&str> = lines.iter().filter_map(|line| bullet_text(line)).collect();
    if !items.is_empty() && items.len() == lines.len() {
        SectionBody::Items(items.into_iter().map(str::to_string).collect())
    } else {
        SectionBody::Text(content.to_string())
    }
}

fn bullet_text(line: &str) -> Option<&str> {
    line.strip_prefix("- ")
        .or_else(|| line.strip_prefix("– "))
        .or_else(|| line.strip_prefix("• "))
        .map(str::trim)
}

/// Split profile-overview content into structured score insights plus
/// free-form general text.
fn parse_profile_overview(content: &str) -> ProfileOverview {
    let mut overview = ProfileOverview::default();
    let mut general_lines: Vec<&str> = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        let line = bullet_text(line).unwrap_or(line);
        if line.is_empty() {
            continue;
        }

        match parse_score_line(line) {
            Some(entry) => overview.insights.push(entry),
            None => general_lines.push(line),
        }
    }

    if !general_lines.is_empty() {
        overview.general = Some(general_lines.join("\n"));
    }
    overview
}

fn parse_score_line(line: &str) -> Option<ProfileScoreEntry> {
    if let Some(caps) = NAME_SCORE.captures(line) {
        return Some(ProfileScoreEntry {
            profile_name: caps["name"].trim().to_string(),
            score: parse_score(&caps["score"])?,
            comment: caps
                .name("comment")
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default(),
        });
    }

    if let Some(caps) = NAME_PAREN_SCORE.captures(line) {
        return Some(ProfileScoreEntry {
            profile_name: caps["name"].trim().to_string(),
            score: parse_score(&caps["score"])?,
            comment: caps["comment"].trim().to_string(),
        });
    }

    if let Some(caps) = NAME_COMMENT.captures(line)
        && let Some(inline) = INLINE_SCORE.captures(caps["comment"].trim())
    {
        return Some(ProfileScoreEntry {
            profile_name: caps["name"].trim().to_string(),
            score: parse_score(&inline["score"])?,
            comment: inline["comment"].trim().to_string(),
        });
    }

    None
}

/// Parse a score literal, accepting a Dutch decimal comma.
fn parse_score(raw: &str) -> Option<f64> {
    raw.replace(',', ".").parse().ok()
}
