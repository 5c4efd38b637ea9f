// src/extractors/section.rs

// --- Imports ---
use serde::Serialize;

use crate::manual::models::{SearchBounds, UnitId};

// --- Constants ---
const SUBSECTION_PREFIX: &str = "## ";

// --- Data Structures ---
/// One unit sliced out of a manual. The body always opens with the unit's
/// own heading line and runs up to the next in-bounds heading, or to the end
/// of the document when none follows.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractedUnit {
    pub unit: UnitId,
    pub title: String,
    pub body: String,
}

/// A `## `-delimited subsection within a unit body.
#[derive(Debug, Clone, Serialize)]
pub struct Subsection {
    pub title: String,
    pub body: String,
}

impl ExtractedUnit {
    /// Splits the unit body into its subsections. Text before the first
    /// `## ` line is preamble and yields no subsection; each subsection
    /// keeps its own heading line, like the unit keeps its `# UNIT` line.
    pub fn subsections(&self) -> Vec<Subsection> {
        split_subsections(&self.body)
    }
}

// --- Main Extractor Structure ---
pub struct UnitExtractor;

impl UnitExtractor {
    pub fn new() -> Self {
        Self {}
    }

    /// Extracts one unit from the manual text.
    ///
    /// The unit starts at the first occurrence of its exact heading marker.
    /// Its end is found by enumerating every in-bounds `(major, minor)`
    /// candidate and searching for each candidate's newline-prefixed marker
    /// past the current one; the earliest occurrence in the raw text wins.
    /// Hand-edited manuals can carry headings out of numeric order, so the
    /// full enumeration cannot be replaced by a scan for the numerically
    /// next pair.
    ///
    /// Returns `None` when the requested heading is absent. A missing unit
    /// is an ordinary answer here, not a fault.
    pub fn extract(
        &self,
        document: &str,
        unit: UnitId,
        bounds: SearchBounds,
    ) -> Option<ExtractedUnit> {
        let marker = unit.marker();

        let start = match document.find(&marker) {
            Some(offset) => offset,
            None => {
                tracing::debug!("Heading marker '{}' not present in document", marker);
                return None;
            }
        };

        // Candidate next-headings are only searched for past the current
        // marker text, and always with a leading newline so the heading just
        // matched cannot terminate itself.
        let search_from = start + marker.len();
        let tail = &document[search_from..];

        let mut end = document.len();
        for major in 1..=bounds.max_major {
            for minor in 1..=bounds.max_minor {
                let candidate = UnitId::new(major, minor);
                if candidate == unit {
                    continue;
                }
                let needle = format!("\n{}", candidate.marker());
                if let Some(pos) = tail.find(&needle) {
                    // pos is the newline, which still belongs to the current
                    // unit; the next heading starts one past it.
                    end = end.min(search_from + pos + 1);
                }
            }
        }

        let body = &document[start..end];
        let title = heading_title(body, &marker).unwrap_or_else(|| unit.default_label());

        tracing::debug!("Extracted unit {} spanning bytes {}..{}", unit, start, end);

        Some(ExtractedUnit {
            unit,
            title,
            body: body.to_string(),
        })
    }
}

/// Title text of the heading line at the start of `body`, or `None` when the
/// heading carries nothing after its marker.
fn heading_title(body: &str, marker: &str) -> Option<String> {
    let first_line = body.lines().next()?;
    let title = first_line.strip_prefix(marker)?.trim();
    (!title.is_empty()).then(|| title.to_string())
}

/// Splits a unit body on lines that open with `## `.
pub fn split_subsections(body: &str) -> Vec<Subsection> {
    let mut starts: Vec<usize> = Vec::new();
    let mut offset = 0;
    for line in body.split_inclusive('\n') {
        if line.starts_with(SUBSECTION_PREFIX) {
            starts.push(offset);
        }
        offset += line.len();
    }

    let mut subsections = Vec::with_capacity(starts.len());
    for (idx, &start) in starts.iter().enumerate() {
        let end = starts.get(idx + 1).copied().unwrap_or(body.len());
        let text = &body[start..end];
        let heading = text.lines().next().unwrap_or("");
        let title = heading
            .strip_prefix(SUBSECTION_PREFIX)
            .unwrap_or(heading)
            .trim()
            .to_string();
        subsections.push(Subsection {
            title,
            body: text.to_string(),
        });
    }
    subsections
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: SearchBounds = SearchBounds {
        max_major: 3,
        max_minor: 4,
    };

    fn extract(document: &str, major: u32, minor: u32, bounds: SearchBounds) -> Option<ExtractedUnit> {
        UnitExtractor::new().extract(document, UnitId::new(major, minor), bounds)
    }

    #[test]
    fn unit_body_runs_to_the_next_heading() {
        let doc = "# UNIT 1.1: Intro\nhello\n# UNIT 1.2: Next\nworld";
        let unit = extract(doc, 1, 1, SearchBounds::new(1, 2)).expect("unit 1.1 should be found");
        assert_eq!(unit.title, "Intro");
        assert_eq!(unit.body, "# UNIT 1.1: Intro\nhello\n");
    }

    #[test]
    fn last_unit_runs_to_end_of_document() {
        let doc = "# UNIT 1.1: Intro\nhello\n# UNIT 1.2: Next\nworld";
        let unit = extract(doc, 1, 2, SearchBounds::new(1, 2)).expect("unit 1.2 should be found");
        assert_eq!(unit.title, "Next");
        assert_eq!(unit.body, "# UNIT 1.2: Next\nworld");
    }

    #[test]
    fn absent_unit_is_not_found() {
        let doc = "# UNIT 1.1: Intro\nhello\n";
        assert!(extract(doc, 2, 1, BOUNDS).is_none());
    }

    #[test]
    fn earliest_heading_wins_over_numeric_order() {
        // Headings out of numeric order: the next boundary is whichever
        // in-bounds heading occurs first in the raw text, not the
        // numerically closest one.
        let doc = "# UNIT 2.1: Closing duties\ncount the till\n# UNIT 1.1: Opening duties\nunlock\n";
        let unit = extract(doc, 2, 1, BOUNDS).expect("unit 2.1 should be found");
        assert_eq!(unit.body, "# UNIT 2.1: Closing duties\ncount the till\n");
        assert!(
            !unit.body.contains("Opening duties"),
            "Body should stop at the earlier-occurring 1.1 heading"
        );
    }

    #[test]
    fn every_present_unit_opens_with_its_own_heading_line() {
        let doc = "# UNIT 1.1: Greeting\nsmile\n\
                   # UNIT 1.2: Seating\ncount heads\n\
                   # UNIT 2.1: Orders\nwrite it down\n\
                   # UNIT 2.2: Allergies\nask every time\n";
        for (major, minor) in [(1, 1), (1, 2), (2, 1), (2, 2)] {
            let id = UnitId::new(major, minor);
            let unit =
                extract(doc, major, minor, BOUNDS).expect("every listed unit should be found");
            let first_line = unit.body.lines().next().expect("body is never empty");
            assert!(
                first_line.starts_with(&id.marker()),
                "unit {} body should open with its heading, got '{}'",
                id,
                first_line
            );
        }
    }

    #[test]
    fn extraction_is_deterministic() {
        let doc = "# UNIT 1.1: Intro\nhello\n# UNIT 1.2: Next\nworld";
        let first = extract(doc, 1, 1, BOUNDS).expect("found");
        let second = extract(doc, 1, 1, BOUNDS).expect("found");
        assert_eq!(first.title, second.title);
        assert_eq!(first.body, second.body);
    }

    #[test]
    fn bare_heading_falls_back_to_generic_label() {
        let doc = "# UNIT 1.1:\nno title on this one\n";
        let unit = extract(doc, 1, 1, BOUNDS).expect("found");
        assert_eq!(unit.title, "UNIT 1.1");
    }

    #[test]
    fn headings_outside_the_bounds_do_not_terminate_a_unit() {
        let doc = "# UNIT 1.1: Intro\nhello\n# UNIT 9.9: Appendix\nextra\n";
        let unit = extract(doc, 1, 1, BOUNDS).expect("found");
        assert!(
            unit.body.contains("Appendix"),
            "9.9 is outside the configured bounds and should not end the unit"
        );
    }

    #[test]
    fn subsections_keep_their_heading_lines() {
        let doc = "# UNIT 1.1: Service\npreamble\n## Greeting\nsmile\n## Farewell\nwave\n";
        let unit = extract(doc, 1, 1, BOUNDS).expect("found");
        let subsections = unit.subsections();
        assert_eq!(subsections.len(), 2);
        assert_eq!(subsections[0].title, "Greeting");
        assert_eq!(subsections[0].body, "## Greeting\nsmile\n");
        assert_eq!(subsections[1].title, "Farewell");
        assert_eq!(subsections[1].body, "## Farewell\nwave\n");
    }

    #[test]
    fn unit_without_subsection_headings_has_none() {
        let doc = "# UNIT 1.1: Service\njust prose\n";
        let unit = extract(doc, 1, 1, BOUNDS).expect("found");
        assert!(unit.subsections().is_empty());
    }
}
