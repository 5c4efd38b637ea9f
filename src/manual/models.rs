// src/manual/models.rs
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::utils::error::UnitIdParseError;

static UNIT_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]+)\.([0-9]+)$").expect("Failed to compile UNIT_ID_RE")
});

/// Two-level locator for a manual unit, as written in its heading:
/// `# UNIT <major>.<minor>: <title>`. Both components are positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitId {
    pub major: u32,
    pub minor: u32,
}

impl UnitId {
    pub fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// The exact heading marker that introduces this unit in a manual.
    pub fn marker(&self) -> String {
        format!("# UNIT {}.{}:", self.major, self.minor)
    }

    /// Generic label used when a heading carries no title text of its own.
    pub fn default_label(&self) -> String {
        format!("UNIT {}.{}", self.major, self.minor)
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for UnitId {
    type Err = UnitIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = UNIT_ID_RE
            .captures(s.trim())
            .ok_or_else(|| UnitIdParseError(s.to_string()))?;

        let major: u32 = caps[1].parse().map_err(|_| UnitIdParseError(s.to_string()))?;
        let minor: u32 = caps[2].parse().map_err(|_| UnitIdParseError(s.to_string()))?;

        if major == 0 || minor == 0 {
            return Err(UnitIdParseError(s.to_string()));
        }

        Ok(Self { major, minor })
    }
}

/// Bounds of the heading numbering scheme. The extractor enumerates every
/// `(major, minor)` pair inside these bounds when it searches for the
/// heading that follows the one being extracted.
#[derive(Debug, Clone, Copy)]
pub struct SearchBounds {
    pub max_major: u32,
    pub max_minor: u32,
}

impl SearchBounds {
    pub fn new(max_major: u32, max_minor: u32) -> Self {
        Self { max_major, max_minor }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_locator() {
        let id: UnitId = "2.3".parse().expect("2.3 is a valid locator");
        assert_eq!(id, UnitId::new(2, 3));
        assert_eq!(id.marker(), "# UNIT 2.3:");
        assert_eq!(id.to_string(), "2.3");
    }

    #[test]
    fn rejects_zero_components() {
        assert!("0.1".parse::<UnitId>().is_err());
        assert!("1.0".parse::<UnitId>().is_err());
    }

    #[test]
    fn rejects_malformed_locators() {
        for bad in ["", "1", "1.", ".2", "1.2.3", "a.b", "1,2", "-1.2"] {
            assert!(bad.parse::<UnitId>().is_err(), "should reject '{}'", bad);
        }
    }
}
