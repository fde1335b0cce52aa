//! Per-field lookup table for trending entries.
//!
//! GitHub's markup carries no stable identifiers for these values, so each
//! field is found by position. When the layout changes, only the matching
//! [`Field`] constant needs updating.

use super::path::{NodePath, Step};

const LINK_STEPS: &[Step] = &[Step::any("h2"), Step::any("a")];
const DESCRIPTION_STEPS: &[Step] = &[Step::any("p")];
const LANGUAGE_STEPS: &[Step] = &[
    Step::nth("div", 2),
    Step::nth("span", 1),
    Step::nth("span", 2),
];
const STARS_STEPS: &[Step] = &[Step::nth("div", 2), Step::nth("a", 1)];
const FORKS_STEPS: &[Step] = &[Step::nth("div", 2), Step::nth("a", 2)];
const STARS_IN_PERIOD_STEPS: &[Step] = &[Step::nth("div", 2), Step::nth("span", 3)];

/// What happens when a field cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Absence aborts the extraction.
    Required,
    /// Absence leaves the attribute at its zero value.
    Optional,
    /// Absence leaves the attribute at its zero value, but present text
    /// that does not parse aborts the extraction.
    OptionalStrict,
}

/// A named, positioned field of a trending entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Field name used in logs and errors.
    pub name: &'static str,
    /// Location relative to the entry node.
    pub path: NodePath,
    /// Failure policy for this field.
    pub severity: Severity,
}

/// Heading link to the repository (`/owner/repo`).
pub const LINK: Field = Field {
    name: "link",
    path: NodePath::new(LINK_STEPS),
    severity: Severity::Required,
};

/// Repository description paragraph.
pub const DESCRIPTION: Field = Field {
    name: "description",
    path: NodePath::new(DESCRIPTION_STEPS),
    severity: Severity::Optional,
};

/// Programming language label.
pub const LANGUAGE: Field = Field {
    name: "language",
    path: NodePath::new(LANGUAGE_STEPS),
    severity: Severity::Optional,
};

/// Stargazer count anchor.
pub const STARS: Field = Field {
    name: "stars",
    path: NodePath::new(STARS_STEPS),
    severity: Severity::OptionalStrict,
};

/// Fork count anchor.
pub const FORKS: Field = Field {
    name: "forks",
    path: NodePath::new(FORKS_STEPS),
    severity: Severity::OptionalStrict,
};

/// "N stars today/this week/this month" summary.
pub const STARS_IN_PERIOD: Field = Field {
    name: "starsInPeriod",
    path: NodePath::new(STARS_IN_PERIOD_STEPS),
    severity: Severity::Optional,
};

/// Every field in extraction order.
pub const FIELDS: [Field; 6] = [LINK, DESCRIPTION, LANGUAGE, STARS, FORKS, STARS_IN_PERIOD];
