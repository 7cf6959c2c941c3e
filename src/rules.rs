// src/rules.rs
//! Rule identifiers and their descriptors.

use serde::Serialize;
use std::fmt;

/// The three rules this analyzer reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum RuleId {
    /// Too many state members.
    #[serde(rename = "NH002")]
    TooManyFields,
    /// Too many behavior members.
    #[serde(rename = "NH003")]
    TooManyMethods,
    /// LCOM1 at or above the cohesion threshold.
    #[serde(rename = "NH004")]
    LowCohesion,
}

impl RuleId {
    pub const ALL: [Self; 3] = [Self::TooManyFields, Self::TooManyMethods, Self::LowCohesion];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::TooManyFields => "NH002",
            Self::TooManyMethods => "NH003",
            Self::LowCohesion => "NH004",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|rule| rule.code().eq_ignore_ascii_case(code.trim()))
    }

    #[must_use]
    pub fn descriptor(self) -> &'static RuleDescriptor {
        match self {
            Self::TooManyFields => &TOO_MANY_FIELDS,
            Self::TooManyMethods => &TOO_MANY_METHODS,
            Self::LowCohesion => &LOW_COHESION,
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
}

impl Severity {
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Warning => "warning",
        }
    }
}

/// Static metadata for a rule. `message_format` uses `{0}` for the type name
/// and `{1}` for the measured value.
#[derive(Debug, Serialize)]
pub struct RuleDescriptor {
    pub id: RuleId,
    pub title: &'static str,
    pub message_format: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub enabled_by_default: bool,
}

const CATEGORY: &str = "Maintainability";

static TOO_MANY_FIELDS: RuleDescriptor = RuleDescriptor {
    id: RuleId::TooManyFields,
    title: "Too many fields",
    message_format: "Type '{0}' holds {1} state members",
    description: "Counts instance fields and auto-implemented properties. \
                  More than 5 suggests the type carries several responsibilities.",
    category: CATEGORY,
    severity: Severity::Warning,
    enabled_by_default: true,
};

static TOO_MANY_METHODS: RuleDescriptor = RuleDescriptor {
    id: RuleId::TooManyMethods,
    title: "Too many methods",
    message_format: "Type '{0}' declares {1} behavior members",
    description: "Counts instance methods, constructors and explicit accessors. \
                  More than 20 suggests the type should be split.",
    category: CATEGORY,
    severity: Severity::Warning,
    enabled_by_default: true,
};

static LOW_COHESION: RuleDescriptor = RuleDescriptor {
    id: RuleId::LowCohesion,
    title: "Low cohesion",
    message_format: "Type '{0}' has low cohesion (LCOM1: {1})",
    description: "LCOM1 = 1 - (field mentions across behaviors / (fields * behaviors)). \
                  0.8 or more means most behaviors ignore most of the state.",
    category: CATEGORY,
    severity: Severity::Warning,
    enabled_by_default: true,
};

/// Renders a rule's message format.
#[must_use]
pub fn render(format: &str, type_name: &str, value: &str) -> String {
    format.replace("{0}", type_name).replace("{1}", value)
}
