//! How a property query was resolved.

use serde::{Deserialize, Serialize};

/// Outcome of a property query, in the order the checks run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Deduction {
    /// The source carries a `has_property` edge to the property.
    DirectProperty,
    /// The source is the property itself.
    Identity,
    /// Reached along `is_a` edges. `via` runs from the source to the property.
    Inherited { via: Vec<String> },
    /// Not provable from the graph. Reported the same as false.
    Unproven,
}

impl Deduction {
    /// Whether the property holds.
    pub fn holds(&self) -> bool {
        !matches!(self, Self::Unproven)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DirectProperty => "direct_property",
            Self::Identity => "identity",
            Self::Inherited { .. } => "inherited",
            Self::Unproven => "unproven",
        }
    }
}

impl std::fmt::Display for Deduction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inherited { via } => write!(f, "inherited via {}", via.join(" -> ")),
            other => f.write_str(other.as_str()),
        }
    }
}
