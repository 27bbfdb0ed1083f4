//! Domain value objects: the business-analysis `Framework` catalogue.
//!
//! # Design
//!
//! Frameworks are pure labels: `Copy`, equality-by-value, no identity. They
//! carry no computational meaning inside the tool; they are substituted into
//! the generated documents verbatim.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant and its `ALL` entry here
//! 2. Add the `as_str`, `definition` and `FromStr` arms here
//! 3. Done. Menu numbering follows `ALL` order.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Framework ────────────────────────────────────────────────────────────────

/// A named business-analysis methodology offered at the framework prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Framework {
    #[serde(rename = "Porter's Five Forces")]
    PortersFiveForces,
    #[serde(rename = "SWOT Analysis")]
    Swot,
    #[serde(rename = "VRIO Framework")]
    Vrio,
    #[serde(rename = "PESTEL Analysis")]
    Pestel,
    #[serde(rename = "Value Chain Analysis")]
    ValueChain,
    #[serde(rename = "Business Model Canvas")]
    BusinessModelCanvas,
    #[serde(rename = "McKinsey 7S")]
    McKinsey7S,
}

impl Framework {
    /// Every framework in menu order. Menu item `n` is `ALL[n - 1]`.
    pub const ALL: [Framework; 7] = [
        Self::PortersFiveForces,
        Self::Swot,
        Self::Vrio,
        Self::Pestel,
        Self::ValueChain,
        Self::BusinessModelCanvas,
        Self::McKinsey7S,
    ];

    /// Selection used when the user picks nothing usable.
    pub const DEFAULT_SELECTION: [Framework; 2] = [Self::Swot, Self::PortersFiveForces];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PortersFiveForces => "Porter's Five Forces",
            Self::Swot => "SWOT Analysis",
            Self::Vrio => "VRIO Framework",
            Self::Pestel => "PESTEL Analysis",
            Self::ValueChain => "Value Chain Analysis",
            Self::BusinessModelCanvas => "Business Model Canvas",
            Self::McKinsey7S => "McKinsey 7S",
        }
    }

    /// One-paragraph definition rendered into the workflow appendix.
    pub const fn definition(&self) -> &'static str {
        match self {
            Self::PortersFiveForces => {
                "Analyzes industry competitive forces: supplier power, buyer power, \
                 competitive rivalry, threat of substitutes, threat of new entrants."
            }
            Self::Swot => {
                "Internal strengths/weaknesses and external opportunities/threats analysis."
            }
            Self::Vrio => {
                "Resource analysis: Value, Rarity, Imitability, Organization for \
                 competitive advantage."
            }
            Self::Pestel => {
                "Macro-environment analysis: Political, Economic, Social, Technological, \
                 Environmental, Legal factors."
            }
            Self::ValueChain => {
                "Primary and support activities that create competitive advantage."
            }
            Self::BusinessModelCanvas => {
                "Nine building blocks of business model design and innovation."
            }
            Self::McKinsey7S => {
                "Seven interdependent factors for organizational effectiveness: Strategy, \
                 Structure, Systems, Shared Values, Style, Staff, Skills."
            }
        }
    }

    /// Look up a framework by its 1-based menu number.
    pub fn from_menu_index(index: i64) -> Option<Self> {
        if index < 1 {
            return None;
        }
        usize::try_from(index - 1)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// 1-based menu number of this framework.
    pub fn menu_index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|f| f == self)
            .map_or(0, |i| i + 1)
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Framework {
    type Err = DomainError;

    /// Accepts the display name or a short alias, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "porter's five forces" | "porter" | "porters" | "five-forces" => {
                Ok(Self::PortersFiveForces)
            }
            "swot analysis" | "swot" => Ok(Self::Swot),
            "vrio framework" | "vrio" => Ok(Self::Vrio),
            "pestel analysis" | "pestel" => Ok(Self::Pestel),
            "value chain analysis" | "value-chain" => Ok(Self::ValueChain),
            "business model canvas" | "bmc" => Ok(Self::BusinessModelCanvas),
            "mckinsey 7s" | "7s" | "mckinsey" => Ok(Self::McKinsey7S),
            other => Err(DomainError::UnknownFramework(other.to_string())),
        }
    }
}

/// Join frameworks the way every document and status line shows them.
pub fn join_frameworks(frameworks: &[Framework]) -> String {
    frameworks
        .iter()
        .map(Framework::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
