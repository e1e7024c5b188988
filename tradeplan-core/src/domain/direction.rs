//! Trade direction — the closed long/short choice.

use serde::{Deserialize, Serialize};

/// Which side of the market the planned trade takes.
///
/// Direction is supplied by the caller, never inferred from a price pair,
/// so no "unknown" third state exists anywhere in the pipeline. Every
/// sign-dependent computation matches exhaustively on these two variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeDirection {
    Long,
    Short,
}

impl TradeDirection {
    /// Badge label for host display.
    pub fn label(self) -> &'static str {
        match self {
            TradeDirection::Long => "LONG",
            TradeDirection::Short => "SHORT",
        }
    }

    pub fn opposite(self) -> TradeDirection {
        match self {
            TradeDirection::Long => TradeDirection::Short,
            TradeDirection::Short => TradeDirection::Long,
        }
    }
}

impl std::fmt::Display for TradeDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TradeDirection::Long => write!(f, "long"),
            TradeDirection::Short => write!(f, "short"),
        }
    }
}
