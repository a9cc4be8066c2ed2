//! Processing categories.

use std::fmt;
use std::str::FromStr;

use wagerline_foundation::Error;

/// A processing phase.
///
/// The four pipeline categories run in declaration order. Utilities are
/// registered alongside them but never take part in a pipeline run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Input normalization.
    Input,
    /// Choosing what to bet on.
    BetSelection,
    /// Choosing how much to stake.
    MoneyManagement,
    /// Display and output of the final bet.
    Output,
    /// Tools invoked on demand, outside the pipeline.
    Utilities,
}

impl Category {
    /// The pipeline categories, in execution order.
    pub const PIPELINE: [Self; 4] = [
        Self::Input,
        Self::BetSelection,
        Self::MoneyManagement,
        Self::Output,
    ];

    /// Returns the canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Input => "Input",
            Self::BetSelection => "BetSelection",
            Self::MoneyManagement => "MoneyManagement",
            Self::Output => "Output",
            Self::Utilities => "Utilities",
        }
    }

    /// Returns true for categories that run in the pipeline.
    #[must_use]
    pub const fn is_pipeline(self) -> bool {
        !matches!(self, Self::Utilities)
    }

    /// Position in [`Category::PIPELINE`], if this is a pipeline category.
    #[must_use]
    pub const fn pipeline_index(self) -> Option<usize> {
        match self {
            Self::Input => Some(0),
            Self::BetSelection => Some(1),
            Self::MoneyManagement => Some(2),
            Self::Output => Some(3),
            Self::Utilities => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "input" => Ok(Self::Input),
            "betselection" | "bet" | "selection" => Ok(Self::BetSelection),
            "moneymanagement" | "money" => Ok(Self::MoneyManagement),
            "output" | "display" => Ok(Self::Output),
            "utilities" | "utility" => Ok(Self::Utilities),
            _ => Err(Error::invalid_argument(format!("unknown category: {s}"))),
        }
    }
}
