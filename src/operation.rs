//! The closed vocabulary of wire-level operation codes understood by the scan endpoint.

use serde::{Deserialize, Serialize};

// used to print out readable forms of an operation
use std::fmt;

/// Comparison, range, string, set and nullary operations.
///
/// Every variant serializes to the exact code the remote service expects.
/// Set membership has only two codes: the "is in" / "not in" spellings on
/// [`crate::column::Column`] map onto [`Operation::Has`] and
/// [`Operation::HasNoneOf`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    #[serde(rename = "greater")]
    Greater,
    #[serde(rename = "egreater")]
    GreaterOrEqual,
    #[serde(rename = "less")]
    Less,
    #[serde(rename = "eless")]
    LessOrEqual,
    #[serde(rename = "equal")]
    Equal,
    #[serde(rename = "nequal")]
    NotEqual,
    #[serde(rename = "in_range")]
    InRange,
    #[serde(rename = "not_in_range")]
    NotInRange,
    #[serde(rename = "in_day_range")]
    InDayRange,
    #[serde(rename = "in_week_range")]
    InWeekRange,
    #[serde(rename = "in_month_range")]
    InMonthRange,
    #[serde(rename = "above%")]
    AbovePercent,
    #[serde(rename = "below%")]
    BelowPercent,
    #[serde(rename = "in_range%")]
    InRangePercent,
    #[serde(rename = "not_in_range%")]
    NotInRangePercent,
    #[serde(rename = "crosses")]
    Crosses,
    #[serde(rename = "crosses_above")]
    CrossesAbove,
    #[serde(rename = "crosses_below")]
    CrossesBelow,
    #[serde(rename = "match")]
    Match,
    #[serde(rename = "nmatch")]
    NotMatch,
    #[serde(rename = "has")]
    Has,
    #[serde(rename = "has_none_of")]
    HasNoneOf,
    #[serde(rename = "empty")]
    Empty,
    #[serde(rename = "nempty")]
    NotEmpty,
}

impl Operation {
    /// The wire code, identical to what serde emits.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Greater => "greater",
            Operation::GreaterOrEqual => "egreater",
            Operation::Less => "less",
            Operation::LessOrEqual => "eless",
            Operation::Equal => "equal",
            Operation::NotEqual => "nequal",
            Operation::InRange => "in_range",
            Operation::NotInRange => "not_in_range",
            Operation::InDayRange => "in_day_range",
            Operation::InWeekRange => "in_week_range",
            Operation::InMonthRange => "in_month_range",
            Operation::AbovePercent => "above%",
            Operation::BelowPercent => "below%",
            Operation::InRangePercent => "in_range%",
            Operation::NotInRangePercent => "not_in_range%",
            Operation::Crosses => "crosses",
            Operation::CrossesAbove => "crosses_above",
            Operation::CrossesBelow => "crosses_below",
            Operation::Match => "match",
            Operation::NotMatch => "nmatch",
            Operation::Has => "has",
            Operation::HasNoneOf => "has_none_of",
            Operation::Empty => "empty",
            Operation::NotEmpty => "nempty",
        }
    }
    /// Nullary operations carry no right-hand operand on the wire.
    pub fn is_nullary(&self) -> bool {
        matches!(self, Operation::Empty | Operation::NotEmpty)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two connectives of a filter tree. There is no negation; pick the
/// complementary [`Operation`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogicalOperator {
    And,
    Or,
}

impl LogicalOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalOperator::And => "and",
            LogicalOperator::Or => "or",
        }
    }
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
