//! Fluent builders turning a field name into a [`Predicate`].
//!
//! ```
//! use screener::column::col;
//! let p = col("close").between(10, 20);
//! assert_eq!(p.left, "close");
//! ```

use crate::expression::Predicate;
use crate::operand::Operand;
use crate::operation::Operation;

/// A reference to a remote data field.
///
/// The name is not validated locally; the service knows thousands of fields
/// and rejects unknown ones itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Column {
    name: String,
}

/// Shorthand for [`Column::new`].
pub fn col(name: impl Into<String>) -> Column {
    Column::new(name)
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
    pub fn name(&self) -> &str {
        &self.name
    }

    fn predicate(&self, operation: Operation, right: impl Into<Operand>) -> Predicate {
        Predicate::new(self.name.clone(), operation, Some(right.into()))
    }

    // ------------- Ordering -------------
    pub fn gt(&self, other: impl Into<Operand>) -> Predicate {
        self.predicate(Operation::Greater, other)
    }
    pub fn ge(&self, other: impl Into<Operand>) -> Predicate {
        self.predicate(Operation::GreaterOrEqual, other)
    }
    pub fn lt(&self, other: impl Into<Operand>) -> Predicate {
        self.predicate(Operation::Less, other)
    }
    pub fn le(&self, other: impl Into<Operand>) -> Predicate {
        self.predicate(Operation::LessOrEqual, other)
    }
    pub fn eq(&self, other: impl Into<Operand>) -> Predicate {
        self.predicate(Operation::Equal, other)
    }
    pub fn ne(&self, other: impl Into<Operand>) -> Predicate {
        self.predicate(Operation::NotEqual, other)
    }

    // ------------- Ranges -------------
    /// Inclusive `[min, max]`.
    pub fn between(&self, min: impl Into<Operand>, max: impl Into<Operand>) -> Predicate {
        self.predicate(Operation::InRange, Operand::range(min, max))
    }
    pub fn not_between(&self, min: impl Into<Operand>, max: impl Into<Operand>) -> Predicate {
        self.predicate(Operation::NotInRange, Operand::range(min, max))
    }
    /// Calendar ranges take day offsets relative to today, e.g. `(-7, 0)`.
    pub fn in_day_range(&self, from: impl Into<Operand>, to: impl Into<Operand>) -> Predicate {
        self.predicate(Operation::InDayRange, Operand::range(from, to))
    }
    pub fn in_week_range(&self, from: impl Into<Operand>, to: impl Into<Operand>) -> Predicate {
        self.predicate(Operation::InWeekRange, Operand::range(from, to))
    }
    pub fn in_month_range(&self, from: impl Into<Operand>, to: impl Into<Operand>) -> Predicate {
        self.predicate(Operation::InMonthRange, Operand::range(from, to))
    }
    /// This field is more than `pct` above `base`, where `pct` is a ratio (`1.03` for 3%).
    pub fn above_pct(&self, base: impl Into<Operand>, pct: impl Into<Operand>) -> Predicate {
        self.predicate(Operation::AbovePercent, Operand::List(vec![base.into(), pct.into()]))
    }
    pub fn below_pct(&self, base: impl Into<Operand>, pct: impl Into<Operand>) -> Predicate {
        self.predicate(Operation::BelowPercent, Operand::List(vec![base.into(), pct.into()]))
    }
    pub fn between_pct(
        &self,
        base: impl Into<Operand>,
        low: impl Into<Operand>,
        high: impl Into<Operand>,
    ) -> Predicate {
        self.predicate(
            Operation::InRangePercent,
            Operand::List(vec![base.into(), low.into(), high.into()]),
        )
    }
    pub fn not_between_pct(
        &self,
        base: impl Into<Operand>,
        low: impl Into<Operand>,
        high: impl Into<Operand>,
    ) -> Predicate {
        self.predicate(
            Operation::NotInRangePercent,
            Operand::List(vec![base.into(), low.into(), high.into()]),
        )
    }

    // ------------- Crossings -------------
    pub fn crosses(&self, other: impl Into<Operand>) -> Predicate {
        self.predicate(Operation::Crosses, other)
    }
    pub fn crosses_above(&self, other: impl Into<Operand>) -> Predicate {
        self.predicate(Operation::CrossesAbove, other)
    }
    pub fn crosses_below(&self, other: impl Into<Operand>) -> Predicate {
        self.predicate(Operation::CrossesBelow, other)
    }

    // ------------- Strings -------------
    /// The pattern is interpreted by the remote service.
    pub fn like(&self, pattern: impl Into<Operand>) -> Predicate {
        self.predicate(Operation::Match, pattern)
    }
    pub fn not_like(&self, pattern: impl Into<Operand>) -> Predicate {
        self.predicate(Operation::NotMatch, pattern)
    }

    // ------------- Sets -------------
    pub fn has<I, T>(&self, values: I) -> Predicate
    where
        I: IntoIterator<Item = T>,
        T: Into<Operand>,
    {
        self.predicate(Operation::Has, Operand::list(values))
    }
    pub fn has_none_of<I, T>(&self, values: I) -> Predicate
    where
        I: IntoIterator<Item = T>,
        T: Into<Operand>,
    {
        self.predicate(Operation::HasNoneOf, Operand::list(values))
    }
    /// Same operation as [`Column::has`].
    pub fn isin<I, T>(&self, values: I) -> Predicate
    where
        I: IntoIterator<Item = T>,
        T: Into<Operand>,
    {
        self.has(values)
    }
    /// Same operation as [`Column::has_none_of`].
    pub fn not_in<I, T>(&self, values: I) -> Predicate
    where
        I: IntoIterator<Item = T>,
        T: Into<Operand>,
    {
        self.has_none_of(values)
    }

    // ------------- Nullary -------------
    pub fn empty(&self) -> Predicate {
        Predicate::new(self.name.clone(), Operation::Empty, None)
    }
    pub fn not_empty(&self) -> Predicate {
        Predicate::new(self.name.clone(), Operation::NotEmpty, None)
    }
}

impl From<&str> for Column {
    fn from(name: &str) -> Self { Column::new(name) }
}
impl From<String> for Column {
    fn from(name: String) -> Self { Column::new(name) }
}
