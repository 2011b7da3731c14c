//! Predicates and boolean filter trees.
//!
//! A [`Predicate`] is one `(field, operation, operand)` triple. A
//! [`FilterNode`] is either a leaf wrapping one predicate or an AND/OR
//! connective over child nodes. The combinators [`and`] and [`or`] wrap bare
//! predicates as leaves and nest existing nodes unchanged, so
//! `and([a, or([b, c])])` keeps two levels.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::error::{Result, ScreenerError};
use crate::operand::Operand;
use crate::operation::{LogicalOperator, Operation};

// ------------- Predicate -------------
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Predicate {
    pub left: String,
    pub operation: Operation,
    /// Absent for the nullary operations; the key is then left out entirely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<Operand>,
}

impl Predicate {
    pub fn new(left: impl Into<String>, operation: Operation, right: Option<Operand>) -> Self {
        Self { left: left.into(), operation, right }
    }
}

// ------------- FilterNode -------------
#[derive(Debug, Clone, PartialEq)]
pub enum FilterNode {
    Leaf(Predicate),
    Connective {
        operator: LogicalOperator,
        operands: Vec<FilterNode>,
    },
}

impl FilterNode {
    /// The structural tag check deciding between wrap and pass-through.
    pub fn is_connective(&self) -> bool {
        matches!(self, FilterNode::Connective { .. })
    }
    pub fn operator(&self) -> Option<LogicalOperator> {
        match self {
            FilterNode::Connective { operator, .. } => Some(*operator),
            FilterNode::Leaf(_) => None,
        }
    }
    pub fn operands(&self) -> &[FilterNode] {
        match self {
            FilterNode::Connective { operands, .. } => operands,
            FilterNode::Leaf(_) => &[],
        }
    }
    /// Depth of the tree, a leaf counting as one.
    pub fn depth(&self) -> usize {
        match self {
            FilterNode::Leaf(_) => 1,
            FilterNode::Connective { operands, .. } => {
                1 + operands.iter().map(FilterNode::depth).max().unwrap_or(0)
            }
        }
    }
}

impl From<Predicate> for FilterNode {
    fn from(p: Predicate) -> Self { FilterNode::Leaf(p) }
}

// body of a connective as it appears on the wire
#[derive(Serialize)]
struct ConnectiveBody<'a> {
    operator: LogicalOperator,
    operands: &'a [FilterNode],
}

impl Serialize for FilterNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            FilterNode::Leaf(predicate) => map.serialize_entry("expression", predicate)?,
            FilterNode::Connective { operator, operands } => map.serialize_entry(
                "operation",
                &ConnectiveBody { operator: *operator, operands },
            )?,
        }
        map.end()
    }
}

// ------------- Combinators -------------
fn combine<I, T>(operator: LogicalOperator, items: I) -> Result<FilterNode>
where
    I: IntoIterator<Item = T>,
    T: Into<FilterNode>,
{
    let operands: Vec<FilterNode> = items.into_iter().map(Into::into).collect();
    if operands.is_empty() {
        return Err(ScreenerError::EmptyConnective(operator.as_str()));
    }
    Ok(FilterNode::Connective { operator, operands })
}

/// Every operand must hold.
pub fn and<I, T>(items: I) -> Result<FilterNode>
where
    I: IntoIterator<Item = T>,
    T: Into<FilterNode>,
{
    combine(LogicalOperator::And, items)
}

/// At least one operand must hold.
pub fn or<I, T>(items: I) -> Result<FilterNode>
where
    I: IntoIterator<Item = T>,
    T: Into<FilterNode>,
{
    combine(LogicalOperator::Or, items)
}
