// used for the scalar payload, which is whatever JSON the remote accepts
use serde::Serialize;
use serde_json::Value;

use crate::column::Column;

/// The right-hand side of a predicate.
///
/// Operands are never checked against the type of the remote field; a
/// mismatch surfaces only as a rejection from the service.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Operand {
    /// A literal number, string, bool or null.
    Scalar(Value),
    /// Another remote field, sent as its bare name so the service compares
    /// two computed fields.
    Field(String),
    /// `[min, max]`
    Range(Box<Operand>, Box<Operand>),
    List(Vec<Operand>),
}

impl Operand {
    pub fn range(min: impl Into<Operand>, max: impl Into<Operand>) -> Self {
        Operand::Range(Box::new(min.into()), Box::new(max.into()))
    }
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Operand>,
    {
        Operand::List(items.into_iter().map(Into::into).collect())
    }
    pub fn is_field(&self) -> bool {
        matches!(self, Operand::Field(_))
    }
}

// ------------- Conversions -------------
macro_rules! scalar_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Operand {
                fn from(v: $t) -> Self { Operand::Scalar(Value::from(v)) }
            }
        )*
    };
}
scalar_from!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, bool, String, &str);

impl From<Value> for Operand {
    fn from(v: Value) -> Self { Operand::Scalar(v) }
}
impl From<Column> for Operand {
    fn from(c: Column) -> Self { Operand::Field(c.name().to_string()) }
}
impl From<&Column> for Operand {
    fn from(c: &Column) -> Self { Operand::Field(c.name().to_string()) }
}
impl<T: Into<Operand>> From<Vec<T>> for Operand {
    fn from(items: Vec<T>) -> Self { Operand::list(items) }
}
