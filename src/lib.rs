//! Screener – a fluent query builder and client for a remote stock screening API.
//!
//! A caller assembles filter predicates, sort and paging directives and a
//! column selection on a [`Query`], which compiles into the single JSON
//! document the remote scan endpoint understands. The tabular response is
//! zipped back against the selected columns into named records.
//!
//! ## Modules
//! * [`operation`] – The closed vocabulary of wire operation codes and the AND/OR connectives.
//! * [`operand`] – Right-hand values: scalars, ranges, lists and references to other fields.
//! * [`column`] – [`column::Column`], turning a field name into predicates.
//! * [`expression`] – [`expression::Predicate`], [`expression::FilterNode`] and the
//!   [`expression::and`] / [`expression::or`] combinators.
//! * [`query`] – The mutable [`query::Query`] builder and its wire document.
//! * [`response`] – Wire response shapes and the column mapper.
//! * [`client`] – The [`client::Transport`] seam, the `reqwest` transport and [`client::Screener`].
//! * [`settings`] – [`settings::ScreenerConfig`], loaded through the `config` crate.
//!
//! ## Filters
//! Predicates passed to [`query::Query::where_`] accumulate and must all
//! hold. A tree built with `and`/`or` goes to [`query::Query::where2`] and
//! replaces any previous tree. Both may be set at once; they are sent side
//! by side and the service decides how they combine.
//!
//! ## Quick Start
//! ```
//! use screener::{and, col, or, Query};
//! let mut q = Query::new();
//! q.select(["name", "close", "volume"])
//!     .set_markets(["america"])
//!     .where_([col("market_cap_basic").gt(1_000_000_000u64)])
//!     .order_by("volume", false, false)
//!     .offset(10)
//!     .limit(25);
//! let tree = and([
//!     col("type").eq("stock").into(),
//!     or([col("close").lt(10), col("close").gt(100)]).unwrap(),
//! ])
//! .unwrap();
//! q.where2(tree);
//! let doc = q.compile();
//! assert_eq!(doc.range, [10, 35]);
//! assert_eq!(doc.columns, vec!["name", "close", "volume"]);
//! ```
//!
//! ## Paging
//! [`query::Query::limit`] and [`query::Query::offset`] both read the current
//! range, so their order matters: `limit(10)` then `offset(5)` gives `[5, 15]`,
//! and a following `limit(20)` gives `[5, 25]`.
//!
//! ## Fan-out
//! A [`query::Query`] has one owner. To run variations concurrently, take a
//! [`query::Query::copy`] per variation; copies share nothing.

pub mod client;
pub mod column;
pub mod error;
pub mod expression;
pub mod operand;
pub mod operation;
pub mod query;
pub mod response;
pub mod settings;

pub use client::{HttpTransport, Screener, Transport};
pub use column::{col, Column};
pub use error::{Result, ScreenerError};
pub use expression::{and, or, FilterNode, Predicate};
pub use operand::Operand;
pub use operation::{LogicalOperator, Operation};
pub use query::{Query, ScanRequest, SortOrder};
pub use response::{ScanRecord, ScanResponse, ScanResult};
pub use settings::ScreenerConfig;
