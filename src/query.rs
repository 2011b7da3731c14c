//! The query builder and the wire document it compiles into.
//!
//! A [`Query`] is mutated in place; every builder method returns `&mut Self`
//! so calls chain. Compiling is non-destructive and can happen any number of
//! times. [`Query::copy`] is the way to fan out: the clone owns every nested
//! container and shares nothing with its source.
//!
//! ```
//! use screener::{col, Query};
//! let mut q = Query::new();
//! q.select(["name", "close"]).where_([col("close").gt(5)]).limit(10);
//! let doc = q.compile();
//! assert_eq!(doc.range, [0, 10]);
//! ```

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::warn;

// used to print out readable forms of a query
use std::fmt;

use crate::expression::{FilterNode, Predicate};
use crate::operation::LogicalOperator;

pub const DEFAULT_MARKET: &str = "america";
pub const DEFAULT_COLUMNS: [&str; 4] = ["name", "close", "volume", "market_cap_basic"];
pub const DEFAULT_SORT_COLUMN: &str = "name";
pub const DEFAULT_RANGE: [u64; 2] = [0, 50];
pub const DEFAULT_LANG: &str = "en";

// keys owned by the builder, which set_property will not shadow
const RESERVED_KEYS: [&str; 8] = [
    "markets", "symbols", "options", "columns", "filter", "filter2", "sort", "range",
];

// ------------- Wire pieces -------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SortSpec {
    pub sort_by: String,
    pub sort_order: SortOrder,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nulls_first: Option<bool>,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self { sort_by: DEFAULT_SORT_COLUMN.to_string(), sort_order: SortOrder::Asc, nulls_first: None }
    }
}

/// A group selection such as index membership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolGroup {
    #[serde(rename = "type")]
    pub kind: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Symbols {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<SymbolGroup>,
}

impl Symbols {
    pub fn is_empty(&self) -> bool {
        self.tickers.is_none() && self.groups.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanOptions {
    pub lang: String,
}

impl Default for ScanOptions {
    fn default() -> Self { Self { lang: DEFAULT_LANG.to_string() } }
}

/// The request body POSTed to the scan endpoint.
///
/// Both `filter` and `filter2` are sent when both are set; how the service
/// combines them is up to the service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanRequest {
    pub markets: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbols: Option<Symbols>,
    pub options: ScanOptions,
    pub columns: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filter: Vec<Predicate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter2: Option<FilterNode>,
    pub sort: SortSpec,
    pub range: [u64; 2],
    #[serde(flatten)]
    pub properties: Map<String, Value>,
}

// ------------- Query -------------
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    markets: Vec<String>,
    symbols: Symbols,
    options: ScanOptions,
    columns: Vec<String>,
    filter: Vec<Predicate>,
    filter2: Option<FilterNode>,
    sort: SortSpec,
    range: [u64; 2],
    properties: Map<String, Value>,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            markets: vec![DEFAULT_MARKET.to_string()],
            symbols: Symbols::default(),
            options: ScanOptions::default(),
            columns: DEFAULT_COLUMNS.iter().map(|c| c.to_string()).collect(),
            filter: Vec::new(),
            filter2: None,
            sort: SortSpec::default(),
            range: DEFAULT_RANGE,
            properties: Map::new(),
        }
    }
}

fn collect_strings<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items.into_iter().map(Into::into).collect()
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------- Accessors -------------
    pub fn markets(&self) -> &[String] {
        &self.markets
    }
    /// The market that names the endpoint path.
    pub fn primary_market(&self) -> &str {
        self.markets.first().map(String::as_str).unwrap_or(DEFAULT_MARKET)
    }
    pub fn columns(&self) -> &[String] {
        &self.columns
    }
    pub fn symbols(&self) -> &Symbols {
        &self.symbols
    }
    pub fn filters(&self) -> &[Predicate] {
        &self.filter
    }
    pub fn filter_tree(&self) -> Option<&FilterNode> {
        self.filter2.as_ref()
    }
    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }
    pub fn range(&self) -> [u64; 2] {
        self.range
    }

    // ------------- Selection -------------
    /// Replaces the column list. An empty list leaves the current one alone.
    pub fn select<I, S>(&mut self, columns: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns = collect_strings(columns);
        if !columns.is_empty() {
            self.columns = columns;
        }
        self
    }
    /// Replaces the market list. An empty list leaves the current one alone.
    pub fn set_markets<I, S>(&mut self, markets: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let markets = collect_strings(markets);
        if !markets.is_empty() {
            self.markets = markets;
        }
        self
    }
    /// Selects explicit tickers such as `NASDAQ:AAPL`. Empty input is ignored.
    pub fn set_tickers<I, S>(&mut self, tickers: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tickers = collect_strings(tickers);
        if !tickers.is_empty() {
            self.symbols.tickers = Some(tickers);
        }
        self
    }
    /// Appends one index-membership group per call, e.g. `SYML:SP;SPX`.
    pub fn set_index<I, S>(&mut self, indexes: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = collect_strings(indexes);
        if !values.is_empty() {
            self.symbols.groups.push(SymbolGroup { kind: "index".to_string(), values });
        }
        self
    }

    // ------------- Filtering -------------
    /// Appends to the flat filter list; all accumulated predicates must hold.
    pub fn where_<I>(&mut self, predicates: I) -> &mut Self
    where
        I: IntoIterator<Item = Predicate>,
    {
        self.filter.extend(predicates);
        self
    }
    /// Replaces the boolean filter tree. Independent of [`Query::where_`].
    /// A lone leaf is stored as a one-operand AND, since `filter2` is always
    /// sent as `{"operation": {...}}`.
    pub fn where2(&mut self, node: impl Into<FilterNode>) -> &mut Self {
        let node = match node.into() {
            leaf @ FilterNode::Leaf(_) => FilterNode::Connective {
                operator: LogicalOperator::And,
                operands: vec![leaf],
            },
            connective => connective,
        };
        self.filter2 = Some(node);
        self
    }

    // ------------- Sorting and paging -------------
    pub fn order_by(&mut self, column: impl Into<String>, ascending: bool, nulls_first: bool) -> &mut Self {
        self.sort = SortSpec {
            sort_by: column.into(),
            sort_order: if ascending { SortOrder::Asc } else { SortOrder::Desc },
            nulls_first: Some(nulls_first),
        };
        self
    }
    /// Sets the window to `n` rows starting at the current lower bound.
    pub fn limit(&mut self, n: u64) -> &mut Self {
        let lower = self.range[0];
        self.range = [lower, lower.saturating_add(n)];
        self
    }
    /// Moves the window to start at `n`, keeping its current width.
    pub fn offset(&mut self, n: u64) -> &mut Self {
        let width = self.range[1].saturating_sub(self.range[0]);
        self.range = [n, n.saturating_add(width)];
        self
    }

    // ------------- Extra properties -------------
    /// Adds a top-level document key the builder has no method for, such as
    /// `price_conversion` or `ignore_unknown_fields`.
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        let key = key.into();
        if RESERVED_KEYS.contains(&key.as_str()) {
            warn!(%key, "property shadows a builder-managed key, ignored");
            return self;
        }
        self.properties.insert(key, value.into());
        self
    }

    // ------------- Finalizing -------------
    /// An independent deep clone.
    pub fn copy(&self) -> Self {
        self.clone()
    }
    /// Builds the wire document from the current state without touching it.
    pub fn compile(&self) -> ScanRequest {
        ScanRequest {
            markets: self.markets.clone(),
            symbols: if self.symbols.is_empty() { None } else { Some(self.symbols.clone()) },
            options: self.options.clone(),
            columns: self.columns.clone(),
            filter: self.filter.clone(),
            filter2: self.filter2.clone(),
            sort: self.sort.clone(),
            range: self.range,
            properties: self.properties.clone(),
        }
    }
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(&self.compile())?)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string_pretty(&self.compile()).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
