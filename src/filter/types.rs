use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Eq,
    Gte,
    Lte,
}

impl FilterOp {
    pub fn to_sql(&self) -> &'static str {
        match self {
            FilterOp::Eq => "=",
            FilterOp::Gte => ">=",
            FilterOp::Lte => "<=",
        }
    }
}

/// A bound query parameter, typed to the column it is compared against
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SqlParam {
    Int(i32),
    BigInt(i64),
    Text(String),
    Bool(bool),
}

/// One `column <op> $n` condition
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    pub column: String,
    pub op: FilterOp,
    pub param: SqlParam,
}

impl Clause {
    pub fn new(column: impl Into<String>, op: FilterOp, param: SqlParam) -> Self {
        Self { column: column.into(), op, param }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn to_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone)]
pub struct FilterOrderInfo {
    pub column: String,
    pub sort: SortDirection,
}

#[derive(Debug, Clone)]
pub struct SqlResult {
    pub query: String,
    pub params: Vec<SqlParam>,
}
