use super::error::FilterError;
use super::filter_where::FilterWhere;
use super::types::{Clause, FilterOrderInfo, SortDirection, SqlResult};

/// SELECT builder over a single table
pub struct Filter {
    table_name: String,
    clauses: Vec<Clause>,
    order_data: Vec<FilterOrderInfo>,
    limit: Option<i64>,
}

impl Filter {
    pub fn new(table_name: impl Into<String>) -> Result<Self, FilterError> {
        let table_name = table_name.into();
        validate_identifier(&table_name).map_err(FilterError::InvalidTableName)?;
        Ok(Self {
            table_name,
            clauses: vec![],
            order_data: vec![],
            limit: None,
        })
    }

    pub fn where_clauses(&mut self, clauses: Vec<Clause>) -> &mut Self {
        self.clauses = clauses;
        self
    }

    pub fn order(&mut self, column: impl Into<String>, sort: SortDirection) -> Result<&mut Self, FilterError> {
        let column = column.into();
        validate_identifier(&column).map_err(FilterError::InvalidColumn)?;
        self.order_data.push(FilterOrderInfo { column, sort });
        Ok(self)
    }

    pub fn limit(&mut self, limit: i64) -> Result<&mut Self, FilterError> {
        if limit < 0 {
            return Err(FilterError::InvalidLimit("Limit must be non-negative".to_string()));
        }
        self.limit = Some(limit);
        Ok(self)
    }

    pub fn to_sql(&self) -> Result<SqlResult, FilterError> {
        let (where_clause, params) = FilterWhere::generate(&self.clauses, 0)?;

        let query = [
            "SELECT *".to_string(),
            format!("FROM \"{}\"", self.table_name),
            format!("WHERE {}", where_clause),
            self.build_order_clause(),
            self.limit.map(|l| format!("LIMIT {}", l)).unwrap_or_default(),
        ]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

        Ok(SqlResult { query, params })
    }

    pub fn to_count_sql(&self) -> Result<SqlResult, FilterError> {
        let (where_clause, params) = FilterWhere::generate(&self.clauses, 0)?;
        let query = format!("SELECT COUNT(*) as count FROM \"{}\" WHERE {}", self.table_name, where_clause);
        Ok(SqlResult { query, params })
    }

    fn build_order_clause(&self) -> String {
        if self.order_data.is_empty() {
            return String::new();
        }
        let parts: Vec<String> = self
            .order_data
            .iter()
            .map(|o| format!("\"{}\" {}", o.column, o.sort.to_sql()))
            .collect();
        format!("ORDER BY {}", parts.join(", "))
    }
}

/// Table and column names must be plain identifiers since they are quoted, not bound
pub(crate) fn validate_identifier(name: &str) -> Result<(), String> {
    let mut chars = name.chars();
    match chars.next() {
        None => Err("Identifier cannot be empty".to_string()),
        Some(first) if !(first.is_ascii_alphabetic() || first == '_') => {
            Err(format!("Invalid identifier format: {}", name))
        }
        Some(_) if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') => {
            Err(format!("Invalid identifier format: {}", name))
        }
        Some(_) => Ok(()),
    }
}
