use super::error::FilterError;
use super::filter::validate_identifier;
use super::types::{Clause, SqlParam};

/// Renders AND-combined clauses into a WHERE body with positional parameters
pub struct FilterWhere {
    param_values: Vec<SqlParam>,
    param_index: usize,
}

impl FilterWhere {
    pub fn new(starting_param_index: usize) -> Self {
        Self {
            param_values: vec![],
            param_index: starting_param_index,
        }
    }

    pub fn generate(clauses: &[Clause], starting_param_index: usize) -> Result<(String, Vec<SqlParam>), FilterError> {
        let mut filter_where = Self::new(starting_param_index);
        filter_where.build(clauses)
    }

    fn build(&mut self, clauses: &[Clause]) -> Result<(String, Vec<SqlParam>), FilterError> {
        let mut sql_conditions = Vec::with_capacity(clauses.len());
        for clause in clauses {
            validate_identifier(&clause.column).map_err(FilterError::InvalidColumn)?;
            let placeholder = self.param(clause.param.clone());
            sql_conditions.push(format!("\"{}\" {} {}", clause.column, clause.op.to_sql(), placeholder));
        }
        let where_clause = if sql_conditions.is_empty() { "1=1".to_string() } else { sql_conditions.join(" AND ") };
        Ok((where_clause, std::mem::take(&mut self.param_values)))
    }

    fn param(&mut self, value: SqlParam) -> String {
        self.param_values.push(value);
        self.param_index += 1;
        format!("${}", self.param_index)
    }
}
