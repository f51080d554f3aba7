use sqlx::{self, postgres::PgArguments, FromRow, PgPool, Row};

use crate::database::manager::DatabaseError;
use crate::filter::types::{Clause, SortDirection, SqlParam, SqlResult};
use crate::filter::Filter;

pub struct QueryBuilder<T> {
    filter: Filter,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> QueryBuilder<T>
where
    T: for<'r> FromRow<'r, sqlx::postgres::PgRow> + Send + Unpin,
{
    pub fn new(table_name: impl Into<String>) -> Result<Self, DatabaseError> {
        Ok(Self {
            filter: Filter::new(table_name)?,
            _phantom: std::marker::PhantomData,
        })
    }

    pub fn filter(mut self, clauses: Vec<Clause>) -> Self {
        self.filter.where_clauses(clauses);
        self
    }

    pub fn order(mut self, column: &str, sort: SortDirection) -> Result<Self, DatabaseError> {
        self.filter.order(column, sort)?;
        Ok(self)
    }

    pub fn limit(mut self, limit: i64) -> Result<Self, DatabaseError> {
        self.filter.limit(limit)?;
        Ok(self)
    }

    pub async fn select_all(self, pool: &PgPool) -> Result<Vec<T>, DatabaseError> {
        let sql_result = self.filter.to_sql()?;
        let mut q = sqlx::query_as::<_, T>(&sql_result.query);
        for p in sql_result.params.iter() {
            q = bind_param_query_as(q, p);
        }
        let rows = q.fetch_all(pool).await?;
        Ok(rows)
    }

    pub async fn select_optional(self, pool: &PgPool) -> Result<Option<T>, DatabaseError> {
        let sql_result = self.filter.to_sql()?;
        let mut q = sqlx::query_as::<_, T>(&sql_result.query);
        for p in sql_result.params.iter() {
            q = bind_param_query_as(q, p);
        }
        let row = q.fetch_optional(pool).await?;
        Ok(row)
    }

    pub async fn count(self, pool: &PgPool) -> Result<i64, DatabaseError> {
        let SqlResult { query, params } = self.filter.to_count_sql()?;
        let mut q = sqlx::query(&query);
        for p in params.iter() {
            q = bind_param_query(q, p);
        }
        let row = q.fetch_one(pool).await?;
        let count: i64 = row.try_get("count")?;
        Ok(count)
    }
}

pub(crate) fn bind_param_query<'q>(
    q: sqlx::query::Query<'q, sqlx::Postgres, PgArguments>,
    v: &'q SqlParam,
) -> sqlx::query::Query<'q, sqlx::Postgres, PgArguments> {
    match v {
        SqlParam::Int(i) => q.bind(*i),
        SqlParam::BigInt(i) => q.bind(*i),
        SqlParam::Text(s) => q.bind(s.as_str()),
        SqlParam::Bool(b) => q.bind(*b),
    }
}

pub(crate) fn bind_param_query_as<'q, O>(
    q: sqlx::query::QueryAs<'q, sqlx::Postgres, O, PgArguments>,
    v: &'q SqlParam,
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, O, PgArguments>
where
    O: for<'r> FromRow<'r, sqlx::postgres::PgRow>,
{
    match v {
        SqlParam::Int(i) => q.bind(*i),
        SqlParam::BigInt(i) => q.bind(*i),
        SqlParam::Text(s) => q.bind(s.as_str()),
        SqlParam::Bool(b) => q.bind(*b),
    }
}
