use sqlx::{self, postgres::PgRow, FromRow, PgPool};

use crate::database::manager::DatabaseError;
use crate::database::query_builder::QueryBuilder;
use crate::filter::types::{Clause, FilterOp, SortDirection, SqlParam};

/// Typed read access to one table; rows come back ordered by id
pub struct Repository<T> {
    table_name: String,
    pool: PgPool,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Repository<T>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    pub fn new(table_name: impl Into<String>, pool: PgPool) -> Self {
        Self {
            table_name: table_name.into(),
            pool,
            _phantom: std::marker::PhantomData,
        }
    }

    pub async fn select_any(&self, clauses: Vec<Clause>) -> Result<Vec<T>, DatabaseError> {
        QueryBuilder::<T>::new(&self.table_name)?
            .filter(clauses)
            .order("id", SortDirection::Asc)?
            .select_all(&self.pool)
            .await
    }

    pub async fn select_one(&self, clauses: Vec<Clause>) -> Result<Option<T>, DatabaseError> {
        QueryBuilder::<T>::new(&self.table_name)?
            .filter(clauses)
            .limit(1)?
            .select_optional(&self.pool)
            .await
    }

    pub async fn select_id(&self, id: &str) -> Result<Option<T>, DatabaseError> {
        self.select_one(vec![Clause::new("id", FilterOp::Eq, SqlParam::Text(id.to_string()))])
            .await
    }

    pub async fn count(&self, clauses: Vec<Clause>) -> Result<i64, DatabaseError> {
        QueryBuilder::<T>::new(&self.table_name)?
            .filter(clauses)
            .count(&self.pool)
            .await
    }
}
