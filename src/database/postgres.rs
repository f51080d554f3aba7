use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::catalog::{CarCatalog, HealthCheck, RentalCatalog, UpdateOutcome, UserStore};
use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::{Car, Rental, User, UserPatch};
use crate::database::query_builder::bind_param_query_as;
use crate::database::repository::Repository;
use crate::filter::types::{Clause, FilterOp, SqlParam};
use crate::filter::CarQuery;

const CARS_TABLE: &str = "cars";
const RENTALS_TABLE: &str = "rentals";
const USERS_TABLE: &str = "users";

/// PostgreSQL-backed catalogs and user store sharing one pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn cars(&self) -> Repository<Car> {
        Repository::new(CARS_TABLE, self.pool.clone())
    }

    fn rentals(&self) -> Repository<Rental> {
        Repository::new(RENTALS_TABLE, self.pool.clone())
    }

    fn users(&self) -> Repository<User> {
        Repository::new(USERS_TABLE, self.pool.clone())
    }

    async fn user_exists(&self, id: &str) -> Result<bool, DatabaseError> {
        let count = self
            .users()
            .count(vec![Clause::new("id", FilterOp::Eq, SqlParam::Text(id.to_string()))])
            .await?;
        Ok(count > 0)
    }
}

#[async_trait]
impl CarCatalog for PgStore {
    async fn find(&self, query: &CarQuery) -> Result<Vec<Car>, DatabaseError> {
        self.cars().select_any(query.clauses()).await
    }
}

#[async_trait]
impl RentalCatalog for PgStore {
    async fn all(&self) -> Result<Vec<Rental>, DatabaseError> {
        self.rentals().select_any(vec![]).await
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn list(&self) -> Result<Vec<User>, DatabaseError> {
        self.users().select_any(vec![]).await
    }

    async fn get(&self, id: &str) -> Result<Option<User>, DatabaseError> {
        self.users().select_id(id).await
    }

    async fn insert(&self, user: User) -> Result<User, DatabaseError> {
        let sql = r#"
            INSERT INTO "users" (
                id, licence_number, wallet_balance, country, city, street,
                postal_code, house_number, apartment_number, phone_number
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
        "#;

        let result = sqlx::query_as::<_, User>(sql)
            .bind(&user.id)
            .bind(&user.licence_number)
            .bind(user.wallet_balance)
            .bind(&user.country)
            .bind(&user.city)
            .bind(&user.street)
            .bind(&user.postal_code)
            .bind(&user.house_number)
            .bind(&user.apartment_number)
            .bind(&user.phone_number)
            .fetch_one(&self.pool)
            .await;

        match result {
            Ok(created) => Ok(created),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Err(DatabaseError::Conflict(format!("User {} already exists", user.id)))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn update(&self, id: &str, patch: UserPatch) -> Result<UpdateOutcome, DatabaseError> {
        let assignments = patch_assignments(&patch);
        if assignments.is_empty() {
            return Ok(if self.user_exists(id).await? { UpdateOutcome::Unchanged } else { UpdateOutcome::NotFound });
        }

        let (sql, params) = build_update_sql(id, assignments);
        let mut q = sqlx::query_as::<_, User>(&sql);
        for p in params.iter() {
            q = bind_param_query_as(q, p);
        }

        match q.fetch_optional(&self.pool).await? {
            Some(user) => Ok(UpdateOutcome::Updated(user)),
            None if self.user_exists(id).await? => Ok(UpdateOutcome::Unchanged),
            None => Ok(UpdateOutcome::NotFound),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool, DatabaseError> {
        let result = sqlx::query(r#"DELETE FROM "users" WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl HealthCheck for PgStore {
    async fn ping(&self) -> Result<(), DatabaseError> {
        DatabaseManager::health_check(&self.pool).await
    }
}

fn patch_assignments(patch: &UserPatch) -> Vec<(&'static str, SqlParam)> {
    let text = |column: &'static str, value: &Option<String>| value.clone().map(|v| (column, SqlParam::Text(v)));

    [
        text("licence_number", &patch.licence_number),
        patch.wallet_balance.map(|v| ("wallet_balance", SqlParam::BigInt(v))),
        text("country", &patch.country),
        text("city", &patch.city),
        text("street", &patch.street),
        text("postal_code", &patch.postal_code),
        text("house_number", &patch.house_number),
        text("apartment_number", &patch.apartment_number),
        text("phone_number", &patch.phone_number),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Only touches the row when at least one supplied value differs, so an
/// empty result means either "missing" or "unchanged"
fn build_update_sql(id: &str, assignments: Vec<(&'static str, SqlParam)>) -> (String, Vec<SqlParam>) {
    let mut sets = Vec::with_capacity(assignments.len());
    let mut diffs = Vec::with_capacity(assignments.len());
    let mut params = Vec::with_capacity(assignments.len() + 1);

    for (i, (column, value)) in assignments.into_iter().enumerate() {
        let placeholder = format!("${}", i + 1);
        sets.push(format!("\"{}\" = {}", column, placeholder));
        diffs.push(format!("\"{}\" IS DISTINCT FROM {}", column, placeholder));
        params.push(value);
    }
    params.push(SqlParam::Text(id.to_string()));

    let sql = format!(
        "UPDATE \"{}\" SET {} WHERE \"id\" = ${} AND ({}) RETURNING *",
        USERS_TABLE,
        sets.join(", "),
        params.len(),
        diffs.join(" OR ")
    );
    (sql, params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_patch_has_no_assignments() {
        assert!(patch_assignments(&UserPatch::default()).is_empty());
    }

    #[test]
    fn update_sql_sets_and_guards_supplied_columns() {
        let patch = UserPatch {
            city: Some("Gdansk".to_string()),
            wallet_balance: Some(20),
            ..Default::default()
        };
        let (sql, params) = build_update_sql("u1", patch_assignments(&patch));

        assert_eq!(
            sql,
            "UPDATE \"users\" SET \"wallet_balance\" = $1, \"city\" = $2 WHERE \"id\" = $3 \
             AND (\"wallet_balance\" IS DISTINCT FROM $1 OR \"city\" IS DISTINCT FROM $2) RETURNING *"
        );
        assert_eq!(
            params,
            vec![SqlParam::BigInt(20), SqlParam::Text("Gdansk".into()), SqlParam::Text("u1".into())]
        );
    }
}
