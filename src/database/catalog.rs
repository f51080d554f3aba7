use async_trait::async_trait;

use crate::database::manager::DatabaseError;
use crate::database::models::{Car, Rental, User, UserPatch};
use crate::filter::CarQuery;

/// Read access to the car catalog
#[async_trait]
pub trait CarCatalog: Send + Sync + 'static {
    /// Cars matching every predicate of `query`, in catalog order
    async fn find(&self, query: &CarQuery) -> Result<Vec<Car>, DatabaseError>;

    async fn all(&self) -> Result<Vec<Car>, DatabaseError> {
        self.find(&CarQuery::new()).await
    }
}

/// Read access to the booking catalog
#[async_trait]
pub trait RentalCatalog: Send + Sync + 'static {
    /// Every rental, canceled ones included
    async fn all(&self) -> Result<Vec<Rental>, DatabaseError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    Updated(User),
    /// The user exists but the patch matched its current values
    Unchanged,
    NotFound,
}

#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    async fn list(&self) -> Result<Vec<User>, DatabaseError>;

    async fn get(&self, id: &str) -> Result<Option<User>, DatabaseError>;

    /// Fails with `DatabaseError::Conflict` when the id is taken
    async fn insert(&self, user: User) -> Result<User, DatabaseError>;

    async fn update(&self, id: &str, patch: UserPatch) -> Result<UpdateOutcome, DatabaseError>;

    /// Returns whether a user was removed
    async fn delete(&self, id: &str) -> Result<bool, DatabaseError>;
}

/// Storage liveness, reported by `/health`
#[async_trait]
pub trait HealthCheck: Send + Sync + 'static {
    async fn ping(&self) -> Result<(), DatabaseError>;
}
