use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::database::catalog::{CarCatalog, HealthCheck, RentalCatalog, UpdateOutcome, UserStore};
use crate::database::fixture::Fixture;
use crate::database::manager::DatabaseError;
use crate::database::models::{Car, Rental, User, UserPatch};
use crate::filter::CarQuery;

#[derive(Default)]
struct Tables {
    cars: Vec<Car>,
    rentals: Vec<Rental>,
    users: Vec<User>,
}

/// In-process store seeded from a fixture; insertion order is catalog order
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fixture(fixture: Fixture) -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables {
                cars: fixture.cars,
                rentals: fixture.rentals,
                users: fixture.users,
            })),
        }
    }

    pub async fn add_car(&self, car: Car) {
        self.tables.write().await.cars.push(car);
    }

    pub async fn add_rental(&self, rental: Rental) {
        self.tables.write().await.rentals.push(rental);
    }
}

#[async_trait]
impl CarCatalog for MemoryStore {
    async fn find(&self, query: &CarQuery) -> Result<Vec<Car>, DatabaseError> {
        let tables = self.tables.read().await;
        Ok(tables.cars.iter().filter(|car| query.matches(car)).cloned().collect())
    }
}

#[async_trait]
impl RentalCatalog for MemoryStore {
    async fn all(&self) -> Result<Vec<Rental>, DatabaseError> {
        Ok(self.tables.read().await.rentals.clone())
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn list(&self) -> Result<Vec<User>, DatabaseError> {
        Ok(self.tables.read().await.users.clone())
    }

    async fn get(&self, id: &str) -> Result<Option<User>, DatabaseError> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn insert(&self, user: User) -> Result<User, DatabaseError> {
        let mut tables = self.tables.write().await;
        if tables.users.iter().any(|u| u.id == user.id) {
            return Err(DatabaseError::Conflict(format!("User {} already exists", user.id)));
        }
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn update(&self, id: &str, patch: UserPatch) -> Result<UpdateOutcome, DatabaseError> {
        let mut tables = self.tables.write().await;
        let Some(user) = tables.users.iter_mut().find(|u| u.id == id) else {
            return Ok(UpdateOutcome::NotFound);
        };

        if patch.apply_to(user) {
            Ok(UpdateOutcome::Updated(user.clone()))
        } else {
            Ok(UpdateOutcome::Unchanged)
        }
    }

    async fn delete(&self, id: &str) -> Result<bool, DatabaseError> {
        let mut tables = self.tables.write().await;
        let before = tables.users.len();
        tables.users.retain(|u| u.id != id);
        Ok(tables.users.len() < before)
    }
}

#[async_trait]
impl HealthCheck for MemoryStore {
    async fn ping(&self) -> Result<(), DatabaseError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::CarPredicate;
    use crate::testing::{sample_car, sample_rental, sample_user};

    #[tokio::test]
    async fn find_applies_query_in_catalog_order() {
        let store = MemoryStore::new();
        let mut audi = sample_car("c2", 80);
        audi.brand = "Audi".to_string();
        store.add_car(sample_car("c1", 50)).await;
        store.add_car(audi).await;
        store.add_car(sample_car("c3", 120)).await;

        let all = CarCatalog::all(&store).await.unwrap();
        assert_eq!(all.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(), vec!["c1", "c2", "c3"]);

        let cheap = store.find(&CarQuery::new().with(CarPredicate::MaxPrice(100))).await.unwrap();
        assert_eq!(cheap.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(), vec!["c1", "c2"]);

        let audis = store.find(&CarQuery::new().with(CarPredicate::Brand("Audi".into()))).await.unwrap();
        assert_eq!(audis.len(), 1);
    }

    #[tokio::test]
    async fn rentals_include_canceled() {
        let store = MemoryStore::new();
        let mut canceled = sample_rental("r2", "c1", "2024-01-01", "2024-01-02");
        canceled.is_canceled = true;
        store.add_rental(sample_rental("r1", "c1", "2024-01-01", "2024-01-02")).await;
        store.add_rental(canceled).await;

        assert_eq!(RentalCatalog::all(&store).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn insert_rejects_duplicate_ids() {
        let store = MemoryStore::new();
        store.insert(sample_user("u1")).await.unwrap();
        let err = store.insert(sample_user("u1")).await.unwrap_err();
        assert!(matches!(err, DatabaseError::Conflict(_)));
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_reports_each_outcome() {
        let store = MemoryStore::new();
        store.insert(sample_user("u1")).await.unwrap();

        let patch = UserPatch { city: Some("Lodz".to_string()), ..Default::default() };
        match store.update("u1", patch.clone()).await.unwrap() {
            UpdateOutcome::Updated(user) => assert_eq!(user.city, "Lodz"),
            other => panic!("expected update, got {:?}", other),
        }
        assert_eq!(store.update("u1", patch.clone()).await.unwrap(), UpdateOutcome::Unchanged);
        assert_eq!(store.update("u1", UserPatch::default()).await.unwrap(), UpdateOutcome::Unchanged);
        assert_eq!(store.update("missing", patch).await.unwrap(), UpdateOutcome::NotFound);

        assert_eq!(store.get("u1").await.unwrap().unwrap().city, "Lodz");
    }

    #[tokio::test]
    async fn delete_reports_whether_removed() {
        let store = MemoryStore::new();
        store.insert(sample_user("u1")).await.unwrap();
        assert!(store.delete("u1").await.unwrap());
        assert!(!store.delete("u1").await.unwrap());
        assert!(store.get("u1").await.unwrap().is_none());
    }
}
