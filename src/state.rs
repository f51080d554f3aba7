use std::sync::Arc;

use crate::config::{AppConfig, StorageBackend};
use crate::database::fixture::Fixture;
use crate::database::{CarCatalog, DatabaseManager, HealthCheck, MemoryStore, PgStore, RentalCatalog, UserStore};
use crate::services::SearchService;

/// Storage handles injected into every handler
#[derive(Clone)]
pub struct AppState {
    pub cars: Arc<dyn CarCatalog>,
    pub rentals: Arc<dyn RentalCatalog>,
    pub users: Arc<dyn UserStore>,
    pub health: Arc<dyn HealthCheck>,
}

impl AppState {
    /// Uses one store for every catalog
    pub fn from_store<S>(store: S) -> Self
    where
        S: CarCatalog + RentalCatalog + UserStore + HealthCheck,
    {
        let store = Arc::new(store);
        Self {
            cars: store.clone(),
            rentals: store.clone(),
            users: store.clone(),
            health: store,
        }
    }

    pub async fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        match config.storage.backend {
            StorageBackend::Memory => {
                let fixture = match &config.storage.fixture {
                    Some(path) => {
                        let fixture = Fixture::load(path)?;
                        tracing::info!(
                            "Loaded fixture {}: {} cars, {} rentals, {} users",
                            path.display(),
                            fixture.cars.len(),
                            fixture.rentals.len(),
                            fixture.users.len()
                        );
                        fixture
                    }
                    None => Fixture::default(),
                };
                Ok(Self::from_store(MemoryStore::from_fixture(fixture)))
            }
            StorageBackend::Postgres => {
                let pool = DatabaseManager::connect(&config.database).await?;
                if config.database.run_migrations {
                    DatabaseManager::migrate(&pool).await?;
                }
                Ok(Self::from_store(PgStore::new(pool)))
            }
        }
    }

    pub fn search_service(&self) -> SearchService {
        SearchService::new(self.cars.clone(), self.rentals.clone())
    }
}
