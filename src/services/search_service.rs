use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::database::{CarCatalog, DatabaseError, RentalCatalog};
use crate::filter::CarQuery;
use crate::types::{FilterParameters, RentalSearch, RentalSearchResult};

use super::availability::{filter_available, DateWindow, WindowError};
use super::filter_parameters;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    Window(#[from] WindowError),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

/// Car search over a fresh snapshot of both catalogs per call
#[derive(Clone)]
pub struct SearchService {
    cars: Arc<dyn CarCatalog>,
    rentals: Arc<dyn RentalCatalog>,
}

impl SearchService {
    pub fn new(cars: Arc<dyn CarCatalog>, rentals: Arc<dyn RentalCatalog>) -> Self {
        Self { cars, rentals }
    }

    pub async fn search(&self, search: &RentalSearch) -> Result<Vec<RentalSearchResult>, SearchError> {
        // Reject bad dates before touching storage
        let window = DateWindow::parse(&search.start_date, &search.end_date)?;
        let query = CarQuery::from_search(search);

        let cars = self.cars.find(&query).await?;
        let rentals = self.rentals.all().await?;
        let candidates = cars.len();

        let results = filter_available(cars, &rentals, &window);
        debug!(
            "Search {}..{} with {} predicates: {} candidates, {} available",
            window.start(),
            window.end(),
            query.predicates().len(),
            candidates,
            results.len()
        );
        Ok(results)
    }

    pub async fn filter_parameters(&self) -> Result<FilterParameters, DatabaseError> {
        let cars = self.cars.all().await?;
        Ok(filter_parameters::enumerate(&cars))
    }
}
