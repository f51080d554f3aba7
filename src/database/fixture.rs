use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::database::models::{Car, Rental, User};

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Failed to read fixture {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid fixture {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Seed data for the memory store
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub cars: Vec<Car>,
    #[serde(default)]
    pub rentals: Vec<Rental>,
    #[serde(default)]
    pub users: Vec<User>,
}

impl Fixture {
    pub fn load(path: &Path) -> Result<Self, FixtureError> {
        let raw = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| FixtureError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_fixture() {
        let fixture: Fixture = serde_json::from_str(
            r#"{
                "rentals": [
                    {"_id": "r1", "car_id": "c1", "start_date": "2024-01-01", "end_date": "2024-01-05"}
                ]
            }"#,
        )
        .unwrap();

        assert!(fixture.cars.is_empty());
        assert_eq!(fixture.rentals.len(), 1);
        assert!(!fixture.rentals[0].is_canceled);
    }

    #[test]
    fn loads_bundled_demo_fixture() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/demo.json");
        let fixture = Fixture::load(&path).unwrap();
        assert!(!fixture.cars.is_empty());
        assert!(!fixture.users.is_empty());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Fixture::load(Path::new("/nonexistent/fixture.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/fixture.json"));
    }
}
