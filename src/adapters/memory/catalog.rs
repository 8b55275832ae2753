//! In-memory plan catalog for tests and demos.

use async_trait::async_trait;

use crate::domain::catalog::PlanCatalog;
use crate::ports::{ApiError, PlanCatalogReader};

/// Serves a fixed catalog, or a configured failure.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    catalog: PlanCatalog,
    failure: Option<ApiError>,
}

impl InMemoryCatalog {
    /// Serves the given catalog.
    pub fn with_catalog(catalog: PlanCatalog) -> Self {
        Self {
            catalog,
            failure: None,
        }
    }

    /// Fails every read with the given error.
    pub fn failing(error: ApiError) -> Self {
        Self {
            catalog: PlanCatalog::default(),
            failure: Some(error),
        }
    }
}

#[async_trait]
impl PlanCatalogReader for InMemoryCatalog {
    async fn list_plans(&self) -> Result<PlanCatalog, ApiError> {
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(self.catalog.clone()),
        }
    }
}
