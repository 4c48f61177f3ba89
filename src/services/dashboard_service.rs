use crate::models::{DashboardStats, ServiceError, UpcomingFlight};
use crate::repositories::DashboardRepository;
use chrono::Utc;
use std::sync::Arc;

pub const UPCOMING_FLIGHTS_LIMIT: i64 = 10;

pub struct DashboardService {
    repository: Arc<dyn DashboardRepository>,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn DashboardRepository>) -> Self {
        Self { repository }
    }

    pub async fn stats(&self) -> Result<DashboardStats, ServiceError> {
        self.repository.stats().await
    }

    pub async fn upcoming_flights(
        &self,
        search: Option<&str>,
    ) -> Result<Vec<UpcomingFlight>, ServiceError> {
        let today = Utc::now().date_naive();
        let search = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        // Unicode-aware matching happens here; SQLite's lower() folds ASCII only
        let Some(needle) = search else {
            return self
                .repository
                .upcoming_flights(today, Some(UPCOMING_FLIGHTS_LIMIT))
                .await;
        };

        let flights = self.repository.upcoming_flights(today, None).await?;
        Ok(flights
            .into_iter()
            .filter(|flight| flight.matches(&needle))
            .take(UPCOMING_FLIGHTS_LIMIT as usize)
            .collect())
    }
}
