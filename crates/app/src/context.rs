//! App Context

use std::sync::Arc;

use jiff::tz::TimeZone;
use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::{
        assignments::{AssignmentsService, PgAssignmentsService},
        credits::{CreditsService, PgCreditsService},
        feedback::{FeedbackService, PgFeedbackService},
        payments::{PaymentsService, PgPaymentsService},
        performance::{PerformanceService, PgPerformanceService},
        suspension::{PgSuspensionService, SuspensionService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub payments: Arc<dyn PaymentsService>,
    pub suspension: Arc<dyn SuspensionService>,
    pub credits: Arc<dyn CreditsService>,
    pub assignments: Arc<dyn AssignmentsService>,
    pub feedback: Arc<dyn FeedbackService>,
    pub performance: Arc<dyn PerformanceService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// `time_zone` decides where calendar days start and end when
    /// evaluating suspension.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(url: &str, time_zone: TimeZone) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        Ok(Self::from_db(&Db::new(pool), time_zone))
    }

    #[must_use]
    pub fn from_db(db: &Db, time_zone: TimeZone) -> Self {
        Self {
            payments: Arc::new(PgPaymentsService::new(db.clone())),
            suspension: Arc::new(PgSuspensionService::new(db.clone(), time_zone)),
            credits: Arc::new(PgCreditsService::new(db.clone())),
            assignments: Arc::new(PgAssignmentsService::new(db.clone())),
            feedback: Arc::new(PgFeedbackService::new(db.clone())),
            performance: Arc::new(PgPerformanceService::new(db.clone())),
        }
    }
}
