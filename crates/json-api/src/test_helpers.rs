//! Test helpers.

use std::sync::Arc;

use jiff::tz::TimeZone;
use salvo::{affix_state::inject, prelude::*};

use academy_app::{
    context::AppContext,
    domain::{
        assignments::MockAssignmentsService, credits::MockCreditsService,
        feedback::MockFeedbackService, payments::MockPaymentsService,
        performance::MockPerformanceService, suspension::MockSuspensionService,
    },
};

use crate::state::State;

/// One mock per engine service. A mock without expectations fails the test
/// when called, so handlers may only touch the service they configure.
#[derive(Default)]
pub(crate) struct TestMocks {
    pub(crate) payments: MockPaymentsService,
    pub(crate) suspension: MockSuspensionService,
    pub(crate) credits: MockCreditsService,
    pub(crate) assignments: MockAssignmentsService,
    pub(crate) feedback: MockFeedbackService,
    pub(crate) performance: MockPerformanceService,
}

impl TestMocks {
    pub(crate) fn into_state(self) -> Arc<State> {
        let app = AppContext {
            payments: Arc::new(self.payments),
            suspension: Arc::new(self.suspension),
            credits: Arc::new(self.credits),
            assignments: Arc::new(self.assignments),
            feedback: Arc::new(self.feedback),
            performance: Arc::new(self.performance),
        };

        State::shared(app, TimeZone::UTC)
    }

    pub(crate) fn into_service(self, route: Router) -> Service {
        Service::new(Router::new().hoop(inject(self.into_state())).push(route))
    }
}
