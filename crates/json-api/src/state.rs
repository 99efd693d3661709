//! State

use std::sync::Arc;

use jiff::tz::TimeZone;

use academy_app::context::AppContext;

/// Shared handler state: the engine services plus the zone they count days in.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) time_zone: TimeZone,
}

impl State {
    #[must_use]
    pub(crate) fn shared(app: AppContext, time_zone: TimeZone) -> Arc<Self> {
        Arc::new(Self { app, time_zone })
    }

    /// IANA name of the reference zone, or its fixed offset when unnamed.
    pub(crate) fn time_zone_name(&self) -> String {
        self.time_zone.iana_name().map_or_else(
            || self.time_zone.to_offset(jiff::Timestamp::now()).to_string(),
            str::to_string,
        )
    }
}
