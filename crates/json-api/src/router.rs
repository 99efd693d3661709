//! App Router

use salvo::Router;

use crate::{assignments, credits, feedback, payments, performance, suspension};

pub fn app_router() -> Router {
    Router::new()
        .push(
            Router::with_path("students/{student}")
                .push(Router::with_path("suspension").get(suspension::evaluate::handler))
                .push(
                    Router::with_path("credits")
                        .get(credits::show::handler)
                        .post(credits::apply::handler),
                )
                .push(Router::with_path("assignment-stats").get(assignments::stats::handler)),
        )
        .push(
            Router::with_path("tutors/{tutor}")
                .push(Router::with_path("pending-feedback").get(feedback::pending::handler))
                .push(Router::with_path("performance").get(performance::overall::handler)),
        )
        .push(Router::with_path("feedback").post(feedback::create::handler))
        .push(
            Router::with_path("courses/{course}/scores/{student}")
                .put(performance::submit::handler),
        )
        .push(Router::with_path("payments").post(payments::create::handler))
        .push(Router::with_path("academies/{academy}/revenue").get(payments::revenue::handler))
}
