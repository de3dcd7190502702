use crate::{
    api::{assistant, attendance, dashboard, leave, performance, report, task},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor,
    governor::middleware::NoOpMiddleware,
};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    // Helper to build per-route limiter
    fn build_limiter(requests_per_min: u32) -> GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware> {
        let per_ms = if requests_per_min == 0 {
            1
        } else {
            60_000 / requests_per_min as u64
        };
        GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap()
    }

    let api_limiter = build_limiter(config.rate_api_per_min);
    // The chat and analysis endpoints hold a timer for seconds per call, so
    // they get a tighter budget.
    let assistant_limiter = build_limiter(config.rate_chat_per_min);

    cfg.service(
        web::scope(&config.api_prefix)
            .service(
                web::scope("/assistant")
                    .wrap(Governor::new(&assistant_limiter))
                    .service(
                        web::resource("/chat")
                            .route(web::get().to(assistant::transcript))
                            .route(web::post().to(assistant::chat)),
                    )
                    .service(
                        web::resource("/capabilities").route(web::get().to(assistant::capabilities)),
                    )
                    .service(web::resource("/features").route(web::get().to(assistant::features)))
                    .service(
                        web::resource("/analysis").route(web::post().to(assistant::run_analysis)),
                    ),
            )
            .service(
                web::scope("/dashboard")
                    .wrap(Governor::new(&api_limiter))
                    .service(web::resource("/summary").route(web::get().to(dashboard::summary))),
            )
            .service(
                web::scope("/attendance")
                    .wrap(Governor::new(&api_limiter))
                    // /attendance
                    .service(
                        web::resource("")
                            .route(web::get().to(attendance::list))
                            .route(web::post().to(attendance::check_in))
                            .route(web::put().to(attendance::check_out)),
                    )
                    // /attendance/summary
                    .service(web::resource("/summary").route(web::get().to(attendance::summary))),
            )
            .service(
                web::scope("/leave")
                    .wrap(Governor::new(&api_limiter))
                    // /leave
                    .service(
                        web::resource("")
                            .route(web::get().to(leave::list))
                            .route(web::post().to(leave::create)),
                    )
                    .service(web::resource("/summary").route(web::get().to(leave::summary)))
                    .service(web::resource("/balance").route(web::get().to(leave::balance)))
                    // /leave/{id}
                    .service(web::resource("/{id}").route(web::delete().to(leave::cancel)))
                    // /leave/{id}/approve
                    .service(web::resource("/{id}/approve").route(web::put().to(leave::approve)))
                    // /leave/{id}/reject
                    .service(web::resource("/{id}/reject").route(web::put().to(leave::reject))),
            )
            .service(
                web::scope("/task")
                    .wrap(Governor::new(&api_limiter))
                    .service(web::resource("").route(web::get().to(task::list)))
                    .service(web::resource("/summary").route(web::get().to(task::summary))),
            )
            .service(
                web::scope("/performance")
                    .wrap(Governor::new(&api_limiter))
                    .service(web::resource("/metrics").route(web::get().to(performance::list_metrics)))
                    .service(web::resource("/goals").route(web::get().to(performance::list_goals)))
                    .service(
                        web::resource("/reviews").route(web::get().to(performance::list_reviews)),
                    )
                    .service(web::resource("/summary").route(web::get().to(performance::summary))),
            )
            .service(
                web::scope("/report")
                    .wrap(Governor::new(&api_limiter))
                    .service(web::resource("/monthly").route(web::get().to(report::monthly)))
                    .service(web::resource("/weekly").route(web::get().to(report::weekly)))
                    .service(web::resource("/categories").route(web::get().to(report::categories)))
                    .service(web::resource("/summary").route(web::get().to(report::summary))),
            ),
    );
}
