pub mod admin;
pub mod fallback;
pub mod health;
pub mod helpers;
pub mod search;
pub mod types;

use actix_web::web;

pub use admin::AdminService;
pub use fallback::not_found;
pub use health::{HealthService, health_routes};
pub use helpers::{error_response, json_config};
pub use search::SearchService;

/// Everything under `/api`.
pub fn api_routes() -> actix_web::Scope {
    web::scope("/api")
        .route("/track-search", web::post().to(SearchService::track_search))
        .route("/search-result", web::post().to(SearchService::track_search))
        .route("/admin/searches", web::get().to(AdminService::list_searches))
}
