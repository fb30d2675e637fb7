use actix_web::{HttpResponse, Responder, web};
use std::sync::Arc;
use tracing::trace;

use super::helpers::error_response;
use super::types::{LookupResponse, TrackSearchRequest};
use crate::services::SearchTracker;

pub struct SearchService;

impl SearchService {
    /// `POST /api/track-search` (alias `/api/search-result`)
    pub async fn track_search(
        tracker: web::Data<Arc<SearchTracker>>,
        body: web::Json<TrackSearchRequest>,
    ) -> impl Responder {
        trace!("Track search request");

        match tracker.track_and_lookup(body.mobile_number()).await {
            Ok(outcome) => HttpResponse::Ok().json(LookupResponse {
                success: true,
                data: outcome.result,
                whatsapp_link: outcome.contact_link,
            }),
            Err(e) => error_response(&e),
        }
    }
}
