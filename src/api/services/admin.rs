use actix_web::{HttpResponse, Responder, web};
use std::sync::Arc;

use super::helpers::error_response;
use super::types::{AdminQuery, SearchesResponse};
use crate::services::AdminReporter;

pub struct AdminService;

impl AdminService {
    /// `GET /api/admin/searches?secret=...`
    pub async fn list_searches(
        reporter: web::Data<Arc<AdminReporter>>,
        query: web::Query<AdminQuery>,
    ) -> impl Responder {
        match reporter.list_searches(query.secret.as_deref()).await {
            Ok(report) => HttpResponse::Ok().json(SearchesResponse {
                success: true,
                data: report.records,
                total: report.total,
            }),
            Err(e) => error_response(&e),
        }
    }
}
