use axum::Json;

use crate::api::{ROUTES, types::SitemapResponse};

pub async fn sitemap() -> Json<SitemapResponse> {
    Json(SitemapResponse {
        endpoints: ROUTES.to_vec(),
    })
}
