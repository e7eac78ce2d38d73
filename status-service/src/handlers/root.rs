use crate::dtos::RootResponse;
use crate::SERVICE_TITLE;
use axum::Json;

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: format!("{} v{}", SERVICE_TITLE, env!("CARGO_PKG_VERSION")),
    })
}
