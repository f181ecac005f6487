/// Liveness probe, also served at `/`.
#[utoipa::path(
    get,
    path = "/status",
    tag = "Health",
    operation_id = "getStatus",
    summary = "Liveness check",
    responses((status = 200, description = "Service is up", body = String)),
)]
pub async fn status() -> &'static str {
    "SUCCESS"
}
