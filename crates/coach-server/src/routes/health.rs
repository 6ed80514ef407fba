/// GET /healthz: liveness probe. Not signature-checked.
pub async fn healthz() -> &'static str {
    "ok"
}
