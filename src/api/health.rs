#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service banner", body = String, content_type = "text/plain")
    )
)]
pub async fn home() -> &'static str {
    "Hajj & Umrah Chatbot API is running. Use POST /chat endpoint to interact."
}
