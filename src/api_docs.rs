use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(api::health::home, api::chat::chat),
    components(schemas(
        api::chat::ChatRequest,
        api::chat::ChatResponse,
        api::chat::ChatStatus,
    )),
    tags(
        (name = "manasik", description = "Hajj & Umrah Chatbot API")
    )
)]
pub struct ApiDoc;
