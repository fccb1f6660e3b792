use actix_web::{post, web, HttpResponse, Responder};

use crate::database::MongoDB;
use crate::models::RegisterUserRequest;
use crate::services::user_service;

/// POST /api/users - Registra o perfil do usuário (upsert por uid)
#[utoipa::path(
    context_path = "/api/users",
    tag = "Users",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User profile created or refreshed"),
        (status = 500, description = "Internal server error")
    )
)]
#[post("")]
pub async fn register_user(
    db: web::Data<MongoDB>,
    body: web::Json<RegisterUserRequest>,
) -> impl Responder {
    match user_service::register_user(&db, &body).await {
        Ok(()) => HttpResponse::Created().json(serde_json::json!({
            "message": "User created successfully"
        })),
        Err(e) => e.to_response(),
    }
}
