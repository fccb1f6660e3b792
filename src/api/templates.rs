use actix_web::{get, post, web, HttpResponse, Responder};

use crate::database::MongoDB;
use crate::models::{CreateTemplateRequest, SharedTemplateResponse};
use crate::services::identity_service::Claims;
use crate::services::template_service;

/// GET /api/templates - Lista os templates públicos da comunidade
#[utoipa::path(
    context_path = "/api/templates",
    tag = "Templates",
    responses(
        (status = 200, description = "Public task templates", body = Vec<SharedTemplateResponse>),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
#[get("")]
pub async fn get_templates(_user: web::ReqData<Claims>, db: web::Data<MongoDB>) -> impl Responder {
    match template_service::list_public_templates(&db).await {
        Ok(templates) => {
            let templates: Vec<SharedTemplateResponse> = templates
                .into_iter()
                .map(SharedTemplateResponse::from)
                .collect();
            HttpResponse::Ok().json(templates)
        }
        Err(e) => e.to_response(),
    }
}

/// POST /api/templates - Publica um template de tarefas
#[utoipa::path(
    context_path = "/api/templates",
    tag = "Templates",
    request_body = CreateTemplateRequest,
    responses(
        (status = 201, description = "Template created", body = SharedTemplateResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
#[post("")]
pub async fn create_template(
    user: web::ReqData<Claims>,
    body: web::Json<CreateTemplateRequest>,
    db: web::Data<MongoDB>,
) -> impl Responder {
    let creator_id = &user.sub;

    match template_service::create_template(&db, creator_id, &body).await {
        Ok(template) => HttpResponse::Created().json(SharedTemplateResponse::from(template)),
        Err(e) => e.to_response(),
    }
}
