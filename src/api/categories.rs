use actix_web::{get, post, web, HttpResponse, Responder};

use crate::database::MongoDB;
use crate::models::{CategoryResponse, CreateCategoryRequest};
use crate::services::category_service;
use crate::services::identity_service::Claims;

/// GET /api/categories - Lista as categorias do usuário autenticado
#[utoipa::path(
    context_path = "/api/categories",
    tag = "Categories",
    responses(
        (status = 200, description = "Categories owned by the authenticated user", body = Vec<CategoryResponse>),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
#[get("")]
pub async fn get_categories(user: web::ReqData<Claims>, db: web::Data<MongoDB>) -> impl Responder {
    let user_id = &user.sub;

    match category_service::list_categories(&db, user_id).await {
        Ok(categories) => {
            let categories: Vec<CategoryResponse> =
                categories.into_iter().map(CategoryResponse::from).collect();
            HttpResponse::Ok().json(categories)
        }
        Err(e) => e.to_response(),
    }
}

/// POST /api/categories - Cria categoria para o usuário autenticado
#[utoipa::path(
    context_path = "/api/categories",
    tag = "Categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = CategoryResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
#[post("")]
pub async fn create_category(
    user: web::ReqData<Claims>,
    body: web::Json<CreateCategoryRequest>,
    db: web::Data<MongoDB>,
) -> impl Responder {
    let user_id = &user.sub;

    match category_service::create_category(&db, user_id, &body).await {
        Ok(category) => HttpResponse::Created().json(CategoryResponse::from(category)),
        Err(e) => e.to_response(),
    }
}
