use actix_web::{delete, get, post, put, web, HttpResponse, Responder};

use crate::database::MongoDB;
use crate::models::{CreateTaskRequest, ShareTaskRequest, TaskResponse, UpdateTaskRequest};
use crate::services::identity_service::Claims;
use crate::services::task_service;

/// GET /api/tasks - Lista todas as tarefas do usuário autenticado
#[utoipa::path(
    context_path = "/api/tasks",
    tag = "Tasks",
    responses(
        (status = 200, description = "Tasks owned by the authenticated user", body = Vec<TaskResponse>),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
#[get("")]
pub async fn get_tasks(user: web::ReqData<Claims>, db: web::Data<MongoDB>) -> impl Responder {
    let user_id = &user.sub;

    match task_service::list_tasks(&db, user_id).await {
        Ok(tasks) => {
            let tasks: Vec<TaskResponse> = tasks.into_iter().map(TaskResponse::from).collect();
            HttpResponse::Ok().json(tasks)
        }
        Err(e) => e.to_response(),
    }
}

/// POST /api/tasks - Cria tarefa para o usuário autenticado
#[utoipa::path(
    context_path = "/api/tasks",
    tag = "Tasks",
    request_body = CreateTaskRequest,
    responses(
        (status = 201, description = "Task created", body = TaskResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
#[post("")]
pub async fn create_task(
    user: web::ReqData<Claims>,
    body: web::Json<CreateTaskRequest>,
    db: web::Data<MongoDB>,
) -> impl Responder {
    let user_id = &user.sub;

    match task_service::create_task(&db, user_id, &body).await {
        Ok(task) => HttpResponse::Created().json(TaskResponse::from(task)),
        Err(e) => e.to_response(),
    }
}

/// PUT /api/tasks/{id} - Atualiza campos editáveis da tarefa
#[utoipa::path(
    context_path = "/api/tasks",
    tag = "Tasks",
    request_body = UpdateTaskRequest,
    params(
        ("id" = String, Path, description = "Task id")
    ),
    responses(
        (status = 200, description = "Task updated"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Task belongs to another user"),
        (status = 404, description = "Task not found"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
#[put("/{id}")]
pub async fn update_task(
    user: web::ReqData<Claims>,
    path: web::Path<String>,
    body: web::Json<UpdateTaskRequest>,
    db: web::Data<MongoDB>,
) -> impl Responder {
    let user_id = &user.sub;
    let task_id = path.into_inner();

    match task_service::update_task(&db, &task_id, user_id, &body).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Task updated successfully"
        })),
        Err(e) => e.to_response(),
    }
}

/// DELETE /api/tasks/{id} - Remove a tarefa do usuário
#[utoipa::path(
    context_path = "/api/tasks",
    tag = "Tasks",
    params(
        ("id" = String, Path, description = "Task id")
    ),
    responses(
        (status = 200, description = "Task deleted"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Task belongs to another user"),
        (status = 404, description = "Task not found"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
#[delete("/{id}")]
pub async fn delete_task(
    user: web::ReqData<Claims>,
    path: web::Path<String>,
    db: web::Data<MongoDB>,
) -> impl Responder {
    let user_id = &user.sub;
    let task_id = path.into_inner();

    match task_service::delete_task(&db, &task_id, user_id).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Task deleted successfully"
        })),
        Err(e) => e.to_response(),
    }
}

/// POST /api/tasks/{id}/share - Compartilha a tarefa com outros usuários por email
#[utoipa::path(
    context_path = "/api/tasks",
    tag = "Tasks",
    request_body = ShareTaskRequest,
    params(
        ("id" = String, Path, description = "Task id")
    ),
    responses(
        (status = 200, description = "Task marked as shared"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Task belongs to another user"),
        (status = 404, description = "Task not found"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
#[post("/{id}/share")]
pub async fn share_task(
    user: web::ReqData<Claims>,
    path: web::Path<String>,
    body: web::Json<ShareTaskRequest>,
    db: web::Data<MongoDB>,
) -> impl Responder {
    let user_id = &user.sub;
    let task_id = path.into_inner();

    match task_service::share_task(&db, &task_id, user_id, &body.share_with_emails).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Task shared successfully"
        })),
        Err(e) => e.to_response(),
    }
}
