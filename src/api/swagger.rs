use utoipa::OpenApi;
use utoipa::openapi::security::{SecurityScheme, HttpAuthScheme, HttpBuilder};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Task Service API",
        version = "1.0.0",
        description = "Complete API documentation for Task Service. \n\n**Authentication:** All task, category and template endpoints require a JWT Bearer token.\n\n**Features:**\n- Personal task management with status, priority and categories\n- Task sharing with other users by email\n- Per-user categories\n- Public community task templates\n- Health monitoring",
        contact(
            name = "Task Service Team",
            email = "support@task-service.com"
        )
    ),
    paths(
        // Users
        crate::api::users::register_user,

        // Tasks
        crate::api::tasks::get_tasks,
        crate::api::tasks::create_task,
        crate::api::tasks::update_task,
        crate::api::tasks::delete_task,
        crate::api::tasks::share_task,

        // Categories
        crate::api::categories::get_categories,
        crate::api::categories::create_category,

        // Templates
        crate::api::templates::get_templates,
        crate::api::templates::create_template,

        // Health
        crate::api::health::health_check,
    ),
    components(
        schemas(
            // Users
            crate::models::RegisterUserRequest,

            // Tasks
            crate::models::TaskStatus,
            crate::models::CreateTaskRequest,
            crate::models::UpdateTaskRequest,
            crate::models::ShareTaskRequest,
            crate::models::TaskResponse,

            // Categories
            crate::models::CreateCategoryRequest,
            crate::models::CategoryResponse,

            // Templates
            crate::models::CreateTemplateRequest,
            crate::models::SharedTemplateResponse,

            // Health
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Users", description = "User profile registration. Called after sign-in to keep the profile in sync."),
        (name = "Tasks", description = "Personal task management endpoints. Create, list, update, delete and share tasks."),
        (name = "Categories", description = "Per-user task categories for organizing the task list."),
        (name = "Templates", description = "Community task templates. Publish task lists and browse public ones."),
        (name = "Health", description = "Health check endpoint for monitoring service status."),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build()
                ),
            );
        }
    }
}
