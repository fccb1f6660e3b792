pub mod categories;
pub mod health;
pub mod swagger;
pub mod tasks;
pub mod templates;
pub mod users;

use actix_web::web;

use crate::middleware::AuthMiddleware;
use crate::services::identity_service::IdentityVerifier;

/// Monta todas as rotas da API. Usado pelo main e pelos testes de rota,
/// para que ambos sirvam exatamente a mesma árvore de endpoints.
pub fn configure(verifier: IdentityVerifier) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg
            // Health check
            .route("/health", web::get().to(health::health_check))
            // Users: profile registration (no JWT required)
            .service(web::scope("/api/users").service(users::register_user))
            // Tasks: personal task management
            .service(
                web::scope("/api/tasks")
                    .wrap(AuthMiddleware::new(verifier.clone()))
                    .service(tasks::get_tasks)
                    .service(tasks::create_task)
                    .service(tasks::update_task)
                    .service(tasks::delete_task)
                    .service(tasks::share_task),
            )
            // Categories: per-user task categories
            .service(
                web::scope("/api/categories")
                    .wrap(AuthMiddleware::new(verifier.clone()))
                    .service(categories::get_categories)
                    .service(categories::create_category),
            )
            // Templates: community task templates
            .service(
                web::scope("/api/templates")
                    .wrap(AuthMiddleware::new(verifier))
                    .service(templates::get_templates)
                    .service(templates::create_template),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::MongoDB;
    use crate::services::identity_service::{mint_token, IdentityVerifier};
    use actix_web::http::StatusCode;
    use actix_web::{test, App};

    const SECRET: &str = "route-test-secret";
    const ISSUER: &str = "task-service";
    const AUDIENCE: &str = "task-api";

    fn verifier() -> IdentityVerifier {
        IdentityVerifier::new(SECRET, ISSUER, AUDIENCE)
    }

    fn token_for(uid: &str, email: &str) -> String {
        mint_token(SECRET, ISSUER, AUDIENCE, uid, email, 3600)
    }

    #[actix_web::test]
    async fn protected_routes_reject_anonymous_requests() {
        let app =
            test::init_service(App::new().configure(configure(verifier()))).await;

        let attempts = vec![
            test::TestRequest::get().uri("/api/tasks"),
            test::TestRequest::post().uri("/api/tasks"),
            test::TestRequest::put().uri("/api/tasks/abc123"),
            test::TestRequest::delete().uri("/api/tasks/abc123"),
            test::TestRequest::post().uri("/api/tasks/abc123/share"),
            test::TestRequest::get().uri("/api/categories"),
            test::TestRequest::post().uri("/api/categories"),
            test::TestRequest::get().uri("/api/templates"),
            test::TestRequest::post().uri("/api/templates"),
        ];

        for attempt in attempts {
            let req = attempt.to_request();
            let path = req.path().to_string();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "route {}", path);

            let body: serde_json::Value = test::read_body_json(resp).await;
            assert_eq!(body["error"], "Unauthorized - No token provided", "route {}", path);
        }
    }

    #[actix_web::test]
    async fn health_does_not_require_a_token() {
        let app =
            test::init_service(App::new().configure(configure(verifier()))).await;

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    async fn test_db() -> MongoDB {
        dotenv::dotenv().ok();
        let uri = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017/taskmanager_test".to_string());
        MongoDB::new(&uri).await.expect("MongoDB must be running for ignored tests")
    }

    #[actix_web::test]
    #[ignore] // Requires MongoDB to be running
    async fn full_task_lifecycle_over_http() {
        use mongodb::bson::oid::ObjectId;

        let db = test_db().await;
        let app = test::init_service(
            App::new()
                .app_data(actix_web::web::Data::new(db.clone()))
                .configure(configure(verifier())),
        )
        .await;

        let uid_a = ObjectId::new().to_hex();
        let uid_b = ObjectId::new().to_hex();
        let email_a = format!("{}@example.com", uid_a);
        let email_b = format!("{}@example.com", uid_b);
        let token_a = token_for(&uid_a, &email_a);
        let token_b = token_for(&uid_b, &email_b);

        // Registra os dois perfis
        for (uid, email) in [(&uid_a, &email_a), (&uid_b, &email_b)] {
            let resp = test::call_service(
                &app,
                test::TestRequest::post()
                    .uri("/api/users")
                    .set_json(serde_json::json!({
                        "uid": uid,
                        "email": email,
                        "displayName": "Route Test"
                    }))
                    .to_request(),
            )
            .await;
            assert_eq!(resp.status(), StatusCode::CREATED);
        }

        // Lista começa vazia
        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/tasks")
                .insert_header(("Authorization", format!("Bearer {}", token_a)))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let tasks: Vec<serde_json::Value> = test::read_body_json(resp).await;
        assert!(tasks.is_empty());

        // Cria tarefa com defaults de servidor
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/tasks")
                .insert_header(("Authorization", format!("Bearer {}", token_a)))
                .set_json(serde_json::json!({ "title": "Plan sprint" }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(created["status"], "Not Started");
        assert_eq!(created["isShared"], false);
        let task_id = created["id"].as_str().unwrap().to_string();

        // Outro usuário não enxerga nem altera a tarefa
        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/tasks")
                .insert_header(("Authorization", format!("Bearer {}", token_b)))
                .to_request(),
        )
        .await;
        let foreign_tasks: Vec<serde_json::Value> = test::read_body_json(resp).await;
        assert!(foreign_tasks.is_empty());

        let resp = test::call_service(
            &app,
            test::TestRequest::put()
                .uri(&format!("/api/tasks/{}", task_id))
                .insert_header(("Authorization", format!("Bearer {}", token_b)))
                .set_json(serde_json::json!({ "title": "Hijacked" }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Unauthorized - Task does not belong to user");

        // Dono atualiza o status
        let resp = test::call_service(
            &app,
            test::TestRequest::put()
                .uri(&format!("/api/tasks/{}", task_id))
                .insert_header(("Authorization", format!("Bearer {}", token_a)))
                .set_json(serde_json::json!({ "status": "Done" }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Task updated successfully");

        // Compartilha com um email cadastrado e um fantasma
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri(&format!("/api/tasks/{}/share", task_id))
                .insert_header(("Authorization", format!("Bearer {}", token_a)))
                .set_json(serde_json::json!({
                    "shareWithEmails": [email_b, "ghost@example.com"]
                }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/tasks")
                .insert_header(("Authorization", format!("Bearer {}", token_a)))
                .to_request(),
        )
        .await;
        let tasks: Vec<serde_json::Value> = test::read_body_json(resp).await;
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0]["status"], "Done");
        assert_eq!(tasks[0]["isShared"], true);
        let shared_with: Vec<String> = tasks[0]["sharedWith"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap().to_string())
            .collect();
        assert_eq!(shared_with, vec![uid_b.clone()]);

        // Categorias são isoladas por usuário
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/categories")
                .insert_header(("Authorization", format!("Bearer {}", token_a)))
                .set_json(serde_json::json!({ "name": "Work", "color": "#ff0000" }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/categories")
                .insert_header(("Authorization", format!("Bearer {}", token_b)))
                .to_request(),
        )
        .await;
        let foreign_categories: Vec<serde_json::Value> = test::read_body_json(resp).await;
        assert!(foreign_categories.is_empty());

        // Só templates públicos aparecem na listagem
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/templates")
                .insert_header(("Authorization", format!("Bearer {}", token_a)))
                .set_json(serde_json::json!({
                    "title": "Weekly review",
                    "tasks": [{ "title": "Inbox zero" }],
                    "isPublic": true
                }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let template: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(template["title"], "Weekly review");
        assert_eq!(template["downloadCount"], 0);

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/templates")
                .insert_header(("Authorization", format!("Bearer {}", token_b)))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let templates: Vec<serde_json::Value> = test::read_body_json(resp).await;
        assert!(templates
            .iter()
            .any(|t| t["creatorId"] == serde_json::json!(uid_a)));

        // Exclui e confirma o 404 subsequente
        let resp = test::call_service(
            &app,
            test::TestRequest::delete()
                .uri(&format!("/api/tasks/{}", task_id))
                .insert_header(("Authorization", format!("Bearer {}", token_a)))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = test::call_service(
            &app,
            test::TestRequest::delete()
                .uri(&format!("/api/tasks/{}", task_id))
                .insert_header(("Authorization", format!("Bearer {}", token_a)))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Task not found");
    }
}
