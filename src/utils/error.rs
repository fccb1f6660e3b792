use actix_web::HttpResponse;
use std::fmt;

/// Erros das operações de serviço, já classificados por status HTTP
#[derive(Debug)]
pub enum ServiceError {
    Database(String),
    NotFound(String),
    Forbidden(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Database(msg) => write!(f, "Database error: {}", msg),
            ServiceError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ServiceError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {}

impl ServiceError {
    /// Converte o erro no corpo de resposta plano `{"error": <mensagem>}`.
    /// Erros de banco nunca vazam detalhe para o cliente: logamos a causa
    /// e respondemos com a mensagem genérica.
    pub fn to_response(&self) -> HttpResponse {
        match self {
            ServiceError::NotFound(msg) => {
                HttpResponse::NotFound().json(serde_json::json!({ "error": msg }))
            }
            ServiceError::Forbidden(msg) => {
                HttpResponse::Forbidden().json(serde_json::json!({ "error": msg }))
            }
            ServiceError::Database(msg) => {
                log::error!("❌ Database error: {}", msg);
                HttpResponse::InternalServerError().json(serde_json::json!({ "error": "Server error" }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;

    #[test]
    fn display_includes_class_and_message() {
        let err = ServiceError::NotFound("Task not found".to_string());
        assert_eq!(err.to_string(), "Not found: Task not found");

        let err = ServiceError::Forbidden("nope".to_string());
        assert_eq!(err.to_string(), "Forbidden: nope");
    }

    #[actix_web::test]
    async fn not_found_maps_to_404_with_message() {
        let resp = ServiceError::NotFound("Task not found".to_string()).to_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Task not found");
    }

    #[actix_web::test]
    async fn forbidden_maps_to_403_with_message() {
        let resp =
            ServiceError::Forbidden("Unauthorized - Task does not belong to user".to_string())
                .to_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Unauthorized - Task does not belong to user");
    }

    #[actix_web::test]
    async fn database_error_is_masked_as_server_error() {
        let resp = ServiceError::Database("connection reset by peer".to_string()).to_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Server error");
    }
}
