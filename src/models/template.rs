use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Template de tarefas publicado para outros usuários (armazenado no MongoDB)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedTemplate {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// uid do usuário que publicou o template
    pub creator_id: String,

    pub title: String,

    pub description: String,

    /// Tarefas embutidas, guardadas exatamente como enviadas (snapshot,
    /// sem referência às tarefas originais)
    pub tasks: Vec<serde_json::Value>,

    pub is_public: bool,

    /// Contador reservado para downloads (sempre inicia em 0)
    pub download_count: i64,

    /// Timestamp de criação (epoch ms)
    pub created_at: i64,
}

/// Request para criar template
#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTemplateRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    #[schema(value_type = Vec<Object>)]
    pub tasks: Vec<serde_json::Value>,
    #[serde(default)]
    pub is_public: bool,
}

/// Response de template
#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SharedTemplateResponse {
    pub id: String,
    pub creator_id: String,
    pub title: String,
    pub description: String,
    #[schema(value_type = Vec<Object>)]
    pub tasks: Vec<serde_json::Value>,
    pub is_public: bool,
    pub download_count: i64,
    pub created_at: i64,
}

impl From<SharedTemplate> for SharedTemplateResponse {
    fn from(template: SharedTemplate) -> Self {
        SharedTemplateResponse {
            id: template.id.map(|id| id.to_hex()).unwrap_or_default(),
            creator_id: template.creator_id,
            title: template.title,
            description: template.description,
            tasks: template.tasks,
            is_public: template.is_public,
            download_count: template.download_count,
            created_at: template.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tasks_and_visibility_default_when_absent() {
        let request: CreateTemplateRequest =
            serde_json::from_value(serde_json::json!({ "title": "Morning routine" })).unwrap();

        assert_eq!(request.title, "Morning routine");
        assert!(request.tasks.is_empty());
        assert!(!request.is_public);
    }

    #[test]
    fn embedded_tasks_are_kept_verbatim() {
        let request: CreateTemplateRequest = serde_json::from_value(serde_json::json!({
            "title": "Sprint checklist",
            "tasks": [{ "title": "Stand-up", "priority": "High", "extraField": 42 }]
        }))
        .unwrap();

        assert_eq!(request.tasks.len(), 1);
        assert_eq!(request.tasks[0]["extraField"], 42);
    }

    #[test]
    fn response_uses_camel_case_field_names() {
        let template = SharedTemplate {
            id: Some(ObjectId::new()),
            creator_id: "uid-1".to_string(),
            title: "Sprint checklist".to_string(),
            description: "".to_string(),
            tasks: vec![],
            is_public: true,
            download_count: 0,
            created_at: 1,
        };

        let json = serde_json::to_value(SharedTemplateResponse::from(template)).unwrap();
        for key in ["id", "creatorId", "title", "tasks", "isPublic", "downloadCount", "createdAt"] {
            assert!(json.get(key).is_some(), "missing wire field: {}", key);
        }
        assert_eq!(json["downloadCount"], 0);
    }
}
