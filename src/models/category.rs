use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Categoria de tarefas (armazenada no MongoDB)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// ID do usuário dono da categoria
    pub user_id: String,

    pub name: String,

    /// Cor exibida no app (string livre, ex: "#f59e0b")
    pub color: String,

    pub is_default: bool,
}

/// Request para criar categoria
#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    pub name: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub is_default: bool,
}

/// Response de categoria
#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub color: String,
    pub is_default: bool,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        CategoryResponse {
            id: category.id.map(|id| id.to_hex()).unwrap_or_default(),
            user_id: category.user_id,
            name: category.name,
            color: category.color,
            is_default: category.is_default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_default_defaults_to_false() {
        let request: CreateCategoryRequest = serde_json::from_value(serde_json::json!({
            "name": "Work",
            "color": "#3b82f6"
        }))
        .unwrap();

        assert!(!request.is_default);
    }

    #[test]
    fn response_uses_camel_case_field_names() {
        let category = Category {
            id: Some(ObjectId::new()),
            user_id: "uid-1".to_string(),
            name: "Work".to_string(),
            color: "#3b82f6".to_string(),
            is_default: true,
        };

        let json = serde_json::to_value(CategoryResponse::from(category)).unwrap();
        assert!(json.get("userId").is_some());
        assert!(json.get("isDefault").is_some());
        assert_eq!(json["isDefault"], true);
    }
}
