use crate::{
    database::MongoDB,
    models::{CreateTemplateRequest, SharedTemplate},
    utils::error::ServiceError,
};
use mongodb::bson::doc;

const COLLECTION: &str = "sharedTemplates";

/// Lista os templates públicos. A visibilidade é a única restrição:
/// não há filtro por dono.
pub async fn list_public_templates(db: &MongoDB) -> Result<Vec<SharedTemplate>, ServiceError> {
    let collection = db.collection::<SharedTemplate>(COLLECTION);

    let mut cursor = collection
        .find(doc! { "is_public": true })
        .await
        .map_err(|e| ServiceError::Database(format!("Failed to fetch templates: {}", e)))?;

    use futures::stream::StreamExt;
    let mut templates = Vec::new();
    while let Some(result) = cursor.next().await {
        match result {
            Ok(template) => templates.push(template),
            Err(e) => {
                return Err(ServiceError::Database(format!("Failed to read template: {}", e)))
            }
        }
    }

    Ok(templates)
}

pub async fn create_template(
    db: &MongoDB,
    creator_id: &str,
    request: &CreateTemplateRequest,
) -> Result<SharedTemplate, ServiceError> {
    let collection = db.collection::<SharedTemplate>(COLLECTION);
    let now = chrono::Utc::now().timestamp_millis();

    let mut template = SharedTemplate {
        id: None,
        creator_id: creator_id.to_string(),
        title: request.title.clone(),
        description: request.description.clone(),
        tasks: request.tasks.clone(),
        is_public: request.is_public,
        download_count: 0,
        created_at: now,
    };

    let result = collection
        .insert_one(&template)
        .await
        .map_err(|e| ServiceError::Database(format!("Failed to create template: {}", e)))?;

    template.id = result.inserted_id.as_object_id();

    Ok(template)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_db() -> MongoDB {
        dotenv::dotenv().ok();
        let uri = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017/taskmanager_test".to_string());
        MongoDB::new(&uri).await.expect("MongoDB must be running for ignored tests")
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn only_public_templates_are_listed() {
        let db = test_db().await;
        let creator = mongodb::bson::oid::ObjectId::new().to_hex();

        let public: CreateTemplateRequest = serde_json::from_value(serde_json::json!({
            "title": "Sprint checklist",
            "tasks": [{ "title": "Stand-up" }],
            "isPublic": true
        }))
        .unwrap();
        let private: CreateTemplateRequest = serde_json::from_value(serde_json::json!({
            "title": "Personal routine"
        }))
        .unwrap();

        let public = create_template(&db, &creator, &public).await.unwrap();
        let private = create_template(&db, &creator, &private).await.unwrap();
        assert_eq!(public.download_count, 0);
        assert!(public.created_at > 0);

        let listed = list_public_templates(&db).await.unwrap();
        assert!(listed.iter().any(|t| t.id == public.id));
        assert!(!listed.iter().any(|t| t.id == private.id));

        db.collection::<SharedTemplate>(COLLECTION)
            .delete_many(doc! { "creator_id": &creator })
            .await
            .unwrap();
    }
}
