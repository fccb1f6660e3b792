use crate::{
    database::MongoDB,
    models::{CreateTaskRequest, Task, TaskStatus, UpdateTaskRequest},
    services::user_service,
    utils::{authz::require_owner, error::ServiceError},
};
use mongodb::bson::{doc, oid::ObjectId, Document};

const COLLECTION: &str = "tasks";

/// Lista as tarefas do usuário (somente as que ele criou)
pub async fn list_tasks(db: &MongoDB, user_id: &str) -> Result<Vec<Task>, ServiceError> {
    let collection = db.collection::<Task>(COLLECTION);

    let mut cursor = collection
        .find(doc! { "user_id": user_id })
        .await
        .map_err(|e| ServiceError::Database(format!("Failed to fetch tasks: {}", e)))?;

    use futures::stream::StreamExt;
    let mut tasks = Vec::new();
    while let Some(result) = cursor.next().await {
        match result {
            Ok(task) => tasks.push(task),
            Err(e) => return Err(ServiceError::Database(format!("Failed to read task: {}", e))),
        }
    }

    Ok(tasks)
}

/// Cria tarefa com os defaults de servidor, ignorando qualquer tentativa
/// do cliente de definir status, datas ou compartilhamento
pub async fn create_task(
    db: &MongoDB,
    user_id: &str,
    request: &CreateTaskRequest,
) -> Result<Task, ServiceError> {
    let collection = db.collection::<Task>(COLLECTION);
    let now = chrono::Utc::now().timestamp_millis();

    let mut task = new_task(user_id, request, now);

    let result = collection
        .insert_one(&task)
        .await
        .map_err(|e| ServiceError::Database(format!("Failed to create task: {}", e)))?;

    task.id = result.inserted_id.as_object_id();

    Ok(task)
}

fn new_task(user_id: &str, request: &CreateTaskRequest, now: i64) -> Task {
    Task {
        id: None,
        user_id: user_id.to_string(),
        title: request.title.clone(),
        description: request.description.clone(),
        due_date: request.due_date.clone(),
        priority: request.priority.clone(),
        category: request.category.clone(),
        status: TaskStatus::NotStarted,
        creation_date: now,
        last_modified: now,
        is_shared: false,
        shared_with: Vec::new(),
    }
}

/// Busca a tarefa e garante que pertence ao usuário. Caminho único de
/// entrada para update, delete e share.
pub async fn fetch_owned(db: &MongoDB, task_id: &str, user_id: &str) -> Result<Task, ServiceError> {
    let collection = db.collection::<Task>(COLLECTION);

    // Id que não parseia não nomeia documento nenhum
    let object_id = ObjectId::parse_str(task_id)
        .map_err(|_| ServiceError::NotFound("Task not found".to_string()))?;

    let task = collection
        .find_one(doc! { "_id": object_id })
        .await
        .map_err(|e| ServiceError::Database(format!("Failed to fetch task: {}", e)))?;

    require_owner(task, user_id, "Task")
}

/// Aplica atualização parcial nos campos permitidos e carimba last_modified
pub async fn update_task(
    db: &MongoDB,
    task_id: &str,
    user_id: &str,
    request: &UpdateTaskRequest,
) -> Result<(), ServiceError> {
    let task = fetch_owned(db, task_id, user_id).await?;

    let collection = db.collection::<Task>(COLLECTION);
    let now = chrono::Utc::now().timestamp_millis();

    collection
        .update_one(doc! { "_id": task.id }, doc! { "$set": update_document(request, now) })
        .await
        .map_err(|e| ServiceError::Database(format!("Failed to update task: {}", e)))?;

    Ok(())
}

fn update_document(request: &UpdateTaskRequest, now: i64) -> Document {
    let mut update_doc = doc! { "last_modified": now };

    if let Some(title) = &request.title {
        update_doc.insert("title", title);
    }
    if let Some(description) = &request.description {
        update_doc.insert("description", description);
    }
    if let Some(due_date) = &request.due_date {
        update_doc.insert("due_date", due_date);
    }
    if let Some(priority) = &request.priority {
        update_doc.insert("priority", priority);
    }
    if let Some(category) = &request.category {
        update_doc.insert("category", category);
    }
    if let Some(status) = &request.status {
        update_doc.insert("status", status.as_str());
    }

    update_doc
}

pub async fn delete_task(db: &MongoDB, task_id: &str, user_id: &str) -> Result<(), ServiceError> {
    let task = fetch_owned(db, task_id, user_id).await?;

    let collection = db.collection::<Task>(COLLECTION);

    collection
        .delete_one(doc! { "_id": task.id })
        .await
        .map_err(|e| ServiceError::Database(format!("Failed to delete task: {}", e)))?;

    Ok(())
}

/// Compartilha a tarefa com as contas resolvidas a partir dos emails.
/// Emails sem conta são ignorados em silêncio; a tarefa é marcada como
/// compartilhada mesmo que nenhum email resolva.
pub async fn share_task(
    db: &MongoDB,
    task_id: &str,
    user_id: &str,
    emails: &[String],
) -> Result<(), ServiceError> {
    let task = fetch_owned(db, task_id, user_id).await?;

    let mut resolved = Vec::new();
    for email in emails {
        let user_ids = user_service::find_user_ids_by_email(db, email).await?;
        if user_ids.is_empty() {
            log::debug!("No account found for shared email {}", email);
        }
        resolved.extend(user_ids);
    }

    let collection = db.collection::<Task>(COLLECTION);
    let now = chrono::Utc::now().timestamp_millis();

    collection
        .update_one(doc! { "_id": task.id }, share_update(&resolved, now))
        .await
        .map_err(|e| ServiceError::Database(format!("Failed to share task: {}", e)))?;

    Ok(())
}

fn share_update(user_ids: &[String], now: i64) -> Document {
    if user_ids.is_empty() {
        doc! { "$set": { "is_shared": true, "last_modified": now } }
    } else {
        doc! {
            "$addToSet": { "shared_with": { "$each": user_ids.to_vec() } },
            "$set": { "is_shared": true, "last_modified": now },
        }
    }
}
