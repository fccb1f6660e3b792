use crate::utils::authz::OwnedResource;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Status de uma tarefa (conjunto fechado)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub enum TaskStatus {
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    Done,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "Not Started",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }
}

/// Tarefa (armazenada no MongoDB)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// ID do usuário dono da tarefa (uid do provedor de identidade)
    pub user_id: String,

    pub title: String,

    pub description: String,

    /// Data de vencimento (string opaca vinda do app, não é interpretada)
    pub due_date: String,

    pub priority: String,

    /// Categoria (referência livre, não validada contra a collection)
    pub category: String,

    pub status: TaskStatus,

    /// Timestamp de criação (epoch ms)
    pub creation_date: i64,

    /// Timestamp da última modificação (epoch ms)
    pub last_modified: i64,

    pub is_shared: bool,

    /// uids dos usuários com acesso compartilhado
    pub shared_with: Vec<String>,
}

impl OwnedResource for Task {
    fn owner_id(&self) -> &str {
        &self.user_id
    }
}

/// Request para criar tarefa
#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub category: String,
}

/// Request para atualizar tarefa. Somente estes campos podem ser
/// alterados pelo cliente; dono, datas e compartilhamento nunca.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub priority: Option<String>,
    pub category: Option<String>,
    pub status: Option<TaskStatus>,
}

/// Request para compartilhar tarefa
#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShareTaskRequest {
    pub share_with_emails: Vec<String>,
}

/// Response de tarefa
#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub priority: String,
    pub category: String,
    pub status: TaskStatus,
    pub creation_date: i64,
    pub last_modified: i64,
    pub is_shared: bool,
    pub shared_with: Vec<String>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        TaskResponse {
            id: task.id.map(|id| id.to_hex()).unwrap_or_default(),
            user_id: task.user_id,
            title: task.title,
            description: task.description,
            due_date: task.due_date,
            priority: task.priority,
            category: task.category,
            status: task.status,
            creation_date: task.creation_date,
            last_modified: task.last_modified,
            is_shared: task.is_shared,
            shared_with: task.shared_with,
        }
    }
}
