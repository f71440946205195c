//! # タスク API ハンドラ
//!
//! タスクの CRUD エンドポイントを実装する。
//!
//! ## エンドポイント
//!
//! - `POST /tasks` - タスクを作成
//! - `GET /tasks` - タスク一覧を取得
//! - `GET /tasks/{id}` - タスクを取得
//! - `PUT /tasks/{id}` - タスクを更新（マージ・オン・ミッシング）
//! - `DELETE /tasks/{id}` - タスクを削除
//!
//! リクエストボディはフォームエンコード、レスポンスは JSON。
//! ID 付きエンドポイントはストレージ操作の前に ID 形式を検証する。

use std::sync::Arc;

use axum::{
   Form,
   Json,
   extract::{Path, State},
   http::StatusCode,
   response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use taskflow_domain::task::{NewTask, Task, TaskDescription, TaskId, TaskPatch, TaskTitle};
use taskflow_infra::repository::TaskRepository;

use crate::error::ApiError;

/// タスク API の共有状態
///
/// リポジトリは起動時に一度だけ構築され、`Arc<dyn TaskRepository>` として
/// 注入される。テストではインメモリモックに差し替える。
pub struct TaskState {
   pub task_repository: Arc<dyn TaskRepository>,
}

// --- リクエスト/レスポンス型 ---

/// タスク作成フォーム
///
/// 欠落フィールドは空文字列になり、バリデーションでは
/// 「欠落」と「空」を区別しない。
#[derive(Debug, Deserialize)]
pub struct CreateTaskForm {
   #[serde(default)]
   pub title:       String,
   #[serde(default)]
   pub description: String,
   #[serde(rename = "dueDate", default)]
   pub due_date:    String,
}

/// タスク更新フォーム
///
/// すべて任意。欠落と空文字列は「現在値を維持」を意味する。
#[derive(Debug, Deserialize)]
pub struct UpdateTaskForm {
   pub title:       Option<String>,
   pub description: Option<String>,
   #[serde(rename = "dueDate")]
   pub due_date:    Option<String>,
   pub completed:   Option<String>,
}

impl UpdateTaskForm {
   /// `completed` 文字列をパースし、ドメインの更新ペイロードへ変換する
   ///
   /// 供給された `completed` が `true` / `false` として解釈できない場合は
   /// バリデーションエラー。空文字列は欠落と同様に「現在値を維持」。
   fn into_patch(self) -> Result<TaskPatch, ApiError> {
      let completed = match self.completed.as_deref() {
         Some("") | None => None,
         Some(value) => Some(value.parse::<bool>().map_err(|_| {
            ApiError::Validation("completed is not a valid boolean".to_string())
         })?),
      };

      Ok(TaskPatch {
         title: self.title,
         description: self.description,
         due_date: self.due_date,
         completed,
      })
   }
}

/// タスクレスポンス DTO
#[derive(Debug, Serialize)]
pub struct TaskDto {
   pub id:          String,
   pub completed:   bool,
   pub description: String,
   pub duedate:     String,
   pub title:       String,
}

impl From<&Task> for TaskDto {
   fn from(task: &Task) -> Self {
      Self {
         id:          task.id().to_string(),
         completed:   task.completed(),
         description: task.description().to_string(),
         duedate:     task.due_date().to_string(),
         title:       task.title().to_string(),
      }
   }
}

// --- ハンドラ ---

/// POST /tasks
///
/// タスクを作成する。
///
/// ## フォームフィールド
///
/// - `title`: 必須（欠落・空文字列は 400）
/// - `description`: 必須（欠落・空文字列は 400）
/// - `dueDate`: 任意（省略時は空文字列）
///
/// ## レスポンス
///
/// - `201 Created`: `"successful"` — 作成レコードと ID は返さない。
///   ID が必要なクライアントは一覧・取得で再取得する
/// - `400 Bad Request`: 必須フィールド欠落
/// - `500 Internal Server Error`: ストレージエラー
#[tracing::instrument(skip_all)]
pub async fn create_task(
   State(state): State<Arc<TaskState>>,
   Form(form): Form<CreateTaskForm>,
) -> Result<impl IntoResponse, ApiError> {
   let title = TaskTitle::new(form.title)?;
   let description = TaskDescription::new(form.description)?;

   let new_task = NewTask::new(title, description, form.due_date);
   state.task_repository.insert(&new_task).await?;

   Ok((StatusCode::CREATED, Json("successful")))
}

/// GET /tasks
///
/// すべてのタスクを取得する。
///
/// ページネーション・フィルタリングなし。並び順は保証しない。
#[tracing::instrument(skip_all)]
pub async fn list_tasks(State(state): State<Arc<TaskState>>) -> Result<impl IntoResponse, ApiError> {
   let tasks = state.task_repository.find_all().await?;

   let items: Vec<TaskDto> = tasks.iter().map(TaskDto::from).collect();

   Ok((StatusCode::OK, Json(items)))
}

/// GET /tasks/{id}
///
/// ID でタスクを取得する。
///
/// ## レスポンス
///
/// - `200 OK`: タスク
/// - `400 Bad Request`: ID の形式が不正（ストレージには触れない）
/// - `404 Not Found`: タスクが見つからない
#[tracing::instrument(skip_all, fields(%id))]
pub async fn get_task(
   State(state): State<Arc<TaskState>>,
   Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
   let id = TaskId::parse(&id)?;

   let task = state
      .task_repository
      .find_by_id(&id)
      .await?
      .ok_or_else(|| ApiError::NotFound("task not found".to_string()))?;

   Ok((StatusCode::OK, Json(TaskDto::from(&task))))
}

/// PUT /tasks/{id}
///
/// タスクを更新する（マージ・オン・ミッシング）。
///
/// ## フォームフィールド
///
/// - `completed`, `description`, `dueDate`, `title`: すべて任意。
///   非空の値が供給されたフィールドのみ置き換え、それ以外は現在値を維持する
///
/// ## アルゴリズム
///
/// 1. ID 形式を検証（不正なら 400、ストレージには触れない）
/// 2. `completed` を真偽値としてパース（不正なら 400）
/// 3. 現在のタスクを取得（存在しなければ 404）
/// 4. マージ済みの 4 フィールドを単一の置換更新として適用
///
/// read-modify-write はアトミックではなく、同一 ID への並行更新は
/// last-write-wins。
#[tracing::instrument(skip_all, fields(%id))]
pub async fn update_task(
   State(state): State<Arc<TaskState>>,
   Path(id): Path<String>,
   Form(form): Form<UpdateTaskForm>,
) -> Result<impl IntoResponse, ApiError> {
   let id = TaskId::parse(&id)?;
   let patch = form.into_patch()?;

   let task = state
      .task_repository
      .find_by_id(&id)
      .await?
      .ok_or_else(|| ApiError::NotFound("task not found".to_string()))?;

   let fields = task.merged_with(&patch);
   state.task_repository.update_by_id(&id, &fields).await?;

   Ok((StatusCode::OK, Json("update successful")))
}

/// DELETE /tasks/{id}
///
/// ID でタスクを削除する。
///
/// ## レスポンス
///
/// - `200 OK`: `"delete successful"`
/// - `400 Bad Request`: ID の形式が不正
/// - `404 Not Found`: 該当レコードが存在しない
///   （同じ ID への 2 回目の削除は 404 になる）
#[tracing::instrument(skip_all, fields(%id))]
pub async fn delete_task(
   State(state): State<Arc<TaskState>>,
   Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
   let id = TaskId::parse(&id)?;

   let deleted = state.task_repository.delete_by_id(&id).await?;
   if !deleted {
      return Err(ApiError::NotFound("task not found".to_string()));
   }

   Ok((StatusCode::OK, Json("delete successful")))
}
