//! # TaskRepository
//!
//! タスクの永続化を担当するリポジトリ。
//!
//! ## テーブル定義
//!
//! ```sql
//! CREATE TABLE tasks (
//!     id          UUID PRIMARY KEY,
//!     title       TEXT NOT NULL,
//!     description TEXT NOT NULL,
//!     due_date    TEXT NOT NULL DEFAULT '',
//!     completed   BOOLEAN NOT NULL DEFAULT FALSE
//! );
//! ```
//!
//! ## 設計方針
//!
//! - **ID 割り当て**: 挿入時に UUID v7 を生成して返す。ハンドラ層は ID を発行しない
//! - **実行時検証クエリ**: `sqlx::query` / `query_as` を使用し、
//!   ビルドにデータベース接続を要求しない

use async_trait::async_trait;
use sqlx::PgPool;
use taskflow_domain::task::{NewTask, Task, TaskFields, TaskId};
use uuid::Uuid;

use crate::error::InfraError;

/// タスクリポジトリトレイト
///
/// タスクの永続化操作を定義する。
/// インフラ層で具体的な実装を提供し、ハンドラ層から利用する。
#[async_trait]
pub trait TaskRepository: Send + Sync {
   /// タスクを挿入し、割り当てた ID を返す
   ///
   /// # 戻り値
   ///
   /// - `Ok(id)`: 挿入に成功した場合（ID はストレージ層が割り当てる）
   /// - `Err(_)`: データベースエラー
   async fn insert(&self, new_task: &NewTask) -> Result<TaskId, InfraError>;

   /// すべてのタスクを取得する
   ///
   /// 並び順は保証しない（ストレージのネイティブ順）。
   /// ページネーション・フィルタリングは行わない。
   async fn find_all(&self) -> Result<Vec<Task>, InfraError>;

   /// ID でタスクを検索する
   ///
   /// # 戻り値
   ///
   /// - `Ok(Some(task))`: タスクが見つかった場合
   /// - `Ok(None)`: タスクが見つからない場合
   /// - `Err(_)`: データベースエラー
   async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, InfraError>;

   /// マージ済みの 4 フィールドを単一の置換更新として適用する
   async fn update_by_id(&self, id: &TaskId, fields: &TaskFields) -> Result<(), InfraError>;

   /// ID でタスクを削除する
   ///
   /// # 戻り値
   ///
   /// - `Ok(true)`: レコードを削除した場合
   /// - `Ok(false)`: 該当レコードが存在しなかった場合
   /// - `Err(_)`: データベースエラー
   async fn delete_by_id(&self, id: &TaskId) -> Result<bool, InfraError>;
}

/// PostgreSQL 実装の TaskRepository
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
   pool: PgPool,
}

impl PostgresTaskRepository {
   /// 新しいリポジトリインスタンスを作成
   pub fn new(pool: PgPool) -> Self {
      Self { pool }
   }
}

/// tasks テーブルの 1 行
#[derive(sqlx::FromRow)]
struct TaskRow {
   id:          Uuid,
   title:       String,
   description: String,
   due_date:    String,
   completed:   bool,
}

impl From<TaskRow> for Task {
   fn from(row: TaskRow) -> Self {
      Task::from_db(
         TaskId::from_uuid(row.id),
         row.title,
         row.description,
         row.due_date,
         row.completed,
      )
   }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
   async fn insert(&self, new_task: &NewTask) -> Result<TaskId, InfraError> {
      let id = TaskId::new();

      sqlx::query(
         r#"
            INSERT INTO tasks (id, title, description, due_date, completed)
            VALUES ($1, $2, $3, $4, $5)
            "#,
      )
      .bind(id.as_uuid())
      .bind(new_task.title())
      .bind(new_task.description())
      .bind(new_task.due_date())
      .bind(new_task.completed())
      .execute(&self.pool)
      .await?;

      Ok(id)
   }

   async fn find_all(&self) -> Result<Vec<Task>, InfraError> {
      let rows = sqlx::query_as::<_, TaskRow>(
         r#"
            SELECT id, title, description, due_date, completed
            FROM tasks
            "#,
      )
      .fetch_all(&self.pool)
      .await?;

      Ok(rows.into_iter().map(Task::from).collect())
   }

   async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, InfraError> {
      let row = sqlx::query_as::<_, TaskRow>(
         r#"
            SELECT id, title, description, due_date, completed
            FROM tasks
            WHERE id = $1
            "#,
      )
      .bind(id.as_uuid())
      .fetch_optional(&self.pool)
      .await?;

      Ok(row.map(Task::from))
   }

   async fn update_by_id(&self, id: &TaskId, fields: &TaskFields) -> Result<(), InfraError> {
      sqlx::query(
         r#"
            UPDATE tasks
            SET title = $2, description = $3, due_date = $4, completed = $5
            WHERE id = $1
            "#,
      )
      .bind(id.as_uuid())
      .bind(&fields.title)
      .bind(&fields.description)
      .bind(&fields.due_date)
      .bind(fields.completed)
      .execute(&self.pool)
      .await?;

      Ok(())
   }

   async fn delete_by_id(&self, id: &TaskId) -> Result<bool, InfraError> {
      let result = sqlx::query(
         r#"
            DELETE FROM tasks
            WHERE id = $1
            "#,
      )
      .bind(id.as_uuid())
      .execute(&self.pool)
      .await?;

      Ok(result.rows_affected() > 0)
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_トレイトはsendとsyncを実装している() {
      fn assert_send_sync<T: Send + Sync>() {}
      assert_send_sync::<PostgresTaskRepository>();
      assert_send_sync::<Box<dyn TaskRepository>>();
   }
}
