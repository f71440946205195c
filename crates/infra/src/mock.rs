//! # テスト用モックリポジトリ
//!
//! ハンドラテストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! taskflow-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use taskflow_domain::task::{NewTask, Task, TaskFields, TaskId};

use crate::{error::InfraError, repository::TaskRepository};

/// インメモリ実装の TaskRepository
///
/// `Vec<Task>` を `Arc<Mutex<_>>` で包み、クローン間で状態を共有する。
/// テストはクローンを 1 つ手元に残し、ハンドラ呼び出し後の状態を検査できる。
#[derive(Clone, Default)]
pub struct MockTaskRepository {
   tasks: Arc<Mutex<Vec<Task>>>,
}

impl MockTaskRepository {
   pub fn new() -> Self {
      Self {
         tasks: Arc::new(Mutex::new(Vec::new())),
      }
   }

   /// 事前状態としてタスクを追加する
   pub fn add_task(&self, task: Task) {
      self.tasks.lock().unwrap().push(task);
   }

   /// 現在保持しているタスクのスナップショットを取得する
   pub fn tasks(&self) -> Vec<Task> {
      self.tasks.lock().unwrap().clone()
   }
}

#[async_trait]
impl TaskRepository for MockTaskRepository {
   async fn insert(&self, new_task: &NewTask) -> Result<TaskId, InfraError> {
      let id = TaskId::new();
      self.tasks.lock().unwrap().push(Task::from_db(
         id.clone(),
         new_task.title().to_string(),
         new_task.description().to_string(),
         new_task.due_date().to_string(),
         new_task.completed(),
      ));
      Ok(id)
   }

   async fn find_all(&self) -> Result<Vec<Task>, InfraError> {
      Ok(self.tasks.lock().unwrap().clone())
   }

   async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, InfraError> {
      Ok(self
         .tasks
         .lock()
         .unwrap()
         .iter()
         .find(|t| t.id() == id)
         .cloned())
   }

   async fn update_by_id(&self, id: &TaskId, fields: &TaskFields) -> Result<(), InfraError> {
      let mut tasks = self.tasks.lock().unwrap();
      if let Some(pos) = tasks.iter().position(|t| t.id() == id) {
         tasks[pos] = Task::from_db(
            id.clone(),
            fields.title.clone(),
            fields.description.clone(),
            fields.due_date.clone(),
            fields.completed,
         );
      }
      Ok(())
   }

   async fn delete_by_id(&self, id: &TaskId) -> Result<bool, InfraError> {
      let mut tasks = self.tasks.lock().unwrap();
      let before = tasks.len();
      tasks.retain(|t| t.id() != id);
      Ok(tasks.len() < before)
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;
   use taskflow_domain::task::{TaskDescription, TaskTitle};

   use super::*;

   fn new_task(title: &str, description: &str) -> NewTask {
      NewTask::new(
         TaskTitle::new(title).unwrap(),
         TaskDescription::new(description).unwrap(),
         "",
      )
   }

   #[tokio::test]
   async fn test_insert_がidを割り当ててレコードを保持する() {
      let repo = MockTaskRepository::new();

      let id = repo.insert(&new_task("Buy milk", "2%")).await.unwrap();

      let tasks = repo.tasks();
      assert_eq!(tasks.len(), 1);
      assert_eq!(tasks[0].id(), &id);
      assert_eq!(tasks[0].title(), "Buy milk");
      assert!(!tasks[0].completed());
   }

   #[tokio::test]
   async fn test_delete_by_id_該当なしでfalseを返す() {
      let repo = MockTaskRepository::new();

      let deleted = repo.delete_by_id(&TaskId::new()).await.unwrap();

      assert!(!deleted);
   }

   #[tokio::test]
   async fn test_update_by_id_がフィールドを置換する() {
      let repo = MockTaskRepository::new();
      let id = repo.insert(&new_task("Buy milk", "2%")).await.unwrap();

      repo
         .update_by_id(
            &id,
            &TaskFields {
               title:       "Buy soy milk".to_string(),
               description: "2%".to_string(),
               due_date:    "2026-09-01".to_string(),
               completed:   true,
            },
         )
         .await
         .unwrap();

      let task = repo.find_by_id(&id).await.unwrap().unwrap();
      assert_eq!(task.title(), "Buy soy milk");
      assert_eq!(task.due_date(), "2026-09-01");
      assert!(task.completed());
   }
}
