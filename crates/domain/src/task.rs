//! # タスク
//!
//! タスクエンティティとそれに関連する値オブジェクトを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 要件 |
//! |---|------------|------|
//! | [`Task`] | タスク | 永続化された 1 件の ToDo レコード |
//! | [`NewTask`] | 作成ペイロード | title / description 必須、completed は常に false |
//! | [`TaskPatch`] | 更新ペイロード | 全フィールド任意、省略時は現在値を維持 |
//! | [`TaskFields`] | 書き込みフィールド | マージ済みの 4 フィールド（置換更新の単位） |
//!
//! ## 設計方針
//!
//! - **生成時バリデーション**: [`TaskTitle`] / [`TaskDescription`] は空文字列を拒否する。
//!   検証は作成時のみで、読み出しパス（[`Task::from_db`]）はストアを信頼して再検証しない
//! - **マージ・オン・ミッシング**: 更新で省略（または空文字列）のフィールドは
//!   保存済みの値を維持する（[`Task::merged_with`]）
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use taskflow_domain::task::{NewTask, TaskDescription, TaskTitle};
//!
//! let new_task = NewTask::new(
//!     TaskTitle::new("牛乳を買う")?,
//!     TaskDescription::new("低脂肪 2%")?,
//!     "2026-08-31",
//! );
//! assert!(!new_task.completed());
//! # Ok(())
//! # }
//! ```

use derive_more::Display;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::DomainError;

/// タスク ID（一意識別子）
///
/// UUID v7 を使用し、生成順にソート可能。
/// Newtype パターンで型安全性を確保。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct TaskId(Uuid);

impl TaskId {
   /// 新しいタスク ID を生成する
   pub fn new() -> Self {
      Self(Uuid::now_v7())
   }

   /// 既存の UUID からタスク ID を作成する
   pub fn from_uuid(uuid: Uuid) -> Self {
      Self(uuid)
   }

   /// 内部の UUID 参照を取得する
   pub fn as_uuid(&self) -> &Uuid {
      &self.0
   }

   /// 文字列からタスク ID をパースする
   ///
   /// パス・パラメータなど外部入力の検証に使用する。
   /// UUID として解釈できない文字列は `DomainError::Validation` を返し、
   /// ストレージ操作に到達する前に弾かれる。
   pub fn parse(value: &str) -> Result<Self, DomainError> {
      Uuid::parse_str(value)
         .map(Self)
         .map_err(|_| DomainError::validation("id is not in a valid format"))
   }
}

impl Default for TaskId {
   fn default() -> Self {
      Self::new()
   }
}

/// タスクタイトル（値オブジェクト）
///
/// 作成時に必須。空文字列を拒否する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskTitle(String);

impl TaskTitle {
   /// タスクタイトルを作成する
   ///
   /// フィールド欠落と空文字列はどちらも同じエラーになる
   /// （クライアントから見れば「値が無い」は一種類）。
   pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
      let value = value.into();
      if value.is_empty() {
         return Err(DomainError::validation("title missing"));
      }
      Ok(Self(value))
   }

   /// 文字列参照を取得する
   pub fn as_str(&self) -> &str {
      &self.0
   }

   /// 所有権を持つ文字列に変換する
   pub fn into_string(self) -> String {
      self.0
   }
}

/// タスク説明（値オブジェクト）
///
/// 作成時に必須。空文字列を拒否する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDescription(String);

impl TaskDescription {
   /// タスク説明を作成する
   pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
      let value = value.into();
      if value.is_empty() {
         return Err(DomainError::validation("description missing"));
      }
      Ok(Self(value))
   }

   /// 文字列参照を取得する
   pub fn as_str(&self) -> &str {
      &self.0
   }

   /// 所有権を持つ文字列に変換する
   pub fn into_string(self) -> String {
      self.0
   }
}

/// タスクエンティティ
///
/// ストレージから読み出された 1 件のタスク。
/// `id` は作成時にストレージ層が一度だけ割り当て、以後変更されない。
///
/// フィールドは検証済みとは限らない（ゲートウェイを直接呼べば空の title も
/// 永続化しうる）ため、読み出しパスはプレーンな `String` を保持する。
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
   id:          TaskId,
   title:       String,
   description: String,
   due_date:    String,
   completed:   bool,
}

impl Task {
   /// ストレージのレコードからタスクを復元する
   pub fn from_db(
      id: TaskId,
      title: String,
      description: String,
      due_date: String,
      completed: bool,
   ) -> Self {
      Self {
         id,
         title,
         description,
         due_date,
         completed,
      }
   }

   /// タスク ID を取得する
   pub fn id(&self) -> &TaskId {
      &self.id
   }

   /// タイトルを取得する
   pub fn title(&self) -> &str {
      &self.title
   }

   /// 説明を取得する
   pub fn description(&self) -> &str {
      &self.description
   }

   /// 期日文字列を取得する（フォーマットは検証しない）
   pub fn due_date(&self) -> &str {
      &self.due_date
   }

   /// 完了フラグを取得する
   pub fn completed(&self) -> bool {
      self.completed
   }

   /// 更新ペイロードを現在値にマージし、書き込みフィールドを生成する
   ///
   /// マージ・オン・ミッシング: テキストフィールドは非空の値が供給された
   /// 場合のみ置き換え、欠落と空文字列は現在値を維持する。
   /// `completed` は供給されたブール値が勝ち、欠落は現在値を維持する。
   ///
   /// 戻り値は 4 フィールドすべてを含み、単一の置換更新として
   /// ストレージに適用される（read-modify-write はアトミックではなく、
   /// 同一 ID への並行更新は last-write-wins）。
   pub fn merged_with(&self, patch: &TaskPatch) -> TaskFields {
      TaskFields {
         title:       merge_text(patch.title.as_deref(), &self.title),
         description: merge_text(patch.description.as_deref(), &self.description),
         due_date:    merge_text(patch.due_date.as_deref(), &self.due_date),
         completed:   patch.completed.unwrap_or(self.completed),
      }
   }
}

/// 非空の値が供給されたときだけ置き換える
fn merge_text(supplied: Option<&str>, current: &str) -> String {
   match supplied {
      Some(value) if !value.is_empty() => value.to_string(),
      _ => current.to_string(),
   }
}

/// 作成ペイロード
///
/// 検証済みの値オブジェクトからのみ構築できるため、
/// 挿入が空の title / description を運ぶことはない。
/// `completed` は常に `false` で永続化される。
/// ID はここでは持たない — 割り当てはストレージ層の責務。
#[derive(Debug, Clone)]
pub struct NewTask {
   title:       TaskTitle,
   description: TaskDescription,
   due_date:    String,
   completed:   bool,
}

impl NewTask {
   /// 新しい作成ペイロードを組み立てる
   ///
   /// `due_date` は任意入力のため検証しない（省略時は空文字列を渡す）。
   pub fn new(
      title: TaskTitle,
      description: TaskDescription,
      due_date: impl Into<String>,
   ) -> Self {
      Self {
         title,
         description,
         due_date: due_date.into(),
         completed: false,
      }
   }

   /// タイトルを取得する
   pub fn title(&self) -> &str {
      self.title.as_str()
   }

   /// 説明を取得する
   pub fn description(&self) -> &str {
      self.description.as_str()
   }

   /// 期日文字列を取得する
   pub fn due_date(&self) -> &str {
      &self.due_date
   }

   /// 完了フラグを取得する（作成時は常に `false`）
   pub fn completed(&self) -> bool {
      self.completed
   }
}

/// 更新ペイロード
///
/// すべてのフィールドが任意。`None` は「現在値を維持」を意味する。
/// テキストフィールドは `Some("")` も「維持」として扱われる
/// （[`Task::merged_with`] 参照）。
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
   pub title:       Option<String>,
   pub description: Option<String>,
   pub due_date:    Option<String>,
   pub completed:   Option<bool>,
}

/// マージ済みの書き込みフィールド
///
/// [`Task::merged_with`] の結果。ID を除く 4 フィールドを
/// 単一の置換更新としてストレージに適用する。
#[derive(Debug, Clone, PartialEq)]
pub struct TaskFields {
   pub title:       String,
   pub description: String,
   pub due_date:    String,
   pub completed:   bool,
}
