//! # リポジトリ実装
//!
//! ハンドラ層が利用するストレージゲートウェイのトレイトと、その具体実装を提供する。
//!
//! ## 設計方針
//!
//! - **依存性逆転**: ハンドラはトレイトにのみ依存し、起動時に実装を注入する
//! - **データベース抽象化**: sqlx を使用し、PostgreSQL 固有の処理をカプセル化
//! - **テスタビリティ**: トレイト経由でモック可能な設計

pub mod task_repository;

pub use task_repository::{PostgresTaskRepository, TaskRepository};
