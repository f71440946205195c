//! # TaskFlow ドメイン層
//!
//! タスクエンティティと値オブジェクト、ドメインエラーを定義する。
//!
//! ## 設計方針
//!
//! - **Newtype パターン**: ID や検証済み文字列を型で区別し、取り違えを防ぐ
//! - **生成時バリデーション**: 値オブジェクトは `new()` でのみ作成でき、
//!   不正な値の存在をコンパイル時に排除する
//! - **インフラ非依存**: このクレートは HTTP にもデータベースにも依存しない

pub mod error;
pub mod task;

pub use error::DomainError;
