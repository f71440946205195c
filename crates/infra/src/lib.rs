//! # TaskFlow インフラ層
//!
//! ストレージゲートウェイの実装を提供する。
//!
//! ## 設計方針
//!
//! - **依存性逆転**: ハンドラ層はここで定義されたトレイト（[`repository::TaskRepository`]）
//!   にのみ依存し、具体実装は起動時に注入される
//! - **テスタビリティ**: `test-utils` feature でインメモリモックを公開する

pub mod db;
pub mod error;
pub mod repository;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use error::InfraError;
