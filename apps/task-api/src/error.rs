//! # Task API エラー定義
//!
//! API 層のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 必須フィールド欠落、不正な ID 形式、不正な真偽値 |
//! | `NotFound` | 404 Not Found | 形式は正しいが該当レコードが存在しない ID |
//! | `Storage` | 500 Internal Server Error | ゲートウェイの失敗（接続エラー含む） |
//!
//! すべてのエラーはハンドラ境界で処理され、HTTP レスポンスの先へは伝播しない。

use axum::{
   Json,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use taskflow_domain::DomainError;
use taskflow_infra::InfraError;
use taskflow_shared::ErrorResponse;
use thiserror::Error;

/// Task API で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
   /// クライアント入力の検証失敗
   ///
   /// メッセージはそのままレスポンスの `detail` に載る。
   #[error("{0}")]
   Validation(String),

   /// リソースが見つからない
   #[error("{0}")]
   NotFound(String),

   /// ストレージエラー
   #[error("ストレージエラー: {0}")]
   Storage(#[from] InfraError),
}

impl From<DomainError> for ApiError {
   fn from(e: DomainError) -> Self {
      match e {
         DomainError::Validation(msg) => Self::Validation(msg),
      }
   }
}

impl IntoResponse for ApiError {
   fn into_response(self) -> Response {
      let (status, body) = match &self {
         ApiError::Validation(msg) => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::validation_error(msg.clone()),
         ),
         ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::not_found(msg.clone())),
         ApiError::Storage(e) => {
            // 詳細はログのみに残し、レスポンスには内部情報を漏らさない
            tracing::error!("ストレージエラー: {}", e);
            (
               StatusCode::INTERNAL_SERVER_ERROR,
               ErrorResponse::internal_error(),
            )
         }
      };

      (status, Json(body)).into_response()
   }
}
