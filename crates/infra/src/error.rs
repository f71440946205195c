//! # インフラ層エラー定義
//!
//! データベースとの通信で発生するエラーを表現する。
//!
//! ## 設計方針
//!
//! - **エラーの変換**: sqlx::Error を `#[from]` でラップし、リポジトリ実装は `?` で伝播する
//! - **ドメインエラーとの分離**: インフラ固有のエラーを明示
//! - **ログ可能性**: Debug によりログ出力時に詳細情報を表示

use thiserror::Error;

/// インフラ層で発生するエラー
///
/// API 層でこのエラーを受け取り、HTTP 500 に変換する。
/// リトライはどの層でも行わない。
#[derive(Debug, Error)]
pub enum InfraError {
   /// データベースエラー
   ///
   /// SQL クエリの実行失敗、接続エラー、制約違反など。
   #[error("データベースエラー: {0}")]
   Database(#[from] sqlx::Error),

   /// 予期しないエラー
   ///
   /// 上記に分類できない予期しないエラー。
   #[error("予期しないエラー: {0}")]
   Unexpected(String),
}

impl InfraError {
   /// 予期しないエラーを生成する
   pub fn unexpected(msg: impl Into<String>) -> Self {
      Self::Unexpected(msg.into())
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_from_sqlx_errorでdatabaseバリアントになる() {
      let err: InfraError = sqlx::Error::RowNotFound.into();

      assert!(matches!(err, InfraError::Database(_)));
   }

   #[test]
   fn test_displayがメッセージを出力する() {
      let err = InfraError::unexpected("接続失敗");

      assert_eq!(format!("{err}"), "予期しないエラー: 接続失敗");
   }

   #[test]
   fn test_sourceがsqlx_errorに委譲する() {
      use std::error::Error;

      let err: InfraError = sqlx::Error::RowNotFound.into();

      assert!(err.source().is_some());
   }
}
