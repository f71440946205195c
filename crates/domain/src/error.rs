//! # ドメイン層エラー定義
//!
//! 入力値がビジネスルールに違反した状態を表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 入力値の検証失敗 |

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// API 層でこのエラーを受け取り、適切な HTTP レスポンスに変換する。
/// メッセージ（`{0}`）はそのままレスポンスの `detail` に載るため、
/// プレフィックスを付けずクライアント向けの文言のみを保持する。
#[derive(Debug, Error)]
pub enum DomainError {
   /// バリデーションエラー
   ///
   /// 必須フィールドの欠落や不正なフォーマットなど、
   /// クライアント入力がルールに違反している場合に使用する。
   #[error("{0}")]
   Validation(String),
}

impl DomainError {
   /// バリデーションエラーを生成する
   pub fn validation(msg: impl Into<String>) -> Self {
      Self::Validation(msg.into())
   }
}
