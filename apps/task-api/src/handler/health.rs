//! # ヘルスチェックハンドラ
//!
//! Task API の稼働状態を確認するためのエンドポイント。
//!
//! ## 用途
//!
//! - **ロードバランサー**: ターゲットグループヘルスチェック
//! - **コンテナオーケストレーター**: liveness probe
//!
//! ## エンドポイント
//!
//! ```text
//! GET /health
//! ```
//!
//! ストレージには一切触れないため、データベース障害時も 200 を返し続ける。

use axum::Json;

/// ヘルスチェックエンドポイント
///
/// 常に 200 と固定ボディ `"im alive"` を返す。
pub async fn health_check() -> Json<&'static str> {
   Json("im alive")
}
