//! # Task API サーバー
//!
//! タスク管理の CRUD エンドポイントと liveness probe を提供する HTTP サービス。
//!
//! ## 役割
//!
//! - **リクエスト検証**: 必須フィールドと ID 形式の検証
//! - **マージ・オン・ミッシング更新**: 省略フィールドは保存済みの値を維持
//! - **データ永続化**: ストレージゲートウェイ経由の単一レコード操作のみ
//!
//! キューイング・多段ワークフロー・派生計算は存在しない。
//! リクエスト横断の共有可変状態は永続化されたタスクコレクションのみ。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `TASK_API_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `TASK_API_PORT` | **Yes** | ポート番号 |
//! | `DATABASE_NAME` | **Yes** | データベース名 |
//! | `DATABASE_HOST` | **Yes** | データベースホスト |
//! | `DATABASE_USERNAME` | **Yes** | 接続ユーザー名 |
//! | `DATABASE_PASSWORD` | **Yes** | 接続パスワード |
//! | `LOG_FORMAT` | No | `json` / `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! cargo run -p taskflow-api
//!
//! # 本番環境
//! TASK_API_PORT=3000 DATABASE_NAME=tasks ... cargo run -p taskflow-api --release
//! ```

mod config;
mod error;
mod handler;

use std::{net::SocketAddr, sync::Arc};

use axum::{Router, routing::get};
use config::ApiConfig;
use handler::{
   TaskState,
   create_task,
   delete_task,
   get_task,
   health_check,
   list_tasks,
   update_task,
};
use taskflow_infra::{
   db,
   repository::{PostgresTaskRepository, TaskRepository},
};
use taskflow_shared::observability::{LogFormat, TracingConfig};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Task API サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   // トレーシング初期化（LOG_FORMAT で json / pretty を切り替え）
   let tracing_config = TracingConfig::from_env("task-api");
   let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
      .unwrap_or_else(|_| "info,taskflow=debug".into());
   match tracing_config.log_format {
      LogFormat::Json => {
         tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
      }
      LogFormat::Pretty => {
         tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
      }
   }

   // 設定読み込み
   let config = ApiConfig::from_env().expect("設定の読み込みに失敗しました");

   tracing::info!(
      "Task API サーバーを起動します: {}:{}",
      config.host,
      config.port
   );

   // データベース接続プールを作成
   let pool = db::create_pool(&config.database.connection_url())
      .await
      .expect("データベース接続に失敗しました");
   tracing::info!("データベースに接続しました");

   // 依存コンポーネントを初期化（リポジトリはここで一度だけ構築し注入する）
   let task_repository: Arc<dyn TaskRepository> = Arc::new(PostgresTaskRepository::new(pool));
   let task_state = Arc::new(TaskState { task_repository });

   // ルーター構築
   let app = Router::new()
      .route("/health", get(health_check))
      .route("/tasks", get(list_tasks).post(create_task))
      .route(
         "/tasks/{id}",
         get(get_task).put(update_task).delete(delete_task),
      )
      .with_state(task_state)
      .layer(TraceLayer::new_for_http());

   // サーバー起動
   let addr: SocketAddr = format!("{}:{}", config.host, config.port)
      .parse()
      .expect("アドレスのパースに失敗しました");

   let listener = TcpListener::bind(addr).await?;
   tracing::info!("Task API サーバーが起動しました: {}", addr);

   axum::serve(listener, app).await?;

   Ok(())
}
