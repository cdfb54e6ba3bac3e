//! # Todo Service サーバー
//!
//! Todo レコードの CRUD を提供する HTTP サービス。
//!
//! ## 役割
//!
//! - **リクエスト処理**: 入力検証と HTTP レスポンスへの変換
//! - **データ永続化**: PostgreSQL への Todo レコード保存
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `DATABASE_URL` | **Yes** | PostgreSQL 接続 URL |
//! | `HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `PORT` | No | ポート番号（デフォルト: `3000`） |
//! | `RUST_LOG` | No | ログフィルタ（デフォルト: `info,tasuki=debug`） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! cargo run -p tasuki-todo-service
//!
//! # 本番環境
//! DATABASE_URL=postgres://... cargo run -p tasuki-todo-service --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use axum::{Router, routing::get};
use tasuki_infra::{PostgresTodoRepository, db};
use tasuki_shared::observability::{TracingConfig, init_tracing};
use tasuki_todo_service::{
    config::AppConfig,
    handler::{
        ReadinessState, TodoState, create_todo, delete_todo, get_todo, health_check, list_todos,
        readiness_check, update_todo,
    },
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Todo Service サーバーのエントリーポイント
///
/// 設定読み込み・プール作成・スキーマ初期化のいずれかに失敗した場合は
/// プロセスを起動させない（フェイルファスト）。
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    init_tracing(TracingConfig::from_env("todo-service"));

    // 設定読み込み
    let config = AppConfig::from_env().expect("設定の読み込みに失敗しました");

    tracing::info!(
        "Todo Service サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    // データベース接続プールを作成
    let pool = db::create_pool(&config.database_url)
        .await
        .expect("データベース接続に失敗しました");
    tracing::info!("データベースに接続しました");

    // todos テーブルを初期化（存在しない場合のみ作成）
    db::init_schema(&pool)
        .await
        .expect("スキーマ初期化に失敗しました");

    // 依存コンポーネントを初期化
    let readiness_state = Arc::new(ReadinessState { pool: pool.clone() });
    let repository = PostgresTodoRepository::new(pool);
    let todo_state = Arc::new(TodoState { repository });

    // ルーター構築
    let app = Router::new()
        .route("/health", get(health_check))
        .route("/health/ready", get(readiness_check))
        .with_state(readiness_state)
        .route(
            "/todos/",
            get(list_todos::<PostgresTodoRepository>).post(create_todo::<PostgresTodoRepository>),
        )
        .route(
            "/todos/{id}",
            get(get_todo::<PostgresTodoRepository>)
                .put(update_todo::<PostgresTodoRepository>)
                .delete(delete_todo::<PostgresTodoRepository>),
        )
        .with_state(todo_state)
        .layer(TraceLayer::new_for_http());

    // サーバー起動
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("アドレスのパースに失敗しました");

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Todo Service サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
