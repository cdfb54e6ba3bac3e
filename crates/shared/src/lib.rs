//! # Tasuki 共有ユーティリティ
//!
//! このクレートは、Tasuki プロジェクト全体で使用される
//! 共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - サービスクレート（todo-service）のレスポンス型と
//!   トレーシング初期化を集約する
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - 外部クレートへの依存は最小限に抑える

pub mod error_response;
pub mod health;
pub mod observability;

pub use error_response::ErrorResponse;
pub use health::HealthResponse;
