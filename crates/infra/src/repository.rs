//! # リポジトリ実装
//!
//! ドメインエンティティの永続化インターフェースと具体実装を提供する。
//!
//! ## 設計方針
//!
//! - **依存性逆転**: トレイトで抽象化し、ハンドラはトレイト経由でアクセス
//! - **データベース抽象化**: sqlx を使用し、PostgreSQL 固有の処理をカプセル化
//! - **テスタビリティ**: トレイト経由でスタブ可能な設計

pub mod todo_repository;

pub use todo_repository::{PostgresTodoRepository, TodoRepository};
