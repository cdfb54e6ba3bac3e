//! # Tasuki ドメイン層
//!
//! Todo サービスの中核となるドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 一意の識別子を持つオブジェクト（[`todo::Todo`]）
//! - **値オブジェクト**: 文字数制限などの不変条件を構築時に検証する
//!   （[`todo::TodoTitle`], [`todo::TodoDescription`]）
//! - **ドメインエラー**: 不変条件違反を表現するエラー型（[`DomainError`]）
//!
//! ## 依存関係の方向
//!
//! ```text
//! todo-service → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB、外部サービス）には一切依存しない。
//!
//! ## 使用例
//!
//! ```rust
//! use tasuki_domain::todo::{NewTodo, TodoDescription, TodoTitle};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let new_todo = NewTodo {
//!     title:       TodoTitle::new("牛乳を買う")?,
//!     description: TodoDescription::new("帰り道にスーパーで")?,
//!     completed:   false,
//! };
//! assert_eq!(new_todo.title.as_str(), "牛乳を買う");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod todo;

pub use error::DomainError;
