//! # ドメイン層エラー定義
//!
//! ドメインモデルの不変条件違反を表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 入力値の検証失敗 |
//!
//! ## 使用例
//!
//! ```rust
//! use tasuki_domain::DomainError;
//!
//! fn validate_title(title: &str) -> Result<(), DomainError> {
//!     if title.chars().count() > 50 {
//!         return Err(DomainError::Validation(
//!             "タイトルは 50 文字以内で入力してください".to_string(),
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// 値オブジェクトの構築時に不変条件違反を検出した場合に返される。
/// API 層でこのエラーを受け取り、適切な HTTP レスポンスに変換する。
#[derive(Debug, Error)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// 入力値が文字数制限などの不変条件に違反している場合に使用する。
    #[error("バリデーションエラー: {0}")]
    Validation(String),
}
