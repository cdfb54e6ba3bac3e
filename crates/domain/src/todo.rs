//! # Todo
//!
//! タスク 1 件を表現するドメインモデル。
//!
//! ## ライフサイクル
//!
//! - 作成: [`NewTodo`] から永続化層が ID を採番して [`Todo`] を生成する
//! - 更新: [`Todo::replace`] でタイトル・説明・完了フラグを全置換する
//!   （部分更新はしない）
//! - 削除: 物理削除のみ。論理削除やバージョン管理は持たない
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use tasuki_domain::todo::{Todo, TodoDescription, TodoId, TodoTitle};
//!
//! let mut todo = Todo::new(
//!     TodoId::from_i64(1),
//!     TodoTitle::new("牛乳を買う")?,
//!     TodoDescription::new("帰り道にスーパーで")?,
//!     false,
//! );
//!
//! todo.replace(
//!     TodoTitle::new("牛乳と卵を買う")?,
//!     TodoDescription::default(),
//!     true,
//! );
//!
//! assert_eq!(todo.id().as_i64(), 1);
//! assert!(todo.completed());
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::DomainError;

// =========================================================================
// TodoId（識別子）
// =========================================================================

/// Todo の一意識別子
///
/// データベースの `BIGSERIAL` が採番する整数値。
/// 一度採番された ID は不変で、全レコードを通じて一意。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TodoId(i64);

impl TodoId {
    /// i64 から TodoId を生成する
    pub fn from_i64(value: i64) -> Self {
        Self(value)
    }

    /// 内部の i64 値を取得する
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =========================================================================
// TodoTitle（タイトル）
// =========================================================================

/// タイトルの最大文字数（DB: `VARCHAR(50)`）
pub const MAX_TITLE_LENGTH: usize = 50;

/// Todo のタイトル（値オブジェクト）
///
/// # 不変条件
///
/// - 最大 50 文字
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoTitle(String);

impl TodoTitle {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        if value.chars().count() > MAX_TITLE_LENGTH {
            return Err(DomainError::Validation(
                "タイトルは 50 文字以内で入力してください".to_string(),
            ));
        }

        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 所有権を持つ文字列に変換する
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for TodoTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =========================================================================
// TodoDescription（説明）
// =========================================================================

/// 説明の最大文字数（DB: `VARCHAR(100)`）
pub const MAX_DESCRIPTION_LENGTH: usize = 100;

/// Todo の説明（値オブジェクト）
///
/// リクエストで省略可能だが、ストレージ上は NOT NULL。
/// 省略時は空文字列として扱う（[`Default`] 実装）。
///
/// # 不変条件
///
/// - 最大 100 文字
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoDescription(String);

impl TodoDescription {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        if value.chars().count() > MAX_DESCRIPTION_LENGTH {
            return Err(DomainError::Validation(
                "説明は 100 文字以内で入力してください".to_string(),
            ));
        }

        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 所有権を持つ文字列に変換する
    pub fn into_string(self) -> String {
        self.0
    }
}

// =========================================================================
// NewTodo（未採番の Todo）
// =========================================================================

/// ID 採番前の Todo
///
/// 作成リクエストの検証済み入力を表す。
/// 永続化層が ID を採番して [`Todo`] に昇格させる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title:       TodoTitle,
    pub description: TodoDescription,
    pub completed:   bool,
}

// =========================================================================
// Todo（エンティティ）
// =========================================================================

/// Todo エンティティ
///
/// # 不変条件
///
/// - `id` は採番後不変
/// - `title` は 50 文字以内、`description` は 100 文字以内
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    id:          TodoId,
    title:       TodoTitle,
    description: TodoDescription,
    completed:   bool,
}

impl Todo {
    /// 検証済みの値から Todo を生成する
    pub fn new(
        id: TodoId,
        title: TodoTitle,
        description: TodoDescription,
        completed: bool,
    ) -> Self {
        Self {
            id,
            title,
            description,
            completed,
        }
    }

    /// データベースの行から Todo を復元する
    ///
    /// 文字数制限はストレージのカラム定義（`VARCHAR(50)` / `VARCHAR(100)`）で
    /// 保証されているため、再検証せずに復元する。
    pub fn from_db(id: i64, title: String, description: String, completed: bool) -> Self {
        Self {
            id:          TodoId::from_i64(id),
            title:       TodoTitle(title),
            description: TodoDescription(description),
            completed,
        }
    }

    /// タイトル・説明・完了フラグを全置換する
    ///
    /// 更新操作は部分更新ではなく全置換。ID は変更されない。
    pub fn replace(&mut self, title: TodoTitle, description: TodoDescription, completed: bool) {
        self.title = title;
        self.description = description;
        self.completed = completed;
    }

    pub fn id(&self) -> TodoId {
        self.id
    }

    pub fn title(&self) -> &TodoTitle {
        &self.title
    }

    pub fn description(&self) -> &TodoDescription {
        &self.description
    }

    pub fn completed(&self) -> bool {
        self.completed
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    // ===== TodoTitle =====

    #[rstest]
    #[case::空文字列("")]
    #[case::通常の文字列("牛乳を買う")]
    #[case::境界値50文字(&"あ".repeat(50))]
    fn test_todo_titleは50文字以内を受け付ける(#[case] value: &str) {
        let title = TodoTitle::new(value).unwrap();
        assert_eq!(title.as_str(), value);
    }

    #[rstest]
    #[case::境界値51文字(&"あ".repeat(51))]
    #[case::大幅超過(&"x".repeat(200))]
    fn test_todo_titleは50文字超過を拒否する(#[case] value: &str) {
        let result = TodoTitle::new(value);
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_todo_titleはバイト数ではなく文字数で判定する() {
        // マルチバイト文字 50 文字は 150 バイトだが受理される
        let value = "あ".repeat(50);
        assert!(TodoTitle::new(value).is_ok());
    }

    // ===== TodoDescription =====

    #[rstest]
    #[case::空文字列("")]
    #[case::境界値100文字(&"あ".repeat(100))]
    fn test_todo_descriptionは100文字以内を受け付ける(#[case] value: &str) {
        let description = TodoDescription::new(value).unwrap();
        assert_eq!(description.as_str(), value);
    }

    #[test]
    fn test_todo_descriptionは100文字超過を拒否する() {
        let result = TodoDescription::new("あ".repeat(101));
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_todo_descriptionのデフォルトは空文字列() {
        assert_eq!(TodoDescription::default().as_str(), "");
    }

    // ===== Todo =====

    fn sample_todo() -> Todo {
        Todo::new(
            TodoId::from_i64(1),
            TodoTitle::new("牛乳を買う").unwrap(),
            TodoDescription::new("帰り道にスーパーで").unwrap(),
            false,
        )
    }

    #[test]
    fn test_replaceで全フィールドが置換される() {
        let mut todo = sample_todo();

        todo.replace(
            TodoTitle::new("卵を買う").unwrap(),
            TodoDescription::default(),
            true,
        );

        assert_eq!(todo.title().as_str(), "卵を買う");
        assert_eq!(todo.description().as_str(), "");
        assert!(todo.completed());
    }

    #[test]
    fn test_replaceでidは変更されない() {
        let mut todo = sample_todo();

        todo.replace(
            TodoTitle::new("卵を買う").unwrap(),
            TodoDescription::default(),
            false,
        );

        assert_eq!(todo.id(), TodoId::from_i64(1));
    }

    #[test]
    fn test_from_dbで行の値がそのまま復元される() {
        let todo = Todo::from_db(42, "タイトル".to_string(), "説明".to_string(), true);

        assert_eq!(todo.id().as_i64(), 42);
        assert_eq!(todo.title().as_str(), "タイトル");
        assert_eq!(todo.description().as_str(), "説明");
        assert!(todo.completed());
    }
}
