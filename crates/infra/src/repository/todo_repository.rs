//! # TodoRepository
//!
//! Todo レコードの永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **1 操作 1 クエリ**: 各メソッドはプールから接続を借りて 1 つの
//!   クエリを実行する。単文の更新・削除は PostgreSQL 上でアトミックに
//!   実行されるため、失敗時にストレージが中途半端な状態になることはない
//! - **実行時検証クエリ**: スキーマは起動時に生成されるため、
//!   コンパイル時検証の `query!` マクロではなく `query_as` を使用する
//! - **採番の委譲**: ID は `RETURNING` 句でデータベースから受け取る

use async_trait::async_trait;
use sqlx::PgPool;
use tasuki_domain::todo::{NewTodo, Todo, TodoId};

use crate::error::InfraError;

/// Todo リポジトリトレイト
///
/// Todo の CRUD 操作を定義する。
/// ハンドラはこのトレイト経由で永続化層にアクセスする。
#[async_trait]
pub trait TodoRepository: Send + Sync + 'static {
    /// 全件を取得する
    ///
    /// 並び順は保証しない。ページネーションは行わない。
    async fn find_all(&self) -> Result<Vec<Todo>, InfraError>;

    /// ID で Todo を検索する
    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, InfraError>;

    /// Todo を挿入し、採番済みのレコードを返す
    async fn insert(&self, new_todo: &NewTodo) -> Result<Todo, InfraError>;

    /// Todo を更新する（タイトル・説明・完了フラグの全置換）
    async fn update(&self, todo: &Todo) -> Result<(), InfraError>;

    /// Todo を削除する
    async fn delete(&self, id: TodoId) -> Result<(), InfraError>;
}

/// todos テーブルの行
#[derive(Debug, sqlx::FromRow)]
struct TodoRow {
    id:          i64,
    title:       String,
    description: String,
    completed:   bool,
}

impl TodoRow {
    fn into_todo(self) -> Todo {
        Todo::from_db(self.id, self.title, self.description, self.completed)
    }
}

/// PostgreSQL 実装の TodoRepository
#[derive(Debug, Clone)]
pub struct PostgresTodoRepository {
    pool: PgPool,
}

impl PostgresTodoRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    async fn find_all(&self) -> Result<Vec<Todo>, InfraError> {
        let rows = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, title, description, completed
            FROM todos
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(TodoRow::into_todo).collect())
    }

    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, InfraError> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, title, description, completed
            FROM todos
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(TodoRow::into_todo))
    }

    async fn insert(&self, new_todo: &NewTodo) -> Result<Todo, InfraError> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            INSERT INTO todos (title, description, completed)
            VALUES ($1, $2, $3)
            RETURNING id, title, description, completed
            "#,
        )
        .bind(new_todo.title.as_str())
        .bind(new_todo.description.as_str())
        .bind(new_todo.completed)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_todo())
    }

    async fn update(&self, todo: &Todo) -> Result<(), InfraError> {
        sqlx::query(
            r#"
            UPDATE todos
            SET title = $2, description = $3, completed = $4
            WHERE id = $1
            "#,
        )
        .bind(todo.id().as_i64())
        .bind(todo.title().as_str())
        .bind(todo.description().as_str())
        .bind(todo.completed())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, id: TodoId) -> Result<(), InfraError> {
        sqlx::query(
            r#"
            DELETE FROM todos
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
