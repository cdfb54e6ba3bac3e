//! # Todo ハンドラ
//!
//! Todo の CRUD エンドポイントを実装する。
//!
//! ## エンドポイント
//!
//! - `POST /todos/` - Todo 作成
//! - `GET /todos/` - Todo 一覧
//! - `GET /todos/{id}` - Todo 取得
//! - `PUT /todos/{id}` - Todo 更新（全置換）
//! - `DELETE /todos/{id}` - Todo 削除
//!
//! ## 制御フロー
//!
//! リクエスト受信 → 入力検証（ドメイン層の値オブジェクト）→
//! リポジトリ経由で永続化操作 1 回 → レスポンス変換。
//! エラーは [`ApiError`] として境界まで運び、ステータスコードに変換する。
//!
//! 読み取り後に書き込む操作（更新・削除）は「ID で取得 → 変更して保存」の
//! 2 ステップで行う。同一 ID への並行リクエストは自由に競合する
//! （後勝ち。楽観的ロックは行わない）。

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use tasuki_domain::todo::{NewTodo, Todo, TodoDescription, TodoId, TodoTitle};
use tasuki_infra::TodoRepository;

use crate::error::ApiError;

/// Todo API の共有状態
pub struct TodoState<R> {
    pub repository: R,
}

// --- リクエスト/レスポンス型 ---

/// Todo 作成・更新リクエスト
///
/// `description` は省略可能（省略時は空文字列として保存する）。
/// `completed` は省略時 `false`。
#[derive(Debug, Deserialize)]
pub struct TodoPayload {
    pub title:       String,
    pub description: Option<String>,
    #[serde(default)]
    pub completed:   bool,
}

impl TodoPayload {
    /// 入力検証を行い、検証済みの [`NewTodo`] に変換する
    fn try_into_new_todo(self) -> Result<NewTodo, ApiError> {
        Ok(NewTodo {
            title:       TodoTitle::new(self.title)?,
            description: TodoDescription::new(self.description.unwrap_or_default())?,
            completed:   self.completed,
        })
    }
}

/// Todo DTO
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct TodoDto {
    pub id:          i64,
    pub title:       String,
    pub description: String,
    pub completed:   bool,
}

impl TodoDto {
    fn from_todo(todo: &Todo) -> Self {
        Self {
            id:          todo.id().as_i64(),
            title:       todo.title().as_str().to_string(),
            description: todo.description().as_str().to_string(),
            completed:   todo.completed(),
        }
    }
}

/// Todo 削除レスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteTodoResponse {
    pub message: String,
}

// --- ハンドラ ---

/// POST /todos/
///
/// Todo を作成する。ID はデータベースが採番する。
///
/// ## レスポンス
///
/// - `200 OK`: 採番済みの Todo
/// - `400 Bad Request`: 文字数制限違反
/// - `500 Internal Server Error`: データベースエラー
#[tracing::instrument(skip_all)]
pub async fn create_todo<R: TodoRepository>(
    State(state): State<Arc<TodoState<R>>>,
    Json(payload): Json<TodoPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let new_todo = payload.try_into_new_todo()?;

    let todo = state.repository.insert(&new_todo).await?;

    Ok((StatusCode::OK, Json(TodoDto::from_todo(&todo))))
}

/// GET /todos/
///
/// Todo を全件取得する。並び順・ページネーションは保証しない。
#[tracing::instrument(skip_all)]
pub async fn list_todos<R: TodoRepository>(
    State(state): State<Arc<TodoState<R>>>,
) -> Result<impl IntoResponse, ApiError> {
    let todos = state.repository.find_all().await?;

    let items: Vec<TodoDto> = todos.iter().map(TodoDto::from_todo).collect();

    Ok((StatusCode::OK, Json(items)))
}

/// GET /todos/{id}
///
/// ID を指定して Todo を 1 件取得する。
///
/// ## レスポンス
///
/// - `200 OK`: Todo
/// - `404 Not Found`: 指定 ID のレコードが存在しない
#[tracing::instrument(skip_all, fields(%id))]
pub async fn get_todo<R: TodoRepository>(
    State(state): State<Arc<TodoState<R>>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let todo = state
        .repository
        .find_by_id(TodoId::from_i64(id))
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Todo が見つかりません: id={id}")))?;

    Ok((StatusCode::OK, Json(TodoDto::from_todo(&todo))))
}

/// PUT /todos/{id}
///
/// Todo を更新する。部分更新ではなく全置換:
/// リクエストで省略されたフィールドはデフォルト値
/// （`description` → 空文字列、`completed` → `false`）に戻る。
///
/// ## レスポンス
///
/// - `200 OK`: 更新後の Todo
/// - `400 Bad Request`: 文字数制限違反
/// - `404 Not Found`: 指定 ID のレコードが存在しない
#[tracing::instrument(skip_all, fields(%id))]
pub async fn update_todo<R: TodoRepository>(
    State(state): State<Arc<TodoState<R>>>,
    Path(id): Path<i64>,
    Json(payload): Json<TodoPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let new_todo = payload.try_into_new_todo()?;

    let mut todo = state
        .repository
        .find_by_id(TodoId::from_i64(id))
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Todo が見つかりません: id={id}")))?;

    todo.replace(new_todo.title, new_todo.description, new_todo.completed);
    state.repository.update(&todo).await?;

    Ok((StatusCode::OK, Json(TodoDto::from_todo(&todo))))
}

/// DELETE /todos/{id}
///
/// Todo を削除する（物理削除）。
///
/// ## レスポンス
///
/// - `200 OK`: 削除完了メッセージ
/// - `404 Not Found`: 指定 ID のレコードが存在しない
#[tracing::instrument(skip_all, fields(%id))]
pub async fn delete_todo<R: TodoRepository>(
    State(state): State<Arc<TodoState<R>>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let todo = state
        .repository
        .find_by_id(TodoId::from_i64(id))
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Todo が見つかりません: id={id}")))?;

    state.repository.delete(todo.id()).await?;

    Ok((
        StatusCode::OK,
        Json(DeleteTodoResponse {
            message: "Todo を削除しました".to_string(),
        }),
    ))
}
