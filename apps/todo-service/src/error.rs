//! # Todo Service エラー定義
//!
//! サービス固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! ハンドラ内で例外的な制御フローは使わず、この型を `Result` で
//! 境界（axum の `IntoResponse`）まで運んでステータスコードに変換する。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tasuki_domain::DomainError;
use tasuki_infra::InfraError;
use tasuki_shared::ErrorResponse;
use thiserror::Error;

/// Todo Service で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
    /// リソースが見つからない
    #[error("リソースが見つかりません: {0}")]
    NotFound(String),

    /// 入力値の検証失敗
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// データベースエラー
    #[error("データベースエラー: {0}")]
    Database(#[from] InfraError),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::Validation(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::not_found(msg)),
            ApiError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::validation_error(msg),
            ),
            ApiError::Database(e) => {
                tracing::error!(span_trace = %e.span_trace(), "データベースエラー: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal_error(format!("データベースエラー: {e}")),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Response};

    use super::*;

    async fn response_body(response: Response<Body>) -> ErrorResponse {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_foundは404とメッセージを返す() {
        let response = ApiError::NotFound("Todo が見つかりません: id=1".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = response_body(response).await;
        assert_eq!(body.status, 404);
        assert_eq!(body.detail, "Todo が見つかりません: id=1");
    }

    #[tokio::test]
    async fn test_validationは400を返す() {
        let response =
            ApiError::Validation("タイトルは 50 文字以内で入力してください".to_string())
                .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response_body(response).await;
        assert_eq!(body.status, 400);
    }

    #[tokio::test]
    async fn test_databaseは500とエラー内容を返す() {
        let response =
            ApiError::Database(InfraError::unexpected("接続が切断されました")).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = response_body(response).await;
        assert_eq!(body.status, 500);
        // 永続化エラーは原因のエラーテキストをそのまま detail に載せる
        assert!(body.detail.contains("接続が切断されました"));
    }
}
