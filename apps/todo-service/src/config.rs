//! # Todo Service 設定
//!
//! 環境変数から Todo Service サーバーの設定を読み込む。
//!
//! `.env` ファイルが存在する場合、`main` が dotenvy で環境変数に
//! マージしてからこのモジュールを呼び出す。

use std::env;

/// Todo Service サーバーの設定
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// バインドアドレス
    pub host: String,
    /// ポート番号
    pub port: u16,
    /// データベース接続 URL
    pub database_url: String,
}

impl AppConfig {
    /// 環境変数から設定を読み込む
    ///
    /// `DATABASE_URL` が未設定の場合はプロセスを起動させない
    /// （フェイルファスト）。`HOST` / `PORT` は省略可能。
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT は有効なポート番号である必要があります"),
            database_url: env::var("DATABASE_URL")
                .expect("DATABASE_URL が設定されていません（.env を確認してください）"),
        })
    }
}
