//! # Todo Service ライブラリ
//!
//! Todo Service の設定・エラー変換・ハンドラを公開する。
//! テスト用に内部モジュールへのアクセスを提供する。

pub mod config;
pub mod error;
pub mod handler;
