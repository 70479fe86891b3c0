// ==========================================
// 部品リスト変換システム - エラー型定義
// ==========================================
// ツール: thiserror 派生マクロ
// ==========================================

use thiserror::Error;

/// 変換処理エラー型
#[derive(Error, Debug)]
pub enum ConvertError {
    // ===== ファイル関連エラー =====
    #[error("ファイルが存在しません: {0}")]
    FileNotFound(String),

    #[error("未対応のファイル形式: {0}（対応形式: .xlsx/.csv）")]
    UnsupportedFormat(String),

    #[error("ファイル読み込み失敗: {0}")]
    FileReadError(String),

    #[error("Excel 解析失敗: {0}")]
    ExcelParseError(String),

    #[error("CSV 解析失敗: {0}")]
    CsvParseError(String),

    // ===== 設定エラー =====
    #[error("設定値が不正です (key: {key}, value: {value}): {message}")]
    InvalidConfiguration {
        key: String,
        value: String,
        message: String,
    },

    // ===== 出力エラー =====
    #[error("出力書き込み失敗: {0}")]
    OutputWriteError(String),

    // ===== 汎用エラー =====
    #[error("内部エラー: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// From<std::io::Error> 実装
impl From<std::io::Error> for ConvertError {
    fn from(err: std::io::Error) -> Self {
        ConvertError::FileReadError(err.to_string())
    }
}

// From<csv::Error> 実装
impl From<csv::Error> for ConvertError {
    fn from(err: csv::Error) -> Self {
        ConvertError::CsvParseError(err.to_string())
    }
}

// From<calamine::XlsxError> 実装
impl From<calamine::XlsxError> for ConvertError {
    fn from(err: calamine::XlsxError) -> Self {
        ConvertError::ExcelParseError(err.to_string())
    }
}

/// Result 型エイリアス
pub type ConvertResult<T> = Result<T, ConvertError>;
