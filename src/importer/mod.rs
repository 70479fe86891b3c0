// ==========================================
// 部品リスト変換システム - 取込層
// ==========================================
// 職責: 外部ファイルの取り込みとテキスト格子の生成
// 対応: Excel, CSV
// ==========================================

// モジュール宣言
pub mod converter;
pub mod file_parser;
pub mod grid_source;

// 中核型の再エクスポート
pub use converter::PartsListConverter;
pub use file_parser::{CsvGridParser, ExcelGridParser, UniversalGridParser};

// Trait インタフェースの再エクスポート
pub use grid_source::GridParser;
