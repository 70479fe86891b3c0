// ==========================================
// 部品リスト変換システム - コアライブラリ
// ==========================================
// 用途: 列構造不明の部品表から部品レコードを抽出・正規化する
// 方針: ヒューリスティック + 確信度ランキングによるベストエフォート抽出
// ==========================================

// ==========================================
// モジュール宣言
// ==========================================

// 領域層 - 実体と型
pub mod domain;

// エンジン層 - 抽出・分類・数量計算
pub mod engine;

// 取込層 - 外部ファイル
pub mod importer;

// 設定層 - 変換設定
pub mod config;

// エラー型
pub mod error;

// ログシステム
pub mod logging;

// ==========================================
// 中核型の再エクスポート
// ==========================================

// 領域型
pub use domain::types::{AssemblyFlag, ComponentCategory, PackageType};

// 領域実体
pub use domain::{
    ComponentDefaults, ConvertOutput, ConvertSummary, Grid, OutputRecord, PartNumberCandidate,
    Row,
};

// エンジン
pub use engine::{
    ComponentClassifier, ManufacturerDetector, PartNumberDetector, QuantityCalculator,
    ReferenceDesignatorExtractor, TemplateMapper,
};

// 取込
pub use importer::{CsvGridParser, ExcelGridParser, GridParser, PartsListConverter, UniversalGridParser};

// 設定・エラー
pub use config::{ConvertConfig, DEFAULT_PANEL_COUNT};
pub use error::{ConvertError, ConvertResult};

// ==========================================
// 定数定義
// ==========================================

// システムバージョン
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// システム名称
pub const APP_NAME: &str = "部品リスト変換システム";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
