// ==========================================
// 部品リスト変換システム - 領域モデル層
// ==========================================
// 職責: 領域実体・型の定義
// 規約: データアクセスロジック・エンジンロジックを含まない
// ==========================================

pub mod record;
pub mod types;

// 中核型の再エクスポート
pub use record::{
    ComponentDefaults, ConvertOutput, ConvertSummary, Grid, OutputRecord, PartNumberCandidate,
    Row,
};
pub use types::{AssemblyFlag, ComponentCategory, PackageType};
