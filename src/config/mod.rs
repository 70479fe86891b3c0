// ==========================================
// 部品リスト変換システム - 設定層
// ==========================================
// 職責: 変換設定の管理
// ==========================================

pub mod convert_config;

// 再エクスポート
pub use convert_config::{ConvertConfig, DEFAULT_PANEL_COUNT};
