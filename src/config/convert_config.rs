// ==========================================
// 部品リスト変換システム - 変換設定
// ==========================================
// 職責: 変換パラメータの保持と検証
// 唯一の可変パラメータ: パネル枚数（panel_count）
// ==========================================

use crate::error::{ConvertError, ConvertResult};
use serde::{Deserialize, Serialize};

/// パネル枚数のデフォルト値
pub const DEFAULT_PANEL_COUNT: u32 = 8;

// ==========================================
// ConvertConfig - 変換設定
// ==========================================
// panel_count は 1 以上であること（数量計算の前段で検証する）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertConfig {
    pub panel_count: u32, // パネル枚数（1パネルあたりの基板枚数）
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            panel_count: DEFAULT_PANEL_COUNT,
        }
    }
}

impl ConvertConfig {
    /// 検証付きコンストラクタ
    ///
    /// # 引数
    /// - panel_count: パネル枚数（1 以上）
    ///
    /// # 戻り値
    /// - Ok(ConvertConfig): 検証済み設定
    /// - Err(InvalidConfiguration): panel_count < 1
    pub fn new(panel_count: u32) -> ConvertResult<Self> {
        let config = Self { panel_count };
        config.validate()?;
        Ok(config)
    }

    /// 設定値の検証
    pub fn validate(&self) -> ConvertResult<()> {
        if self.panel_count < 1 {
            return Err(ConvertError::InvalidConfiguration {
                key: "panel_count".to_string(),
                value: self.panel_count.to_string(),
                message: "パネル枚数は 1 以上を指定してください".to_string(),
            });
        }
        Ok(())
    }
}
