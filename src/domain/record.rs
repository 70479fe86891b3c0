// ==========================================
// 部品リスト変換システム - レコード領域モデル
// ==========================================
// 用途: 抽出パイプラインの入出力構造
// 入力: Grid（列構造不明のテキスト格子）
// 出力: OutputRecord（正規化済み部品レコード）
// ==========================================

use crate::domain::types::{AssemblyFlag, PackageType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// Grid - 正規化済みテキスト格子
// ==========================================
// GridSource（ファイルアダプタ）が生成し、エンジンは読み取り専用
// セルは常にトリム済みテキスト（欠損セルは空文字列）
pub type Row = Vec<String>;
pub type Grid = Vec<Row>;

// ==========================================
// PartNumberCandidate - 型番候補
// ==========================================
// 用途: 型番検出エンジンの一時生成物（1行につき最大1件が生存）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartNumberCandidate {
    pub row_index: usize,    // 入力格子上の行番号（0始まり）
    pub part_number: String, // マッチした型番文字列
    pub confidence: u32,     // 確信度スコア
}

// ==========================================
// ComponentDefaults - 分類デフォルト値
// ==========================================
// 「空欄のみ埋める」マージ規則のための中間構造
// None = 未確定（マージ時に後続のデフォルトで充足可能）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentDefaults {
    pub display_name: Option<String>,      // 品名
    pub package_type: Option<PackageType>, // 実装形態
    pub assembly_flag: Option<AssemblyFlag>, // 実装/検査
}

impl ComponentDefaults {
    /// 未設定フィールドのみを fallback で充足する（設定済みは不変）
    pub fn merge(self, fallback: &ComponentDefaults) -> ComponentDefaults {
        ComponentDefaults {
            display_name: self.display_name.or_else(|| fallback.display_name.clone()),
            package_type: self.package_type.or(fallback.package_type),
            assembly_flag: self.assembly_flag.or(fallback.assembly_flag),
        }
    }
}

// ==========================================
// OutputRecord - 正規化済み部品レコード
// ==========================================
// 不変条件: qty_total = qty_per_unit × panel_count / qty_per_unit >= 1
// 順序: no は検出順の1始まり連番
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    pub no: usize,                      // 連番（1始まり、検出順）
    pub manufacturer: String,           // メーカー名（未検出時は空）
    pub display_name: String,           // 品名（分類不能時は空）
    pub part_number: String,            // 電子部品型番
    pub reference_designators: String,  // 配置記号（カンマ区切り正規形）
    pub ref_count: usize,               // 配置記号数
    pub package_type: PackageType,      // 実装形態
    pub assembly_flag: AssemblyFlag,    // 実装/検査
    pub qty_per_unit: u32,              // 1枚あたり必要数
    pub qty_total: u32,                 // 合計必要数（= qty_per_unit × パネル枚数）
}

// ==========================================
// ConvertSummary - 変換バッチ概要
// ==========================================
// 用途: 1回の変換実行のメタ情報
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertSummary {
    pub batch_id: String,               // バッチ ID（UUID）
    pub source_file: Option<String>,    // 変換元ファイル名
    pub total_rows: usize,              // 入力格子の総行数
    pub detected_parts: usize,          // 検出された部品数
    pub panel_count: u32,               // パネル枚数
    pub converted_at: DateTime<Utc>,    // 変換実行時刻
}

// ==========================================
// ConvertOutput - 変換結果
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertOutput {
    pub records: Vec<OutputRecord>,
    pub summary: ConvertSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_fills_only_unset_fields() {
        let current = ComponentDefaults {
            display_name: Some("X".to_string()),
            package_type: None,
            assembly_flag: None,
        };
        let fallback = ComponentDefaults {
            display_name: Some("チップ抵抗".to_string()),
            package_type: Some(PackageType::Dip),
            assembly_flag: Some(AssemblyFlag::Assemble),
        };

        let merged = current.merge(&fallback);

        // 設定済みの品名は上書きされない
        assert_eq!(merged.display_name, Some("X".to_string()));
        // 未設定のフィールドのみ充足される
        assert_eq!(merged.package_type, Some(PackageType::Dip));
        assert_eq!(merged.assembly_flag, Some(AssemblyFlag::Assemble));
    }

    #[test]
    fn test_merge_empty_takes_all_fallback() {
        let fallback = ComponentDefaults {
            display_name: Some("IC".to_string()),
            package_type: Some(PackageType::Smd),
            assembly_flag: Some(AssemblyFlag::Inspect),
        };

        let merged = ComponentDefaults::default().merge(&fallback);

        assert_eq!(merged, fallback);
    }
}
