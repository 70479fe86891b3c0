// ==========================================
// 部品リスト変換システム - 領域型定義
// ==========================================
// 対応: P板.com 部品リスト入力フォームの分類体系
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 部品分類 (Component Category)
// ==========================================
// 判定優先順は ALL の宣言順（抵抗 → コンデンサ → … → 水晶）
// 「分類不能」は Option::None で表現する
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentCategory {
    Resistor,   // 抵抗
    Capacitor,  // コンデンサ
    Inductor,   // インダクタ
    Diode,      // ダイオード
    Transistor, // トランジスタ
    Ic,         // IC
    Connector,  // コネクタ
    Crystal,    // 水晶振動子
}

impl ComponentCategory {
    /// 判定優先順（先勝ち）
    pub const ALL: [ComponentCategory; 8] = [
        ComponentCategory::Resistor,
        ComponentCategory::Capacitor,
        ComponentCategory::Inductor,
        ComponentCategory::Diode,
        ComponentCategory::Transistor,
        ComponentCategory::Ic,
        ComponentCategory::Connector,
        ComponentCategory::Crystal,
    ];

    /// 品名デフォルト値
    pub fn display_name(&self) -> &'static str {
        match self {
            ComponentCategory::Resistor => "チップ抵抗",
            ComponentCategory::Capacitor => "チップコンデンサ",
            ComponentCategory::Inductor => "チップインダクタ",
            ComponentCategory::Diode => "ダイオード",
            ComponentCategory::Transistor => "トランジスタ",
            ComponentCategory::Ic => "IC",
            ComponentCategory::Connector => "コネクタ",
            ComponentCategory::Crystal => "水晶振動子",
        }
    }

    /// P板.com 分類ラベル
    pub fn category_label(&self) -> &'static str {
        match self {
            ComponentCategory::Resistor => "抵抗器",
            ComponentCategory::Capacitor => "コンデンサ",
            ComponentCategory::Inductor => "インダクタ",
            ComponentCategory::Diode => "ダイオード",
            ComponentCategory::Transistor => "トランジスタ",
            ComponentCategory::Ic => "IC",
            ComponentCategory::Connector => "コネクタ",
            ComponentCategory::Crystal => "水晶振動子",
        }
    }

    /// 分類ごとの実装形態デフォルト（コネクタのみ DIP）
    pub fn default_package(&self) -> PackageType {
        match self {
            ComponentCategory::Connector => PackageType::Dip,
            _ => PackageType::Smd,
        }
    }
}

impl fmt::Display for ComponentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category_label())
    }
}

// ==========================================
// 実装形態 (Package Type)
// ==========================================
// SMD / DIP / 特殊（BGA等）の3区分、デフォルト SMD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PackageType {
    #[default]
    #[serde(rename = "SMD")]
    Smd,
    #[serde(rename = "DIP")]
    Dip,
    #[serde(rename = "特殊（BGA等）")]
    SpecialBga,
}

impl PackageType {
    pub fn label(&self) -> &'static str {
        match self {
            PackageType::Smd => "SMD",
            PackageType::Dip => "DIP",
            PackageType::SpecialBga => "特殊（BGA等）",
        }
    }
}

impl fmt::Display for PackageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ==========================================
// 実装/検査区分 (Assembly Flag)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AssemblyFlag {
    #[default]
    #[serde(rename = "実装")]
    Assemble,
    #[serde(rename = "検査")]
    Inspect,
}

impl AssemblyFlag {
    pub fn label(&self) -> &'static str {
        match self {
            AssemblyFlag::Assemble => "実装",
            AssemblyFlag::Inspect => "検査",
        }
    }
}

impl fmt::Display for AssemblyFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
