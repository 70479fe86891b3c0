// ==========================================
// 部品リスト変換システム - 部品分類エンジン
// ==========================================
// 職責: 型番/配置記号/メーカーから部品分類とデフォルト属性を決定
// 判定順: 配置記号 → 型番 → メーカー対応表 → 無変更（先勝ち即時確定）
// ==========================================

use crate::domain::record::ComponentDefaults;
use crate::domain::types::{AssemblyFlag, ComponentCategory, PackageType};
use regex::Regex;
use std::sync::LazyLock;

// 分類認識パターン表（ComponentCategory::ALL と同じ宣言順で評価）
const CATEGORY_PATTERNS: [(ComponentCategory, &[&str]); 8] = [
    (
        ComponentCategory::Resistor,
        &[r"^R\d+", r"RK\d+", r"RC\d+", r"RF\d+", r"RN\d+", r"resistor", r"抵抗"],
    ),
    (
        ComponentCategory::Capacitor,
        &[r"^C\d+", r"CC\d+", r"CG\d+", r"capacitor", r"コンデンサ"],
    ),
    (
        ComponentCategory::Inductor,
        &[r"^L\d+", r"LK\d+", r"inductor", r"インダクタ"],
    ),
    (
        ComponentCategory::Diode,
        &[r"^D\d+", r"BAS\d+", r"BAT\d+", r"diode", r"ダイオード"],
    ),
    (
        ComponentCategory::Transistor,
        &[r"^Q\d+", r"^T\d+", r"BSS\d+", r"BC\d+", r"transistor", r"トランジスタ"],
    ),
    (
        ComponentCategory::Ic,
        &[r"^U\d+", r"^IC\d+", r"ATmega", r"PIC\d+", r"STM32", r"LM\d+", r"TL\d+"],
    ),
    (
        ComponentCategory::Connector,
        &[r"^J\d+", r"^CN\d+", r"^P\d+", r"connector", r"コネクタ"],
    ),
    (
        ComponentCategory::Crystal,
        &[r"^X\d+", r"^Y\d+", r"crystal", r"水晶", r"クリスタル"],
    ),
];

static CATEGORY_TABLE: LazyLock<Vec<(ComponentCategory, Vec<Regex>)>> = LazyLock::new(|| {
    CATEGORY_PATTERNS
        .iter()
        .map(|(category, patterns)| {
            let regexes = patterns
                .iter()
                .map(|p| Regex::new(&format!("(?i){p}")).expect("分類パターンは固定文字列"))
                .collect();
            (*category, regexes)
        })
        .collect()
});

// メーカー別の品名デフォルト（分類パターン不一致時のフォールバック）
const MANUFACTURER_DISPLAY_NAMES: [(&str, &str); 6] = [
    ("KOA", "チップ抵抗"),
    ("Murata", "チップコンデンサ"),
    ("TDK", "チップコンデンサ"),
    ("Panasonic", "チップコンデンサ"),
    ("Yageo", "チップ抵抗"),
    ("Vishay", "チップ抵抗"),
];

// 実装形態判定トークン（型番の大文字化文字列に対する部分一致）
const BGA_TOKENS: [&str; 4] = ["BGA", "FBGA", "UBGA", "CBGA"];
const DIP_TOKENS: [&str; 9] = [
    "DIP", "PDIP", "SOIC", "SOP", "SSOP", "TSSOP", "QFP", "LQFP", "TQFP",
];
const SMD_SIZE_TOKENS: [&str; 8] = [
    "0201", "0402", "0603", "0805", "1206", "1210", "2010", "2512",
];

// ==========================================
// ComponentClassifier - 部品分類エンジン
// ==========================================
pub struct ComponentClassifier;

impl ComponentClassifier {
    pub fn new() -> Self {
        Self
    }

    /// 部品を分類しデフォルト属性を返す
    ///
    /// # 判定順（先勝ち即時確定）
    /// 1. 配置記号に対する分類パターン一致
    /// 2. 型番に対する分類パターン一致
    /// 3. メーカー対応表（品名のみ充足）
    /// 4. 全フィールド未確定のまま返す
    pub fn classify(
        &self,
        part_number: &str,
        manufacturer: &str,
        ref_designator: &str,
    ) -> ComponentDefaults {
        // 1. 配置記号が最も信頼できる
        if !ref_designator.is_empty() {
            if let Some(category) = self.match_category(ref_designator) {
                return Self::category_defaults(category);
            }
        }

        // 2. 型番パターン
        if !part_number.is_empty() {
            if let Some(category) = self.match_category(part_number) {
                return Self::category_defaults(category);
            }
        }

        // 3. メーカー対応表（品名のみ、実装形態/実装区分は未確定のまま）
        for (name, display_name) in MANUFACTURER_DISPLAY_NAMES {
            if manufacturer == name {
                return ComponentDefaults {
                    display_name: Some(display_name.to_string()),
                    package_type: None,
                    assembly_flag: None,
                };
            }
        }

        ComponentDefaults::default()
    }

    /// 分類ラベル用の分類判定（デフォルト値の割当は行わない）
    ///
    /// 配置記号優先、次に型番。どちらも不一致なら None
    pub fn component_category(
        &self,
        part_number: &str,
        ref_designator: &str,
    ) -> Option<ComponentCategory> {
        if !ref_designator.is_empty() {
            if let Some(category) = self.match_category(ref_designator) {
                return Some(category);
            }
        }
        if !part_number.is_empty() {
            return self.match_category(part_number);
        }
        None
    }

    /// 型番から実装形態を判定する（分類とは独立）
    ///
    /// BGA系トークン → 特殊（BGA等）、DIP/SOIC/QFP系 → DIP、
    /// チップサイズコード → SMD、いずれも無ければ SMD
    pub fn detect_package_type(&self, part_number: &str) -> PackageType {
        let part_upper = part_number.to_uppercase();

        for token in BGA_TOKENS {
            if part_upper.contains(token) {
                return PackageType::SpecialBga;
            }
        }

        for token in DIP_TOKENS {
            if part_upper.contains(token) {
                return PackageType::Dip;
            }
        }

        for token in SMD_SIZE_TOKENS {
            if part_upper.contains(token) {
                return PackageType::Smd;
            }
        }

        PackageType::Smd
    }

    // 分類パターン表の先勝ち検索
    fn match_category(&self, text: &str) -> Option<ComponentCategory> {
        for (category, patterns) in CATEGORY_TABLE.iter() {
            for pattern in patterns {
                if pattern.is_match(text) {
                    return Some(*category);
                }
            }
        }
        None
    }

    // 分類確定時のデフォルト値一式
    fn category_defaults(category: ComponentCategory) -> ComponentDefaults {
        ComponentDefaults {
            display_name: Some(category.display_name().to_string()),
            package_type: Some(category.default_package()),
            assembly_flag: Some(AssemblyFlag::Assemble),
        }
    }
}

impl Default for ComponentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_resistor_by_ref_designator() {
        let classifier = ComponentClassifier::new();
        let defaults = classifier.classify("RK73B2ATTD1002F", "KOA", "R1,R5");

        assert_eq!(defaults.display_name, Some("チップ抵抗".to_string()));
        assert_eq!(defaults.package_type, Some(PackageType::Smd));
        assert_eq!(defaults.assembly_flag, Some(AssemblyFlag::Assemble));
    }

    #[test]
    fn test_classify_ic_by_ref_designator() {
        let classifier = ComponentClassifier::new();
        let defaults = classifier.classify("ATmega328P-PU", "Microchip", "U1");

        assert_eq!(defaults.display_name, Some("IC".to_string()));
        assert_eq!(defaults.package_type, Some(PackageType::Smd));
    }

    #[test]
    fn test_classify_by_part_number_when_no_ref() {
        let classifier = ComponentClassifier::new();
        // 配置記号なしでも RK 系型番から抵抗と判定
        let defaults = classifier.classify("RK73B2ATTD1002F", "", "");
        assert_eq!(defaults.display_name, Some("チップ抵抗".to_string()));

        // BAT 系型番からダイオードと判定
        let defaults = classifier.classify("BAT54S", "", "");
        assert_eq!(defaults.display_name, Some("ダイオード".to_string()));
    }

    #[test]
    fn test_ref_designator_takes_priority_over_part_number() {
        let classifier = ComponentClassifier::new();
        // 型番は RK 系（抵抗形状）だが配置記号 C1 はコンデンサ
        let defaults = classifier.classify("RK73B2ATTD1002F", "", "C1,C2");
        assert_eq!(defaults.display_name, Some("チップコンデンサ".to_string()));
    }

    #[test]
    fn test_connector_defaults_to_dip() {
        let classifier = ComponentClassifier::new();
        let defaults = classifier.classify("", "", "J1");

        assert_eq!(defaults.display_name, Some("コネクタ".to_string()));
        assert_eq!(defaults.package_type, Some(PackageType::Dip));
    }

    #[test]
    fn test_manufacturer_fallback_fills_display_name_only() {
        let classifier = ComponentClassifier::new();
        let defaults = classifier.classify("9999", "Murata", "");

        assert_eq!(defaults.display_name, Some("チップコンデンサ".to_string()));
        // 実装形態と実装区分は未確定のまま
        assert_eq!(defaults.package_type, None);
        assert_eq!(defaults.assembly_flag, None);
    }

    #[test]
    fn test_no_match_returns_empty_defaults() {
        let classifier = ComponentClassifier::new();
        let defaults = classifier.classify("9999", "Unknown", "");
        assert_eq!(defaults, ComponentDefaults::default());
    }

    #[test]
    fn test_component_category_labels() {
        let classifier = ComponentClassifier::new();

        assert_eq!(
            classifier.component_category("RK73B2ATTD1002F", "R1,R5"),
            Some(ComponentCategory::Resistor)
        );
        assert_eq!(
            classifier.component_category("ATmega328P-PU", ""),
            Some(ComponentCategory::Ic)
        );
        assert_eq!(classifier.component_category("9999", ""), None);
    }

    #[test]
    fn test_detect_package_type_bga() {
        let classifier = ComponentClassifier::new();
        assert_eq!(
            classifier.detect_package_type("XC7A35T-2FBGA484"),
            PackageType::SpecialBga
        );
    }

    #[test]
    fn test_detect_package_type_dip_family() {
        let classifier = ComponentClassifier::new();
        assert_eq!(classifier.detect_package_type("ATmega328P-PDIP"), PackageType::Dip);
        assert_eq!(classifier.detect_package_type("sn74hc595tssop"), PackageType::Dip);
    }

    #[test]
    fn test_detect_package_type_chip_size() {
        let classifier = ComponentClassifier::new();
        assert_eq!(classifier.detect_package_type("RC0402FR-0710KL"), PackageType::Smd);
    }

    #[test]
    fn test_detect_package_type_default_smd() {
        let classifier = ComponentClassifier::new();
        assert_eq!(classifier.detect_package_type("BAT54S"), PackageType::Smd);
    }
}
