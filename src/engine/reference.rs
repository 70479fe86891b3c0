// ==========================================
// 部品リスト変換システム - 配置記号抽出エンジン
// ==========================================
// 職責: 行内から配置記号（R1, C10 等）を抽出しカンマ区切りへ正規化
// 正規形: 重複排除・初出順・元の大文字小文字を保持
// ==========================================

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

// 配置記号リストのパターン表（柔軟な順）
// 1. カンマ/セミコロン区切り
// 2. 空白混在区切り
// 3. ハイフン連結（R1-R5 形式）
// 語境界必須: 型番中の部分列（BAT54S の T54 等）を配置記号と誤認しない
const REF_LIST_PATTERNS: [&str; 3] = [
    r"\b[RCLUDQJXYFT]\d+(?:[,;]\s*[RCLUDQJXYFT]\d+)*\b",
    r"\b[RCLUDQJXYFT]\d+(?:\s*[,;]\s*[RCLUDQJXYFT]\d+)*\b",
    r"\b[RCLUDQJXYFT]\d+(?:-[RCLUDQJXYFT]\d+)*\b",
];

static LIST_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    REF_LIST_PATTERNS
        .iter()
        .map(|p| Regex::new(&format!("(?i){p}")).expect("配置記号パターンは固定文字列"))
        .collect()
});

// 個別トークン（<記号1文字><数字>）
static REF_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b[RCLUDQJXYFT]\d+\b").expect("固定パターン"));

// ==========================================
// ReferenceDesignatorExtractor - 配置記号抽出エンジン
// ==========================================
pub struct ReferenceDesignatorExtractor;

impl ReferenceDesignatorExtractor {
    pub fn new() -> Self {
        Self
    }

    /// 行内で最もトークン数の多いマッチを選び、正規形で返す
    ///
    /// # 戻り値
    /// - カンマ区切りの配置記号列（マッチなしは空文字列）
    ///
    /// 同トークン数のマッチは先発見優先
    pub fn extract_from_row(&self, row: &[String]) -> String {
        let mut best_match = String::new();
        let mut max_refs = 0usize;

        for cell in row {
            let cell_str = cell.trim();
            if cell_str.is_empty() {
                continue;
            }

            for pattern in LIST_PATTERNS.iter() {
                for m in pattern.find_iter(cell_str) {
                    let ref_count = REF_TOKEN.find_iter(m.as_str()).count();
                    if ref_count > max_refs {
                        max_refs = ref_count;
                        best_match = m.as_str().to_string();
                    }
                }
            }
        }

        self.canonicalize(&best_match)
    }

    /// 配置記号数を数える（正規形のカンマ区切りを前提）
    pub fn count(&self, refs: &str) -> usize {
        refs.split(',').filter(|r| !r.trim().is_empty()).count()
    }

    /// 元の区切り形式に依らず個別トークンを再抽出してカンマ連結する
    ///
    /// 重複トークンは初出のみ残す（大文字小文字を無視して比較、表記は初出を保持）
    fn canonicalize(&self, matched: &str) -> String {
        if matched.is_empty() {
            return String::new();
        }

        let mut seen = HashSet::new();
        let mut tokens = Vec::new();

        for token in REF_TOKEN.find_iter(matched) {
            let token_str = token.as_str();
            if seen.insert(token_str.to_uppercase()) {
                tokens.push(token_str);
            }
        }

        tokens.join(",")
    }
}

impl Default for ReferenceDesignatorExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_canonical_form_across_separator_styles() {
        let extractor = ReferenceDesignatorExtractor::new();

        // 区切り形式に依らず同一の正規形へ収束する
        assert_eq!(extractor.extract_from_row(&row(&["R1,R5,C10"])), "R1,R5,C10");
        assert_eq!(extractor.extract_from_row(&row(&["R1;R5; C10"])), "R1,R5,C10");
        assert_eq!(extractor.extract_from_row(&row(&["R1-R5-C10"])), "R1,R5,C10");
    }

    #[test]
    fn test_empty_row_returns_empty_string() {
        let extractor = ReferenceDesignatorExtractor::new();
        assert_eq!(extractor.extract_from_row(&row(&["抵抗", "100"])), "");
        assert_eq!(extractor.extract_from_row(&row(&[])), "");
    }

    #[test]
    fn test_longest_list_wins() {
        let extractor = ReferenceDesignatorExtractor::new();
        // トークン数の多いマッチが勝つ（U1 単独よりも C1,C2,C3）
        let refs = extractor.extract_from_row(&row(&["U1", "C1,C2,C3"]));
        assert_eq!(refs, "C1,C2,C3");
    }

    #[test]
    fn test_duplicates_removed_first_seen_order() {
        let extractor = ReferenceDesignatorExtractor::new();
        let refs = extractor.extract_from_row(&row(&["R1,R5,R1,C10"]));
        assert_eq!(refs, "R1,R5,C10");
    }

    #[test]
    fn test_preserves_original_casing() {
        let extractor = ReferenceDesignatorExtractor::new();
        let refs = extractor.extract_from_row(&row(&["r1,R5"]));
        assert_eq!(refs, "r1,R5");
    }

    #[test]
    fn test_ignores_tokens_embedded_in_part_numbers() {
        let extractor = ReferenceDesignatorExtractor::new();
        // BAT54S 中の T54 や RK73B2ATTD1002F 中の D1002 は配置記号ではない
        assert_eq!(extractor.extract_from_row(&row(&["BAT54S", "D1"])), "D1");
        assert_eq!(
            extractor.extract_from_row(&row(&["RK73B2ATTD1002F", "R1,R5"])),
            "R1,R5"
        );
    }

    #[test]
    fn test_count_references() {
        let extractor = ReferenceDesignatorExtractor::new();
        assert_eq!(extractor.count("R1,R5,C10"), 3);
        assert_eq!(extractor.count("R1"), 1);
        assert_eq!(extractor.count(""), 0);
    }
}
