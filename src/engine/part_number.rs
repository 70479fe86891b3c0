// ==========================================
// 部品リスト変換システム - 型番検出エンジン
// ==========================================
// 職責: 行内の全セルから電子部品型番を確信度付きで検出
// 規約: 1行につき最大1候補（最高確信度、同点は先発見優先）
// ==========================================

use crate::domain::record::{Grid, PartNumberCandidate};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, instrument};

// 型番パターン表（宣言順 = 優先順、同点タイブレークに使用）
// 上位ほど構造化された型番形状（RK73B2ATTD1002F / ATmega328P-PU 等）
const PART_NUMBER_PATTERNS: [(&str, u32); 5] = [
    // 英字2-6 + 数字2-8 + 英数交互尾部 + ハイフン節（任意）
    (r"[A-Z]{2,6}\d{2,8}(?:[A-Z]+\d*)*-?[A-Z]*\d*", 20),
    // 英字+数字+英字+数字
    (r"[A-Z]+\d+[A-Z]+\d+[A-Z]*", 15),
    // 英字3+ + 数字2+
    (r"[A-Z]{3,}\d{2,}[A-Z]*", 10),
    // ハイフン付き英数
    (r"[A-Z]+\d+[A-Z]*-[A-Z]*\d*", 12),
    // 単純英数
    (r"[A-Z]+\d+", 5),
];

// 型番でないことが明白なラベルセル（小文字比較）
const NON_PART_LABELS: [&str; 5] = [
    "item",
    "manufacturer",
    "quantity",
    "description",
    "reference",
];

static PATTERNS: LazyLock<Vec<(Regex, u32)>> = LazyLock::new(|| {
    PART_NUMBER_PATTERNS
        .iter()
        .map(|(pattern, score)| {
            let re = Regex::new(&format!("(?i){pattern}")).expect("型番パターンは固定文字列");
            (re, *score)
        })
        .collect()
});

// 構造ボーナス判定: 英字列 → 数字3+ → 英字 の混在構造
static STRUCTURE_BONUS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[A-Z]{2,}.*\d{3,}.*[A-Z]").expect("固定パターン"));

// 確信度ボーナス値
const STRUCTURE_BONUS_SCORE: u32 = 10; // 英字-数字-英字混在
const LENGTH_BONUS_SCORE: u32 = 5; // 9文字以上
const LENGTH_BONUS_THRESHOLD: usize = 8;

// ==========================================
// PartNumberDetector - 型番検出エンジン
// ==========================================
pub struct PartNumberDetector;

impl PartNumberDetector {
    pub fn new() -> Self {
        Self
    }

    /// 1行から最高確信度の型番を1件検出する
    ///
    /// # 戻り値
    /// - Some((型番, 確信度)): 検出成功
    /// - None: 行内にパターン一致なし
    ///
    /// # タイブレーク
    /// 確信度同点時はパターン宣言順 → セル左から順 → 出現位置順の先勝ち
    pub fn detect_in_row(&self, row: &[String]) -> Option<(String, u32)> {
        let mut best: Option<(String, u32)> = None;

        for (pattern, base_score) in PATTERNS.iter() {
            for cell in row {
                let cell_str = cell.trim();
                if cell_str.is_empty() {
                    continue;
                }

                // ラベルセルは型番候補から除外
                if NON_PART_LABELS.contains(&cell_str.to_lowercase().as_str()) {
                    continue;
                }

                for m in pattern.find_iter(cell_str) {
                    let matched = m.as_str();
                    let confidence = self.score(matched, *base_score);

                    if best.as_ref().map_or(true, |(_, c)| confidence > *c) {
                        best = Some((matched.to_string(), confidence));
                    }
                }
            }
        }

        best
    }

    /// 格子全体を走査し、行ごとの型番候補を行順で返す
    ///
    /// 候補のない行は結果に寄与しない
    #[instrument(skip(self, grid), fields(rows = grid.len()))]
    pub fn detect_in_grid(&self, grid: &Grid) -> Vec<PartNumberCandidate> {
        let mut candidates = Vec::new();

        for (row_index, row) in grid.iter().enumerate() {
            if let Some((part_number, confidence)) = self.detect_in_row(row) {
                debug!(row_index, %part_number, confidence, "型番候補を検出");
                candidates.push(PartNumberCandidate {
                    row_index,
                    part_number,
                    confidence,
                });
            }
        }

        candidates
    }

    /// 確信度スコア計算
    ///
    /// confidence = 基礎点 + 文字数 + 構造ボーナス(10) + 長尺ボーナス(5)
    fn score(&self, matched: &str, base_score: u32) -> u32 {
        let mut confidence = base_score + matched.len() as u32;

        if STRUCTURE_BONUS.is_match(matched) {
            confidence += STRUCTURE_BONUS_SCORE;
        }

        if matched.len() > LENGTH_BONUS_THRESHOLD {
            confidence += LENGTH_BONUS_SCORE;
        }

        confidence
    }
}

impl Default for PartNumberDetector {
    fn default() -> Self {
        Self::new()
    }
}
