// ==========================================
// 部品リスト変換システム - メーカー検出エンジン
// ==========================================
// 職責: 行内のセルから既知メーカー名を検出
// 規約: 部分一致の二値判定のみ（確信度スコアなし）
// ==========================================

// 既知メーカー名（宣言順で判定）
const KNOWN_MANUFACTURERS: [&str; 15] = [
    "KOA",
    "Murata",
    "TDK",
    "Panasonic",
    "Vishay",
    "Yageo",
    "Rohm",
    "Taiyo Yuden",
    "Samsung",
    "Nichicon",
    "Rubycon",
    "KEMET",
    "AVX",
    "Bourns",
    "Coilcraft",
];

// ==========================================
// ManufacturerDetector - メーカー検出エンジン
// ==========================================
pub struct ManufacturerDetector;

impl ManufacturerDetector {
    pub fn new() -> Self {
        Self
    }

    /// 行内で最初に見つかった既知メーカー名を返す
    ///
    /// セルを左から走査し、セルごとにリスト宣言順で部分一致判定、
    /// 最初の一致で即座に確定する
    ///
    /// # 戻り値
    /// - Some(メーカー名): リスト上の正規表記
    /// - None: 一致なし
    pub fn detect_in_row(&self, row: &[String]) -> Option<&'static str> {
        for cell in row {
            let cell_lower = cell.trim().to_lowercase();
            if cell_lower.is_empty() {
                continue;
            }

            for manufacturer in KNOWN_MANUFACTURERS {
                if cell_lower.contains(&manufacturer.to_lowercase()) {
                    return Some(manufacturer);
                }
            }
        }

        None
    }
}

impl Default for ManufacturerDetector {
    fn default() -> Self {
        Self::new()
    }
}
