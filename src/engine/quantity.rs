// ==========================================
// 部品リスト変換システム - 数量計算エンジン
// ==========================================
// 職責: 配置記号数とパネル枚数から必要数量を算出
// 規約: 1枚あたり必要数は常に 1 以上
// ==========================================

// ==========================================
// QuantityCalculator - 数量計算エンジン
// ==========================================
pub struct QuantityCalculator;

impl QuantityCalculator {
    pub fn new() -> Self {
        Self
    }

    /// 1枚あたり必要数を算出する
    ///
    /// # 優先順
    /// 1. explicit_qty が指定され正 → max(1, explicit_qty / panel_count)
    /// 2. ref_count > 0 → max(1, ref_count / panel_count)
    /// 3. それ以外 → 1
    ///
    /// 除算は切り捨て。panel_count >= 1 は呼び出し側（ConvertConfig）が保証する
    pub fn per_unit(&self, ref_count: usize, explicit_qty: Option<u32>, panel_count: u32) -> u32 {
        match explicit_qty {
            Some(qty) if qty > 0 => (qty / panel_count).max(1),
            _ if ref_count > 0 => (ref_count as u32 / panel_count).max(1),
            _ => 1,
        }
    }

    /// 合計必要数 = 1枚あたり必要数 × パネル枚数
    pub fn total(&self, per_unit: u32, panel_count: u32) -> u32 {
        per_unit * panel_count
    }
}

impl Default for QuantityCalculator {
    fn default() -> Self {
        Self::new()
    }
}
