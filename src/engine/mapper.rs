// ==========================================
// 部品リスト変換システム - テンプレートマッパー
// ==========================================
// 職責: 検出・抽出・分類・数量計算を統括し正規化レコードを組み立てる
// 流れ: 型番検出（格子全体を1回走査）→ 行ごとに抽出/分類/数量 → レコード生成
// 順序: 出力順 = 検出順（格子の上から下）
// ==========================================

use crate::config::ConvertConfig;
use crate::domain::record::{ComponentDefaults, Grid, OutputRecord};
use crate::engine::classifier::ComponentClassifier;
use crate::engine::manufacturer::ManufacturerDetector;
use crate::engine::part_number::PartNumberDetector;
use crate::engine::quantity::QuantityCalculator;
use crate::engine::reference::ReferenceDesignatorExtractor;
use crate::error::ConvertResult;
use tracing::{debug, info, instrument};

// ==========================================
// TemplateMapper - 変換統括エンジン
// ==========================================
pub struct TemplateMapper {
    part_number_detector: PartNumberDetector,
    reference_extractor: ReferenceDesignatorExtractor,
    manufacturer_detector: ManufacturerDetector,
    classifier: ComponentClassifier,
    quantity_calculator: QuantityCalculator,
}

impl TemplateMapper {
    pub fn new() -> Self {
        Self {
            part_number_detector: PartNumberDetector::new(),
            reference_extractor: ReferenceDesignatorExtractor::new(),
            manufacturer_detector: ManufacturerDetector::new(),
            classifier: ComponentClassifier::new(),
            quantity_calculator: QuantityCalculator::new(),
        }
    }

    /// 格子全体を正規化レコード列へ変換する
    ///
    /// 型番候補のない行はレコードを生成しない。
    /// 空の格子は正常入力であり、空のレコード列を返す
    #[instrument(skip(self, grid), fields(rows = grid.len(), panel_count = config.panel_count))]
    pub fn map_grid(&self, grid: &Grid, config: &ConvertConfig) -> ConvertResult<Vec<OutputRecord>> {
        // 数量計算の前段で panel_count を検証する
        config.validate()?;

        let candidates = self.part_number_detector.detect_in_grid(grid);
        info!(candidates = candidates.len(), "型番検出完了");

        let mut records = Vec::with_capacity(candidates.len());

        for (seq, candidate) in candidates.into_iter().enumerate() {
            let row = &grid[candidate.row_index];

            // 配置記号・メーカー
            let reference_designators = self.reference_extractor.extract_from_row(row);
            let ref_count = self.reference_extractor.count(&reference_designators);
            let manufacturer = self
                .manufacturer_detector
                .detect_in_row(row)
                .unwrap_or("")
                .to_string();

            // 分類デフォルトのマージ（空欄のみ充足）
            let defaults = ComponentDefaults::default().merge(&self.classifier.classify(
                &candidate.part_number,
                &manufacturer,
                &reference_designators,
            ));

            // 分類で実装形態が確定しなかった場合のみ型番から判定
            let package_type = defaults
                .package_type
                .unwrap_or_else(|| self.classifier.detect_package_type(&candidate.part_number));

            // 数量算出（この流れでは明示数量なし）
            let qty_per_unit =
                self.quantity_calculator
                    .per_unit(ref_count, None, config.panel_count);
            let qty_total = self.quantity_calculator.total(qty_per_unit, config.panel_count);

            let record = OutputRecord {
                no: seq + 1,
                manufacturer,
                display_name: defaults.display_name.unwrap_or_default(),
                part_number: candidate.part_number,
                reference_designators,
                ref_count,
                package_type,
                assembly_flag: defaults.assembly_flag.unwrap_or_default(),
                qty_per_unit,
                qty_total,
            };

            debug!(no = record.no, part_number = %record.part_number, "レコード生成");
            records.push(record);
        }

        Ok(records)
    }
}

impl Default for TemplateMapper {
    fn default() -> Self {
        Self::new()
    }
}
