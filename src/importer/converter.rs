// ==========================================
// 部品リスト変換システム - 変換統合ファサード
// ==========================================
// 職責: 変換フロー全体の統合（ファイル → 格子 → レコード + 概要）
// 流れ: 解析 → 型番検出 → 抽出/分類/数量 → レコード組み立て
// ==========================================

use crate::config::ConvertConfig;
use crate::domain::record::{ConvertOutput, ConvertSummary, Grid};
use crate::engine::TemplateMapper;
use crate::error::ConvertResult;
use crate::importer::file_parser::UniversalGridParser;
use chrono::Utc;
use std::path::Path;
use tracing::{debug, info, instrument};
use uuid::Uuid;

// ==========================================
// PartsListConverter - 変換統合ファサード
// ==========================================
pub struct PartsListConverter {
    config: ConvertConfig,
    parser: UniversalGridParser,
    mapper: TemplateMapper,
}

impl PartsListConverter {
    /// 検証済み設定から変換器を生成する
    pub fn new(config: ConvertConfig) -> ConvertResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            parser: UniversalGridParser,
            mapper: TemplateMapper::new(),
        })
    }

    /// 入力ファイルを変換する
    ///
    /// # 引数
    /// - file_path: 入力ファイル（.xlsx/.xls/.csv）
    ///
    /// # 戻り値
    /// - Ok(ConvertOutput): 正規化レコード列 + バッチ概要
    /// - Err: ファイル読み込み/形式エラー
    #[instrument(skip(self, file_path))]
    pub fn convert_file<P: AsRef<Path>>(&self, file_path: P) -> ConvertResult<ConvertOutput> {
        let path = file_path.as_ref();
        let source_file = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string());

        info!(file = %path.display(), "変換開始");

        // === 段階 1: ファイル解析 ===
        debug!("段階 1: ファイル解析");
        let grid = self.parser.parse(path)?;
        info!(rows = grid.len(), "ファイル解析完了");

        // === 段階 2-3: 検出・レコード組み立て ===
        self.convert_grid(&grid, source_file)
    }

    /// 実体化済みの格子を変換する
    ///
    /// 空の格子は正常入力であり、レコード 0 件の結果を返す
    pub fn convert_grid(
        &self,
        grid: &Grid,
        source_file: Option<String>,
    ) -> ConvertResult<ConvertOutput> {
        let batch_id = Uuid::new_v4().to_string();

        debug!("段階 2: 型番検出・レコード組み立て");
        let records = self.mapper.map_grid(grid, &self.config)?;
        info!(
            batch_id = %batch_id,
            detected = records.len(),
            "レコード組み立て完了"
        );

        let summary = ConvertSummary {
            batch_id,
            source_file,
            total_rows: grid.len(),
            detected_parts: records.len(),
            panel_count: self.config.panel_count,
            converted_at: Utc::now(),
        };

        Ok(ConvertOutput { records, summary })
    }
}
