// ==========================================
// 部品リスト変換システム - ファイル解析器実装
// ==========================================
// 対応: Excel (.xlsx/.xls) / CSV (.csv)
// 出力: 列構造不明の正規化テキスト格子（ヘッダ扱いなし）
// ==========================================

use crate::domain::record::Grid;
use crate::error::{ConvertError, ConvertResult};
use crate::importer::grid_source::GridParser;
use calamine::{open_workbook, Reader, Xlsx};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

// ==========================================
// CSV Parser 実装
// ==========================================
pub struct CsvGridParser;

impl GridParser for CsvGridParser {
    fn parse_to_grid(&self, file_path: &Path) -> ConvertResult<Grid> {
        let path = file_path;

        // ファイル存在チェック
        if !path.exists() {
            return Err(ConvertError::FileNotFound(path.display().to_string()));
        }

        // 拡張子チェック
        if let Some(ext) = path.extension() {
            if ext != "csv" {
                return Err(ConvertError::UnsupportedFormat(
                    ext.to_string_lossy().to_string(),
                ));
            }
        }

        // CSV を開く（列構造不明のためヘッダ行として扱わない）
        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true) // 行ごとの列数不一致を許容
            .from_reader(file);

        let mut grid = Vec::new();
        for result in reader.records() {
            let record = result?;
            let row: Vec<String> = record.iter().map(|v| v.trim().to_string()).collect();

            // 完全空白行は除去
            if row.iter().all(|v| v.is_empty()) {
                continue;
            }

            grid.push(row);
        }

        Ok(grid)
    }
}

// ==========================================
// Excel Parser 実装
// ==========================================
pub struct ExcelGridParser;

impl GridParser for ExcelGridParser {
    fn parse_to_grid(&self, file_path: &Path) -> ConvertResult<Grid> {
        let path = file_path;

        // ファイル存在チェック
        if !path.exists() {
            return Err(ConvertError::FileNotFound(path.display().to_string()));
        }

        // 拡張子チェック
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if ext != "xlsx" && ext != "xls" {
            return Err(ConvertError::UnsupportedFormat(ext.to_string()));
        }

        // ワークブックを開く
        let mut workbook: Xlsx<_> = open_workbook(path)?;

        // 全シートを1つの行列へ連結する（シート順）
        let sheet_names = workbook.sheet_names().to_owned();
        let mut grid = Vec::new();

        for sheet_name in sheet_names {
            let range = workbook
                .worksheet_range(&sheet_name)
                .map_err(|e| ConvertError::ExcelParseError(e.to_string()))?;

            for data_row in range.rows() {
                let row: Vec<String> = data_row
                    .iter()
                    .map(|cell| cell.to_string().trim().to_string())
                    .collect();

                // 完全空白行は除去
                if row.iter().all(|v| v.is_empty()) {
                    continue;
                }

                grid.push(row);
            }
        }

        Ok(grid)
    }
}

// ==========================================
// 汎用ファイル解析器（拡張子で自動選択）
// ==========================================
pub struct UniversalGridParser;

impl UniversalGridParser {
    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> ConvertResult<Grid> {
        let path = file_path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => CsvGridParser.parse_to_grid(path),
            "xlsx" | "xls" => ExcelGridParser.parse_to_grid(path),
            _ => Err(ConvertError::UnsupportedFormat(ext)),
        }
    }
}
