// ==========================================
// 部品リスト変換システム - GridSource インタフェース
// ==========================================
// 職責: ファイル → テキスト格子 変換の境界定義（実装は含まない）
// 契約: 格子は完全実体化済み、文字コードは解決済み、セルはトリム済み
// ==========================================

use crate::domain::record::Grid;
use crate::error::ConvertResult;
use std::path::Path;

// ==========================================
// GridParser Trait
// ==========================================
// 用途: 入力ファイル解析インタフェース
// 実装者: CsvGridParser, ExcelGridParser
pub trait GridParser: Send + Sync {
    /// ファイルを正規化テキスト格子へ解析する
    ///
    /// # 契約
    /// - 複数シート/ページは1つの行列に連結する
    /// - 完全空白行は除去する
    /// - 欠損セルは空文字列とする
    ///
    /// # 戻り値
    /// - Ok(Grid): 行列（空の格子も正常）
    /// - Err: ファイル読み込みエラー、形式エラー
    fn parse_to_grid(&self, file_path: &Path) -> ConvertResult<Grid>;
}
