// ==========================================
// 部品リスト変換システム - CLI 主入口
// ==========================================
// 用途: 入力ファイル1件を変換し、正規化レコードを CSV/JSON で出力する
// 方針: 業務ロジックは持たない（ライブラリ呼び出しのみ）
// ==========================================

use anyhow::Context;
use clap::{Parser, ValueEnum};
use parts_list_converter::{ConvertConfig, ConvertOutput, PartsListConverter};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "parts-list-converter")]
#[command(version)]
#[command(about = "部品リスト変換システム - 部品表の自動抽出・正規化", long_about = None)]
struct Cli {
    /// 入力ファイル（.xlsx/.xls/.csv）
    input: PathBuf,

    /// パネル枚数（数量計算に使用、1 以上）
    #[arg(short, long, default_value_t = 8)]
    panel_count: u32,

    /// 出力先ファイル（省略時は標準出力）
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// 出力形式
    #[arg(short, long, value_enum, default_value = "csv")]
    format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

fn main() -> anyhow::Result<()> {
    parts_list_converter::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", parts_list_converter::APP_NAME);
    tracing::info!("システムバージョン: {}", parts_list_converter::VERSION);
    tracing::info!("==================================================");

    let cli = Cli::parse();

    let config = ConvertConfig::new(cli.panel_count)?;
    let converter = PartsListConverter::new(config)?;

    let output = converter
        .convert_file(&cli.input)
        .with_context(|| format!("変換に失敗しました: {}", cli.input.display()))?;

    tracing::info!(
        "部品数: {}点 | パネル枚数: {}枚",
        output.summary.detected_parts,
        output.summary.panel_count
    );

    let rendered = match cli.format {
        OutputFormat::Csv => render_csv(&output)?,
        OutputFormat::Json => serde_json::to_string_pretty(&output)?,
    };

    match cli.output {
        Some(path) => {
            std::fs::write(&path, rendered)
                .with_context(|| format!("出力書き込みに失敗しました: {}", path.display()))?;
            tracing::info!("出力完了: {}", path.display());
        }
        None => {
            std::io::stdout().write_all(rendered.as_bytes())?;
        }
    }

    Ok(())
}

/// レコード列を部品リスト形式の CSV 文字列へ整形する
fn render_csv(output: &ConvertOutput) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record([
        "No",
        "メーカー",
        "品名",
        "電子部品型番",
        "配置記号",
        "個数",
        "実装数",
        "合計",
        "実装/検査",
        "部品型番",
    ])?;

    for record in &output.records {
        writer.write_record([
            record.no.to_string(),
            record.manufacturer.clone(),
            record.display_name.clone(),
            record.part_number.clone(),
            record.reference_designators.clone(),
            record.ref_count.to_string(),
            record.qty_per_unit.to_string(),
            record.qty_total.to_string(),
            record.assembly_flag.label().to_string(),
            record.package_type.label().to_string(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| anyhow::anyhow!(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}
