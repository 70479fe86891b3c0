// ==========================================
// PartsListConverter E2E テスト
// ==========================================
// 検証対象: ファイル入力から正規化レコード出力までの全行程
// ==========================================

use parts_list_converter::logging;
use parts_list_converter::{ConvertConfig, ConvertError, PartsListConverter};
use std::io::Write;
use tempfile::Builder;

fn write_csv(content: &str) -> tempfile::NamedTempFile {
    let mut temp_file = Builder::new().suffix(".csv").tempfile().unwrap();
    temp_file.write_all(content.as_bytes()).unwrap();
    temp_file
}

#[test]
fn test_convert_csv_file_end_to_end() {
    logging::init_test();

    let temp_file = write_csv(
        "Item,Reference,Manufacturer\n\
         RK73B2ATTD1002F,\"R1,R5\",KOA\n\
         ATmega328P-PU,U1,Microchip\n\
         ,,\n\
         BAT54S,D1,Vishay\n",
    );

    let converter = PartsListConverter::new(ConvertConfig::default()).unwrap();
    let output = converter.convert_file(temp_file.path()).unwrap();

    // ラベル行と空白行はレコードを生成しない
    assert_eq!(output.records.len(), 3);
    assert_eq!(output.summary.total_rows, 4);
    assert_eq!(output.summary.detected_parts, 3);
    assert_eq!(output.summary.panel_count, 8);

    let first = &output.records[0];
    assert_eq!(first.no, 1);
    assert_eq!(first.part_number, "RK73B2ATTD1002F");
    assert_eq!(first.reference_designators, "R1,R5");
    assert_eq!(first.manufacturer, "KOA");
    assert_eq!(first.display_name, "チップ抵抗");

    let second = &output.records[1];
    assert_eq!(second.part_number, "ATmega328P-PU");
    assert_eq!(second.display_name, "IC");

    let third = &output.records[2];
    assert_eq!(third.part_number, "BAT54S");
    assert_eq!(third.reference_designators, "D1");
    assert_eq!(third.display_name, "ダイオード");
}

#[test]
fn test_convert_missing_file_fails() {
    logging::init_test();

    let converter = PartsListConverter::new(ConvertConfig::default()).unwrap();
    let result = converter.convert_file("does_not_exist.csv");

    assert!(matches!(result, Err(ConvertError::FileNotFound(_))));
}

#[test]
fn test_convert_unsupported_format_fails() {
    logging::init_test();

    let converter = PartsListConverter::new(ConvertConfig::default()).unwrap();
    let result = converter.convert_file("parts_list.pdf");

    assert!(matches!(result, Err(ConvertError::UnsupportedFormat(_))));
}

#[test]
fn test_convert_empty_csv_yields_zero_records() {
    logging::init_test();

    let temp_file = write_csv("");
    let converter = PartsListConverter::new(ConvertConfig::default()).unwrap();
    let output = converter.convert_file(temp_file.path()).unwrap();

    assert!(output.records.is_empty());
    assert_eq!(output.summary.total_rows, 0);
}

#[test]
fn test_panel_count_flows_into_quantities() {
    logging::init_test();

    let refs = (1..=16).map(|i| format!("R{i}")).collect::<Vec<_>>().join(",");
    let temp_file = write_csv(&format!("RK73B2ATTD1002F,\"{refs}\",KOA\n"));

    let converter = PartsListConverter::new(ConvertConfig::new(4).unwrap()).unwrap();
    let output = converter.convert_file(temp_file.path()).unwrap();

    let record = &output.records[0];
    assert_eq!(record.ref_count, 16);
    // 16箇所 / パネル4枚 = 1枚あたり4個
    assert_eq!(record.qty_per_unit, 4);
    assert_eq!(record.qty_total, 16);
}
