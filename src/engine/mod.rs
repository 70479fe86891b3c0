// ==========================================
// 部品リスト変換システム - エンジン層
// ==========================================
// 職責: 抽出・分類・数量計算の業務ルール実装
// 規約: 入力格子は読み取り専用、行間で可変状態を共有しない
// ==========================================

pub mod classifier;
pub mod manufacturer;
pub mod mapper;
pub mod part_number;
pub mod quantity;
pub mod reference;

// 中核エンジンの再エクスポート
pub use classifier::ComponentClassifier;
pub use manufacturer::ManufacturerDetector;
pub use mapper::TemplateMapper;
pub use part_number::PartNumberDetector;
pub use quantity::QuantityCalculator;
pub use reference::ReferenceDesignatorExtractor;
