// ==========================================
// 试卷组卷系统 - 导入层
// ==========================================
// 职责: 题库文档 → 题库 + 课程目标描述表
// 支持: Excel, CSV, 预抽取 JSON
// ==========================================

// 模块声明
pub mod classifier;
pub mod document;
pub mod error;
pub mod extractor;
pub mod file_parser;
pub mod pool_builder;

// 重导出核心类型
pub use classifier::{FirstColumnMarkerRule, HeaderKeywordRule, TableClassifier, TableKind, TableRule};
pub use document::{Document, Page, Table};
pub use error::{ImportError, ImportResult};
pub use extractor::{ExtractionResult, QuestionBankExtractor};
pub use file_parser::{
    CsvDocumentParser, DocumentParser, ExcelDocumentParser, JsonDocumentParser,
    UniversalDocumentParser,
};
pub use pool_builder::QuestionPoolBuilder;
