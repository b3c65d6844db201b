// ==========================================
// 试卷组卷系统 - 核心库
// ==========================================
// 职责: 题库文档解析 → 课程目标均衡组卷 → 分值汇总
// 技术栈: Rust + calamine/csv + serde
// 系统定位: 组卷引擎（排版渲染由外部负责）
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 题目、题位与报告
pub mod domain;

// 引擎层 - 组卷与汇总规则
pub mod engine;

// 导入层 - 题库文档
pub mod importer;

// 配置层 - 组卷配置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 请求入口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    AssembledPaper, AssembledSlot, GeneratedPaper, LevelTotal, OutcomeDescriptions,
    OutcomeReportEntry, PaperSummary, Question, QuestionPool, SlotSpec, SubItem,
};

// 引擎
pub use engine::{AssemblyError, CanonicalPath, PaperAssembler, SummaryAggregator};

// 导入
pub use importer::{Document, ExtractionResult, QuestionBankExtractor};

// 配置
pub use config::{AssemblyConfig, ConfigManager};

// API
pub use api::{ApiError, ApiResult, PaperApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "试卷组卷系统";
