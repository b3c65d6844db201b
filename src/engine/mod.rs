// ==========================================
// 试卷组卷系统 - 引擎层
// ==========================================
// 职责: 组卷与汇总规则, 不涉及文档解析
// 红线: 引擎只读题库, 不修改题目
// ==========================================

pub mod assembler;
pub mod canonical_path;
pub mod error;
pub mod summary;

// 重导出核心引擎
pub use assembler::{
    target_per_outcome, AssemblyContext, GreedyBalanceSelector, PaperAssembler, QuestionSelector,
};
pub use canonical_path::CanonicalPath;
pub use error::{AssemblyError, AssemblyResult};
pub use summary::SummaryAggregator;
