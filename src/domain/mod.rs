// ==========================================
// 试卷组卷系统 - 领域模型层
// ==========================================
// 职责: 定义题目、题库、题位规格、组卷结果与汇总报告
// 红线: 不含解析逻辑, 不含组卷算法
// ==========================================

pub mod outcome;
pub mod question;
pub mod report;
pub mod slot;

// 重导出核心类型
pub use outcome::{OutcomeDescription, OutcomeDescriptions};
pub use question::{Question, QuestionPool};
pub use report::{GeneratedPaper, LevelTotal, OutcomeReportEntry, PaperSummary};
pub use slot::{sub_item_label, AssembledPaper, AssembledSlot, SlotSpec, SubItem};
