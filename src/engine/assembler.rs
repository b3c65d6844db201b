// ==========================================
// 试卷组卷系统 - 组卷引擎
// ==========================================
// 职责: 按题位规格从题库中选题, 使各课程目标累计分值趋近均分
// 输入: 题库 + 题位规格
// 输出: AssembledPaper / AssemblyError
// 红线: 同一题目不可重复使用; 首个无法满足的小题即中止整卷
// 红线: 相同输入必须产生相同输出（无随机, 平局按题库顺序）
// ==========================================
// 注: 贪心一步前瞻, 结果与题位顺序相关, 非全局最优
// ==========================================

mod context;
mod core;
mod selector;


pub use self::core::{target_per_outcome, PaperAssembler};
pub use context::AssemblyContext;
pub use selector::{GreedyBalanceSelector, QuestionSelector};
