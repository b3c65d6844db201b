// ==========================================
// 选题策略
// ==========================================
// 默认: 一步前瞻贪心
//   cost = |当前该课程目标累计分值 + 题目分值 - 目标分值|
//   取 cost 最小者, 平局按题库顺序取先出现者
// 替换: 全局最优分配器可实现同一 Trait 接入, 须保持题位顺序与确定性
// ==========================================

use crate::domain::question::Question;
use crate::engine::assembler::context::AssemblyContext;

pub trait QuestionSelector: Send + Sync {
    /// 从候选题目（已按题库顺序过滤为同分值、未使用）中选出一道
    fn select<'a>(&self, eligible: &[&'a Question], ctx: &AssemblyContext) -> Option<&'a Question>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyBalanceSelector;

impl GreedyBalanceSelector {
    pub fn cost(question: &Question, ctx: &AssemblyContext) -> f64 {
        let future = (ctx.outcome_total(&question.outcome_code) + u64::from(question.marks)) as f64;
        (future - ctx.target_marks_per_outcome()).abs()
    }
}

impl QuestionSelector for GreedyBalanceSelector {
    fn select<'a>(&self, eligible: &[&'a Question], ctx: &AssemblyContext) -> Option<&'a Question> {
        // min_by 在多个最小值时返回第一个, 即题库顺序
        eligible
            .iter()
            .copied()
            .min_by(|a, b| Self::cost(a, ctx).total_cmp(&Self::cost(b, ctx)))
    }
}
