use crate::domain::question::{Question, QuestionPool};
use crate::domain::slot::{sub_item_label, AssembledPaper, AssembledSlot, SlotSpec, SubItem};
use crate::engine::assembler::context::AssemblyContext;
use crate::engine::assembler::selector::{GreedyBalanceSelector, QuestionSelector};
use crate::engine::canonical_path::CanonicalPath;
use crate::engine::error::{AssemblyError, AssemblyResult};
use tracing::instrument;

// ==========================================
// PaperAssembler - 组卷引擎
// ==========================================
pub struct PaperAssembler {
    canonical_path: CanonicalPath,
    selector: Box<dyn QuestionSelector>,
}

impl Default for PaperAssembler {
    fn default() -> Self {
        Self::new(CanonicalPath::default())
    }
}

impl PaperAssembler {
    /// 构造函数（默认贪心选题策略）
    pub fn new(canonical_path: CanonicalPath) -> Self {
        Self::with_selector(canonical_path, GreedyBalanceSelector)
    }

    /// 使用自定义选题策略
    pub fn with_selector(canonical_path: CanonicalPath, selector: impl QuestionSelector + 'static) -> Self {
        Self {
            canonical_path,
            selector: Box::new(selector),
        }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 整卷组装
    ///
    /// 规则:
    /// 1) 目标分值 = 标准路径卷面总分 / 题库课程目标数（无课程目标时为 0）
    /// 2) 按题位顺序、小题顺序逐一选题, 不出题的题位跳过
    /// 3) 候选 = 分值相等且未使用的题目（保持题库顺序）
    /// 4) 候选为空立即失败, 不返回部分试卷
    ///
    /// # 返回
    /// - Ok(AssembledPaper): 组卷结果
    /// - Err(AssemblyError): 题库为空 / 某小题无可用题目
    #[instrument(skip(self, pool, spec), fields(
        pool_size = pool.len(),
        positions = spec.len()
    ))]
    pub fn assemble(&self, pool: &QuestionPool, spec: &SlotSpec) -> AssemblyResult<AssembledPaper> {
        if pool.is_empty() {
            return Err(AssemblyError::EmptyPool);
        }

        let outcomes = pool.distinct_outcomes();
        let total_paper_marks = self.canonical_total(spec);
        let target_marks_per_outcome = target_per_outcome(total_paper_marks, outcomes.len());

        tracing::debug!(
            total_paper_marks,
            outcomes = outcomes.len(),
            target_marks_per_outcome,
            "目标分值计算完成"
        );

        let mut ctx = AssemblyContext::new(&outcomes, target_marks_per_outcome);
        let mut slots = Vec::new();

        for (position, marks_list) in spec.present() {
            let slot = self.fill_slot(pool, position, marks_list, &mut ctx)?;
            tracing::debug!(
                position,
                total_marks = slot.total_marks,
                questions = ?slot.question_ids().collect::<Vec<_>>(),
                "题位组装完成"
            );
            slots.push(slot);
        }

        tracing::info!(
            slots = slots.len(),
            used_questions = ctx.used_count(),
            "组卷完成"
        );

        Ok(AssembledPaper {
            slots,
            total_paper_marks,
            target_marks_per_outcome,
            outcome_totals: ctx.into_outcome_totals(),
        })
    }

    /// 标准路径上的卷面总分
    pub fn canonical_total(&self, spec: &SlotSpec) -> u64 {
        spec.present()
            .filter(|(position, _)| self.canonical_path.includes(*position))
            .flat_map(|(_, marks)| marks.iter().map(|&m| u64::from(m)))
            .sum()
    }

    fn fill_slot(
        &self,
        pool: &QuestionPool,
        position: usize,
        marks_list: &[u32],
        ctx: &mut AssemblyContext,
    ) -> AssemblyResult<AssembledSlot> {
        let mut slot = AssembledSlot::new(position);

        for (sub_index, &marks) in marks_list.iter().enumerate() {
            let eligible: Vec<&Question> = pool
                .iter()
                .filter(|q| q.marks == marks && !ctx.is_used(q.id))
                .collect();

            let unsatisfiable = AssemblyError::UnsatisfiableSlot {
                position,
                sub_item: sub_index + 1,
                marks,
            };
            let selected = self.selector.select(&eligible, ctx).ok_or_else(|| {
                tracing::warn!(position, sub_item = sub_index + 1, marks, "无可用题目, 组卷中止");
                unsatisfiable
            })?;

            ctx.record(selected);
            slot.push(SubItem {
                label: sub_item_label(sub_index),
                question_id: selected.id,
                question_text: selected.text.clone(),
                marks: selected.marks,
                outcome_code: selected.outcome_code.clone(),
                cognitive_level: selected.cognitive_level.clone(),
            });
        }

        Ok(slot)
    }
}

/// 每个课程目标的目标分值; 无课程目标时为 0
pub fn target_per_outcome(total_paper_marks: u64, outcome_count: usize) -> f64 {
    if outcome_count == 0 {
        return 0.0;
    }
    total_paper_marks as f64 / outcome_count as f64
}
