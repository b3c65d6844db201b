// ==========================================
// 组卷上下文
// ==========================================
// 单次 assemble 调用独占; 调用结束即丢弃
// 红线: used 只增不减, outcome_totals 各项只增不减
// ==========================================

use crate::domain::question::Question;
use std::collections::{BTreeMap, BTreeSet, HashSet};

#[derive(Debug, Clone)]
pub struct AssemblyContext {
    used: HashSet<u32>,
    outcome_totals: BTreeMap<String, u64>,
    target_marks_per_outcome: f64,
}

impl AssemblyContext {
    /// 以题库中出现的课程目标初始化累计分值（均为 0）
    pub fn new(outcomes: &BTreeSet<String>, target_marks_per_outcome: f64) -> Self {
        Self {
            used: HashSet::new(),
            outcome_totals: outcomes.iter().map(|co| (co.clone(), 0)).collect(),
            target_marks_per_outcome,
        }
    }

    pub fn target_marks_per_outcome(&self) -> f64 {
        self.target_marks_per_outcome
    }

    pub fn is_used(&self, question_id: u32) -> bool {
        self.used.contains(&question_id)
    }

    pub fn used_count(&self) -> usize {
        self.used.len()
    }

    /// 课程目标当前累计分值（未出现的课程目标为 0）
    pub fn outcome_total(&self, outcome_code: &str) -> u64 {
        self.outcome_totals.get(outcome_code).copied().unwrap_or(0)
    }

    pub fn outcome_totals(&self) -> &BTreeMap<String, u64> {
        &self.outcome_totals
    }

    /// 记录选中题目; 无课程目标代码的题目不计入累计分值
    pub fn record(&mut self, question: &Question) {
        self.used.insert(question.id);
        if let Some(total) = self.outcome_totals.get_mut(&question.outcome_code) {
            *total += u64::from(question.marks);
        }
    }

    pub fn into_outcome_totals(self) -> BTreeMap<String, u64> {
        self.outcome_totals
    }
}
