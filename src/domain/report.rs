// ==========================================
// 试卷组卷系统 - 汇总报告
// ==========================================
// 职责: 标准路径上的课程目标/认知层级分值汇总, 交给外部渲染方
// ==========================================

use crate::domain::slot::AssembledPaper;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// 课程目标汇总行（仅含有描述且分值 > 0 的课程目标）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeReportEntry {
    pub code: String,
    pub description: String,
    pub marks: u64,
}

/// 认知层级汇总行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelTotal {
    pub level: String,
    pub marks: u64,
}

// ==========================================
// PaperSummary - 汇总结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaperSummary {
    /// 课程目标汇总（按描述表顺序）
    pub outcome_report: Vec<OutcomeReportEntry>,

    /// 认知层级汇总（按首次出现顺序）
    pub level_report: Vec<LevelTotal>,

    /// 标准路径上全部课程目标分值（含无描述的课程目标）
    pub outcome_totals: BTreeMap<String, u64>,

    /// 每个课程目标的目标分值
    pub target_marks_per_outcome: f64,

    /// 最大偏差 |实际 - 目标|
    pub max_deviation: f64,
}

impl PaperSummary {
    pub fn level_marks(&self, level: &str) -> Option<u64> {
        self.level_report
            .iter()
            .find(|l| l.level == level)
            .map(|l| l.marks)
    }

    pub fn outcome_marks(&self, code: &str) -> Option<u64> {
        self.outcome_totals.get(code).copied()
    }
}

// ==========================================
// GeneratedPaper - 单次请求的完整输出
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedPaper {
    /// 组卷运行ID
    pub run_id: Uuid,

    pub generated_at: DateTime<Utc>,

    /// 题库题目数量
    pub question_count: usize,

    pub paper: AssembledPaper,

    pub summary: PaperSummary,
}
