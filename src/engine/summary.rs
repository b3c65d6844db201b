// ==========================================
// 试卷组卷系统 - 汇总引擎
// ==========================================
// 职责: 只遍历标准路径上的题位, 按课程目标/认知层级累计分值
// 输入: AssembledPaper + 课程目标描述表
// 输出: PaperSummary
// 说明: 课程目标汇总按描述表顺序, 分值为 0 的课程目标不列出
// 说明: 无描述的课程目标只出现在 outcome_totals 中
// ==========================================

use crate::domain::outcome::OutcomeDescriptions;
use crate::domain::report::{LevelTotal, OutcomeReportEntry, PaperSummary};
use crate::domain::slot::AssembledPaper;
use crate::engine::canonical_path::CanonicalPath;
use std::collections::BTreeMap;
use tracing::instrument;

// ==========================================
// SummaryAggregator - 汇总引擎
// ==========================================
pub struct SummaryAggregator {
    canonical_path: CanonicalPath,
}

impl Default for SummaryAggregator {
    fn default() -> Self {
        Self::new(CanonicalPath::default())
    }
}

impl SummaryAggregator {
    /// 构造函数
    ///
    /// # 参数
    /// - `canonical_path`: 与组卷目标计算相同的标准路径
    pub fn new(canonical_path: CanonicalPath) -> Self {
        Self { canonical_path }
    }

    /// 生成汇总报告
    ///
    /// # 参数
    /// - `paper`: 组卷结果
    /// - `descriptions`: 课程目标描述表（可为空）
    ///
    /// # 返回
    /// - PaperSummary: 课程目标汇总 + 认知层级汇总 + 最大偏差
    #[instrument(skip(self, paper, descriptions), fields(slots = paper.slots.len()))]
    pub fn summarize(
        &self,
        paper: &AssembledPaper,
        descriptions: &OutcomeDescriptions,
    ) -> PaperSummary {
        let mut outcome_totals: BTreeMap<String, u64> = BTreeMap::new();
        let mut level_report: Vec<LevelTotal> = Vec::new();

        let canonical_items = paper
            .slots
            .iter()
            .filter(|slot| self.canonical_path.includes(slot.position))
            .flat_map(|slot| slot.sub_items.iter());

        for item in canonical_items {
            let marks = u64::from(item.marks);
            if !item.outcome_code.is_empty() {
                *outcome_totals.entry(item.outcome_code.clone()).or_insert(0) += marks;
            }

            match level_report.iter_mut().find(|l| l.level == item.cognitive_level) {
                Some(entry) => entry.marks += marks,
                None => level_report.push(LevelTotal {
                    level: item.cognitive_level.clone(),
                    marks,
                }),
            }
        }

        let outcome_report: Vec<OutcomeReportEntry> = descriptions
            .iter()
            .filter_map(|d| {
                let marks = outcome_totals.get(&d.code).copied().unwrap_or(0);
                (marks > 0).then(|| OutcomeReportEntry {
                    code: d.code.clone(),
                    description: d.description.clone(),
                    marks,
                })
            })
            .collect();

        let max_deviation = self.max_deviation(paper, &outcome_totals);

        tracing::debug!(
            outcomes = outcome_report.len(),
            levels = level_report.len(),
            max_deviation,
            "汇总完成"
        );

        PaperSummary {
            outcome_report,
            level_report,
            outcome_totals,
            target_marks_per_outcome: paper.target_marks_per_outcome,
            max_deviation,
        }
    }

    /// 题库中各课程目标（标准路径分值）相对目标分值的最大偏差
    fn max_deviation(&self, paper: &AssembledPaper, canonical_totals: &BTreeMap<String, u64>) -> f64 {
        paper
            .outcome_totals
            .keys()
            .map(|code| {
                let actual = canonical_totals.get(code).copied().unwrap_or(0);
                (actual as f64 - paper.target_marks_per_outcome).abs()
            })
            .fold(0.0, f64::max)
    }
}
