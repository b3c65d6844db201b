// ==========================================
// 试卷组卷系统 - 题库构建器
// ==========================================
// 职责: 抽取出的表格行 → 统一的 Question 记录, 顺序分配 id（从 1 开始）
// 规则:
// 1) 行至少 min_question_cells 列, 且第 0 列非空
// 2) 第 1 列为题干（换行折叠为空格, 去首尾空白, 空题干跳过）
// 3) 第 2 列为分值（须为非负整数, 否则跳过）
// 4) 第 3 列为课程目标代码（去除全部空白）
// 5) 第 4 列为认知层级（去首尾空白）
// 说明: 被拒绝的行只计数与记录 debug 日志, 不报错
// ==========================================

use crate::domain::question::{Question, QuestionPool};
use crate::importer::document::cell_text;

pub struct QuestionPoolBuilder {
    min_cells: usize,
    next_id: u32,
    questions: Vec<Question>,
    skipped_rows: usize,
}

impl QuestionPoolBuilder {
    /// 构造函数
    ///
    /// # 参数
    /// - `min_cells`: 题目行最少单元格数（低于 5 时按 5 处理, 因为需要读取第 0~4 列）
    pub fn new(min_cells: usize) -> Self {
        Self {
            min_cells: min_cells.max(5),
            next_id: 1,
            questions: Vec::new(),
            skipped_rows: 0,
        }
    }

    /// 尝试接收一行; 返回是否被接收
    pub fn push_row(&mut self, row: &[Option<String>]) -> bool {
        match self.parse_row(row) {
            Some((text, marks, outcome_code, cognitive_level)) => {
                self.questions.push(Question {
                    id: self.next_id,
                    text,
                    marks,
                    outcome_code,
                    cognitive_level,
                });
                self.next_id += 1;
                true
            }
            None => false,
        }
    }

    fn parse_row(&mut self, row: &[Option<String>]) -> Option<(String, u32, String, String)> {
        // 列数不足或首列为空: 不是题目行, 不计入跳过数
        if row.len() < self.min_cells || row[0].is_none() {
            return None;
        }

        let text = collapse_newlines(cell_text(row.get(1)));
        let marks_raw = cell_text(row.get(2)).trim();

        let Some(marks) = parse_marks(marks_raw) else {
            tracing::debug!(marks = marks_raw, "分值无法解析, 跳过该行");
            self.skipped_rows += 1;
            return None;
        };
        if text.is_empty() {
            tracing::debug!("题干为空, 跳过该行");
            self.skipped_rows += 1;
            return None;
        }

        let outcome_code: String = cell_text(row.get(3))
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        let cognitive_level = cell_text(row.get(4)).trim().to_string();

        Some((text, marks, outcome_code, cognitive_level))
    }

    /// 已接收的题目数量
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// 形似题目行但被拒绝的行数（分值非法或题干为空）
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    pub fn build(self) -> QuestionPool {
        QuestionPool::new(self.questions)
    }
}

/// 分值: 仅接受纯 ASCII 数字
fn parse_marks(raw: &str) -> Option<u32> {
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

fn collapse_newlines(raw: &str) -> String {
    raw.replace("\r\n", " ")
        .replace(['\n', '\r'], " ")
        .trim()
        .to_string()
}
