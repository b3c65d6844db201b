// ==========================================
// 试卷组卷系统 - 表格分类器
// ==========================================
// 职责: 判定表格是否为课程目标描述表, 以及描述行的起始行
// 策略: 规则按优先级排列, 首个命中的规则生效
// 扩展: 新的文档版式通过 with_rule 追加规则, 不影响组卷逻辑
// ==========================================

use crate::config::ExtractionConfig;
use crate::importer::document::{cell_text, Table};

/// 表格类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    /// 课程目标描述表; start_row 为描述行起始下标
    OutcomeDescriptions { start_row: usize },
}

// ==========================================
// TableRule Trait
// ==========================================
pub trait TableRule: Send + Sync {
    /// 规则名（用于日志）
    fn name(&self) -> &'static str;

    /// 命中时返回表格类别
    fn classify(&self, table: &Table, config: &ExtractionConfig) -> Option<TableKind>;
}

// ==========================================
// HeaderKeywordRule - 表头关键字规则
// ==========================================
// 表头（小写）含 "outcome"/"cos" 等关键字; 表头行本身不是描述
pub struct HeaderKeywordRule;

impl TableRule for HeaderKeywordRule {
    fn name(&self) -> &'static str {
        "header_keyword"
    }

    fn classify(&self, table: &Table, config: &ExtractionConfig) -> Option<TableKind> {
        let header: String = table
            .header()?
            .iter()
            .map(|c| c.as_deref().unwrap_or(""))
            .collect::<String>()
            .to_lowercase();

        config
            .outcome_header_keywords
            .iter()
            .any(|kw| !kw.is_empty() && header.contains(&kw.to_lowercase()))
            .then_some(TableKind::OutcomeDescriptions { start_row: 1 })
    }
}

// ==========================================
// FirstColumnMarkerRule - 首列标记规则
// ==========================================
// 首列（大写）含课程目标标记; 无表头, 从第 0 行开始
pub struct FirstColumnMarkerRule;

impl TableRule for FirstColumnMarkerRule {
    fn name(&self) -> &'static str {
        "first_column_marker"
    }

    fn classify(&self, table: &Table, config: &ExtractionConfig) -> Option<TableKind> {
        let first_column: String = table
            .first_column()
            .map(|c| c.unwrap_or(""))
            .collect::<String>()
            .to_uppercase();

        first_column
            .contains(&config.outcome_marker.to_uppercase())
            .then_some(TableKind::OutcomeDescriptions { start_row: 0 })
    }
}

// ==========================================
// TableClassifier - 规则链
// ==========================================
pub struct TableClassifier {
    rules: Vec<Box<dyn TableRule>>,
}

impl Default for TableClassifier {
    fn default() -> Self {
        Self {
            rules: vec![Box::new(HeaderKeywordRule), Box::new(FirstColumnMarkerRule)],
        }
    }
}

impl TableClassifier {
    /// 不含任何规则的分类器
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// 追加规则（优先级最低）
    pub fn with_rule(mut self, rule: impl TableRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// 分类; 空表或首行少于 2 列的表不参与分类
    pub fn classify(&self, table: &Table, config: &ExtractionConfig) -> Option<TableKind> {
        let header = table.header()?;
        if header.len() < 2 {
            return None;
        }

        self.rules.iter().find_map(|rule| {
            let kind = rule.classify(table, config)?;
            tracing::debug!(rule = rule.name(), ?kind, "表格分类命中");
            Some(kind)
        })
    }
}

/// 规范化课程目标代码: 标记 + 首个单元格中的全部数字（"CO 3" → "CO3"）
pub(crate) fn normalize_outcome_code(raw: &str, marker: &str) -> Option<String> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    Some(format!("{}{}", marker, digits))
}

/// 描述行的两列文本; 少于两列返回 None
pub(crate) fn description_cells(row: &[Option<String>]) -> Option<(&str, &str)> {
    if row.len() < 2 {
        return None;
    }
    Some((cell_text(row.first()), cell_text(row.get(1))))
}
