// ==========================================
// 试卷组卷系统 - 组卷配置项
// ==========================================
// 职责: 组卷与题库抽取的全部可调参数
// 默认值: 与常见 6 题位、二选一布局的题库一致
// ==========================================

use crate::engine::canonical_path::CanonicalPath;
use serde::{Deserialize, Serialize};

// ==========================================
// AssemblyConfig - 顶层配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblyConfig {
    /// 最大题位数量
    pub max_positions: usize,

    /// 标准路径（目标分值计算与汇总共用）
    pub canonical_path: CanonicalPath,

    /// 题库抽取参数
    pub extraction: ExtractionConfig,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            max_positions: 6,
            canonical_path: CanonicalPath::default(),
            extraction: ExtractionConfig::default(),
        }
    }
}

// ==========================================
// ExtractionConfig - 题库抽取参数
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// 课程目标代码标记（首列大写后包含该标记即视为课程目标表）
    pub outcome_marker: String,

    /// 表头关键字（小写匹配）
    pub outcome_header_keywords: Vec<String>,

    /// 描述文本最小长度（严格大于才接受）
    pub min_description_len: usize,

    /// 题目行最少单元格数
    pub min_question_cells: usize,

    /// 题目表跳过的表头行数
    pub question_header_rows: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            outcome_marker: "CO".to_string(),
            outcome_header_keywords: vec!["outcome".to_string(), "cos".to_string()],
            min_description_len: 10,
            min_question_cells: 5,
            question_header_rows: 1,
        }
    }
}
