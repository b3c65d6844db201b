// ==========================================
// 试卷组卷系统 - 题位规格与组卷结果
// ==========================================
// 职责: 定义题位规格 SlotSpec、已组装题位 AssembledSlot、整卷 AssembledPaper
// 红线: 同一题目 id 在整卷中至多出现一次
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

// ==========================================
// SlotSpec - 题位规格
// ==========================================
// 每个题位: None = 该题位不出题; Some(分值列表) = 各小题所需分值
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSpec {
    positions: Vec<Option<Vec<u32>>>,
}

impl SlotSpec {
    /// 构造函数
    ///
    /// 空分值列表视为该题位不出题
    pub fn new(positions: Vec<Option<Vec<u32>>>) -> Self {
        let positions = positions
            .into_iter()
            .map(|p| p.filter(|marks| !marks.is_empty()))
            .collect();
        Self { positions }
    }

    /// 题位数量（含不出题的题位）
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// 指定题位（从 1 开始）的分值列表
    pub fn marks_at(&self, position: usize) -> Option<&[u32]> {
        position
            .checked_sub(1)
            .and_then(|idx| self.positions.get(idx))
            .and_then(|p| p.as_deref())
    }

    /// 遍历全部题位: (题位号, 分值列表)
    pub fn iter(&self) -> impl Iterator<Item = (usize, Option<&[u32]>)> {
        self.positions
            .iter()
            .enumerate()
            .map(|(idx, p)| (idx + 1, p.as_deref()))
    }

    /// 仅遍历出题的题位
    pub fn present(&self) -> impl Iterator<Item = (usize, &[u32])> {
        self.iter().filter_map(|(pos, marks)| marks.map(|m| (pos, m)))
    }
}

// ==========================================
// SubItem - 小题
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubItem {
    /// 小题标签（a, b, c, ...）
    pub label: String,

    /// 来源题目ID
    pub question_id: u32,

    pub question_text: String,
    pub marks: u32,
    pub outcome_code: String,
    pub cognitive_level: String,
}

// ==========================================
// AssembledSlot - 已组装题位
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssembledSlot {
    /// 题位号（从 1 开始）
    pub position: usize,

    pub sub_items: Vec<SubItem>,

    /// 题位总分
    pub total_marks: u64,

    /// 本题位涉及的课程目标
    pub outcomes_used: BTreeSet<String>,

    /// 本题位涉及的认知层级
    pub levels_used: BTreeSet<String>,
}

impl AssembledSlot {
    pub fn new(position: usize) -> Self {
        Self {
            position,
            sub_items: Vec::new(),
            total_marks: 0,
            outcomes_used: BTreeSet::new(),
            levels_used: BTreeSet::new(),
        }
    }

    /// 追加小题并更新汇总字段
    pub fn push(&mut self, item: SubItem) {
        self.total_marks += u64::from(item.marks);
        self.outcomes_used.insert(item.outcome_code.clone());
        self.levels_used.insert(item.cognitive_level.clone());
        self.sub_items.push(item);
    }

    pub fn question_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.sub_items.iter().map(|s| s.question_id)
    }
}

// ==========================================
// AssembledPaper - 整卷组装结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssembledPaper {
    /// 按题位顺序排列（不出题的题位不出现）
    pub slots: Vec<AssembledSlot>,

    /// 标准路径上的卷面总分
    pub total_paper_marks: u64,

    /// 每个课程目标的目标分值
    pub target_marks_per_outcome: f64,

    /// 组卷结束时各课程目标累计分值（全部题位）
    pub outcome_totals: BTreeMap<String, u64>,
}

impl AssembledPaper {
    pub fn slot(&self, position: usize) -> Option<&AssembledSlot> {
        self.slots.iter().find(|s| s.position == position)
    }

    /// 整卷使用的全部题目ID（按出现顺序）
    pub fn question_ids(&self) -> Vec<u32> {
        self.slots.iter().flat_map(|s| s.question_ids()).collect()
    }
}

/// 小题标签: 0 → "a", 25 → "z", 26 → "aa", 27 → "ab" ...
pub fn sub_item_label(index: usize) -> String {
    let mut n = index + 1;
    let mut label = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        label.push(b'a' + rem as u8);
        n = (n - 1) / 26;
    }
    label.reverse();
    String::from_utf8(label).unwrap_or_default()
}
