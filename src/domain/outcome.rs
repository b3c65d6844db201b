// ==========================================
// 试卷组卷系统 - 课程目标描述
// ==========================================
// 职责: 课程目标代码 → 描述文本的有序映射
// 说明: 保持首次插入顺序; 重复代码覆盖描述但不改变位置
// ==========================================

use serde::{Deserialize, Serialize};

/// 单条课程目标描述
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeDescription {
    pub code: String,
    pub description: String,
}

/// 课程目标描述表（可为空）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutcomeDescriptions {
    entries: Vec<OutcomeDescription>,
}

impl OutcomeDescriptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入或覆盖
    pub fn insert(&mut self, code: impl Into<String>, description: impl Into<String>) {
        let code = code.into();
        let description = description.into();

        match self.entries.iter_mut().find(|e| e.code == code) {
            Some(existing) => existing.description = description,
            None => self.entries.push(OutcomeDescription { code, description }),
        }
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.code == code)
            .map(|e| e.description.as_str())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OutcomeDescription> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<C: Into<String>, D: Into<String>> FromIterator<(C, D)> for OutcomeDescriptions {
    fn from_iter<I: IntoIterator<Item = (C, D)>>(iter: I) -> Self {
        let mut descriptions = Self::new();
        for (code, description) in iter {
            descriptions.insert(code, description);
        }
        descriptions
    }
}
