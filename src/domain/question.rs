// ==========================================
// 试卷组卷系统 - 题目与题库领域模型
// ==========================================
// 职责: 定义题目实体、题库（有序题目集合）
// 红线: 题目创建后不可变, id 在单次请求内唯一
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ==========================================
// Question - 题目
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// 题目ID（从 1 开始顺序分配）
    pub id: u32,

    /// 题干（换行已折叠为空格）
    pub text: String,

    /// 分值
    pub marks: u32,

    /// 课程目标代码（如 "CO1"，可能为空）
    pub outcome_code: String,

    /// 认知层级（RBT，如 "L2"）
    pub cognitive_level: String,
}

impl Question {
    /// 是否带有课程目标代码
    pub fn has_outcome(&self) -> bool {
        !self.outcome_code.is_empty()
    }
}

// ==========================================
// QuestionPool - 题库
// ==========================================
// 保持抽取顺序, 该顺序即组卷时的平局裁决顺序
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionPool {
    questions: Vec<Question>,
}

impl QuestionPool {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    pub fn get(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// 题库中出现过的全部课程目标代码（去重, 忽略空代码）
    pub fn distinct_outcomes(&self) -> BTreeSet<String> {
        self.questions
            .iter()
            .filter(|q| q.has_outcome())
            .map(|q| q.outcome_code.clone())
            .collect()
    }
}

impl From<Vec<Question>> for QuestionPool {
    fn from(questions: Vec<Question>) -> Self {
        Self::new(questions)
    }
}

impl<'a> IntoIterator for &'a QuestionPool {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}
