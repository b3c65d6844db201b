// ==========================================
// 试卷组卷系统 - 引擎层错误类型
// ==========================================

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssemblyError {
    #[error("题库为空, 无法组卷")]
    EmptyPool,

    /// 第 position 题第 sub_item 小题（均从 1 开始）找不到未使用的 marks 分题目
    #[error("第 {position} 题第 {sub_item} 小题: 找不到未使用的 {marks} 分题目")]
    UnsatisfiableSlot {
        position: usize,
        sub_item: usize,
        marks: u32,
    },
}

pub type AssemblyResult<T> = Result<T, AssemblyError>;
