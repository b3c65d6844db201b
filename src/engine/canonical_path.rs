// ==========================================
// 试卷组卷系统 - 标准路径
// ==========================================
// 职责: 在"二选一"卷面布局中选出一条完整作答路径
// 默认: 从第 1 题起每隔一题（1, 3, 5 ...）
// 说明: 目标分值计算与汇总统计共用同一规则, 均按绝对题位号判断
// ==========================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalPath {
    /// 起始题位（从 1 开始）
    pub start: usize,

    /// 步长（1 表示全部题位都计入）
    pub stride: usize,
}

impl Default for CanonicalPath {
    fn default() -> Self {
        Self { start: 1, stride: 2 }
    }
}

impl CanonicalPath {
    pub fn new(start: usize, stride: usize) -> Self {
        Self { start, stride }
    }

    /// 所有题位都计入（无二选一布局）
    pub fn every_position() -> Self {
        Self { start: 1, stride: 1 }
    }

    /// 题位是否位于标准路径上
    pub fn includes(&self, position: usize) -> bool {
        if self.stride == 0 || position < self.start {
            return false;
        }
        (position - self.start) % self.stride == 0
    }

    /// 仅当 start >= 1 且 stride >= 1 时有效
    pub fn is_valid(&self) -> bool {
        self.start >= 1 && self.stride >= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selects_odd_positions() {
        let path = CanonicalPath::default();
        let selected: Vec<usize> = (1..=6).filter(|p| path.includes(*p)).collect();
        assert_eq!(selected, vec![1, 3, 5]);
    }

    #[test]
    fn test_custom_start_and_stride() {
        let path = CanonicalPath::new(2, 3);
        let selected: Vec<usize> = (1..=9).filter(|p| path.includes(*p)).collect();
        assert_eq!(selected, vec![2, 5, 8]);

        let all = CanonicalPath::every_position();
        assert!((1..=6).all(|p| all.includes(p)));
    }

    #[test]
    fn test_zero_stride_is_invalid() {
        let path = CanonicalPath::new(1, 0);
        assert!(!path.is_valid());
        assert!(!path.includes(1));
    }
}
