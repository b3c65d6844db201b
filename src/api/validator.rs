// ==========================================
// 试卷组卷系统 - 题位规格校验器
// ==========================================
// 职责: 请求中的原始题位字符串 → SlotSpec
// 规则:
// 1) 每个题位为逗号分隔的非负整数, 空白项忽略
// 2) 缺失或空白字符串 → 该题位不出题
// 3) 任一非整数项 → MalformedSlotSpec（带题位号）
// 4) 题位数超过 max_positions → 第一个超出的题位报 MalformedSlotSpec
// 红线: 校验在任何文档解析之前完成
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::slot::SlotSpec;

// ==========================================
// SlotSpecValidator - 题位规格校验器
// ==========================================
pub struct SlotSpecValidator {
    max_positions: usize,
}

impl Default for SlotSpecValidator {
    fn default() -> Self {
        Self::new(6)
    }
}

impl SlotSpecValidator {
    pub fn new(max_positions: usize) -> Self {
        Self { max_positions }
    }

    pub fn max_positions(&self) -> usize {
        self.max_positions
    }

    /// 校验原始题位字符串
    ///
    /// # 参数
    /// - `raw_positions`: 第 i 项对应第 i+1 题; None 表示未填写
    ///
    /// # 返回
    /// - Ok(SlotSpec): 长度与输入一致
    /// - Err(ApiError::MalformedSlotSpec): 首个非法题位
    pub fn validate<S: AsRef<str>>(&self, raw_positions: &[Option<S>]) -> ApiResult<SlotSpec> {
        if raw_positions.len() > self.max_positions {
            let position = self.max_positions + 1;
            let raw = raw_positions[self.max_positions]
                .as_ref()
                .map(|s| str::to_string(s.as_ref()))
                .unwrap_or_default();
            tracing::warn!(position, max_positions = self.max_positions, "题位数超过上限");
            return Err(ApiError::MalformedSlotSpec { position, raw });
        }

        let mut positions = Vec::with_capacity(raw_positions.len());
        for (idx, raw) in raw_positions.iter().enumerate() {
            let marks = match raw {
                Some(raw) => parse_marks_list(idx + 1, raw.as_ref())?,
                None => None,
            };
            positions.push(marks);
        }

        Ok(SlotSpec::new(positions))
    }
}

/// 单个题位: "5, 5,,10" → Some([5, 5, 10]); 空白 → None
fn parse_marks_list(position: usize, raw: &str) -> ApiResult<Option<Vec<u32>>> {
    let mut marks = Vec::new();
    for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let value = token.parse::<u32>().map_err(|_| {
            tracing::debug!(position, token, "分值项不是非负整数");
            ApiError::MalformedSlotSpec {
                position,
                raw: raw.to_string(),
            }
        })?;
        marks.push(value);
    }

    Ok((!marks.is_empty()).then_some(marks))
}

/// 解析命令行题位参数 "N=LIST"（N 从 1 开始）
///
/// # 返回
/// - Ok((N, LIST)): LIST 原样返回, 交由 validate 统一校验
/// - Err(ApiError::MalformedSlotSpec): 缺少 '=' 或 N 非正整数（position 记为 0）
pub fn parse_slot_argument(arg: &str) -> ApiResult<(usize, String)> {
    let malformed = || ApiError::MalformedSlotSpec {
        position: 0,
        raw: arg.to_string(),
    };

    let (position, list) = arg.split_once('=').ok_or_else(malformed)?;
    let position: usize = position.trim().parse().map_err(|_| malformed())?;
    if position == 0 {
        return Err(malformed());
    }
    Ok((position, list.to_string()))
}

/// 将若干 "N=LIST" 参数合并为按题位排列的原始字符串（同一题位后者覆盖前者）
///
/// N 超过 max_positions 时报 MalformedSlotSpec（题位号为 N）, 不分配任何空间
pub fn collect_slot_arguments<S: AsRef<str>>(
    args: &[S],
    max_positions: usize,
) -> ApiResult<Vec<Option<String>>> {
    let mut raw_positions: Vec<Option<String>> = Vec::new();
    for arg in args {
        let (position, list) = parse_slot_argument(arg.as_ref())?;
        if position > max_positions {
            tracing::warn!(position, max_positions, "题位号超过上限");
            return Err(ApiError::MalformedSlotSpec { position, raw: list });
        }
        if raw_positions.len() < position {
            raw_positions.resize(position, None);
        }
        raw_positions[position - 1] = Some(list);
    }
    Ok(raw_positions)
}
