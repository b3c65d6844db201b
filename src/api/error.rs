// ==========================================
// 试卷组卷系统 - API层错误类型
// ==========================================
// 职责: 汇总各层错误, 转换为面向调用方的结构化错误
// 说明: Display 为中文诊断信息; user_message() 按当前语言渲染
// ==========================================

use crate::config::ConfigError as ConfigLayerError;
use crate::engine::error::AssemblyError;
use crate::i18n::t_with_args;
use crate::importer::error::ImportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    // ==========================================
    // 输入错误
    // ==========================================
    /// 题库文档无法读取（仅严格入口返回）
    #[error("题库文档无法读取: {0}")]
    DocumentUnreadable(String),

    /// 第 position 题（从 1 开始）的分值列表无法解析
    #[error("第 {position} 题的分值格式无效: \"{raw}\"")]
    MalformedSlotSpec { position: usize, raw: String },

    // ==========================================
    // 组卷错误
    // ==========================================
    #[error("题库为空或无法读取, 无法组卷")]
    EmptyPool,

    #[error("第 {position} 题第 {sub_item} 小题: 找不到未使用的 {marks} 分题目")]
    UnsatisfiableSlot {
        position: usize,
        sub_item: usize,
        marks: u32,
    },

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("配置错误: {0}")]
    ConfigError(String),
}

impl ApiError {
    /// 按当前语言渲染的用户提示
    pub fn user_message(&self) -> String {
        match self {
            ApiError::DocumentUnreadable(reason) => {
                t_with_args("error.document_unreadable", &[("reason", reason)])
            }
            // position 为 0 表示 "N=LIST" 参数本身无法解析
            ApiError::MalformedSlotSpec { position: 0, raw } => {
                t_with_args("error.malformed_slot_argument", &[("raw", raw)])
            }
            ApiError::MalformedSlotSpec { position, raw } => t_with_args(
                "error.malformed_slot_spec",
                &[("position", &position.to_string()), ("raw", raw)],
            ),
            ApiError::EmptyPool => t_with_args("error.empty_pool", &[]),
            ApiError::UnsatisfiableSlot {
                position,
                sub_item,
                marks,
            } => t_with_args(
                "error.unsatisfiable_slot",
                &[
                    ("position", &position.to_string()),
                    ("sub_item", &sub_item.to_string()),
                    ("marks", &marks.to_string()),
                ],
            ),
            ApiError::ConfigError(reason) => t_with_args("error.config", &[("reason", reason)]),
        }
    }
}

// ==========================================
// 从下层错误转换
// ==========================================
impl From<AssemblyError> for ApiError {
    fn from(err: AssemblyError) -> Self {
        match err {
            AssemblyError::EmptyPool => ApiError::EmptyPool,
            AssemblyError::UnsatisfiableSlot {
                position,
                sub_item,
                marks,
            } => ApiError::UnsatisfiableSlot {
                position,
                sub_item,
                marks,
            },
        }
    }
}

impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        ApiError::DocumentUnreadable(err.to_string())
    }
}

impl From<ConfigLayerError> for ApiError {
    fn from(err: ConfigLayerError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assembly_error_conversion() {
        let err: ApiError = AssemblyError::UnsatisfiableSlot {
            position: 2,
            sub_item: 3,
            marks: 10,
        }
        .into();
        assert_eq!(
            err,
            ApiError::UnsatisfiableSlot {
                position: 2,
                sub_item: 3,
                marks: 10
            }
        );
        assert_eq!(ApiError::from(AssemblyError::EmptyPool), ApiError::EmptyPool);
    }

    #[test]
    fn test_import_error_conversion() {
        let err: ApiError = ImportError::UnsupportedFormat("docx".to_string()).into();
        match err {
            ApiError::DocumentUnreadable(msg) => assert!(msg.contains("docx")),
            other => panic!("Expected DocumentUnreadable, got {:?}", other),
        }
    }

    #[test]
    fn test_display_is_position_specific() {
        let err = ApiError::MalformedSlotSpec {
            position: 4,
            raw: "5,x".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains('4'));
        assert!(msg.contains("5,x"));
    }
}
