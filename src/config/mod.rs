// ==========================================
// 试卷组卷系统 - 配置层
// ==========================================
// 职责: 组卷配置加载、环境变量覆写与校验
// 存储: JSON 配置文件（可选）+ 环境变量
// ==========================================

pub mod assembly_config;
pub mod config_manager;
pub mod error;

// 重导出核心配置
pub use assembly_config::{AssemblyConfig, ExtractionConfig};
pub use config_manager::{config_keys, ConfigManager};
pub use error::{ConfigError, ConfigResult};
