// ==========================================
// 试卷组卷系统 - 配置管理器
// ==========================================
// 职责: 配置加载、环境变量覆写、校验
// 来源优先级: 环境变量 > 配置文件 > 默认值
// 配置文件: 显式路径 / $EXAM_PAPER_CONFIG / 用户配置目录
// ==========================================

use crate::config::assembly_config::AssemblyConfig;
use crate::config::error::{ConfigError, ConfigResult};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

// ==========================================
// 配置键（环境变量名）
// ==========================================
pub mod config_keys {
    pub const CONFIG_PATH: &str = "EXAM_PAPER_CONFIG";
    pub const MAX_POSITIONS: &str = "EXAM_PAPER_MAX_POSITIONS";
    pub const CANONICAL_START: &str = "EXAM_PAPER_CANONICAL_START";
    pub const CANONICAL_STRIDE: &str = "EXAM_PAPER_CANONICAL_STRIDE";
    pub const MIN_DESCRIPTION_LEN: &str = "EXAM_PAPER_MIN_DESCRIPTION_LEN";
}

/// 用户配置目录下的默认配置文件名
const DEFAULT_CONFIG_DIR: &str = "exam-paper-assembler";
const DEFAULT_CONFIG_FILE: &str = "config.json";

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    config: AssemblyConfig,
    source: Option<PathBuf>,
}

impl ConfigManager {
    /// 使用默认值创建
    pub fn with_defaults() -> Self {
        Self {
            config: AssemblyConfig::default(),
            source: None,
        }
    }

    /// 从进程环境加载配置
    ///
    /// # 参数
    /// - explicit_path: 命令行显式指定的配置文件（优先于环境变量与默认位置）
    pub fn load(explicit_path: Option<&Path>) -> ConfigResult<Self> {
        Self::load_with_env(explicit_path, |key| std::env::var(key).ok())
    }

    /// 从指定的环境变量来源加载配置（便于测试注入）
    pub fn load_with_env<F>(explicit_path: Option<&Path>, env: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let source = match explicit_path {
            Some(path) => Some(path.to_path_buf()),
            None => env(config_keys::CONFIG_PATH)
                .map(PathBuf::from)
                .or_else(default_config_path),
        };

        let mut config = match &source {
            Some(path) => Self::read_file(path)?,
            None => AssemblyConfig::default(),
        };

        apply_env_overrides(&mut config, &env)?;
        validate(&config)?;

        tracing::debug!(
            source = ?source,
            max_positions = config.max_positions,
            canonical_start = config.canonical_path.start,
            canonical_stride = config.canonical_path.stride,
            "配置加载完成"
        );

        Ok(Self { config, source })
    }

    /// 读取并解析 JSON 配置文件（缺失字段取默认值）
    pub fn read_file(path: &Path) -> ConfigResult<AssemblyConfig> {
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&raw).map_err(|e| ConfigError::ParseFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    pub fn config(&self) -> &AssemblyConfig {
        &self.config
    }

    pub fn into_config(self) -> AssemblyConfig {
        self.config
    }

    /// 配置文件来源（None 表示仅使用默认值）
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// 配置快照（JSON）
    pub fn config_snapshot(&self) -> String {
        serde_json::to_string(&self.config).unwrap_or_else(|_| "{}".to_string())
    }
}

/// 默认配置文件位置（仅当文件存在时返回）
fn default_config_path() -> Option<PathBuf> {
    let path = dirs::config_dir()?
        .join(DEFAULT_CONFIG_DIR)
        .join(DEFAULT_CONFIG_FILE);
    path.is_file().then_some(path)
}

fn apply_env_overrides<F>(config: &mut AssemblyConfig, env: &F) -> ConfigResult<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = parse_env::<usize, _>(env, config_keys::MAX_POSITIONS)? {
        config.max_positions = v;
    }
    if let Some(v) = parse_env::<usize, _>(env, config_keys::CANONICAL_START)? {
        config.canonical_path.start = v;
    }
    if let Some(v) = parse_env::<usize, _>(env, config_keys::CANONICAL_STRIDE)? {
        config.canonical_path.stride = v;
    }
    if let Some(v) = parse_env::<usize, _>(env, config_keys::MIN_DESCRIPTION_LEN)? {
        config.extraction.min_description_len = v;
    }
    Ok(())
}

fn parse_env<T, F>(env: &F, key: &str) -> ConfigResult<Option<T>>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = env(key) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<T>()
        .map(Some)
        .map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw.clone(),
            message: "期望非负整数".to_string(),
        })
}

fn validate(config: &AssemblyConfig) -> ConfigResult<()> {
    if config.max_positions == 0 {
        return Err(ConfigError::InvalidValue {
            key: "max_positions".to_string(),
            value: "0".to_string(),
            message: "题位数量至少为 1".to_string(),
        });
    }
    if !config.canonical_path.is_valid() {
        return Err(ConfigError::InvalidValue {
            key: "canonical_path".to_string(),
            value: format!(
                "start={}, stride={}",
                config.canonical_path.start, config.canonical_path.stride
            ),
            message: "start 与 stride 均须 >= 1".to_string(),
        });
    }
    if config.extraction.outcome_marker.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            key: "extraction.outcome_marker".to_string(),
            value: config.extraction.outcome_marker.clone(),
            message: "课程目标标记不能为空".to_string(),
        });
    }
    Ok(())
}
