// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持中文（默认）和英文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

use regex::{Captures, Regex};
use std::sync::OnceLock;

/// 支持的语言
pub const SUPPORTED_LOCALES: [&str; 2] = ["zh-CN", "en"];

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置语言; 不支持的语言代码返回 false 且不修改当前语言
///
/// # 参数
/// - locale: 语言代码（"zh-CN" 或 "en"）
pub fn set_locale(locale: &str) -> bool {
    if !SUPPORTED_LOCALES.contains(&locale) {
        tracing::warn!(locale, "不支持的语言, 保持当前语言");
        return false;
    }
    rust_i18n::set_locale(locale);
    true
}

/// 翻译消息（无参数）
///
/// # 示例
/// ```no_run
/// use exam_paper_assembler::i18n::t;
/// let msg = t("error.empty_pool");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 翻译消息（带参数）
///
/// # 示例
/// ```no_run
/// use exam_paper_assembler::i18n::t_with_args;
/// let msg = t_with_args("error.document_unreadable", &[("reason", "文件不存在")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let template = rust_i18n::t!(key).to_string();
    let Some(pattern) = placeholder_pattern() else {
        return template;
    };

    // 单遍替换: 参数值中的 %{..} 原样保留, 未提供的占位符保持不变
    pattern
        .replace_all(&template, |caps: &Captures| {
            args.iter()
                .find(|(name, _)| *name == &caps[1])
                .map(|(_, value)| value.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

static PLACEHOLDER: OnceLock<Option<Regex>> = OnceLock::new();

fn placeholder_pattern() -> Option<&'static Regex> {
    PLACEHOLDER
        .get_or_init(|| Regex::new(r"%\{(\w+)\}").ok())
        .as_ref()
}
