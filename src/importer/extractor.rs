// ==========================================
// 试卷组卷系统 - 题库抽取器
// ==========================================
// 职责: Document → (题库, 课程目标描述表)
// 流程:
// 1) 遍历全部表格, 分类器命中的表格按行抽取课程目标描述
// 2) 再次遍历全部表格, 跳过表头后交给 QuestionPoolBuilder
// 3) 未找到课程目标描述表时, 回退为整文本行首正则扫描
// 红线: 文档级解析失败 → 空题库 + 空描述表（软失败, 不向调用方抛错）
// ==========================================

use crate::config::ExtractionConfig;
use crate::domain::outcome::OutcomeDescriptions;
use crate::domain::question::QuestionPool;
use crate::importer::classifier::{
    description_cells, normalize_outcome_code, TableClassifier, TableKind,
};
use crate::importer::document::{Document, Table};
use crate::importer::error::ImportResult;
use crate::importer::file_parser::UniversalDocumentParser;
use crate::importer::pool_builder::QuestionPoolBuilder;
use regex::Regex;
use std::path::Path;
use tracing::instrument;

// ==========================================
// ExtractionResult - 抽取结果
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ExtractionResult {
    pub pool: QuestionPool,
    pub outcome_descriptions: OutcomeDescriptions,

    /// 形似题目行但被拒绝的行数
    pub skipped_rows: usize,

    /// 课程目标描述是否来自文本回退扫描
    pub used_text_fallback: bool,
}

impl ExtractionResult {
    /// 拆分为 (题库, 描述表)
    pub fn into_parts(self) -> (QuestionPool, OutcomeDescriptions) {
        (self.pool, self.outcome_descriptions)
    }
}

// ==========================================
// QuestionBankExtractor - 题库抽取器
// ==========================================
pub struct QuestionBankExtractor {
    config: ExtractionConfig,
    classifier: TableClassifier,
    fallback_pattern: Option<Regex>,
}

impl QuestionBankExtractor {
    /// 使用默认分类规则构造
    pub fn new(config: ExtractionConfig) -> Self {
        Self::with_classifier(config, TableClassifier::default())
    }

    /// 使用自定义分类规则构造
    pub fn with_classifier(config: ExtractionConfig, classifier: TableClassifier) -> Self {
        let pattern = format!(
            r"(?m)^({}\s*\d+)\s*(.*)",
            regex::escape(&config.outcome_marker)
        );
        let fallback_pattern = match Regex::new(&pattern) {
            Ok(re) => Some(re),
            Err(e) => {
                tracing::warn!(error = %e, "课程目标回退正则构造失败, 已禁用文本回退扫描");
                None
            }
        };

        Self {
            config,
            classifier,
            fallback_pattern,
        }
    }

    // ==========================================
    // 软失败入口
    // ==========================================

    /// 从文件抽取; 任何解析失败都返回空结果
    pub fn extract_path<P: AsRef<Path>>(&self, file_path: P) -> ExtractionResult {
        let path = file_path.as_ref();
        self.try_extract_path(path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "题库文档解析失败, 返回空题库");
            ExtractionResult::default()
        })
    }

    /// 从原始字节抽取（extension 决定解析器）; 任何解析失败都返回空结果
    pub fn extract_bytes(&self, bytes: &[u8], extension: &str) -> ExtractionResult {
        self.try_extract_bytes(bytes, extension).unwrap_or_else(|e| {
            tracing::warn!(extension, error = %e, "题库文档解析失败, 返回空题库");
            ExtractionResult::default()
        })
    }

    // ==========================================
    // 严格入口（暴露 ImportError）
    // ==========================================

    pub fn try_extract_path<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<ExtractionResult> {
        let document = UniversalDocumentParser.parse(file_path)?;
        Ok(self.extract(&document))
    }

    pub fn try_extract_bytes(&self, bytes: &[u8], extension: &str) -> ImportResult<ExtractionResult> {
        let document = UniversalDocumentParser.parse_bytes_as(bytes, extension)?;
        Ok(self.extract(&document))
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 从已解析的文档抽取题库与课程目标描述
    #[instrument(skip(self, document), fields(pages = document.pages.len()))]
    pub fn extract(&self, document: &Document) -> ExtractionResult {
        // 1. 课程目标描述表
        let mut outcome_descriptions = OutcomeDescriptions::new();
        for table in document.tables() {
            if let Some(TableKind::OutcomeDescriptions { start_row }) =
                self.classifier.classify(table, &self.config)
            {
                self.collect_descriptions(table, start_row, &mut outcome_descriptions);
            }
        }

        // 2. 题目行（独立于分类结果, 所有表格都扫描）
        let mut builder = QuestionPoolBuilder::new(self.config.min_question_cells);
        for table in document.tables() {
            for row in table.rows.iter().skip(self.config.question_header_rows) {
                builder.push_row(row);
            }
        }
        let skipped_rows = builder.skipped_rows();
        let pool = builder.build();

        // 3. 文本回退扫描
        let used_text_fallback = outcome_descriptions.is_empty();
        if used_text_fallback {
            tracing::info!("未找到课程目标描述表, 回退为文本扫描");
            self.scan_text_descriptions(&document.full_text(), &mut outcome_descriptions);
        }

        tracing::info!(
            questions = pool.len(),
            outcomes = outcome_descriptions.len(),
            skipped_rows,
            used_text_fallback,
            "题库抽取完成"
        );

        ExtractionResult {
            pool,
            outcome_descriptions,
            skipped_rows,
            used_text_fallback,
        }
    }

    fn collect_descriptions(
        &self,
        table: &Table,
        start_row: usize,
        descriptions: &mut OutcomeDescriptions,
    ) {
        let marker = self.config.outcome_marker.as_str();

        for row in table.rows.iter().skip(start_row) {
            let Some((code_raw, desc_raw)) = description_cells(row) else {
                continue;
            };
            if !code_raw.contains(marker) || !self.is_description(desc_raw) {
                continue;
            }
            if let Some(code) = normalize_outcome_code(code_raw, marker) {
                descriptions.insert(code, desc_raw.trim());
            }
        }
    }

    fn scan_text_descriptions(&self, text: &str, descriptions: &mut OutcomeDescriptions) {
        let Some(pattern) = &self.fallback_pattern else {
            return;
        };

        for caps in pattern.captures_iter(text) {
            let code: String = caps[1].chars().filter(|c| !c.is_whitespace()).collect();
            let description = caps.get(2).map(|m| m.as_str().trim()).unwrap_or("");
            if self.is_description(description) {
                descriptions.insert(code, description);
            }
        }
    }

    /// 长度严格大于阈值才视为描述, 否则为噪声
    fn is_description(&self, text: &str) -> bool {
        text.chars().count() > self.config.min_description_len
    }
}

impl Default for QuestionBankExtractor {
    fn default() -> Self {
        Self::new(ExtractionConfig::default())
    }
}
