// ==========================================
// 试卷组卷系统 - 组卷 API
// ==========================================
// 职责: 单次请求的完整流程编排
// 流程: 校验题位 → 解析/抽取题库 → 组卷 → 汇总 → GeneratedPaper
// 红线: 题位校验失败时不做任何文档解析
// 红线: 文档无法读取按空题库处理（EmptyPool）, 不向调用方暴露解析细节
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::api::validator::SlotSpecValidator;
use crate::config::AssemblyConfig;
use crate::domain::report::GeneratedPaper;
use crate::domain::slot::SlotSpec;
use crate::engine::assembler::PaperAssembler;
use crate::engine::summary::SummaryAggregator;
use crate::importer::document::Document;
use crate::importer::extractor::{ExtractionResult, QuestionBankExtractor};
use chrono::Utc;
use std::path::Path;
use std::time::Instant;
use uuid::Uuid;

// ==========================================
// PaperApi - 组卷 API
// ==========================================
pub struct PaperApi {
    config: AssemblyConfig,
    validator: SlotSpecValidator,
    extractor: QuestionBankExtractor,
    assembler: PaperAssembler,
    aggregator: SummaryAggregator,
}

impl Default for PaperApi {
    fn default() -> Self {
        Self::new(AssemblyConfig::default())
    }
}

impl PaperApi {
    /// 按配置装配各组件
    pub fn new(config: AssemblyConfig) -> Self {
        Self {
            validator: SlotSpecValidator::new(config.max_positions),
            extractor: QuestionBankExtractor::new(config.extraction.clone()),
            assembler: PaperAssembler::new(config.canonical_path),
            aggregator: SummaryAggregator::new(config.canonical_path),
            config,
        }
    }

    pub fn config(&self) -> &AssemblyConfig {
        &self.config
    }

    /// 从题库文件组卷
    ///
    /// # 参数
    /// - `bank_path`: 题库文件（.xlsx/.xls/.xlsm/.ods/.csv/.json）
    /// - `raw_positions`: 第 i 项对应第 i+1 题的分值列表, 如 "5,5"
    ///
    /// # 返回
    /// - Ok(GeneratedPaper): 试卷 + 汇总
    /// - Err(ApiError): MalformedSlotSpec / EmptyPool / UnsatisfiableSlot
    pub fn generate_from_path<P: AsRef<Path>, S: AsRef<str>>(
        &self,
        bank_path: P,
        raw_positions: &[Option<S>],
    ) -> ApiResult<GeneratedPaper> {
        let spec = self.validator.validate(raw_positions)?;
        let extraction = self.extractor.extract_path(bank_path);
        self.finish(&spec, extraction)
    }

    /// 从题库字节组卷（extension 决定解析器）
    pub fn generate_from_bytes<S: AsRef<str>>(
        &self,
        bytes: &[u8],
        extension: &str,
        raw_positions: &[Option<S>],
    ) -> ApiResult<GeneratedPaper> {
        let spec = self.validator.validate(raw_positions)?;
        let extraction = self.extractor.extract_bytes(bytes, extension);
        self.finish(&spec, extraction)
    }

    /// 从已解析的文档组卷
    pub fn generate<S: AsRef<str>>(
        &self,
        document: &Document,
        raw_positions: &[Option<S>],
    ) -> ApiResult<GeneratedPaper> {
        let spec = self.validator.validate(raw_positions)?;
        let extraction = self.extractor.extract(document);
        self.finish(&spec, extraction)
    }

    fn finish(&self, spec: &SlotSpec, extraction: ExtractionResult) -> ApiResult<GeneratedPaper> {
        let run_id = Uuid::new_v4();
        let span = tracing::info_span!("generate_paper", run_id = %run_id);
        let _enter = span.enter();
        let start = Instant::now();

        let (pool, descriptions) = extraction.into_parts();
        if pool.is_empty() {
            tracing::warn!("题库为空, 组卷终止");
            return Err(ApiError::EmptyPool);
        }

        let paper = self.assembler.assemble(&pool, spec).map_err(|e| {
            tracing::warn!(error = %e, "组卷失败");
            ApiError::from(e)
        })?;
        let summary = self.aggregator.summarize(&paper, &descriptions);

        tracing::info!(
            question_count = pool.len(),
            slots = paper.slots.len(),
            total_paper_marks = paper.total_paper_marks,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "试卷生成完成"
        );

        Ok(GeneratedPaper {
            run_id,
            generated_at: Utc::now(),
            question_count: pool.len(),
            paper,
            summary,
        })
    }
}
