// ==========================================
// 试卷组卷系统 - 文档解析器实现
// ==========================================
// 职责: 原始字节 → Document（页 → 表格 + 整页文本）
// 支持: Excel (.xlsx/.xls/.xlsm/.ods) / CSV (.csv) / 预抽取 JSON (.json)
// ==========================================

use crate::importer::document::{Document, Page, Table};
use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use csv::ReaderBuilder;
use std::fs;
use std::io::Cursor;
use std::path::Path;

// ==========================================
// DocumentParser Trait
// ==========================================
pub trait DocumentParser: Send + Sync {
    /// 解析原始字节
    fn parse_bytes(&self, bytes: &[u8]) -> ImportResult<Document>;

    /// 解析文件（检查存在性后读取全部字节）
    fn parse_path(&self, file_path: &Path) -> ImportResult<Document> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }
        let bytes = fs::read(file_path)?;
        self.parse_bytes(&bytes)
    }
}

// ==========================================
// CSV Parser 实现
// ==========================================
// 单页单表; 不区分表头（表头判定交给抽取器）
pub struct CsvDocumentParser;

impl DocumentParser for CsvDocumentParser {
    fn parse_bytes(&self, bytes: &[u8]) -> ImportResult<Document> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true) // 允许行长度不一致
            .from_reader(bytes);

        let mut rows = Vec::new();
        let mut text = String::new();
        for result in reader.records() {
            let record = result?;
            let row: Vec<Option<String>> = record.iter().map(non_blank).collect();

            // 跳过完全空白的行
            if row.iter().all(Option::is_none) {
                continue;
            }
            push_text_line(&mut text, &row);
            rows.push(row);
        }

        let page = Page {
            tables: vec![Table::new(rows)],
            text,
        };
        Ok(Document::new(vec![page]))
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
// 每个工作表 = 一页, 已用区域 = 一张表
pub struct ExcelDocumentParser;

impl DocumentParser for ExcelDocumentParser {
    fn parse_bytes(&self, bytes: &[u8]) -> ImportResult<Document> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))?;

        let sheet_names = workbook.sheet_names().to_vec();
        if sheet_names.is_empty() {
            return Err(ImportError::ExcelParseError("Excel 文件无工作表".to_string()));
        }

        let mut pages = Vec::with_capacity(sheet_names.len());
        for sheet_name in sheet_names {
            let range = workbook.worksheet_range(&sheet_name)?;

            let mut rows = Vec::new();
            let mut text = String::new();
            for data_row in range.rows() {
                let row: Vec<Option<String>> = data_row.iter().map(excel_cell_text).collect();
                if row.iter().all(Option::is_none) {
                    continue;
                }

                push_text_line(&mut text, &row);
                rows.push(row);
            }

            tracing::debug!(sheet = %sheet_name, rows = rows.len(), "工作表读取完成");
            let tables = if rows.is_empty() {
                Vec::new()
            } else {
                vec![Table::new(rows)]
            };
            pages.push(Page { tables, text });
        }

        Ok(Document::new(pages))
    }
}

/// 整页文本: 每行非空单元格以空格连接, 行间换行（分隔符不进入文本）
fn push_text_line(text: &mut String, row: &[Option<String>]) {
    let line: Vec<&str> = row.iter().flatten().map(String::as_str).collect();
    text.push_str(&line.join(" "));
    text.push('\n');
}

/// Excel 单元格 → 文本; 整数值浮点不带小数部分
fn excel_cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) => non_blank(s),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) if f.fract() == 0.0 && f.is_finite() => Some(format!("{}", *f as i64)),
        other => non_blank(&other.to_string()),
    }
}

// ==========================================
// JSON Parser 实现
// ==========================================
// 外部表格识别器（如 PDF 表格检测）输出的 Document 结构
pub struct JsonDocumentParser;

impl DocumentParser for JsonDocumentParser {
    fn parse_bytes(&self, bytes: &[u8]) -> ImportResult<Document> {
        let document: Document = serde_json::from_slice(bytes)?;
        if document.pages.is_empty() {
            return Err(ImportError::EmptyDocument);
        }
        Ok(document)
    }
}

// ==========================================
// 通用文档解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalDocumentParser;

impl UniversalDocumentParser {
    /// 按扩展名解析文件
    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<Document> {
        let path = file_path.as_ref();
        let ext = extension_of(path);
        let parser = Self::parser_for(&ext)?;
        parser.parse_path(path)
    }

    /// 按给定扩展名解析原始字节（上传场景: 文件名与内容分离）
    pub fn parse_bytes_as(&self, bytes: &[u8], extension: &str) -> ImportResult<Document> {
        let ext = extension.trim_start_matches('.').to_lowercase();
        Self::parser_for(&ext)?.parse_bytes(bytes)
    }

    fn parser_for(ext: &str) -> ImportResult<Box<dyn DocumentParser>> {
        match ext {
            "csv" => Ok(Box::new(CsvDocumentParser)),
            "xlsx" | "xls" | "xlsm" | "xlsb" | "ods" => Ok(Box::new(ExcelDocumentParser)),
            "json" => Ok(Box::new(JsonDocumentParser)),
            _ => Err(ImportError::UnsupportedFormat(ext.to_string())),
        }
    }
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

fn non_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
