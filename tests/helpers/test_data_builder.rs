// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use exam_paper_assembler::domain::question::{Question, QuestionPool};
use exam_paper_assembler::domain::slot::SlotSpec;
use exam_paper_assembler::importer::document::{Document, Page, Table};
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;

/// 题目表表头
pub const QUESTION_HEADER: [&str; 5] = ["Q.No", "Question", "Marks", "CO", "RBT"];

// ==========================================
// Question 构建器
// ==========================================

pub struct QuestionBuilder {
    id: u32,
    text: Option<String>,
    marks: u32,
    outcome_code: String,
    cognitive_level: String,
}

impl QuestionBuilder {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            text: None,
            marks: 5,
            outcome_code: "CO1".to_string(),
            cognitive_level: "L2".to_string(),
        }
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn marks(mut self, marks: u32) -> Self {
        self.marks = marks;
        self
    }

    pub fn outcome(mut self, code: &str) -> Self {
        self.outcome_code = code.to_string();
        self
    }

    pub fn level(mut self, level: &str) -> Self {
        self.cognitive_level = level.to_string();
        self
    }

    pub fn build(self) -> Question {
        Question {
            id: self.id,
            text: self
                .text
                .unwrap_or_else(|| format!("Question {} worth {} marks", self.id, self.marks)),
            marks: self.marks,
            outcome_code: self.outcome_code,
            cognitive_level: self.cognitive_level,
        }
    }
}

/// 按 (分值, 课程目标) 列表构建题库, id 从 1 开始
pub fn pool_of(specs: &[(u32, &str)]) -> QuestionPool {
    let questions = specs
        .iter()
        .enumerate()
        .map(|(idx, (marks, co))| {
            QuestionBuilder::new(idx as u32 + 1)
                .marks(*marks)
                .outcome(co)
                .build()
        })
        .collect();
    QuestionPool::new(questions)
}

/// 由 "5,5" 风格的字符串列表构建 SlotSpec（空字符串 = 不出题）
pub fn slot_spec(positions: &[&str]) -> SlotSpec {
    SlotSpec::new(
        positions
            .iter()
            .map(|raw| {
                let marks: Vec<u32> = raw
                    .split(',')
                    .filter_map(|t| t.trim().parse().ok())
                    .collect();
                (!marks.is_empty()).then_some(marks)
            })
            .collect(),
    )
}

// ==========================================
// 题库文档构建器
// ==========================================

pub struct QuestionBankBuilder {
    outcomes: Vec<(String, String)>,
    questions: Vec<[String; 5]>,
    text: String,
}

impl Default for QuestionBankBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionBankBuilder {
    pub fn new() -> Self {
        Self {
            outcomes: Vec::new(),
            questions: Vec::new(),
            text: String::new(),
        }
    }

    pub fn outcome(mut self, code: &str, description: &str) -> Self {
        self.outcomes.push((code.to_string(), description.to_string()));
        self
    }

    pub fn question(mut self, text: &str, marks: &str, co: &str, rbt: &str) -> Self {
        let no = (self.questions.len() + 1).to_string();
        self.questions.push([
            no,
            text.to_string(),
            marks.to_string(),
            co.to_string(),
            rbt.to_string(),
        ]);
        self
    }

    /// 页面文本（用于文本回退扫描）
    pub fn text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    fn question_table(&self) -> Table {
        let mut rows: Vec<Vec<String>> =
            vec![QUESTION_HEADER.iter().map(|s| s.to_string()).collect()];
        rows.extend(self.questions.iter().map(|q| q.to_vec()));
        Table::from_strings(rows)
    }

    fn outcome_table(&self) -> Option<Table> {
        if self.outcomes.is_empty() {
            return None;
        }
        let mut rows = vec![vec!["CO".to_string(), "Course Outcome".to_string()]];
        rows.extend(
            self.outcomes
                .iter()
                .map(|(code, desc)| vec![code.clone(), desc.clone()]),
        );
        Some(Table::from_strings(rows))
    }

    /// 单页文档: 课程目标描述表（若有）+ 题目表
    pub fn build_document(&self) -> Document {
        let mut tables = Vec::new();
        if let Some(table) = self.outcome_table() {
            tables.push(table);
        }
        tables.push(self.question_table());

        Document::new(vec![Page {
            tables,
            text: self.text.clone(),
        }])
    }

    /// 预抽取 JSON 文档
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self.build_document()).unwrap()
    }

    /// 单表 CSV: 表头 + 题目行 + 课程目标行（两列）
    pub fn to_csv(&self) -> String {
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(Vec::new());
        writer.write_record(QUESTION_HEADER).unwrap();
        for q in &self.questions {
            writer.write_record(q).unwrap();
        }
        for (code, desc) in &self.outcomes {
            writer.write_record([code, desc]).unwrap();
        }
        String::from_utf8(writer.into_inner().unwrap()).unwrap()
    }
}

/// 标准测试题库: 2 个课程目标, 5/10 分各若干
pub fn standard_bank() -> QuestionBankBuilder {
    QuestionBankBuilder::new()
        .outcome("CO1", "Describe the basic linear data structures")
        .outcome("CO2", "Explain tree traversals and their applications")
        .question("Define a stack.", "5", "CO1", "L1")
        .question("Define a binary tree.", "5", "CO2", "L1")
        .question("Implement a queue using\ntwo stacks.", "10", "CO1", "L3")
        .question("Write an inorder traversal.", "10", "CO2", "L3")
        .question("List the queue operations.", "5", "CO1", "L1")
        .question("Explain heap ordering.", "5", "CO2", "L2")
}

// ==========================================
// xlsx 工作簿构建
// ==========================================
// 工作表 1: 题目表（表头后空一行, 纯数字单元格按数值写入）
// 工作表 2: 页面文本按行写入 A 列

impl QuestionBankBuilder {
    pub fn to_xlsx(&self) -> Vec<u8> {
        let mut question_rows: Vec<(usize, Vec<String>)> =
            vec![(1, QUESTION_HEADER.iter().map(|s| s.to_string()).collect())];
        question_rows.extend(
            self.questions
                .iter()
                .enumerate()
                .map(|(idx, q)| (idx + 3, q.to_vec())),
        );
        let text_rows: Vec<(usize, Vec<String>)> = self
            .text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(idx, line)| (idx + 1, vec![line.to_string()]))
            .collect();

        let mut buf = Cursor::new(Vec::new());
        {
            let mut zip = zip::ZipWriter::new(&mut buf);
            let options = SimpleFileOptions::default().unix_permissions(0o644);
            let parts = [
                ("[Content_Types].xml", CONTENT_TYPES_XML.to_string()),
                ("_rels/.rels", ROOT_RELS_XML.to_string()),
                ("xl/workbook.xml", WORKBOOK_XML.to_string()),
                ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS_XML.to_string()),
                ("xl/worksheets/sheet1.xml", sheet_xml(&question_rows)),
                ("xl/worksheets/sheet2.xml", sheet_xml(&text_rows)),
            ];
            for (name, body) in parts {
                zip.start_file(name, options).unwrap();
                zip.write_all(body.as_bytes()).unwrap();
            }
            zip.finish().unwrap();
        }
        buf.into_inner()
    }
}

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/><Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/><Override PartName="/xl/worksheets/sheet2.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/></Types>"#;

const ROOT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#;

const WORKBOOK_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="Questions" sheetId="1" r:id="rId1"/><sheet name="Outcomes" sheetId="2" r:id="rId2"/></sheets></workbook>"#;

const WORKBOOK_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet2.xml"/></Relationships>"#;

fn sheet_xml(rows: &[(usize, Vec<String>)]) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>"#,
    );
    for (row_no, cells) in rows {
        xml.push_str(&format!(r#"<row r="{}">"#, row_no));
        for (col, value) in cells.iter().enumerate() {
            let reference = format!("{}{}", char::from(b'A' + col as u8), row_no);
            if value.parse::<u64>().is_ok() {
                xml.push_str(&format!(r#"<c r="{}"><v>{}</v></c>"#, reference, value));
            } else {
                xml.push_str(&format!(
                    r#"<c r="{}" t="inlineStr"><is><t>{}</t></is></c>"#,
                    reference,
                    xml_escape(value)
                ));
            }
        }
        xml.push_str("</row>");
    }
    xml.push_str("</sheetData></worksheet>");
    xml
}

fn xml_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
