// ==========================================
// 试卷组卷系统 - 文档中间表示
// ==========================================
// 职责: 文档解析能力的输出结构（页 → 表格 + 整页文本）
// 说明: 空白单元格以 None 表示; JSON 形式亦作为外部 PDF 表格识别器的交换格式
// ==========================================

use serde::{Deserialize, Serialize};

/// 表格: 行 × 列文本网格
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub rows: Vec<Vec<Option<String>>>,
}

impl Table {
    pub fn new(rows: Vec<Vec<Option<String>>>) -> Self {
        Self { rows }
    }

    /// 由字符串网格构造, 空白字符串视为空单元格
    pub fn from_strings<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        let rows = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| {
                        let cell = cell.as_ref();
                        if cell.trim().is_empty() {
                            None
                        } else {
                            Some(cell.to_string())
                        }
                    })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn header(&self) -> Option<&[Option<String>]> {
        self.rows.first().map(|r| r.as_slice())
    }

    /// 首列单元格（缺失列视为空）
    pub fn first_column(&self) -> impl Iterator<Item = Option<&str>> {
        self.rows
            .iter()
            .map(|row| row.first().and_then(|c| c.as_deref()))
    }
}

/// 单页: 检测到的表格 + 整页文本
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub tables: Vec<Table>,

    #[serde(default)]
    pub text: String,
}

/// 文档: 有序页列表
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub pages: Vec<Page>,
}

impl Document {
    pub fn new(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    /// 按页顺序遍历全部表格
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.pages.iter().flat_map(|p| p.tables.iter())
    }

    /// 全部页文本按换行拼接
    pub fn full_text(&self) -> String {
        self.pages
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// 单元格文本（空单元格为空串）
pub fn cell_text(cell: Option<&Option<String>>) -> &str {
    cell.and_then(|c| c.as_deref()).unwrap_or("")
}
