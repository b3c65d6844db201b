// ==========================================
// 试卷组卷系统 - 纯文本试卷提纲
// ==========================================
// 职责: GeneratedPaper → 按当前语言渲染的纯文本提纲（CLI --format text）
// 说明: 正式排版由外部渲染方负责, 这里只输出结构化提纲
// ==========================================

use crate::domain::report::GeneratedPaper;
use crate::i18n::{t, t_with_args};
use std::fmt::Write;

/// 渲染试卷提纲
pub fn render_outline(generated: &GeneratedPaper) -> String {
    let mut out = String::new();
    let paper = &generated.paper;
    let summary = &generated.summary;

    let _ = writeln!(out, "{}", t("paper.title"));
    let _ = writeln!(out);

    for slot in &paper.slots {
        let _ = writeln!(
            out,
            "{}",
            t_with_args(
                "paper.question",
                &[
                    ("position", &slot.position.to_string()),
                    ("marks", &slot.total_marks.to_string()),
                ],
            )
        );
        for item in &slot.sub_items {
            let _ = writeln!(
                out,
                "{}",
                t_with_args(
                    "paper.sub_item",
                    &[
                        ("label", &item.label),
                        ("marks", &item.marks.to_string()),
                        ("outcome", &item.outcome_code),
                        ("level", &display_level(&item.cognitive_level)),
                        ("text", &item.question_text),
                    ],
                )
            );
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{}",
        t_with_args(
            "paper.total_marks",
            &[("marks", &paper.total_paper_marks.to_string())]
        )
    );
    let _ = writeln!(
        out,
        "{}",
        t_with_args(
            "paper.target_marks",
            &[("marks", &format!("{:.2}", summary.target_marks_per_outcome))]
        )
    );
    let _ = writeln!(
        out,
        "{}",
        t_with_args(
            "paper.max_deviation",
            &[("marks", &format!("{:.2}", summary.max_deviation))]
        )
    );

    if !summary.outcome_report.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", t("paper.outcome_report"));
        for entry in &summary.outcome_report {
            let _ = writeln!(
                out,
                "{}",
                t_with_args(
                    "paper.outcome_entry",
                    &[
                        ("code", &entry.code),
                        ("marks", &entry.marks.to_string()),
                        ("description", &entry.description),
                    ],
                )
            );
        }
    }

    if !summary.level_report.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", t("paper.level_report"));
        for level in &summary.level_report {
            let _ = writeln!(
                out,
                "{}",
                t_with_args(
                    "paper.level_entry",
                    &[
                        ("level", &display_level(&level.level)),
                        ("marks", &level.marks.to_string()),
                    ],
                )
            );
        }
    }

    out
}

fn display_level(level: &str) -> String {
    if level.is_empty() {
        t("paper.no_level")
    } else {
        level.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::paper_api::PaperApi;
    use crate::i18n::set_locale;
    use crate::i18n::tests::LOCALE_TEST_LOCK;
    use crate::importer::document::{Document, Page, Table};

    fn generated() -> GeneratedPaper {
        let document = Document::new(vec![Page {
            tables: vec![
                Table::from_strings(vec![
                    vec!["CO", "Course Outcome"],
                    vec!["CO1", "Describe the basic linear data structures"],
                ]),
                Table::from_strings(vec![
                    vec!["Q.No", "Question", "Marks", "CO", "RBT"],
                    vec!["1", "Define a stack.", "5", "CO1", ""],
                    vec!["2", "Define a queue.", "5", "CO1", "L1"],
                ]),
            ],
            text: String::new(),
        }]);
        PaperApi::default().generate(&document, &[Some("5,5")]).unwrap()
    }

    #[test]
    fn test_outline_lists_every_sub_item() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("en");
        let outline = render_outline(&generated());
        set_locale("zh-CN");

        assert!(outline.starts_with("Question Paper"));
        assert!(outline.contains("Question 1 (10 marks)"));
        assert!(outline.contains("(a) [5 marks | CO1 | (unlabelled)] Define a stack."));
        assert!(outline.contains("(b) [5 marks | CO1 | L1] Define a queue."));
        assert!(outline.contains("CO1 (10 marks): Describe the basic linear data structures"));
    }
}
