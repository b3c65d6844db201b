// ==========================================
// 试卷组卷系统 - PaperAssembler 集成测试
// ==========================================
// 测试范围: 题库 → 组卷 → 汇总
// ==========================================

mod helpers;

use exam_paper_assembler::domain::outcome::OutcomeDescriptions;
use exam_paper_assembler::domain::question::QuestionPool;
use exam_paper_assembler::engine::{AssemblyError, CanonicalPath, PaperAssembler, SummaryAggregator};
use helpers::test_data_builder::*;
use std::collections::HashSet;

// ==========================================
// 场景1: 基准示例
// ==========================================

#[test]
fn test_scenario_1_two_outcomes_balanced() {
    println!("\n=== 测试：基准示例 ===");

    let pool = pool_of(&[(5, "CO1"), (5, "CO2"), (10, "CO1")]);
    let assembler = PaperAssembler::default();

    let paper = assembler.assemble(&pool, &slot_spec(&["5,5"])).unwrap();
    let mut ids = paper.question_ids();
    ids.sort();
    println!("选中题目: {:?}", ids);
    assert_eq!(ids, vec![1, 2]);

    let result = assembler.assemble(&pool, &slot_spec(&["5,5,5"]));
    assert_eq!(
        result,
        Err(AssemblyError::UnsatisfiableSlot {
            position: 1,
            sub_item: 3,
            marks: 5
        })
    );
}

// ==========================================
// 场景2: 多题位均衡
// ==========================================

#[test]
fn test_scenario_2_multi_position_balance() {
    println!("\n=== 测试：多题位均衡 ===");

    let pool = pool_of(&[
        (5, "CO1"),
        (5, "CO2"),
        (10, "CO1"),
        (10, "CO2"),
        (5, "CO1"),
        (5, "CO2"),
    ]);
    let assembler = PaperAssembler::default();
    let paper = assembler
        .assemble(&pool, &slot_spec(&["5,5", "10", "5,5"]))
        .unwrap();

    // 标准路径第 1、3 题: 20 分 / 2 个课程目标
    assert_eq!(paper.total_paper_marks, 20);
    assert_eq!(paper.target_marks_per_outcome, 10.0);

    let q1: Vec<u32> = paper.slot(1).unwrap().question_ids().collect();
    let q2: Vec<u32> = paper.slot(2).unwrap().question_ids().collect();
    let q3: Vec<u32> = paper.slot(3).unwrap().question_ids().collect();
    println!("Q1={:?} Q2={:?} Q3={:?}", q1, q2, q3);
    assert_eq!(q1, vec![1, 5]);
    assert_eq!(q2, vec![4]);
    assert_eq!(q3, vec![2, 6]);

    let summary = SummaryAggregator::default().summarize(&paper, &OutcomeDescriptions::new());
    assert_eq!(summary.outcome_marks("CO1"), Some(10));
    assert_eq!(summary.outcome_marks("CO2"), Some(10));
    assert_eq!(summary.max_deviation, 0.0);
}

// ==========================================
// 场景3: 标准路径配置
// ==========================================

#[test]
fn test_scenario_3_custom_canonical_path() {
    println!("\n=== 测试：自定义标准路径 ===");

    let pool = pool_of(&[(5, "CO1"), (5, "CO2"), (5, "CO1"), (5, "CO2")]);
    let spec = slot_spec(&["5", "5", "5", "5"]);

    // 第 2、4 题为标准路径
    let path = CanonicalPath::new(2, 2);
    let paper = PaperAssembler::new(path).assemble(&pool, &spec).unwrap();
    assert_eq!(paper.total_paper_marks, 10);
    assert_eq!(paper.target_marks_per_outcome, 5.0);

    let summary = SummaryAggregator::new(path).summarize(&paper, &OutcomeDescriptions::new());
    let counted: u64 = summary.outcome_totals.values().sum();
    assert_eq!(counted, 10);
}

// ==========================================
// 场景4: 不变量（多组题位规格）
// ==========================================

fn generated_pool(size: u32) -> QuestionPool {
    let marks = [2, 5, 10];
    let outcomes = ["CO1", "CO2", "CO3", "CO4", "CO5"];
    let mut seed: u32 = 7;
    let questions = (1..=size)
        .map(|id| {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let m = marks[(seed >> 16) as usize % marks.len()];
            let co = outcomes[(seed >> 8) as usize % outcomes.len()];
            QuestionBuilder::new(id).marks(m).outcome(co).build()
        })
        .collect();
    QuestionPool::new(questions)
}

#[test]
fn test_scenario_4_invariants_hold_for_many_specs() {
    println!("\n=== 测试：不变量 ===");

    let pool = generated_pool(120);
    let assembler = PaperAssembler::default();
    let specs = [
        vec!["2,5,5", "2,5,5", "10", "10", "5,5", "5,5"],
        vec!["10", "", "10", "", "10", ""],
        vec!["2,2,2,2", "5", "", "5,10"],
        vec!["5"],
    ];

    for raw in &specs {
        let spec = slot_spec(raw);
        let first = match assembler.assemble(&pool, &spec) {
            Ok(paper) => paper,
            Err(e) => panic!("题位规格 {:?} 组卷失败: {}", raw, e),
        };

        // 同一题目不重复
        let ids = first.question_ids();
        let unique: HashSet<u32> = ids.iter().copied().collect();
        assert_eq!(ids.len(), unique.len(), "重复题目: {:?}", raw);

        // 分值精确匹配
        for slot in &first.slots {
            let requested = spec.marks_at(slot.position).unwrap();
            let actual: Vec<u32> = slot.sub_items.iter().map(|s| s.marks).collect();
            assert_eq!(actual, requested);
            assert_eq!(
                slot.total_marks,
                requested.iter().map(|&m| u64::from(m)).sum::<u64>()
            );
        }

        // 确定性
        let second = assembler.assemble(&pool, &spec).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_scenario_5_missing_mark_value_fails_whole_paper() {
    println!("\n=== 测试：分值不存在 ===");

    let pool = pool_of(&[(5, "CO1"), (5, "CO2")]);
    let result = PaperAssembler::default().assemble(&pool, &slot_spec(&["5", "", "7"]));

    assert_eq!(
        result,
        Err(AssemblyError::UnsatisfiableSlot {
            position: 3,
            sub_item: 1,
            marks: 7
        })
    );
}
