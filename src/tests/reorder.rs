use super::{reorder, reorder_with, ReorderPlan};
use crate::config::Config;
use crate::node::OutlineNode;
use crate::outline::extract;
use crate::section::segment;

fn pick(outline: &[OutlineNode], texts: &[&str]) -> Vec<OutlineNode> {
    texts
        .iter()
        .filter_map(|t| outline.iter().find(|n| n.text == *t).cloned())
        .collect()
}

#[test]
fn test_swap_top_level_sections() {
    let text = "# Intro\n\n## Background\n\n# Methods\n\nDetails";
    let outline = extract(text);
    let desired = pick(&outline, &["Methods", "Intro"]);

    assert_eq!(
        reorder(text, &outline, &desired),
        "# Methods\n\nDetails\n# Intro\n\n## Background\n"
    );
}

#[test]
fn test_same_order_is_identity() {
    let text = "preamble\n\n# A\na\n## A1\n\n# B\nb\n";
    let outline = extract(text);

    let outcome = reorder_with(text, &outline, &outline, &Config::default());
    assert!(outcome.reordered);
    assert_eq!(outcome.text, text);
}

#[test]
fn test_preamble_stays_first() {
    let text = "Title page\n\n# A\na\n# B\nb";
    let outline = extract(text);
    let desired = pick(&outline, &["B", "A"]);

    assert_eq!(
        reorder(text, &outline, &desired),
        "Title page\n\n# B\nb\n# A\na"
    );
}

#[test]
fn test_descendants_move_with_parent() {
    let text = "# A\n## A1\na1\n### A1a\n# B\n## B1";
    let outline = extract(text);
    let desired = vec![
        outline[3].clone(),
        outline[4].clone(),
        outline[0].clone(),
        outline[1].clone(),
        outline[2].clone(),
    ];

    assert_eq!(
        reorder(text, &outline, &desired),
        "# B\n## B1\n# A\n## A1\na1\n### A1a"
    );
}

#[test]
fn test_child_entries_do_not_place_sections() {
    // Only "A" and "B" are top-level; "B1" listed first under "A" is ignored.
    let text = "# A\n# B\n## B1";
    let outline = extract(text);
    let desired = vec![outline[0].clone(), outline[2].clone(), outline[1].clone()];

    assert_eq!(reorder(text, &outline, &desired), text);
}

#[test]
fn test_unmatched_entry_skipped() {
    let text = "# A\n# B";
    let outline = extract(text);
    let desired = vec![
        OutlineNode::new(1, "Missing", 0),
        outline[1].clone(),
        outline[0].clone(),
    ];

    let outcome = reorder_with(text, &outline, &desired, &Config::default());
    assert!(outcome.reordered);
    assert_eq!(outcome.text, "# B\n# A");
}

#[test]
fn test_level_must_match() {
    let text = "# A\n# B";
    let outline = extract(text);
    let desired = vec![OutlineNode::new(2, "B", 1)];

    let outcome = reorder_with(text, &outline, &desired, &Config::default());
    assert!(!outcome.reordered);
    assert_eq!(outcome.text, text);
}

#[test]
fn test_no_match_is_noop() {
    let text = "intro\n# A\nbody";
    let outline = extract(text);
    let desired = vec![OutlineNode::new(1, "Nope", 0)];

    let outcome = reorder_with(text, &outline, &desired, &Config::default());
    assert!(!outcome.reordered);
    assert_eq!(outcome.text, text);
}

#[test]
fn test_no_headings_is_noop() {
    let text = "plain\ntext";
    let outcome = reorder_with(text, &[], &[OutlineNode::new(1, "plain", 0)], &Config::default());
    assert!(!outcome.reordered);
    assert_eq!(outcome.text, text);
}

#[test]
fn test_unplaced_sections_are_kept() {
    let text = "# A\na\n# B\nb\n# C\nc";
    let outline = extract(text);
    let desired = pick(&outline, &["C"]);

    assert_eq!(reorder(text, &outline, &desired), "# C\nc\n# A\na\n# B\nb");
}

#[test]
fn test_duplicate_headings_first_match_wins() {
    let text = "# Notes\nfirst\n# Other\n# Notes\nsecond";
    let outline = extract(text);
    let desired = vec![outline[1].clone(), outline[0].clone(), outline[2].clone()];

    assert_eq!(
        reorder(text, &outline, &desired),
        "# Other\n# Notes\nfirst\n# Notes\nsecond"
    );
}

#[test]
fn test_promoted_child_leaves_parent() {
    let text = "# A\na\n## A1\na1\n# B";
    let outline = extract(text);
    // A1 dragged to the very front becomes a top-level entry of its own.
    let desired = vec![
        outline[1].clone(),
        outline[0].clone(),
        outline[2].clone(),
    ];

    assert_eq!(reorder(text, &outline, &desired), "## A1\na1\n# A\na\n# B");
}

#[test]
fn test_keyword_mode_reorder() {
    let text = "Chapter 1\nfirst\nChapter 2\nsecond";
    let outline = extract(text);
    let desired = vec![outline[1].clone(), outline[0].clone()];

    assert_eq!(
        reorder(text, &outline, &desired),
        "Chapter 2\nsecond\nChapter 1\nfirst"
    );
}

#[test]
fn test_plan_records_placements_and_skips() {
    let text = "# A\n## A1\n# B";
    let sections = segment(text);
    let desired = vec![
        OutlineNode::new(1, "B", 2),
        OutlineNode::new(1, "Ghost", 0),
        OutlineNode::new(1, "A", 0),
    ];

    let plan = ReorderPlan::resolve(&sections, &desired);
    assert_eq!(plan.placements.len(), 2);
    assert_eq!(plan.placements[0].sections, vec![2]);
    assert_eq!(plan.placements[1].sections, vec![0, 1]);
    assert_eq!(plan.skipped.len(), 1);
    assert_eq!(plan.skipped[0].text, "Ghost");
    assert!(plan.leftovers.is_empty());

    let json = serde_json::to_string(&plan).unwrap();
    let back: ReorderPlan = serde_json::from_str(&json).unwrap();
    assert_eq!(back, plan);
}

#[test]
fn test_desired_outline_from_bare_json() {
    let text = "# Intro\nhello\n# Methods\nhow";
    let outline = extract(text);
    let desired: Vec<OutlineNode> =
        serde_json::from_str(r#"[{"level":1,"text":"Methods"},{"level":1,"text":"Intro"}]"#)
            .unwrap();

    assert_eq!(
        reorder(text, &outline, &desired),
        "# Methods\nhow\n# Intro\nhello"
    );
}
