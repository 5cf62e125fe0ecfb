use super::heuristic::{Family, KeywordSyntax};
use super::markdown::{MarkdownSyntax, MarkedLine};
use super::{DetectionMode, Heading, HeadingScan, HeadingSyntax};
use crate::config::Config;

fn scan(text: &str) -> HeadingScan {
    let lines: Vec<&str> = text.split('\n').collect();
    HeadingScan::new(&lines, &Config::default())
}

#[test]
fn test_markdown_heading_levels() {
    let syntax = MarkdownSyntax;
    assert_eq!(
        syntax.detect("# Title"),
        Some(Heading {
            level: 1,
            text: "Title".to_string()
        })
    );
    assert_eq!(syntax.detect("###### Deep").map(|h| h.level), Some(6));
    assert_eq!(syntax.detect("##   Spaced out  ").map(|h| h.text), Some("Spaced out".to_string()));
}

#[test]
fn test_markdown_rejects_non_headings() {
    let syntax = MarkdownSyntax;
    assert_eq!(syntax.detect(""), None);
    assert_eq!(syntax.detect("#NoSpace"), None);
    assert_eq!(syntax.detect("####### Seven"), None);
    assert_eq!(syntax.detect(" # Indented"), None);
    assert_eq!(syntax.detect("#"), None);
}

#[test]
fn test_markdown_split_keeps_rest_verbatim() {
    assert_eq!(
        MarkdownSyntax::split("##\tTabbed  text "),
        Some(MarkedLine {
            level: 2,
            rest: "Tabbed  text ",
        })
    );
}

#[test]
fn test_markdown_render_clamps() {
    assert_eq!(MarkdownSyntax::render(0, "A"), "# A");
    assert_eq!(MarkdownSyntax::render(3, "A"), "### A");
    assert_eq!(MarkdownSyntax::render(9, "A"), "###### A");
}

#[test]
fn test_keyword_families() {
    assert_eq!(KeywordSyntax::family("第一章 始まり"), Some(Family::Chapter));
    assert_eq!(KeywordSyntax::family("第2部"), Some(Family::Part));
    assert_eq!(KeywordSyntax::family("第三節"), Some(Family::Section));
    assert_eq!(KeywordSyntax::family("セクション1-2"), Some(Family::Section));
    assert_eq!(KeywordSyntax::family("サブセクション3"), Some(Family::Subsection));
    assert_eq!(KeywordSyntax::family("Chapter 4: The Storm"), Some(Family::Chapter));
    assert_eq!(KeywordSyntax::family("SECTION 2"), Some(Family::Section));
    assert_eq!(KeywordSyntax::family("subsection 2-1"), Some(Family::Subsection));
    assert_eq!(KeywordSyntax::family("Part 1"), Some(Family::Part));
    assert_eq!(KeywordSyntax::family("Part-time work"), None);
    assert_eq!(KeywordSyntax::family("Sectional sofa"), None);
}

#[test]
fn test_keyword_levels() {
    let syntax = KeywordSyntax::new(100);
    let level = |line: &str| syntax.detect(line).map(|h| h.level);

    assert_eq!(level("Chapter 1"), Some(1));
    assert_eq!(level("Part 2"), Some(1));
    assert_eq!(level("Section 3"), Some(2));
    assert_eq!(level("Subsection 4"), Some(3));
    assert_eq!(level("Just prose"), None);
}

#[test]
fn test_keyword_trims_and_caps_length() {
    let syntax = KeywordSyntax::new(100);
    assert_eq!(
        syntax.detect("   Chapter 1  ").map(|h| h.text),
        Some("Chapter 1".to_string())
    );
    assert_eq!(syntax.detect("   "), None);

    let long = format!("Chapter 1 {}", "x".repeat(90));
    assert_eq!(long.chars().count(), 100);
    assert_eq!(syntax.detect(&long), None);

    let just_under = format!("Chapter 1 {}", "x".repeat(89));
    assert!(syntax.detect(&just_under).is_some());
}

#[test]
fn test_classify_prefers_markdown_everywhere() {
    let scan = scan("Chapter 1\n# Real\nSection 2");
    assert_eq!(scan.mode, DetectionMode::Markdown);
    assert!(scan.heading(0).is_none());
    assert_eq!(scan.heading(1).map(|h| h.text.as_str()), Some("Real"));
    assert!(scan.heading(2).is_none());
}

#[test]
fn test_classify_falls_back_to_keywords() {
    let scan = scan("Chapter 1\ntext\nSection 2\n\nmore");
    assert_eq!(scan.mode, DetectionMode::Keyword);
    assert_eq!(scan.heading(0).map(|h| h.level), Some(1));
    assert_eq!(scan.heading(2).map(|h| h.level), Some(2));
    assert!(scan.heading(3).is_none());
}

#[test]
fn test_fenced_code_skipped_when_configured() {
    let text = "```\n# not a heading\n```\nChapter 1";
    let lines: Vec<&str> = text.split('\n').collect();

    let plain = HeadingScan::new(&lines, &Config::default());
    assert_eq!(plain.mode, DetectionMode::Markdown);
    assert!(plain.heading(1).is_some());

    let config = Config {
        skip_fenced_code: true,
        ..Config::default()
    };
    let fenced = HeadingScan::new(&lines, &config);
    assert_eq!(fenced.mode, DetectionMode::Keyword);
    assert!(fenced.heading(1).is_none());
    assert_eq!(fenced.heading(3).map(|h| h.level), Some(1));
}
