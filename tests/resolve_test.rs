//! Integration tests for heading resolution.

use pagemark::resolve::{
    select_candidate, EstimateBasis, HeadingLocator, ResolutionCursor, StrategyKind,
};
use pagemark::{
    resolve_outline, resolve_with_options, Heading, HeadingLevel, PageCorpus, Resolution,
    ResolveOptions,
};

fn h1(text: &str) -> Heading {
    Heading::new(HeadingLevel::H1, text).unwrap()
}

fn h2(text: &str) -> Heading {
    Heading::new(HeadingLevel::H2, text).unwrap()
}

fn locator() -> HeadingLocator {
    HeadingLocator::new(&ResolveOptions::default()).unwrap()
}

/// A report with a table of contents on page 1, a gap on page 5 and a
/// heading that never appears in the text.
fn report_corpus() -> (PageCorpus, Vec<Heading>) {
    let corpus = PageCorpus::from_pages([
        "Annual Report\nContents\n1. Overview 2\n2. Operations Review 3\n3. Financial Statements 4",
        "1. Overview\nThe year was shaped by expansion into two new markets.",
        "2. Operations Review\nPlants ran at full capacity for most of the year.",
        "3. Financial Statements\nRevenue grew by eleven percent.",
        "Notes to the statements continue here.",
        "Appendix: Glossary of Terms\nCapacity: maximum sustainable output.",
    ]);
    let headings = vec![
        h1("1. Overview"),
        h1("2. Operations Review"),
        h1("3. Financial Statements"),
        h2("Auditor Remarks"),
        h1("Appendix: Glossary of Terms"),
    ];
    (corpus, headings)
}

#[test]
fn test_introduction_to_systems_skips_toc_occurrence() {
    let corpus = PageCorpus::from_pages([
        "Introduction to Systems",
        "Background",
        "Introduction to Systems details follow",
    ]);

    let located = locator()
        .locate("Introduction to Systems", &corpus, ResolutionCursor::new())
        .unwrap();
    assert_eq!(located.candidates, vec![1, 3]);
    assert_eq!(located.page, 3);
    assert_eq!(located.strategy, "exact");
}

#[test]
fn test_bar_baz_resolves_to_page_two() {
    let corpus = PageCorpus::from_pages(["foo", "bar baz qux"]);
    let outline = resolve_outline("Doc", vec![h2("Bar Baz")], &corpus).unwrap();
    assert_eq!(outline.headings[0].page, 2);
}

#[test]
fn test_empty_corpus_estimates_page_one() {
    let corpus = PageCorpus::new();
    assert!(locator()
        .locate("Anything", &corpus, ResolutionCursor::new())
        .is_none());

    let resolved = resolve_with_options(
        "Doc",
        vec![h1("Anything"), h2("Anything Else")],
        corpus,
        &ResolveOptions::default(),
    )
    .unwrap();
    assert!(resolved.outline.headings.iter().all(|h| h.page == 1));
    assert_eq!(resolved.report.stats.estimated, 2);
}

#[test]
fn test_first_occurrence_skip_picks_second_page() {
    let pages: Vec<String> = (1..=8)
        .map(|n| match n {
            3 | 7 => "Risk Assessment Method".to_string(),
            _ => format!("Unrelated page {}", n),
        })
        .collect();
    let corpus = PageCorpus::from_pages(pages);

    let located = locator()
        .locate("Risk Assessment Method", &corpus, ResolutionCursor::new())
        .unwrap();
    assert_eq!(located.page, 7);
}

#[test]
fn test_forward_window_never_looks_back() {
    let pages: Vec<String> = (1..=8)
        .map(|n| match n {
            2 => "Deployment Checklist".to_string(),
            _ => format!("Filler text for page {}", n),
        })
        .collect();
    let corpus = PageCorpus::from_pages(pages);
    let cursor = ResolutionCursor::at(5);

    let located = locator().locate("Deployment Checklist", &corpus, cursor);
    assert!(located.map_or(true, |l| l.page >= 6));
}

#[test]
fn test_forward_window_takes_first_candidate_after_cursor() {
    let pages: Vec<String> = (1..=8)
        .map(|n| match n {
            2 | 6 | 8 => "Deployment Checklist".to_string(),
            _ => format!("Filler text for page {}", n),
        })
        .collect();
    let corpus = PageCorpus::from_pages(pages);

    let located = locator()
        .locate("Deployment Checklist", &corpus, ResolutionCursor::at(5))
        .unwrap();
    assert_eq!(located.candidates, vec![6, 8]);
    assert_eq!(located.page, 6);
}

#[test]
fn test_exact_match_wins_over_fuzzy_matches() {
    let corpus = PageCorpus::from_pages([
        "Cover",
        "summary of quarterly revenue and costs",
        "revenue summary per quarterly period",
        "Quarterly Revenue Summary\nTables follow.",
        "quarterly summary of revenue appendix",
    ]);
    let resolved = resolve_with_options(
        "Doc",
        vec![h1("Cover Page"), h1("Quarterly Revenue Summary")],
        corpus,
        &ResolveOptions::new().with_skip_first_occurrence(false),
    )
    .unwrap();

    let record = &resolved.report.headings[1];
    assert_eq!(record.resolution.strategy(), Some("exact"));
    assert_eq!(record.page, 4);
}

#[test]
fn test_numbered_heading_matches_unnumbered_body() {
    let corpus = PageCorpus::from_pages(["Title page", "Data Flow\nInputs arrive from sensors."]);
    let outline = resolve_outline("Doc", vec![h2("3.2 Data Flow")], &corpus).unwrap();
    assert_eq!(outline.headings[0].page, 2);
}

#[test]
fn test_phrase_fallback() {
    let corpus = PageCorpus::from_pages([
        "Contents",
        "Scope",
        "The regional water quality board met twice.",
    ]);
    let resolved = resolve_with_options(
        "Doc",
        vec![
            h1("Contents"),
            h1("Annual report on regional water quality standards"),
        ],
        corpus,
        &ResolveOptions::default(),
    )
    .unwrap();

    let record = &resolved.report.headings[1];
    assert_eq!(record.resolution.strategy(), Some("phrase"));
    assert_eq!(record.page, 3);
}

#[test]
fn test_numeric_only_heading_matches_window() {
    let corpus = PageCorpus::from_pages(["Contents 2024", "Intro", "2024 results"]);
    let resolved = resolve_with_options(
        "Doc",
        vec![h1("2024"), h2("Intro Notes")],
        corpus,
        &ResolveOptions::default(),
    )
    .unwrap();

    let record = &resolved.report.headings[0];
    assert_eq!(record.page, 2);
    assert_eq!(
        record.resolution,
        Resolution::Matched {
            strategy: "exact".to_string(),
            candidates: vec![1, 2, 3],
        }
    );
}

#[test]
fn test_page_bounds() {
    let (corpus, headings) = report_corpus();
    let max_page = corpus.max_page();
    let outline = resolve_outline("Annual Report", headings, &corpus).unwrap();

    for entry in &outline.headings {
        assert!(entry.page >= 1 && entry.page <= max_page, "{:?}", entry);
    }
}

#[test]
fn test_fallback_never_regresses_behind_cursor() {
    let (corpus, headings) = report_corpus();
    let resolved =
        resolve_with_options("Annual Report", headings, corpus, &ResolveOptions::default())
            .unwrap();

    let records = &resolved.report.headings;
    for pair in records.windows(2) {
        if pair[0].resolution.is_matched() && !pair[1].resolution.is_matched() {
            assert!(pair[1].page >= pair[0].page);
        }
        assert!(pair[1].page >= pair[0].page);
    }

    let pages: Vec<u32> = records.iter().map(|r| r.page).collect();
    assert_eq!(pages, vec![2, 3, 4, 5, 6]);
    assert_eq!(
        records[3].resolution,
        Resolution::Estimated {
            basis: EstimateBasis::Cursor
        }
    );
}

#[test]
fn test_resolution_is_idempotent() {
    let (corpus, headings) = report_corpus();
    let options = ResolveOptions::default();

    let first =
        resolve_with_options("Annual Report", headings.clone(), corpus.clone(), &options).unwrap();
    let second = resolve_with_options("Annual Report", headings, corpus, &options).unwrap();

    assert_eq!(first.outline, second.outline);
    assert_eq!(first.report, second.report);
}

#[test]
fn test_estimate_clamps_to_last_page() {
    let corpus = PageCorpus::from_pages(["Alpha Section", "Omega Section"]);
    let outline = resolve_outline(
        "Doc",
        vec![h1("Omega Section"), h1("Missing Heading")],
        &corpus,
    )
    .unwrap();

    assert_eq!(outline.headings[0].page, 2);
    assert_eq!(outline.headings[1].page, 2);
}

#[test]
fn test_custom_strategy_chain() {
    let corpus = PageCorpus::from_pages(["Cover", "bar baz qux"]);
    let options = ResolveOptions::new().with_strategies(vec![StrategyKind::WordOverlap]);
    let resolved = resolve_with_options("Doc", vec![h2("Bar Baz")], corpus, &options).unwrap();

    assert_eq!(
        resolved.report.headings[0].resolution.strategy(),
        Some("word_overlap")
    );
}

#[test]
fn test_select_candidate_rules() {
    assert_eq!(select_candidate(&[], true), None);
    assert_eq!(select_candidate(&[4], true), Some(4));
    assert_eq!(select_candidate(&[3, 7], true), Some(7));
    assert_eq!(select_candidate(&[3, 7], false), Some(3));
}

#[test]
fn test_stats_count_every_heading() {
    let (corpus, headings) = report_corpus();
    let resolved =
        resolve_with_options("Annual Report", headings, corpus, &ResolveOptions::default())
            .unwrap();

    let stats = &resolved.report.stats;
    assert_eq!(stats.heading_count, 5);
    assert_eq!(stats.matched_count() + stats.estimated, 5);
    assert_eq!(stats.estimated, 1);
}
