use mindnav_bedrock::sections::{OTHER_TITLE, parse_report_sections};
use mindnav_core::models::section::{ProfileScoreEntry, SectionBody, SectionIcon};

#[test]
fn empty_input_yields_no_sections() {
    assert!(parse_report_sections("").is_empty());
    assert!(parse_report_sections("   \n\n\t").is_empty());
}

#[test]
fn headerless_text_becomes_one_catch_all_section() {
    let sections = parse_report_sections("zomaar wat tekst zonder kopjes");

    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].title, OTHER_TITLE);
    assert_eq!(sections[0].icon, SectionIcon::Info);
    assert_eq!(
        sections[0].body,
        SectionBody::Text("zomaar wat tekst zonder kopjes".to_string())
    );
}

#[test]
fn canonical_response_splits_into_four_sections() {
    let input = "Jouw Profiel In Vogelvlucht\n\
                 Algemene tekst\n\
                 Sterke Kanten\n\
                 - Punt A\n\
                 Aandachtspunten\n\
                 - Punt B\n\
                 Tips voor Jou\n\
                 - Tip C";

    let sections = parse_report_sections(input);
    assert_eq!(sections.len(), 4);

    assert_eq!(sections[0].title, "Jouw Profiel In Vogelvlucht");
    assert_eq!(sections[0].icon, SectionIcon::Profile);
    match &sections[0].body {
        SectionBody::Profile(overview) => {
            assert_eq!(overview.general.as_deref(), Some("Algemene tekst"));
            assert!(overview.insights.is_empty());
        }
        other => panic!("expected profile body, got {other:?}"),
    }

    assert_eq!(sections[1].title, "Sterke Kanten");
    assert_eq!(sections[1].icon, SectionIcon::Strengths);
    assert_eq!(sections[1].body, SectionBody::Items(vec!["Punt A".into()]));

    assert_eq!(sections[2].title, "Aandachtspunten");
    assert_eq!(sections[2].icon, SectionIcon::Attention);
    assert_eq!(sections[2].body, SectionBody::Items(vec!["Punt B".into()]));

    assert_eq!(sections[3].title, "Tips voor Jou");
    assert_eq!(sections[3].icon, SectionIcon::Tips);
    assert_eq!(sections[3].body, SectionBody::Items(vec!["Tip C".into()]));
}

#[test]
fn headers_match_case_insensitively_with_markup() {
    let input = "## **JOUW PROFIEL IN VOGELVLUCHT**\n\
                 Een rustig beeld.\n\
                 ## sterke kanten:\n\
                 - **Doorzetten**";

    let sections = parse_report_sections(input);
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].title, "Jouw Profiel In Vogelvlucht");
    assert_eq!(
        sections[1].body,
        SectionBody::Items(vec!["Doorzetten".into()])
    );
}

#[test]
fn emphasis_stripping_is_idempotent() {
    let marked = "**Sterke Kanten**\n- *Punt A*\n- Punt B";
    let plain = "Sterke Kanten\n- Punt A\n- Punt B";

    let from_marked = parse_report_sections(marked);
    let from_plain = parse_report_sections(plain);

    // Stripping already-stripped text is a no-op, so both inputs parse
    // identically.
    assert_eq!(from_marked, from_plain);
}

#[test]
fn profile_score_lines_are_parsed_in_all_three_shapes() {
    let input = "Jouw Profiel In Vogelvlucht\n\
                 Aandacht & Focus: 85 (sterk aanwezig)\n\
                 Prikkelverwerking (72): let hier op\n\
                 Stemming & Spanning: (64) rustig aan\n\
                 Dit is een vrije zin zonder score.\n\
                 Score met komma: 3,5 (gemiddeld)";

    let sections = parse_report_sections(input);
    assert_eq!(sections.len(), 1);

    let SectionBody::Profile(overview) = &sections[0].body else {
        panic!("expected profile body");
    };

    assert_eq!(
        overview.insights,
        vec![
            ProfileScoreEntry {
                profile_name: "Aandacht & Focus".into(),
                score: 85.0,
                comment: "sterk aanwezig".into(),
            },
            ProfileScoreEntry {
                profile_name: "Prikkelverwerking".into(),
                score: 72.0,
                comment: "let hier op".into(),
            },
            ProfileScoreEntry {
                profile_name: "Stemming & Spanning".into(),
                score: 64.0,
                comment: "rustig aan".into(),
            },
            ProfileScoreEntry {
                profile_name: "Score met komma".into(),
                score: 3.5,
                comment: "gemiddeld".into(),
            },
        ]
    );
    assert_eq!(
        overview.general.as_deref(),
        Some("Dit is een vrije zin zonder score.")
    );
}

#[test]
fn bulleted_profile_lines_lose_their_markers() {
    let input = "Jouw Profiel In Vogelvlucht\n\
                 - Aandacht & Focus: 85 (ok)\n\
                 • Prikkelverwerking: 60 (ok)";

    let sections = parse_report_sections(input);
    let SectionBody::Profile(overview) = &sections[0].body else {
        panic!("expected profile body");
    };
    assert_eq!(overview.insights.len(), 2);
    assert_eq!(overview.insights[0].profile_name, "Aandacht & Focus");
}

#[test]
fn empty_profile_section_is_dropped() {
    let input = "Jouw Profiel In Vogelvlucht\n\nSterke Kanten\n- Punt A";

    let sections = parse_report_sections(input);
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].title, "Sterke Kanten");
}

#[test]
fn empty_plain_sections_are_dropped() {
    let input = "Aandachtspunten\n\nTips voor Jou\n- Tip";

    let sections = parse_report_sections(input);
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].title, "Tips voor Jou");
}

#[test]
fn mixed_content_stays_text_rather_than_list() {
    let input = "Sterke Kanten\nEen inleidende zin.\n- Punt A";

    let sections = parse_report_sections(input);
    let SectionBody::Text(text) = &sections[0].body else {
        panic!("expected text body");
    };
    assert!(text.contains("inleidende zin"));
    assert!(text.contains("- Punt A"));
}

#[test]
fn headers_are_claimed_in_priority_order_not_source_order() {
    // "Sterke Kanten" appears first in the text, but the profile header is
    // claimed first, so the strengths block ends up as orphaned leading
    // text in the catch-all.
    let input = "Sterke Kanten\n- Punt A\nJouw Profiel In Vogelvlucht\nNaam: 85 (ok)";

    let sections = parse_report_sections(input);
    assert_eq!(sections.len(), 2);

    assert_eq!(sections[0].title, OTHER_TITLE);
    let SectionBody::Text(text) = &sections[0].body else {
        panic!("expected text body");
    };
    assert!(text.contains("Sterke Kanten"));
    assert!(text.contains("- Punt A"));

    assert_eq!(sections[1].title, "Jouw Profiel In Vogelvlucht");
}

#[test]
fn second_orphaned_leading_text_is_dropped() {
    // "Intro" is captured into the catch-all; the out-of-order Tips block
    // is a second orphan and disappears.
    let input = "Intro\n\
                 Sterke Kanten\n\
                 - A\n\
                 Tips voor Jou\n\
                 - T\n\
                 Aandachtspunten\n\
                 - P";

    let sections = parse_report_sections(input);

    let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec![OTHER_TITLE, "Sterke Kanten", "Aandachtspunten"]);

    assert_eq!(sections[0].body, SectionBody::Text("Intro".to_string()));

    // The Tips content is gone entirely.
    for section in &sections {
        match &section.body {
            SectionBody::Text(text) => assert!(!text.contains("- T")),
            SectionBody::Items(items) => assert!(items.iter().all(|i| i != "T")),
            SectionBody::Profile(_) => {}
        }
    }
}

#[test]
fn trailing_text_after_sections_lands_in_the_catch_all() {
    let input = "Sterke Kanten\n- A\nTips voor Jou\n- T\nSterke Kanten\n- B";

    let sections = parse_report_sections(input);
    let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Sterke Kanten", "Tips voor Jou", OTHER_TITLE]);

    let SectionBody::Text(text) = &sections[2].body else {
        panic!("expected text body");
    };
    assert!(text.contains("- B"));
}

#[test]
fn trailing_text_merges_into_an_existing_catch_all() {
    let input = "Intro\nSterke Kanten\n- A\nTips voor Jou\n- T\nSterke Kanten\n- B";

    let sections = parse_report_sections(input);
    let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
    // The catch-all keeps its leading position and absorbs the trailing text.
    assert_eq!(titles, vec![OTHER_TITLE, "Sterke Kanten", "Tips voor Jou"]);

    let SectionBody::Text(text) = &sections[0].body else {
        panic!("expected text body");
    };
    assert!(text.starts_with("Intro"));
    assert!(text.contains("- B"));
}

#[test]
fn garbage_input_never_panics() {
    let inputs = [
        "(((((",
        ":::::\n:::",
        "Jouw Profiel In Vogelvlucht",
        "Sterke Kanten Sterke Kanten",
        "- \n- \n- ",
        "**",
        "####",
        "a: (,) b",
        "\u{0} rare bytes \u{7f}",
    ];

    for input in inputs {
        // Must return, not panic; content is allowed to be empty.
        let _ = parse_report_sections(input);
    }
}
