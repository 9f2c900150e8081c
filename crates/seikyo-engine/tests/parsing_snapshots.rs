use proptest::prelude::*;
use seikyo_engine::models::{Chapter, GlossaryEntry};
use seikyo_engine::parsing::inline::{GlossaryIndex, compose, display_text, strip_notation};
use seikyo_engine::parsing::{render_chapter, segment, snapshot};

#[test]
fn fixture_kyogyoshinsho_citations() {
    assert_fixture("kyogyoshinsho_citations");
}

#[test]
fn fixture_tannisho_extension() {
    assert_fixture("tannisho_extension");
}

fn assert_fixture(name: &str) {
    let json = std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.json",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();
    let chapter: Chapter = serde_json::from_str(&json).unwrap();

    let rendered = render_chapter(&chapter.content, &chapter.glossary);
    snapshot::invariants(&rendered);

    let snap = snapshot::normalize(&rendered);
    insta::assert_snapshot!(name, snap.to_string());
}

/// Block contents, read in order, cover every non-blank source line.
#[test]
fn segmentation_keeps_every_line() {
    let content = "序\n大経言\n本文\n\n\n\n続き\n已上\n謹按 釈\n然 釈";
    let blocks = segment(content);

    let kept: Vec<&str> = blocks
        .iter()
        .flat_map(|b| b.lines())
        .filter(|l| !l.trim().is_empty())
        .collect();
    let source: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
    assert_eq!(kept, source);
    assert!(blocks.iter().all(|b| !b.content.contains("\n\n\n")));
}

fn glossary() -> Vec<GlossaryEntry> {
    vec![
        GlossaryEntry::new("信心", "しんじん", "faith"),
        GlossaryEntry::new("信", "しん", "trust"),
        GlossaryEntry::new("サトリ", "さとり", "awakening"),
        GlossaryEntry::new("本願", "ほんがん", "primal vow"),
    ]
}

/// Content built from fragments that exercise notation, terms, folding and
/// malformed braces.
fn content_strategy() -> impl Strategy<Value = String> {
    let fragment = prop_oneof![
        Just("{信|しん}"),
        Just("{心|じん}"),
        Just("{覚|さと}"),
        Just("り"),
        Just("サトリ"),
        Just("本願"),
        Just("信心"),
        Just("{本|ほん}"),
        Just("{願|がん}"),
        Just("{"),
        Just("|"),
        Just("}"),
        Just("{|}"),
        Just("念仏"),
        Just("、"),
    ];
    prop::collection::vec(fragment, 0..24).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn composed_nodes_tile_their_source(content in content_strategy()) {
        let entries = glossary();
        let index = GlossaryIndex::build(&entries);
        let nodes = compose(&content, &index);
        prop_assert_eq!(display_text(&nodes), strip_notation(&content));
    }

    #[test]
    fn composition_is_deterministic(content in content_strategy()) {
        let entries = glossary();
        let index = GlossaryIndex::build(&entries);
        prop_assert_eq!(compose(&content, &index), compose(&content, &index));
    }

    #[test]
    fn rendered_chapters_hold_invariants(
        lines in prop::collection::vec(
            prop_oneof![
                content_strategy(),
                Just("大経言".to_string()),
                Just("又云".to_string()),
                Just("已上".to_string()),
                Just("謹按".to_string()),
                Just(String::new()),
            ],
            0..12,
        )
    ) {
        let rendered = render_chapter(&lines.join("\n"), &glossary());
        snapshot::invariants(&rendered);
    }
}
