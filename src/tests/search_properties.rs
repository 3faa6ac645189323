use super::common;
use crate::content::{ ContentTree, Tag, CANCER };
use crate::search::{ SearchHighlighter, SearchOutcome };

fn tree(texts: &[(Tag, &str)]) -> ContentTree {
    let mut tree = ContentTree::default();
    for (tag, text) in texts {
        tree.push_text(*tag, *text);
    }
    tree
}

/// Rebuilds the visible text from the rendered segments.
fn rendered_text(tree: &ContentTree, search: &SearchHighlighter) -> String {
    tree.nodes()
        .iter()
        .flat_map(|n| search.segments(n.id, &n.text))
        .map(|s| s.text)
        .collect()
}

#[test]
fn test_one_char_never_marks() {
    common::setup();
    let tree = ContentTree::from_sections(CANCER.sections);
    let mut search = SearchHighlighter::default();
    for term in ["a", "é", " e ", ""] {
        assert_eq!(search.on_query_change(&tree, term), SearchOutcome::Cleared);
        assert!(search.marks().is_empty());
    }
}

#[test]
fn test_exactly_two_occurrences() {
    let tree = tree(&[
        (Tag::P, "Les goudrons contiennent des cancérigènes."),
        (Tag::Li, "Moins de Goudrons, moins de risque."),
        (Tag::P, "Rien ici."),
    ]);
    let mut search = SearchHighlighter::default();
    let outcome = search.on_query_change(&tree, "goudrons");

    assert!(matches!(outcome, SearchOutcome::Found { count: 2, .. }));
    assert_eq!(search.marks().len(), 2);
}

#[test]
fn test_clear_restores_text() {
    let tree = ContentTree::from_sections(CANCER.sections);
    let before = tree.text_content();
    let mut search = SearchHighlighter::default();

    search.on_query_change(&tree, "ADN");
    assert!(!search.marks().is_empty());
    assert_eq!(rendered_text(&tree, &search), before);

    search.on_query_change(&tree, "x");
    assert!(search.marks().is_empty());
    assert_eq!(rendered_text(&tree, &search), before);
}

#[test]
fn test_metacharacters_are_literal() {
    let tree = tree(&[
        (Tag::P, "axb ne doit pas correspondre"),
        (Tag::P, "mais a.b oui"),
    ]);
    let mut search = SearchHighlighter::default();
    let outcome = search.on_query_change(&tree, "a.b");

    match outcome {
        SearchOutcome::Found { count, first } => {
            assert_eq!(count, 1);
            assert_eq!(first.node, 1);
            assert_eq!(&tree.node(1).unwrap().text[first.start..first.end], "a.b");
        }
        other => panic!("expected a match, got {:?}", other),
    }

    for term in ["(?i)", "[a-z]+", "\\d", "^$"] {
        assert_eq!(search.on_query_change(&tree, term), SearchOutcome::NoResults);
    }
}

#[test]
fn test_requery_replaces_marks() {
    let tree = tree(&[(Tag::P, "poumon, gorge, poumon")]);
    let mut search = SearchHighlighter::default();
    search.on_query_change(&tree, "poumon");
    assert_eq!(search.marks().len(), 2);
    search.on_query_change(&tree, "gorge");
    assert_eq!(search.marks().len(), 1);
}
