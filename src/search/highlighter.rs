use regex::{ Regex, RegexBuilder };

use crate::content::{ ContentTree, NodeId };

pub const MIN_TERM_CHARS: usize = 2;

/// One highlighted occurrence: a byte range inside one text node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HighlightMark {
    pub node: NodeId,
    pub start: usize,
    pub end: usize,
}

impl HighlightMark {
    /// DOM id of the `<mark>` rendered for the `index`-th mark.
    pub fn dom_id(index: usize) -> String {
        format!("search-mark-{}", index)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SearchOutcome {
    /// Term too short: marks were cleared and nothing else happened.
    Cleared,
    NoResults,
    Found {
        count: usize,
        first: HighlightMark,
    },
}

/// A run of text inside one node, either plain or highlighted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    /// Global index of the mark, `None` for plain text.
    pub mark: Option<usize>,
}

/// Case-insensitive literal search over a [`ContentTree`]. The tree itself
/// is never mutated; the active marks are the only state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchHighlighter {
    marks: Vec<HighlightMark>,
}

impl SearchHighlighter {
    pub fn marks(&self) -> &[HighlightMark] {
        &self.marks
    }

    pub fn clear(&mut self) {
        if !self.marks.is_empty() {
            log::debug!("Clearing {} highlight(s)", self.marks.len());
        }
        self.marks.clear();
    }

    pub fn on_query_change(&mut self, tree: &ContentTree, term: &str) -> SearchOutcome {
        self.clear();

        let term = term.trim();
        if term.chars().count() < MIN_TERM_CHARS {
            return SearchOutcome::Cleared;
        }

        let pattern = match literal_pattern(term) {
            Ok(re) => re,
            Err(e) => {
                log::warn!("Could not build search pattern for {:?}: {}", term, e);
                return SearchOutcome::NoResults;
            }
        };

        for node in tree.nodes() {
            if !node.parent.is_prose() || node.text.trim().is_empty() {
                continue;
            }
            self.marks.extend(
                pattern.find_iter(&node.text).map(|m| HighlightMark {
                    node: node.id,
                    start: m.start(),
                    end: m.end(),
                })
            );
        }

        log::debug!("Search {:?} matched {} time(s)", term, self.marks.len());
        match self.marks.first() {
            Some(first) =>
                SearchOutcome::Found {
                    count: self.marks.len(),
                    first: *first,
                },
            None => SearchOutcome::NoResults,
        }
    }

    /// Splits a node's text into plain and highlighted runs. Concatenating
    /// the runs always gives back `text` unchanged.
    pub fn segments<'a>(&self, node: NodeId, text: &'a str) -> Vec<Segment<'a>> {
        let mut out = Vec::new();
        let mut cursor = 0;
        for (index, mark) in self.marks.iter().enumerate() {
            if mark.node != node {
                continue;
            }
            if mark.start > cursor {
                out.push(Segment { text: &text[cursor..mark.start], mark: None });
            }
            out.push(Segment { text: &text[mark.start..mark.end], mark: Some(index) });
            cursor = mark.end;
        }
        if cursor < text.len() || out.is_empty() {
            out.push(Segment { text: &text[cursor..], mark: None });
        }
        out
    }
}

/// The term is always literal text, never a pattern.
fn literal_pattern(term: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&regex::escape(term)).case_insensitive(true).build()
}
