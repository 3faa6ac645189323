//! Static page definitions. Each page is a [`PageProfile`]: its prose,
//! its modal topics, its quiz and the handful of knobs that differ
//! between the cancer and tobacco pages.

mod cancer;
mod home;
mod modal;
mod tabac;
mod tree;

pub use modal::{ ModalEntry, ModalState };
pub use tree::{
    BlockNode,
    CardNode,
    ContentTree,
    NodeId,
    SectionNode,
    StatNode,
    Tag,
    TextNode,
    TopicNode,
};

use crate::quiz::Question;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunKind {
    Plain,
    Strong,
    Em,
    Code,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Run {
    pub kind: RunKind,
    pub text: &'static str,
}

impl Run {
    pub const fn plain(text: &'static str) -> Self {
        Self { kind: RunKind::Plain, text }
    }

    pub const fn strong(text: &'static str) -> Self {
        Self { kind: RunKind::Strong, text }
    }

    pub const fn em(text: &'static str) -> Self {
        Self { kind: RunKind::Em, text }
    }

    pub const fn code(text: &'static str) -> Self {
        Self { kind: RunKind::Code, text }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardSpec {
    pub title: &'static str,
    pub text: &'static str,
    pub toast: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TopicSpec {
    pub key: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatSpec {
    pub label: &'static str,
    pub count: u32,
    pub suffix: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BlockSpec {
    Para(&'static [Run]),
    Bullets(&'static [&'static [Run]]),
    Cards(&'static [CardSpec]),
    Topics(&'static [TopicSpec]),
    Stats(&'static [StatSpec]),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionSpec {
    pub id: &'static str,
    pub title: &'static str,
    pub toc_label: Option<&'static str>,
    pub blocks: &'static [BlockSpec],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VerdictColors {
    pub neutral: &'static str,
    pub correct: &'static str,
    pub incorrect: &'static str,
}

/// A landing-page card linking to one of the awareness pages.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectCard {
    pub id: &'static str,
    pub title: &'static str,
    pub text: &'static str,
    pub hover_toast: &'static str,
    pub slug: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct PageProfile {
    pub slug: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub theme_key: &'static str,
    pub toast_ms: u32,
    pub counter_ms: u32,
    pub found_label: &'static str,
    pub verdict_colors: VerdictColors,
    pub sections: &'static [SectionSpec],
    pub modals: &'static [(&'static str, ModalEntry)],
    pub cheat_sheet: Option<&'static str>,
    pub quiz: &'static [Question],
    pub projects: &'static [ProjectCard],
}

impl PageProfile {
    pub fn modal(&self, key: &str) -> Option<&'static ModalEntry> {
        let modals: &'static [(&'static str, ModalEntry)] = self.modals;
        modals
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, entry)| entry)
    }

    /// TOC anchors in page order; the quiz gets a link when there is one.
    pub fn toc_links(&self) -> Vec<(&'static str, &'static str)> {
        let mut links: Vec<_> = self.sections
            .iter()
            .filter_map(|s| s.toc_label.map(|label| (s.id, label)))
            .collect();
        if !self.quiz.is_empty() {
            links.push((QUIZ_SECTION_ID, "Quiz"));
        }
        links
    }

    pub fn found_message(&self, count: usize) -> String {
        format!("{} {} occurrence(s)", self.found_label, count)
    }
}

pub const QUIZ_SECTION_ID: &str = "quiz";
pub const NO_RESULTS_MESSAGE: &str = "Aucun résultat";
pub const QUIZ_CHECKED_MESSAGE: &str = "Quiz corrigé ✅";
pub const QUIZ_RESET_MESSAGE: &str = "Quiz réinitialisé";

const DEFAULT_VERDICT_COLORS: VerdictColors = VerdictColors {
    neutral: "var(--border)",
    correct: "rgba(66,245,164,0.65)",
    incorrect: "rgba(255,107,138,0.65)",
};

pub static HOME: PageProfile = home::PROFILE;
pub static CANCER: PageProfile = cancer::PROFILE;
pub static TABAC: PageProfile = tabac::PROFILE;
