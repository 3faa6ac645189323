use super::{ BlockSpec, Run, RunKind, SectionSpec };

pub type NodeId = usize;

/// Element that directly contains a text node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tag {
    H2,
    H3,
    P,
    Li,
    Strong,
    Em,
    Span,
    Button,
    Code,
    Script,
    Style,
    Input,
    Textarea,
}

impl Tag {
    /// Text under these is never searched or highlighted.
    pub fn is_prose(&self) -> bool {
        !matches!(self, Tag::Code | Tag::Script | Tag::Style | Tag::Input | Tag::Textarea)
    }

    fn for_run(kind: RunKind, block: Tag) -> Tag {
        match kind {
            RunKind::Plain => block,
            RunKind::Strong => Tag::Strong,
            RunKind::Em => Tag::Em,
            RunKind::Code => Tag::Code,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextNode {
    pub id: NodeId,
    pub parent: Tag,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CardNode {
    pub title: NodeId,
    pub text: NodeId,
    pub toast: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TopicNode {
    pub key: &'static str,
    pub label: NodeId,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StatNode {
    pub label: NodeId,
    pub counter: usize,
    pub suffix: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub enum BlockNode {
    Para(Vec<NodeId>),
    Bullets(Vec<Vec<NodeId>>),
    Cards(Vec<CardNode>),
    Topics(Vec<TopicNode>),
    Stats(Vec<StatNode>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionNode {
    pub id: &'static str,
    pub title: NodeId,
    pub blocks: Vec<BlockNode>,
}

/// The searchable content root: every text node in document order plus the
/// block structure needed to render them back.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContentTree {
    nodes: Vec<TextNode>,
    sections: Vec<SectionNode>,
    counters: Vec<u32>,
}

impl ContentTree {
    pub fn from_sections(specs: &[SectionSpec]) -> Self {
        let mut tree = Self::default();
        for spec in specs {
            let title = tree.push_text(Tag::H2, spec.title);
            let blocks = spec.blocks
                .iter()
                .map(|block| tree.push_block(block))
                .collect();
            tree.sections.push(SectionNode {
                id: spec.id,
                title,
                blocks,
            });
        }
        tree
    }

    pub fn push_text(&mut self, parent: Tag, text: impl Into<String>) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(TextNode {
            id,
            parent,
            text: text.into(),
        });
        id
    }

    fn push_runs(&mut self, runs: &[Run], block: Tag) -> Vec<NodeId> {
        runs.iter()
            .map(|run| self.push_text(Tag::for_run(run.kind, block), run.text))
            .collect()
    }

    fn push_block(&mut self, block: &BlockSpec) -> BlockNode {
        match block {
            BlockSpec::Para(runs) => BlockNode::Para(self.push_runs(runs, Tag::P)),
            BlockSpec::Bullets(items) =>
                BlockNode::Bullets(
                    items
                        .iter()
                        .map(|runs| self.push_runs(runs, Tag::Li))
                        .collect()
                ),
            BlockSpec::Cards(cards) =>
                BlockNode::Cards(
                    cards
                        .iter()
                        .map(|card| CardNode {
                            title: self.push_text(Tag::H3, card.title),
                            text: self.push_text(Tag::P, card.text),
                            toast: card.toast,
                        })
                        .collect()
                ),
            BlockSpec::Topics(topics) =>
                BlockNode::Topics(
                    topics
                        .iter()
                        .map(|topic| TopicNode {
                            key: topic.key,
                            label: self.push_text(Tag::Button, topic.label),
                        })
                        .collect()
                ),
            BlockSpec::Stats(stats) =>
                BlockNode::Stats(
                    stats
                        .iter()
                        .map(|stat| {
                            let label = self.push_text(Tag::Span, stat.label);
                            self.counters.push(stat.count);
                            StatNode {
                                label,
                                counter: self.counters.len() - 1,
                                suffix: stat.suffix,
                            }
                        })
                        .collect()
                ),
        }
    }

    pub fn nodes(&self) -> &[TextNode] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> Option<&TextNode> {
        self.nodes.get(id)
    }

    pub fn sections(&self) -> &[SectionNode] {
        &self.sections
    }

    pub fn has_section(&self, id: &str) -> bool {
        self.sections.iter().any(|s| s.id == id)
    }

    /// Count-up targets, indexed by [`StatNode::counter`].
    pub fn counter_targets(&self) -> &[u32] {
        &self.counters
    }

    /// Concatenated text of the whole root, markup ignored.
    pub fn text_content(&self) -> String {
        self.nodes.iter().map(|n| n.text.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ CardSpec, StatSpec };

    const SECTIONS: &[SectionSpec] = &[
        SectionSpec {
            id: "intro",
            title: "Intro",
            toc_label: Some("Intro"),
            blocks: &[
                BlockSpec::Para(&[Run::plain("La "), Run::strong("nicotine"), Run::code("C10H14N2")]),
                BlockSpec::Cards(&[CardSpec { title: "Carte", text: "Texte", toast: Some("ok") }]),
                BlockSpec::Stats(&[StatSpec { label: "décès", count: 75, suffix: "k" }]),
            ],
        },
    ];

    #[test]
    fn test_nodes_in_document_order() {
        let tree = ContentTree::from_sections(SECTIONS);
        let parents: Vec<Tag> = tree.nodes().iter().map(|n| n.parent).collect();
        assert_eq!(parents, vec![Tag::H2, Tag::P, Tag::Strong, Tag::Code, Tag::H3, Tag::P, Tag::Span]);
        assert_eq!(tree.counter_targets(), &[75]);
        assert!(tree.has_section("intro"));
        assert!(!Tag::Code.is_prose());
    }
}
