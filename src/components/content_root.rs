use dioxus::prelude::*;

use super::runtime::use_page_handle;
use crate::content::{ BlockNode, NodeId, Tag };
use crate::page::{ PageController, PageEvent };
use crate::search::HighlightMark;

/// The searchable part of the page.
#[component]
pub fn ContentRoot() -> Element {
    let handle = use_page_handle();
    let page = handle.page.read();

    rsx! {
        main { id: "contentRoot", class: "content",
            for sec in page.content.sections().iter() {
                section {
                    key: "{sec.id}",
                    id: "{sec.id}",
                    class: if page.reveal.is_revealed(sec.id) { "card reveal in" } else { "card reveal" },
                    h2 { TextRun { node: sec.title } }
                    for (idx, block) in sec.blocks.iter().enumerate() {
                        Block { key: "{idx}", block: block.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn Block(block: BlockNode) -> Element {
    let handle = use_page_handle();

    match block {
        BlockNode::Para(runs) =>
            rsx! {
                p {
                    for node in runs {
                        TextRun { key: "{node}", node }
                    }
                }
            },
        BlockNode::Bullets(items) =>
            rsx! {
                ul {
                    for (idx, runs) in items.into_iter().enumerate() {
                        li { key: "{idx}",
                            for node in runs {
                                TextRun { key: "{node}", node }
                            }
                        }
                    }
                }
            },
        BlockNode::Cards(cards) =>
            rsx! {
                div { class: "grid",
                    for (idx, card) in cards.into_iter().enumerate() {
                        div {
                            key: "{idx}",
                            class: if card.toast.is_some() { "mini clickable" } else { "mini" },
                            "data-toast": card.toast.unwrap_or_default(),
                            onclick: move |_| {
                                if let Some(message) = card.toast {
                                    handle.send(PageEvent::CardClicked(message));
                                }
                            },
                            h3 { TextRun { node: card.title } }
                            p { TextRun { node: card.text } }
                        }
                    }
                }
            },
        BlockNode::Topics(topics) =>
            rsx! {
                div { class: "topics",
                    for topic in topics {
                        button {
                            key: "{topic.key}",
                            class: "btn",
                            "data-modal": topic.key,
                            onclick: move |_| handle.send(PageEvent::OpenModal(topic.key.to_string())),
                            TextRun { node: topic.label }
                        }
                    }
                }
            },
        BlockNode::Stats(stats) =>
            rsx! {
                div { class: "stats",
                    for stat in stats {
                        StatCounter {
                            key: "{stat.counter}",
                            counter: stat.counter,
                            label: stat.label,
                            suffix: stat.suffix,
                        }
                    }
                }
            },
    }
}

#[component]
fn StatCounter(counter: usize, label: NodeId, suffix: &'static str) -> Element {
    let handle = use_page_handle();
    let state = handle.page.read().counters.get(counter).copied();
    let Some(state) = state else {
        return rsx! {};
    };

    rsx! {
        div { class: "stat",
            span {
                id: PageController::counter_dom_id(counter),
                class: "stat__num",
                "data-count": "{state.target}",
                "{state.shown}{suffix}"
            }
            span { class: "stat__label", TextRun { node: label } }
        }
    }
}

/// One text node, with any active search marks wrapped in `<mark>`.
#[component]
fn TextRun(node: NodeId) -> Element {
    let handle = use_page_handle();
    let page = handle.page.read();
    let Some(text_node) = page.content.node(node) else {
        return rsx! {};
    };
    let segments = page.search.segments(node, &text_node.text);

    let inner = rsx! {
        for segment in segments {
            {match segment.mark {
                Some(index) => rsx! {
                    mark { id: HighlightMark::dom_id(index), "{segment.text}" }
                },
                None => rsx! { "{segment.text}" },
            }}
        }
    };

    match text_node.parent {
        Tag::Strong => rsx! { strong { {inner} } },
        Tag::Em => rsx! { em { {inner} } },
        Tag::Code => rsx! { code { {inner} } },
        _ => inner,
    }
}
