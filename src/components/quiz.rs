use dioxus::prelude::*;

use super::runtime::use_page_handle;
use crate::content::{ VerdictColors, QUIZ_SECTION_ID };
use crate::page::PageEvent;
use crate::quiz::Verdict;

#[component]
pub fn Quiz() -> Element {
    let handle = use_page_handle();
    let page = handle.page.read();
    let questions = page.quiz.questions();
    if questions.is_empty() {
        return rsx! {};
    }
    let colors = page.profile.verdict_colors;
    let score = page.quiz
        .score()
        .map(|s| s.to_string())
        .unwrap_or_default();

    rsx! {
        section {
            id: QUIZ_SECTION_ID,
            class: if page.reveal.is_revealed(QUIZ_SECTION_ID) { "card reveal in" } else { "card reveal" },
            h2 { "Quiz" }
            div { id: "quizRoot",
                for (idx, question) in questions.iter().enumerate() {
                    div {
                        key: "{idx}",
                        class: "qcard",
                        "data-q": "{idx}",
                        style: border_style(page.quiz.verdict(idx), colors),
                        p { class: "qcard__q", {format!("{}. {}", idx + 1, question.prompt)} }
                        div { class: "answers",
                            for (option, answer) in question.options.iter().enumerate() {
                                label { key: "{option}", class: "answer",
                                    input {
                                        r#type: "radio",
                                        name: "q{idx}",
                                        value: "{option}",
                                        checked: page.quiz.selection(idx) == Some(option),
                                        onchange: move |_| handle.send(PageEvent::SelectAnswer { question: idx, option }),
                                    }
                                    span { "{answer}" }
                                }
                            }
                        }
                    }
                }
            }
            div { class: "quiz__actions",
                button {
                    id: "btnCheckQuiz",
                    class: "btn",
                    onclick: move |_| handle.send(PageEvent::CheckQuiz),
                    "Corriger"
                }
                button {
                    id: "btnResetQuiz",
                    class: "btn btn--ghost",
                    onclick: move |_| handle.send(PageEvent::ResetQuiz),
                    "Réinitialiser"
                }
                span { id: "quizScore", class: "quiz__score", "{score}" }
            }
        }
    }
}

fn border_style(verdict: Verdict, colors: VerdictColors) -> String {
    let color = match verdict {
        Verdict::Neutral => colors.neutral,
        Verdict::Correct => colors.correct,
        Verdict::Incorrect => colors.incorrect,
    };
    format!("border-color: {}", color)
}
