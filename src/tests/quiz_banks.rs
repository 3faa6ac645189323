use super::common;
use crate::content::{ CANCER, TABAC };
use crate::page::PageEvent;
use crate::quiz::{ QuizPhase, Score, Verdict };

#[test]
fn test_all_correct_scores_full() {
    for profile in [&CANCER, &TABAC] {
        let mut page = common::page(profile);
        for (idx, question) in profile.quiz.iter().enumerate() {
            page.dispatch(PageEvent::SelectAnswer { question: idx, option: question.correct_index });
        }
        page.dispatch(PageEvent::CheckQuiz);

        let total = profile.quiz.len();
        assert_eq!(page.quiz.score(), Some(Score { correct: total, total }));
        assert_eq!(page.toast.message, "Quiz corrigé ✅");
    }
}

#[test]
fn test_no_selection_scores_zero_and_stays_neutral() {
    let mut page = common::page(&TABAC);
    page.dispatch(PageEvent::CheckQuiz);

    assert_eq!(page.quiz.score().map(|s| s.to_string()), Some("Score : 0 / 5".to_string()));
    for idx in 0..TABAC.quiz.len() {
        assert_eq!(page.quiz.verdict(idx), Verdict::Neutral);
    }
}

#[test]
fn test_reset_after_grading() {
    let mut page = common::page(&CANCER);
    page.dispatch(PageEvent::SelectAnswer { question: 0, option: 1 });
    page.dispatch(PageEvent::SelectAnswer { question: 1, option: 0 });
    page.dispatch(PageEvent::CheckQuiz);
    assert_eq!(page.quiz.verdict(1), Verdict::Incorrect);

    page.dispatch(PageEvent::ResetQuiz);
    assert_eq!(page.quiz.phase(), QuizPhase::Reset);
    assert_eq!(page.quiz.score(), None);
    assert_eq!(page.toast.message, "Quiz réinitialisé");
    for idx in 0..CANCER.quiz.len() {
        assert_eq!(page.quiz.selection(idx), None);
        assert_eq!(page.quiz.verdict(idx), Verdict::Neutral);
    }
}
