use std::fmt::{ Display, Formatter };

use super::Question;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    Unanswered,
    Graded,
    /// Same as `Unanswered`, reached through an explicit reset.
    Reset,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Verdict {
    #[default]
    Neutral,
    Correct,
    Incorrect,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

impl Display for Score {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Score : {} / {}", self.correct, self.total)
    }
}

/// Single-choice quiz over a fixed question list. Selections are per
/// question and mutually exclusive within it.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizEngine {
    questions: &'static [Question],
    selections: Vec<Option<usize>>,
    verdicts: Vec<Verdict>,
    score: Option<Score>,
    phase: QuizPhase,
}

impl QuizEngine {
    pub fn new(questions: &'static [Question]) -> Self {
        Self {
            questions,
            selections: vec![None; questions.len()],
            verdicts: vec![Verdict::Neutral; questions.len()],
            score: None,
            phase: QuizPhase::Unanswered,
        }
    }

    pub fn questions(&self) -> &'static [Question] {
        self.questions
    }

    /// Drops every selection and verdict and clears the score.
    pub fn render(&mut self) {
        self.selections.iter_mut().for_each(|s| *s = None);
        self.verdicts.iter_mut().for_each(|v| *v = Verdict::Neutral);
        self.score = None;
        self.phase = QuizPhase::Unanswered;
    }

    pub fn select(&mut self, question: usize, option: usize) {
        let Some(q) = self.questions.get(question) else {
            log::debug!("Ignoring selection for unknown question {}", question);
            return;
        };
        if option >= q.options.len() {
            log::debug!("Ignoring out-of-range option {} for question {}", option, question);
            return;
        }
        self.selections[question] = Some(option);
    }

    pub fn check(&mut self) -> Score {
        let mut correct = 0;
        for (idx, question) in self.questions.iter().enumerate() {
            self.verdicts[idx] = match self.selections[idx] {
                None => Verdict::Neutral,
                Some(option) if question.is_correct(option) => {
                    correct += 1;
                    Verdict::Correct
                }
                Some(_) => Verdict::Incorrect,
            };
        }
        let score = Score {
            correct,
            total: self.questions.len(),
        };
        log::info!("Quiz graded: {}/{}", score.correct, score.total);
        self.score = Some(score);
        self.phase = QuizPhase::Graded;
        score
    }

    pub fn reset(&mut self) {
        self.render();
        self.phase = QuizPhase::Reset;
    }

    pub fn selection(&self, question: usize) -> Option<usize> {
        self.selections.get(question).copied().flatten()
    }

    pub fn verdict(&self, question: usize) -> Verdict {
        self.verdicts.get(question).copied().unwrap_or_default()
    }

    pub fn score(&self) -> Option<Score> {
        self.score
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUESTIONS: &[Question] = &[
        Question::new("Une mutation est…", &["Un sport", "Un changement dans l’ADN", "Une vitamine", "Un organe"], 1),
        Question::new("Un mutagène est…", &["Une substance qui augmente les mutations", "Une cellule du sang", "Un organe", "Un vaccin"], 0),
        Question::new("Clé cassée", &["a", "b", "c", "d"], 7),
    ];

    #[test]
    fn test_mixed_answers() {
        let mut quiz = QuizEngine::new(QUESTIONS);
        quiz.select(0, 1);
        quiz.select(1, 2);
        let score = quiz.check();

        assert_eq!(score, Score { correct: 1, total: 3 });
        assert_eq!(quiz.verdict(0), Verdict::Correct);
        assert_eq!(quiz.verdict(1), Verdict::Incorrect);
        assert_eq!(quiz.verdict(2), Verdict::Neutral);
        assert_eq!(score.to_string(), "Score : 1 / 3");
        assert_eq!(quiz.phase(), QuizPhase::Graded);
    }

    #[test]
    fn test_out_of_range_key_is_never_correct() {
        let mut quiz = QuizEngine::new(QUESTIONS);
        for option in 0..4 {
            quiz.select(2, option);
            quiz.check();
            assert_eq!(quiz.verdict(2), Verdict::Incorrect);
        }
    }

    #[test]
    fn test_selection_is_exclusive_per_question() {
        let mut quiz = QuizEngine::new(QUESTIONS);
        quiz.select(0, 0);
        quiz.select(0, 3);
        quiz.select(1, 1);
        assert_eq!(quiz.selection(0), Some(3));
        assert_eq!(quiz.selection(1), Some(1));
    }

    #[test]
    fn test_invalid_selection_ignored() {
        let mut quiz = QuizEngine::new(QUESTIONS);
        quiz.select(0, 9);
        quiz.select(9, 0);
        assert_eq!(quiz.selection(0), None);
    }

    #[test]
    fn test_reset_returns_to_neutral() {
        let mut quiz = QuizEngine::new(QUESTIONS);
        quiz.select(0, 1);
        quiz.select(1, 3);
        quiz.check();
        quiz.reset();

        assert_eq!(quiz.phase(), QuizPhase::Reset);
        assert_eq!(quiz.score(), None);
        for idx in 0..QUESTIONS.len() {
            assert_eq!(quiz.selection(idx), None);
            assert_eq!(quiz.verdict(idx), Verdict::Neutral);
        }
    }
}
