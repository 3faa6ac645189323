mod engine;
mod question;

pub use engine::{ QuizEngine, QuizPhase, Score, Verdict };
pub use question::Question;
