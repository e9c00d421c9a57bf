//! Practice quiz
//!
//! Five fixed multiple-choice questions scored by exact string match
//! against the canonical answer. Selections live in a `QuizSession` value
//! owned by the caller.

use serde::Serialize;

use crate::core::{DerivError, DerivResult};

/// One multiple-choice question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    pub prompt: &'static str,
    pub answer: &'static str,
    /// Four choices, one of which is `answer`
    pub options: [&'static str; 4],
}

impl QuizQuestion {
    pub fn is_correct(&self, choice: &str) -> bool {
        choice == self.answer
    }
}

pub static PRACTICE_QUIZ: [QuizQuestion; 5] = [
    QuizQuestion {
        prompt: "d/dx(x^4) = ?",
        answer: "4x^3",
        options: ["4x^3", "x^4", "4x^5", "x^3"],
    },
    QuizQuestion {
        prompt: "d/dx(sin x) = ?",
        answer: "cos x",
        options: ["-sin x", "cos x", "sin x", "-cos x"],
    },
    QuizQuestion {
        prompt: "d/dx(e^x) = ?",
        answer: "e^x",
        options: ["e^x", "x*e^(x-1)", "x*e^x", "ln x"],
    },
    QuizQuestion {
        prompt: "d/dx(ln x) = ?",
        answer: "1/x",
        options: ["x", "1/x", "ln x", "0"],
    },
    QuizQuestion {
        prompt: "d/dx(2^x) = ?",
        answer: "2^x * ln 2",
        options: ["2^x", "2^x * ln 2", "x*2^(x-1)", "2^x / ln 2"],
    },
];

/// Outcome of checking one question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Feedback {
    Correct,
    Wrong { answer: &'static str },
}

/// Quiz session state: one selected option per question.
///
/// Every question starts with its first option selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizSession {
    #[serde(skip)]
    questions: &'static [QuizQuestion],
    selections: Vec<usize>,
    checked: Vec<Option<Feedback>>,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new(&PRACTICE_QUIZ)
    }
}

impl QuizSession {
    pub fn new(questions: &'static [QuizQuestion]) -> Self {
        Self {
            questions,
            selections: vec![0; questions.len()],
            checked: vec![None; questions.len()],
        }
    }

    pub fn questions(&self) -> &'static [QuizQuestion] {
        self.questions
    }

    fn question(&self, index: usize) -> DerivResult<&'static QuizQuestion> {
        self.questions.get(index).ok_or_else(|| {
            DerivError::invalid_input(format!(
                "question {} does not exist (quiz has {})",
                index + 1,
                self.questions.len()
            ))
        })
    }

    /// Select `option` for question `index`; clears any earlier check result
    pub fn select(mut self, index: usize, option: usize) -> DerivResult<Self> {
        let question = self.question(index)?;
        if option >= question.options.len() {
            return Err(DerivError::invalid_input(format!(
                "option {} does not exist (question has {})",
                option + 1,
                question.options.len()
            )));
        }
        self.selections[index] = option;
        self.checked[index] = None;
        Ok(self)
    }

    /// Currently selected text for question `index`
    pub fn selected(&self, index: usize) -> DerivResult<&'static str> {
        let question = self.question(index)?;
        Ok(question.options[self.selections[index]])
    }

    /// Check question `index` against its answer
    pub fn check(mut self, index: usize) -> DerivResult<(Self, Feedback)> {
        let question = self.question(index)?;
        let feedback = if question.is_correct(question.options[self.selections[index]]) {
            Feedback::Correct
        } else {
            Feedback::Wrong {
                answer: question.answer,
            }
        };
        self.checked[index] = Some(feedback);
        Ok((self, feedback))
    }

    /// Last check result for question `index`, if it was checked
    pub fn feedback(&self, index: usize) -> Option<Feedback> {
        self.checked.get(index).copied().flatten()
    }

    /// (correct selections, total questions)
    pub fn score(&self) -> (usize, usize) {
        let correct = self
            .questions
            .iter()
            .zip(&self.selections)
            .filter(|(q, s)| q.is_correct(q.options[**s]))
            .count();
        (correct, self.questions.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_question_lists_its_answer() {
        for q in &PRACTICE_QUIZ {
            assert_eq!(q.options.iter().filter(|o| **o == q.answer).count(), 1, "{}", q.prompt);
        }
    }

    #[test]
    fn test_default_selection_is_first_option() {
        let session = QuizSession::default();
        assert_eq!(session.selected(1).unwrap(), "-sin x");
        // Questions 1 and 3 have the answer listed first
        assert_eq!(session.score(), (2, 5));
    }

    #[test]
    fn test_check_wrong_then_correct() {
        let session = QuizSession::default();
        let (session, feedback) = session.check(1).unwrap();
        assert_eq!(feedback, Feedback::Wrong { answer: "cos x" });
        assert_eq!(session.feedback(1), Some(feedback));

        let session = session.select(1, 1).unwrap();
        assert_eq!(session.feedback(1), None);
        let (session, feedback) = session.check(1).unwrap();
        assert_eq!(feedback, Feedback::Correct);
        assert_eq!(session.selected(1).unwrap(), "cos x");
    }

    #[test]
    fn test_perfect_score() {
        let mut session = QuizSession::default();
        for (i, q) in PRACTICE_QUIZ.iter().enumerate() {
            let pick = q.options.iter().position(|o| *o == q.answer).unwrap();
            session = session.select(i, pick).unwrap();
        }
        assert_eq!(session.score(), (5, 5));
    }

    #[test]
    fn test_out_of_range() {
        let session = QuizSession::default();
        assert!(matches!(session.clone().select(5, 0), Err(DerivError::InvalidInput(_))));
        assert!(matches!(session.clone().select(0, 4), Err(DerivError::InvalidInput(_))));
        assert!(session.clone().check(9).is_err());
        assert!(session.selected(5).is_err());
        assert_eq!(session.feedback(5), None);
    }

    #[test]
    fn test_sessions_are_independent() {
        let a = QuizSession::default().select(0, 3).unwrap();
        let b = QuizSession::default();
        assert_eq!(a.selected(0).unwrap(), "x^3");
        assert_eq!(b.selected(0).unwrap(), "4x^3");
    }
}
