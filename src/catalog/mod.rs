//! Derivative formula study deck
//!
//! - formulas: the catalog of differentiation rules
//! - flashcard: random-card drill
//! - quiz: fixed five-question practice quiz

pub mod formulas;
pub mod flashcard;
pub mod quiz;

pub use formulas::{FormulaCatalog, FormulaEntry};
pub use flashcard::{draw, FlashcardAction, FlashcardSession};
pub use quiz::{Feedback, QuizQuestion, QuizSession, PRACTICE_QUIZ};
