//! Flashcard drill
//!
//! Draw a random formula, write it down, then reveal the formula and an
//! example. The session is a plain value: each action takes the old state
//! and returns the new one, and the randomness source is supplied by the
//! caller.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use super::formulas::{FormulaCatalog, FormulaEntry};

/// User actions on the flashcard screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashcardAction {
    /// Pick a new random card, hiding the answer
    Draw,
    ShowFormula,
    ShowExample,
}

/// Flashcard session state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FlashcardSession {
    current: Option<FormulaEntry>,
    formula_shown: bool,
    example_shown: bool,
}

impl FlashcardSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one action and return the resulting state
    pub fn apply<R: Rng + ?Sized>(
        self,
        action: FlashcardAction,
        catalog: &FormulaCatalog,
        rng: &mut R,
    ) -> Self {
        match action {
            FlashcardAction::Draw => Self {
                current: draw(catalog, rng),
                formula_shown: false,
                example_shown: false,
            },
            // Revealing needs a card on the table
            FlashcardAction::ShowFormula if self.current.is_some() => Self {
                formula_shown: true,
                ..self
            },
            FlashcardAction::ShowExample if self.current.is_some() => Self {
                example_shown: true,
                ..self
            },
            _ => self,
        }
    }

    pub fn current(&self) -> Option<&FormulaEntry> {
        self.current.as_ref()
    }

    /// Formula text, once revealed
    pub fn formula(&self) -> Option<&'static str> {
        self.current
            .filter(|_| self.formula_shown)
            .map(|e| e.formula)
    }

    /// Example text, once revealed
    pub fn example(&self) -> Option<&'static str> {
        self.current
            .filter(|_| self.example_shown)
            .map(|e| e.example)
    }
}

/// Random category first, then a random entry inside it, so small
/// categories come up as often as large ones.
pub fn draw<R: Rng + ?Sized>(catalog: &FormulaCatalog, rng: &mut R) -> Option<FormulaEntry> {
    let categories = catalog.categories();
    let category = categories.choose(rng)?;
    let entries = catalog.entries_in(category);
    entries.choose(rng).map(|e| **e)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_fresh_session_is_empty() {
        let session = FlashcardSession::new();
        assert!(session.current().is_none());
        assert!(session.formula().is_none());
    }

    #[test]
    fn test_reveal_without_card_is_noop() {
        let catalog = FormulaCatalog::builtin();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let session = FlashcardSession::new().apply(FlashcardAction::ShowFormula, &catalog, &mut rng);
        assert_eq!(session, FlashcardSession::new());
    }

    #[test]
    fn test_draw_then_reveal() {
        let catalog = FormulaCatalog::builtin();
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let session = FlashcardSession::new().apply(FlashcardAction::Draw, &catalog, &mut rng);
        let card = *session.current().unwrap();
        assert!(session.formula().is_none());
        assert!(session.example().is_none());

        let session = session.apply(FlashcardAction::ShowFormula, &catalog, &mut rng);
        assert_eq!(session.formula(), Some(card.formula));
        assert!(session.example().is_none());

        let session = session.apply(FlashcardAction::ShowExample, &catalog, &mut rng);
        assert_eq!(session.example(), Some(card.example));
        assert_eq!(session.current(), Some(&card));
    }

    #[test]
    fn test_new_draw_hides_answer() {
        let catalog = FormulaCatalog::builtin();
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let session = FlashcardSession::new()
            .apply(FlashcardAction::Draw, &catalog, &mut rng)
            .apply(FlashcardAction::ShowFormula, &catalog, &mut rng)
            .apply(FlashcardAction::Draw, &catalog, &mut rng);
        assert!(session.current().is_some());
        assert!(session.formula().is_none());
    }

    #[test]
    fn test_seeded_draws_repeat() {
        let catalog = FormulaCatalog::builtin();
        let mut a = ChaCha8Rng::seed_from_u64(42);
        let mut b = ChaCha8Rng::seed_from_u64(42);

        for _ in 0..10 {
            assert_eq!(draw(&catalog, &mut a), draw(&catalog, &mut b));
        }
    }

    #[test]
    fn test_draws_cover_every_category() {
        let catalog = FormulaCatalog::builtin();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut seen: Vec<&str> = Vec::new();

        for _ in 0..500 {
            let entry = draw(&catalog, &mut rng).unwrap();
            assert_eq!(catalog.get(entry.category, entry.name), Some(&entry));
            if !seen.contains(&entry.category) {
                seen.push(entry.category);
            }
        }
        assert_eq!(seen.len(), catalog.categories().len());
    }

    #[test]
    fn test_empty_catalog_draws_nothing() {
        static EMPTY: &[FormulaEntry] = &[];
        let catalog = FormulaCatalog::from_entries(EMPTY);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(draw(&catalog, &mut rng).is_none());
    }
}
