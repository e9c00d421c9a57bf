use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use derivlab::catalog::{Feedback, PRACTICE_QUIZ};
use derivlab::prelude::*;

#[test]
fn catalog_layout() {
    let catalog = FormulaCatalog::builtin();
    assert_eq!(catalog.len(), 18);
    assert_eq!(
        catalog.categories(),
        vec!["Basic", "Trigonometric", "Exponential", "Logarithmic", "Inverse Trig", "Rules"]
    );
    assert!(catalog.entries_in("Inverse Trig").iter().all(|e| e.is_latex()));
    assert!(catalog.entries_in("Basic").iter().all(|e| !e.is_latex()));
    assert!(catalog.entries_in("Hyperbolic").is_empty());
}

#[test]
fn flashcard_drill_reveals_in_any_order() {
    let catalog = FormulaCatalog::builtin();
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    let session = FlashcardSession::new()
        .apply(FlashcardAction::Draw, &catalog, &mut rng)
        .apply(FlashcardAction::ShowExample, &catalog, &mut rng);
    let card = *session.current().unwrap();
    assert_eq!(session.formula(), None);
    assert_eq!(session.example(), Some(card.example));

    let session = session.apply(FlashcardAction::ShowFormula, &catalog, &mut rng);
    assert_eq!(session.formula(), Some(card.formula));
    assert_eq!(catalog.get(card.category, card.name), Some(&card));

    let session = session.apply(FlashcardAction::Draw, &catalog, &mut rng);
    assert_eq!(session.formula(), None);
    assert_eq!(session.example(), None);
}

#[test]
fn seeded_drills_repeat() {
    let catalog = FormulaCatalog::builtin();
    let draw = |seed| {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        (0..10)
            .map(|_| {
                *FlashcardSession::new()
                    .apply(FlashcardAction::Draw, &catalog, &mut rng)
                    .current()
                    .unwrap()
            })
            .collect::<Vec<_>>()
    };
    assert_eq!(draw(3), draw(3));
}

#[test]
fn quiz_walkthrough() {
    let mut session = QuizSession::default();
    // 1-based picks as typed at the prompt
    let picks = [1, 3, 1, 2, 4];

    let mut feedback = Vec::new();
    for (i, pick) in picks.iter().enumerate() {
        session = session.select(i, pick - 1).unwrap();
        let (next, result) = session.check(i).unwrap();
        session = next;
        feedback.push(result);
    }

    assert_eq!(
        feedback,
        vec![
            Feedback::Correct,
            Feedback::Wrong { answer: "cos x" },
            Feedback::Correct,
            Feedback::Correct,
            Feedback::Wrong { answer: "2^x * ln 2" },
        ]
    );
    assert_eq!(session.score(), (3, PRACTICE_QUIZ.len()));
}
