//! Derivative formula study deck
//!
//! Browse formula cards, drill a random flashcard, or take the five-question
//! practice quiz.

use std::io::{self, BufRead, Write};
use std::process;

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use derivlab::catalog::{
    Feedback, FlashcardAction, FlashcardSession, FormulaCatalog, QuizSession,
};
use derivlab::{DerivError, DerivResult};

#[derive(Parser)]
#[command(name = "formula-cards", version, about = "Derivative formula cards and quizzes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show formula cards for a category (all categories when omitted)
    Cards {
        #[arg(long, short)]
        category: Option<String>,
    },
    /// Draw a random formula to recall
    Flashcard {
        /// Seed for a repeatable draw
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        show_formula: bool,
        #[arg(long)]
        show_example: bool,
    },
    /// Five-question multiple-choice quiz
    Quiz {
        /// Comma-separated option numbers (1-4), one per question;
        /// asked interactively when omitted
        #[arg(long, value_delimiter = ',')]
        answers: Option<Vec<usize>>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let catalog = FormulaCatalog::builtin();

    let result = match cli.command {
        Commands::Cards { category } => cards(&catalog, category.as_deref()),
        Commands::Flashcard {
            seed,
            show_formula,
            show_example,
        } => {
            flashcard(&catalog, seed, show_formula, show_example);
            Ok(())
        }
        Commands::Quiz { answers } => quiz(answers),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn cards(catalog: &FormulaCatalog, category: Option<&str>) -> DerivResult<()> {
    let categories = match category {
        Some(c) => {
            if catalog.entries_in(c).is_empty() {
                return Err(DerivError::invalid_input(format!(
                    "unknown category '{}', choose from: {}",
                    c,
                    catalog.categories().join(", ")
                )));
            }
            vec![c]
        }
        None => catalog.categories(),
    };

    for category in categories {
        println!("{}", category);
        println!("{}", "=".repeat(category.len()));
        for entry in catalog.entries_in(category) {
            println!("  {}", entry.name);
            println!("    {}", entry.formula);
            println!("    Example: {}", entry.example);
        }
        println!();
    }
    Ok(())
}

fn flashcard(catalog: &FormulaCatalog, seed: Option<u64>, show_formula: bool, show_example: bool) {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    let mut session = FlashcardSession::new().apply(FlashcardAction::Draw, catalog, &mut rng);
    if show_formula {
        session = session.apply(FlashcardAction::ShowFormula, catalog, &mut rng);
    }
    if show_example {
        session = session.apply(FlashcardAction::ShowExample, catalog, &mut rng);
    }

    let Some(card) = session.current() else {
        println!("The catalog is empty.");
        return;
    };

    println!("Category: {}", card.category);
    println!("Formula:  {}", card.name);
    if let Some(formula) = session.formula() {
        println!("\n  {}", formula);
    }
    if let Some(example) = session.example() {
        println!("\n  Example: {}", example);
    }
    if session.formula().is_none() {
        println!("\nWrite the formula on paper, then run again with --show-formula.");
    }
}

fn quiz(answers: Option<Vec<usize>>) -> DerivResult<()> {
    let mut session = QuizSession::default();
    let questions = session.questions();

    if let Some(answers) = &answers {
        if answers.len() != questions.len() {
            return Err(DerivError::invalid_input(format!(
                "expected {} answers, got {}",
                questions.len(),
                answers.len()
            )));
        }
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    for (i, question) in questions.iter().enumerate() {
        println!("Question {}", i + 1);
        println!("  {}", question.prompt);
        for (n, option) in question.options.iter().enumerate() {
            println!("    {}) {}", n + 1, option);
        }

        let choice = match &answers {
            Some(answers) => answers[i],
            None => {
                print!("  Your answer [1-4]: ");
                io::stdout().flush()?;
                let line = lines
                    .next()
                    .ok_or_else(|| DerivError::invalid_input("input ended before the quiz did"))??;
                line.trim().parse::<usize>().map_err(|_| {
                    DerivError::invalid_input(format!("'{}' is not an option number", line.trim()))
                })?
            }
        };
        if choice == 0 {
            return Err(DerivError::invalid_input("option numbers start at 1"));
        }

        session = session.select(i, choice - 1)?;
        let (next, feedback) = session.check(i)?;
        session = next;

        match feedback {
            Feedback::Correct => println!("  Correct!\n"),
            Feedback::Wrong { answer } => println!("  Wrong! Answer: {}\n", answer),
        }
    }

    let (correct, total) = session.score();
    println!("Score: {}/{}", correct, total);
    Ok(())
}
