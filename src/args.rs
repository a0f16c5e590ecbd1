use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cardbox")]
#[command(about = "Spaced-review flashcards for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the flashcard store (overrides the configured location)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new flashcard
    #[command(alias = "a")]
    Add {
        /// The question shown first during review
        question: String,

        /// The answer revealed after the delay
        answer: String,

        /// Skip the save confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// List all flashcards
    #[command(alias = "ls")]
    List,

    /// Search questions and answers for a term
    Search { term: String },

    /// Edit a flashcard, found by its exact question
    #[command(alias = "e")]
    Edit {
        /// Question of the flashcard to edit (case-insensitive)
        question: String,

        /// Replacement question (omit or leave blank to keep)
        #[arg(long)]
        new_question: Option<String>,

        /// Replacement answer (omit or leave blank to keep)
        #[arg(long)]
        new_answer: Option<String>,
    },

    /// Delete a flashcard, found by its exact question
    #[command(alias = "rm")]
    Delete {
        /// Question of the flashcard to delete (case-insensitive)
        question: String,
    },

    /// Review flashcards, most overdue first
    #[command(alias = "r")]
    Review,

    /// Look a term up in the dictionary and on Wikipedia
    Lookup { term: String },
}
