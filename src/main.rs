use cardbox::api::{CardboxApi, CmdMessage, CmdResult, MessageLevel};
use cardbox::config::CardboxConfig;
use cardbox::error::{CardboxError, Result};
use cardbox::lookup::HttpLookup;
use cardbox::model::{Flashcard, Priority};
use cardbox::review::ReviewSession;
use cardbox::store::fs::FileStore;
use chrono::Utc;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: CardboxApi<FileStore>,
    tick: Duration,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Commands::Add {
            question,
            answer,
            yes,
        } => handle_add(&mut ctx, question, answer, yes),
        Commands::List => handle_list(&ctx),
        Commands::Search { term } => handle_search(&ctx, term),
        Commands::Edit {
            question,
            new_question,
            new_answer,
        } => handle_edit(&mut ctx, question, new_question, new_answer),
        Commands::Delete { question } => handle_delete(&mut ctx, question),
        Commands::Review => handle_review(&mut ctx),
        Commands::Lookup { term } => handle_lookup(&ctx, term),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match std::env::var_os("CARDBOX_HOME") {
        Some(home) => PathBuf::from(home),
        None => ProjectDirs::from("com", "cardbox", "cardbox")
            .expect("Could not determine data dir")
            .data_dir()
            .to_path_buf(),
    };

    let config = CardboxConfig::load(&data_dir).unwrap_or_default();
    let storage_path = cli
        .file
        .clone()
        .unwrap_or_else(|| data_dir.join(&config.storage_filename));

    let store = FileStore::new(storage_path);
    let api = CardboxApi::new(store);

    Ok(AppContext {
        api,
        tick: Duration::from_secs(config.tick_secs),
    })
}

fn handle_add(ctx: &mut AppContext, question: String, answer: String, yes: bool) -> Result<()> {
    if !yes {
        print!("Save this flashcard? [Y/n]: ");
        io::stdout().flush().map_err(CardboxError::Io)?;

        let mut input = String::new();
        io::stdin().read_line(&mut input).map_err(CardboxError::Io)?;

        let input = input.trim().to_lowercase();
        if !(input.is_empty() || input == "y" || input == "yes") {
            println!("{}", "Flashcard discarded.".dimmed());
            return Ok(());
        }
    }

    let result = ctx.api.add_card(question, answer)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_cards()?;
    print_cards(&result.listed_cards);
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, term: String) -> Result<()> {
    let result = ctx.api.search_cards(&term)?;
    print_full_cards(&result.listed_cards);
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    question: String,
    new_question: Option<String>,
    new_answer: Option<String>,
) -> Result<()> {
    let result = ctx.api.edit_card(&question, new_question, new_answer)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, question: String) -> Result<()> {
    let result = ctx.api.delete_card(&question)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_review(ctx: &mut AppContext) -> Result<()> {
    let cards = ctx.api.review_queue()?;
    if cards.is_empty() {
        println!("No flashcards available to review.");
        return Ok(());
    }

    let mut session = ReviewSession::with_tick(cards, ctx.tick);
    while let Some(presented) = session.present_next() {
        println!("Q: {}", presented.question.bold());
        println!("{}", "(thinking...)".dimmed());

        match presented.reveal() {
            Some(card) => {
                println!("A: {}", card.answer.green());
                println!();
                let result = ctx.api.record_reviewed(&card)?;
                print_messages(&result.messages);
            }
            None => break,
        }
    }

    println!("No more flashcards to review.");
    Ok(())
}

fn handle_lookup(ctx: &AppContext, term: String) -> Result<()> {
    let result: std::result::Result<CmdResult, CardboxError> =
        HttpLookup::new().and_then(|service| ctx.api.lookup_term(&service, &term));

    // Lookup failures are never fatal to the session.
    match result {
        Ok(result) => print_messages(&result.messages),
        Err(e) => println!("{}", format!("Failed to find info: {}", e).red()),
    }
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_full_cards(cards: &[Flashcard]) {
    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("Q: {}", card.question.bold());
        println!("A: {}", card.answer);
    }
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 18;

fn print_cards(cards: &[Flashcard]) {
    if cards.is_empty() {
        println!("No flashcards found.");
        return;
    }

    let now = Utc::now();
    for (i, card) in cards.iter().enumerate() {
        let idx_str = format!("{}. ", i + 1);
        let marker = priority_marker(card.priority_at(now));
        let reviewed = format_time_ago(card.last_used_at);

        let fixed_width = idx_str.width() + 2 + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let question = truncate_to_width(&card.question, available);
        let padding = available.saturating_sub(question.width());

        println!(
            "{}{}{}{} {}",
            idx_str,
            question,
            " ".repeat(padding),
            marker,
            reviewed.dimmed()
        );
    }
}

fn priority_marker(priority: Priority) -> ColoredString {
    match priority {
        Priority::High => "!!".red(),
        Priority::Medium => " !".yellow(),
        Priority::Low => "  ".normal(),
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: chrono::DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
