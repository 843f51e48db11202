//! The `quizdeck take` command.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use quizdeck_client::{load_config_from, CredentialStore, HttpQuizService};
use quizdeck_core::session::NO_FILE_SELECTED;
use quizdeck_core::{Phase, QuizSession};

use crate::output;

type InputLines = Lines<BufReader<Stdin>>;

/// What the user typed at an answer prompt.
#[derive(Debug, PartialEq, Eq)]
enum Choice {
    Skip,
    Pick(usize),
    Invalid,
}

/// Parse a 1-based option number; blank input skips the question.
fn parse_choice(input: &str, option_count: usize) -> Choice {
    let input = input.trim();
    if input.is_empty() {
        return Choice::Skip;
    }
    match input.parse::<usize>() {
        Ok(n) if (1..=option_count).contains(&n) => Choice::Pick(n - 1),
        _ => Choice::Invalid,
    }
}

pub async fn execute(file: PathBuf, guest: bool, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let service = HttpQuizService::from_config(&config);

    let credential = if guest {
        None
    } else {
        CredentialStore::from_config(&config)?.load()?
    };
    match &credential {
        Some(c) => eprintln!("Logged in as {}", c.username),
        None => eprintln!("Guest mode - statistics are not saved"),
    }

    let mut session = QuizSession::new();
    if !session.load_file(&file).await {
        anyhow::bail!(session
            .error()
            .unwrap_or(NO_FILE_SELECTED)
            .to_string());
    }

    eprintln!("Loading quiz from {} ...", file.display());
    session.start_quiz(&service).await;
    if session.phase() != Phase::Ready {
        anyhow::bail!(session.error().unwrap_or("Error loading quiz").to_string());
    }

    output::print_warnings(session.warnings());
    if session.questions().is_empty() {
        anyhow::bail!("the quiz has no questions");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    collect_answers(&mut session, &mut lines).await?;

    // A failed submit leaves the session Ready with every answer intact.
    loop {
        session.submit_quiz(&service, credential.as_ref()).await;
        if session.phase() != Phase::Ready {
            break;
        }
        let error = session
            .error()
            .unwrap_or("Error submitting quiz")
            .to_string();
        eprintln!("Submission failed: {error}");
        if !confirm_retry(&mut lines).await? {
            anyhow::bail!(error);
        }
    }

    let display = session
        .display()
        .context("submission finished without a result")?;
    print!("{}", output::result_text(&display));
    Ok(())
}

/// Ask whether to resubmit. Blank or `y` means yes; closed input means no.
async fn confirm_retry(lines: &mut InputLines) -> Result<bool> {
    print!("Retry submission? [Y/n]: ");
    std::io::stdout().flush()?;
    let Some(line) = lines.next_line().await? else {
        println!();
        return Ok(false);
    };
    Ok(is_yes(&line))
}

fn is_yes(input: &str) -> bool {
    matches!(input.trim().to_ascii_lowercase().as_str(), "" | "y" | "yes")
}

async fn collect_answers(session: &mut QuizSession, lines: &mut InputLines) -> Result<()> {
    let questions = session.questions().to_vec();

    println!("Questions ({})", questions.len());
    for (idx, question) in questions.iter().enumerate() {
        println!("\n{}. {}", idx + 1, question.text);
        for (opt_idx, option) in question.options.iter().enumerate() {
            println!("   {}) {}", opt_idx + 1, option);
        }

        loop {
            print!("Answer [1-{}, blank to skip]: ", question.options.len());
            std::io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                // Input closed: leave the rest unanswered.
                println!();
                return Ok(());
            };
            match parse_choice(&line, question.options.len()) {
                Choice::Skip => break,
                Choice::Pick(opt_idx) => {
                    session.select_answer(&question.text, &question.options[opt_idx]);
                    break;
                }
                Choice::Invalid => {
                    println!(
                        "Please enter a number between 1 and {}.",
                        question.options.len()
                    );
                }
            }
        }
    }
    Ok(())
}
