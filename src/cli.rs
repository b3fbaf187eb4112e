//! CLI interface for toolgate
//!
//! Thin interactive shell over the session engine: renders the approval
//! prompt, relays approve/edit/cancel decisions, and prints replies.

use anyhow::Result;
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Config;
use crate::llm::GroqClient;
use crate::registry::ToolRegistry;
use crate::session::{Session, TurnOutcome};

#[derive(Parser)]
#[command(name = "toolgate")]
#[command(about = "Multi-tool agent with human approval for every tool call", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a config file (defaults to the user config dir)
    #[arg(short, long, env = "TOOLGATE_CONFIG")]
    config: Option<PathBuf>,
}

/// Run the interactive shell
pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = match cli.config {
        Some(path) => Config::load_from(&path)?,
        None => Config::load()?,
    };

    let registry = Arc::new(ToolRegistry::new(&config));
    let mut session = match GroqClient::from_config(&config.llm) {
        Some(client) => Session::with_fallback(registry, Arc::new(client)),
        None => Session::new(registry),
    };

    println!("🤖 Toolgate — every tool call requires your approval");
    println!("Type a request, /clear to reset history, /quit to exit.");
    if config.llm.api_key.is_none() {
        println!("(no Groq API key configured: unmatched queries get a static hint)");
    }
    println!();

    let mut editor = DefaultEditor::new()?;

    loop {
        if session.is_pending() {
            if !resolve_pending(&mut session, &mut editor).await? {
                break;
            }
            continue;
        }

        let line = match editor.readline("You: ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match line {
            "/quit" | "/exit" => break,
            "/clear" => {
                session.clear();
                println!("History cleared.\n");
                continue;
            }
            _ => {}
        }

        let _ = editor.add_history_entry(line);

        match session.submit(line).await {
            Ok(TurnOutcome::Replied(reply)) => println!("\n{}\n", reply),
            Ok(TurnOutcome::AwaitingApproval) => {}
            Err(err) => println!("{}", err),
        }
    }

    Ok(())
}

/// Show the pending invocation and collect one decision.
/// Returns false when the user closed the input stream.
async fn resolve_pending(session: &mut Session, editor: &mut DefaultEditor) -> Result<bool> {
    let Some(draft) = session.pending() else {
        return Ok(true);
    };

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║  ⏸️  APPROVAL REQUIRED                                        ║");
    println!("╠══════════════════════════════════════════════════════════════╣");
    println!("║  Tool: {:<54}║", truncate(draft.tool.name(), 54));
    println!("║  {:<60}║", truncate(draft.tool.description(), 60));
    println!("╚══════════════════════════════════════════════════════════════╝");

    for name in draft.tool.parameter_names() {
        let value = draft
            .display_params
            .get(name)
            .map(String::as_str)
            .unwrap_or_default();
        if value.contains('\n') {
            println!("  {}:", name);
            for line in value.lines() {
                println!("    {}", line);
            }
        } else {
            println!("  {}: {}", name, value);
        }
    }

    println!();
    println!("Options:");
    println!("  [y] Approve and execute");
    println!("  [n] Cancel");
    println!("  [e] Edit a parameter");
    println!();

    loop {
        let choice = match editor.readline("Your choice [y/n/e]: ") {
            Ok(choice) => choice,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(false),
            Err(err) => return Err(err.into()),
        };

        match choice.trim().to_lowercase().as_str() {
            "y" | "yes" => {
                let result = session.approve().await?;
                println!("\n{}\n", result);
                return Ok(true);
            }
            "n" | "no" => {
                session.cancel()?;
                println!("\n{}\n", crate::session::CANCELLED_REPLY);
                return Ok(true);
            }
            "e" | "edit" => {
                let field = match editor.readline("Parameter name: ") {
                    Ok(field) => field,
                    Err(_) => return Ok(false),
                };
                let value = match editor.readline("New value: ") {
                    Ok(value) => value,
                    Err(_) => return Ok(false),
                };
                match session.edit(field.trim(), value.trim()) {
                    Ok(()) => println!("Updated {}.", field.trim()),
                    Err(err) => println!("{}", err),
                }
                // re-render the prompt with the updated values
                return Ok(true);
            }
            _ => println!("Invalid option. Please enter y, n, or e."),
        }
    }
}

/// Truncate a string to a maximum length
fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len.saturating_sub(3)])
    }
}
