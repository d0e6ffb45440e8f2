//! Personality CLI commands: train, preview, list, show, delete.

use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;
use dialoguer::Confirm;

use mimicry_core::service::personality::CreatePersonalityRequest;
use mimicry_core::trainer::TrainingOutcome;
use mimicry_infra::config::resolve_training_limit;
use mimicry_infra::filesystem::training::{load_training_file, read_training_stdin};
use mimicry_types::persona::{ConversationStyle, CustomPersonality, PersonaProfile, PersonalityId};

use crate::cli::OutputMode;
use crate::state::AppState;

/// Read the training document from a file, or stdin when `source` is `-`.
async fn read_source(state: &AppState, source: &Path, max_bytes: Option<u64>) -> Result<String> {
    let limit = resolve_training_limit(&state.config, max_bytes);
    let text = if source == Path::new("-") {
        read_training_stdin(limit).await?
    } else {
        load_training_file(source, limit).await?
    };
    Ok(text)
}

fn parse_id(id: &str) -> Result<PersonalityId> {
    id.parse()
        .with_context(|| format!("'{id}' is not a valid personality id"))
}

/// Train a personality from a chat export and persist it.
///
/// # Examples
///
/// ```bash
/// mimic train chat.txt --name "John"
/// pbpaste | mimic train - --name "John" --description "college roommate"
/// ```
pub async fn train(
    state: &AppState,
    source: &Path,
    name: String,
    description: Option<String>,
    user: Option<String>,
    max_bytes: Option<u64>,
    mode: OutputMode,
) -> Result<()> {
    let training_text = read_source(state, source, max_bytes).await?;

    let personality = state
        .personality_service
        .create(CreatePersonalityRequest {
            user_id: user.unwrap_or_else(|| state.config.default_user_id.clone()),
            name,
            description,
            training_text,
        })
        .await?;

    match mode {
        OutputMode::Json => {
            println!("{}", serde_json::to_string_pretty(&personality)?);
            return Ok(());
        }
        OutputMode::Quiet => return Ok(()),
        OutputMode::Styled => {}
    }

    println!();
    println!(
        "  {} Personality '{}' created ({})",
        style("✓").green().bold(),
        style(&personality.name).cyan().bold(),
        style(&personality.id).dim()
    );
    if personality.profile.message_count == 0 {
        println!(
            "  {} No chat lines were recognised; the prompt has no style data.",
            style("!").yellow().bold()
        );
    }
    println!();
    print_profile(&personality.profile);
    println!();

    Ok(())
}

/// Train without saving and print the profile and prompt.
pub async fn preview(
    state: &AppState,
    source: &Path,
    name: Option<String>,
    description: Option<String>,
    max_bytes: Option<u64>,
    mode: OutputMode,
) -> Result<()> {
    let training_text = read_source(state, source, max_bytes).await?;

    let outcome: TrainingOutcome = state.personality_service.preview(
        &training_text,
        name.as_deref(),
        description.as_deref(),
    );

    match mode {
        OutputMode::Json => {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
            return Ok(());
        }
        OutputMode::Quiet => return Ok(()),
        OutputMode::Styled => {}
    }

    println!();
    println!(
        "  Parsed {} message(s); {} from {}",
        style(outcome.parsed_messages).cyan(),
        style(outcome.profile.message_count).cyan(),
        style(&outcome.profile.name).cyan().bold()
    );
    println!();
    print_profile(&outcome.profile);
    println!();
    println!("  {}", style("Prompt").bold().underlined());
    println!();
    for line in outcome.custom_prompt.lines() {
        println!("  {line}");
    }
    println!();

    Ok(())
}

/// List a user's saved personalities.
pub async fn list(state: &AppState, user: Option<String>, mode: OutputMode) -> Result<()> {
    let user_id = user.unwrap_or_else(|| state.config.default_user_id.clone());
    let personalities = state.personality_service.list(&user_id).await?;

    match mode {
        OutputMode::Json => {
            println!("{}", serde_json::to_string_pretty(&personalities)?);
            return Ok(());
        }
        OutputMode::Quiet => return Ok(()),
        OutputMode::Styled => {}
    }

    if personalities.is_empty() {
        println!();
        println!(
            "  {} No personalities for '{}'. Train one with: {}",
            style("i").blue().bold(),
            user_id,
            style("mimic train <chat.txt> --name <name>").yellow()
        );
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Name").fg(Color::White),
        Cell::new("Persona").fg(Color::White),
        Cell::new("Style").fg(Color::White),
        Cell::new("Messages").fg(Color::White),
        Cell::new("ID").fg(Color::White),
        Cell::new("Created").fg(Color::White),
    ]);

    for p in &personalities {
        table.add_row(vec![
            Cell::new(&p.name).fg(Color::Cyan),
            Cell::new(&p.profile.name),
            style_cell(p.profile.conversation_style),
            Cell::new(p.profile.message_count),
            Cell::new(&p.id).fg(Color::DarkGrey),
            Cell::new(format_relative_time(&p.created_at)).fg(Color::DarkGrey),
        ]);
    }

    println!();
    println!("{table}");
    println!();

    Ok(())
}

/// Show one personality, or only its prompt.
pub async fn show(
    state: &AppState,
    id: &str,
    prompt_only: bool,
    mode: OutputMode,
) -> Result<()> {
    let id = parse_id(id)?;
    let personality = state.personality_service.get(&id).await?;

    match (mode, prompt_only) {
        (OutputMode::Quiet, _) => {}
        (OutputMode::Json, true) => {
            println!("{}", serde_json::json!({"custom_prompt": personality.custom_prompt}));
        }
        (OutputMode::Json, false) => {
            println!("{}", serde_json::to_string_pretty(&personality)?);
        }
        (OutputMode::Styled, true) => println!("{}", personality.custom_prompt),
        (OutputMode::Styled, false) => print_personality(&personality),
    }
    Ok(())
}

/// Delete a personality after confirmation.
pub async fn delete(state: &AppState, id: &str, force: bool, mode: OutputMode) -> Result<()> {
    let id = parse_id(id)?;
    let personality = state.personality_service.get(&id).await?;

    // The confirmation prompt goes to stderr, so quiet mode still asks.
    if !force && mode != OutputMode::Json {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Delete personality '{}'?",
                style(&personality.name).red().bold()
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            if mode == OutputMode::Styled {
                println!("  Cancelled.");
            }
            return Ok(());
        }
    }

    state.personality_service.delete(&id).await?;

    match mode {
        OutputMode::Json => {
            println!("{}", serde_json::json!({"deleted": true, "id": id.to_string()}));
        }
        OutputMode::Quiet => {}
        OutputMode::Styled => println!(
            "  {} Personality '{}' deleted.",
            style("✓").red().bold(),
            personality.name
        ),
    }

    Ok(())
}

fn print_personality(p: &CustomPersonality) {
    println!();
    println!(
        "  {} {}",
        style(&p.name).cyan().bold(),
        style(format!("({})", p.id)).dim()
    );
    if let Some(description) = &p.description {
        println!("  {}", style(description).italic());
    }
    println!(
        "  {} {}  {} {}",
        style("Owner:").dim(),
        p.user_id,
        style("Created:").dim(),
        p.created_at.format("%Y-%m-%d %H:%M UTC")
    );
    println!();
    print_profile(&p.profile);
    println!();
    println!("  {}", style("Prompt").bold().underlined());
    println!();
    for line in p.custom_prompt.lines() {
        println!("  {line}");
    }
    println!();
}

fn print_profile(profile: &PersonaProfile) {
    let phrases = if profile.common_phrases.is_empty() {
        "-".to_string()
    } else {
        profile.common_phrases.join(", ")
    };

    println!("  {:<10} {}", style("Persona").dim(), profile.name);
    println!(
        "  {:<10} {}",
        style("Style").dim(),
        style_label(profile.conversation_style)
    );
    println!("  {:<10} {}", style("Messages").dim(), profile.message_count);
    println!("  {:<10} {}", style("Phrases").dim(), phrases);

    if !profile.sample_responses.is_empty() {
        println!("  {}", style("Samples").dim());
        for sample in profile.sample_responses.iter().take(5) {
            println!("    {} {}", style("›").dim(), sample);
        }
        let remaining = profile.sample_responses.len().saturating_sub(5);
        if remaining > 0 {
            println!("    {}", style(format!("... {remaining} more")).dim());
        }
    }
}

fn style_label(style_kind: ConversationStyle) -> String {
    match style_kind {
        ConversationStyle::Casual => style("casual").yellow().to_string(),
        ConversationStyle::Formal => style("formal").blue().to_string(),
    }
}

fn style_cell(style_kind: ConversationStyle) -> Cell {
    match style_kind {
        ConversationStyle::Casual => Cell::new("casual").fg(Color::Yellow),
        ConversationStyle::Formal => Cell::new("formal").fg(Color::Blue),
    }
}

fn format_relative_time(dt: &chrono::DateTime<chrono::Utc>) -> String {
    let now = chrono::Utc::now();
    let diff = now - *dt;

    if diff.num_seconds() < 60 {
        "just now".to_string()
    } else if diff.num_minutes() < 60 {
        format!("{}m ago", diff.num_minutes())
    } else if diff.num_hours() < 24 {
        format!("{}h ago", diff.num_hours())
    } else if diff.num_days() < 30 {
        format!("{}d ago", diff.num_days())
    } else {
        dt.format("%Y-%m-%d").to_string()
    }
}
