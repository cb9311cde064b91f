//! Evaluation commands
//!
//! # Usage
//!
//! ```bash
//! eval360 evaluations                       # list (Admin, Manager)
//! eval360 evaluations questions             # question bank per criterion
//! eval360 evaluations create --employee <id> \
//!     --answer technical_skills=1 --answer teamwork=4
//! eval360 evaluations update <id> --answer soft_skills=12
//! eval360 evaluations delete <id>
//! ```
//!
//! Criteria without an answer are submitted with 0 points.

use anyhow::{Context, Result, anyhow, bail};
use clap::{Args, Subcommand};
use eval360_evaluation::{Criterion, EvaluationForm, render_stars};
use owo_colors::OwoColorize;
use tracing::debug;

use crate::cmd::users::confirm;
use crate::context::AppContext;

const EVALUATIONS_PATH: &str = "/dashboard-admin/admin/evaluations";

#[derive(Args, Debug)]
pub struct EvaluationsArgs {
    #[command(subcommand)]
    pub command: Option<EvaluationsCommand>,
}

#[derive(Subcommand, Debug)]
pub enum EvaluationsCommand {
    /// List all evaluations with totals and stars
    List,

    /// Show the question bank
    Questions,

    /// Evaluate an employee
    Create {
        /// Employee user ID
        #[arg(long)]
        employee: String,

        /// Picked question per criterion, as criterion=question_id
        #[arg(short, long = "answer", value_parser = parse_answer)]
        answers: Vec<(Criterion, u32)>,
    },

    /// Re-score an existing evaluation; the current user becomes the evaluator
    Update {
        /// Evaluation ID
        id: String,

        /// Picked question per criterion, as criterion=question_id
        #[arg(short, long = "answer", value_parser = parse_answer)]
        answers: Vec<(Criterion, u32)>,
    },

    /// Delete an evaluation
    Delete {
        /// Evaluation ID
        id: String,

        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

/// Parse `criterion=question_id`
fn parse_answer(s: &str) -> std::result::Result<(Criterion, u32), String> {
    let (criterion, question) = s
        .split_once('=')
        .ok_or_else(|| format!("expected criterion=question_id, got '{s}'"))?;
    let criterion: Criterion = criterion.parse().map_err(|e| format!("{e}"))?;
    let question = question
        .trim()
        .parse()
        .map_err(|_| format!("invalid question id '{}'", question.trim()))?;
    Ok((criterion, question))
}

pub async fn run(ctx: &AppContext, args: EvaluationsArgs) -> Result<()> {
    match args.command.unwrap_or(EvaluationsCommand::List) {
        EvaluationsCommand::List => list(ctx).await,
        EvaluationsCommand::Questions => questions(ctx).await,
        EvaluationsCommand::Create { employee, answers } => create(ctx, employee, answers).await,
        EvaluationsCommand::Update { id, answers } => update(ctx, id, answers).await,
        EvaluationsCommand::Delete { id, yes } => delete(ctx, id, yes).await,
    }
}

async fn list(ctx: &AppContext) -> Result<()> {
    let (client, _, _) = ctx.enter(EVALUATIONS_PATH)?;
    let evaluations = client
        .list_evaluations()
        .await
        .context("failed to load evaluations")?;

    if evaluations.is_empty() {
        println!("No evaluations.");
        return Ok(());
    }

    println!(
        "  {:<26} {:<24} {:<24} {:>5}  {}",
        "ID", "Employee", "Evaluator", "Total", "Stars"
    );
    println!("  {}", "-".repeat(92));
    for evaluation in &evaluations {
        println!(
            "  {:<26} {:<24} {:<24} {:>5}  {}",
            evaluation.id,
            evaluation.employee.display_name(),
            evaluation.evaluator.display_name(),
            evaluation.total(),
            render_stars(evaluation.stars()).yellow()
        );
    }
    Ok(())
}

async fn questions(ctx: &AppContext) -> Result<()> {
    let (client, _, _) = ctx.enter(&format!("{EVALUATIONS_PATH}/create"))?;
    let bank = client
        .evaluation_questions()
        .await
        .context("failed to load questions")?;

    for criterion in Criterion::ALL {
        println!("{} {}", criterion.title().bold(), format!("({criterion})").dimmed());
        let questions = bank.questions(criterion);
        if questions.is_empty() {
            println!("  {}", "(no questions)".dimmed());
        }
        for question in questions {
            println!("  {:>4}  {:<50} {} pts", question.id, question.name, question.points);
        }
        println!();
    }

    for unknown in bank.unknown_categories() {
        debug!(category = unknown, "Ignoring unknown question category");
    }
    Ok(())
}

async fn create(ctx: &AppContext, employee: String, answers: Vec<(Criterion, u32)>) -> Result<()> {
    let (client, session, _) = ctx.enter(&format!("{EVALUATIONS_PATH}/create"))?;
    let evaluator = session
        .user
        .as_ref()
        .map(|u| u.id.clone())
        .ok_or_else(|| anyhow!("session has no user"))?;

    let employees = client
        .list_employees()
        .await
        .context("failed to load employees")?;
    let Some(target) = employees.iter().find(|e| e.id == employee) else {
        bail!("employee '{}' not found", employee);
    };

    let bank = client
        .evaluation_questions()
        .await
        .context("failed to load questions")?;

    let mut form = EvaluationForm::new();
    form.select_employee(employee.as_str());
    for (criterion, question) in answers {
        form.answer(&bank, criterion, question)?;
    }
    for criterion in form.unanswered() {
        println!("  {} {} scored 0", "!".yellow(), criterion.title());
    }

    let payload = form.submit(&evaluator)?;
    client
        .create_evaluation(&payload)
        .await
        .context("failed to submit evaluation")?;

    println!(
        "{} Evaluated {} ({} pts)",
        "✓".green(),
        target.full_name().bold(),
        payload.scores.total()
    );
    Ok(())
}

async fn update(ctx: &AppContext, id: String, answers: Vec<(Criterion, u32)>) -> Result<()> {
    let (client, session, _) = ctx.enter(&format!("{EVALUATIONS_PATH}/edit/{id}"))?;
    let evaluator = session
        .user
        .as_ref()
        .map(|u| u.id.clone())
        .ok_or_else(|| anyhow!("session has no user"))?;

    let evaluations = client
        .list_evaluations()
        .await
        .context("failed to load evaluations")?;
    let existing = evaluations
        .iter()
        .find(|e| e.id == id)
        .ok_or_else(|| anyhow!("evaluation '{}' not found", id))?;

    let bank = client
        .evaluation_questions()
        .await
        .context("failed to load questions")?;

    let mut payload = existing.to_update(evaluator);
    for (criterion, question) in answers {
        let question = bank.find(criterion, question)?;
        payload.scores.set(criterion, question.points);
    }

    client
        .update_evaluation(&id, &payload)
        .await
        .context("failed to update evaluation")?;
    println!(
        "{} Updated evaluation {} ({} pts)",
        "✓".green(),
        id,
        payload.scores.total()
    );
    Ok(())
}

async fn delete(ctx: &AppContext, id: String, yes: bool) -> Result<()> {
    let (client, _, _) = ctx.enter(&format!("{EVALUATIONS_PATH}/edit/{id}"))?;
    if !yes && !confirm(&format!("Delete evaluation '{id}'?"))? {
        println!("Cancelled");
        return Ok(());
    }
    client
        .delete_evaluation(&id)
        .await
        .context("failed to delete evaluation")?;
    println!("{} Deleted evaluation {}", "✓".green(), id);
    Ok(())
}

#[cfg(test)]
#[path = "evaluations_test.rs"]
mod evaluations_test;
