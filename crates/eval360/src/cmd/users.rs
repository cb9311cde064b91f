//! User management commands
//!
//! # Usage
//!
//! ```bash
//! eval360 users                                   # list (Admin, Manager)
//! eval360 users update <id> --role Manager --active true
//! eval360 users delete <id>
//! ```

use std::io::{self, Write};

use anyhow::{Context, Result, anyhow};
use clap::{Args, Subcommand};
use eval360_auth::Role;
use owo_colors::OwoColorize;

use crate::context::AppContext;

const USERS_PATH: &str = "/dashboard-admin/admin/users";

#[derive(Args, Debug)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub command: Option<UsersCommand>,
}

#[derive(Subcommand, Debug)]
pub enum UsersCommand {
    /// List all users
    List,

    /// Update a user's editable fields
    Update {
        /// User ID
        id: String,

        /// First name
        #[arg(long)]
        first_name: Option<String>,

        /// Last name
        #[arg(long)]
        last_name: Option<String>,

        /// Role (Admin, Manager, Employee)
        #[arg(long, value_parser = parse_role)]
        role: Option<Role>,

        /// Occupation
        #[arg(long)]
        occupation: Option<String>,

        /// Enable or disable the account
        #[arg(long)]
        active: Option<bool>,
    },

    /// Delete a user
    Delete {
        /// User ID
        id: String,

        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

fn parse_role(s: &str) -> std::result::Result<Role, String> {
    Role::parse(s).ok_or_else(|| format!("unknown role '{s}' (Admin, Manager, Employee)"))
}

pub async fn run(ctx: &AppContext, args: UsersArgs) -> Result<()> {
    match args.command.unwrap_or(UsersCommand::List) {
        UsersCommand::List => list_users(ctx).await,
        UsersCommand::Update {
            id,
            first_name,
            last_name,
            role,
            occupation,
            active,
        } => {
            let (client, _, _) = ctx.enter(&format!("{USERS_PATH}/edit/{id}"))?;
            let users = client.list_users().await.context("failed to load users")?;
            let record = users
                .iter()
                .find(|u| u.id == id)
                .ok_or_else(|| anyhow!("user '{}' not found", id))?;

            let mut update = record.to_update();
            if let Some(v) = first_name {
                update.first_name = v;
            }
            if let Some(v) = last_name {
                update.last_name = v;
            }
            if let Some(v) = occupation {
                update.occupation = v;
            }
            if let Some(v) = active {
                update.active = v;
            }
            update.role = role.or(update.role);

            client
                .update_user(&id, &update)
                .await
                .context("failed to update user")?;
            println!("{} Updated {}", "✓".green(), record.email);
            Ok(())
        }
        UsersCommand::Delete { id, yes } => {
            let (client, _, _) = ctx.enter(&format!("{USERS_PATH}/edit/{id}"))?;
            if !yes && !confirm(&format!("Delete user '{id}'?"))? {
                println!("Cancelled");
                return Ok(());
            }
            client.delete_user(&id).await.context("failed to delete user")?;
            println!("{} Deleted user {}", "✓".green(), id);
            Ok(())
        }
    }
}

async fn list_users(ctx: &AppContext) -> Result<()> {
    let (client, _, _) = ctx.enter(USERS_PATH)?;
    let users = client.list_users().await.context("failed to load users")?;

    if users.is_empty() {
        println!("No users.");
        return Ok(());
    }

    println!(
        "  {:<26} {:<24} {:<30} {:<14} {:<16} {}",
        "ID", "Name", "Email", "Role", "Occupation", "Active"
    );
    println!("  {}", "-".repeat(118));
    for user in &users {
        let role = user.role().map(|r| r.label()).unwrap_or(user.role.as_str());
        let active = if user.active { "Sí".green().to_string() } else { "No".red().to_string() };
        println!(
            "  {:<26} {:<24} {:<30} {:<14} {:<16} {}",
            user.id,
            user.full_name(),
            user.email,
            role,
            user.occupation,
            active
        );
    }
    println!("\n{} users", users.len());
    Ok(())
}

/// Ask a yes/no question on stdin
pub fn confirm(question: &str) -> Result<bool> {
    print!("{question} [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes" | "s" | "si" | "sí"))
}
