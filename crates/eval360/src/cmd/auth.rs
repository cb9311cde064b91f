//! Session commands
//!
//! # Usage
//!
//! ```bash
//! eval360 login                          # prompts for email and password
//! eval360 login --email ana@example.com  # prompts for password
//! eval360 register --first-name Ana --last-name Pérez --email ana@example.com
//! eval360 status
//! eval360 logout
//! ```

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Args;
use eval360_auth::NavShell;
use eval360_client::{Credentials, Registration, sign_in, sign_up};
use owo_colors::OwoColorize;
use rpassword::read_password;

use crate::context::AppContext;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account email (prompted when omitted)
    #[arg(short, long)]
    pub email: Option<String>,
}

#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// First name
    #[arg(long)]
    pub first_name: String,

    /// Last name
    #[arg(long)]
    pub last_name: String,

    /// Account email
    #[arg(long)]
    pub email: String,

    /// Occupation (defaults to "Por actualizar")
    #[arg(long, default_value = "")]
    pub occupation: String,
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;
    let mut value = String::new();
    io::stdin().read_line(&mut value)?;
    Ok(value.trim().to_string())
}

fn prompt_password() -> Result<String> {
    print!("Password: ");
    io::stdout().flush()?;
    let password = read_password().context("failed to read password")?;
    Ok(password)
}

pub async fn run_login(ctx: &AppContext, args: LoginArgs) -> Result<()> {
    let email = match args.email {
        Some(email) => email,
        None => prompt("Email")?,
    };
    let password = prompt_password()?;

    let client = ctx.client()?;
    let landing = sign_in(&client, &ctx.store, &Credentials::new(email, password))
        .await
        .context("login failed")?;

    let session = ctx.store.load();
    let name = session
        .user
        .as_ref()
        .map(|u| u.display_name())
        .unwrap_or_default();
    println!("{} Signed in as {}", "✓".green(), name.bold());
    println!("  Landing  {}", landing.to_string().cyan());
    Ok(())
}

pub async fn run_register(ctx: &AppContext, args: RegisterArgs) -> Result<()> {
    let password = prompt_password()?;
    let registration = Registration {
        first_name: args.first_name,
        last_name: args.last_name,
        email: args.email,
        password,
        occupation: args.occupation,
    };

    sign_up(&ctx.client()?, &registration)
        .await
        .context("registration failed")?;

    println!("{} Registered {}", "✓".green(), registration.email.bold());
    println!("  Sign in with: eval360 login --email {}", registration.email);
    Ok(())
}

pub fn run_logout(ctx: &AppContext) -> Result<()> {
    let was_signed_in = ctx.store.load().is_authenticated();

    let mut shell = NavShell::new(ctx.store.clone());
    let next = shell.logout().context("failed to clear session")?;

    if was_signed_in {
        println!("Signed out. Next: {}", next.to_string().cyan());
    } else {
        println!("Not signed in");
    }
    Ok(())
}

pub fn run_status(ctx: &AppContext) -> Result<()> {
    let session = ctx.store.load();

    println!("Session  {}", ctx.config.session.file_path().display().dimmed());
    println!("API      {}", ctx.config.api.base_url().dimmed());

    match session.user {
        Some(user) if session.token.is_some() => {
            println!("Status   {}", "signed in".green());
            println!("User     {} <{}>", user.display_name(), user.email);
            println!("Role     {} ({})", user.role, user.role.label());
        }
        _ => println!("Status   {}", "signed out".yellow()),
    }
    Ok(())
}
