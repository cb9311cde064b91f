//! Navigation commands
//!
//! # Usage
//!
//! ```bash
//! eval360 nav                    # header for the current session
//! eval360 nav --sidebar          # plus the dashboard sidebar, expanded
//! eval360 open /dashboard-admin  # would this view render?
//! ```

use anyhow::{Result, bail};
use clap::Args;
use eval360_auth::{Location, NavItem, NavShell, Navigation, SidebarGroup};
use owo_colors::OwoColorize;

use crate::context::AppContext;

#[derive(Args, Debug)]
pub struct NavArgs {
    /// Also show the dashboard sidebar with both sections expanded
    #[arg(long)]
    pub sidebar: bool,
}

#[derive(Args, Debug)]
pub struct OpenArgs {
    /// Path to open, e.g. /dashboard-admin/admin/users/edit/42
    pub path: String,
}

pub fn run_nav(ctx: &AppContext, args: NavArgs) -> Result<()> {
    let mut shell = NavShell::new(ctx.store.clone());
    let view = shell.render();

    println!("{}", view.brand.bold());
    println!("{}", "─".repeat(40));
    for item in &view.items {
        match item {
            NavItem::Link(link) => println!("  {:<24} {}", link.label, link.to.dimmed()),
            NavItem::UserName(name) => println!("  {}", name.cyan()),
            NavItem::Logout => println!("  {}", "Cerrar sesión".red()),
        }
    }

    if args.sidebar {
        shell.toggle_section(SidebarGroup::Users);
        shell.toggle_section(SidebarGroup::Evaluations);

        println!();
        for section in shell.sidebar() {
            println!("{}", section.title.bold());
            if section.open {
                for link in &section.links {
                    println!("  {:<28} {}", link.label, link.to.dimmed());
                }
            }
        }
    }
    Ok(())
}

pub fn run_open(ctx: &AppContext, args: OpenArgs) -> Result<()> {
    let session = ctx.store.load();
    let location = Location::parse(&args.path);

    match ctx.routes.navigate(&session, location) {
        Navigation::Render(matched) => {
            let view = matched.view();
            println!("{} {}", "✓".green(), view.title().bold());
            println!("  Route   {}", matched.route.pattern.dimmed());
            let mut params: Vec<_> = matched.params.iter().collect();
            params.sort();
            for (name, value) in params {
                println!("  {name:<7} {value}");
            }
            if !view.shows_header() {
                println!("  {}", "(no header)".dimmed());
            }
            Ok(())
        }
        Navigation::Redirect(redirect) => {
            println!("{} {} → {}", "✗".red(), redirect.from, redirect.to.yellow());
            Ok(())
        }
        Navigation::NotFound(location) => bail!("no view at {location}"),
    }
}
