//! Report and statistics commands
//!
//! # Usage
//!
//! ```bash
//! eval360 report          # own report
//! eval360 report <id>     # someone else's report (Admin, Manager)
//! eval360 stats           # dashboard counters (Admin, Manager)
//! ```

use anyhow::{Context, Result, anyhow};
use clap::Args;
use eval360_client::ApiClient;
use eval360_evaluation::{ChartPoint, render_stars};
use owo_colors::OwoColorize;

use crate::context::AppContext;

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Employee ID (defaults to the signed-in user)
    pub id: Option<String>,
}

/// Gate the report lookup and resolve whose report to fetch
///
/// Anyone signed in may read their own report. Another user's report goes
/// through the user-management view, so only its readers get it.
fn report_target(ctx: &AppContext, id: Option<String>) -> Result<(ApiClient, String)> {
    let (client, session, _) = ctx.enter("/employee")?;
    let own = session
        .user
        .as_ref()
        .map(|u| u.id.clone())
        .ok_or_else(|| anyhow!("session has no user"))?;

    match id {
        Some(id) if id != own => {
            let (client, _, _) = ctx.enter("/dashboard-admin/admin/users")?;
            Ok((client, id))
        }
        _ => Ok((client, own)),
    }
}

pub async fn run_report(ctx: &AppContext, args: ReportArgs) -> Result<()> {
    let (client, id) = report_target(ctx, args.id)?;

    let report = client
        .employee_report(&id)
        .await
        .context("failed to load employee report")?;

    println!();
    println!("{}", format!("{} {}", report.first_name, report.last_name).bold());
    println!("{}", "─".repeat(50));
    println!("Email        {}", report.email);
    println!("Role         {}", report.role);
    println!(
        "Status       {}",
        if report.active { "Activo".green().to_string() } else { "Inactivo".red().to_string() }
    );
    println!(
        "Ranking      {} ({} pts)",
        render_stars(report.stars()).yellow(),
        report.accumulated_points()
    );
    println!("             {}", report.summary().message().dimmed());

    if !report.evaluations.is_empty() {
        println!();
        println!("{}", "Evaluaciones".bold());
        for evaluation in &report.evaluations {
            println!(
                "  {:<28} {:>3} pts",
                evaluation.evaluator.display_name(),
                evaluation.scores.total()
            );
        }
    }

    if !report.feedbacks.is_empty() {
        println!();
        println!("{}", "Comentarios".bold());
        for feedback in &report.feedbacks {
            println!("  - {}", feedback.comment);
        }
    }
    Ok(())
}

pub async fn run_stats(ctx: &AppContext) -> Result<()> {
    let (client, _, _) = ctx.enter("/dashboard-admin/admin/statistics")?;
    let stats = client
        .statistics()
        .await
        .context("failed to load statistics")?;

    println!();
    println!("{}", "Estadísticas".bold());
    println!("{}", "─".repeat(50));
    println!("Usuarios       {}", stats.users);
    println!("Evaluaciones   {}", stats.evaluations);
    println!("Por usuario    {:.2}", stats.evaluations_per_user());

    println!();
    println!("{}", "Usuarios por rol".bold());
    print_bars(&stats.users_by_role());

    println!();
    println!("{}", "Usuarios por estado".bold());
    print_bars(&stats.users_by_status());
    Ok(())
}

const BAR_WIDTH: u64 = 30;

/// Bar length for `value`, scaled so `max` fills [`BAR_WIDTH`]
fn bar_width(value: u64, max: u64) -> usize {
    let scaled = u128::from(value) * u128::from(BAR_WIDTH) / u128::from(max.max(1));
    scaled.min(u128::from(BAR_WIDTH)) as usize
}

fn print_bars(points: &[ChartPoint]) {
    let max = points.iter().map(|p| p.value).max().unwrap_or(0);
    for point in points {
        let width = bar_width(point.value, max);
        println!("  {:<16} {:<30} {}", point.name, "█".repeat(width), point.value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eval360_auth::{Role, UserProfile};
    use eval360_config::{Config, SessionConfig};

    fn signed_in_as(dir: &tempfile::TempDir, role: Role) -> AppContext {
        let ctx = AppContext::new(Config {
            session: SessionConfig {
                path: Some(dir.path().join("session.json")),
            },
            ..Default::default()
        });
        ctx.store
            .save("t", &UserProfile::new("u1", "ana@example.com", role))
            .unwrap();
        ctx
    }

    #[test]
    fn test_report_defaults_to_own_id() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = signed_in_as(&dir, Role::Employee);

        let (client, id) = report_target(&ctx, None).unwrap();
        assert_eq!(id, "u1");
        assert_eq!(client.token(), Some("t"));

        let (_, id) = report_target(&ctx, Some("u1".into())).unwrap();
        assert_eq!(id, "u1");
    }

    #[test]
    fn test_employee_cannot_read_other_reports() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = signed_in_as(&dir, Role::Employee);

        let err = report_target(&ctx, Some("u2".into())).err().unwrap();
        assert!(err.to_string().contains("access denied"));
    }

    #[test]
    fn test_admin_and_manager_read_other_reports() {
        for role in [Role::Admin, Role::Manager] {
            let dir = tempfile::tempdir().unwrap();
            let ctx = signed_in_as(&dir, role);
            let (_, id) = report_target(&ctx, Some("u2".into())).unwrap();
            assert_eq!(id, "u2");
        }
    }

    #[test]
    fn test_report_requires_session() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = signed_in_as(&dir, Role::Admin);
        ctx.store.clear().unwrap();
        assert!(report_target(&ctx, Some("u2".into())).is_err());
    }

    #[test]
    fn test_bar_width() {
        assert_eq!(bar_width(0, 0), 0);
        assert_eq!(bar_width(3, 3), 30);
        assert_eq!(bar_width(1, 2), 15);
        assert_eq!(bar_width(u64::MAX, u64::MAX), 30);
        assert_eq!(bar_width(u64::MAX / 2, u64::MAX), 14);
    }
}
