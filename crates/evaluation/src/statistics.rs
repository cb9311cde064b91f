//! Dashboard statistics
//!
//! The backend returns raw counters; the dashboard shows two charts derived
//! from them: users per role and active vs inactive users.

use serde::{Deserialize, Serialize};

/// Counters from `GET /api/stats`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Statistics {
    /// Total users
    pub users: u64,
    /// Total evaluations
    pub evaluations: u64,
    /// Users with the Manager role
    pub user_manager: u64,
    /// Users with the Admin role
    pub user_admin: u64,
    /// Users with the Employee role
    pub user_employee: u64,
    /// Active users
    pub user_active: u64,
}

/// One bar or slice of a chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartPoint {
    /// Label
    pub name: &'static str,
    /// Value
    pub value: u64,
    /// Fill color
    pub color: &'static str,
}

/// Chart palette, cycled by index
pub const PALETTE: [&str; 3] = ["#003366", "#B0B0B0", "#009688"];

fn series(points: &[(&'static str, u64)]) -> Vec<ChartPoint> {
    points
        .iter()
        .enumerate()
        .map(|(i, &(name, value))| ChartPoint {
            name,
            value,
            color: PALETTE[i % PALETTE.len()],
        })
        .collect()
}

impl Statistics {
    /// Users per role (bar chart)
    pub fn users_by_role(&self) -> Vec<ChartPoint> {
        series(&[
            ("Evaluadores", self.user_manager),
            ("Administradores", self.user_admin),
            ("Empleados", self.user_employee),
        ])
    }

    /// Inactive users; never negative even if counters disagree
    pub fn inactive_users(&self) -> u64 {
        self.users.saturating_sub(self.user_active)
    }

    /// Active vs inactive users (pie chart)
    pub fn users_by_status(&self) -> Vec<ChartPoint> {
        series(&[
            ("Activos", self.user_active),
            ("Inactivos", self.inactive_users()),
        ])
    }

    /// Average evaluations per user, 0 when there are no users
    pub fn evaluations_per_user(&self) -> f64 {
        if self.users == 0 {
            0.0
        } else {
            self.evaluations as f64 / self.users as f64
        }
    }
}
