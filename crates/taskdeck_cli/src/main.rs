//! CLI probe for `taskdeck_core`.
//!
//! # Responsibility
//! - Mount a dashboard over the demo data set for a fixed local user.
//! - Print the filtered task list and the stats cards for quick sanity checks.

use clap::Parser;
use log::error;
use std::path::PathBuf;
use std::process::ExitCode;
use taskdeck_core::seed::{demo_categories, demo_tasks};
use taskdeck_core::{
    default_log_level, init_logging, AuthError, Dashboard, DashboardConfig, MountOutcome, Session,
    SessionProvider, SessionState, TaskFilter, User,
};

#[derive(Debug, Parser)]
#[command(name = "taskdeck", version, about = "Print the demo task dashboard")]
struct Args {
    /// all|completed|pending|high|medium|low
    #[arg(long, default_value = "all")]
    filter: TaskFilter,

    /// Case-insensitive text matched against title and description.
    #[arg(long, default_value = "")]
    search: String,

    /// JSON dashboard config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Absolute directory for rolling log files.
    #[arg(long)]
    log_dir: Option<String>,

    /// Display name of the local user.
    #[arg(long, default_value = "Local User")]
    user: String,
}

struct LocalSession {
    user_name: String,
}

impl SessionProvider for LocalSession {
    fn current_session(&self) -> SessionState {
        SessionState::Authenticated(Session {
            user: User {
                id: "local".to_string(),
                name: Some(self.user_name.clone()),
                email: "local@localhost".to_string(),
                image: None,
            },
        })
    }

    fn sign_out(&mut self) -> Result<(), AuthError> {
        Ok(())
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Some(log_dir) = args.log_dir.as_deref() {
        if let Err(err) = init_logging(default_log_level(), log_dir) {
            eprintln!("taskdeck: {err}");
            return ExitCode::FAILURE;
        }
    }

    let config = match args.config.as_deref().map(DashboardConfig::load) {
        Some(Ok(config)) => config,
        Some(Err(err)) => {
            error!("event=config_load module=cli status=error error={err}");
            eprintln!("taskdeck: {err}");
            return ExitCode::FAILURE;
        }
        None => DashboardConfig::default(),
    };

    let provider = LocalSession {
        user_name: args.user,
    };
    let mut dashboard =
        match Dashboard::mount_with_tasks(&provider, config, demo_categories(), demo_tasks()) {
            MountOutcome::Ready(dashboard) => dashboard,
            MountOutcome::Loading | MountOutcome::RedirectToLogin => {
                eprintln!("taskdeck: no active session");
                return ExitCode::FAILURE;
            }
        };

    dashboard.store_mut().set_filter(args.filter);
    dashboard.store_mut().set_search(args.search);
    print_dashboard(&dashboard);
    ExitCode::SUCCESS
}

fn print_dashboard(dashboard: &Dashboard) {
    let store = dashboard.store();
    println!("{}", dashboard.greeting());
    println!("{}", dashboard.pending_summary());
    println!();

    let visible = store.visible_tasks();
    if visible.is_empty() {
        println!("No tasks found. {}", store.empty_hint());
    }
    for task in visible {
        let mark = if task.completed { "x" } else { " " };
        let due = task.due_date.as_deref().unwrap_or("-");
        println!(
            "[{mark}] {:<28} {:<6} {:<9} due {}",
            task.title,
            task.priority.as_str(),
            task.category,
            due
        );
    }

    let stats = store.stats();
    println!();
    println!(
        "total={} completed={} pending={} streak={}",
        stats.total, stats.completed, stats.pending, stats.streak
    );
    println!(
        "completion rate {}% ({})",
        store.completion_rate(),
        store.rate_verdict().message()
    );
    for row in store.category_breakdown() {
        println!(
            "  {:<9} {}/{} completed {:>3}% {}",
            row.category.name, row.completed, row.total, row.percentage, row.category.color
        );
    }
}
