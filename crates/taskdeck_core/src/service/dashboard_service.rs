//! Dashboard use-case service.
//!
//! # Responsibility
//! - Mount a [`TaskStore`] only for an authenticated session.
//! - Track the active tab and produce the greeting lines.
//! - Drive sign-out and navigation through external collaborators.
//!
//! # Invariants
//! - Sign-out failures are logged and swallowed; there is no retry.
//! - Navigation after sign-out happens only on success.

use crate::config::DashboardConfig;
use crate::model::category::Category;
use crate::model::task::Task;
use crate::session::{Navigator, Route, SessionProvider, SessionState};
use crate::store::task_store::TaskStore;
use log::{error, info};

/// Dashboard sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    Todos,
    Stats,
}

/// Result of trying to mount the dashboard.
#[derive(Debug)]
pub enum MountOutcome {
    /// Session lookup has not finished; show a loading indicator.
    Loading,
    /// No session; the caller must send the visitor to the login surface.
    RedirectToLogin,
    Ready(Dashboard),
}

/// Mounted dashboard for one signed-in user.
#[derive(Debug)]
pub struct Dashboard {
    store: TaskStore,
    active_tab: DashboardTab,
}

impl Dashboard {
    /// Mounts an empty dashboard when `provider` reports a session.
    pub fn mount<P: SessionProvider>(
        provider: &P,
        config: DashboardConfig,
        categories: Vec<Category>,
    ) -> MountOutcome {
        Self::mount_with_tasks(provider, config, categories, Vec::new())
    }

    /// Mounts a dashboard seeded with `tasks`.
    pub fn mount_with_tasks<P: SessionProvider>(
        provider: &P,
        config: DashboardConfig,
        categories: Vec<Category>,
        tasks: Vec<Task>,
    ) -> MountOutcome {
        match provider.current_session() {
            SessionState::Pending => MountOutcome::Loading,
            SessionState::Anonymous => {
                info!("event=dashboard_mount module=dashboard status=redirect reason=no_session");
                MountOutcome::RedirectToLogin
            }
            SessionState::Authenticated(session) => {
                let store = TaskStore::with_tasks(session, config, categories, tasks);
                info!(
                    "event=dashboard_mount module=dashboard status=ok task_count={}",
                    store.tasks().len()
                );
                MountOutcome::Ready(Self {
                    store,
                    active_tab: DashboardTab::default(),
                })
            }
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut TaskStore {
        &mut self.store
    }

    pub fn active_tab(&self) -> DashboardTab {
        self.active_tab
    }

    pub fn select_tab(&mut self, tab: DashboardTab) {
        self.active_tab = tab;
    }

    pub fn greeting(&self) -> String {
        format!(
            "Welcome back, {}!",
            self.store.session().user.first_name()
        )
    }

    pub fn pending_summary(&self) -> String {
        format!(
            "You have {} pending tasks. Let's get them done!",
            self.store.stats().pending
        )
    }

    pub fn go_home<N: Navigator>(&self, navigator: &mut N) {
        navigator.navigate(Route::Home);
    }

    /// Signs out and navigates home on success.
    ///
    /// Returns whether the sign-out succeeded.
    pub fn logout<P: SessionProvider, N: Navigator>(
        &self,
        provider: &mut P,
        navigator: &mut N,
    ) -> bool {
        match provider.sign_out() {
            Ok(()) => {
                info!("event=logout module=dashboard status=ok");
                navigator.navigate(Route::Home);
                true
            }
            Err(err) => {
                error!("event=logout module=dashboard status=error error={err}");
                false
            }
        }
    }
}
