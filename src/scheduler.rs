use anyhow::Result;
use tokio::time::{interval, Duration};
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::{error, info};

use crate::config::SweepConfig;
use crate::db::Store;
use crate::models;

/// Background job that flips past-deadline violations and follow-ups to
/// `overdue`. List queries also derive overdue display status, so the UI
/// stays correct between runs.
pub struct Sweeper {
    store: Store,
    config: SweepConfig,
}

impl Sweeper {
    #[must_use]
    pub const fn new(store: Store, config: SweepConfig) -> Self {
        Self { store, config }
    }

    pub async fn start(&self) -> Result<()> {
        if !self.config.enabled {
            info!("Overdue sweep disabled");
            return Ok(());
        }

        // One pass at startup so a long-stopped instance catches up.
        self.run_once().await;

        if let Some(cron_expr) = self.config.cron_expression.clone() {
            self.run_with_cron(&cron_expr).await
        } else {
            self.run_with_interval().await
        }
    }

    pub async fn run_once(&self) {
        let today = models::iso_date(models::today());
        match self.store.sweep_overdue(&today).await {
            Ok((violations, follow_ups)) => {
                if violations > 0 || follow_ups > 0 {
                    info!(
                        "Overdue sweep: {} violations, {} follow-ups flagged",
                        violations, follow_ups
                    );
                }
            }
            Err(e) => error!("Overdue sweep failed: {}", e),
        }
    }

    async fn run_with_cron(&self, cron_expr: &str) -> Result<()> {
        let mut sched = JobScheduler::new().await?;

        let store = self.store.clone();
        let job = Job::new_async(cron_expr, move |_uuid, _lock| {
            let store = store.clone();
            Box::pin(async move {
                let today = models::iso_date(models::today());
                match store.sweep_overdue(&today).await {
                    Ok((violations, follow_ups)) => {
                        if violations > 0 || follow_ups > 0 {
                            info!(
                                "Overdue sweep: {} violations, {} follow-ups flagged",
                                violations, follow_ups
                            );
                        }
                    }
                    Err(e) => error!("Overdue sweep failed: {}", e),
                }
            })
        })?;

        sched.add(job).await?;
        sched.start().await?;

        info!("Overdue sweep running with cron: {}", cron_expr);

        // Keep the scheduler alive for the lifetime of the task.
        loop {
            tokio::time::sleep(Duration::from_secs(60)).await;
        }
    }

    async fn run_with_interval(&self) -> Result<()> {
        let minutes = self.config.interval_minutes;
        info!("Overdue sweep running every {} minutes", minutes);

        let mut ticker = interval(Duration::from_secs(u64::from(minutes) * 60));
        ticker.tick().await; // first tick fires immediately; startup pass already ran

        loop {
            ticker.tick().await;
            self.run_once().await;
        }
    }
}
