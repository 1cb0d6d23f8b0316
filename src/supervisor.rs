// Proxy child process: spawn, wait, kill on shutdown

use anyhow::Context;
use std::path::Path;
use std::process::ExitStatus;
use tokio::process::{Child, Command};

pub struct ProxySupervisor {
    child: Child,
}

impl ProxySupervisor {
    /// Spawns `<binary> run -config <config_path>` with inherited stdio.
    /// The binary is resolved via PATH.
    pub fn spawn(binary: &str, config_path: &Path) -> anyhow::Result<Self> {
        let child = Command::new(binary)
            .arg("run")
            .arg("-config")
            .arg(config_path)
            .spawn()
            .with_context(|| format!("failed to start proxy binary {binary:?}"))?;
        tracing::info!(binary, config = %config_path.display(), "proxy started");
        Ok(Self { child })
    }

    /// Waits for the child to exit.
    pub async fn wait(&mut self) -> anyhow::Result<ExitStatus> {
        self.child.wait().await.context("failed waiting on proxy")
    }

    /// Kills the child and reaps it; used on shutdown signal.
    pub async fn shutdown(&mut self) {
        if let Err(e) = self.child.kill().await {
            tracing::warn!(error = %e, "failed to kill proxy");
        }
    }
}
