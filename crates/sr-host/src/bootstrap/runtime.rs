//! Assembled application: resolved paths plus wired dependencies.

use anyhow::Context;
use sr_app::{AppDeps, UseCases};

use super::config::AppConfig;
use super::paths::AppPaths;
use super::wiring::wire_dependencies;

pub struct AppRuntime {
    pub deps: AppDeps,
    pub paths: AppPaths,
}

impl AppRuntime {
    pub fn new(deps: AppDeps, paths: AppPaths) -> Self {
        Self { deps, paths }
    }

    /// Resolves paths from `config` and wires the infra stack.
    pub fn build(config: &AppConfig) -> anyhow::Result<Self> {
        let paths = AppPaths::resolve(config);
        Self::from_paths(paths)
    }

    pub fn from_paths(paths: AppPaths) -> anyhow::Result<Self> {
        let deps = wire_dependencies(&paths).context("Failed to wire dependencies")?;
        Ok(Self::new(deps, paths))
    }

    pub fn usecases(&self) -> UseCases<'_> {
        UseCases::new(&self.deps)
    }
}
