//! # Dependency Injection / 依赖注入模块
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Create infra implementations (db, settings file, key store)
//! - ✅ Group them into `AppDeps` / 将所有依赖注入到 AppDeps
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No business logic / 禁止包含任何业务逻辑**
//! ❌ **No configuration validation / 禁止做配置验证**
//!
//! > **This is the only place allowed to depend on sr-infra + sr-app simultaneously.**
//! > **这是唯一允许同时依赖 sr-infra 和 sr-app 的地方。**

use std::path::Path;
use std::sync::Arc;

use sr_app::AppDeps;
use sr_infra::db::mappers::TargetRowMapper;
use sr_infra::db::pool::{init_db_pool, DbPool};
use sr_infra::db::repositories::DieselTargetRepository;
use sr_infra::db::DieselSqliteExecutor;
use sr_infra::library::FsLibraryProbe;
use sr_infra::secrets::FileSecretStore;
use sr_infra::settings::FileSettingsRepository;
use sr_infra::{InMemoryRevealCache, SystemClock};
use tracing::info;

use super::paths::AppPaths;

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
/// 依赖注入错误（基础设施初始化失败）
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Database initialization failed: {0}")]
    DatabaseInit(String),
}

/// Create SQLite database connection pool
/// 创建 SQLite 数据库连接池
///
/// Creates the parent directory, opens the pool and runs pending migrations.
fn create_db_pool(db_path: &Path) -> WiringResult<DbPool> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            WiringError::DatabaseInit(format!("Failed to create DB directory: {}", e))
        })?;
    }

    let db_url = db_path
        .to_str()
        .ok_or_else(|| WiringError::DatabaseInit("Invalid database path".to_string()))?;

    init_db_pool(db_url).map_err(|e| WiringError::DatabaseInit(format!("{:#}", e)))
}

/// Wire all ports to their infra implementations.
/// 将所有端口连接到 infra 实现。
pub fn wire_dependencies(paths: &AppPaths) -> WiringResult<AppDeps> {
    let pool = create_db_pool(&paths.database_path)?;
    info!(db = %paths.database_path.display(), "Database ready");

    let target_repo = DieselTargetRepository::new(DieselSqliteExecutor::new(pool), TargetRowMapper);
    // One cache instance serves both the payload reads and the flush hook
    let reveal_cache = Arc::new(InMemoryRevealCache::new());

    Ok(AppDeps {
        target_repo: Arc::new(target_repo),
        settings: Arc::new(FileSettingsRepository::new(&paths.settings_path)),
        secrets: Arc::new(FileSecretStore::new(&paths.secrets_path)),
        derived_cache: reveal_cache.clone(),
        reveal_cache,
        clock: Arc::new(SystemClock),
        library_probe: Arc::new(FsLibraryProbe::new(&paths.library_root)),
    })
}
