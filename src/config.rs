//! Application-level configuration loading, including the relay credential.

use std::{env, fs, io::ErrorKind, path::PathBuf};

use tracing::{info, warn};

use crate::relay::ServiceAccount;

/// Default location on disk where the server looks for the service account.
const DEFAULT_SERVICE_ACCOUNT_PATH: &str = "config/service-account.json";
/// Environment variable that overrides [`DEFAULT_SERVICE_ACCOUNT_PATH`].
const SERVICE_ACCOUNT_PATH_ENV: &str = "PITCHSIDE_BACK_SERVICE_ACCOUNT_PATH";

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    service_account: Option<ServiceAccount>,
}

impl AppConfig {
    /// Load the application configuration from disk.
    ///
    /// A missing or unreadable credential file leaves the push relay
    /// disabled rather than failing startup; every other subsystem keeps
    /// working without it.
    pub fn load() -> Self {
        let path = resolve_service_account_path();
        let service_account = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<ServiceAccount>(&contents) {
                Ok(account) => {
                    info!(
                        path = %path.display(),
                        project = %account.project_id,
                        "loaded push relay service account"
                    );
                    Some(account)
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse service account; push relay disabled"
                    );
                    None
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "service account file not found; push relay disabled"
                );
                None
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read service account; push relay disabled"
                );
                None
            }
        };

        Self { service_account }
    }

    /// The relay credential, when one was loaded.
    pub fn service_account(&self) -> Option<&ServiceAccount> {
        self.service_account.as_ref()
    }
}

/// Resolve the credential path taking the environment override into account.
fn resolve_service_account_path() -> PathBuf {
    env::var_os(SERVICE_ACCOUNT_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SERVICE_ACCOUNT_PATH))
}
