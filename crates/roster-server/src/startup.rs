//! Server startup utilities.

use roster_config::AppConfig;
use tracing::info;

const BANNER: &str = r#"
    ____             __
   / __ \____  _____/ /____  _____
  / /_/ / __ \/ ___/ __/ _ \/ ___/
 / _, _/ /_/ (__  ) /_/  __/ /
/_/ |_|\____/____/\__/\___/_/

                 User Directory
    "#;

/// Prints the startup banner.
pub fn print_banner() {
    info!("{}", BANNER);
}

/// Lines describing where the server can be reached.
#[must_use]
pub fn startup_summary(config: &AppConfig) -> Vec<String> {
    let separator = "=".repeat(60);
    let addr = config.server.addr();
    vec![
        separator.clone(),
        format!("Environment: {}", config.app.environment),
        format!("REST API:    http://{addr}/users"),
        format!("Ping:        http://{addr}/pong"),
        format!("Health:      http://{addr}/health"),
        format!(
            "Directory:   {}",
            if config.directory.seed_sample_users {
                "seeded with sample users"
            } else {
                "empty"
            }
        ),
        separator,
    ]
}

/// Prints server startup information.
pub fn print_startup_info(config: &AppConfig) {
    for line in startup_summary(config) {
        info!("{}", line);
    }
}
