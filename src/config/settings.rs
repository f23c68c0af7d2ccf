use serde::Deserialize;

/// Top-level configuration settings for the application.
///
/// Includes settings for both the server and the hub.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub hub: HubSettings,
}

/// Configuration settings for the server.
///
/// Defines the host and port the server will bind to.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Configuration settings for the hub.
///
/// `mailbox_capacity` bounds each client's outbound queue; a client whose
/// mailbox is full at broadcast time is evicted. `intake_capacity` bounds the
/// hub's submission queue; register/unregister/broadcast callers block while
/// it is full.
#[derive(Debug, Deserialize, Clone)]
pub struct HubSettings {
    pub mailbox_capacity: usize,
    pub intake_capacity: usize,
}

/// Partial configuration settings loaded from files or environment.
///
/// Allows partial specification of settings. Missing values can be filled using defaults.
#[derive(Debug, Deserialize)]
pub struct PartialSettings {
    pub server: Option<PartialServerSettings>,
    pub hub: Option<PartialHubSettings>,
}

/// Partial server settings.
///
/// Used when loading server configuration from external sources with optional values.
#[derive(Debug, Deserialize)]
pub struct PartialServerSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Partial hub settings.
///
/// Used for hub configuration from external sources with optional values.
#[derive(Debug, Deserialize)]
pub struct PartialHubSettings {
    pub mailbox_capacity: Option<usize>,
    pub intake_capacity: Option<usize>,
}

/// Provides default values for `Settings`.
///
/// Ensures the application has sensible defaults if no configuration is provided.
impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            hub: HubSettings {
                mailbox_capacity: 256,
                intake_capacity: 64,
            },
        }
    }
}
