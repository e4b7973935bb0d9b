//! TOML configuration for the demo runner.
//!
//! Every section is optional and falls back to the values the demos use out
//! of the box. Provider names are validated at load time so a typo fails
//! before anything is emitted.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::debug;
use serde::Deserialize;

use crate::database::{
    Database, MySqlDatabase, SqliteDatabase, DEFAULT_CONNECTION_STRING, DEFAULT_QUERY,
};
use crate::error::{Result, SolidError};
use crate::notification::{EmailNotification, Notification, PushNotification, SmsNotification};
use crate::shape::{Circle, Rectangle, Shape};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolidConfig {
    pub devices: Vec<DeviceConfig>,
    pub database: DatabaseConfig,
    pub notifications: NotificationConfig,
    pub shapes: Vec<ShapeSpec>,
}

impl Default for SolidConfig {
    fn default() -> Self {
        SolidConfig {
            devices: vec![
                DeviceConfig {
                    kind: DeviceKind::PrintScan,
                    document: "Document A".to_string(),
                    label: None,
                },
                DeviceConfig {
                    kind: DeviceKind::PrintFax,
                    document: "Document B".to_string(),
                    label: None,
                },
            ],
            database: DatabaseConfig::default(),
            notifications: NotificationConfig::default(),
            shapes: vec![
                ShapeSpec::Rectangle {
                    width: 3.5,
                    height: 2.0,
                },
                ShapeSpec::Circle { radius: 5.0 },
            ],
        }
    }
}

impl SolidConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SolidConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        debug!("loading config from {}", path.display());
        let content = fs::read_to_string(path).map_err(|source| SolidError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        self.database.backend()?;
        self.notifications.channels()?;
        for shape in &self.shapes {
            shape.validate()?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeviceKind {
    PrintScan,
    PrintFax,
    MultiFunction,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeviceConfig {
    pub kind: DeviceKind,
    pub document: String,
    /// Prefix for every line the device's providers emit.
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseBackend {
    MySql,
    Sqlite,
}

impl FromStr for DatabaseBackend {
    type Err = SolidError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "mysql" => Ok(DatabaseBackend::MySql),
            "sqlite" => Ok(DatabaseBackend::Sqlite),
            _ => Err(SolidError::unknown_provider("database", s)),
        }
    }
}

impl DatabaseBackend {
    pub fn build(self) -> Box<dyn Database> {
        match self {
            DatabaseBackend::MySql => Box::new(MySqlDatabase),
            DatabaseBackend::Sqlite => Box::new(SqliteDatabase),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseConfig {
    pub backend: String,
    pub connection_string: String,
    pub query: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig {
            backend: "mysql".to_string(),
            connection_string: DEFAULT_CONNECTION_STRING.to_string(),
            query: DEFAULT_QUERY.to_string(),
        }
    }
}

impl DatabaseConfig {
    pub fn backend(&self) -> Result<DatabaseBackend> {
        self.backend.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationChannel {
    Email,
    Sms,
    Push,
}

impl FromStr for NotificationChannel {
    type Err = SolidError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "email" => Ok(NotificationChannel::Email),
            "sms" => Ok(NotificationChannel::Sms),
            "push" => Ok(NotificationChannel::Push),
            _ => Err(SolidError::unknown_provider("notification", s)),
        }
    }
}

impl NotificationChannel {
    pub fn build(self) -> Box<dyn Notification> {
        match self {
            NotificationChannel::Email => Box::new(EmailNotification),
            NotificationChannel::Sms => Box::new(SmsNotification),
            NotificationChannel::Push => Box::new(PushNotification),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NotificationConfig {
    pub channels: Vec<String>,
    pub message: String,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        NotificationConfig {
            channels: vec!["email".to_string(), "sms".to_string(), "push".to_string()],
            message: "You have a new notification!".to_string(),
        }
    }
}

impl NotificationConfig {
    pub fn channels(&self) -> Result<Vec<NotificationChannel>> {
        self.channels.iter().map(|c| c.parse()).collect()
    }

    pub fn build(&self) -> Result<Vec<Box<dyn Notification>>> {
        Ok(self.channels()?.into_iter().map(NotificationChannel::build).collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ShapeSpec {
    Rectangle { width: f64, height: f64 },
    Circle { radius: f64 },
}

impl ShapeSpec {
    pub fn validate(&self) -> Result<()> {
        let dimensions = match *self {
            ShapeSpec::Rectangle { width, height } => vec![width, height],
            ShapeSpec::Circle { radius } => vec![radius],
        };
        if dimensions.iter().any(|d| !d.is_finite() || *d < 0.0) {
            return Err(SolidError::Config(format!(
                "shape dimensions must be finite and non-negative: {self:?}"
            )));
        }
        Ok(())
    }

    pub fn build(self) -> Box<dyn Shape> {
        match self {
            ShapeSpec::Rectangle { width, height } => Box::new(Rectangle::new(width, height)),
            ShapeSpec::Circle { radius } => Box::new(Circle::new(radius)),
        }
    }
}
