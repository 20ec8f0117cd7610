pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::console::ConsoleAlerter;
pub use crate::adapters::screen::Screen;
pub use crate::config::{toml_config::TomlConfig, CliConfig};
pub use crate::core::bootstrap::{bootstrap, App, AppBuilder};
pub use crate::core::summary::SummaryView;
pub use crate::core::{formatter, Alerter, ConfigProvider, MountTarget, RootView, ViewContext};
pub use crate::domain::model::{AlertLevel, Notice};
pub use crate::utils::error::{AppError, Result};
