pub mod bootstrap;
pub mod formatter;
pub mod summary;

pub use crate::domain::model::{AlertLevel, Notice};
pub use crate::domain::ports::{Alerter, ConfigProvider, MountTarget, RootView, ViewContext};
pub use crate::utils::error::Result;
