use crate::domain::model::{AlertLevel, Notice};
use crate::domain::ports::Alerter;

/// Stderr-backed alerter, the terminal stand-in for the dialog plugin.
#[derive(Debug, Clone, Default)]
pub struct ConsoleAlerter;

impl Alerter for ConsoleAlerter {
    fn alert(&self, notice: &Notice) {
        let glyph = match notice.level {
            AlertLevel::Info => "🔔",
            AlertLevel::Success => "✅",
            AlertLevel::Warning => "⚠️",
            AlertLevel::Error => "❌",
        };
        eprintln!("{} {}: {}", glyph, notice.title, notice.body);
        tracing::debug!("alert raised: [{:?}] {}", notice.level, notice.title);
    }
}
