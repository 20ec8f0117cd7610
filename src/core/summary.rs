//! The demo root view: an expense summary with localized amounts.

use crate::core::formatter;
use crate::domain::model::Notice;
use crate::domain::ports::{RootView, ViewContext};

/// Renders one line per expense plus a total, all in es-PE currency format.
/// When a budget is set and the total exceeds it, a warning is raised
/// through the app's alert capability during render.
pub struct SummaryView {
    amounts: Vec<f64>,
    budget: Option<f64>,
}

impl SummaryView {
    pub fn new(amounts: Vec<f64>, budget: Option<f64>) -> Self {
        Self { amounts, budget }
    }

    pub fn total(&self) -> f64 {
        self.amounts.iter().sum()
    }
}

impl RootView for SummaryView {
    fn name(&self) -> &str {
        "expense-summary"
    }

    fn render(&self, ctx: &ViewContext) -> String {
        let total = self.total();

        let mut lines = vec!["Resumen de gastos".to_string()];
        for amount in &self.amounts {
            lines.push(format!("  {}", formatter::format(*amount)));
        }
        lines.push(format!("Total: {}", formatter::format(total)));

        if let Some(budget) = self.budget {
            lines.push(format!("Presupuesto: {}", formatter::format(budget)));
            if total > budget {
                ctx.alert(&Notice::warning(
                    "Presupuesto excedido",
                    format!(
                        "Los gastos suman {} sobre un presupuesto de {}",
                        formatter::format(total),
                        formatter::format(budget)
                    ),
                ));
            }
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::AlertLevel;
    use crate::domain::ports::Alerter;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct RecordingAlerter {
        notices: Mutex<Vec<Notice>>,
    }

    impl Alerter for RecordingAlerter {
        fn alert(&self, notice: &Notice) {
            self.notices.lock().unwrap().push(notice.clone());
        }
    }

    fn render(view: &SummaryView) -> (String, Vec<Notice>) {
        let alerter = Arc::new(RecordingAlerter::default());
        let ctx = ViewContext::new(alerter.clone());
        let out = view.render(&ctx);
        let notices = alerter.notices.lock().unwrap().clone();
        (out, notices)
    }

    #[test]
    fn test_render_lists_formatted_amounts_and_total() {
        let view = SummaryView::new(vec![1000.0, 49.9], None);
        let (out, notices) = render(&view);

        assert!(out.contains("  S/ 1,000.00"));
        assert!(out.contains("  S/ 49.90"));
        assert!(out.contains("Total: S/ 1,049.90"));
        assert!(notices.is_empty());
    }

    #[test]
    fn test_budget_exceeded_raises_warning() {
        let view = SummaryView::new(vec![800.0, 300.0], Some(1000.0));
        let (out, notices) = render(&view);

        assert!(out.contains("Presupuesto: S/ 1,000.00"));
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, AlertLevel::Warning);
        assert!(notices[0].body.contains("S/ 1,100.00"));
    }

    #[test]
    fn test_budget_not_exceeded_is_quiet() {
        let view = SummaryView::new(vec![100.0], Some(1000.0));
        let (_, notices) = render(&view);
        assert!(notices.is_empty());
    }
}
