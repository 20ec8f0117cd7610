use crate::domain::model::Notice;
use crate::utils::error::Result;
use std::sync::Arc;

/// Cross-cutting alert/dialog capability. Registered once on the app
/// instance and reachable from any view through `ViewContext`.
pub trait Alerter: Send + Sync {
    fn alert(&self, notice: &Notice);
}

/// The host surface an app instance attaches to. Nodes are addressed by
/// selector; a node holds at most one mounted view.
pub trait MountTarget {
    fn contains(&self, selector: &str) -> bool;
    fn attach(&mut self, selector: &str, rendered: String) -> Result<()>;
}

/// The externally supplied root UI definition.
pub trait RootView {
    fn name(&self) -> &str;
    fn render(&self, ctx: &ViewContext) -> String;
}

pub trait ConfigProvider {
    fn raw_amounts(&self) -> Vec<String>;
    fn mount_selector(&self) -> &str;
    fn budget(&self) -> Option<f64>;
}

/// Handle passed down the view tree during rendering.
#[derive(Clone)]
pub struct ViewContext {
    alerter: Arc<dyn Alerter>,
}

impl ViewContext {
    pub fn new(alerter: Arc<dyn Alerter>) -> Self {
        Self { alerter }
    }

    pub fn alert(&self, notice: &Notice) {
        self.alerter.alert(notice);
    }

    pub fn alerter(&self) -> Arc<dyn Alerter> {
        Arc::clone(&self.alerter)
    }
}
