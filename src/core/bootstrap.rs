//! Application bootstrap: build one app instance from a root view, register
//! the alert capability, and attach the rendered tree to a mount surface.
//!
//! There is no module-level instance. `bootstrap` (or `AppBuilder::mount`)
//! returns a caller-owned `App`; the caller decides its lifetime.

use crate::domain::model::Notice;
use crate::domain::ports::{Alerter, MountTarget, RootView, ViewContext};
use crate::utils::error::{AppError, Result};
use std::sync::Arc;

/// A mounted application instance.
pub struct App {
    root_name: String,
    selector: String,
    alerter: Arc<dyn Alerter>,
}

impl App {
    pub fn builder<V: RootView>(root: V) -> AppBuilder<V> {
        AppBuilder {
            root,
            alerter: None,
        }
    }

    pub fn root_name(&self) -> &str {
        &self.root_name
    }

    /// Node id the instance is attached to, without the leading `#`.
    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn alerter(&self) -> Arc<dyn Alerter> {
        Arc::clone(&self.alerter)
    }

    pub fn alert(&self, notice: &Notice) {
        self.alerter.alert(notice);
    }
}

pub struct AppBuilder<V: RootView> {
    root: V,
    alerter: Option<Arc<dyn Alerter>>,
}

impl<V: RootView> AppBuilder<V> {
    /// Registers the alert capability. Exactly one registration is allowed;
    /// like the host framework's plugin mechanism, a repeat registration is
    /// ignored with a warning and the first one wins.
    pub fn use_alerter(mut self, alerter: Arc<dyn Alerter>) -> Self {
        if self.alerter.is_some() {
            tracing::warn!("alert capability already registered, ignoring repeat registration");
            return self;
        }
        self.alerter = Some(alerter);
        self
    }

    /// Renders the root view and attaches it to the named node.
    ///
    /// Fails when no alerter was registered, when the node does not exist
    /// (the host framework would warn and skip; here the condition is
    /// surfaced to the caller), or when the node already holds a view.
    pub fn mount<T: MountTarget>(self, target: &mut T, selector: &str) -> Result<App> {
        let selector = selector.trim_start_matches('#').to_string();
        let alerter = self.alerter.ok_or(AppError::AlertCapabilityMissing)?;

        if !target.contains(&selector) {
            tracing::warn!("mount target '#{}' not found, nothing mounted", selector);
            return Err(AppError::MountTargetNotFound { selector });
        }

        let ctx = ViewContext::new(Arc::clone(&alerter));
        let rendered = self.root.render(&ctx);
        target.attach(&selector, rendered)?;

        tracing::info!("mounted '{}' at '#{}'", self.root.name(), selector);

        Ok(App {
            root_name: self.root.name().to_string(),
            selector,
            alerter,
        })
    }
}

/// One-call entry point: build, register, mount.
pub fn bootstrap<V: RootView, T: MountTarget>(
    root: V,
    alerter: Arc<dyn Alerter>,
    target: &mut T,
    selector: &str,
) -> Result<App> {
    App::builder(root).use_alerter(alerter).mount(target, selector)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::screen::Screen;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingAlerter {
        hits: AtomicUsize,
    }

    impl CountingAlerter {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                hits: AtomicUsize::new(0),
            })
        }
    }

    impl Alerter for CountingAlerter {
        fn alert(&self, _notice: &Notice) {
            self.hits.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct GreetingView;

    impl RootView for GreetingView {
        fn name(&self) -> &str {
            "greeting"
        }

        fn render(&self, ctx: &ViewContext) -> String {
            ctx.alert(&Notice::info("hola", "render started"));
            "hola".to_string()
        }
    }

    #[test]
    fn test_bootstrap_mounts_once_and_exposes_alerter() {
        let mut screen = Screen::with_node("app");
        let alerter = CountingAlerter::new();

        let app = bootstrap(GreetingView, alerter.clone(), &mut screen, "#app").unwrap();

        assert_eq!(app.selector(), "app");
        assert_eq!(app.root_name(), "greeting");
        assert_eq!(screen.rendered("app"), Some("hola"));
        // The view reached the capability during render.
        assert_eq!(alerter.hits.load(Ordering::SeqCst), 1);

        app.alert(&Notice::success("ok", "post-mount"));
        assert_eq!(alerter.hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_missing_mount_target() {
        let mut screen = Screen::new();
        let err = bootstrap(GreetingView, CountingAlerter::new(), &mut screen, "app")
            .err()
            .unwrap();
        assert!(matches!(err, AppError::MountTargetNotFound { .. }));
    }

    #[test]
    fn test_occupied_mount_target() {
        let mut screen = Screen::with_node("app");
        bootstrap(GreetingView, CountingAlerter::new(), &mut screen, "app").unwrap();

        let err = bootstrap(GreetingView, CountingAlerter::new(), &mut screen, "app")
            .err()
            .unwrap();
        assert!(matches!(err, AppError::MountTargetOccupied { .. }));
    }

    #[test]
    fn test_mount_without_alerter_fails() {
        let mut screen = Screen::with_node("app");
        let err = App::builder(GreetingView).mount(&mut screen, "app").err().unwrap();
        assert!(matches!(err, AppError::AlertCapabilityMissing));
    }

    #[test]
    fn test_repeat_registration_keeps_first_alerter() {
        let mut screen = Screen::with_node("app");
        let first = CountingAlerter::new();
        let second = CountingAlerter::new();

        let app = App::builder(GreetingView)
            .use_alerter(first.clone())
            .use_alerter(second.clone())
            .mount(&mut screen, "app")
            .unwrap();

        app.alert(&Notice::info("x", "y"));
        assert_eq!(first.hits.load(Ordering::SeqCst), 2); // render + explicit
        assert_eq!(second.hits.load(Ordering::SeqCst), 0);
    }
}
