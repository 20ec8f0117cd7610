use crate::domain::ports::MountTarget;
use crate::utils::error::{AppError, Result};
use std::collections::HashMap;

/// In-memory mount surface: the stand-in for the host document. Nodes are
/// created up front (like elements in a static page) and each node holds at
/// most one mounted view.
#[derive(Debug, Clone, Default)]
pub struct Screen {
    nodes: HashMap<String, Option<String>>,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    /// A screen with a single empty node, the common one-page case.
    pub fn with_node(selector: &str) -> Self {
        let mut screen = Self::new();
        screen.add_node(selector);
        screen
    }

    pub fn add_node(&mut self, selector: &str) {
        self.nodes.insert(normalize(selector), None);
    }

    /// Content mounted at the node, if any.
    pub fn rendered(&self, selector: &str) -> Option<&str> {
        self.nodes
            .get(&normalize(selector))
            .and_then(|slot| slot.as_deref())
    }

    pub fn mounted_count(&self) -> usize {
        self.nodes.values().filter(|slot| slot.is_some()).count()
    }
}

impl MountTarget for Screen {
    fn contains(&self, selector: &str) -> bool {
        self.nodes.contains_key(&normalize(selector))
    }

    fn attach(&mut self, selector: &str, rendered: String) -> Result<()> {
        let selector = normalize(selector);
        match self.nodes.get_mut(&selector) {
            None => Err(AppError::MountTargetNotFound { selector }),
            Some(slot) if slot.is_some() => Err(AppError::MountTargetOccupied { selector }),
            Some(slot) => {
                *slot = Some(rendered);
                Ok(())
            }
        }
    }
}

fn normalize(selector: &str) -> String {
    selector.trim_start_matches('#').to_string()
}
