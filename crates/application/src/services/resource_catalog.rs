use matchcast_domain::{Channel, DomainError, ResourceClass};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Lookup of configured resource classes by name.
///
/// Built once at startup and shared read-only.
#[derive(Debug, Default)]
pub struct ResourceCatalog {
    classes: HashMap<Arc<str>, ResourceClass>,
    order: Vec<Arc<str>>,
    channels: HashSet<Channel>,
}

impl ResourceCatalog {
    /// Later duplicates replace earlier ones; config validation rejects
    /// duplicates before this point.
    pub fn new(classes: impl IntoIterator<Item = ResourceClass>) -> Self {
        let mut catalog = Self::default();
        for class in classes {
            let name = Arc::clone(&class.name);
            catalog.channels.insert(class.channel());
            if catalog.classes.insert(Arc::clone(&name), class).is_none() {
                catalog.order.push(name);
            }
        }
        catalog
    }

    pub fn get(&self, name: &str) -> Result<&ResourceClass, DomainError> {
        self.classes
            .get(name)
            .ok_or_else(|| DomainError::UnknownResource(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Channels open to subscribers: every class channel plus `notifications`.
    pub fn serves_channel(&self, channel: &Channel) -> bool {
        *channel == Channel::notifications() || self.channels.contains(channel)
    }

    /// Classes in configuration order.
    pub fn all(&self) -> impl Iterator<Item = &ResourceClass> {
        self.order.iter().filter_map(|name| self.classes.get(name))
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
