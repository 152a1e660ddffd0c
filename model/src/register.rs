//! Component registry
//!
//! UI modules register their directives, controllers, services, filters,
//! providers and factories by name on an application module. The registry
//! keeps one constructor per `(kind, name)` and builds instances on demand.

use std::any::Any;
use std::sync::Arc;

use dashmap::DashMap;
use tracing::{debug, warn};

/// Instance produced by a registered constructor
pub type Instance = Box<dyn Any + Send + Sync>;

/// Constructor stored for a component
pub type Constructor = Arc<dyn Fn() -> Instance + Send + Sync>;

/// Kind of a registered component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentKind {
    Directive,
    Filter,
    Controller,
    Service,
    Provider,
    Factory,
}

impl ComponentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Directive => "directive",
            ComponentKind::Filter => "filter",
            ComponentKind::Controller => "controller",
            ComponentKind::Service => "service",
            ComponentKind::Provider => "provider",
            ComponentKind::Factory => "factory",
        }
    }
}

/// Object able to hand out a service instance
pub trait ServiceProvider: Send + Sync {
    fn get(&self) -> Instance;
}

#[derive(Clone)]
enum Entry {
    Constructor(Constructor),
    Provider(Arc<dyn ServiceProvider>),
}

impl Entry {
    fn build(&self) -> Instance {
        match self {
            Entry::Constructor(constructor) => (**constructor)(),
            Entry::Provider(provider) => provider.get(),
        }
    }
}

/// Registration surface of an application module
///
/// Every registration except `directive` returns the registry so calls can
/// be chained.
pub trait Register {
    /// Name of the application module
    fn app(&self) -> &str;

    fn directive<F>(&self, name: &str, constructor: F)
    where
        F: Fn() -> Instance + Send + Sync + 'static;

    fn filter<F>(&self, name: &str, constructor: F) -> &Self
    where
        F: Fn() -> Instance + Send + Sync + 'static;

    fn controller<F>(&self, name: &str, constructor: F) -> &Self
    where
        F: Fn() -> Instance + Send + Sync + 'static;

    fn service<F>(&self, name: &str, constructor: F) -> &Self
    where
        F: Fn() -> Instance + Send + Sync + 'static;

    fn provider<P>(&self, name: &str, provider: P) -> &Self
    where
        P: ServiceProvider + 'static;

    fn factory<F>(&self, name: &str, constructor: F) -> &Self
    where
        F: Fn() -> Instance + Send + Sync + 'static;
}

/// Registry of named components for one application module
pub struct ComponentRegistry {
    app: String,
    entries: DashMap<(ComponentKind, String), Entry>,
}

impl ComponentRegistry {
    /// Create an empty registry for the given application module
    pub fn new(app: impl Into<String>) -> Self {
        Self {
            app: app.into(),
            entries: DashMap::new(),
        }
    }

    fn insert(&self, kind: ComponentKind, name: &str, entry: Entry) {
        let replaced = self.entries.insert((kind, name.to_string()), entry);
        if replaced.is_some() {
            warn!(
                "{} '{}' registered twice on module {}, keeping the latest",
                kind.as_str(),
                name,
                self.app
            );
        } else {
            debug!("Registered {} '{}' on module {}", kind.as_str(), name, self.app);
        }
    }

    /// Build an instance of a registered component
    pub fn resolve(&self, kind: ComponentKind, name: &str) -> Option<Instance> {
        // Clone out of the map so constructors may resolve other components
        let entry = self
            .entries
            .get(&(kind, name.to_string()))
            .map(|entry| entry.value().clone())?;
        Some(entry.build())
    }

    /// Build an instance and downcast it to `T`
    pub fn resolve_as<T: Any>(&self, kind: ComponentKind, name: &str) -> Option<Box<T>> {
        self.resolve(kind, name)?.downcast::<T>().ok()
    }

    pub fn contains(&self, kind: ComponentKind, name: &str) -> bool {
        self.entries.contains_key(&(kind, name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sorted names registered under a kind
    pub fn names(&self, kind: ComponentKind) -> Vec<String> {
        let mut names: Vec<String> = self
            .entries
            .iter()
            .filter(|entry| entry.key().0 == kind)
            .map(|entry| entry.key().1.clone())
            .collect();
        names.sort();
        names
    }
}

impl Register for ComponentRegistry {
    fn app(&self) -> &str {
        &self.app
    }

    fn directive<F>(&self, name: &str, constructor: F)
    where
        F: Fn() -> Instance + Send + Sync + 'static,
    {
        self.insert(ComponentKind::Directive, name, Entry::Constructor(Arc::new(constructor)));
    }

    fn filter<F>(&self, name: &str, constructor: F) -> &Self
    where
        F: Fn() -> Instance + Send + Sync + 'static,
    {
        self.insert(ComponentKind::Filter, name, Entry::Constructor(Arc::new(constructor)));
        self
    }

    fn controller<F>(&self, name: &str, constructor: F) -> &Self
    where
        F: Fn() -> Instance + Send + Sync + 'static,
    {
        self.insert(ComponentKind::Controller, name, Entry::Constructor(Arc::new(constructor)));
        self
    }

    fn service<F>(&self, name: &str, constructor: F) -> &Self
    where
        F: Fn() -> Instance + Send + Sync + 'static,
    {
        self.insert(ComponentKind::Service, name, Entry::Constructor(Arc::new(constructor)));
        self
    }

    fn provider<P>(&self, name: &str, provider: P) -> &Self
    where
        P: ServiceProvider + 'static,
    {
        self.insert(ComponentKind::Provider, name, Entry::Provider(Arc::new(provider)));
        self
    }

    fn factory<F>(&self, name: &str, constructor: F) -> &Self
    where
        F: Fn() -> Instance + Send + Sync + 'static,
    {
        self.insert(ComponentKind::Factory, name, Entry::Constructor(Arc::new(constructor)));
        self
    }
}
