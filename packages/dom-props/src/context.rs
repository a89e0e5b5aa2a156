use std::sync::Arc;

use crate::config::ValidationConfig;
use crate::events::{EventRegistry, StandardEvents};
use crate::names::{AttributeNameCache, NameCheck};
use crate::registry::AttributeRegistry;
use crate::warning::{TracingSink, WarnedProperties, WarningKind, WarningSink};

/// Everything the validator and the property writer need, owned by the renderer.
///
/// The context carries the state that must live across elements: the properties that were already warned about and
/// the attribute names that were already checked. A renderer usually keeps one context for its whole lifetime so each
/// problem is reported once. The context is not shared between threads; give each render thread its own.
///
/// ```rust
/// use dioxus_dom_props::{PropContext, Props, ValidationConfig, Warning};
///
/// let mut ctx = PropContext::with_sink(Vec::<Warning>::new())
///     .with_config(ValidationConfig::default().with_enabled(true));
///
/// ctx.validate_element("div", &Props::new().with("class", "card"), None);
/// assert_eq!(
///     ctx.sink()[0].message,
///     "Unknown DOM property `class`. Did you mean `className`?"
/// );
/// ```
pub struct PropContext<S: WarningSink = TracingSink> {
    pub(crate) config: ValidationConfig,
    pub(crate) registry: Arc<AttributeRegistry>,
    pub(crate) events: Option<Box<dyn EventRegistry>>,
    pub(crate) warned: WarnedProperties,
    pub(crate) names: AttributeNameCache,
    pub(crate) sink: S,
}

impl PropContext<TracingSink> {
    /// A context that logs warnings with `tracing`.
    pub fn new() -> Self {
        Self::with_sink(TracingSink)
    }
}

impl Default for PropContext<TracingSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: WarningSink> PropContext<S> {
    /// A context that sends warnings to the given sink.
    pub fn with_sink(sink: S) -> Self {
        Self {
            config: ValidationConfig::default(),
            registry: AttributeRegistry::standard(),
            events: Some(Box::new(StandardEvents::default())),
            warned: WarnedProperties::default(),
            names: AttributeNameCache::default(),
            sink,
        }
    }

    pub fn with_config(mut self, config: ValidationConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a custom registry instead of the standard HTML and SVG one.
    pub fn with_registry(mut self, registry: Arc<AttributeRegistry>) -> Self {
        self.registry = registry;
        self
    }

    /// Use a custom event registry.
    pub fn with_events(mut self, events: impl EventRegistry + 'static) -> Self {
        self.events = Some(Box::new(events));
        self
    }

    /// Validate without an event registry.
    ///
    /// Renderers that never attach listeners (like the server renderer) cannot tell which event handlers exist. Only
    /// handlers that are obviously miscased are reported.
    pub fn without_events(mut self) -> Self {
        self.events = None;
        self
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    pub fn registry(&self) -> &AttributeRegistry {
        &self.registry
    }

    pub fn warned(&self) -> &WarnedProperties {
        &self.warned
    }

    pub fn warned_mut(&mut self) -> &mut WarnedProperties {
        &mut self.warned
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Take the sink back out of the context.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Check an attribute name before writing it, warning the first time an illegal name is seen.
    pub(crate) fn is_attribute_name_safe(&mut self, name: &str) -> bool {
        let check = self.names.check(name);
        if check == NameCheck::NewlyRejected && self.config.enabled {
            self.sink.warn(
                WarningKind::InvalidAttributeName,
                format_args!("Invalid attribute name: `{name}`"),
            );
        }
        check.is_safe()
    }
}

impl<S: WarningSink + std::fmt::Debug> std::fmt::Debug for PropContext<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropContext")
            .field("config", &self.config)
            .field("registry", &self.registry.len())
            .field("events", &self.events.is_some())
            .field("warned", &self.warned)
            .field("sink", &self.sink)
            .finish()
    }
}
