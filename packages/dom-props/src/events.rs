use rustc_hash::{FxHashMap, FxHashSet};

/// The event system the validator consults to tell event handlers apart from unknown properties.
///
/// Renderers that do not handle events (like the server renderer) run the validator without a registry.
pub trait EventRegistry {
    /// Whether the name is a registered event handler, like `onClick`.
    fn is_registration_name(&self, name: &str) -> bool;

    /// Find the registered handler name for a lowercased name, like `onclick` -> `onClick`.
    fn possible_registration_name(&self, lowercased_name: &str) -> Option<&str>;
}

// Events that bubble get a capture phase handler as well.
const BUBBLING_EVENTS: &[&str] = &[
    "onAbort",
    "onAnimationEnd",
    "onAnimationIteration",
    "onAnimationStart",
    "onBeforeInput",
    "onBlur",
    "onCancel",
    "onCanPlay",
    "onCanPlayThrough",
    "onChange",
    "onClick",
    "onClose",
    "onCompositionEnd",
    "onCompositionStart",
    "onCompositionUpdate",
    "onContextMenu",
    "onCopy",
    "onCut",
    "onDoubleClick",
    "onDrag",
    "onDragEnd",
    "onDragEnter",
    "onDragExit",
    "onDragLeave",
    "onDragOver",
    "onDragStart",
    "onDrop",
    "onDurationChange",
    "onEmptied",
    "onEncrypted",
    "onEnded",
    "onError",
    "onFocus",
    "onGotPointerCapture",
    "onInput",
    "onInvalid",
    "onKeyDown",
    "onKeyPress",
    "onKeyUp",
    "onLoad",
    "onLoadedData",
    "onLoadedMetadata",
    "onLoadStart",
    "onLostPointerCapture",
    "onMouseDown",
    "onMouseMove",
    "onMouseOut",
    "onMouseOver",
    "onMouseUp",
    "onPaste",
    "onPause",
    "onPlay",
    "onPlaying",
    "onPointerCancel",
    "onPointerDown",
    "onPointerMove",
    "onPointerOut",
    "onPointerOver",
    "onPointerUp",
    "onProgress",
    "onRateChange",
    "onReset",
    "onScroll",
    "onSeeked",
    "onSeeking",
    "onSelect",
    "onStalled",
    "onSubmit",
    "onSuspend",
    "onTimeUpdate",
    "onToggle",
    "onTouchCancel",
    "onTouchEnd",
    "onTouchMove",
    "onTouchStart",
    "onTransitionEnd",
    "onVolumeChange",
    "onWaiting",
    "onWheel",
];

// Enter and leave events are dispatched directly and have no capture phase.
const DIRECT_EVENTS: &[&str] = &[
    "onMouseEnter",
    "onMouseLeave",
    "onPointerEnter",
    "onPointerLeave",
];

/// The events the built-in renderers dispatch.
#[derive(Debug, Clone)]
pub struct StandardEvents {
    registration_names: FxHashSet<String>,
    possible_registration_names: FxHashMap<String, String>,
}

impl Default for StandardEvents {
    fn default() -> Self {
        let mut events = Self {
            registration_names: FxHashSet::default(),
            possible_registration_names: FxHashMap::default(),
        };

        for name in BUBBLING_EVENTS {
            events.register(name);
            events.register(&format!("{name}Capture"));
        }
        for name in DIRECT_EVENTS {
            events.register(name);
        }

        // The DOM event is `dblclick`, which people reach for out of habit
        events
            .possible_registration_names
            .insert("ondblclick".to_string(), "onDoubleClick".to_string());

        events
    }
}

impl StandardEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an additional event handler name.
    pub fn register(&mut self, name: &str) {
        self.registration_names.insert(name.to_string());
        self.possible_registration_names
            .insert(name.to_ascii_lowercase(), name.to_string());
    }
}

impl EventRegistry for StandardEvents {
    fn is_registration_name(&self, name: &str) -> bool {
        self.registration_names.contains(name)
    }

    fn possible_registration_name(&self, lowercased_name: &str) -> Option<&str> {
        self.possible_registration_names
            .get(lowercased_name)
            .map(String::as_str)
    }
}
