//! Session configuration
//!
//! Every recognized option is enumerated here with its default. A
//! configuration is resolved once at session construction and never re-read
//! from the caller afterwards; builder methods layer changes over
//! [`TransportConfig::default`], so a partial configuration can never clobber
//! an unspecified default.

use std::fmt;
use std::time::Duration;

use crate::host::Easing;
use crate::style::properties;

/// Options controlling a transport session.
pub struct TransportConfig {
    /// Reconcile size and style toward the target instead of translating.
    pub morph: bool,
    /// Recurse morph reconciliation into paired descendants.
    pub morph_children: bool,
    /// Style properties reconciled in morph mode. Width/height participate by
    /// default so the proxy's intrinsic box becomes the target's.
    pub morph_properties: Vec<String>,
    pub duration: Duration,
    pub easing: Easing,
    /// Extra per-index delay before each proxy's transition begins.
    pub stagger: Duration,
    /// Stacking order assigned to proxies while in flight.
    pub stack_order: i32,
    pub hide_source: bool,
    pub hide_target: bool,
    /// Whether teardown restores source visibility. The target side is always
    /// restored; disable this for morph sessions where the target visually
    /// becomes the source.
    pub restore_source: bool,
    /// Remove proxies and restore visibility once the last transition ends.
    pub remove_proxies_after: bool,
    /// Stamp a will-change hint on proxies before their transition.
    pub will_change_hint: bool,
    /// Emit human-readable trace lines. Has no effect on timing or behavior.
    pub log: bool,
    /// Invoked with no arguments, exactly once, after teardown.
    pub on_complete: Option<Box<dyn FnOnce()>>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            morph: false,
            morph_children: false,
            morph_properties: vec![
                properties::WIDTH.to_owned(),
                properties::HEIGHT.to_owned(),
                properties::BORDER_RADIUS.to_owned(),
                properties::BACKGROUND_COLOR.to_owned(),
            ],
            duration: Duration::from_millis(300),
            easing: Easing::EaseInOut,
            stagger: Duration::from_millis(30),
            stack_order: 1000,
            hide_source: true,
            hide_target: true,
            restore_source: true,
            remove_proxies_after: true,
            will_change_hint: false,
            log: false,
            on_complete: None,
        }
    }
}

impl TransportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_morph(mut self, morph: bool) -> Self {
        self.morph = morph;
        self
    }

    pub fn with_morph_children(mut self, morph_children: bool) -> Self {
        self.morph_children = morph_children;
        self
    }

    pub fn with_morph_properties(mut self, properties: Vec<String>) -> Self {
        self.morph_properties = properties;
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_stagger(mut self, stagger: Duration) -> Self {
        self.stagger = stagger;
        self
    }

    pub fn with_stack_order(mut self, stack_order: i32) -> Self {
        self.stack_order = stack_order;
        self
    }

    pub fn with_hide_source(mut self, hide_source: bool) -> Self {
        self.hide_source = hide_source;
        self
    }

    pub fn with_hide_target(mut self, hide_target: bool) -> Self {
        self.hide_target = hide_target;
        self
    }

    pub fn with_restore_source(mut self, restore_source: bool) -> Self {
        self.restore_source = restore_source;
        self
    }

    pub fn with_remove_proxies_after(mut self, remove: bool) -> Self {
        self.remove_proxies_after = remove;
        self
    }

    pub fn with_will_change_hint(mut self, hint: bool) -> Self {
        self.will_change_hint = hint;
        self
    }

    pub fn with_log(mut self, log: bool) -> Self {
        self.log = log;
        self
    }

    pub fn with_on_complete(mut self, on_complete: impl FnOnce() + 'static) -> Self {
        self.on_complete = Some(Box::new(on_complete));
        self
    }
}

impl fmt::Debug for TransportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportConfig")
            .field("morph", &self.morph)
            .field("morph_children", &self.morph_children)
            .field("morph_properties", &self.morph_properties)
            .field("duration", &self.duration)
            .field("easing", &self.easing)
            .field("stagger", &self.stagger)
            .field("stack_order", &self.stack_order)
            .field("hide_source", &self.hide_source)
            .field("hide_target", &self.hide_target)
            .field("restore_source", &self.restore_source)
            .field("remove_proxies_after", &self.remove_proxies_after)
            .field("will_change_hint", &self.will_change_hint)
            .field("log", &self.log)
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_favor_translation_and_cleanup() {
        let config = TransportConfig::default();
        assert!(!config.morph);
        assert!(!config.morph_children);
        assert_eq!(config.duration, Duration::from_millis(300));
        assert_eq!(config.easing, Easing::EaseInOut);
        assert_eq!(config.stagger, Duration::from_millis(30));
        assert_eq!(config.stack_order, 1000);
        assert!(config.hide_source);
        assert!(config.hide_target);
        assert!(config.restore_source);
        assert!(config.remove_proxies_after);
        assert!(!config.will_change_hint);
        assert!(!config.log);
        assert!(config.on_complete.is_none());
    }

    #[test]
    fn default_morph_properties_include_the_intrinsic_box() {
        let config = TransportConfig::default();
        assert!(config.morph_properties.contains(&"width".to_owned()));
        assert!(config.morph_properties.contains(&"height".to_owned()));
    }

    #[test]
    fn partial_configuration_keeps_unspecified_defaults() {
        let config = TransportConfig::new()
            .with_morph(true)
            .with_duration(Duration::from_millis(500));
        assert!(config.morph);
        assert_eq!(config.duration, Duration::from_millis(500));
        // Everything untouched stays at its documented default.
        assert_eq!(config.stagger, Duration::from_millis(30));
        assert_eq!(config.easing, Easing::EaseInOut);
        assert!(config.hide_source);
        assert!(config.remove_proxies_after);
    }
}
