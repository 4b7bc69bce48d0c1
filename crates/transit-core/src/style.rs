//! Explicit style snapshots
//!
//! A [`StyleSnapshot`] is an ordered property→value map standing in for a
//! node's computed style. Proxies are stamped with a full snapshot so they
//! render identically to their source without inheriting any ambient
//! stylesheet context. Insertion order is preserved so a stamped snapshot
//! replays onto a node deterministically.

use indexmap::IndexMap;

/// Well-known style property names used by the engine.
pub mod properties {
    pub const POSITION: &str = "position";
    pub const LEFT: &str = "left";
    pub const TOP: &str = "top";
    pub const WIDTH: &str = "width";
    pub const HEIGHT: &str = "height";
    pub const MARGIN: &str = "margin";
    pub const Z_INDEX: &str = "z-index";
    pub const TRANSFORM: &str = "transform";
    pub const TRANSFORM_ORIGIN: &str = "transform-origin";
    pub const WILL_CHANGE: &str = "will-change";
    pub const COLOR: &str = "color";
    /// Explicit text fill. Cloned text nodes lose their fill unless it is
    /// stamped separately from `color`.
    pub const TEXT_FILL_COLOR: &str = "text-fill-color";
    pub const BORDER_RADIUS: &str = "border-radius";
    pub const BACKGROUND_COLOR: &str = "background-color";
}

/// Formats a length value the way hosts expect style lengths.
pub fn px(value: f32) -> String {
    format!("{value}px")
}

/// An ordered snapshot of style property/value pairs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleSnapshot {
    props: IndexMap<String, String>,
}

impl StyleSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, replacing any previous value in place.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.props.insert(property.into(), value.into());
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.props.get(property).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Iterates pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.props.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns a snapshot containing only the requested properties, in the
    /// order they are requested. Properties absent from `self` are skipped.
    pub fn subset(&self, properties: &[String]) -> StyleSnapshot {
        let mut out = StyleSnapshot::new();
        for property in properties {
            if let Some(value) = self.get(property) {
                out.set(property.clone(), value.to_owned());
            }
        }
        out
    }

    /// Copies every pair from `other` into `self`, overwriting collisions.
    pub fn merge(&mut self, other: &StyleSnapshot) {
        for (property, value) in other.iter() {
            self.set(property, value);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StyleSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut snapshot = StyleSnapshot::new();
        for (property, value) in iter {
            snapshot.set(property, value);
        }
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_in_place() {
        let mut snapshot = StyleSnapshot::new();
        snapshot.set("color", "red");
        snapshot.set("margin", "0");
        snapshot.set("color", "blue");
        assert_eq!(snapshot.get("color"), Some("blue"));
        assert_eq!(snapshot.len(), 2);
        let order: Vec<&str> = snapshot.iter().map(|(k, _)| k).collect();
        assert_eq!(order, vec!["color", "margin"]);
    }

    #[test]
    fn subset_follows_request_order_and_skips_missing() {
        let snapshot: StyleSnapshot =
            [("width", "10px"), ("height", "20px"), ("color", "red")]
                .into_iter()
                .collect();
        let picked = snapshot.subset(&[
            "height".to_owned(),
            "opacity".to_owned(),
            "width".to_owned(),
        ]);
        let pairs: Vec<(&str, &str)> = picked.iter().collect();
        assert_eq!(pairs, vec![("height", "20px"), ("width", "10px")]);
    }

    #[test]
    fn merge_overwrites_collisions() {
        let mut base: StyleSnapshot = [("color", "red"), ("margin", "0")].into_iter().collect();
        let patch: StyleSnapshot = [("color", "green")].into_iter().collect();
        base.merge(&patch);
        assert_eq!(base.get("color"), Some("green"));
        assert_eq!(base.get("margin"), Some("0"));
    }

    #[test]
    fn px_formats_lengths() {
        assert_eq!(px(12.0), "12px");
        assert_eq!(px(-3.5), "-3.5px");
    }
}
