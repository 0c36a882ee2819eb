//! Placement of floating surfaces relative to their trigger.
//!
//! Popovers, tooltips and dropdown menus all anchor their content to a
//! trigger element using the same small rule set: one edge anchor on the
//! main axis, pushed away by a fixed pixel offset, and an alignment on the
//! cross axis. The result is a map of inline style properties that the host
//! applies to the content element.
//!
//! There is no collision detection: content that would overflow the
//! viewport is not flipped to the opposite side.
//!
//! # Example
//!
//! ```rust
//! use soave_ui::position::{position_styles, Align, Placement, Side};
//!
//! let styles = position_styles(true, true, Placement::new(Side::Bottom, Align::Center, 8));
//! assert_eq!(styles.get("top").map(String::as_str), Some("100%"));
//! assert_eq!(styles.get("marginTop").map(String::as_str), Some("8px"));
//! assert_eq!(styles.get("transform").map(String::as_str), Some("translateX(-50%)"));
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Inline style properties keyed by their camelCase property name.
pub type StyleMap = BTreeMap<String, String>;

/// The edge of the trigger the content is placed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Right,
    #[default]
    Bottom,
    Left,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Left => "left",
        }
    }

    /// Returns `true` for sides on the vertical axis (`top`, `bottom`).
    pub fn is_vertical(self) -> bool {
        matches!(self, Side::Top | Side::Bottom)
    }
}

/// Alignment of the content along the cross axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Start,
    #[default]
    Center,
    End,
}

impl Align {
    pub fn as_str(self) -> &'static str {
        match self {
            Align::Start => "start",
            Align::Center => "center",
            Align::End => "end",
        }
    }
}

/// Where a floating surface sits relative to its trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub side: Side,
    pub align: Align,
    /// Distance between trigger and content in pixels.
    pub offset: u32,
}

impl Placement {
    pub const fn new(side: Side, align: Align, offset: u32) -> Self {
        Self {
            side,
            align,
            offset,
        }
    }

    /// Popover default: below the trigger, centered, 8px away.
    pub const POPOVER: Placement = Placement::new(Side::Bottom, Align::Center, 8);

    /// Tooltip default: above the trigger, centered, 8px away.
    pub const TOOLTIP: Placement = Placement::new(Side::Top, Align::Center, 8);

    /// Dropdown default: below the trigger, start-aligned, 4px away.
    pub const DROPDOWN: Placement = Placement::new(Side::Bottom, Align::Start, 4);
}

/// Computes the inline position styles for a floating surface.
///
/// `anchored` reports whether the trigger element reference is set. When
/// either `anchored` or `is_open` is false the map is empty, so callers never
/// apply coordinates computed for a surface that is no longer shown.
pub fn position_styles(anchored: bool, is_open: bool, placement: Placement) -> StyleMap {
    let mut styles = StyleMap::new();
    if !anchored || !is_open {
        return styles;
    }

    let mut set = |key: &str, value: String| {
        styles.insert(key.to_string(), value);
    };

    set("position", "absolute".to_string());
    set("zIndex", "50".to_string());

    let margin = format!("{}px", placement.offset);
    match placement.side {
        Side::Top => {
            set("bottom", "100%".to_string());
            set("marginBottom", margin);
        }
        Side::Bottom => {
            set("top", "100%".to_string());
            set("marginTop", margin);
        }
        Side::Left => {
            set("right", "100%".to_string());
            set("marginRight", margin);
        }
        Side::Right => {
            set("left", "100%".to_string());
            set("marginLeft", margin);
        }
    }

    // Cross axis: horizontal for top/bottom, vertical for left/right.
    let (near, far, translate) = if placement.side.is_vertical() {
        ("left", "right", "translateX(-50%)")
    } else {
        ("top", "bottom", "translateY(-50%)")
    };

    match placement.align {
        Align::Start => set(near, "0".to_string()),
        Align::Center => {
            set(near, "50%".to_string());
            set("transform", translate.to_string());
        }
        Align::End => set(far, "0".to_string()),
    }

    styles
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get<'a>(styles: &'a StyleMap, key: &str) -> Option<&'a str> {
        styles.get(key).map(String::as_str)
    }

    #[test]
    fn test_bottom_center() {
        let styles = position_styles(true, true, Placement::new(Side::Bottom, Align::Center, 8));
        assert_eq!(get(&styles, "position"), Some("absolute"));
        assert_eq!(get(&styles, "zIndex"), Some("50"));
        assert_eq!(get(&styles, "top"), Some("100%"));
        assert_eq!(get(&styles, "marginTop"), Some("8px"));
        assert_eq!(get(&styles, "left"), Some("50%"));
        assert_eq!(get(&styles, "transform"), Some("translateX(-50%)"));
        assert_eq!(styles.len(), 6);
    }

    #[test]
    fn test_closed_is_empty() {
        for side in [Side::Top, Side::Right, Side::Bottom, Side::Left] {
            for align in [Align::Start, Align::Center, Align::End] {
                let styles = position_styles(true, false, Placement::new(side, align, 12));
                assert!(styles.is_empty());
            }
        }
    }

    #[test]
    fn test_unanchored_is_empty() {
        let styles = position_styles(false, true, Placement::POPOVER);
        assert!(styles.is_empty());
    }

    #[test]
    fn test_top_start() {
        let styles = position_styles(true, true, Placement::new(Side::Top, Align::Start, 4));
        assert_eq!(get(&styles, "bottom"), Some("100%"));
        assert_eq!(get(&styles, "marginBottom"), Some("4px"));
        assert_eq!(get(&styles, "left"), Some("0"));
        assert_eq!(get(&styles, "transform"), None);
    }

    #[test]
    fn test_left_end() {
        let styles = position_styles(true, true, Placement::new(Side::Left, Align::End, 8));
        assert_eq!(get(&styles, "right"), Some("100%"));
        assert_eq!(get(&styles, "marginRight"), Some("8px"));
        assert_eq!(get(&styles, "bottom"), Some("0"));
    }

    #[test]
    fn test_right_center_translates_vertically() {
        let styles = position_styles(true, true, Placement::new(Side::Right, Align::Center, 8));
        assert_eq!(get(&styles, "left"), Some("100%"));
        assert_eq!(get(&styles, "marginLeft"), Some("8px"));
        assert_eq!(get(&styles, "top"), Some("50%"));
        assert_eq!(get(&styles, "transform"), Some("translateY(-50%)"));
    }

    #[test]
    fn test_bottom_end_pins_right() {
        let styles = position_styles(true, true, Placement::DROPDOWN);
        assert_eq!(get(&styles, "left"), Some("0"));

        let styles = position_styles(true, true, Placement::new(Side::Bottom, Align::End, 4));
        assert_eq!(get(&styles, "right"), Some("0"));
        assert_eq!(get(&styles, "left"), None);
    }

    #[test]
    fn test_surface_defaults() {
        assert_eq!(Placement::POPOVER.side, Side::Bottom);
        assert_eq!(Placement::TOOLTIP.side, Side::Top);
        assert_eq!(Placement::DROPDOWN.align, Align::Start);
        assert_eq!(Placement::DROPDOWN.offset, 4);
    }
}
