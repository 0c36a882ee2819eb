//! Class-string building and merging.
//!
//! - [`ClassList`]: collects class fragments, skipping empty and disabled ones
//! - [`merge_classes`]: resolves utility-class conflicts (last wins)
//!
//! Adapters build their output with a [`ClassList`]. The utility adapter
//! finishes with [`ClassList::merged`]; BEM-style adapters use
//! [`ClassList::join`], which is plain concatenation.

mod merge;

use std::borrow::Cow;

pub use merge::merge_classes;

/// An ordered list of class fragments.
///
/// Each fragment may itself hold several space-separated classes. Empty
/// fragments are dropped so the joined output never contains doubled or
/// trailing spaces.
///
/// # Example
///
/// ```rust
/// use soave_ui::classes::ClassList;
///
/// let disabled = true;
/// let classes = ClassList::new()
///     .add("button")
///     .add(format!("button--{}", "primary"))
///     .add_if(disabled, "button--disabled")
///     .add_if(false, "button--loading")
///     .join();
/// assert_eq!(classes, "button button--primary button--disabled");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    fragments: Vec<Cow<'static, str>>,
}

impl ClassList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a fragment. Blank fragments are ignored.
    pub fn add(mut self, fragment: impl Into<Cow<'static, str>>) -> Self {
        let fragment = fragment.into();
        if !fragment.trim().is_empty() {
            self.fragments.push(fragment);
        }
        self
    }

    /// Appends `fragment` only when `condition` holds.
    pub fn add_if(self, condition: bool, fragment: impl Into<Cow<'static, str>>) -> Self {
        if condition {
            self.add(fragment)
        } else {
            self
        }
    }

    /// Appends `when_true` or `when_false` depending on `condition`.
    pub fn add_either(
        self,
        condition: bool,
        when_true: impl Into<Cow<'static, str>>,
        when_false: impl Into<Cow<'static, str>>,
    ) -> Self {
        if condition {
            self.add(when_true)
        } else {
            self.add(when_false)
        }
    }

    /// Returns `true` if no fragments were added.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Joins the fragments with single spaces, without deduplication.
    pub fn join(&self) -> String {
        self.fragments
            .iter()
            .flat_map(|fragment| fragment.split_whitespace())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Joins the fragments and resolves utility-class conflicts.
    pub fn merged(&self) -> String {
        merge_classes(&self.join())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list() {
        let list = ClassList::new();
        assert!(list.is_empty());
        assert_eq!(list.join(), "");
        assert_eq!(list.merged(), "");
    }

    #[test]
    fn test_blank_fragments_skipped() {
        let list = ClassList::new().add("").add("   ").add("card");
        assert_eq!(list.join(), "card");
    }

    #[test]
    fn test_add_if() {
        let list = ClassList::new()
            .add("radio")
            .add_if(true, "radio--checked")
            .add_if(false, "radio--disabled");
        assert_eq!(list.join(), "radio radio--checked");
    }

    #[test]
    fn test_add_either() {
        let on = ClassList::new().add_either(true, "bg-primary", "bg-input").join();
        let off = ClassList::new().add_either(false, "bg-primary", "bg-input").join();
        assert_eq!(on, "bg-primary");
        assert_eq!(off, "bg-input");
    }

    #[test]
    fn test_join_normalizes_whitespace() {
        let list = ClassList::new().add("flex  items-center ").add(" gap-2");
        assert_eq!(list.join(), "flex items-center gap-2");
    }

    #[test]
    fn test_join_keeps_duplicates_merged_does_not() {
        let list = ClassList::new().add("bg-background text-sm").add("bg-muted text-sm");
        assert_eq!(list.join(), "bg-background text-sm bg-muted text-sm");
        assert_eq!(list.merged(), "bg-muted text-sm");
    }
}
