//! Utility-class conflict resolution.
//!
//! Utility CSS frameworks express one CSS property per class, so joining
//! fragments from several lookup tables can produce classes that fight each
//! other (`bg-background` from the base list, `bg-muted` from a readonly
//! fragment). [`merge_classes`] keeps only the last class of each property
//! group under the same variant prefix, the way the utility framework's own
//! merge tooling does.
//!
//! # Rules
//!
//! 1. A class is split into variant modifiers (`hover:`, `data-[state=open]:`,
//!    `[&>svg]:`), an optional `!` important marker and the base utility.
//! 2. The base utility is classified into a property group (`bg-color`,
//!    `font-size`, `px`, `border-w`, ...).
//! 3. Scanning from the end, the first class seen for a `(modifiers, group)`
//!    pair wins; earlier classes of the same pair are dropped.
//! 4. Shorthands shadow their longhands: a later `p-4` drops an earlier
//!    `px-2`, but a later `px-2` keeps an earlier `p-4`.
//! 5. Classes outside the known groups are kept, minus exact duplicates.
//!
//! The surviving classes keep their original relative order.

use std::collections::HashSet;

/// A class split into its variant modifiers and base utility.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ParsedClass<'a> {
    modifiers: Vec<&'a str>,
    important: bool,
    base: &'a str,
}

fn parse_class(class: &str) -> ParsedClass<'_> {
    let mut modifiers = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;

    for (i, c) in class.char_indices() {
        match c {
            '[' | '(' => depth += 1,
            ']' | ')' => depth -= 1,
            ':' if depth == 0 => {
                modifiers.push(&class[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    let mut base = &class[start..];
    let mut important = false;
    if let Some(rest) = base.strip_prefix('!') {
        base = rest;
        important = true;
    } else if let Some(rest) = base.strip_suffix('!') {
        base = rest;
        important = true;
    }

    ParsedClass {
        modifiers,
        important,
        base,
    }
}

/// Builds the lookup key for a modifier set.
///
/// Plain variants commute (`hover:focus:` equals `focus:hover:`), arbitrary
/// variants do not, so ordering is only normalized when none are present.
fn modifier_key(parsed: &ParsedClass<'_>) -> String {
    let mut key = if parsed.modifiers.iter().any(|m| m.starts_with('[')) {
        parsed.modifiers.join(":")
    } else {
        let mut sorted = parsed.modifiers.clone();
        sorted.sort_unstable();
        sorted.join(":")
    };
    if parsed.important {
        key.push('!');
    }
    key
}

/// Merges a whitespace-separated class list, resolving utility conflicts.
///
/// # Example
///
/// ```rust
/// use soave_ui::classes::merge_classes;
///
/// assert_eq!(merge_classes("px-2 py-1 p-4"), "p-4");
/// assert_eq!(merge_classes("border border-input border-destructive"), "border border-destructive");
/// assert_eq!(merge_classes("text-sm text-muted-foreground"), "text-sm text-muted-foreground");
/// ```
pub fn merge_classes(input: &str) -> String {
    let classes: Vec<&str> = input.split_whitespace().collect();
    let mut seen: HashSet<String> = HashSet::with_capacity(classes.len());
    let mut kept: Vec<&str> = Vec::with_capacity(classes.len());

    for &class in classes.iter().rev() {
        let parsed = parse_class(class);
        let base = parsed.base.strip_prefix('-').unwrap_or(parsed.base);

        let Some(group) = classify(base) else {
            if seen.insert(format!("raw|{class}")) {
                kept.push(class);
            }
            continue;
        };

        let prefix = modifier_key(&parsed);
        if !seen.insert(format!("{prefix}|{group}")) {
            continue;
        }
        for conflict in conflicts(group) {
            seen.insert(format!("{prefix}|{conflict}"));
        }
        kept.push(class);
    }

    kept.reverse();
    kept.join(" ")
}

// ============================================================================
// Classification
// ============================================================================

/// Returns the value after `prefix`, accepting either the bare prefix
/// (`"border"`, value `""`) or a dashed form (`"border-2"`, value `"2"`).
fn value_of<'a>(base: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = base.strip_prefix(prefix)?;
    if rest.is_empty() {
        Some(rest)
    } else {
        rest.strip_prefix('-')
    }
}

fn is_arbitrary(value: &str) -> bool {
    value.starts_with('[') && value.ends_with(']')
}

fn is_arbitrary_length(value: &str) -> bool {
    if !is_arbitrary(value) {
        return false;
    }
    let inner = &value[1..value.len() - 1];
    inner.starts_with("length:")
        || ["px", "rem", "em", "%", "vh", "vw", "ch"]
            .iter()
            .any(|unit| inner.ends_with(unit) && inner[..inner.len() - unit.len()].parse::<f64>().is_ok())
}

fn is_number(value: &str) -> bool {
    (!value.is_empty() && value.chars().all(|c| c.is_ascii_digit() || c == '.'))
        || is_arbitrary_length(value)
}

const EXACT: &[(&str, &str)] = &[
    ("block", "display"),
    ("inline-block", "display"),
    ("inline", "display"),
    ("flex", "display"),
    ("inline-flex", "display"),
    ("table", "display"),
    ("grid", "display"),
    ("inline-grid", "display"),
    ("contents", "display"),
    ("flow-root", "display"),
    ("list-item", "display"),
    ("hidden", "display"),
    ("static", "position"),
    ("fixed", "position"),
    ("absolute", "position"),
    ("relative", "position"),
    ("sticky", "position"),
    ("visible", "visibility"),
    ("invisible", "visibility"),
    ("collapse", "visibility"),
    ("underline", "text-decoration"),
    ("overline", "text-decoration"),
    ("line-through", "text-decoration"),
    ("no-underline", "text-decoration"),
    ("uppercase", "text-transform"),
    ("lowercase", "text-transform"),
    ("capitalize", "text-transform"),
    ("normal-case", "text-transform"),
    ("italic", "font-style"),
    ("not-italic", "font-style"),
    ("truncate", "text-overflow"),
    ("sr-only", "sr"),
    ("not-sr-only", "sr"),
];

// Dashed prefixes whose group does not depend on the value. Longer prefixes
// precede shorter ones they share a dash boundary with (`gap-x` before `gap`).
const PREFIXED: &[(&str, &str)] = &[
    ("pointer-events", "pointer-events"),
    ("whitespace", "whitespace"),
    ("cursor", "cursor"),
    ("select", "select"),
    ("items", "align-items"),
    ("justify-items", "justify-items"),
    ("justify-self", "justify-self"),
    ("justify", "justify-content"),
    ("self", "align-self"),
    ("opacity", "opacity"),
    ("z", "z"),
    ("aspect", "aspect"),
    ("gap-x", "gap-x"),
    ("gap-y", "gap-y"),
    ("gap", "gap"),
    ("space-x", "space-x"),
    ("space-y", "space-y"),
    ("min-w", "min-w"),
    ("min-h", "min-h"),
    ("max-w", "max-w"),
    ("max-h", "max-h"),
    ("size", "size"),
    ("w", "w"),
    ("h", "h"),
    ("inset-x", "inset-x"),
    ("inset-y", "inset-y"),
    ("inset", "inset"),
    ("top", "top"),
    ("right", "right"),
    ("bottom", "bottom"),
    ("left", "left"),
    ("translate-x", "translate-x"),
    ("translate-y", "translate-y"),
    ("scale", "scale"),
    ("rotate", "rotate"),
    ("duration", "duration"),
    ("ease", "ease"),
    ("delay", "delay"),
    ("animate", "animate"),
    ("transition", "transition"),
    ("shadow", "shadow"),
    ("leading", "leading"),
    ("tracking", "tracking"),
    ("grid-cols", "grid-cols"),
    ("grid-rows", "grid-rows"),
    ("grid-flow", "grid-flow"),
    ("col-span", "col-span"),
    ("row-span", "row-span"),
    ("overflow-x", "overflow-x"),
    ("overflow-y", "overflow-y"),
    ("overflow", "overflow"),
    ("shrink", "shrink"),
    ("grow", "grow"),
    ("basis", "basis"),
    ("order", "order"),
    ("p", "p"),
    ("px", "px"),
    ("py", "py"),
    ("ps", "ps"),
    ("pe", "pe"),
    ("pt", "pt"),
    ("pr", "pr"),
    ("pb", "pb"),
    ("pl", "pl"),
    ("m", "m"),
    ("mx", "mx"),
    ("my", "my"),
    ("ms", "ms"),
    ("me", "me"),
    ("mt", "mt"),
    ("mr", "mr"),
    ("mb", "mb"),
    ("ml", "ml"),
];

const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];

const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];

/// Classifies a base utility (modifiers and negation already stripped).
fn classify(base: &str) -> Option<&'static str> {
    if let Some((_, group)) = EXACT.iter().find(|(word, _)| *word == base) {
        return Some(*group);
    }

    // Arbitrary properties (`[mask-type:luminance]`) are left ungrouped.
    if is_arbitrary(base) {
        return None;
    }

    if let Some(value) = value_of(base, "text") {
        return Some(classify_text(value));
    }
    if let Some(value) = value_of(base, "bg") {
        return Some(classify_bg(value));
    }
    if let Some(value) = value_of(base, "font") {
        return Some(if FONT_WEIGHTS.contains(&value) {
            "font-weight"
        } else {
            "font-family"
        });
    }
    if let Some(value) = value_of(base, "border") {
        return Some(classify_border(value));
    }
    if let Some(value) = value_of(base, "rounded") {
        return Some(classify_rounded(value));
    }
    if let Some(value) = value_of(base, "ring") {
        return Some(classify_ring(value));
    }
    if let Some(value) = value_of(base, "outline") {
        return Some(classify_outline(value));
    }
    if let Some(value) = base.strip_prefix("flex-") {
        return classify_flex(value);
    }

    PREFIXED
        .iter()
        .find(|(prefix, _)| value_of(base, prefix).is_some_and(|v| !v.is_empty() || is_bare(prefix)))
        .map(|(_, group)| *group)
}

/// Prefixes that are complete utilities on their own (`shadow`, `transition`).
fn is_bare(prefix: &str) -> bool {
    matches!(prefix, "shadow" | "transition" | "shrink" | "grow")
}

fn classify_text(value: &str) -> &'static str {
    match value {
        "left" | "center" | "right" | "justify" | "start" | "end" => "text-align",
        "ellipsis" | "clip" => "text-overflow",
        "wrap" | "nowrap" | "balance" | "pretty" => "text-wrap",
        v if FONT_SIZES.contains(&v) || is_arbitrary_length(v) => "font-size",
        _ => "text-color",
    }
}

fn classify_bg(value: &str) -> &'static str {
    match value {
        "fixed" | "local" | "scroll" => "bg-attachment",
        "auto" | "cover" | "contain" => "bg-size",
        "repeat" | "no-repeat" | "repeat-x" | "repeat-y" | "repeat-round" | "repeat-space" => {
            "bg-repeat"
        }
        v if v == "none" || v.starts_with("gradient") => "bg-image",
        v if v.starts_with("clip-") => "bg-clip",
        _ => "bg-color",
    }
}

fn classify_border(value: &str) -> &'static str {
    match value {
        "solid" | "dashed" | "dotted" | "double" | "none" | "hidden" => return "border-style",
        "collapse" | "separate" => return "border-collapse",
        _ => {}
    }

    let (side, rest) = match value.split_once('-') {
        Some((head, tail)) if is_border_side(head) => (Some(head), tail),
        _ if is_border_side(value) => (Some(value), ""),
        _ => (None, value),
    };

    let is_width = rest.is_empty() || is_number(rest);
    match (side, is_width) {
        (None, true) => "border-w",
        (None, false) => "border-color",
        (Some(side), true) => border_width_group(side),
        (Some(side), false) => border_color_group(side),
    }
}

fn is_border_side(s: &str) -> bool {
    matches!(s, "x" | "y" | "s" | "e" | "t" | "r" | "b" | "l")
}

fn border_width_group(side: &str) -> &'static str {
    match side {
        "x" => "border-w-x",
        "y" => "border-w-y",
        "s" => "border-w-s",
        "e" => "border-w-e",
        "t" => "border-w-t",
        "r" => "border-w-r",
        "b" => "border-w-b",
        _ => "border-w-l",
    }
}

fn border_color_group(side: &str) -> &'static str {
    match side {
        "x" => "border-color-x",
        "y" => "border-color-y",
        "s" => "border-color-s",
        "e" => "border-color-e",
        "t" => "border-color-t",
        "r" => "border-color-r",
        "b" => "border-color-b",
        _ => "border-color-l",
    }
}

fn classify_rounded(value: &str) -> &'static str {
    let head = value.split_once('-').map_or(value, |(head, _)| head);
    match head {
        "s" => "rounded-s",
        "e" => "rounded-e",
        "t" => "rounded-t",
        "r" => "rounded-r",
        "b" => "rounded-b",
        "l" => "rounded-l",
        "ss" => "rounded-ss",
        "se" => "rounded-se",
        "es" => "rounded-es",
        "ee" => "rounded-ee",
        "tl" => "rounded-tl",
        "tr" => "rounded-tr",
        "br" => "rounded-br",
        "bl" => "rounded-bl",
        _ => "rounded",
    }
}

fn classify_ring(value: &str) -> &'static str {
    if value.is_empty() || is_number(value) {
        return "ring-w";
    }
    if value == "inset" {
        return "ring-inset";
    }
    if let Some(offset) = value.strip_prefix("offset-") {
        return if is_number(offset) {
            "ring-offset-w"
        } else {
            "ring-offset-color"
        };
    }
    "ring-color"
}

fn classify_outline(value: &str) -> &'static str {
    match value {
        "" | "none" | "solid" | "dashed" | "dotted" | "double" => "outline-style",
        v if is_number(v) => "outline-w",
        v if v.starts_with("offset-") => "outline-offset",
        _ => "outline-color",
    }
}

fn classify_flex(value: &str) -> Option<&'static str> {
    match value {
        "row" | "row-reverse" | "col" | "col-reverse" => Some("flex-direction"),
        "wrap" | "wrap-reverse" | "nowrap" => Some("flex-wrap"),
        "1" | "auto" | "initial" | "none" => Some("flex"),
        v if is_arbitrary(v) => Some("flex"),
        _ => None,
    }
}

/// Groups a class of `group` overrides when it appears later in the list.
fn conflicts(group: &str) -> &'static [&'static str] {
    match group {
        "p" => &["px", "py", "ps", "pe", "pt", "pr", "pb", "pl"],
        "px" => &["pr", "pl"],
        "py" => &["pt", "pb"],
        "m" => &["mx", "my", "ms", "me", "mt", "mr", "mb", "ml"],
        "mx" => &["mr", "ml"],
        "my" => &["mt", "mb"],
        "inset" => &["inset-x", "inset-y", "top", "right", "bottom", "left"],
        "inset-x" => &["right", "left"],
        "inset-y" => &["top", "bottom"],
        "gap" => &["gap-x", "gap-y"],
        "overflow" => &["overflow-x", "overflow-y"],
        "size" => &["w", "h"],
        "font-size" => &["leading"],
        "rounded" => &[
            "rounded-s",
            "rounded-e",
            "rounded-t",
            "rounded-r",
            "rounded-b",
            "rounded-l",
            "rounded-ss",
            "rounded-se",
            "rounded-es",
            "rounded-ee",
            "rounded-tl",
            "rounded-tr",
            "rounded-br",
            "rounded-bl",
        ],
        "rounded-t" => &["rounded-tl", "rounded-tr"],
        "rounded-r" => &["rounded-tr", "rounded-br"],
        "rounded-b" => &["rounded-br", "rounded-bl"],
        "rounded-l" => &["rounded-tl", "rounded-bl"],
        "border-w" => &[
            "border-w-x",
            "border-w-y",
            "border-w-s",
            "border-w-e",
            "border-w-t",
            "border-w-r",
            "border-w-b",
            "border-w-l",
        ],
        "border-w-x" => &["border-w-r", "border-w-l"],
        "border-w-y" => &["border-w-t", "border-w-b"],
        "border-color" => &[
            "border-color-x",
            "border-color-y",
            "border-color-s",
            "border-color-e",
            "border-color-t",
            "border-color-r",
            "border-color-b",
            "border-color-l",
        ],
        "border-color-x" => &["border-color-r", "border-color-l"],
        "border-color-y" => &["border-color-t", "border-color-b"],
        _ => &[],
    }
}
