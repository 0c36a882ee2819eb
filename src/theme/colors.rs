use serde::{Deserialize, Serialize};

/// A color palette as HSL channel triples (`"222.2 84% 4.9%"`).
///
/// Values are emitted verbatim into CSS custom properties and consumed as
/// `hsl(var(--primary))` by the stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub background: String,
    pub foreground: String,
    pub card: String,
    pub card_foreground: String,
    pub popover: String,
    pub popover_foreground: String,
    pub primary: String,
    pub primary_foreground: String,
    pub secondary: String,
    pub secondary_foreground: String,
    pub muted: String,
    pub muted_foreground: String,
    pub accent: String,
    pub accent_foreground: String,
    pub destructive: String,
    pub destructive_foreground: String,
    pub border: String,
    pub input: String,
    pub ring: String,
}

impl ThemeColors {
    /// Builds a palette from nineteen values in field order.
    fn from_values(values: [&str; 19]) -> Self {
        let [background, foreground, card, card_foreground, popover, popover_foreground, primary, primary_foreground, secondary, secondary_foreground, muted, muted_foreground, accent, accent_foreground, destructive, destructive_foreground, border, input, ring] =
            values.map(str::to_string);
        Self {
            background,
            foreground,
            card,
            card_foreground,
            popover,
            popover_foreground,
            primary,
            primary_foreground,
            secondary,
            secondary_foreground,
            muted,
            muted_foreground,
            accent,
            accent_foreground,
            destructive,
            destructive_foreground,
            border,
            input,
            ring,
        }
    }

    /// The default light palette.
    pub fn light() -> Self {
        Self::from_values([
            "0 0% 100%",
            "222.2 84% 4.9%",
            "0 0% 100%",
            "222.2 84% 4.9%",
            "0 0% 100%",
            "222.2 84% 4.9%",
            "222.2 47.4% 11.2%",
            "210 40% 98%",
            "210 40% 96.1%",
            "222.2 47.4% 11.2%",
            "210 40% 96.1%",
            "215.4 16.3% 46.9%",
            "210 40% 96.1%",
            "222.2 47.4% 11.2%",
            "0 84.2% 60.2%",
            "210 40% 98%",
            "214.3 31.8% 91.4%",
            "214.3 31.8% 91.4%",
            "222.2 84% 4.9%",
        ])
    }

    /// The default dark palette.
    pub fn dark() -> Self {
        Self::from_values([
            "222.2 84% 4.9%",
            "210 40% 98%",
            "222.2 84% 4.9%",
            "210 40% 98%",
            "222.2 84% 4.9%",
            "210 40% 98%",
            "210 40% 98%",
            "222.2 47.4% 11.2%",
            "217.2 32.6% 17.5%",
            "210 40% 98%",
            "217.2 32.6% 17.5%",
            "215 20.2% 65.1%",
            "217.2 32.6% 17.5%",
            "210 40% 98%",
            "0 62.8% 30.6%",
            "210 40% 98%",
            "217.2 32.6% 17.5%",
            "217.2 32.6% 17.5%",
            "212.7 26.8% 83.9%",
        ])
    }

    /// Returns `(field name, value)` pairs in declaration order.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("background", &self.background),
            ("foreground", &self.foreground),
            ("card", &self.card),
            ("card_foreground", &self.card_foreground),
            ("popover", &self.popover),
            ("popover_foreground", &self.popover_foreground),
            ("primary", &self.primary),
            ("primary_foreground", &self.primary_foreground),
            ("secondary", &self.secondary),
            ("secondary_foreground", &self.secondary_foreground),
            ("muted", &self.muted),
            ("muted_foreground", &self.muted_foreground),
            ("accent", &self.accent),
            ("accent_foreground", &self.accent_foreground),
            ("destructive", &self.destructive),
            ("destructive_foreground", &self.destructive_foreground),
            ("border", &self.border),
            ("input", &self.input),
            ("ring", &self.ring),
        ]
    }
}
