use minijinja::{context, Environment};

use super::colors::ThemeColors;
use crate::error::UiError;

const THEME_TEMPLATE: &str = r#":root {
{%- for name, value in light %}
  --{{ name | replace("_", "-") }}: {{ value }};
{%- endfor %}
}

.dark {
{%- for name, value in dark %}
  --{{ name | replace("_", "-") }}: {{ value }};
{%- endfor %}
}
"#;

/// Renders the custom-property stylesheet for a light and a dark palette.
///
/// Light values go in a `:root` block and dark values in a `.dark` block.
/// Field names become property names with underscores turned into dashes
/// (`card_foreground` becomes `--card-foreground`).
///
/// # Example
///
/// ```rust
/// use soave_ui::theme::{generate_theme_css, ThemeColors};
///
/// let css = generate_theme_css(&ThemeColors::light(), &ThemeColors::dark()).unwrap();
/// assert!(css.starts_with(":root {\n  --background: 0 0% 100%;"));
/// assert!(css.contains("\n}\n\n.dark {\n"));
/// ```
pub fn generate_theme_css(light: &ThemeColors, dark: &ThemeColors) -> Result<String, UiError> {
    let mut env = Environment::new();
    env.add_template("theme.css", THEME_TEMPLATE)?;
    let template = env.get_template("theme.css")?;
    let css = template.render(context! {
        light => light.entries(),
        dark => dark.entries(),
    })?;
    Ok(css)
}
