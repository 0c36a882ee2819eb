//! Command line access to the style adapters and theme stylesheet.
//!
//! ```text
//! soave classes tailwind button --state '{"kind":"button","variant":"ghost","size":"sm","disabled":false,"loading":false}'
//! soave adapters
//! soave theme-css
//! ```

use anyhow::{bail, Context, Result};
use clap::{Arg, ArgMatches, Command};
use soave_ui::component::Component;
use soave_ui::theme::{generate_theme_css, ThemeColors};
use soave_ui::{AdapterRegistry, ComponentState};

fn command() -> Command {
    Command::new("soave")
        .about("Resolve component classes and generate theme stylesheets")
        .subcommand_required(true)
        .subcommand(
            Command::new("classes")
                .about("Print the class string an adapter produces for a component")
                .arg(Arg::new("adapter").required(true).help("Adapter name"))
                .arg(Arg::new("component").required(true).help("Component tag, e.g. dialog-overlay"))
                .arg(
                    Arg::new("state")
                        .long("state")
                        .value_name("JSON")
                        .help("Component state as JSON, tagged by \"kind\""),
                ),
        )
        .subcommand(Command::new("adapters").about("List registered adapters"))
        .subcommand(Command::new("components").about("List component tags"))
        .subcommand(Command::new("theme-css").about("Print the default light and dark theme variables"))
}

fn classes(registry: &AdapterRegistry, matches: &ArgMatches) -> Result<String> {
    let adapter_name = matches
        .get_one::<String>("adapter")
        .context("missing adapter name")?;
    let component = matches
        .get_one::<String>("component")
        .context("missing component tag")?;

    if Component::from_tag(component).is_none() {
        bail!("unknown component tag '{}'", component);
    }
    let state: ComponentState = match matches.get_one::<String>("state") {
        Some(json) => serde_json::from_str(json).context("invalid --state JSON")?,
        None => ComponentState::default(),
    };
    let adapter = registry.get(adapter_name)?;
    Ok(adapter.classes(component, &state))
}

fn main() -> Result<()> {
    let matches = command().get_matches();
    let registry = AdapterRegistry::with_builtins();

    match matches.subcommand() {
        Some(("classes", sub)) => println!("{}", classes(&registry, sub)?),
        Some(("adapters", _)) => {
            for adapter in registry.adapters() {
                match adapter.description() {
                    Some(description) => println!("{}\t{}", adapter.name(), description),
                    None => println!("{}", adapter.name()),
                }
            }
        }
        Some(("components", _)) => {
            for component in Component::ALL {
                println!("{}", component.as_str());
            }
        }
        Some(("theme-css", _)) => {
            println!("{}", generate_theme_css(&ThemeColors::light(), &ThemeColors::dark())?);
        }
        _ => command().print_help()?,
    }
    Ok(())
}
