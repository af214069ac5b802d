//! Entry point for the folio portfolio viewer.
//!
//! A Dioxus desktop application rendering a personal portfolio: hero,
//! filterable project gallery, about/contact, and a detail overlay.
//! The catalog and styles are embedded at compile time; edit
//! `assets/catalog.json` to change the portfolio content.

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

use folio_core::Catalog;
use folio_viewer::components::App;
use folio_viewer::theme::{self, Theme};

/// CSS styles embedded at compile time.
const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Project catalog embedded at compile time.
const CATALOG_JSON: &str = include_str!("../assets/catalog.json");

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "folio-viewer")]
#[command(about = "Personal portfolio viewer")]
struct Args {
    /// Force the initial theme ("light" or "dark") instead of reading
    /// the environment preference
    #[arg(short, long)]
    theme: Option<String>,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    let args = Args::parse();

    if let Some(name) = args.theme.as_deref() {
        match Theme::from_name(name) {
            Some(forced) => theme::set_override(forced),
            None => tracing::warn!("unknown theme {name:?}, expected \"light\" or \"dark\""),
        }
    }

    // The catalog is trusted build-time data; a parse failure or duplicate
    // id is a packaging mistake and fatal.
    let catalog = match Catalog::from_json(CATALOG_JSON) {
        Ok(catalog) => catalog,
        Err(err) => {
            tracing::error!("embedded catalog is invalid: {err}");
            std::process::exit(1);
        }
    };

    tracing::info!("loaded catalog with {} projects", catalog.len());
    folio_viewer::set_catalog(catalog);

    // Launch the Dioxus desktop app
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("Noah \u{2013} Portfolio")
                        .with_inner_size(LogicalSize::new(1200, 860)),
                )
                .with_custom_head(format!(
                    r#"
                    <link rel="preconnect" href="https://fonts.googleapis.com">
                    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
                    <link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;800&display=swap" rel="stylesheet">
                    <style>{}</style>
                    "#,
                    STYLES_CSS
                )),
        )
        .launch(App);
}
