use std::rc::Rc;

use log::{error, info};

mod config;
mod content;
mod hooks;
mod interaction;
mod reveal;
mod style;
mod pages {
    pub mod portfolio;
}
mod components {
    pub mod education;
    pub mod experience;
    pub mod footer;
    pub mod heading;
    pub mod hero;
    pub mod nav;
    pub mod projects;
    pub mod skills;
}

use content::Content;
use pages::portfolio::{ContentUnavailable, Portfolio, PortfolioProps};

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting portfolio");
    match Content::embedded() {
        Ok(content) => {
            info!(
                "Loaded content: {} projects, {} experience entries",
                content.projects.len(),
                content.experience.len()
            );
            yew::Renderer::<Portfolio>::with_props(PortfolioProps {
                content: Rc::new(content),
            })
            .render();
        }
        Err(err) => {
            error!("Could not load page content: {}", err);
            yew::Renderer::<ContentUnavailable>::new().render();
        }
    }
}
