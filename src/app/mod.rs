mod messages;
mod state;
mod update;
mod view;

pub use state::{App, EpisodeId};

use crate::catalog::Catalog;
use crate::config::AppConfig;
use iced::{Size, Theme, window};

/// Helper to launch the app with the pre-loaded catalog and ledger.
pub fn run_app(
    catalog: Catalog,
    config: AppConfig,
    saved_ids: Vec<EpisodeId>,
) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        ..window::Settings::default()
    };

    iced::application("Podcast Roulette", App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|_app: &App| Theme::Dark)
        .run_with(move || App::bootstrap(catalog, config, saved_ids))
}
