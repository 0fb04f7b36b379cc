mod app;
mod components;
mod format;
mod pages;

use app::App;
use becas_frontend_common::logging::init_logging;
use tracing::level_filters::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();
    init_logging(if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    });
    yew::Renderer::<App>::new().render();
}
