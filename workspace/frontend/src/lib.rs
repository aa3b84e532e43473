use yew::prelude::*;

mod components;
pub mod settings;

use components::dashboard::Dashboard;

#[function_component(App)]
pub fn app() -> Html {
    html! { <Dashboard /> }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== SuperApp Dashboard Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("Debug mode: {}", settings.debug_mode);
    log::debug!("Chart toolbar: {}", settings.chart_toolbar);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Dashboard mounted");
}
