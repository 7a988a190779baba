use liquidglass::{config, App};

fn main() {
    wasm_logger::init(wasm_logger::Config::new(config::get_log_level()));
    log::info!("Mounting LiquidGlass landing page");
    yew::Renderer::<App>::new().render();
}
