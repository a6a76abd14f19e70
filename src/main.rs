#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use leytext_learn::LearnApp;
    use leytext_learn::config::APP_NAME;

    // Optional .env with API keys
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Could not read .env: {e}");
        }
    }
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([480.0, 420.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_NAME,
        options,
        Box::new(|cc| Ok(Box::new(LearnApp::new(cc)))),
    )
}

// The web build starts from the `wasm_bindgen(start)` entry in the library.
#[cfg(target_arch = "wasm32")]
fn main() {}
