pub mod app;
pub mod config;
pub mod context;
pub mod data;
pub mod flashcards;
pub mod gateway;
pub mod history;
pub mod learning_path;
pub mod model;
pub mod monolingual;
pub mod preferences;
pub mod quiz;
pub mod repository;
pub mod store;
pub mod text_utils;
pub mod ui;
pub mod view_models;

pub use app::LearnApp;
pub use context::LearningContext;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::LearnApp;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;

    const CANVAS_ID: &str = "the_canvas_id";

    #[wasm_bindgen(start)]
    pub fn start() {
        wasm_logger::init(wasm_logger::Config::default());

        wasm_bindgen_futures::spawn_local(async {
            let Some(canvas) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(CANVAS_ID))
                .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok())
            else {
                log::error!("Canvas #{CANVAS_ID} not found");
                return;
            };

            let started = eframe::WebRunner::new()
                .start(
                    canvas,
                    eframe::WebOptions::default(),
                    Box::new(|cc| Ok(Box::new(LearnApp::new(cc)))),
                )
                .await;
            if let Err(e) = started {
                log::error!("Failed to start app: {e:?}");
            }
        });
    }
}
