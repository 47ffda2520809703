use exercise_quiz::QuizApp;
use exercise_quiz::config::QuizConfig;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    init_logging();

    let config = QuizConfig::from_env();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Ejercicios")
            .with_inner_size([720.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Ejercicios",
        options,
        Box::new(|cc| Ok(Box::new(QuizApp::new(cc, config)))),
    )
}

/// `info` por defecto; `RUST_LOG` lo sobreescribe
#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(log::LevelFilter::Info);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use wasm_bindgen::JsCast;

    if let Err(e) = eframe::WebLogger::init(log::LevelFilter::Debug) {
        web_sys::console::warn_1(&format!("Logger ya inicializado: {e}").into());
    }

    wasm_bindgen_futures::spawn_local(async {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No existe window/document");
            return;
        };
        let Some(canvas) = document
            .get_element_by_id("quiz_canvas")
            .and_then(|el| el.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            log::error!("No se encontró el canvas #quiz_canvas");
            return;
        };

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|cc| Ok(Box::new(QuizApp::new(cc, QuizConfig::from_env())))),
            )
            .await;

        if let Err(e) = start_result {
            log::error!("No se pudo arrancar la app: {e:?}");
        }
    });
}
