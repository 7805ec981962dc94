mod app;
mod convert;
mod panels;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 900.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Cellscan"),
        ..Default::default()
    };

    eframe::run_native(
        "Cellscan",
        options,
        Box::new(|_cc| Ok(Box::new(app::CellscanApp::new()))),
    )
}
