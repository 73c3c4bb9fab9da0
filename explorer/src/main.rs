//! # Token Explorer - Desktop Entry Point

use explorer::app::App;
use explorer::services::api::ApiClient;
use explorer::ui;
use explorer::ui::theme::Theme;
use explorer::utils::runtime::TOKIO_RT;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

struct ExplorerApp {
    app: App,
    toasts: egui_notify::Toasts,
}

impl eframe::App for ExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.on_tick();
        ui::render(ctx, &mut self.app, &mut self.toasts);
        // Background prices change without input events; keep frames coming.
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}

fn init_tracing() -> tracing_appender::non_blocking::WorkerGuard {
    let file_appender = tracing_appender::rolling::daily("logs", "explorer.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("explorer=debug,info")),
        )
        .with_writer(std::io::stdout.and(file_writer))
        .with_ansi(false)
        .init();
    guard
}

fn main() -> eframe::Result {
    dotenvy::dotenv().ok();
    let _log_guard = init_tracing();

    // Hold a runtime context on the UI thread so handlers can tokio::spawn.
    let _rt_guard = TOKIO_RT.enter();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([840.0, 560.0])
            .with_min_inner_size([680.0, 480.0])
            .with_title("Token Explorer"),
        ..Default::default()
    };

    tracing::info!("Starting token explorer");
    eframe::run_native(
        "Token Explorer",
        options,
        Box::new(|cc| {
            Theme::apply(&cc.egui_ctx);
            let mut app = App::new(Arc::new(ApiClient::new()));
            app.start();
            Ok(Box::new(ExplorerApp {
                app,
                toasts: egui_notify::Toasts::default(),
            }))
        }),
    )
}
