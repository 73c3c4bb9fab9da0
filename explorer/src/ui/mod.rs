//! # GUI Rendering
//!
//! Frame pipeline: clone a state snapshot, render without holding the lock,
//! route interactions back through the `App` handlers, then flush queued
//! toasts.

pub mod screens;
pub mod theme;
pub mod widgets;

use crate::app::App;
use egui;

/// Main render function, called every frame.
pub fn render(ctx: &egui::Context, app: &mut App, toasts: &mut egui_notify::Toasts) {
    // Snapshot state for rendering; skip the frame if a task holds the lock.
    let state = match app.state().try_read() {
        Some(guard) => guard.clone(),
        None => return,
    };

    egui::CentralPanel::default().show(ctx, |ui| {
        screens::explorer::render(ui, &state, app);
    });

    if state.explorer.selection.is_open() {
        widgets::token_picker::render_token_picker(ctx, &state, app);
    }

    flush_notifications(ctx, app, toasts);
}

/// Move queued notifications into the toast stack and repaint if a
/// background task asked for it.
fn flush_notifications(ctx: &egui::Context, app: &App, toasts: &mut egui_notify::Toasts) {
    let (pending, repaint) = {
        let mut guard = app.state().write();
        let repaint = std::mem::take(&mut guard.needs_repaint);
        (std::mem::take(&mut guard.pending_notifications), repaint)
    };

    for (level, message) in pending {
        match level.as_str() {
            "success" => toasts.success(message),
            "warning" => toasts.warning(message),
            "error" => toasts.error(message),
            _ => toasts.info(message),
        };
    }
    toasts.show(ctx);

    if repaint {
        ctx.request_repaint();
    }
}
