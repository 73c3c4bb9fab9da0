//! # Wallet Menu Widget
//!
//! Connect / disconnect controls in the header.

use crate::app::state::{AppState, WalletProvider};
use crate::app::App;
use crate::ui::theme::Theme;
use egui;
use shared::utils::format_address;

pub fn render_wallet_menu(ui: &mut egui::Ui, state: &AppState, app: &App) {
    let theme = Theme::default();

    if state.wallet_connecting {
        ui.spinner();
        ui.colored_label(theme.colors.dim, "Connecting...");
        return;
    }

    match state.wallet.as_ref() {
        Some(wallet) => {
            let label = format!(
                "{} {}",
                wallet.provider.icon(),
                format_address(&wallet.address, 6, 4)
            );
            ui.menu_button(label, |ui| {
                if wallet.balances.is_empty() {
                    ui.colored_label(theme.colors.dim, "Loading balances...");
                } else {
                    let mut symbols: Vec<&String> = wallet.balances.keys().collect();
                    symbols.sort();
                    for symbol in symbols {
                        let entry = &wallet.balances[symbol];
                        ui.label(format!(
                            "{}  {}  (${})",
                            symbol, entry.balance, entry.usd_value
                        ));
                    }
                }
                ui.separator();
                if ui.button("Disconnect").clicked() {
                    app.disconnect_wallet();
                    ui.close();
                }
            });
        }
        None => {
            ui.menu_button("Connect Wallet", |ui| {
                for provider in WalletProvider::all() {
                    if ui
                        .button(format!("{} {}", provider.icon(), provider.title()))
                        .clicked()
                    {
                        app.connect_wallet(*provider);
                        ui.close();
                    }
                }
            });
        }
    }
}
