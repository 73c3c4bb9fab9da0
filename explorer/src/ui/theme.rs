//! # GUI Theme
//!
//! Dark theme for the explorer. High contrast, sharp edges, a single blue
//! accent instead of the usual swap-app gradient noise.

use egui::Theme as EguiTheme;
use egui::{Color32, Context, Stroke, Visuals};

/// Explorer color palette
#[derive(Clone)]
pub struct Palette {
    pub background: Color32,
    pub panel: Color32,
    pub text: Color32,
    /// Accent blue for interactive elements
    pub accent: Color32,
    pub border: Color32,
    pub success: Color32,
    pub error: Color32,
    pub warning: Color32,
    /// Medium gray for secondary text
    pub dim: Color32,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            background: Color32::from_rgb(10, 10, 14),
            panel: Color32::from_rgb(20, 20, 26),
            text: Color32::from_rgb(240, 240, 245),
            accent: Color32::from_rgb(80, 140, 255),
            border: Color32::from_rgb(48, 48, 58),
            success: Color32::from_rgb(60, 200, 120),
            error: Color32::from_rgb(235, 70, 70),
            warning: Color32::from_rgb(255, 170, 0),
            dim: Color32::from_rgb(140, 140, 150),
        }
    }
}

/// Application theme
pub struct Theme {
    pub colors: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            colors: Palette::default(),
        }
    }
}

impl Theme {
    /// Build egui `Visuals` from the palette.
    pub fn visuals() -> Visuals {
        let colors = Palette::default();
        let mut visuals = Visuals::dark();

        visuals.override_text_color = Some(colors.text);
        visuals.panel_fill = colors.background;
        visuals.window_fill = colors.panel;
        visuals.window_stroke = Stroke::new(1.0, colors.border);
        visuals.faint_bg_color = colors.panel;
        visuals.extreme_bg_color = Color32::from_rgb(14, 14, 18);

        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, colors.border);
        visuals.widgets.inactive.bg_fill = colors.panel;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, colors.border);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.5, colors.accent);
        visuals.widgets.active.bg_stroke = Stroke::new(1.5, colors.accent);

        visuals.selection.bg_fill = Color32::from_rgba_unmultiplied(80, 140, 255, 60);
        visuals.selection.stroke = Stroke::new(1.5, colors.accent);
        visuals.hyperlink_color = colors.accent;

        visuals
    }

    /// Apply the theme to an egui context.
    ///
    /// Uses `style_mut_of` rather than `set_visuals`, which is the safe way
    /// to modify styles in egui 0.33.
    pub fn apply(ctx: &Context) {
        let visuals = Self::visuals();
        ctx.style_mut_of(EguiTheme::Dark, |style| {
            style.visuals = visuals.clone();
            style.spacing.item_spacing = egui::Vec2::new(8.0, 6.0);
            style.spacing.button_padding = egui::Vec2::new(10.0, 6.0);
            style.spacing.window_margin = egui::Margin::same(12);
        });
    }
}
