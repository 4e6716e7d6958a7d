use egui::{Align2, FontId, RichText, Sense};

use super::CountdownApp;
use crate::ui_egui::theme::CountdownTheme;
use crate::ui_egui::view::{UnitCell, ViewModel};

const CONTENT_MAX_WIDTH: f32 = 384.0;
const CONTENT_HEIGHT: f32 = 330.0;
const LOGO_SIZE: f32 = 48.0;
const CELL_ROUNDING: f32 = 8.0;
const SECTION_SPACING: f32 = 32.0;

impl CountdownApp {
    pub(super) fn render_countdown(&self, ctx: &egui::Context) {
        let theme = &self.active_theme;
        let view = &self.view;

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(theme.app_background))
            .show(ctx, |ui| {
                let top = ((ui.available_height() - CONTENT_HEIGHT) / 2.0).max(16.0);
                ui.vertical_centered(|ui| {
                    ui.set_max_width(CONTENT_MAX_WIDTH.min(ui.available_width() - 16.0));
                    ui.add_space(top);

                    draw_logo(ui, theme);
                    ui.add_space(SECTION_SPACING);

                    ui.columns(view.cells.len(), |columns| {
                        for (column, cell) in columns.iter_mut().zip(view.cells.iter()) {
                            draw_cell(column, cell, theme);
                        }
                    });
                    ui.add_space(SECTION_SPACING);

                    draw_captions(ui, view, theme);
                    ui.add_space(SECTION_SPACING);

                    ui.label(
                        RichText::new(view.status)
                            .size(14.0)
                            .strong()
                            .color(theme.accent),
                    );
                });
            });
    }
}

fn draw_logo(ui: &mut egui::Ui, theme: &CountdownTheme) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(LOGO_SIZE, LOGO_SIZE), Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(rect, 6.0, theme.accent);
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        "Y",
        FontId::proportional(LOGO_SIZE * 0.6),
        egui::Color32::WHITE,
    );
}

fn draw_cell(ui: &mut egui::Ui, cell: &UnitCell, theme: &CountdownTheme) {
    egui::Frame::none()
        .fill(theme.cell_background)
        .rounding(CELL_ROUNDING)
        .inner_margin(egui::Margin::same(12.0))
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(cell.value.to_string())
                        .monospace()
                        .size(24.0)
                        .strong()
                        .color(theme.accent),
                );
                ui.label(
                    RichText::new(cell.label.to_uppercase())
                        .monospace()
                        .size(10.0)
                        .color(theme.text_secondary),
                );
            });
        });
}

fn draw_captions(ui: &mut egui::Ui, view: &ViewModel, theme: &CountdownTheme) {
    ui.label(
        RichText::new(&view.target_caption)
            .size(14.0)
            .color(theme.text_secondary),
    );
    ui.add_space(4.0);
    ui.label(
        RichText::new(&view.timezone_caption)
            .size(12.0)
            .color(theme.text_secondary),
    );
    ui.label(
        RichText::new(&view.reference_caption)
            .size(12.0)
            .color(theme.text_secondary),
    );
}
