use eframe::egui::{
    self,
    Sense,
    Vec2,
};

use crate::{
    core::stats::StatBar,
    gui::theme::Theme,
};

const LABEL_WIDTH: f32 = 48.0;
const VALUE_WIDTH: f32 = 36.0;
const BAR_HEIGHT: f32 = 10.0;

/// One stat row: label, separator, value and a proportional bar. The fill is
/// painted at its unclamped width, so values above the ceiling run past the
/// end of the track.
pub fn stat_bar_row(ui: &mut egui::Ui, theme: &Theme, bar: &StatBar<'_>) {
    ui.horizontal(|ui| {
        ui.add_sized([LABEL_WIDTH, BAR_HEIGHT], egui::Label::new(egui::RichText::new(bar.label).strong()));
        ui.separator();
        ui.add_sized([VALUE_WIDTH, BAR_HEIGHT], egui::Label::new(bar.value.to_string()));

        let track_width = ui.available_width().max(LABEL_WIDTH);
        let (track, _) = ui.allocate_exact_size(Vec2::new(track_width, BAR_HEIGHT), Sense::hover());
        let rounding = BAR_HEIGHT / 2.0;

        let painter = ui.painter();
        painter.rect_filled(track, rounding, theme.track(ui.ctx()));

        let mut fill = track;
        fill.set_width(track.width() * bar.fill_fraction() as f32);
        painter.rect_filled(fill, rounding, theme.stat_fill(ui.ctx(), bar.percentage as f32));
    });
}
