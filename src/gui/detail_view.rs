use eframe::egui;

use crate::{
    core::{
        stats::render_stat_bar,
        PokemonRecord,
        ViewState,
    },
    gui::{
        stat_bar::stat_bar_row,
        theme::Theme,
    },
};

const IMAGE_SIZE: f32 = 220.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailAction {
    GoBack,
}

/// Draws whichever of the three views matches the state.
pub fn show_view_state(
    ui: &mut egui::Ui,
    theme: &Theme,
    state: &ViewState,
    can_go_back: bool,
) -> Option<DetailAction> {
    match state {
        ViewState::Loading => {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.add(egui::Spinner::new());
                ui.label("Loading...");
            });
            None
        }
        ViewState::Error(message) => {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.label(
                    egui::RichText::new(format!("Error: {}", message)).color(theme.red(ui.ctx())),
                );
            });
            None
        }
        ViewState::Ready(record) => show_detail(ui, theme, record, can_go_back),
    }
}

fn show_detail(
    ui: &mut egui::Ui,
    theme: &Theme,
    record: &PokemonRecord,
    can_go_back: bool,
) -> Option<DetailAction> {
    let mut action = None;

    egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(theme.heading(ui.ctx(), &record.display_name()).size(28.0));
            ui.add_space(8.0);

            match record.best_image_url() {
                Some(url) => {
                    ui.add(
                        egui::Image::new(url)
                            .max_size(egui::Vec2::splat(IMAGE_SIZE))
                            .show_loading_spinner(true),
                    )
                    .on_hover_text(&record.name);
                }
                None => {
                    ui.label(theme.muted(ui.ctx(), &format!("No artwork for {}", record.name)));
                }
            }
        });

        ui.add_space(12.0);

        egui::Grid::new("pokemon_info").num_columns(2).spacing([12.0, 6.0]).show(ui, |ui| {
            ui.label("📏");
            ui.label(format!("{} decimeters", record.height));
            ui.end_row();

            ui.label("⚖");
            ui.label(format!("{} hectograms", record.weight));
            ui.end_row();

            ui.label("⭐");
            match record.base_experience {
                Some(experience) => ui.label(format!("{} base experience", experience)),
                None => ui.label(theme.muted(ui.ctx(), "Unknown base experience")),
            };
            ui.end_row();
        });

        ui.add_space(12.0);
        ui.label(theme.heading(ui.ctx(), "Abilities").size(20.0));
        for ability in &record.abilities {
            ui.label(format!("• {}", ability));
        }

        ui.add_space(12.0);
        ui.label(theme.heading(ui.ctx(), "Base Stats").size(20.0));
        for stat in &record.stats {
            stat_bar_row(ui, theme, &render_stat_bar(&stat.name, stat.base_stat));
        }

        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            if ui.add_enabled(can_go_back, egui::Button::new("Go Back")).clicked() {
                action = Some(DetailAction::GoBack);
            }
        });
    });

    action
}
