use std::sync::Arc;

use eframe::egui;
use tracing::{
    debug,
    warn,
};

use super::{
    detail_view::{
        show_view_state,
        DetailAction,
    },
    theme::{
        set_theme,
        Theme,
    },
    top_bar::{
        TopBar,
        TopBarAction,
    },
};
use crate::{
    core::{
        settings::SETTINGS_FILE,
        tasks::TaskManager,
        DetailSession,
        PokedetailError,
        PokemonSource,
        SettingsData,
    },
    persistence::save_json,
};

pub struct PokedetailApp {
    // Configuration
    pub settings_data: SettingsData,

    // UI State
    pub theme: Theme,
    top_bar: TopBar,

    // Detail page
    session: DetailSession,
    task_manager: TaskManager,
}

impl PokedetailApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings_data: SettingsData,
        initial_identifier: Option<String>,
        source: Arc<dyn PokemonSource>,
    ) -> Result<Self, PokedetailError> {
        let mut task_manager = TaskManager::new(source)?;

        let repaint_ctx = cc.egui_ctx.clone();
        task_manager.set_repaint_callback(move || repaint_ctx.request_repaint());

        let app = Self {
            settings_data,
            theme: Theme::pokedex(),
            top_bar: TopBar::new(),
            session: DetailSession::new(initial_identifier),
            task_manager,
        };

        egui_extras::install_image_loaders(&cc.egui_ctx);
        app.setup_theme(cc);

        Ok(app)
    }

    fn setup_theme(&self, cc: &eframe::CreationContext<'_>) {
        cc.egui_ctx.set_zoom_factor(self.settings_data.zoom);
        set_theme(&cc.egui_ctx, &self.theme);

        cc.egui_ctx.options_mut(|o| {
            o.theme_preference = if self.settings_data.dark_mode {
                egui::ThemePreference::Dark
            } else {
                egui::ThemePreference::Light
            };
        });
    }

    fn handle_top_bar_action(&mut self, action: TopBarAction) {
        match action {
            TopBarAction::Navigate(identifier) => {
                if self.session.navigate(&identifier) {
                    debug!(%identifier, "Navigated");
                }
            }
            TopBarAction::ToggleDarkMode(dark_mode) => {
                self.settings_data.dark_mode = dark_mode;
                self.save_settings();
            }
        }
    }

    fn save_settings(&self) {
        if let Err(e) = save_json(&self.settings_data, SETTINGS_FILE) {
            warn!("Failed to save settings: {}", e);
        }
    }

    fn window_title(&self) -> String {
        match self.session.current_identifier() {
            Some(identifier) => format!("Pokédex - {}", identifier),
            None => "Pokédex".to_string(),
        }
    }
}

impl eframe::App for PokedetailApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.session.apply(result);
        }

        if let Some(action) = self.top_bar.show(ctx) {
            self.handle_top_bar_action(action);
        }

        if let Some(activation) = self.session.sync() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(self.window_title()));
            self.task_manager.fetch_pokemon(activation);
        }

        let mut detail_action = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            detail_action =
                show_view_state(ui, &self.theme, self.session.state(), self.session.can_go_back());
        });

        if let Some(DetailAction::GoBack) = detail_action {
            self.session.go_back();
            ctx.request_repaint();
        }
    }
}
