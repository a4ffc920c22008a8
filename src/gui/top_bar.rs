use eframe::egui::{
    self,
    containers,
};

pub enum TopBarAction {
    Navigate(String),
    ToggleDarkMode(bool),
}

pub struct TopBar {
    search: String,
}

impl TopBar {
    pub fn new() -> Self {
        Self { search: String::new() }
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<TopBarAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                let was_dark = ctx.theme() == egui::Theme::Dark;
                egui::widgets::global_theme_preference_switch(ui);
                let is_dark = ctx.theme() == egui::Theme::Dark;
                if was_dark != is_dark {
                    action = Some(TopBarAction::ToggleDarkMode(is_dark));
                }

                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let go = ui.button("Go").clicked();
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut self.search)
                            .hint_text("Name or number")
                            .desired_width(160.0),
                    );
                    let submitted =
                        response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                    if (go || submitted) && !self.search.trim().is_empty() {
                        action = Some(TopBarAction::Navigate(self.search.trim().to_string()));
                        self.search.clear();
                    }
                });
            });
        });

        action
    }
}
