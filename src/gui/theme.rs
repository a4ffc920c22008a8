use eframe::egui::{
    self,
    RichText,
};
use egui::{
    epaint::Shadow,
    style::{
        Selection,
        WidgetVisuals,
        Widgets,
    },
    Color32,
    Stroke,
    Visuals,
};

#[derive(Clone)]
pub struct Theme {
    dark: Palette,
    light: Palette,
}

impl Theme {
    pub fn pokedex() -> Self {
        Theme { dark: Palette::pokedex_night(), light: Palette::pokedex_day() }
    }

    fn palette(&self, ctx: &egui::Context) -> &Palette {
        match ctx.theme() {
            egui::Theme::Dark => &self.dark,
            egui::Theme::Light => &self.light,
        }
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.palette(ctx).accent).strong()
    }

    pub fn muted(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.palette(ctx).comment)
    }

    pub fn red(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).red
    }

    pub fn track(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).background_lighter
    }

    /// Bar colour for a stat, stepping from red (weak) to cyan (exceptional).
    pub fn stat_fill(&self, ctx: &egui::Context, percentage: f32) -> Color32 {
        let palette = self.palette(ctx);
        match percentage {
            p if p < 20.0 => palette.red,
            p if p < 35.0 => palette.orange,
            p if p < 50.0 => palette.yellow,
            p if p < 70.0 => palette.green,
            _ => palette.cyan,
        }
    }
}

#[derive(Clone)]
struct Palette {
    background: Color32,
    foreground: Color32,
    selection: Color32,
    comment: Color32,
    accent: Color32,
    red: Color32,
    orange: Color32,
    yellow: Color32,
    green: Color32,
    cyan: Color32,
    background_darker: Color32,
    background_dark: Color32,
    background_light: Color32,
    background_lighter: Color32,
}

impl Palette {
    fn pokedex_night() -> Self {
        Self {
            background: Color32::from_rgb(30, 31, 38),
            foreground: Color32::from_rgb(236, 234, 226),
            selection: Color32::from_rgb(72, 58, 64),
            comment: Color32::from_rgb(140, 140, 158),
            accent: Color32::from_rgb(238, 82, 83),
            red: Color32::from_rgb(235, 87, 87),
            orange: Color32::from_rgb(242, 153, 74),
            yellow: Color32::from_rgb(242, 201, 76),
            green: Color32::from_rgb(111, 207, 151),
            cyan: Color32::from_rgb(86, 204, 242),
            background_darker: Color32::from_rgb(20, 21, 26),
            background_dark: Color32::from_rgb(25, 26, 32),
            background_light: Color32::from_rgb(44, 45, 54),
            background_lighter: Color32::from_rgb(60, 61, 72),
        }
    }

    fn pokedex_day() -> Self {
        Self {
            background: Color32::from_rgb(250, 248, 240),
            foreground: Color32::from_rgb(38, 38, 46),
            selection: Color32::from_rgb(250, 210, 205),
            comment: Color32::from_rgb(120, 120, 136),
            accent: Color32::from_rgb(204, 0, 0),
            red: Color32::from_rgb(214, 69, 65),
            orange: Color32::from_rgb(230, 126, 34),
            yellow: Color32::from_rgb(212, 172, 13),
            green: Color32::from_rgb(39, 174, 96),
            cyan: Color32::from_rgb(41, 128, 185),
            background_darker: Color32::from_rgb(228, 226, 218),
            background_dark: Color32::from_rgb(240, 238, 230),
            background_light: Color32::from_rgb(255, 253, 248),
            background_lighter: Color32::from_rgb(222, 222, 226),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

fn set_theme_variant(ctx: &egui::Context, palette: &Palette, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    let visuals_for = |base: WidgetVisuals, bg_fill: Color32, bg_stroke: Color32| WidgetVisuals {
        bg_fill,
        weak_bg_fill: palette.background_lighter,
        bg_stroke: Stroke { color: bg_stroke, ..base.bg_stroke },
        fg_stroke: Stroke { color: palette.foreground, ..base.fg_stroke },
        ..base
    };

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets: Widgets {
                noninteractive: visuals_for(
                    default.widgets.noninteractive,
                    palette.background,
                    palette.background_dark,
                ),
                inactive: visuals_for(
                    default.widgets.inactive,
                    palette.background_light,
                    palette.background_dark,
                ),
                hovered: visuals_for(default.widgets.hovered, palette.selection, palette.accent),
                active: visuals_for(default.widgets.active, palette.selection, palette.accent),
                open: visuals_for(default.widgets.open, palette.background_dark, palette.accent),
            },
            selection: Selection {
                bg_fill: palette.selection,
                stroke: Stroke { color: palette.foreground, ..default.selection.stroke },
            },
            hyperlink_color: palette.cyan,
            faint_bg_color: match is_dark {
                true => palette.background_darker,
                false => palette.background_light,
            },
            extreme_bg_color: palette.background_darker,
            code_bg_color: palette.background_dark,
            error_fg_color: palette.red,
            warn_fg_color: palette.orange,
            window_shadow: Shadow { color: palette.background_darker, ..default.window_shadow },
            window_fill: palette.background,
            window_stroke: Stroke { color: palette.background_light, ..default.window_stroke },
            panel_fill: palette.background_dark,
            popup_shadow: Shadow { color: palette.background_dark, ..default.popup_shadow },
            ..default
        },
    );
}
