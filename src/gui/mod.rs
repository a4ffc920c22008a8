pub mod app;
pub mod detail_view;
pub mod stat_bar;
pub mod theme;
pub mod top_bar;

pub use app::PokedetailApp;
