pub mod errors;
pub mod fetch;
pub mod http;
pub mod models;
pub mod navigation;
pub mod session;
pub mod settings;
pub mod stats;
pub mod tasks;

pub use errors::{
    FetchError,
    PokedetailError,
};
pub use fetch::{
    Activation,
    FetchController,
    ViewState,
};
pub use http::{
    PokeApiClient,
    PokemonSource,
};
pub use models::{
    PokemonRecord,
    StatEntry,
};
pub use navigation::Navigator;
pub use session::DetailSession;
pub use settings::{
    SettingsData,
    SettingsOverrides,
};
