use crate::core::{
    FetchError,
    PokemonRecord,
};

#[derive(Debug, Clone)]
pub enum TaskResult {
    PokemonFetched {
        generation: u64,
        identifier: String,
        result: Result<PokemonRecord, FetchError>,
    },
}

impl TaskResult {
    pub fn task_type(&self) -> &'static str {
        match self {
            TaskResult::PokemonFetched { .. } => "pokemon_fetched",
        }
    }
}
