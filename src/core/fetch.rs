use tracing::{
    debug,
    info,
    warn,
};

use super::{
    FetchError,
    PokemonRecord,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Loading,
    Error(String),
    Ready(PokemonRecord),
}

/// The single request an activation wants issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    pub generation: u64,
    pub identifier: String,
}

/// Drives the loading -> error | ready lifecycle of the detail view.
///
/// Each activation bumps a generation counter. Results tagged with an older
/// generation are dropped, so a slow response for a previous identifier can
/// never overwrite the one currently requested.
#[derive(Debug, Default)]
pub struct FetchController {
    state: ViewState,
    generation: u64,
    identifier: Option<String>,
}

impl FetchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading)
    }

    pub fn current_identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    /// Starts a new activation. Without an identifier nothing is requested and
    /// the view stays in `Loading`.
    pub fn activate(&mut self, identifier: Option<&str>) -> Option<Activation> {
        self.generation += 1;
        self.state = ViewState::Loading;

        let identifier = identifier.filter(|id| !id.is_empty());
        self.identifier = identifier.map(str::to_string);

        let Some(identifier) = identifier else {
            debug!("No identifier, staying in loading state");
            return None;
        };

        info!(generation = self.generation, identifier, "Fetching Pokémon details");
        Some(Activation { generation: self.generation, identifier: identifier.to_string() })
    }

    /// Applies a fetch result. Returns false when the result belongs to a
    /// superseded activation and was discarded.
    pub fn complete(
        &mut self,
        generation: u64,
        result: Result<PokemonRecord, FetchError>,
    ) -> bool {
        if generation != self.generation {
            debug!(generation, current = self.generation, "Discarding stale fetch result");
            return false;
        }

        self.state = match result {
            Ok(record) => {
                info!(name = %record.name, "Pokémon details loaded");
                ViewState::Ready(record)
            }
            Err(e) => {
                warn!("Failed to fetch Pokémon details: {}", e);
                let message = e.to_string();
                ViewState::Error(if message.is_empty() {
                    "Network response was not ok".to_string()
                } else {
                    message
                })
            }
        };

        true
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::*;
    use crate::core::models::tests::pikachu;

    #[test]
    fn test_initial_state_is_loading() {
        let controller = FetchController::new();
        assert_eq!(controller.state(), &ViewState::Loading);
        assert!(controller.current_identifier().is_none());
    }

    #[test]
    fn test_loading_to_ready() {
        let mut controller = FetchController::new();
        let activation = controller.activate(Some("pikachu")).unwrap();

        assert_eq!(activation.identifier, "pikachu");
        assert!(controller.is_loading());

        assert!(controller.complete(activation.generation, Ok(pikachu())));
        match controller.state() {
            ViewState::Ready(record) => assert_eq!(record.display_name(), "PIKACHU"),
            other => panic!("Expected Ready, got {:?}", other),
        }
    }

    #[test]
    fn test_loading_to_error() {
        let mut controller = FetchController::new();
        let activation = controller.activate(Some("not-a-pokemon")).unwrap();

        controller.complete(
            activation.generation,
            Err(FetchError::Status { status: StatusCode::NOT_FOUND }),
        );

        match controller.state() {
            ViewState::Error(message) => assert!(!message.is_empty()),
            other => panic!("Expected Error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_identifier_issues_no_request() {
        let mut controller = FetchController::new();

        assert!(controller.activate(None).is_none());
        assert!(controller.activate(Some("")).is_none());
        assert!(controller.is_loading());
    }

    #[test]
    fn test_identifier_is_not_normalized() {
        let mut controller = FetchController::new();
        let activation = controller.activate(Some("Pikachu")).unwrap();

        assert_eq!(activation.identifier, "Pikachu");
        assert_eq!(controller.current_identifier(), Some("Pikachu"));
    }

    #[test]
    fn test_reactivation_clears_error() {
        let mut controller = FetchController::new();
        let first = controller.activate(Some("bad")).unwrap();
        controller.complete(first.generation, Err(FetchError::Transport("offline".into())));
        assert!(matches!(controller.state(), ViewState::Error(_)));

        controller.activate(Some("pikachu"));
        assert!(controller.is_loading());
    }

    #[test]
    fn test_stale_result_is_discarded() {
        let mut controller = FetchController::new();
        let first = controller.activate(Some("bulbasaur")).unwrap();
        let second = controller.activate(Some("pikachu")).unwrap();

        assert!(controller.complete(second.generation, Ok(pikachu())));
        assert!(!controller.complete(
            first.generation,
            Err(FetchError::Transport("late failure".into()))
        ));

        assert!(matches!(controller.state(), ViewState::Ready(_)));
    }
}
