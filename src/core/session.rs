use tracing::debug;

use super::{
    tasks::TaskResult,
    Activation,
    FetchController,
    Navigator,
    ViewState,
};

/// Ties the navigator to the fetch controller: whenever the navigator's
/// identifier differs from the one last activated, a new activation starts.
#[derive(Debug, Default)]
pub struct DetailSession {
    navigator: Navigator,
    controller: FetchController,
    started: bool,
}

impl DetailSession {
    pub fn new(initial: Option<String>) -> Self {
        Self { navigator: Navigator::new(initial), controller: FetchController::new(), started: false }
    }

    pub fn state(&self) -> &ViewState {
        self.controller.state()
    }

    pub fn can_go_back(&self) -> bool {
        self.navigator.can_go_back()
    }

    pub fn current_identifier(&self) -> Option<&str> {
        self.navigator.current()
    }

    pub fn navigate(&mut self, identifier: &str) -> bool {
        self.navigator.navigate(identifier)
    }

    pub fn go_back(&mut self) -> bool {
        self.navigator.back()
    }

    /// Returns the request to issue, if the identifier changed since the last
    /// call. The first call always activates, even without an identifier.
    pub fn sync(&mut self) -> Option<Activation> {
        if self.started && self.navigator.current() == self.controller.current_identifier() {
            return None;
        }

        self.started = true;
        self.controller.activate(self.navigator.current())
    }

    pub fn apply(&mut self, result: TaskResult) -> bool {
        match result {
            TaskResult::PokemonFetched { generation, identifier, result } => {
                let applied = self.controller.complete(generation, result);
                if !applied {
                    debug!(%identifier, "Ignored result for a previous identifier");
                }
                applied
            }
        }
    }
}
