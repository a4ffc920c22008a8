/// Minimal history stack standing in for a router: it supplies the
/// identifier the detail view should show and handles "go back".
#[derive(Debug, Default, Clone)]
pub struct Navigator {
    current: Option<String>,
    history: Vec<String>,
}

impl Navigator {
    pub fn new(initial: Option<String>) -> Self {
        let current = initial.map(|id| id.trim().to_string()).filter(|id| !id.is_empty());
        Self { current, history: Vec::new() }
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Returns true when the current identifier changed.
    pub fn navigate(&mut self, identifier: &str) -> bool {
        let identifier = identifier.trim();
        if identifier.is_empty() || self.current() == Some(identifier) {
            return false;
        }

        if let Some(previous) = self.current.replace(identifier.to_string()) {
            self.history.push(previous);
        }
        true
    }

    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.current = Some(previous);
                true
            }
            None => false,
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_and_back() {
        let mut nav = Navigator::new(Some("pikachu".to_string()));
        assert!(!nav.can_go_back());

        assert!(nav.navigate("bulbasaur"));
        assert!(nav.navigate("25"));
        assert_eq!(nav.current(), Some("25"));

        assert!(nav.back());
        assert_eq!(nav.current(), Some("bulbasaur"));
        assert!(nav.back());
        assert_eq!(nav.current(), Some("pikachu"));
        assert!(!nav.back());
        assert_eq!(nav.current(), Some("pikachu"));
    }

    #[test]
    fn test_empty_and_repeated_input_is_ignored() {
        let mut nav = Navigator::new(Some("  ".to_string()));
        assert_eq!(nav.current(), None);

        assert!(!nav.navigate("   "));
        assert!(nav.navigate(" eevee "));
        assert_eq!(nav.current(), Some("eevee"));
        assert!(!nav.navigate("eevee"));
        assert!(!nav.can_go_back());
    }

    #[test]
    fn test_case_is_preserved() {
        let mut nav = Navigator::default();
        nav.navigate("Pikachu");
        assert_eq!(nav.current(), Some("Pikachu"));
    }
}
