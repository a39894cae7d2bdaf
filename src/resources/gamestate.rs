//! Session state resource.
//!
//! A session starts in [`GameStates::Running`] and ends in exactly one of the
//! terminal states. Once terminal, the state never changes again; systems
//! call [`GameState::finish`] and only the first request of a tick wins.

use bevy_ecs::prelude::Resource;

/// Discrete high-level states of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStates {
    #[default]
    Running,
    /// Enough coins collected.
    Won,
    /// Touched an enemy.
    Lost,
    /// The window was closed.
    Quit,
}

impl GameStates {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStates::Running)
    }

    /// Message shown on the end screen, if this state has one.
    pub fn end_message(&self, coins_to_win: u32) -> Option<String> {
        match self {
            GameStates::Won => Some(format!(
                "Congratulations! You collected {} coins!",
                coins_to_win
            )),
            GameStates::Lost => Some("Game Over!".to_string()),
            GameStates::Running | GameStates::Quit => None,
        }
    }
}

/// Authoritative current session state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameState {
    current: GameStates,
}

impl GameState {
    /// Create a new state initialized to [`GameStates::Running`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only access to the current state.
    pub fn get(&self) -> GameStates {
        self.current
    }

    pub fn is_running(&self) -> bool {
        !self.current.is_terminal()
    }

    /// Enter the terminal state `outcome` if the session is still running.
    ///
    /// Returns `true` when the transition happened.
    pub fn finish(&mut self, outcome: GameStates) -> bool {
        if self.current.is_terminal() || !outcome.is_terminal() {
            return false;
        }
        self.current = outcome;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_running() {
        let state = GameState::new();
        assert_eq!(state.get(), GameStates::Running);
        assert!(state.is_running());
    }

    #[test]
    fn first_terminal_state_sticks() {
        let mut state = GameState::new();
        assert!(state.finish(GameStates::Lost));
        assert!(!state.finish(GameStates::Won));
        assert!(!state.finish(GameStates::Quit));
        assert_eq!(state.get(), GameStates::Lost);
        assert!(!state.is_running());
    }

    #[test]
    fn finishing_into_running_is_ignored() {
        let mut state = GameState::new();
        assert!(!state.finish(GameStates::Running));
        assert!(state.is_running());
    }

    #[test]
    fn end_messages() {
        assert_eq!(
            GameStates::Won.end_message(20).as_deref(),
            Some("Congratulations! You collected 20 coins!")
        );
        assert_eq!(GameStates::Lost.end_message(20).as_deref(), Some("Game Over!"));
        assert_eq!(GameStates::Quit.end_message(20), None);
        assert_eq!(GameStates::Running.end_message(20), None);
    }
}
