// Key debounce and repeat handling
//
// Terminals differ in whether they report key releases. Action keys fire
// once per press (with a time-based debounce for terminals that never send a
// release); navigation keys fire on press and then repeat while held.
// Text typed into the search box bypasses this entirely.

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Minimum gap between two triggers of an action key that was never released
const ACTION_DEBOUNCE: Duration = Duration::from_millis(150);

/// Defines how a key should behave when pressed/held
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyBehavior {
    /// Trigger once per press/release cycle (Enter, Tab, shortcuts)
    StateChange,

    /// Trigger on press, then repeat after an initial delay (arrows, j/k)
    Repeatable {
        initial_delay: Duration,
        repeat_interval: Duration,
    },
}

impl KeyBehavior {
    /// Arrow keys and j/k
    pub fn navigation() -> Self {
        Self::Repeatable {
            initial_delay: Duration::from_millis(500),
            repeat_interval: Duration::from_millis(50),
        }
    }

    /// PageUp/PageDown
    pub fn fast_navigation() -> Self {
        Self::Repeatable {
            initial_delay: Duration::from_millis(300),
            repeat_interval: Duration::from_millis(30),
        }
    }
}

/// Press bookkeeping for one key. Absent from the map means released.
#[derive(Debug, Clone, Copy)]
struct Held {
    since: Instant,
    last_fired: Instant,
}

/// Decides whether a key event should trigger its action
#[derive(Debug, Default)]
pub struct InputHandler {
    held: HashMap<KeyCode, Held>,
    behaviors: HashMap<KeyCode, KeyBehavior>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn configure_keys(&mut self, keys: &[KeyCode], behavior: KeyBehavior) {
        for key in keys {
            self.behaviors.insert(*key, behavior);
        }
    }

    /// Returns true if the press should trigger the key's action
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.press_at(key, Instant::now())
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.held.remove(&key);
    }

    fn press_at(&mut self, key: KeyCode, now: Instant) -> bool {
        let behavior = self
            .behaviors
            .get(&key)
            .copied()
            .unwrap_or(KeyBehavior::StateChange);

        let Some(held) = self.held.get_mut(&key) else {
            self.held.insert(
                key,
                Held {
                    since: now,
                    last_fired: now,
                },
            );
            return true;
        };

        let fire = match behavior {
            KeyBehavior::StateChange => now.duration_since(held.last_fired) >= ACTION_DEBOUNCE,
            KeyBehavior::Repeatable {
                initial_delay,
                repeat_interval,
            } => {
                now.duration_since(held.since) >= initial_delay
                    && now.duration_since(held.last_fired) >= repeat_interval
            }
        };
        if fire {
            held.last_fired = now;
        }
        fire
    }

    /// Key behaviors for the recipe browser
    pub fn with_default_config() -> Self {
        let mut handler = Self::new();

        handler.configure_keys(
            &[
                KeyCode::Up,
                KeyCode::Down,
                KeyCode::Char('j'),
                KeyCode::Char('k'),
            ],
            KeyBehavior::navigation(),
        );
        handler.configure_keys(
            &[KeyCode::PageUp, KeyCode::PageDown],
            KeyBehavior::fast_navigation(),
        );
        // Everything else defaults to StateChange
        handler
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_key_fires_once_per_press() {
        let mut handler = InputHandler::with_default_config();
        let t0 = Instant::now();

        assert!(handler.press_at(KeyCode::Enter, t0));
        assert!(!handler.press_at(KeyCode::Enter, t0 + Duration::from_millis(20)));

        handler.handle_key_release(KeyCode::Enter);
        assert!(handler.press_at(KeyCode::Enter, t0 + Duration::from_millis(40)));
    }

    #[test]
    fn action_key_debounces_without_release() {
        let mut handler = InputHandler::with_default_config();
        let t0 = Instant::now();

        assert!(handler.press_at(KeyCode::Char('q'), t0));
        assert!(!handler.press_at(KeyCode::Char('q'), t0 + Duration::from_millis(100)));
        assert!(handler.press_at(KeyCode::Char('q'), t0 + ACTION_DEBOUNCE));
    }

    #[test]
    fn navigation_repeats_after_delay() {
        let mut handler = InputHandler::with_default_config();
        let t0 = Instant::now();
        let ms = Duration::from_millis;

        assert!(handler.press_at(KeyCode::Down, t0));
        assert!(!handler.press_at(KeyCode::Down, t0 + ms(200)));
        assert!(handler.press_at(KeyCode::Down, t0 + ms(500)));
        assert!(!handler.press_at(KeyCode::Down, t0 + ms(520)));
        assert!(handler.press_at(KeyCode::Down, t0 + ms(550)));
    }
}
