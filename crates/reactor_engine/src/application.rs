//! Application events and event sources

use crate::config::ConfigError;
use crate::core::config::ScriptedKey;
use crate::engine::EngineError;
use crate::input::{KeyCode, ParseKeyError};
use thiserror::Error;

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Engine error propagated to application level
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// A scripted key name could not be parsed
    #[error("Script error at frame {frame}: {source}")]
    UnknownKey {
        /// Frame the bad entry was scheduled for
        frame: u64,
        /// Parse failure
        #[source]
        source: ParseKeyError,
    },
}

/// Application events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Window was resized
    WindowResized {
        /// New window width
        width: u32,
        /// New window height
        height: u32,
    },

    /// Window close requested
    WindowCloseRequested,

    /// Key was pressed
    KeyPressed(KeyCode),

    /// Key was released
    KeyReleased(KeyCode),
}

/// Supplier of events for the main loop
///
/// A windowing backend implements this by draining its native event queue.
pub trait EventSource {
    /// Events to handle before rendering frame `frame`
    fn poll_events(&mut self, frame: u64) -> Vec<AppEvent>;
}

/// Replays a fixed schedule of events
#[derive(Debug, Clone, Default)]
pub struct ScriptedEvents {
    events: Vec<(u64, AppEvent)>,
    cursor: usize,
}

impl ScriptedEvents {
    /// Empty schedule
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule built from configured key presses
    ///
    /// Each press is followed by its release on the same frame, so repeated
    /// presses of one key each register.
    pub fn from_script(script: &[ScriptedKey]) -> Result<Self, AppError> {
        let mut events = Self::new();
        for entry in script {
            let key: KeyCode = entry.key.parse().map_err(|source| AppError::UnknownKey {
                frame: entry.frame,
                source,
            })?;
            events = events.with_key_press(entry.frame, key);
        }
        Ok(events)
    }

    /// Add an event delivered before frame `frame`
    pub fn with_event(mut self, frame: u64, event: AppEvent) -> Self {
        // Stable insert keeps same-frame events in the order they were added
        let at = self.events.partition_point(|(f, _)| *f <= frame);
        self.events.insert(at, (frame, event));
        self
    }

    /// Add a press and release of `key` before frame `frame`
    pub fn with_key_press(self, frame: u64, key: KeyCode) -> Self {
        self.with_event(frame, AppEvent::KeyPressed(key))
            .with_event(frame, AppEvent::KeyReleased(key))
    }

    /// Events not yet delivered
    pub fn remaining(&self) -> usize {
        self.events.len() - self.cursor
    }
}

impl EventSource for ScriptedEvents {
    fn poll_events(&mut self, frame: u64) -> Vec<AppEvent> {
        let due = self.events[self.cursor..]
            .iter()
            .take_while(|(f, _)| *f <= frame)
            .map(|(_, event)| event.clone())
            .collect::<Vec<_>>();
        self.cursor += due.len();
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_delivered_in_frame_order() {
        let mut events = ScriptedEvents::new()
            .with_event(5, AppEvent::WindowCloseRequested)
            .with_key_press(2, KeyCode::Space)
            .with_event(0, AppEvent::WindowResized { width: 640, height: 480 });

        assert_eq!(events.poll_events(0), vec![AppEvent::WindowResized { width: 640, height: 480 }]);
        assert!(events.poll_events(1).is_empty());
        assert_eq!(
            events.poll_events(3),
            vec![AppEvent::KeyPressed(KeyCode::Space), AppEvent::KeyReleased(KeyCode::Space)]
        );
        assert_eq!(events.remaining(), 1);
        assert_eq!(events.poll_events(10), vec![AppEvent::WindowCloseRequested]);
        assert!(events.poll_events(11).is_empty());
    }

    #[test]
    fn test_from_script() {
        let script = vec![
            ScriptedKey { frame: 3, key: "l".to_string() },
            ScriptedKey { frame: 1, key: "space".to_string() },
        ];
        let mut events = ScriptedEvents::from_script(&script).unwrap();
        assert_eq!(events.remaining(), 4);
        assert_eq!(events.poll_events(1)[0], AppEvent::KeyPressed(KeyCode::Space));

        let bad = vec![ScriptedKey { frame: 7, key: "hyper".to_string() }];
        let err = ScriptedEvents::from_script(&bad).unwrap_err();
        assert!(matches!(err, AppError::UnknownKey { frame: 7, .. }));
    }
}
