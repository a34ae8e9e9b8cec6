//! Input management system
//!
//! Maps raw key events to scene control actions. Actions fire on the press edge
//! only; holding a key does not repeat it.

use std::collections::HashSet;
use std::str::FromStr;

use thiserror::Error;

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A key
    A,
    /// B key
    B,
    /// C key
    C,
    /// D key
    D,
    /// E key
    E,
    /// F key
    F,
    /// G key
    G,
    /// H key
    H,
    /// I key
    I,
    /// J key
    J,
    /// K key
    K,
    /// L key
    L,
    /// M key
    M,
    /// N key
    N,
    /// O key
    O,
    /// P key
    P,
    /// Q key
    Q,
    /// R key
    R,
    /// S key
    S,
    /// T key
    T,
    /// U key
    U,
    /// V key
    V,
    /// W key
    W,
    /// X key
    X,
    /// Y key
    Y,
    /// Z key
    Z,
    /// Space key
    Space,
    /// Escape key
    Escape,
    /// `+` key
    Plus,
    /// `-` key
    Minus,
}

const LETTERS: [KeyCode; 26] = [
    KeyCode::A,
    KeyCode::B,
    KeyCode::C,
    KeyCode::D,
    KeyCode::E,
    KeyCode::F,
    KeyCode::G,
    KeyCode::H,
    KeyCode::I,
    KeyCode::J,
    KeyCode::K,
    KeyCode::L,
    KeyCode::M,
    KeyCode::N,
    KeyCode::O,
    KeyCode::P,
    KeyCode::Q,
    KeyCode::R,
    KeyCode::S,
    KeyCode::T,
    KeyCode::U,
    KeyCode::V,
    KeyCode::W,
    KeyCode::X,
    KeyCode::Y,
    KeyCode::Z,
];

impl KeyCode {
    /// Key producing the character `c`, case-insensitive for letters
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            ' ' => Some(Self::Space),
            '\u{1b}' => Some(Self::Escape),
            '+' | '=' => Some(Self::Plus),
            '-' | '_' => Some(Self::Minus),
            c if c.is_ascii_alphabetic() => {
                let index = (c.to_ascii_lowercase() as u8 - b'a') as usize;
                LETTERS.get(index).copied()
            }
            _ => None,
        }
    }
}

/// A key name that does not match any [`KeyCode`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown key name: '{0}'")]
pub struct ParseKeyError(pub String);

impl FromStr for KeyCode {
    type Err = ParseKeyError;

    /// Accepts single characters (`"v"`, `"+"`, `" "`) and names such as
    /// `"escape"`, `"space"`, `"plus"`, `"minus"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Self::from_char(c).ok_or_else(|| ParseKeyError(s.to_string()));
        }

        match s.trim().to_ascii_lowercase().as_str() {
            "escape" | "esc" => Ok(Self::Escape),
            "space" => Ok(Self::Space),
            "plus" => Ok(Self::Plus),
            "minus" => Ok(Self::Minus),
            _ => Err(ParseKeyError(s.to_string())),
        }
    }
}

/// What a key press asks the engine to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Stop the main loop
    Exit,
    /// Pause or resume the clock
    ToggleAnimation,
    /// Switch between filled and outline polygons
    ToggleWireframe,
    /// Increase clock speed
    SpeedUp,
    /// Decrease clock speed, down to the floor
    SpeedDown,
    /// Show or hide the floor light grid
    ToggleFloorLights,
}

impl InputAction {
    /// Action bound to `key`, if any
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::Escape => Some(Self::Exit),
            KeyCode::Space => Some(Self::ToggleAnimation),
            KeyCode::V => Some(Self::ToggleWireframe),
            KeyCode::Plus => Some(Self::SpeedUp),
            KeyCode::Minus => Some(Self::SpeedDown),
            KeyCode::L => Some(Self::ToggleFloorLights),
            _ => None,
        }
    }
}

/// Input manager
///
/// Tracks which keys are held and turns press edges into [`InputAction`]s.
#[derive(Debug, Default)]
pub struct InputManager {
    pressed: HashSet<KeyCode>,
}

impl InputManager {
    /// Create a new input manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle key input, returning the action for a fresh press
    pub fn handle_key_input(&mut self, key: KeyCode, pressed: bool) -> Option<InputAction> {
        if !pressed {
            self.pressed.remove(&key);
            return None;
        }
        if !self.pressed.insert(key) {
            return None;
        }
        let action = InputAction::from_key(key);
        if let Some(action) = action {
            log::debug!("Key {:?} -> {:?}", key, action);
        }
        action
    }

    /// Whether `key` is currently held
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    /// Forget all held keys, e.g. after focus loss
    pub fn clear(&mut self) {
        self.pressed.clear();
    }
}
