//! Output frames

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Which button is held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Button {
    Left,
    Right,
}

impl Button {
    pub fn other(self) -> Self {
        match self {
            Button::Left => Button::Right,
            Button::Right => Button::Left,
        }
    }
}

/// One sample of the synthesized trajectory
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReplayFrame {
    /// Time (ms)
    pub time: f64,
    pub position: Vec2,
    /// Held button, `None` when released
    pub action: Option<Button>,
}

impl ReplayFrame {
    pub fn new(time: f64, position: Vec2, action: Option<Button>) -> Self {
        Self {
            time,
            position,
            action,
        }
    }
}
