//! Input handling for the swarm host.
//!
//! [`Controls`] turns raw window events into [`Command`]s that operate on a
//! [`Swarm`]. It keeps only the state needed to tell a drag from a click:
//!
//! - left-drag moves the target to the cursor
//! - left-click (press and release without dragging) spawns an agent
//! - Backspace / Delete removes one batch of the oldest agents
//! - `C` clears the target
//!
//! ```ignore
//! fn window_event(&mut self, _: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
//!     if let Some(command) = self.controls.handle_event(&event) {
//!         command.apply(&mut self.swarm);
//!     }
//! }
//! ```

use crate::swarm::Swarm;
use glam::Vec2;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Cursor travel, in canvas units, after which a held button counts as a drag.
const DRAG_THRESHOLD: f32 = 3.0;

/// A single core operation requested by the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    SetTarget(Vec2),
    ClearTarget,
    Spawn(Vec2),
    RemoveBatch,
}

impl Command {
    /// Run the command against `swarm`.
    pub fn apply(self, swarm: &mut Swarm) {
        match self {
            Command::SetTarget(p) => swarm.set_target(p.x, p.y),
            Command::ClearTarget => swarm.clear_target(),
            Command::Spawn(p) => swarm.add_agent(p.x, p.y),
            Command::RemoveBatch => {
                swarm.remove_batch();
            }
        }
    }
}

/// Mouse and keyboard state between events.
#[derive(Debug)]
pub struct Controls {
    /// Cursor position in canvas units.
    cursor: Vec2,
    /// Where the left button went down, while it is held.
    press_origin: Option<Vec2>,
    dragging: bool,
    /// Canvas units per window pixel on each axis.
    scale: Vec2,
    canvas: Vec2,
}

impl Controls {
    /// Controls for a canvas of `width` x `height`, assuming the window shows
    /// it at one pixel per unit until told otherwise.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            cursor: Vec2::ZERO,
            press_origin: None,
            dragging: false,
            scale: Vec2::ONE,
            canvas: Vec2::new(width, height),
        }
    }

    /// Cursor position in canvas units.
    #[inline]
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Update the pixel-to-canvas mapping after a resize.
    pub fn set_window_size(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.scale = self.canvas / Vec2::new(width as f32, height as f32);
        }
    }

    /// Process a winit window event.
    pub fn handle_event(&mut self, event: &WindowEvent) -> Option<Command> {
        match event {
            WindowEvent::Resized(size) => {
                self.set_window_size(size.width, size.height);
                None
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(Vec2::new(position.x as f32, position.y as f32))
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => self.left_button(*state == ElementState::Pressed),
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || event.repeat {
                    return None;
                }
                match event.physical_key {
                    PhysicalKey::Code(code) => self.key_pressed(code),
                    PhysicalKey::Unidentified(_) => None,
                }
            }
            _ => None,
        }
    }

    /// Cursor moved to `pixel` (window coordinates).
    pub fn cursor_moved(&mut self, pixel: Vec2) -> Option<Command> {
        self.cursor = pixel * self.scale;
        let origin = self.press_origin?;
        if !self.dragging && origin.distance(self.cursor) >= DRAG_THRESHOLD {
            self.dragging = true;
        }
        self.dragging.then_some(Command::SetTarget(self.cursor))
    }

    /// Left button went down (`true`) or up (`false`).
    pub fn left_button(&mut self, pressed: bool) -> Option<Command> {
        if pressed {
            self.press_origin = Some(self.cursor);
            self.dragging = false;
            return None;
        }
        let was_held = self.press_origin.take().is_some();
        let was_dragging = std::mem::replace(&mut self.dragging, false);
        (was_held && !was_dragging).then_some(Command::Spawn(self.cursor))
    }

    /// A key went down.
    pub fn key_pressed(&mut self, key: KeyCode) -> Option<Command> {
        match key {
            KeyCode::Backspace | KeyCode::Delete => Some(Command::RemoveBatch),
            KeyCode::KeyC => Some(Command::ClearTarget),
            _ => None,
        }
    }
}
