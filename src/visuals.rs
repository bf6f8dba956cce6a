//! Color palettes and the per-agent record handed to renderers.
//!
//! Agents only carry a palette *index*. The [`Palette`] maps that index to a
//! color, and [`AgentInstance`] packs everything a renderer needs to draw one
//! agent into a plain-old-data struct.
//!
//! ```ignore
//! let instances = swarm.instances();
//! queue.write_buffer(&instance_buffer, 0, bytemuck::cast_slice(&instances));
//! ```

use crate::agent::Agent;
use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Built-in palettes. Each has five color stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PalettePreset {
    /// Vibrant pink, purple, blue, cyan, green.
    #[default]
    Neon,
    /// Red through violet.
    Rainbow,
    /// Warm oranges and pinks.
    Sunset,
    /// Cool blues and teals.
    Ocean,
    /// Natural greens and browns.
    Forest,
}

impl PalettePreset {
    fn colors(&self) -> [Vec3; 5] {
        match self {
            PalettePreset::Neon => [
                Vec3::new(1.0, 0.0, 0.5),
                Vec3::new(0.5, 0.0, 1.0),
                Vec3::new(0.0, 0.5, 1.0),
                Vec3::new(0.0, 1.0, 1.0),
                Vec3::new(0.5, 1.0, 0.5),
            ],
            PalettePreset::Rainbow => [
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(0.0, 1.0, 1.0),
                Vec3::new(0.5, 0.0, 1.0),
            ],
            PalettePreset::Sunset => [
                Vec3::new(0.1, 0.0, 0.2),
                Vec3::new(0.5, 0.0, 0.5),
                Vec3::new(1.0, 0.2, 0.4),
                Vec3::new(1.0, 0.5, 0.2),
                Vec3::new(1.0, 0.9, 0.4),
            ],
            PalettePreset::Ocean => [
                Vec3::new(0.0, 0.05, 0.15),
                Vec3::new(0.0, 0.2, 0.4),
                Vec3::new(0.0, 0.4, 0.6),
                Vec3::new(0.2, 0.6, 0.8),
                Vec3::new(0.6, 0.9, 1.0),
            ],
            PalettePreset::Forest => [
                Vec3::new(0.1, 0.05, 0.0),
                Vec3::new(0.3, 0.15, 0.05),
                Vec3::new(0.2, 0.4, 0.1),
                Vec3::new(0.3, 0.6, 0.2),
                Vec3::new(0.5, 0.8, 0.3),
            ],
        }
    }
}

/// Ordered, fixed list of RGB colors (each channel 0.0-1.0).
///
/// Read-only once a swarm is built; agents refer to slots by index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    colors: Vec<Vec3>,
}

impl Palette {
    pub fn new(colors: Vec<Vec3>) -> Self {
        Self { colors }
    }

    pub fn from_preset(preset: PalettePreset) -> Self {
        Self::new(preset.colors().to_vec())
    }

    /// `count` evenly spaced, fully saturated hues.
    pub fn rainbow(count: usize) -> Self {
        let colors = (0..count)
            .map(|i| hsv_to_rgb(i as f32 / count as f32, 1.0, 1.0))
            .collect();
        Self::new(colors)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<Vec3> {
        self.colors.get(index).copied()
    }

    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_preset(PalettePreset::default())
    }
}

impl From<PalettePreset> for Palette {
    fn from(preset: PalettePreset) -> Self {
        Self::from_preset(preset)
    }
}

/// Convert HSV to RGB.
fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Vec3 {
    let c = v * s;
    let x = c * (1.0 - ((h * 6.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match (h * 6.0) as u32 % 6 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Vec3::new(r + m, g + m, b + m)
}

/// GPU-ready snapshot of one agent.
///
/// Layout is 28 bytes with no padding, so a slice of these can be
/// `bytemuck::cast_slice`d straight into a vertex or storage buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct AgentInstance {
    pub position: [f32; 2],
    /// Radians; the direction a triangle sprite should point.
    pub heading: f32,
    pub color: [f32; 3],
    pub color_index: u32,
}

impl AgentInstance {
    /// Build from an agent. Unknown palette slots render white.
    pub fn new(agent: &Agent, palette: &Palette) -> Self {
        let color = palette.get(agent.color_index()).unwrap_or(Vec3::ONE);
        Self {
            position: agent.position().to_array(),
            heading: agent.heading(),
            color: color.to_array(),
            color_index: agent.color_index() as u32,
        }
    }
}
