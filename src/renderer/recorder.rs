//! A surface that records commands instead of drawing them
//!
//! Used by the headless runner and by tests that check what a frame draws.

use super::surface::{Color, Surface};
use crate::sim::Rect;

/// One recorded drawing command
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Rect),
    FillOval { rect: Rect, color: Color },
    FillRect { rect: Rect, color: Color },
    FillText {
        text: String,
        x: f32,
        y: f32,
        color: Color,
        font_size: f32,
    },
}

/// Records every command issued to it, in order
#[derive(Debug, Clone, Default)]
pub struct CommandRecorder {
    pub commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the recorded commands, leaving the recorder empty for the next frame
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillText { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = &Rect> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillRect { rect, .. } => Some(rect),
            _ => None,
        })
    }
}

impl Surface for CommandRecorder {
    fn clear(&mut self, region: Rect) {
        self.commands.push(DrawCommand::Clear(region));
    }

    fn fill_oval(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.commands.push(DrawCommand::FillOval {
            rect: Rect::new(x, y, w, h),
            color,
        });
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.commands.push(DrawCommand::FillRect {
            rect: Rect::new(x, y, w, h),
            color,
        });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, color: Color, font_size: f32) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            x,
            y,
            color,
            font_size,
        });
    }
}
