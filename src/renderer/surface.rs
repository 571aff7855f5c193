//! Drawing surface abstraction
//!
//! The game never talks to a graphics API directly. It issues fire-and-forget
//! shape commands to a [`Surface`], which a host backs with whatever it has.

use crate::sim::Rect;

/// RGBA color, each channel in 0-1
pub type Color = [f32; 4];

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const ACTOR: Color = [1.0, 0.0, 0.0, 1.0];
    pub const OBSTACLE: Color = [0.0, 0.5, 0.0, 1.0];
    pub const SCORE_TEXT: Color = [0.0, 0.0, 0.0, 1.0];
    pub const GAME_OVER_TEXT: Color = [1.0, 0.0, 0.0, 1.0];
}

/// Something shapes can be drawn on
pub trait Surface {
    /// Erase a region to the background
    fn clear(&mut self, region: Rect);
    /// Fill the ellipse inscribed in the given box
    fn fill_oval(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
    /// Draw text with its baseline starting at (x, y)
    fn fill_text(&mut self, text: &str, x: f32, y: f32, color: Color, font_size: f32);
}

/// A game object that knows how to draw itself
pub trait Drawable {
    fn draw(&self, surface: &mut dyn Surface);
}

/// Format a color as a CSS `rgba()` string
pub fn css_color(color: Color) -> String {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgba({}, {}, {}, {})",
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        color[3].clamp(0.0, 1.0)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_color() {
        assert_eq!(css_color(colors::ACTOR), "rgba(255, 0, 0, 1)");
        assert_eq!(css_color([0.0, 0.5, 0.0, 0.25]), "rgba(0, 128, 0, 0.25)");
        assert_eq!(css_color([2.0, -1.0, 0.0, 1.0]), "rgba(255, 0, 0, 1)");
    }
}
