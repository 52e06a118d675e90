//! Pixel-space page rectangle at a given zoom

use serde::{Deserialize, Serialize};

/// Viewport reported by the PDF library for one page at one scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Width in CSS pixels
    pub width: f64,
    /// Height in CSS pixels
    pub height: f64,
    /// Zoom factor this viewport was computed at
    pub scale: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, scale: f64) -> Self {
        Self {
            width,
            height,
            scale,
        }
    }

    /// Canvas backing-store width; canvas dimensions truncate like a JS integer assignment
    pub fn canvas_width(&self) -> u32 {
        self.width.max(0.0) as u32
    }

    pub fn canvas_height(&self) -> u32 {
        self.height.max(0.0) as u32
    }

    /// CSS width for the text layer overlay
    pub fn css_width(&self) -> String {
        format!("{}px", self.width)
    }

    pub fn css_height(&self) -> String {
        format!("{}px", self.height)
    }
}
