//! Drawing surface abstraction shared by the browser and the native renderer.

use glam::Vec2;
use std::fmt;

/// 8-bit RGB with a float alpha, the shape CSS `rgba()` takes
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(rgb: [u8; 3], a: f32) -> Self {
        Self {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
            a,
        }
    }

    /// Normalized components for GPU upload (sRGB, not premultiplied)
    pub fn to_array(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a,
        ]
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Immediate-mode 2D surface the particle layer paints on
pub trait Canvas {
    /// Current surface size in pixels
    fn size(&self) -> (u32, u32);

    fn set_size(&mut self, width: u32, height: u32);

    fn clear(&mut self);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);

    fn has_area(&self) -> bool {
        let (width, height) = self.size();
        width > 0 && height > 0
    }
}

/// GPU instance for one filled circle
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CircleInstance {
    pub center: [f32; 2],
    pub radius: f32,
    pub _padding: f32,
    pub color: [f32; 4],
}

/// One endpoint of a line segment (two per segment, `LineList` topology)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

/// Canvas that records what was painted since the last `clear`.
///
/// The native renderer uploads the recorded circles and lines once per frame.
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    width: u32,
    height: u32,
    circles: Vec<CircleInstance>,
    lines: Vec<LineVertex>,
}

impl DrawList {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn circles(&self) -> &[CircleInstance] {
        &self.circles
    }

    pub fn line_vertices(&self) -> &[LineVertex] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty() && self.lines.is_empty()
    }
}

impl Canvas for DrawList {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn clear(&mut self) {
        self.circles.clear();
        self.lines.clear();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.circles.push(CircleInstance {
            center: center.to_array(),
            radius,
            _padding: 0.0,
            color: color.to_array(),
        });
    }

    // Width is fixed at one pixel by the line pipeline
    fn stroke_line(&mut self, from: Vec2, to: Vec2, _width: f32, color: Rgba) {
        let color = color.to_array();
        self.lines.push(LineVertex {
            position: from.to_array(),
            color,
        });
        self.lines.push(LineVertex {
            position: to.to_array(),
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_css() {
        let color = Rgba::new([34, 211, 238], 0.5);
        assert_eq!(color.to_string(), "rgba(34, 211, 238, 0.5)");
    }

    #[test]
    fn test_draw_list_records_and_clears() {
        let mut list = DrawList::new(100, 50);
        let cyan = Rgba::new([34, 211, 238], 1.0);

        list.fill_circle(Vec2::new(10.0, 10.0), 2.0, cyan);
        list.stroke_line(Vec2::ZERO, Vec2::new(5.0, 5.0), 1.0, cyan);

        assert_eq!(list.circles().len(), 1);
        assert_eq!(list.line_count(), 1);
        assert_eq!(list.line_vertices()[1].position, [5.0, 5.0]);

        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.size(), (100, 50));
    }

    #[test]
    fn test_has_area() {
        assert!(!DrawList::new(0, 0).has_area());
        assert!(!DrawList::new(10, 0).has_area());
        assert!(DrawList::new(1, 1).has_area());
    }

    #[test]
    fn test_gpu_layouts() {
        assert_eq!(std::mem::size_of::<CircleInstance>(), 32);
        assert_eq!(std::mem::size_of::<LineVertex>(), 24);
    }
}
