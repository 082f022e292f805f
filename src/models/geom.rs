//! 桌面坐标与矩形
//!
//! 使用有符号整数：窗口可以被拖出屏幕，尺寸也可以小于零。运算一律饱和，不会溢出。

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset_from(self, origin: Point) -> Point {
        Point::new(self.x.saturating_sub(origin.x), self.y.saturating_sub(origin.y))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bounds {
    pub position: Point,
    pub size: Size,
}

impl Bounds {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            position: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// A `scale`-sized rectangle centered in `viewport`, rounded to whole pixels.
    pub fn centered_in(viewport: Size, scale: f64) -> Self {
        let width = (viewport.width as f64 * scale).round() as i32;
        let height = (viewport.height as f64 * scale).round() as i32;
        let x = (viewport.width.saturating_sub(width) as f64 / 2.0).round() as i32;
        let y = (viewport.height.saturating_sub(height) as f64 / 2.0).round() as i32;
        Self::new(x, y, width, height)
    }

    pub fn is_empty(&self) -> bool {
        self.size.width <= 0 || self.size.height <= 0
    }

    pub fn right(&self) -> i32 {
        self.position.x.saturating_add(self.size.width)
    }

    pub fn bottom(&self) -> i32 {
        self.position.y.saturating_add(self.size.height)
    }

    pub fn contains(&self, p: Point) -> bool {
        if self.is_empty() {
            return false;
        }
        p.x >= self.position.x && p.x < self.right() && p.y >= self.position.y && p.y < self.bottom()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/geom.rs"]
mod tests;
