//! Pointer gestures on windows: title-bar drag and edge/corner resize.
//!
//! There is no minimum size and no clamping to the desktop; a window can be
//! dragged fully off-screen or resized to a negative extent.

use crate::kernel::windows::WindowId;
use crate::models::{Bounds, Point};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ResizeDirection {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl ResizeDirection {
    pub const ALL: [ResizeDirection; 8] = [
        ResizeDirection::N,
        ResizeDirection::S,
        ResizeDirection::E,
        ResizeDirection::W,
        ResizeDirection::NE,
        ResizeDirection::NW,
        ResizeDirection::SE,
        ResizeDirection::SW,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        let dir = match name {
            "n" => ResizeDirection::N,
            "s" => ResizeDirection::S,
            "e" => ResizeDirection::E,
            "w" => ResizeDirection::W,
            "ne" => ResizeDirection::NE,
            "nw" => ResizeDirection::NW,
            "se" => ResizeDirection::SE,
            "sw" => ResizeDirection::SW,
            _ => return None,
        };
        Some(dir)
    }

    pub fn name(self) -> &'static str {
        match self {
            ResizeDirection::N => "n",
            ResizeDirection::S => "s",
            ResizeDirection::E => "e",
            ResizeDirection::W => "w",
            ResizeDirection::NE => "ne",
            ResizeDirection::NW => "nw",
            ResizeDirection::SE => "se",
            ResizeDirection::SW => "sw",
        }
    }

    fn moves_north(self) -> bool {
        matches!(self, ResizeDirection::N | ResizeDirection::NE | ResizeDirection::NW)
    }

    fn moves_south(self) -> bool {
        matches!(self, ResizeDirection::S | ResizeDirection::SE | ResizeDirection::SW)
    }

    fn moves_west(self) -> bool {
        matches!(self, ResizeDirection::W | ResizeDirection::NW | ResizeDirection::SW)
    }

    fn moves_east(self) -> bool {
        matches!(self, ResizeDirection::E | ResizeDirection::NE | ResizeDirection::SE)
    }

    /// Applies a pointer displacement to the bounds the gesture started from.
    /// The edge opposite to each dragged edge stays where it was.
    pub fn apply(self, start: Bounds, delta: Point) -> Bounds {
        let mut out = start;
        if self.moves_east() {
            out.size.width = start.size.width.saturating_add(delta.x);
        }
        if self.moves_west() {
            out.position.x = start.position.x.saturating_add(delta.x);
            out.size.width = start.size.width.saturating_sub(delta.x);
        }
        if self.moves_south() {
            out.size.height = start.size.height.saturating_add(delta.y);
        }
        if self.moves_north() {
            out.position.y = start.position.y.saturating_add(delta.y);
            out.size.height = start.size.height.saturating_sub(delta.y);
        }
        out
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Which part of a window a pointer position lands on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WindowHit {
    TitleBar,
    Resize(ResizeDirection),
    Body,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HandleMetrics {
    pub title_bar_height: i32,
    pub edge: i32,
    pub corner: i32,
}

impl Default for HandleMetrics {
    fn default() -> Self {
        Self {
            title_bar_height: 40,
            edge: 4,
            corner: 16,
        }
    }
}

/// Corners win over edges, edges over the title bar.
pub fn hit_test(bounds: Bounds, p: Point, metrics: HandleMetrics) -> Option<WindowHit> {
    if !bounds.contains(p) {
        return None;
    }

    let left = p.x.saturating_sub(bounds.position.x);
    let top = p.y.saturating_sub(bounds.position.y);
    let right = bounds.right().saturating_sub(1).saturating_sub(p.x);
    let bottom = bounds.bottom().saturating_sub(1).saturating_sub(p.y);

    let c = metrics.corner;
    let corner = match (top < c, bottom < c, left < c, right < c) {
        (true, _, true, _) => Some(ResizeDirection::NW),
        (true, _, _, true) => Some(ResizeDirection::NE),
        (_, true, true, _) => Some(ResizeDirection::SW),
        (_, true, _, true) => Some(ResizeDirection::SE),
        _ => None,
    };
    if let Some(dir) = corner {
        return Some(WindowHit::Resize(dir));
    }

    let e = metrics.edge;
    let edge = if top < e {
        Some(ResizeDirection::N)
    } else if bottom < e {
        Some(ResizeDirection::S)
    } else if left < e {
        Some(ResizeDirection::W)
    } else if right < e {
        Some(ResizeDirection::E)
    } else {
        None
    };
    if let Some(dir) = edge {
        return Some(WindowHit::Resize(dir));
    }

    if top < metrics.title_bar_height {
        Some(WindowHit::TitleBar)
    } else {
        Some(WindowHit::Body)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Gesture {
    #[default]
    Idle,
    Dragging {
        window: WindowId,
        offset: Point,
    },
    Resizing {
        window: WindowId,
        direction: ResizeDirection,
        origin: Point,
        start: Bounds,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GeometryUpdate {
    Move(Point),
    Reshape(Bounds),
}

#[derive(Debug, Default)]
pub struct GestureTracker {
    state: Gesture,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &Gesture {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == Gesture::Idle
    }

    pub fn window(&self) -> Option<&WindowId> {
        match &self.state {
            Gesture::Idle => None,
            Gesture::Dragging { window, .. } | Gesture::Resizing { window, .. } => Some(window),
        }
    }

    pub fn begin_drag(
        &mut self,
        window: WindowId,
        pointer: Point,
        window_pos: Point,
        button: PointerButton,
    ) -> bool {
        if button != PointerButton::Primary || !self.is_idle() {
            return false;
        }
        self.state = Gesture::Dragging {
            window,
            offset: pointer.offset_from(window_pos),
        };
        true
    }

    pub fn begin_resize(
        &mut self,
        window: WindowId,
        direction: ResizeDirection,
        pointer: Point,
        start: Bounds,
    ) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.state = Gesture::Resizing {
            window,
            direction,
            origin: pointer,
            start,
        };
        true
    }

    pub fn pointer_move(&self, pointer: Point) -> Option<(WindowId, GeometryUpdate)> {
        match &self.state {
            Gesture::Idle => None,
            Gesture::Dragging { window, offset } => Some((
                window.clone(),
                GeometryUpdate::Move(pointer.offset_from(*offset)),
            )),
            Gesture::Resizing {
                window,
                direction,
                origin,
                start,
            } => Some((
                window.clone(),
                GeometryUpdate::Reshape(direction.apply(*start, pointer.offset_from(*origin))),
            )),
        }
    }

    /// Ends whatever gesture is in progress. Returns whether one was active.
    pub fn pointer_up(&mut self) -> bool {
        !matches!(std::mem::take(&mut self.state), Gesture::Idle)
    }

    pub fn cancel_for(&mut self, window: &WindowId) {
        if self.window() == Some(window) {
            self.state = Gesture::Idle;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/geometry.rs"]
mod tests;
