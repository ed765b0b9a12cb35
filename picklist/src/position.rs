//! Placement of the floating panel relative to its trigger.
//!
//! The solver keeps the panel on screen: it pins the panel to both viewport
//! edges when it cannot fit, anchors it to the trigger's right edge when it
//! would overflow to the right, and otherwise aligns it with the trigger's
//! left edge. Vertically it opens towards whichever side has more room.
//!
//! # Example
//!
//! ```
//! use picklist::position::{PositionSolver, Rect, Vertical, ViewportSize};
//!
//! let solver = PositionSolver::default();
//! let viewport = ViewportSize::new(1024.0, 768.0);
//! let host = Rect::new(100.0, 100.0, 200.0, 40.0);
//! let panel = Rect::new(100.0, 140.0, 200.0, 300.0);
//!
//! let placement = solver.solve(viewport, host, panel);
//! assert_eq!(placement.vertical, Vertical::Below);
//! ```

use crate::config::PositionConfig;

/// Axis-aligned rectangle in viewport coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rect
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Right edge
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Check if a point is inside this rectangle.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x < self.right() && y >= self.top && y < self.bottom()
    }
}

/// Size of the visible viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewportSize {
    pub client_width: f64,
    pub client_height: f64,
}

impl ViewportSize {
    /// Create a viewport size from the client dimensions.
    pub const fn new(client_width: f64, client_height: f64) -> Self {
        Self {
            client_width,
            client_height,
        }
    }
}

/// Everything the solver needs, as measured by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Geometry {
    pub viewport: ViewportSize,
    /// Trigger element.
    pub host: Rect,
    /// Floating panel.
    pub panel: Rect,
}

impl Geometry {
    /// Bundle measured geometry.
    pub fn new(viewport: ViewportSize, host: Rect, panel: Rect) -> Self {
        Self {
            viewport,
            host,
            panel,
        }
    }

    /// Check if a point falls outside both the trigger and the panel.
    pub fn is_outside(&self, x: f64, y: f64) -> bool {
        !self.host.contains(x, y) && !self.panel.contains(x, y)
    }
}

/// Horizontal placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Horizontal {
    /// Pinned to both viewport edges; any minimum width is dropped.
    FullBleed { left: f64, right: f64 },
    /// Right edge offset from the viewport's right edge.
    Right { right: f64 },
    /// Left edge at this offset.
    Left { left: f64 },
}

/// Vertical placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vertical {
    Above,
    Below,
}

/// Resolved panel placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub horizontal: Horizontal,
    pub vertical: Vertical,
    pub max_height: f64,
}

impl Placement {
    /// Whether the panel's minimum width must be unset.
    pub fn unsets_min_width(&self) -> bool {
        matches!(self.horizontal, Horizontal::FullBleed { .. })
    }
}

/// Computes panel placement.
#[derive(Debug, Clone, Default)]
pub struct PositionSolver {
    config: PositionConfig,
}

impl PositionSolver {
    /// Create a solver with the given limits.
    pub fn new(config: PositionConfig) -> Self {
        Self { config }
    }

    /// Placement limits in use.
    pub fn config(&self) -> &PositionConfig {
        &self.config
    }

    /// Solve placement for a measured geometry.
    pub fn solve_geometry(&self, geometry: &Geometry) -> Placement {
        self.solve(geometry.viewport, geometry.host, geometry.panel)
    }

    /// Solve placement.
    ///
    /// Horizontal rules are checked in order, first match wins:
    /// 1. panel wider than the viewport, or it overflows on the right and
    ///    cannot be right-aligned with the trigger: full bleed;
    /// 2. panel overflows on the right, or right alignment is forced:
    ///    anchor to the trigger's right edge;
    /// 3. otherwise anchor to the trigger's left edge.
    pub fn solve(&self, viewport: ViewportSize, host: Rect, panel: Rect) -> Placement {
        let PositionConfig {
            max_height,
            margin,
            force_right,
        } = self.config;

        let overflows_right = panel.right() > viewport.client_width;
        let horizontal = if panel.width > viewport.client_width
            || (host.right() - panel.width < 0.0 && overflows_right)
        {
            Horizontal::FullBleed {
                left: margin,
                right: margin,
            }
        } else if overflows_right || force_right {
            Horizontal::Right {
                right: viewport.client_width - host.right(),
            }
        } else {
            Horizontal::Left { left: host.left }
        };

        let space_above = host.top;
        let space_below = viewport.client_height - host.bottom();
        let (vertical, max_height) = if space_above > space_below {
            (Vertical::Above, space_above.min(max_height))
        } else {
            (
                Vertical::Below,
                (space_below - 2.0 * margin).min(max_height).max(0.0),
            )
        };

        let placement = Placement {
            horizontal,
            vertical,
            max_height,
        };
        log::debug!("[position] {:?}", placement);
        placement
    }
}
