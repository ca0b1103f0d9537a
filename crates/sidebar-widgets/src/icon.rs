//! Vector glyphs used by cards and labels.

use serde::{Deserialize, Serialize};
use sidebar_core::{
    widget::{AccessibleRole, LayoutResult, Message},
    Canvas, Color, Constraints, Event, Point, Rect, Size, TypeId, Widget,
};

/// Available glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconKind {
    /// Check mark
    Check,
    /// Wrench
    Wrench,
}

impl IconKind {
    /// Name announced to assistive technology.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Check => "check",
            Self::Wrench => "wrench",
        }
    }
}

/// Square icon painted from strokes in a 24-unit design grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Icon {
    kind: IconKind,
    size: f32,
    color: Color,
    stroke_width: f32,
    test_id_value: Option<String>,
    #[serde(skip)]
    bounds: Rect,
}

impl Icon {
    /// Create an icon at the default 24px size.
    #[must_use]
    pub fn new(kind: IconKind) -> Self {
        Self {
            kind,
            size: 24.0,
            color: Color::BLACK,
            stroke_width: 2.0,
            test_id_value: None,
            bounds: Rect::default(),
        }
    }

    /// Set the edge length in pixels.
    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size.max(0.0);
        self
    }

    /// Set the stroke color.
    #[must_use]
    pub const fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Glyph kind.
    #[must_use]
    pub const fn kind(&self) -> IconKind {
        self.kind
    }

    /// Edge length in pixels.
    #[must_use]
    pub const fn get_size(&self) -> f32 {
        self.size
    }

    /// Stroke color.
    #[must_use]
    pub const fn get_color(&self) -> Color {
        self.color
    }

    /// Map a point from the 24-unit grid into current bounds.
    fn grid(&self, x: f32, y: f32) -> Point {
        let scale = self.size / 24.0;
        Point::new(
            x.mul_add(scale, self.bounds.x),
            y.mul_add(scale, self.bounds.y),
        )
    }

    /// Paint at an explicit origin without a layout pass.
    pub(crate) fn paint_at(&self, origin: Point, canvas: &mut dyn Canvas) {
        let mut placed = self.clone();
        placed.bounds = Rect::new(origin.x, origin.y, self.size, self.size);
        placed.paint(canvas);
    }
}

impl Widget for Icon {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(Size::new(self.size, self.size))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let width = self.stroke_width * self.size / 24.0;
        match self.kind {
            IconKind::Check => {
                let points = [self.grid(20.0, 6.0), self.grid(9.0, 17.0), self.grid(4.0, 12.0)];
                canvas.draw_path(&points, self.color, width);
            }
            IconKind::Wrench => {
                // Handle, then the open jaw at the top right.
                canvas.draw_line(self.grid(4.0, 20.0), self.grid(13.0, 11.0), self.color, width);
                canvas.stroke_circle(
                    self.grid(16.5, 7.5),
                    4.5 * self.size / 24.0,
                    self.color,
                    width,
                );
                let jaw = [self.grid(15.0, 6.0), self.grid(18.0, 3.5), self.grid(20.5, 6.0), self.grid(18.0, 9.0)];
                canvas.draw_path(&jaw, self.color, width);
            }
        }
    }

    fn event(&mut self, _event: &Event) -> Option<Message> {
        None
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &[]
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut []
    }

    fn accessible_name(&self) -> Option<&str> {
        Some(self.kind.name())
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Image
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
