//! Text widget for labels, optionally led by an icon.

use crate::icon::Icon;
use serde::{Deserialize, Serialize};
use sidebar_core::{
    widget::{AccessibleRole, FontWeight, LayoutResult, Message, TextStyle},
    Canvas, Color, Constraints, Event, Point, Rect, Size, TypeId, Widget,
};

/// Named font sizes shared across the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextSize {
    /// Section titles
    S1,
    /// Body text
    #[default]
    S2,
    /// Sub-headers and labels
    S3,
    /// Captions
    S4,
}

impl TextSize {
    /// Size in pixels.
    #[must_use]
    pub const fn pixels(&self) -> f32 {
        match self {
            Self::S1 => 18.0,
            Self::S2 => 16.0,
            Self::S3 => 14.0,
            Self::S4 => 12.0,
        }
    }
}

/// Text widget for displaying styled text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Text {
    /// Text content
    content: String,
    /// Text color
    color: Color,
    /// Font size in pixels
    font_size: f32,
    /// Font weight
    font_weight: FontWeight,
    /// Line height multiplier
    line_height: f32,
    /// Leading icon
    icon: Option<Icon>,
    /// Gap between icon and text
    icon_gap: f32,
    /// Test ID
    test_id_value: Option<String>,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
}

impl Text {
    /// Create new text widget.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            color: Color::BLACK,
            font_size: TextSize::S2.pixels(),
            font_weight: FontWeight::Normal,
            line_height: 1.2,
            icon: None,
            icon_gap: 4.0,
            test_id_value: None,
            bounds: Rect::default(),
        }
    }

    /// Set text color.
    #[must_use]
    pub const fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set font size in pixels.
    #[must_use]
    pub const fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Set font size from the named scale.
    #[must_use]
    pub const fn size(mut self, size: TextSize) -> Self {
        self.font_size = size.pixels();
        self
    }

    /// Set font weight.
    #[must_use]
    pub const fn font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = weight;
        self
    }

    /// Put an icon before the text.
    #[must_use]
    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Get the text content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the text color.
    #[must_use]
    pub const fn get_color(&self) -> Color {
        self.color
    }

    /// Get the leading icon.
    #[must_use]
    pub const fn get_icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    fn icon_extent(&self) -> f32 {
        self.icon
            .as_ref()
            .map_or(0.0, |icon| icon.get_size() + self.icon_gap)
    }

    /// Estimate text size (~0.6em per character, no wrapping).
    fn estimate_size(&self) -> Size {
        let char_width = self.font_size * 0.6;
        let line_height = self.font_size * self.line_height;
        let text_width = self.content.chars().count() as f32 * char_width;
        let icon_height = self.icon.as_ref().map_or(0.0, Icon::get_size);
        Size::new(
            self.icon_extent() + text_width,
            line_height.max(icon_height),
        )
    }
}

impl Widget for Text {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(self.estimate_size())
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let mid_y = self.bounds.y + self.bounds.height / 2.0;

        if let Some(icon) = &self.icon {
            let origin = Point::new(self.bounds.x, mid_y - icon.get_size() / 2.0);
            icon.paint_at(origin, canvas);
        }

        let style = TextStyle {
            size: self.font_size,
            color: self.color,
            weight: self.font_weight,
        };
        let text_top = mid_y - self.font_size * self.line_height / 2.0;
        canvas.draw_text(
            &self.content,
            Point::new(self.bounds.x + self.icon_extent(), text_top),
            &style,
        );
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
        Some(&self.content)
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Generic
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::IconKind;
    use sidebar_core::{DrawCommand, RecordingCanvas};

    #[test]
    fn test_text_new() {
        let text = Text::new("Hello");
        assert_eq!(text.content(), "Hello");
        assert_eq!(text.get_color(), Color::BLACK);
        assert!(text.get_icon().is_none());
    }

    #[test]
    fn test_text_size_scale() {
        assert_eq!(TextSize::default(), TextSize::S2);
        assert!(TextSize::S1.pixels() > TextSize::S2.pixels());
        assert!(TextSize::S3.pixels() > TextSize::S4.pixels());
        let text = Text::new("x").size(TextSize::S3);
        assert_eq!(text.font_size, 14.0);
    }

    #[test]
    fn test_text_measure_counts_chars() {
        let text = Text::new("abcd").font_size(10.0);
        let size = text.measure(Constraints::unbounded());
        assert!((size.width - 24.0).abs() < 1e-4);
        assert!((size.height - 12.0).abs() < 1e-4);

        let wide = Text::new("ééé").font_size(10.0);
        assert!((wide.measure(Constraints::unbounded()).width - 18.0).abs() < 1e-4);
    }

    #[test]
    fn test_text_measure_includes_icon() {
        let text = Text::new("ab")
            .font_size(10.0)
            .icon(Icon::new(IconKind::Wrench).size(16.0));
        let size = text.measure(Constraints::unbounded());
        assert!((size.width - 32.0).abs() < 1e-4);
        assert_eq!(size.height, 16.0);
    }

    #[test]
    fn test_text_measure_respects_constraints() {
        let text = Text::new("a long label that overflows").font_size(20.0);
        let size = text.measure(Constraints::loose(Size::new(50.0, 100.0)));
        assert_eq!(size.width, 50.0);
    }

    #[test]
    fn test_text_paint() {
        let mut text = Text::new("Configuration")
            .color(Color::WHITE)
            .font_weight(FontWeight::Medium);
        text.layout(Rect::new(0.0, 0.0, 200.0, 20.0));

        let mut canvas = RecordingCanvas::new();
        text.paint(&mut canvas);

        assert_eq!(canvas.texts(), vec!["Configuration"]);
        let style = canvas.text_style("Configuration").unwrap();
        assert_eq!(style.color, Color::WHITE);
        assert_eq!(style.weight, FontWeight::Medium);
    }

    #[test]
    fn test_text_paint_with_icon_offsets_text() {
        let mut text = Text::new("Configuration").icon(Icon::new(IconKind::Wrench).size(16.0));
        text.layout(Rect::new(10.0, 0.0, 200.0, 20.0));

        let mut canvas = RecordingCanvas::new();
        text.paint(&mut canvas);

        let position = canvas
            .commands()
            .iter()
            .find_map(|cmd| match cmd {
                DrawCommand::Text { position, .. } => Some(*position),
                _ => None,
            })
            .unwrap();
        assert_eq!(position.x, 30.0);
        assert!(canvas.command_count() > 1);
    }

    #[test]
    fn test_text_accessibility() {
        let text = Text::new("gpt-4").with_test_id("name");
        assert_eq!(text.accessible_name(), Some("gpt-4"));
        assert_eq!(Widget::test_id(&text), Some("name"));
        assert_eq!(text.accessible_role(), AccessibleRole::Generic);
    }
}
