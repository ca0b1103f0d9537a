//! `TextInput` widget: a labeled single-line text field.

use serde::{Deserialize, Serialize};
use sidebar_core::{
    widget::{AccessibleRole, LayoutResult, Message, TextStyle},
    Canvas, Color, Constraints, Event, Key, Point, Rect, Size, TypeId, Widget,
};

/// Message emitted when text changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChanged {
    /// The new raw text value
    pub value: String,
}

/// Message emitted when Enter is pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSubmitted {
    /// The submitted text value
    pub value: String,
}

const LABEL_GAP: f32 = 4.0;

/// `TextInput` widget for text entry.
///
/// The cursor is tracked in characters, not bytes.
#[derive(Debug, Serialize, Deserialize)]
pub struct TextInput {
    /// Current text value
    value: String,
    /// Label drawn above the field
    label: Option<String>,
    /// Text style
    text_style: TextStyle,
    /// Label style
    label_style: TextStyle,
    /// Color of the empty-field placeholder
    placeholder_color: Color,
    /// Background color
    background_color: Color,
    /// Border color
    border_color: Color,
    /// Focused border color
    focus_border_color: Color,
    /// Padding inside the field
    padding: f32,
    /// Minimum width
    min_width: f32,
    /// Test ID
    test_id_value: Option<String>,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
    /// Whether focused
    #[serde(skip)]
    focused: bool,
    /// Cursor position (character index)
    #[serde(skip)]
    cursor: usize,
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}

impl TextInput {
    /// Create a new text input.
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: String::new(),
            label: None,
            text_style: TextStyle {
                size: 14.0,
                color: Color::rgb8(0x33, 0x41, 0x55),
                ..TextStyle::default()
            },
            label_style: TextStyle {
                size: 12.0,
                color: Color::rgb8(0x64, 0x74, 0x8b),
                ..TextStyle::default()
            },
            placeholder_color: Color::new(0.6, 0.6, 0.6, 1.0),
            background_color: Color::WHITE,
            border_color: Color::new(0.8, 0.8, 0.8, 1.0),
            focus_border_color: Color::rgb8(0x16, 0x65, 0x34),
            padding: 8.0,
            min_width: 100.0,
            test_id_value: None,
            bounds: Rect::default(),
            focused: false,
            cursor: 0,
        }
    }

    /// Set the current value.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self.cursor = self.char_len();
        self
    }

    /// Set the label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set text style.
    #[must_use]
    pub fn text_style(mut self, style: TextStyle) -> Self {
        self.text_style = style;
        self
    }

    /// Set border colors for idle and focused states.
    #[must_use]
    pub const fn border_colors(mut self, idle: Color, focused: Color) -> Self {
        self.border_color = idle;
        self.focus_border_color = focused;
        self
    }

    /// Set padding.
    #[must_use]
    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding.max(0.0);
        self
    }

    /// Set minimum width.
    #[must_use]
    pub fn min_width(mut self, width: f32) -> Self {
        self.min_width = width.max(0.0);
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Get current value.
    #[must_use]
    pub fn get_value(&self) -> &str {
        &self.value
    }

    /// Get the label.
    #[must_use]
    pub fn get_label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Get cursor position in characters.
    #[must_use]
    pub const fn cursor_position(&self) -> usize {
        self.cursor
    }

    /// Area of the editable field, below the label.
    #[must_use]
    pub fn field_bounds(&self) -> Rect {
        let offset = self.label_height();
        Rect::new(
            self.bounds.x,
            self.bounds.y + offset,
            self.bounds.width,
            (self.bounds.height - offset).max(0.0),
        )
    }

    fn label_height(&self) -> f32 {
        if self.label.is_some() {
            self.label_style.size.mul_add(1.2, LABEL_GAP)
        } else {
            0.0
        }
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(i, _)| i)
    }

    /// Insert text at cursor.
    fn insert_text(&mut self, text: &str) -> bool {
        let at = self.byte_offset(self.cursor);
        self.value.insert_str(at, text);
        self.cursor += text.chars().count();
        !text.is_empty()
    }

    /// Delete character before cursor.
    fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_offset(self.cursor);
        self.value.remove(at);
        true
    }

    /// Delete character at cursor.
    fn delete(&mut self) -> bool {
        if self.cursor >= self.char_len() {
            return false;
        }
        let at = self.byte_offset(self.cursor);
        self.value.remove(at);
        true
    }

    fn changed(&self) -> Option<Message> {
        Some(Box::new(TextChanged {
            value: self.value.clone(),
        }))
    }
}

impl Widget for TextInput {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let field_height = 2.0f32.mul_add(self.padding, self.text_style.size * 1.2);
        let width = self.min_width.max(constraints.min_width);
        constraints.constrain(Size::new(width, self.label_height() + field_height))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        if let Some(label) = &self.label {
            canvas.draw_text(label, self.bounds.origin(), &self.label_style);
        }

        let field = self.field_bounds();
        canvas.fill_rect(field, self.background_color);
        let border_color = if self.focused {
            self.focus_border_color
        } else {
            self.border_color
        };
        canvas.stroke_rect(field, border_color, 1.0);

        let position = Point::new(field.x + self.padding, field.y + self.padding);
        if self.value.is_empty() {
            let mut placeholder_style = self.text_style.clone();
            placeholder_style.color = self.placeholder_color;
            canvas.draw_text("", position, &placeholder_style);
        } else {
            canvas.draw_text(&self.value, position, &self.text_style);
        }
    }

    fn event(&mut self, event: &Event) -> Option<Message> {
        match event {
            Event::MouseDown { position, .. } => {
                let was_focused = self.focused;
                self.focused = self.bounds.contains_point(position);
                if self.focused && !was_focused {
                    self.cursor = self.char_len();
                }
            }
            Event::FocusIn => {
                if !self.focused {
                    self.cursor = self.char_len();
                }
                self.focused = true;
            }
            Event::FocusOut => {
                self.focused = false;
            }
            Event::TextInput { text } if self.focused => {
                if self.insert_text(text) {
                    return self.changed();
                }
            }
            Event::KeyDown { key } if self.focused => match key {
                Key::Backspace => {
                    if self.backspace() {
                        return self.changed();
                    }
                }
                Key::Delete => {
                    if self.delete() {
                        return self.changed();
                    }
                }
                Key::Left => self.cursor = self.cursor.saturating_sub(1),
                Key::Right => self.cursor = (self.cursor + 1).min(self.char_len()),
                Key::Home => self.cursor = 0,
                Key::End => self.cursor = self.char_len(),
                Key::Enter => {
                    return Some(Box::new(TextSubmitted {
                        value: self.value.clone(),
                    }));
                }
                Key::Escape | Key::Tab => self.focused = false,
            },
            _ => {}
        }

        None
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &[]
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut []
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn is_focusable(&self) -> bool {
        true
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn accessible_name(&self) -> Option<&str> {
        self.label.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::TextInput
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
