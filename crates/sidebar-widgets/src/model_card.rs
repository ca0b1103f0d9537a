//! `ModelCard` widget: one selectable model in the settings sidebar.
//!
//! The card shows the model name, a "Configuration" section with one input
//! per editable argument, and a check mark when selected. It never changes
//! model data itself. Clicks and edits are proposed to the host through the
//! `select` callback as a [`ModelInfoUpdate`], which is also returned from
//! [`Widget::event`] as the card's message.

use crate::icon::{Icon, IconKind};
use crate::model::{ArgValue, FieldType, ModelConfig, ModelInfo, ModelInfoUpdate, UserArgs};
use crate::numeric::parse_float;
use crate::text::Text;
use crate::text_input::{TextChanged, TextInput};
use crate::theme::CardTheme;
use sidebar_core::{
    widget::{AccessibleRole, FontWeight, LayoutResult, Message},
    Canvas, Color, Constraints, Event, MouseButton, Rect, Size, TypeId, Widget,
};
use std::fmt;
use std::sync::Arc;

/// Callback receiving proposed model info.
pub type SelectFn = Arc<dyn Fn(ModelInfoUpdate) + Send + Sync>;

/// Header label shown above the argument inputs.
pub const CONFIGURATION_LABEL: &str = "Configuration";

/// Editable argument backing one input row.
#[derive(Debug, Clone)]
struct ArgRow {
    key: String,
    label: String,
    field_type: FieldType,
    /// Text currently in the input.
    text: String,
}

/// Selectable card for a single model.
pub struct ModelCard {
    model: ModelConfig,
    model_info: Option<ModelInfo>,
    is_selected: bool,
    select: SelectFn,
    theme: CardTheme,
    test_id_value: Option<String>,
    rows: Vec<ArgRow>,
    /// Name, optional header, one input per row, optional check.
    children: Vec<Box<dyn Widget>>,
    hovered: bool,
    /// A primary press landed inside and has not been released yet.
    pressed: bool,
    bounds: Rect,
}

impl fmt::Debug for ModelCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelCard")
            .field("model", &self.model.name)
            .field("is_selected", &self.is_selected)
            .field("hovered", &self.hovered)
            .field("rows", &self.rows)
            .finish_non_exhaustive()
    }
}

impl ModelCard {
    /// Create an unselected card without live info.
    #[must_use]
    pub fn new<F>(model: ModelConfig, select: F) -> Self
    where
        F: Fn(ModelInfoUpdate) + Send + Sync + 'static,
    {
        let mut card = Self {
            model,
            model_info: None,
            is_selected: false,
            select: Arc::new(select),
            theme: CardTheme::default(),
            test_id_value: None,
            rows: Vec::new(),
            children: Vec::new(),
            hovered: false,
            pressed: false,
            bounds: Rect::default(),
        };
        card.rebuild();
        card
    }

    /// Set the live info whose `userArgs` fill the inputs.
    #[must_use]
    pub fn model_info(mut self, info: impl Into<Option<ModelInfo>>) -> Self {
        self.model_info = info.into();
        self.rebuild();
        self
    }

    /// Set whether this card is the active model.
    #[must_use]
    pub fn selected(mut self, selected: bool) -> Self {
        self.is_selected = selected;
        self.rebuild();
        self
    }

    /// Set the theme.
    #[must_use]
    pub fn theme(mut self, theme: CardTheme) -> Self {
        self.theme = theme;
        self.rebuild();
        self
    }

    /// Share an existing callback.
    #[must_use]
    pub fn on_select(mut self, select: SelectFn) -> Self {
        self.select = select;
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// The model descriptor.
    #[must_use]
    pub const fn get_model(&self) -> &ModelConfig {
        &self.model
    }

    /// The live info, if any.
    #[must_use]
    pub const fn get_model_info(&self) -> Option<&ModelInfo> {
        self.model_info.as_ref()
    }

    /// Whether the card is selected.
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.is_selected
    }

    /// Whether the pointer is over the card.
    #[must_use]
    pub const fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Keys of the editable arguments, in display order.
    pub fn arg_keys(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|row| row.key.as_str())
    }

    /// Replace the live info after the host commits an update.
    ///
    /// A row is refreshed only when its text no longer reads as the committed
    /// value, so "0." stays while the host holds `0`. Refreshed rows keep
    /// their focus. Later edits merge against the new `userArgs`.
    pub fn set_model_info(&mut self, info: Option<ModelInfo>) {
        self.model_info = info;
        let offset = self.input_offset();
        for row in 0..self.rows.len() {
            let ArgRow { key, label, text, .. } = &self.rows[row];
            if shows_value(self.committed(key), text) {
                continue;
            }
            let index = offset + row;
            let mut input = self.arg_input(key, label);
            input.layout(self.children[index].bounds());
            if self.children[index].is_focused() {
                input.event(&Event::FocusIn);
            }
            self.rows[row].text = input.get_value().to_string();
            self.children[index] = Box::new(input);
        }
    }

    /// Change selection without rebuilding the inputs.
    pub fn set_selected(&mut self, selected: bool) {
        if self.is_selected == selected {
            return;
        }
        self.is_selected = selected;
        if selected {
            self.children.push(Box::new(self.check_icon()));
        } else {
            self.children.pop();
        }
        self.restyle();
        if self.bounds.width > 0.0 {
            self.layout(self.bounds);
        }
    }

    fn has_header(&self) -> bool {
        !self.rows.is_empty()
    }

    fn input_offset(&self) -> usize {
        1 + usize::from(self.has_header())
    }

    fn input_range(&self) -> std::ops::Range<usize> {
        let start = self.input_offset();
        start..start + self.rows.len()
    }

    /// Content children: everything but the trailing check.
    fn stacked_len(&self) -> usize {
        self.input_offset() + self.rows.len()
    }

    fn is_active(&self) -> bool {
        self.is_selected || self.hovered
    }

    fn text_color(&self) -> Color {
        if self.is_active() {
            self.theme.active_text
        } else {
            self.theme.idle_text
        }
    }

    fn name_text(&self) -> Text {
        Text::new(self.model.name.clone())
            .font_size(self.theme.name_size)
            .font_weight(FontWeight::Medium)
            .color(self.text_color())
            .with_test_id("model-name")
    }

    fn header_text(&self) -> Text {
        let color = self.text_color();
        Text::new(CONFIGURATION_LABEL)
            .font_size(self.theme.header_size)
            .font_weight(FontWeight::Medium)
            .color(color)
            .icon(
                Icon::new(IconKind::Wrench)
                    .size(self.theme.header_icon_size)
                    .color(color),
            )
            .with_test_id("model-config-header")
    }

    fn check_icon(&self) -> Icon {
        Icon::new(IconKind::Check)
            .size(self.theme.check_size)
            .color(self.theme.check)
            .with_test_id("model-selected")
    }

    fn committed(&self, key: &str) -> Option<&ArgValue> {
        self.model_info
            .as_ref()
            .and_then(|info| info.user_args.get(key))
    }

    fn arg_input(&self, key: &str, label: &str) -> TextInput {
        let value = self.committed(key).map(ArgValue::display).unwrap_or_default();
        TextInput::new()
            .label(label)
            .value(value)
            .border_colors(self.theme.idle_border, self.theme.active_border)
            .with_test_id(format!("arg-{key}"))
    }

    /// Build every child from the current inputs.
    fn rebuild(&mut self) {
        self.rows = self
            .model
            .editable_args()
            .map(|(key, spec)| ArgRow {
                key: key.to_string(),
                label: spec.display_label(key).to_string(),
                field_type: spec.field_type,
                text: String::new(),
            })
            .collect();

        let mut children: Vec<Box<dyn Widget>> = vec![Box::new(self.name_text())];
        if self.has_header() {
            children.push(Box::new(self.header_text()));
        }
        let inputs: Vec<TextInput> = self
            .rows
            .iter()
            .map(|row| self.arg_input(&row.key, &row.label))
            .collect();
        for (row, input) in self.rows.iter_mut().zip(inputs) {
            row.text = input.get_value().to_string();
            children.push(Box::new(input));
        }
        if self.is_selected {
            children.push(Box::new(self.check_icon()));
        }
        self.children = children;
    }

    /// Recolor the name and header, keeping input rows (and their focus).
    fn restyle(&mut self) {
        let mut name = self.name_text();
        name.layout(self.children[0].bounds());
        self.children[0] = Box::new(name);

        if self.has_header() {
            let mut header = self.header_text();
            header.layout(self.children[1].bounds());
            self.children[1] = Box::new(header);
        }
    }

    fn set_hovered(&mut self, hovered: bool) {
        if self.hovered != hovered {
            self.hovered = hovered;
            self.restyle();
        }
    }

    fn current_args(&self) -> UserArgs {
        self.model_info
            .as_ref()
            .map(|info| info.user_args.clone())
            .unwrap_or_default()
    }

    fn propose(&self, user_args: UserArgs, reason: &'static str, key: Option<&str>) -> Message {
        tracing::debug!(
            model = %self.model.name,
            reason,
            key = key.unwrap_or_default(),
            args = user_args.len(),
            "select"
        );
        let update = ModelInfoUpdate { user_args };
        (self.select)(update.clone());
        Box::new(update)
    }

    /// Convert a raw input value and merge it into the current args.
    fn edit(&self, row: usize, raw: String) -> Message {
        let ArgRow { key, field_type, .. } = &self.rows[row];
        let value = match field_type {
            FieldType::Number => ArgValue::Number(parse_float(&raw)),
            FieldType::Text => ArgValue::Text(raw),
        };
        self.propose(
            self.current_args().with(key.as_str(), value),
            "edit",
            Some(key.as_str()),
        )
    }

    fn route_to_inputs(&mut self, event: &Event) -> Option<Message> {
        let offset = self.input_offset();
        let mut changed = None;
        for index in self.input_range() {
            if let Some(msg) = self.children[index].event(event) {
                if let Ok(text) = msg.downcast::<TextChanged>() {
                    changed = Some((index - offset, text.value));
                    break;
                }
            }
        }
        let (row, value) = changed?;
        self.rows[row].text.clone_from(&value);
        Some(self.edit(row, value))
    }

    fn measure_stack(&self, content_width: f32) -> Vec<Size> {
        let constraints = Constraints::unbounded().with_max_width(content_width);
        self.children[..self.stacked_len()]
            .iter()
            .map(|child| child.measure(constraints))
            .collect()
    }

    fn stack_height(&self, sizes: &[Size]) -> f32 {
        let mut height = 0.0;
        for (index, size) in sizes.iter().enumerate() {
            if index == 1 && self.has_header() {
                height += self.theme.header_gap;
            } else if index > 0 {
                height += self.theme.spacing;
            }
            height += size.height;
        }
        height
    }

    fn trailing_extent(&self) -> f32 {
        if self.is_selected {
            self.theme.check_size + self.theme.spacing
        } else {
            0.0
        }
    }
}

/// Whether `text` reads as the committed value.
#[allow(clippy::float_cmp)]
fn shows_value(committed: Option<&ArgValue>, text: &str) -> bool {
    match committed {
        None => text.is_empty(),
        Some(ArgValue::Text(value)) => value == text,
        Some(ArgValue::Number(value)) => {
            let parsed = parse_float(text);
            parsed == *value || (parsed.is_nan() && value.is_nan())
        }
    }
}

impl Widget for ModelCard {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let chrome = 2.0f32.mul_add(self.theme.padding, self.trailing_extent());
        let width = if constraints.has_bounded_width() {
            constraints.max_width
        } else {
            let widest = self
                .measure_stack(f32::INFINITY)
                .iter()
                .fold(0.0f32, |acc, size| acc.max(size.width));
            widest + chrome
        };
        let sizes = self.measure_stack((width - chrome).max(0.0));
        let height = 2.0f32.mul_add(self.theme.padding, self.stack_height(&sizes));
        constraints.constrain(Size::new(width, height.max(self.theme.min_height)))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        let padding = self.theme.padding;
        let content_width = (bounds.width - 2.0f32.mul_add(padding, self.trailing_extent())).max(0.0);
        let sizes = self.measure_stack(content_width);

        let x = bounds.x + padding;
        let mut y = bounds.y + padding;
        for (index, size) in sizes.iter().enumerate() {
            if index == 1 && self.has_header() {
                y += self.theme.header_gap;
            } else if index > 0 {
                y += self.theme.spacing;
            }
            self.children[index].layout(Rect::new(x, y, content_width, size.height));
            y += size.height;
        }

        if self.is_selected {
            let size = self.theme.check_size;
            let check = Rect::new(
                bounds.right() - padding - size,
                bounds.y + (bounds.height - size) / 2.0,
                size,
                size,
            );
            if let Some(icon) = self.children.last_mut() {
                icon.layout(check);
            }
        }

        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let theme = &self.theme;
        if self.is_selected {
            canvas.fill_rect(self.bounds.translate(0.0, 1.0), theme.shadow);
        } else {
            canvas.fill_rect(self.bounds, theme.idle_background);
        }
        let border = if self.is_active() {
            theme.active_border
        } else {
            theme.idle_border
        };
        canvas.stroke_rect(self.bounds, border, theme.border_width);

        for child in &self.children {
            child.paint(canvas);
        }
    }

    fn event(&mut self, event: &Event) -> Option<Message> {
        match event {
            Event::MouseEnter => {
                self.set_hovered(true);
                None
            }
            Event::MouseLeave => {
                self.set_hovered(false);
                None
            }
            Event::MouseMove { position } => {
                let inside = self.bounds.contains_point(position);
                self.set_hovered(inside);
                None
            }
            Event::MouseDown { position, button } => {
                // Inputs see every press so they can take or drop focus.
                for index in self.input_range() {
                    self.children[index].event(event);
                }
                if *button == MouseButton::Left {
                    self.pressed = self.bounds.contains_point(position);
                    if self.pressed {
                        tracing::trace!(model = %self.model.name, "card pressed");
                    }
                }
                None
            }
            Event::MouseUp {
                position,
                button: MouseButton::Left,
            } => {
                let pressed = std::mem::take(&mut self.pressed);
                if pressed && self.bounds.contains_point(position) {
                    Some(self.propose(self.current_args(), "click", None))
                } else {
                    None
                }
            }
            _ => self.route_to_inputs(event),
        }
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut self.children
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn accessible_name(&self) -> Option<&str> {
        Some(&self.model.name)
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Button
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
    use crate::model::FieldSpec;
    use sidebar_core::{DrawCommand, Key, Point, RecordingCanvas};
    use std::sync::Mutex;

    type Calls = Arc<Mutex<Vec<ModelInfoUpdate>>>;

    fn recorder() -> (Calls, impl Fn(ModelInfoUpdate) + Send + Sync + 'static) {
        let calls: Calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        (calls, move |update| sink.lock().unwrap().push(update))
    }

    fn llama() -> ModelConfig {
        ModelConfig::new("llama-3")
            .arg("temperature", FieldSpec::number().label("Temperature"))
            .arg("seed", FieldSpec::number().editable(false))
            .arg("stop", FieldSpec::text())
    }

    fn laid_out(card: ModelCard) -> ModelCard {
        let mut card = card;
        let size = card.measure(Constraints::loose(Size::new(300.0, 600.0)));
        card.layout(Rect::from_size(size));
        card
    }

    fn press(at: Point) -> Event {
        Event::MouseDown {
            position: at,
            button: MouseButton::Left,
        }
    }

    fn release(at: Point) -> Event {
        Event::MouseUp {
            position: at,
            button: MouseButton::Left,
        }
    }

    fn click(card: &mut ModelCard, at: Point) -> Option<Message> {
        card.event(&press(at));
        card.event(&release(at))
    }

    fn painted(card: &ModelCard) -> Vec<String> {
        let mut canvas = RecordingCanvas::new();
        card.paint(&mut canvas);
        canvas.texts().into_iter().map(str::to_string).collect()
    }

    #[test]
    fn test_children_without_editable_args() {
        let (_, select) = recorder();
        let card = ModelCard::new(ModelConfig::new("plain"), select);
        assert_eq!(card.children().len(), 1);
        assert_eq!(card.arg_keys().count(), 0);
        assert_eq!(card.children()[0].accessible_name(), Some("plain"));
    }

    #[test]
    fn test_children_with_editable_args() {
        let (_, select) = recorder();
        let card = ModelCard::new(llama(), select).selected(true);
        let names: Vec<_> = card
            .children()
            .iter()
            .map(|c| c.accessible_name().unwrap_or_default())
            .collect();
        assert_eq!(
            names,
            vec!["llama-3", CONFIGURATION_LABEL, "Temperature", "stop", "check"]
        );
        assert_eq!(card.arg_keys().collect::<Vec<_>>(), vec!["temperature", "stop"]);
    }

    #[test]
    fn test_input_values_from_user_args() {
        let (_, select) = recorder();
        let info = ModelInfo::new("meta", "llama-3").user_arg("temperature", 0.7);
        let card = ModelCard::new(llama(), select).model_info(info);
        let temperature = card.children()[2].accessible_name();
        assert_eq!(temperature, Some("Temperature"));

        let mut canvas = RecordingCanvas::new();
        laid_out(card).paint(&mut canvas);
        assert!(canvas.texts().contains(&"0.7"));
    }

    #[test]
    fn test_click_proposes_current_args() {
        let (calls, select) = recorder();
        let info = ModelInfo::new("meta", "llama-3").user_arg("stop", "###");
        let mut card = laid_out(ModelCard::new(llama(), select).model_info(info.clone()));

        assert!(card.event(&press(Point::new(2.0, 2.0))).is_none());
        assert!(calls.lock().unwrap().is_empty());

        let msg = card.event(&release(Point::new(3.0, 3.0))).unwrap();
        let update = msg.downcast::<ModelInfoUpdate>().unwrap();
        assert_eq!(update.user_args, info.user_args);
        assert_eq!(calls.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_release_outside_does_not_select() {
        let (calls, select) = recorder();
        let mut card = laid_out(ModelCard::new(llama(), select));
        card.event(&press(Point::new(2.0, 2.0)));
        assert!(card.event(&release(Point::new(900.0, 900.0))).is_none());

        // The press was consumed; a stray release inside does not click.
        assert!(card.event(&release(Point::new(2.0, 2.0))).is_none());
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_release_inside_after_outside_press_does_not_select() {
        let (calls, select) = recorder();
        let mut card = laid_out(ModelCard::new(llama(), select));
        card.event(&press(Point::new(900.0, 900.0)));
        assert!(card.event(&release(Point::new(2.0, 2.0))).is_none());
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_click_outside_does_nothing() {
        let (calls, select) = recorder();
        let mut card = laid_out(ModelCard::new(llama(), select));
        assert!(click(&mut card, Point::new(900.0, 900.0)).is_none());
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_right_click_does_not_select() {
        let (calls, select) = recorder();
        let mut card = laid_out(ModelCard::new(llama(), select));
        let at = Point::new(2.0, 2.0);
        card.event(&Event::MouseDown {
            position: at,
            button: MouseButton::Right,
        });
        let msg = card.event(&Event::MouseUp {
            position: at,
            button: MouseButton::Right,
        });
        assert!(msg.is_none());
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_edit_text_field_merges() {
        let (calls, select) = recorder();
        let info = ModelInfo::new("meta", "llama-3")
            .user_arg("temperature", 0.2)
            .user_arg("stop", "x");
        let mut card = laid_out(ModelCard::new(llama(), select).model_info(info));

        let stop = card.children()[3].bounds().center();
        card.event(&press(stop));
        card.event(&Event::KeyDown {
            key: Key::Backspace,
        });

        let calls = calls.lock().unwrap();
        let last = calls.last().unwrap();
        assert_eq!(last.user_args.get("stop"), Some(&ArgValue::Text(String::new())));
        assert_eq!(last.user_args.get("temperature"), Some(&ArgValue::Number(0.2)));
        assert_eq!(last.user_args.keys().collect::<Vec<_>>(), vec!["temperature", "stop"]);
    }

    #[test]
    fn test_edit_number_field_parses() {
        let (calls, select) = recorder();
        let mut card = laid_out(ModelCard::new(llama(), select));
        let field = card.children()[2].bounds().center();
        card.event(&press(field));
        let msg = card
            .event(&Event::TextInput {
                text: "1.5".to_string(),
            })
            .unwrap();

        let update = msg.downcast::<ModelInfoUpdate>().unwrap();
        assert_eq!(update.user_args.get("temperature"), Some(&ArgValue::Number(1.5)));
        assert_eq!(update.user_args.len(), 1);
        assert_eq!(calls.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_hover_recolors_name_and_border() {
        let (_, select) = recorder();
        let theme = CardTheme::default();
        let mut card = laid_out(ModelCard::new(llama(), select));

        let mut canvas = RecordingCanvas::new();
        card.paint(&mut canvas);
        assert_eq!(canvas.text_style("llama-3").unwrap().color, theme.idle_text);
        assert_eq!(canvas.stroke_colors()[0], theme.idle_border);

        card.event(&Event::MouseMove {
            position: Point::new(5.0, 5.0),
        });
        assert!(card.is_hovered());
        canvas.clear();
        card.paint(&mut canvas);
        assert_eq!(canvas.text_style("llama-3").unwrap().color, theme.active_text);
        assert_eq!(canvas.stroke_colors()[0], theme.active_border);

        card.event(&Event::MouseLeave);
        assert!(!card.is_hovered());
    }

    #[test]
    fn test_hover_keeps_input_focus() {
        let (_, select) = recorder();
        let mut card = laid_out(ModelCard::new(llama(), select));
        let field = card.children()[2].bounds().center();
        card.event(&press(field));
        card.event(&Event::MouseLeave);

        let msg = card.event(&Event::TextInput {
            text: "2".to_string(),
        });
        assert!(msg.is_some());
    }

    #[test]
    fn test_selected_paints_shadow_not_fill() {
        let (_, select) = recorder();
        let theme = CardTheme::default();
        let card = laid_out(ModelCard::new(ModelConfig::new("gpt-4"), select).selected(true));

        let mut canvas = RecordingCanvas::new();
        card.paint(&mut canvas);
        let fills: Vec<Color> = canvas
            .commands()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::FillRect { color, .. } => Some(*color),
                _ => None,
            })
            .collect();
        assert_eq!(fills, vec![theme.shadow]);
        assert_eq!(canvas.text_style("gpt-4").unwrap().color, theme.active_text);
    }

    #[test]
    fn test_check_sits_at_trailing_edge() {
        let (_, select) = recorder();
        let card = laid_out(ModelCard::new(ModelConfig::new("gpt-4"), select).selected(true));
        let check = card.children().last().unwrap();
        assert_eq!(check.accessible_name(), Some("check"));
        let bounds = check.bounds();
        assert_eq!(bounds.right(), card.bounds().right() - 8.0);
        assert!(bounds.x > card.children()[0].bounds().right());
    }

    #[test]
    fn test_set_selected_toggles_check() {
        let (_, select) = recorder();
        let mut card = laid_out(ModelCard::new(llama(), select));
        let count = card.children().len();

        card.set_selected(true);
        assert_eq!(card.children().len(), count + 1);
        assert!(card.children().last().unwrap().bounds().width > 0.0);

        card.set_selected(true);
        assert_eq!(card.children().len(), count + 1);

        card.set_selected(false);
        assert_eq!(card.children().len(), count);
    }

    #[test]
    fn test_set_model_info_changes_merge_base() {
        let (calls, select) = recorder();
        let mut card = laid_out(ModelCard::new(llama(), select));
        card.set_model_info(Some(ModelInfo::new("meta", "llama-3").user_arg("seed", 7.0)));
        click(&mut card, Point::new(1.0, 1.0));

        let calls = calls.lock().unwrap();
        assert_eq!(calls[0].user_args.get("seed"), Some(&ArgValue::Number(7.0)));
    }

    #[test]
    fn test_set_model_info_refreshes_inputs() {
        let (_, select) = recorder();
        let info = ModelInfo::new("meta", "llama-3").user_arg("temperature", 0.7);
        let mut card = laid_out(ModelCard::new(llama(), select).model_info(info));
        assert!(painted(&card).contains(&"0.7".to_string()));

        card.set_model_info(Some(
            ModelInfo::new("meta", "llama-3")
                .user_arg("temperature", 0.9)
                .user_arg("stop", "END"),
        ));
        let texts = painted(&card);
        assert!(texts.contains(&"0.9".to_string()));
        assert!(texts.contains(&"END".to_string()));
        assert!(!texts.contains(&"0.7".to_string()));

        card.set_model_info(None);
        assert_eq!(
            painted(&card),
            vec!["llama-3", CONFIGURATION_LABEL, "Temperature", "", "stop", ""]
        );
    }

    #[test]
    fn test_set_model_info_keeps_text_that_reads_as_committed() {
        let (calls, select) = recorder();
        let mut card = laid_out(ModelCard::new(llama(), select));
        let field = card.children()[2].bounds().center();
        card.event(&press(field));
        card.event(&Event::TextInput {
            text: "0.".to_string(),
        });
        let update = calls.lock().unwrap().last().cloned().unwrap();
        assert_eq!(update.user_args.get("temperature"), Some(&ArgValue::Number(0.0)));

        card.set_model_info(Some(ModelInfo {
            user_args: update.user_args,
            ..ModelInfo::new("meta", "llama-3")
        }));
        assert!(painted(&card).contains(&"0.".to_string()));

        let msg = card
            .event(&Event::TextInput {
                text: "5".to_string(),
            })
            .unwrap();
        let update = msg.downcast::<ModelInfoUpdate>().unwrap();
        assert_eq!(update.user_args.get("temperature"), Some(&ArgValue::Number(0.5)));
    }

    #[test]
    fn test_set_model_info_refresh_keeps_focus() {
        let (_, select) = recorder();
        let mut card = laid_out(ModelCard::new(llama(), select));
        let field = card.children()[3].bounds().center();
        card.event(&press(field));
        assert!(card.children()[3].is_focused());

        card.set_model_info(Some(ModelInfo::new("meta", "llama-3").user_arg("stop", "ab")));
        assert!(card.children()[3].is_focused());
        assert_eq!(card.children()[3].bounds().center(), field);

        let msg = card
            .event(&Event::TextInput {
                text: "c".to_string(),
            })
            .unwrap();
        let update = msg.downcast::<ModelInfoUpdate>().unwrap();
        assert_eq!(update.user_args.get("stop"), Some(&ArgValue::from("abc")));
    }

    #[test]
    fn test_shows_value() {
        assert!(shows_value(None, ""));
        assert!(!shows_value(None, "1"));
        assert!(shows_value(Some(&ArgValue::from("x")), "x"));
        assert!(shows_value(Some(&ArgValue::Number(0.0)), "0."));
        assert!(shows_value(Some(&ArgValue::Number(f64::NAN)), "abc"));
        assert!(!shows_value(Some(&ArgValue::Number(0.9)), "0.7"));
    }

    #[test]
    fn test_measure_min_height() {
        let (_, select) = recorder();
        let card = ModelCard::new(ModelConfig::new("a"), select);
        let size = card.measure(Constraints::loose(Size::new(200.0, 400.0)));
        assert_eq!(size, Size::new(200.0, 50.0));
    }

    #[test]
    fn test_measure_grows_with_rows() {
        let (_, select) = recorder();
        let plain = ModelCard::new(ModelConfig::new("a"), select);
        let (_, select) = recorder();
        let configured = ModelCard::new(llama(), select);
        let c = Constraints::loose(Size::new(200.0, 1000.0));
        assert!(configured.measure(c).height > plain.measure(c).height);
    }

    #[test]
    fn test_accessibility() {
        let (_, select) = recorder();
        let card = ModelCard::new(ModelConfig::new("gpt-4"), select).with_test_id("card-gpt-4");
        assert_eq!(card.accessible_name(), Some("gpt-4"));
        assert_eq!(card.accessible_role(), AccessibleRole::Button);
        assert!(card.is_interactive());
        assert_eq!(Widget::test_id(&card), Some("card-gpt-4"));
        assert!(format!("{card:?}").contains("gpt-4"));
    }
}
