//! Test harness for driving widget trees.

use sidebar_core::{
    widget::Message, Constraints, Event, Key, MouseButton, RecordingCanvas, Rect, Widget,
};
use std::collections::VecDeque;

use crate::selector::Selector;

/// Test harness for interacting with widgets.
///
/// The root is measured and laid out in the viewport on creation, so every
/// widget has real bounds and pointer events land where a user would click.
pub struct Harness {
    /// Root widget being tested
    root: Box<dyn Widget>,
    /// Event queue for simulation
    event_queue: VecDeque<Event>,
    /// Current viewport
    viewport: Rect,
    /// Messages returned by the root
    messages: Vec<Message>,
}

impl Harness {
    /// Create a new harness with a root widget in a 1280×720 viewport.
    pub fn new(root: impl Widget + 'static) -> Self {
        let mut harness = Self {
            root: Box::new(root),
            event_queue: VecDeque::new(),
            viewport: Rect::new(0.0, 0.0, 1280.0, 720.0),
            messages: Vec::new(),
        };
        harness.relayout();
        harness
    }

    /// Set the viewport size and lay the root out again.
    #[must_use]
    pub fn viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport = Rect::new(0.0, 0.0, width, height);
        self.relayout();
        self
    }

    /// Measure and lay out the root within the viewport.
    pub fn relayout(&mut self) {
        let size = self
            .root
            .measure(Constraints::loose(self.viewport.size()));
        self.root
            .layout(Rect::new(self.viewport.x, self.viewport.y, size.width, size.height));
    }

    // === Event Simulation ===

    /// Simulate a left click at the centre of the matching widget.
    pub fn click(&mut self, selector: &str) -> &mut Self {
        if let Some(bounds) = self.bounds(selector) {
            let center = bounds.center();
            self.event_queue
                .push_back(Event::MouseMove { position: center });
            self.event_queue.push_back(Event::MouseDown {
                position: center,
                button: MouseButton::Left,
            });
            self.event_queue.push_back(Event::MouseUp {
                position: center,
                button: MouseButton::Left,
            });
            self.process_events();
        }
        self
    }

    /// Focus the matching widget and type `text` one character at a time.
    pub fn type_text(&mut self, selector: &str, text: &str) -> &mut Self {
        if self.focus(selector) {
            for c in text.chars() {
                self.event_queue.push_back(Event::TextInput {
                    text: c.to_string(),
                });
            }
            self.process_events();
        }
        self
    }

    /// Focus the matching widget and deliver `text` as a single input event.
    pub fn input(&mut self, selector: &str, text: &str) -> &mut Self {
        if self.focus(selector) {
            self.event_queue.push_back(Event::TextInput {
                text: text.to_string(),
            });
            self.process_events();
        }
        self
    }

    /// Simulate a key press.
    pub fn press_key(&mut self, key: Key) -> &mut Self {
        self.event_queue.push_back(Event::KeyDown { key });
        self.event_queue.push_back(Event::KeyUp { key });
        self.process_events();
        self
    }

    /// Move the pointer over the matching widget.
    pub fn hover(&mut self, selector: &str) -> &mut Self {
        if let Some(bounds) = self.bounds(selector) {
            self.event_queue.push_back(Event::MouseMove {
                position: bounds.center(),
            });
            self.process_events();
        }
        self
    }

    /// Move the pointer out of the root.
    pub fn unhover(&mut self) -> &mut Self {
        self.event_queue.push_back(Event::MouseLeave);
        self.process_events();
        self
    }

    /// Give keyboard focus to the first matching widget.
    ///
    /// Every other focusable widget receives `FocusOut`. Returns whether a
    /// widget matched.
    pub fn focus(&mut self, selector: &str) -> bool {
        let Ok(sel) = Selector::parse(selector) else {
            return false;
        };
        let mut found = false;
        move_focus(self.root.as_mut(), &sel, &mut found);
        found
    }

    // === Queries ===

    /// The root widget.
    #[must_use]
    pub fn root(&self) -> &dyn Widget {
        self.root.as_ref()
    }

    /// Query for a widget matching the selector.
    #[must_use]
    pub fn query(&self, selector: &str) -> Option<&dyn Widget> {
        let sel = Selector::parse(selector).ok()?;
        find_widget(self.root.as_ref(), &sel)
    }

    /// Query for all widgets matching the selector, in tree order.
    #[must_use]
    pub fn query_all(&self, selector: &str) -> Vec<&dyn Widget> {
        let Ok(sel) = Selector::parse(selector) else {
            return Vec::new();
        };
        let mut results = Vec::new();
        find_all_widgets(self.root.as_ref(), &sel, &mut results);
        results
    }

    /// Accessible name of the matching widget, or an empty string.
    #[must_use]
    pub fn text(&self, selector: &str) -> String {
        self.query(selector)
            .and_then(Widget::accessible_name)
            .map(str::to_string)
            .unwrap_or_default()
    }

    /// Laid-out bounds of the matching widget.
    #[must_use]
    pub fn bounds(&self, selector: &str) -> Option<Rect> {
        self.query(selector).map(Widget::bounds)
    }

    /// Check if a widget exists.
    #[must_use]
    pub fn exists(&self, selector: &str) -> bool {
        self.query(selector).is_some()
    }

    /// Paint the tree into a fresh recording canvas.
    #[must_use]
    pub fn paint(&self) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::new();
        self.root.paint(&mut canvas);
        canvas
    }

    /// Messages the root has returned so far.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Messages of type `T` the root has returned so far.
    #[must_use]
    pub fn messages_of<T: 'static>(&self) -> Vec<&T> {
        self.messages
            .iter()
            .filter_map(|msg| msg.downcast_ref::<T>())
            .collect()
    }

    /// Drain recorded messages.
    pub fn take_messages(&mut self) -> Vec<Message> {
        std::mem::take(&mut self.messages)
    }

    // === Assertions ===

    /// Assert that a widget exists.
    ///
    /// # Panics
    ///
    /// Panics if the widget does not exist.
    pub fn assert_exists(&self, selector: &str) -> &Self {
        assert!(
            self.exists(selector),
            "Expected widget matching '{selector}' to exist"
        );
        self
    }

    /// Assert that a widget does not exist.
    ///
    /// # Panics
    ///
    /// Panics if the widget exists.
    pub fn assert_not_exists(&self, selector: &str) -> &Self {
        assert!(
            !self.exists(selector),
            "Expected widget matching '{selector}' to not exist"
        );
        self
    }

    /// Assert that text matches exactly.
    ///
    /// # Panics
    ///
    /// Panics if the text does not match.
    pub fn assert_text(&self, selector: &str, expected: &str) -> &Self {
        let actual = self.text(selector);
        assert_eq!(
            actual, expected,
            "Expected text '{expected}' but got '{actual}' for '{selector}'"
        );
        self
    }

    /// Assert the count of matching widgets.
    ///
    /// # Panics
    ///
    /// Panics if the count does not match.
    pub fn assert_count(&self, selector: &str, expected: usize) -> &Self {
        let actual = self.query_all(selector).len();
        assert_eq!(
            actual, expected,
            "Expected {expected} widgets matching '{selector}' but found {actual}"
        );
        self
    }

    // === Internal ===

    fn process_events(&mut self) {
        while let Some(event) = self.event_queue.pop_front() {
            if let Some(msg) = self.root.event(&event) {
                self.messages.push(msg);
            }
        }
    }
}

fn find_widget<'a>(widget: &'a dyn Widget, selector: &Selector) -> Option<&'a dyn Widget> {
    if selector.matches(widget) {
        return Some(widget);
    }
    widget
        .children()
        .iter()
        .find_map(|child| find_widget(child.as_ref(), selector))
}

fn find_all_widgets<'a>(
    widget: &'a dyn Widget,
    selector: &Selector,
    results: &mut Vec<&'a dyn Widget>,
) {
    if selector.matches(widget) {
        results.push(widget);
    }
    for child in widget.children() {
        find_all_widgets(child.as_ref(), selector, results);
    }
}

fn move_focus(widget: &mut dyn Widget, selector: &Selector, found: &mut bool) {
    if !*found && selector.matches(widget) {
        *found = true;
        widget.event(&Event::FocusIn);
    } else if widget.is_focusable() {
        widget.event(&Event::FocusOut);
    }
    for child in widget.children_mut() {
        move_focus(child.as_mut(), selector, found);
    }
}
