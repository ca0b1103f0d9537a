//! Testing harness for sidebar widgets.
//!
//! Drive a widget tree the way a user would and query it the way a DOM test
//! would:
//!
//! ```
//! use sidebar_core::{
//!     widget::{LayoutResult, Message},
//!     Canvas, Constraints, Event, Rect, Size, TypeId, Widget,
//! };
//! use sidebar_test::Harness;
//!
//! struct Label;
//!
//! impl Widget for Label {
//!     fn type_id(&self) -> TypeId { TypeId::of::<Self>() }
//!     fn measure(&self, c: Constraints) -> Size { c.constrain(Size::new(80.0, 20.0)) }
//!     fn layout(&mut self, b: Rect) -> LayoutResult { LayoutResult { size: b.size() } }
//!     fn paint(&self, _: &mut dyn Canvas) {}
//!     fn event(&mut self, _: &Event) -> Option<Message> { None }
//!     fn children(&self) -> &[Box<dyn Widget>] { &[] }
//!     fn children_mut(&mut self) -> &mut [Box<dyn Widget>] { &mut [] }
//!     fn accessible_name(&self) -> Option<&str> { Some("gpt-4") }
//! }
//!
//! let harness = Harness::new(Label);
//! harness.assert_exists("Label").assert_text("[aria-label='gpt-4']", "gpt-4");
//! ```

mod harness;
mod selector;

pub use harness::Harness;
pub use selector::{Selector, SelectorError, SelectorParser};
