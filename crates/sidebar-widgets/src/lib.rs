//! Widgets for the model-selection sidebar.
//!
//! [`ModelCard`] is the centerpiece; the remaining modules are the data it
//! renders ([`ModelConfig`], [`ModelInfo`]) and the primitives it is built
//! from ([`Text`], [`Icon`], [`TextInput`]).

pub mod arg_map;
pub mod error;
pub mod icon;
pub mod model;
pub mod model_card;
pub mod numeric;
pub mod text;
pub mod text_input;
pub mod theme;

pub use arg_map::ArgMap;
pub use error::CatalogError;
pub use icon::{Icon, IconKind};
pub use model::{
    load_catalog, ArgValue, FieldSpec, FieldType, ModelConfig, ModelInfo, ModelInfoUpdate,
    UserArgs,
};
pub use model_card::{ModelCard, SelectFn, CONFIGURATION_LABEL};
pub use text::{Text, TextSize};
pub use text_input::{TextChanged, TextInput, TextSubmitted};
pub use theme::CardTheme;
