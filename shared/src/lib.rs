//! Platform-independent model of the accessible accordion.

pub mod error;
pub mod markup;
pub mod state;
pub mod types;

pub use error::AccordionError;
pub use markup::ItemAttrs;
pub use state::{toggle, AccordionController, Activation, ActivationKey};
pub use types::{AccordionConfig, Item, OpenIndex};
