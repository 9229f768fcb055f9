//! Interaction state machines for the Nail Art Studio site.
//!
//! Nothing in here touches the DOM. The wasm front-end reads element state,
//! asks these types what should change, and applies the answer.

pub mod booking;
pub mod chrome;
pub mod config;
pub mod dashboard;
pub mod gallery;
pub mod nav;
pub mod notify;
pub mod reveal;
pub mod submission;
pub mod theme;
pub mod validation;

pub use config::InteractionConfig;
