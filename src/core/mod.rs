//! Core application logic: state, messages, update and the event loop

pub mod app;
pub mod events;
pub mod message;
pub mod state;
pub mod update;
