//! Minimal client-side task list with an event-driven state core.
//!
//! The crate keeps two ordered lists of tasks (completed and incomplete),
//! renders them into an in-memory document, and reacts to user actions by
//! re-rendering the affected regions.
//!
//! # Architecture
//!
//! - `bus`: publish/subscribe registry; synchronous, registration-order
//!   delivery with token-based unsubscribe
//! - `store`: owner of the task sequences; every mutation publishes one
//!   named event after the state change lands
//! - `commands`: UI-action entry points; raw text in, typed store calls out
//! - `view`: markup generation and event-driven region refresh
//! - `app`: wiring for a fully assembled application instance
//!
//! Control flow: a UI action invokes a store mutation, the mutation updates
//! the relevant sequence and publishes its event, and every subscribed view
//! repaints its region before the mutation call returns.

pub mod app;
pub mod bus;
pub mod commands;
pub mod store;
pub mod view;

#[cfg(test)]
mod tests;
