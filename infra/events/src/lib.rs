//! # Event Bus
//!
//! A type-safe, asynchronous event bus connecting the interaction cores
//! to the presentation shell.
//!
//! ## Overview
//!
//! The cores (gallery, carousel, scroll) never talk to the UI directly;
//! they publish values here and the shell subscribes. Two channel kinds
//! cover both needs: `watch` for observable values where only the latest
//! matters (scroll progress, active card), and `broadcast` for discrete
//! notifications (selection, hover).
//!
//! ## Features
//!
//! * **Type-Safe**: Events are identified by their Rust type.
//! * **Channel choice**: Broadcast (fan-out) or Watch (the latest value).
//! * **Cheap**: `FxHashMap` + `parking_lot::RwLock`, `Arc`-shared payloads.
//! * **Async Ready**: Built on top of `tokio::sync`.
//!
//! # Example
//!
//! ```rust
//! use arkiv_event_bus::{EventBus, EventReceiverExt, EventBusError};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct ActiveCardChanged { index: usize }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), EventBusError> {
//!     let bus = EventBus::new();
//!
//!     // Default broadcast channel.
//!     let mut rx = bus.subscribe::<ActiveCardChanged>()?;
//!     bus.publish(ActiveCardChanged { index: 2 })?;
//!
//!     if let Ok(event) = rx.recv().await {
//!         assert_eq!(event.index, 2);
//!     }
//!     Ok(())
//! }
//! ```

mod bus;
mod error;
mod receiver;

pub use bus::{ChannelKind, Event, EventBus};
pub use error::{EventBusError, EventBusErrorExt};
pub use receiver::EventReceiverExt;
