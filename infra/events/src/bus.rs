use crate::error::EventBusError;
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::any::{Any, TypeId};
use std::sync::Arc;
use tokio::sync::{broadcast, watch};
use tracing::{trace, warn};

/// A safe default for broadcast buffers. Interaction events are small and
/// frequent; 128 absorbs a burst of pointer/scroll notifications without lag.
const DEFAULT_CAPACITY: usize = 128;
const MIN_CAPACITY: usize = 1;

/// Supported channel kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    /// Broadcast (fan-out) semantics for discrete notifications.
    Broadcast { capacity: usize },
    /// Watch (latest-value) semantics for observable values.
    Watch,
}

/// Marker trait for types that can be sent across the [`EventBus`].
///
/// Any type that is `Send + Sync + 'static` automatically implements this trait.
pub trait Event: Any + Send + Sync + 'static {}
impl<T: Any + Send + Sync + 'static> Event for T {}

#[derive(Debug)]
struct ChannelState {
    kind: ChannelKind,
    sender: Box<dyn Any + Send + Sync>,
}

enum ChannelHandle<T> {
    Broadcast(broadcast::Sender<Arc<T>>),
    Watch(watch::Sender<Arc<T>>),
}

impl<T: Event> ChannelHandle<T> {
    fn from_state(kind: ChannelKind, state: &ChannelState) -> Result<Self, EventBusError> {
        match kind {
            ChannelKind::Broadcast { .. } => {
                let sender =
                    state.sender.downcast_ref::<broadcast::Sender<Arc<T>>>().ok_or_else(|| {
                        EventBusError::TypeMismatch {
                            message: std::any::type_name::<T>().into(),
                            context: Some("Unexpected event type".into()),
                        }
                    })?;
                Ok(Self::Broadcast(sender.clone()))
            },
            ChannelKind::Watch => {
                let sender =
                    state.sender.downcast_ref::<watch::Sender<Arc<T>>>().ok_or_else(|| {
                        EventBusError::TypeMismatch {
                            message: std::any::type_name::<T>().into(),
                            context: Some("Unexpected event type".into()),
                        }
                    })?;
                Ok(Self::Watch(sender.clone()))
            },
        }
    }
}

/// A thread-safe event bus managing channels indexed by [`TypeId`] of the event.
///
/// One bus instance is owned by the root view and shared (cloned) into every
/// section that needs to observe core state.
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    channels: Arc<RwLock<FxHashMap<TypeId, ChannelState>>>,
}

impl EventBus {
    /// Creates a new, empty `EventBus`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes to an event of type `T` using broadcast with default capacity.
    ///
    /// # Errors
    /// Returns [`EventBusError::ChannelKindMismatch`] if a different channel kind
    /// was already registered for `T`.
    ///
    /// # Examples
    /// ```rust
    /// use arkiv_event_bus::{EventBus, EventReceiverExt};
    ///
    /// #[derive(Clone, Debug, PartialEq)]
    /// struct CardSelected(usize);
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() -> Result<(), arkiv_event_bus::EventBusError> {
    /// let bus = EventBus::new();
    /// let mut rx = bus.subscribe::<CardSelected>()?;
    /// bus.publish(CardSelected(1))?;
    /// assert_eq!(rx.recv().await.unwrap().0, 1);
    /// # Ok(())
    /// # }
    /// ```
    pub fn subscribe<T: Event>(&self) -> Result<broadcast::Receiver<Arc<T>>, EventBusError> {
        self.subscribe_with_capacity::<T>(DEFAULT_CAPACITY)
    }

    /// Subscribes to an event of type `T` with a specific broadcast buffer capacity.
    ///
    /// # Errors
    /// Returns [`EventBusError::ChannelKindMismatch`] if a different channel kind
    /// was already registered for `T`, or [`EventBusError::InvalidCapacity`] if
    /// `capacity` is zero.
    pub fn subscribe_with_capacity<T: Event>(
        &self,
        capacity: usize,
    ) -> Result<broadcast::Receiver<Arc<T>>, EventBusError> {
        let capacity = validate_capacity(capacity)?;
        let sender = self.ensure_channel::<T>(ChannelKind::Broadcast { capacity }, None)?;
        match sender {
            ChannelHandle::Broadcast(tx) => Ok(tx.subscribe()),
            ChannelHandle::Watch(_) => Err(EventBusError::TypeMismatch {
                message: std::any::type_name::<T>().into(),
                context: Some("Unexpected event type".into()),
            }),
        }
    }

    /// Subscribe to a watch channel (latest-value semantics). Initializes with
    /// the provided value if absent.
    ///
    /// # Errors
    /// Returns [`EventBusError::ChannelKindMismatch`] if a different channel kind
    /// was already registered for `T`.
    ///
    /// # Examples
    /// ```rust
    /// use arkiv_event_bus::EventBus;
    ///
    /// #[derive(Clone, Debug, PartialEq)]
    /// struct ScrollProgressChanged(f64);
    ///
    /// # fn main() -> Result<(), arkiv_event_bus::EventBusError> {
    /// let bus = EventBus::new();
    /// let rx = bus.subscribe_watch::<ScrollProgressChanged>(ScrollProgressChanged(0.0))?;
    /// assert_eq!(rx.borrow().0, 0.0);
    /// # Ok(())
    /// # }
    /// ```
    pub fn subscribe_watch<T: Event>(
        &self,
        initial: T,
    ) -> Result<watch::Receiver<Arc<T>>, EventBusError> {
        let sender = self.ensure_channel::<T>(ChannelKind::Watch, Some(Arc::new(initial)))?;
        match sender {
            ChannelHandle::Watch(tx) => Ok(tx.subscribe()),
            ChannelHandle::Broadcast(_) => Err(EventBusError::TypeMismatch {
                message: std::any::type_name::<T>().into(),
                context: Some("Unexpected event type".into()),
            }),
        }
    }

    /// Publishes an event instance via broadcast.
    ///
    /// Returns the number of receivers the event reached; an event with no
    /// subscribers is dropped quietly, which is normal during view teardown.
    ///
    /// # Errors
    /// Returns [`EventBusError::ChannelKindMismatch`] if a different channel kind
    /// was already registered for `T`.
    pub fn publish<T: Event>(&self, event: T) -> Result<usize, EventBusError> {
        self.publish_arc(Arc::new(event))
    }

    /// Publishes a shared event instance via broadcast without re-wrapping.
    ///
    /// # Errors
    /// Returns [`EventBusError::ChannelKindMismatch`] if a different channel kind
    /// was already registered for `T`.
    pub fn publish_arc<T: Event>(&self, event: Arc<T>) -> Result<usize, EventBusError> {
        let sender =
            self.ensure_channel::<T>(ChannelKind::Broadcast { capacity: DEFAULT_CAPACITY }, None)?;
        let sender = match sender {
            ChannelHandle::Broadcast(tx) => tx,
            ChannelHandle::Watch(_) => {
                return Err(EventBusError::TypeMismatch {
                    message: std::any::type_name::<T>().into(),
                    context: Some("Unexpected event type".into()),
                });
            },
        };

        sender.send(event).map_or_else(
            |_| {
                trace!(event = std::any::type_name::<T>(), "Event dropped: no active subscribers");
                Ok(0)
            },
            |count| {
                trace!(event = std::any::type_name::<T>(), count, "Event dispatched");
                Ok(count)
            },
        )
    }

    /// Publishes to a watch channel (latest-value semantics). Creates a channel if missing.
    ///
    /// # Errors
    /// Returns [`EventBusError::ChannelKindMismatch`] if a different channel kind
    /// was already registered for `T`.
    ///
    /// # Examples
    /// ```rust
    /// use arkiv_event_bus::EventBus;
    ///
    /// #[derive(Clone, Debug, PartialEq)]
    /// struct ScrollProgressChanged(f64);
    ///
    /// # fn main() -> Result<(), arkiv_event_bus::EventBusError> {
    /// let bus = EventBus::new();
    /// bus.publish_watch(ScrollProgressChanged(0.4))?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn publish_watch<T: Event>(&self, event: T) -> Result<(), EventBusError> {
        self.publish_watch_arc(Arc::new(event))
    }

    /// Publishes to a watch channel without re-wrapping. Creates a channel if missing.
    ///
    /// # Errors
    /// Returns [`EventBusError::ChannelKindMismatch`] if a different channel kind
    /// was already registered for `T`.
    pub fn publish_watch_arc<T: Event>(&self, event: Arc<T>) -> Result<(), EventBusError> {
        let arc = event;
        let sender = self.ensure_channel::<T>(ChannelKind::Watch, Some(arc.clone()))?;
        let sender = match sender {
            ChannelHandle::Watch(tx) => tx,
            ChannelHandle::Broadcast(_) => {
                return Err(EventBusError::TypeMismatch {
                    message: std::any::type_name::<T>().into(),
                    context: Some("Unexpected event type".into()),
                });
            },
        };
        sender.send_replace(arc);
        Ok(())
    }

    /// Gracefully shuts down the bus by dropping all underlying channels.
    ///
    /// Called on root view teardown so no subscriber outlives the page.
    /// Returns the number of event channels that were closed.
    #[must_use]
    pub fn shutdown(&self) -> usize {
        let mut channels = self.channels.write();
        let count = channels.len();
        channels.clear();
        count
    }

    fn ensure_channel<T: Event>(
        &self,
        kind: ChannelKind,
        watch_initial: Option<Arc<T>>,
    ) -> Result<ChannelHandle<T>, EventBusError> {
        let id = TypeId::of::<T>();

        let mut watch_initial = if matches!(kind, ChannelKind::Watch) {
            Some(watch_initial.ok_or_else(|| EventBusError::TypeMismatch {
                message: "Watch channel requires an initial value".into(),
                context: Some(std::any::type_name::<T>().into()),
            })?)
        } else {
            None
        };

        {
            let channels = self.channels.read();
            if let Some(existing) = channels.get(&id) {
                return match (existing.kind, kind) {
                    (
                        ChannelKind::Broadcast { capacity: existing_capacity },
                        ChannelKind::Broadcast { capacity },
                    ) => {
                        if existing_capacity != capacity {
                            warn!(
                                event = std::any::type_name::<T>(),
                                existing_capacity,
                                requested_capacity = capacity,
                                "Broadcast channel already initialized with a different capacity"
                            );
                        }
                        ChannelHandle::from_state(kind, existing)
                    },
                    (ChannelKind::Watch, ChannelKind::Watch) => {
                        ChannelHandle::from_state(kind, existing)
                    },
                    _ => Err(EventBusError::ChannelKindMismatch {
                        message: format!(
                            "Expected {:?} but found {:?} for {}",
                            kind,
                            existing.kind,
                            std::any::type_name::<T>()
                        )
                        .into(),
                        context: None,
                    }),
                };
            }
        }

        let mut channels = self.channels.write();
        let entry = channels.entry(id).or_insert_with(|| {
            trace!(event = std::any::type_name::<T>(), ?kind, "Initializing new event channel");
            let sender: Box<dyn Any + Send + Sync> = match kind {
                ChannelKind::Broadcast { capacity } => {
                    let (tx, _) = broadcast::channel::<Arc<T>>(capacity);
                    Box::new(tx)
                },
                ChannelKind::Watch => {
                    let initial =
                        watch_initial.take().expect("Watch channel requires an initial value");
                    let (tx, _) = watch::channel::<Arc<T>>(initial);
                    Box::new(tx)
                },
            };
            ChannelState { kind, sender }
        });

        ChannelHandle::from_state(kind, entry)
    }
}

fn validate_capacity(capacity: usize) -> Result<usize, EventBusError> {
    if capacity < MIN_CAPACITY {
        return Err(EventBusError::InvalidCapacity {
            message: format!("capacity must be >= {MIN_CAPACITY}").into(),
            context: None,
        });
    }
    Ok(capacity)
}
