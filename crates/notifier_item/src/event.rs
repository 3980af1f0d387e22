use std::sync::{Arc, RwLock, Weak};

/// A request from the host (the panel showing the item) to the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Primary activation, e.g. a left click.
    Activate { x: i32, y: i32 },
    /// Secondary activation, e.g. a middle click.
    SecondaryActivate { x: i32, y: i32 },
    /// The host asks for a context menu, e.g. on right click.
    ContextMenu { x: i32, y: i32 },
    /// Scroll wheel over the item. `orientation` is `"vertical"` or `"horizontal"` per the
    /// protocol, but is passed on as received.
    Scroll { delta: i32, orientation: String },
}

/// Receives the [`Event`]s of an item.
///
/// Events are handled on a blocking thread, and the host gets its reply once `handle` returns.
/// A slow handler only delays the reply to its own call.
pub trait EventHandler: Send + Sync {
    fn handle(&self, event: Event);
}

impl<F> EventHandler for F
where
    F: Fn(Event) + Send + Sync,
{
    fn handle(&self, event: Event) {
        self(event)
    }
}

/// The handler of an item, as a weak reference owned by the application.
#[derive(Clone, Default)]
pub(crate) struct HandlerSlot {
    handler: Arc<RwLock<Option<Weak<dyn EventHandler>>>>,
}

impl HandlerSlot {
    pub fn new(handler: Option<Weak<dyn EventHandler>>) -> Self {
        Self { handler: Arc::new(RwLock::new(handler)) }
    }

    pub fn replace(&self, handler: Option<Weak<dyn EventHandler>>) {
        *self.handler.write().unwrap() = handler; // unwrap: lock poisoning is okay
    }

    /// The handler, if one is set and still alive.
    pub fn get(&self) -> Option<Arc<dyn EventHandler>> {
        let handler = self.handler.read().unwrap(); // unwrap: lock poisoning is okay
        handler.as_ref().and_then(Weak::upgrade)
    }

    /// Run the handler on the blocking pool and wait for it to finish.
    pub async fn dispatch(&self, event: Event) {
        let Some(handler) = self.get() else {
            log::debug!("no handler for {:?}", event);
            return;
        };

        log::debug!("dispatching {:?}", event);
        if let Err(e) = tokio::task::spawn_blocking(move || handler.handle(event)).await {
            log::error!("event handler failed: {}", e);
        }
    }
}

impl std::fmt::Debug for HandlerSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerSlot").field("set", &self.get().is_some()).finish()
    }
}
