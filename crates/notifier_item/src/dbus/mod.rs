//! # The exported item object
//!
//! Methods and properties correspond to methods and properties on the DBus service that hosts
//! call, while signals are events that we generate for hosts to listen to. The object server
//! answers `org.freedesktop.DBus.Properties` and `org.freedesktop.DBus.Introspectable` for us,
//! including the introspection of the root node that lists `StatusNotifierItem` as a child.

use crate::*;

use crate::icon::{WirePixmaps, WireTooltip};
use crate::signal::ChangeSignal;
use zbus::{interface, zvariant::OwnedObjectPath, SignalContext};

/// Implementation of the `StatusNotifierItem` interface, reading from a [`PropertyStore`] and
/// forwarding method calls to the application's [`EventHandler`].
#[derive(Debug)]
pub struct StatusNotifierItem {
    props: PropertyStore,
    handler: event::HandlerSlot,
}

impl StatusNotifierItem {
    pub(crate) fn new(props: PropertyStore, handler: event::HandlerSlot) -> Self {
        Self { props, handler }
    }

    /// Emit `signal` from the item object.
    pub(crate) async fn emit(ctxt: &SignalContext<'_>, signal: ChangeSignal) -> zbus::Result<()> {
        match signal {
            ChangeSignal::NewTitle => Self::new_title(ctxt).await,
            ChangeSignal::NewIcon => Self::new_icon(ctxt).await,
            ChangeSignal::NewAttentionIcon => Self::new_attention_icon(ctxt).await,
            ChangeSignal::NewOverlayIcon => Self::new_overlay_icon(ctxt).await,
            ChangeSignal::NewToolTip => Self::new_tool_tip(ctxt).await,
            ChangeSignal::NewStatus(status) => Self::new_status(ctxt, status.as_str()).await,
        }
    }
}

// None of the methods take `&mut self`, so the object server never serializes calls on the
// interface lock and a slow handler only holds up its own reply.
#[interface(name = "org.freedesktop.StatusNotifierItem")]
impl StatusNotifierItem {
    /// Activate method
    async fn activate(&self, x: i32, y: i32) {
        self.handler.dispatch(Event::Activate { x, y }).await
    }

    /// SecondaryActivate method
    async fn secondary_activate(&self, x: i32, y: i32) {
        self.handler.dispatch(Event::SecondaryActivate { x, y }).await
    }

    /// ContextMenu method
    async fn context_menu(&self, x: i32, y: i32) {
        self.handler.dispatch(Event::ContextMenu { x, y }).await
    }

    /// Scroll method
    async fn scroll(&self, delta: i32, orientation: &str) {
        self.handler.dispatch(Event::Scroll { delta, orientation: orientation.to_owned() }).await
    }

    // ------------------------------------------------------------------------

    /// NewTitle signal
    #[zbus(signal)]
    async fn new_title(ctxt: &SignalContext<'_>) -> zbus::Result<()>;

    /// NewIcon signal
    #[zbus(signal)]
    async fn new_icon(ctxt: &SignalContext<'_>) -> zbus::Result<()>;

    /// NewAttentionIcon signal
    #[zbus(signal)]
    async fn new_attention_icon(ctxt: &SignalContext<'_>) -> zbus::Result<()>;

    /// NewOverlayIcon signal
    #[zbus(signal)]
    async fn new_overlay_icon(ctxt: &SignalContext<'_>) -> zbus::Result<()>;

    /// NewToolTip signal
    #[zbus(signal)]
    async fn new_tool_tip(ctxt: &SignalContext<'_>) -> zbus::Result<()>;

    /// NewStatus signal
    #[zbus(signal)]
    async fn new_status(ctxt: &SignalContext<'_>, status: &str) -> zbus::Result<()>;

    // ------------------------------------------------------------------------
    // Changes are announced through the New* signals above, not PropertiesChanged.

    /// Category property
    #[zbus(property(emits_changed_signal = "false"))]
    fn category(&self) -> String {
        self.props.get(|p| p.category.to_string())
    }

    /// Id property
    #[zbus(property(emits_changed_signal = "false"))]
    fn id(&self) -> String {
        self.props.get(|p| p.id.clone())
    }

    /// Title property
    #[zbus(property(emits_changed_signal = "false"))]
    fn title(&self) -> String {
        self.props.get(|p| p.title.clone())
    }

    /// Status property
    #[zbus(property(emits_changed_signal = "false"))]
    fn status(&self) -> String {
        self.props.get(|p| p.status.to_string())
    }

    /// WindowId property
    #[zbus(property(emits_changed_signal = "false"))]
    fn window_id(&self) -> i32 {
        self.props.get(|p| p.window_id)
    }

    /// IconName property
    #[zbus(property(emits_changed_signal = "false"))]
    fn icon_name(&self) -> String {
        self.props.get(|p| p.icon.name.clone())
    }

    /// IconPixmap property
    #[zbus(property(emits_changed_signal = "false"))]
    fn icon_pixmap(&self) -> WirePixmaps {
        self.props.get(|p| p.icon.wire_pixmaps())
    }

    /// OverlayIconName property
    #[zbus(property(emits_changed_signal = "false"))]
    fn overlay_icon_name(&self) -> String {
        self.props.get(|p| p.overlay_icon.name.clone())
    }

    /// OverlayIconPixmap property
    #[zbus(property(emits_changed_signal = "false"))]
    fn overlay_icon_pixmap(&self) -> WirePixmaps {
        self.props.get(|p| p.overlay_icon.wire_pixmaps())
    }

    /// AttentionIconName property
    #[zbus(property(emits_changed_signal = "false"))]
    fn attention_icon_name(&self) -> String {
        self.props.get(|p| p.attention_icon.name.clone())
    }

    /// AttentionIconPixmap property
    #[zbus(property(emits_changed_signal = "false"))]
    fn attention_icon_pixmap(&self) -> WirePixmaps {
        self.props.get(|p| p.attention_icon.wire_pixmaps())
    }

    /// AttentionMovieName property
    #[zbus(property(emits_changed_signal = "false"))]
    fn attention_movie_name(&self) -> String {
        self.props.get(|p| p.attention_movie_name.clone())
    }

    /// ToolTip property
    #[zbus(property(emits_changed_signal = "false"))]
    fn tool_tip(&self) -> WireTooltip {
        self.props.get(|p| p.tooltip.to_wire())
    }

    /// ItemIsMenu property
    #[zbus(property(emits_changed_signal = "false"))]
    fn item_is_menu(&self) -> bool {
        self.props.get(|p| p.item_is_menu)
    }

    /// Menu property
    #[zbus(property(emits_changed_signal = "false"))]
    fn menu(&self) -> OwnedObjectPath {
        self.props.get(|p| p.menu.clone())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};

    fn recording_item() -> (StatusNotifierItem, Arc<dyn EventHandler>, Arc<Mutex<Vec<Event>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let handler: Arc<dyn EventHandler> = Arc::new({
            let seen = seen.clone();
            move |event: Event| seen.lock().unwrap().push(event)
        });
        let slot = event::HandlerSlot::new(Some(Arc::downgrade(&handler)));
        (StatusNotifierItem::new(PropertyStore::new(Properties::default()), slot), handler, seen)
    }

    #[tokio::test]
    async fn test_methods_reach_handler() {
        let (item, _handler, seen) = recording_item();
        item.activate(10, 20).await;
        item.secondary_activate(-1, 0).await;
        item.context_menu(3, 4).await;
        item.scroll(5, "up").await;

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                Event::Activate { x: 10, y: 20 },
                Event::SecondaryActivate { x: -1, y: 0 },
                Event::ContextMenu { x: 3, y: 4 },
                Event::Scroll { delta: 5, orientation: "up".to_owned() },
            ]
        );
    }

    #[tokio::test]
    async fn test_methods_without_handler() {
        let item = StatusNotifierItem::new(PropertyStore::new(Properties::default()), event::HandlerSlot::default());
        item.activate(1, 1).await;
        item.scroll(-2, "horizontal").await;
    }

    #[test]
    fn test_properties_follow_store() {
        let store = PropertyStore::new(Properties {
            category: Category::Hardware,
            id: "battery".to_owned(),
            status: Status::Passive,
            ..Default::default()
        });
        let item = StatusNotifierItem::new(store.clone(), event::HandlerSlot::default());
        assert_eq!(item.category(), "Hardware");
        assert_eq!(item.id(), "battery");
        assert_eq!(item.status(), "Passive");
        assert_eq!(item.menu().as_str(), "/MenuBar");

        store.set(PropertyUpdate::Status(Status::NeedsAttention));
        store.set(PropertyUpdate::Icon(Icon::new("battery-low", vec![Pixmap::from_argb32(1, 1, vec![1, 2, 3, 4]).unwrap()])));
        assert_eq!(item.status(), "NeedsAttention");
        assert_eq!(item.icon_name(), "battery-low");
        assert_eq!(item.icon_pixmap(), vec![(1, 1, vec![1, 2, 3, 4])]);
    }
}
