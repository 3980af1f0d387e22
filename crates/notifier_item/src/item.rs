use crate::*;

use crate::signal::ChangeSignal;
use std::sync::{Arc, Weak};
use zbus::SignalContext;

/// A StatusNotifierItem (SNI) served by this process.
///
/// Creating an item connects to the bus, claims the item's service name, exports the item object
/// and registers it with the StatusNotifierWatcher. The setters update the exported properties and
/// notify hosts with the matching `New*` signal. The item stays on the bus until [`Item::close`].
pub struct Item {
    bus: bus::Bus,
    service_name: ServiceName,
    props: PropertyStore,
    handler: event::HandlerSlot,
    ctxt: SignalContext<'static>,
    // held from the store write until its signal is sent, so signals go out in write order
    updates: tokio::sync::Mutex<()>,
}

impl Item {
    /// Put a new item on the bus.
    ///
    /// `handler` receives the events hosts send to the item. The item only keeps a weak
    /// reference, the application decides how long it lives.
    ///
    /// If any step fails, everything acquired up to then is given back before the error is
    /// returned: no name stays claimed and no object stays exported.
    pub async fn new(config: &BusConfig, props: Properties, handler: Option<Weak<dyn EventHandler>>) -> Result<Self> {
        let mut con = bus::Bus::connect(&config.address).await?;
        let props = PropertyStore::new(props);
        let handler = event::HandlerSlot::new(handler);

        match Self::setup(&mut con, &config.service_name, &props, &handler).await {
            Ok(ctxt) => Ok(Self {
                bus: con,
                service_name: config.service_name.clone(),
                props,
                handler,
                ctxt,
                updates: tokio::sync::Mutex::new(()),
            }),
            Err(e) => {
                log::warn!("failed to set up StatusNotifierItem {}: {}", config.service_name, e);
                if let Err(close_err) = con.close().await {
                    log::error!("failed to clean up after failed setup: {}", close_err);
                }
                Err(e)
            },
        }
    }

    async fn setup(
        con: &mut bus::Bus,
        service_name: &ServiceName,
        props: &PropertyStore,
        handler: &event::HandlerSlot,
    ) -> Result<SignalContext<'static>> {
        con.claim_unique_name(service_name).await?;

        con.export(dbus::StatusNotifierItem::new(props.clone(), handler.clone())).await?;
        let ctxt = SignalContext::new(con.connection(), names::ITEM_OBJECT)
            .map_err(|source| Error::Export { path: names::ITEM_OBJECT.to_owned(), source })?;

        watcher::register_item(con.connection(), service_name).await?;
        Ok(ctxt)
    }

    /// The service name the item is registered under.
    pub fn service_name(&self) -> &ServiceName {
        &self.service_name
    }

    pub fn connection(&self) -> &zbus::Connection {
        self.bus.connection()
    }

    /// The current value of every property.
    pub fn properties(&self) -> Properties {
        self.props.snapshot()
    }

    /// Replace the event handler. See [`Item::new`].
    pub fn set_handler<H: EventHandler + 'static>(&self, handler: &Arc<H>) {
        let handler: Weak<dyn EventHandler> = Arc::downgrade(handler) as Weak<dyn EventHandler>;
        self.handler.replace(Some(handler));
    }

    /// Stop delivering events. Calls from hosts still succeed.
    pub fn clear_handler(&self) {
        self.handler.replace(None);
    }

    pub async fn set_title(&self, title: impl Into<String>) -> Result<()> {
        self.update(PropertyUpdate::Title(title.into())).await
    }

    /// Set the icon name and pixmaps together.
    pub async fn set_icon(&self, icon: Icon) -> Result<()> {
        self.update(PropertyUpdate::Icon(icon)).await
    }

    pub async fn set_overlay_icon(&self, icon: Icon) -> Result<()> {
        self.update(PropertyUpdate::OverlayIcon(icon)).await
    }

    pub async fn set_attention_icon(&self, icon: Icon) -> Result<()> {
        self.update(PropertyUpdate::AttentionIcon(icon)).await
    }

    pub async fn set_tooltip(&self, tooltip: Tooltip) -> Result<()> {
        self.update(PropertyUpdate::ToolTip(tooltip)).await
    }

    pub async fn set_status(&self, status: Status) -> Result<()> {
        self.update(PropertyUpdate::Status(status)).await
    }

    /// Write to the property store, then tell hosts about it.
    ///
    /// Concurrent updates send their signals in the order they were written. The new value is kept
    /// even if the signal can't be sent.
    pub async fn update(&self, update: PropertyUpdate) -> Result<()> {
        let signal = ChangeSignal::from(&update);
        log::debug!("updating {:?} on {}", update.properties(), self.service_name);
        let _guard = self.updates.lock().await;
        self.props.set(update);
        dbus::StatusNotifierItem::emit(&self.ctxt, signal).await.map_err(Error::Runtime)
    }

    /// Take the item off the bus and release its service name.
    pub async fn close(mut self) -> Result<()> {
        self.bus.close().await.map_err(Error::Runtime)?;
        log::info!("closed StatusNotifierItem {}", self.service_name);
        Ok(())
    }
}

impl std::fmt::Debug for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Item").field("service_name", &self.service_name).field("handler", &self.handler).finish_non_exhaustive()
    }
}
