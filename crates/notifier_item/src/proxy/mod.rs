//! Proxies for DBus services, so we can call them.
//!
//! For more information, see ["Writing a client proxy" in the zbus
//! tutorial](https://dbus2.github.io/zbus/).

use zbus::proxy;

/// The parts of `org.freedesktop.StatusNotifierWatcher` that an item uses.
#[proxy(
    interface = "org.freedesktop.StatusNotifierWatcher",
    default_service = "org.freedesktop.StatusNotifierWatcher",
    default_path = "/StatusNotifierWatcher"
)]
pub trait StatusNotifierWatcher {
    /// RegisterStatusNotifierItem method, sent without waiting for a reply
    #[zbus(no_reply)]
    fn register_status_notifier_item(&self, service: &str) -> zbus::Result<()>;
}
