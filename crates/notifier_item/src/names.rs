//! Well-known names and paths of the StatusNotifierItem protocol.
//!
//! See <https://freedesktop.org/wiki/Specifications/StatusNotifierItem/StatusNotifierItem/>.

/// Interface implemented by the exported item object.
pub const ITEM_INTERFACE: &str = "org.freedesktop.StatusNotifierItem";

/// Path the item object is exported at.
pub const ITEM_OBJECT: &str = "/StatusNotifierItem";

/// Prefix of the per-process service name, completed as `{prefix}-{pid}-{instance}`.
pub const ITEM_BUS_PREFIX: &str = "org.freedesktop.StatusNotifierItem";

/// Default value of the `Menu` property.
pub const MENU_OBJECT: &str = "/MenuBar";

pub const WATCHER_BUS: &str = "org.freedesktop.StatusNotifierWatcher";
pub const WATCHER_OBJECT: &str = "/StatusNotifierWatcher";
pub const WATCHER_INTERFACE: &str = "org.freedesktop.StatusNotifierWatcher";
