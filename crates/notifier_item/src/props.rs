use crate::*;

use smart_default::SmartDefault;
use std::sync::{Arc, Mutex};
use zbus::zvariant::{ObjectPath, OwnedObjectPath};

/// Recognised values of [`org.freedesktop.StatusNotifierItem.Status`].
///
/// [`org.freedesktop.StatusNotifierItem.Status`]: https://www.freedesktop.org/wiki/Specifications/StatusNotifierItem/StatusNotifierItem/#org.freedesktop.statusnotifieritem.status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display, strum::IntoStaticStr)]
pub enum Status {
    /// The item doesn't convey important information to the user, it can be considered an "idle"
    /// status and is likely that visualizations will chose to hide it.
    Passive,
    /// The item is active, is more important that the item will be shown in some way to the user.
    #[default]
    Active,
    /// The item carries really important information for the user, such as battery charge running
    /// out and is wants to incentive the direct user intervention. Visualizations should emphasize
    /// in some way the items with NeedsAttention status.
    NeedsAttention,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct ParseStatusError;

impl std::fmt::Display for ParseStatusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("status must be one of Passive, Active or NeedsAttention")
    }
}

impl std::error::Error for ParseStatusError {}

impl std::str::FromStr for Status {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> std::result::Result<Self, ParseStatusError> {
        match s {
            "Passive" => Ok(Status::Passive),
            "Active" => Ok(Status::Active),
            "NeedsAttention" => Ok(Status::NeedsAttention),
            _ => Err(ParseStatusError),
        }
    }
}

/// Recognised values of `org.freedesktop.StatusNotifierItem.Category`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display, strum::EnumString, strum::IntoStaticStr)]
pub enum Category {
    /// The item describes the status of a generic application.
    #[default]
    ApplicationStatus,
    /// The item describes the status of communication oriented applications, like an instant
    /// messenger or an email client.
    Communications,
    /// The item describes services of the system not seen as a stand alone application by the user.
    SystemServices,
    /// The item describes the state and control of a particular hardware.
    Hardware,
}

/// Every property exposed on the item interface, by its name on the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr, strum::EnumIter)]
pub enum PropertyName {
    Category,
    Id,
    Title,
    Status,
    WindowId,
    IconName,
    IconPixmap,
    OverlayIconName,
    OverlayIconPixmap,
    AttentionIconName,
    AttentionIconPixmap,
    AttentionMovieName,
    ToolTip,
    ItemIsMenu,
    Menu,
}

/// The current value of every property of the item.
#[derive(Debug, Clone, PartialEq, SmartDefault)]
pub struct Properties {
    pub category: Category,
    pub id: String,
    pub title: String,
    pub status: Status,
    pub window_id: i32,
    pub icon: Icon,
    pub overlay_icon: Icon,
    pub attention_icon: Icon,
    pub attention_movie_name: String,
    pub tooltip: Tooltip,
    pub item_is_menu: bool,
    #[default(ObjectPath::from_static_str_unchecked(names::MENU_OBJECT).into())]
    pub menu: OwnedObjectPath,
}

/// A write the public API can perform on the [`PropertyStore`].
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyUpdate {
    Title(String),
    Status(Status),
    Icon(Icon),
    OverlayIcon(Icon),
    AttentionIcon(Icon),
    ToolTip(Tooltip),
}

impl PropertyUpdate {
    /// The properties whose value this update replaces.
    pub fn properties(&self) -> &'static [PropertyName] {
        match self {
            PropertyUpdate::Title(_) => &[PropertyName::Title],
            PropertyUpdate::Status(_) => &[PropertyName::Status],
            PropertyUpdate::Icon(_) => &[PropertyName::IconName, PropertyName::IconPixmap],
            PropertyUpdate::OverlayIcon(_) => &[PropertyName::OverlayIconName, PropertyName::OverlayIconPixmap],
            PropertyUpdate::AttentionIcon(_) => &[PropertyName::AttentionIconName, PropertyName::AttentionIconPixmap],
            PropertyUpdate::ToolTip(_) => &[PropertyName::ToolTip],
        }
    }

    fn apply(self, props: &mut Properties) {
        match self {
            PropertyUpdate::Title(title) => props.title = title,
            PropertyUpdate::Status(status) => props.status = status,
            PropertyUpdate::Icon(icon) => props.icon = icon,
            PropertyUpdate::OverlayIcon(icon) => props.overlay_icon = icon,
            PropertyUpdate::AttentionIcon(icon) => props.attention_icon = icon,
            PropertyUpdate::ToolTip(tooltip) => props.tooltip = tooltip,
        }
    }
}

/// Shared table of [`Properties`], written by the [`Item`] and read by the exported object.
///
/// Every write replaces whole values under one lock, so readers see either the old or the new
/// value of a property, never a mix.
#[derive(Debug, Clone)]
pub struct PropertyStore {
    // Intentionally using std::sync::Mutex instead of tokio's async mutex, since we don't need to
    // hold the mutex across an await.
    inner: Arc<Mutex<Properties>>,
}

impl PropertyStore {
    pub fn new(props: Properties) -> Self {
        Self { inner: Arc::new(Mutex::new(props)) }
    }

    /// Read from the current properties.
    pub fn get<T>(&self, f: impl FnOnce(&Properties) -> T) -> T {
        let props = self.inner.lock().unwrap(); // unwrap: mutex poisoning is okay
        f(&props)
    }

    pub fn set(&self, update: PropertyUpdate) {
        let mut props = self.inner.lock().unwrap(); // unwrap: mutex poisoning is okay
        update.apply(&mut props);
    }

    pub fn snapshot(&self) -> Properties {
        self.get(Properties::clone)
    }
}
