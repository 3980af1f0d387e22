//! A [StatusNotifierItem] service: puts an icon into the system tray of any panel that implements
//! the StatusNotifierHost side of the protocol.
//!
//! ```no_run
//! use notifier_item::{BusConfig, Item, Properties, Status};
//!
//! # async fn run() -> notifier_item::Result<()> {
//! let item = Item::new(&BusConfig::default(), Properties { id: "example".into(), ..Default::default() }, None).await?;
//! item.set_status(Status::NeedsAttention).await?;
//! item.close().await?;
//! # Ok(())
//! # }
//! ```
//!
//! [StatusNotifierItem]: https://freedesktop.org/wiki/Specifications/StatusNotifierItem/

pub mod dbus;
pub mod names;
pub mod proxy;

mod bus;
pub use bus::{BusAddress, BusConfig, ServiceName};

mod error;
pub use error::*;

mod event;
pub use event::{Event, EventHandler};

mod icon;
pub use icon::*;

mod item;
pub use item::*;

mod pixmap;
pub use pixmap::*;

mod props;
pub use props::*;

mod signal;
pub use signal::ChangeSignal;

mod watcher;
