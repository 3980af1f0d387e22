use crate::*;

use zbus::names::BusName;

/// Announce `service` to the StatusNotifierWatcher.
///
/// The registration is sent without expecting a reply, so a missing watcher would go unnoticed.
/// Its presence is checked beforehand, and absence is reported as the same `ServiceUnknown` error
/// the bus would have answered a regular call with.
pub(crate) async fn register_item(con: &zbus::Connection, service: &ServiceName) -> Result<()> {
    register(con, &service.to_string()).await.map_err(Error::WatcherRegistration)?;
    log::info!("registered {} with {}", service, names::WATCHER_BUS);
    Ok(())
}

async fn register(con: &zbus::Connection, service: &str) -> zbus::Result<()> {
    let watcher = BusName::try_from(names::WATCHER_BUS)?;
    let dbus = zbus::fdo::DBusProxy::new(con).await?;
    if !dbus.name_has_owner(watcher).await? {
        return Err(zbus::Error::FDO(Box::new(zbus::fdo::Error::ServiceUnknown(format!(
            "The name {} was not provided by any .service files",
            names::WATCHER_BUS
        )))));
    }

    let snw = proxy::StatusNotifierWatcherProxy::builder(con).cache_properties(zbus::CacheProperties::No).build().await?;
    snw.register_status_notifier_item(service).await
}
