use crate::*;

use smart_default::SmartDefault;

/// Which message bus to connect to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BusAddress {
    /// The session bus of the current login session.
    #[default]
    Session,
    /// A bus at an explicit address, such as `unix:path=/run/user/1000/bus`.
    Address(String),
}

/// The well-known name an item claims on the bus.
///
/// From <https://www.freedesktop.org/wiki/Specifications/StatusNotifierItem/StatusNotifierItem/>:
/// each application can register an arbitrary number of items, under names of the form
/// `org.freedesktop.StatusNotifierItem-PID-ID`, where ID keeps multiple items of one process apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceName {
    pid: u32,
    instance: u32,
}

impl ServiceName {
    pub fn new(pid: u32, instance: u32) -> Self {
        Self { pid, instance }
    }

    /// The first item of the running process.
    pub fn for_current_process() -> Self {
        Self::new(std::process::id(), 1)
    }

    pub fn with_instance(self, instance: u32) -> Self {
        Self { instance, ..self }
    }
}

impl std::fmt::Display for ServiceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", names::ITEM_BUS_PREFIX, self.pid, self.instance)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, SmartDefault)]
pub struct BusConfig {
    pub address: BusAddress,
    #[default(ServiceName::for_current_process())]
    pub service_name: ServiceName,
}

/// A connection to the bus, together with what this process acquired on it.
///
/// [`Bus::close`] gives back everything acquired so far, so it can be called at any point of a
/// failed construction.
#[derive(Debug)]
pub(crate) struct Bus {
    con: zbus::Connection,
    name: Option<String>,
    exported: bool,
}

impl Bus {
    pub async fn connect(address: &BusAddress) -> Result<Self> {
        let con = match address {
            BusAddress::Session => zbus::Connection::session().await,
            BusAddress::Address(address) => match zbus::connection::Builder::address(address.as_str()) {
                Ok(builder) => builder.build().await,
                Err(e) => Err(e),
            },
        }
        .map_err(Error::Connect)?;

        log::info!("connected to bus as {:?}", con.unique_name());
        Ok(Self { con, name: None, exported: false })
    }

    pub fn connection(&self) -> &zbus::Connection {
        &self.con
    }

    /// Claim `name` without queueing behind an existing owner.
    pub async fn claim_unique_name(&mut self, name: &ServiceName) -> Result<()> {
        let name = name.to_string();
        let flags = [zbus::fdo::RequestNameFlags::DoNotQueue];

        use zbus::fdo::RequestNameReply::*;
        match self.con.request_name_with_flags(name.as_str(), flags.into_iter().collect()).await {
            Ok(PrimaryOwner) => {
                log::info!("claimed bus name {}", name);
                self.name = Some(name);
                Ok(())
            },
            // AlreadyOwner can't happen on a fresh connection, and InQueue can't happen with DoNotQueue
            Ok(Exists | AlreadyOwner | InQueue) | Err(zbus::Error::NameTaken) => Err(Error::NameTaken { name }),
            Err(source) => Err(Error::RequestName { name, source }),
        }
    }

    /// Put `iface` on the object server at [`names::ITEM_OBJECT`].
    pub async fn export<I: zbus::object_server::Interface>(&mut self, iface: I) -> Result<()> {
        let export_error = |source| Error::Export { path: names::ITEM_OBJECT.to_owned(), source };
        if !self.con.object_server().at(names::ITEM_OBJECT, iface).await.map_err(export_error)? {
            return Err(export_error(zbus::Error::Failure(format!(
                "Object already exists at {} on this connection",
                names::ITEM_OBJECT
            ))));
        }
        log::info!("exported {} at {}", I::name(), names::ITEM_OBJECT);
        self.exported = true;
        Ok(())
    }

    /// Withdraw the exported object, release the claimed name and drop the connection.
    ///
    /// Calling this again does nothing. Failures are logged and the rest of the teardown still
    /// happens, the first failure is returned.
    pub async fn close(&mut self) -> zbus::Result<()> {
        let mut result = Ok(());

        if std::mem::take(&mut self.exported) {
            if let Err(e) = self.con.object_server().remove::<dbus::StatusNotifierItem, _>(names::ITEM_OBJECT).await {
                log::warn!("failed to remove {} from the object server: {}", names::ITEM_OBJECT, e);
                result = Err(e);
            }
        }

        if let Some(name) = self.name.take() {
            match self.con.release_name(name.as_str()).await {
                Ok(_) => log::info!("released bus name {}", name),
                Err(e) => {
                    log::warn!("failed to release bus name {}: {}", name, e);
                    result = result.and(Err(e));
                },
            }
        }

        result
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_service_name() {
        assert_eq!(ServiceName::new(4242, 1).to_string(), "org.freedesktop.StatusNotifierItem-4242-1");
        assert_eq!(ServiceName::new(7, 1).with_instance(3).to_string(), "org.freedesktop.StatusNotifierItem-7-3");
        assert_eq!(
            ServiceName::for_current_process().to_string(),
            format!("org.freedesktop.StatusNotifierItem-{}-1", std::process::id())
        );
    }

    #[test]
    fn test_default_config() {
        let config = BusConfig::default();
        assert_eq!(config.address, BusAddress::Session);
        assert_eq!(config.service_name, ServiceName::for_current_process());
    }
}
