use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("could not connect to the message bus")]
    Connect(#[source] zbus::Error),
    #[error("could not request service name {name}")]
    RequestName {
        name: String,
        #[source]
        source: zbus::Error,
    },
    #[error("name {name} already taken")]
    NameTaken { name: String },
    #[error("could not export StatusNotifierItem at {path}")]
    Export {
        path: String,
        #[source]
        source: zbus::Error,
    },
    #[error("could not register with StatusNotifierWatcher")]
    WatcherRegistration(#[source] zbus::Error),
    #[error("dbus call failed on a live connection")]
    Runtime(#[source] zbus::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
