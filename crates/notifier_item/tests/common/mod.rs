#![allow(dead_code)]

use std::{
    io::{BufRead, BufReader},
    process::{Child, Command, Stdio},
    sync::{Arc, Mutex},
    time::Duration,
};

use notifier_item::{names, BusAddress, BusConfig, Event, EventHandler, ServiceName};
use zbus::{interface, proxy, SignalContext};

/// A private `dbus-daemon`, killed on drop.
pub struct TestBus {
    daemon: Child,
    pub address: String,
}

impl TestBus {
    /// Start a bus, or `None` if there is no `dbus-daemon` to run.
    pub fn spawn() -> Option<TestBus> {
        let mut daemon = match Command::new("dbus-daemon")
            .args(["--session", "--nofork", "--nopidfile", "--print-address=1"])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(daemon) => daemon,
            Err(e) => {
                eprintln!("skipping: could not start dbus-daemon: {}", e);
                return None;
            }
        };

        let mut address = String::new();
        let stdout = daemon.stdout.take()?;
        if BufReader::new(stdout).read_line(&mut address).is_err() || address.trim().is_empty() {
            eprintln!("skipping: dbus-daemon did not report its address");
            let _ = daemon.kill();
            let _ = daemon.wait();
            return None;
        }

        Some(TestBus { daemon, address: address.trim().to_owned() })
    }

    pub fn config(&self, instance: u32) -> BusConfig {
        BusConfig {
            address: BusAddress::Address(self.address.clone()),
            service_name: ServiceName::new(std::process::id(), instance),
        }
    }

    pub async fn connect(&self) -> zbus::Connection {
        zbus::connection::Builder::address(self.address.as_str()).unwrap().build().await.unwrap()
    }

    /// Run a watcher on its own connection, returning the connection (to keep it alive) and the
    /// list of registered services.
    pub async fn spawn_watcher(&self) -> (zbus::Connection, Arc<Mutex<Vec<String>>>) {
        let con = self.connect().await;
        let watcher = FakeWatcher::default();
        let items = watcher.items.clone();
        assert!(con.object_server().at(names::WATCHER_OBJECT, watcher).await.unwrap());
        con.request_name(names::WATCHER_BUS).await.unwrap();
        (con, items)
    }

    pub async fn name_has_owner(&self, con: &zbus::Connection, name: &str) -> bool {
        let dbus = zbus::fdo::DBusProxy::new(con).await.unwrap();
        dbus.name_has_owner(name.try_into().unwrap()).await.unwrap()
    }
}

impl Drop for TestBus {
    fn drop(&mut self) {
        let _ = self.daemon.kill();
        let _ = self.daemon.wait();
    }
}

/// Keeps every event it receives.
#[derive(Debug, Default)]
pub struct Recorder {
    events: Mutex<Vec<Event>>,
}

impl Recorder {
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }
}

impl EventHandler for Recorder {
    fn handle(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

/// Just enough of `org.freedesktop.StatusNotifierWatcher` to accept items.
#[derive(Debug, Default)]
pub struct FakeWatcher {
    items: Arc<Mutex<Vec<String>>>,
}

#[interface(name = "org.freedesktop.StatusNotifierWatcher")]
impl FakeWatcher {
    async fn register_status_notifier_item(
        &self,
        service: &str,
        #[zbus(signal_context)] ctxt: SignalContext<'_>,
    ) -> zbus::fdo::Result<()> {
        self.items.lock().unwrap().push(service.to_owned());
        FakeWatcher::status_notifier_item_registered(&ctxt, service).await?;
        Ok(())
    }

    #[zbus(signal)]
    async fn status_notifier_item_registered(ctxt: &SignalContext<'_>, service: &str) -> zbus::Result<()>;

    #[zbus(property)]
    async fn registered_status_notifier_items(&self) -> Vec<String> {
        self.items.lock().unwrap().clone()
    }

    #[zbus(property)]
    fn protocol_version(&self) -> i32 {
        0
    }
}

/// What a host sees of an item.
#[proxy(interface = "org.freedesktop.StatusNotifierItem", default_path = "/StatusNotifierItem")]
pub trait StatusNotifierItem {
    fn activate(&self, x: i32, y: i32) -> zbus::Result<()>;
    fn context_menu(&self, x: i32, y: i32) -> zbus::Result<()>;
    fn scroll(&self, delta: i32, orientation: &str) -> zbus::Result<()>;
    fn secondary_activate(&self, x: i32, y: i32) -> zbus::Result<()>;

    #[zbus(signal)]
    fn new_status(&self, status: &str) -> zbus::Result<()>;
    #[zbus(signal)]
    fn new_title(&self) -> zbus::Result<()>;

    #[zbus(property)]
    fn status(&self) -> zbus::Result<String>;
    #[zbus(property)]
    fn title(&self) -> zbus::Result<String>;
    #[zbus(property)]
    fn icon_name(&self) -> zbus::Result<String>;
    #[zbus(property)]
    fn icon_pixmap(&self) -> zbus::Result<Vec<(i32, i32, Vec<u8>)>>;
    #[zbus(property)]
    fn tool_tip(&self) -> zbus::Result<(String, Vec<(i32, i32, Vec<u8>)>, String, String)>;
    #[zbus(property)]
    fn menu(&self) -> zbus::Result<zbus::zvariant::OwnedObjectPath>;
}

/// A proxy for the item at `service`, never caching properties so every read goes to the item.
pub async fn item_proxy<'a>(con: &zbus::Connection, service: &ServiceName) -> StatusNotifierItemProxy<'a> {
    StatusNotifierItemProxy::builder(con)
        .destination(service.to_string())
        .unwrap()
        .cache_properties(zbus::CacheProperties::No)
        .build()
        .await
        .unwrap()
}

/// Poll `f` until it returns true, for at most five seconds.
pub async fn eventually(mut f: impl FnMut() -> bool) -> bool {
    for _ in 0..100 {
        if f() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    f()
}
