use clap::Parser;
use notifier_item::Category;

/// Struct that gets generated from `RawOpt`.
#[derive(Debug, PartialEq)]
pub struct Opt {
    pub log_debug: bool,
    pub item: ItemOpts,
    pub bus_address: Option<String>,
    pub instance: u32,
    pub interval: std::time::Duration,
}

#[derive(Debug, PartialEq)]
pub struct ItemOpts {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub icon: Option<std::path::PathBuf>,
    pub attention_icon: Option<std::path::PathBuf>,
}

/// Show an item in the system tray that switches between needing attention and not.
#[derive(Parser, Debug, PartialEq)]
#[command(author = "ElKowar", version)]
struct RawOpt {
    /// Write out debug logs.
    #[arg(long = "debug")]
    log_debug: bool,

    /// Id of the item, stable across restarts.
    #[arg(long, default_value = "NotifierItemDemo")]
    id: String,

    #[arg(long, default_value = "Notifier item demo")]
    title: String,

    /// One of ApplicationStatus, Communications, SystemServices or Hardware.
    #[arg(long, default_value = "ApplicationStatus")]
    category: Category,

    /// PNG file to use as the icon. A generated icon is used otherwise.
    #[arg(long)]
    icon: Option<std::path::PathBuf>,

    /// PNG file to use as the icon while the item needs attention.
    #[arg(long)]
    attention_icon: Option<std::path::PathBuf>,

    /// Seconds between status changes.
    #[arg(long, default_value_t = 3)]
    interval: u64,

    /// Distinguishes several items run by the same process id, e.g. in containers.
    #[arg(long, default_value_t = 1)]
    instance: u32,

    /// Connect to the bus at this address instead of the session bus.
    #[arg(long)]
    bus_address: Option<String>,
}

impl Opt {
    pub fn from_env() -> Self {
        RawOpt::parse().into()
    }
}

impl From<RawOpt> for Opt {
    fn from(other: RawOpt) -> Self {
        let RawOpt { log_debug, id, title, category, icon, attention_icon, interval, instance, bus_address } = other;
        Opt {
            log_debug,
            item: ItemOpts { id, title, category, icon, attention_icon },
            bus_address,
            instance,
            interval: std::time::Duration::from_secs(interval.max(1)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let opt: Opt = RawOpt::parse_from(["notifier_item_demo"]).into();
        assert_eq!(opt.item.id, "NotifierItemDemo");
        assert_eq!(opt.item.category, Category::ApplicationStatus);
        assert_eq!(opt.interval, std::time::Duration::from_secs(3));
        assert_eq!(opt.instance, 1);
        assert_eq!(opt.bus_address, None);
    }

    #[test]
    fn test_parse_args() {
        let opt: Opt = RawOpt::parse_from([
            "notifier_item_demo",
            "--debug",
            "--category",
            "Hardware",
            "--icon",
            "/tmp/icon.png",
            "--interval",
            "0",
            "--instance",
            "2",
        ])
        .into();
        assert!(opt.log_debug);
        assert_eq!(opt.item.category, Category::Hardware);
        assert_eq!(opt.item.icon, Some("/tmp/icon.png".into()));
        assert_eq!(opt.interval, std::time::Duration::from_secs(1));
        assert_eq!(opt.instance, 2);

        assert!(RawOpt::try_parse_from(["notifier_item_demo", "--category", "Games"]).is_err());
    }
}
