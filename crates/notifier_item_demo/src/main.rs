use anyhow::{Context, Result};
use notifier_item::{BusAddress, BusConfig, Event, EventHandler, Item, Properties, ServiceName, Status, Tooltip};
use std::sync::{Arc, Weak};

mod icons;
mod opts;

fn main() {
    let opts = opts::Opt::from_env();

    let log_level_filter = if opts.log_debug { log::LevelFilter::Debug } else { log::LevelFilter::Info };
    if std::env::var("RUST_LOG").is_ok() {
        pretty_env_logger::init_timed();
    } else {
        pretty_env_logger::formatted_timed_builder()
            .filter(Some("notifier_item_demo"), log_level_filter)
            .filter(Some("notifier_item"), log_level_filter)
            .init();
    }

    let rt = tokio::runtime::Builder::new_multi_thread()
        .thread_name("notifier-item-demo")
        .enable_all()
        .build()
        .expect("Failed to initialize tokio runtime");

    if let Err(err) = rt.block_on(run(opts)) {
        log::error!("{:?}", err);
        std::process::exit(1);
    }
}

async fn run(opts: opts::Opt) -> Result<()> {
    let icon = match &opts.item.icon {
        Some(path) => icons::load("notifier-item-demo", path)?,
        None => icons::generated("notifier-item-demo", [0x3333, 0x9999, 0xffff]),
    };
    let attention_icon = match &opts.item.attention_icon {
        Some(path) => icons::load("notifier-item-demo-attention", path)?,
        None => icons::generated("notifier-item-demo-attention", [0xffff, 0x4444, 0x2222]),
    };

    let bus = BusConfig {
        address: opts.bus_address.map(BusAddress::Address).unwrap_or_default(),
        service_name: ServiceName::for_current_process().with_instance(opts.instance),
    };
    let props = Properties {
        category: opts.item.category,
        id: opts.item.id,
        title: opts.item.title.clone(),
        status: Status::Active,
        icon,
        attention_icon,
        tooltip: Tooltip { title: opts.item.title, text: "Click, scroll or right-click me".to_owned(), ..Default::default() },
        ..Default::default()
    };

    let handler: Arc<dyn EventHandler> = Arc::new(log_event);
    let item = Item::new(&bus, props, Some(Arc::downgrade(&handler) as Weak<dyn EventHandler>))
        .await
        .context("Failed to create StatusNotifierItem")?;
    log::info!("Running as {}", item.service_name());

    let mut ticks = tokio::time::interval(opts.interval);
    ticks.tick().await;
    let mut attention = false;
    loop {
        tokio::select! {
            _ = ticks.tick() => {
                attention = !attention;
                let status = if attention { Status::NeedsAttention } else { Status::Active };
                if let Err(e) = item.set_status(status).await {
                    log::warn!("Failed to set status to {}: {:?}", status, e);
                }
            }
            result = tokio::signal::ctrl_c() => {
                result.context("Failed to listen for ctrl-c")?;
                break;
            }
        }
    }

    log::info!("Shutting down");
    item.close().await.context("Failed to close StatusNotifierItem")?;
    Ok(())
}

fn log_event(event: Event) {
    match event {
        Event::Activate { x, y } => log::info!("Item was clicked at {}, {}", x, y),
        Event::SecondaryActivate { x, y } => log::info!("Item was middle-clicked at {}, {}", x, y),
        Event::ContextMenu { x, y } => log::info!("Item was right-clicked at {}, {}", x, y),
        Event::Scroll { delta, orientation } => log::info!("Item was scrolled with delta {}, orientation {}", delta, orientation),
    }
}
