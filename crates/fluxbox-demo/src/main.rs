use anyhow::Context;
use fluxbox::SharedStore;
use fluxbox_config::AppConfig;
use std::cell::RefCell;
use std::fs::File;
use std::io::{self, BufReader};
use std::rc::Rc;

mod dispatcher;
mod logger;
mod script;
mod stores;

use dispatcher::{describe, Dispatcher};
use stores::{counter, todos};

fn main() -> anyhow::Result<()> {
    logger::init();
    let config = AppConfig::load();
    logger::apply(&config);

    log::info!("Starting fluxbox-demo");

    let actions = match std::env::args().nth(1) {
        Some(path) => {
            let file = File::open(&path).with_context(|| format!("cannot open {}", path))?;
            script::read_actions(BufReader::new(file))?
        }
        None => script::read_actions(io::stdin().lock())?,
    };
    log::info!("Loaded {} action(s)", actions.len());

    let todo_store: SharedStore<todos::Todos> = Rc::new(RefCell::new(
        todos::class().instantiate(config.actions_for(todos::NAME))?,
    ));
    let counter_store: SharedStore<counter::Counter> =
        Rc::new(RefCell::new(counter::class().instantiate(counter::CounterConfig {
            start: 0,
            actions: config.actions_for(counter::NAME),
        })?));

    let mut dispatcher = Dispatcher::new();
    dispatcher.register(todos::NAME, Rc::clone(&todo_store));
    dispatcher.register(counter::NAME, Rc::clone(&counter_store));

    let mut failed = 0;
    for action in &actions {
        let failures = dispatcher.dispatch(action);
        failed += failures.len();
        if config.stop_on_error {
            if let Some(failure) = failures.first() {
                anyhow::bail!(
                    "store `{}` failed: {}",
                    failure.store,
                    describe(&failure.error)
                );
            }
        }
    }

    let mut summary = serde_json::Map::new();
    summary.insert(
        todos::NAME.to_string(),
        serde_json::to_value(todo_store.borrow().state())?,
    );
    summary.insert(
        counter::NAME.to_string(),
        serde_json::to_value(counter_store.borrow().state())?,
    );
    println!("{}", serde_json::to_string_pretty(&summary)?);

    log::info!(
        "Dispatched {} action(s), {} handler failure(s)",
        dispatcher.dispatched(),
        failed
    );
    Ok(())
}
