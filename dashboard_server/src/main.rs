//! Market dashboard server.
//!
//! Serves mock market data for the dashboard's analysis and prediction panels and
//! streams simulated index prices. Internally it wires together three building blocks:
//!
//! - `TickerService` — owns the `PriceTicker` on a background thread, ticks it on a
//!   fixed period and broadcasts `TickEvent`s to every subscriber via
//!   `crossbeam_channel` senders.
//! - `Dispatcher` — turns a refresh or prediction request into a freshly generated
//!   chart or metric payload.
//! - `CommandServer` — accepts TCP connections, reads one JSON request line per
//!   connection and answers with JSON response lines.
//!
//! Concurrency:
//! - Ticker state lives only on the ticker thread; other threads see it through
//!   broadcast `TickUpdate`s.
//! - Each connection runs on its own thread; an error on one connection is logged and
//!   does not affect the others.
//!
//! Shutdown: Ctrl+C stops the ticker, which sends `TickEvent::Shutdown` to every
//! subscriber so open tick streams end cleanly before the process exits.
#![warn(missing_docs)]
use crate::args::{rng_from_seed, Args};
use crate::dispatcher::Dispatcher;
use crate::model::price_ticker::PriceTicker;
use crate::model::ticker_service::{TickerHandle, TickerService};
use crate::model::time_series::{PriceRange, TimeSeriesGenerator};
use crate::receiver::{CommandServer, ServerContext};
use clap::Parser;
use crossbeam_channel::{bounded, select, Receiver};
use dashboard_common::format::format_price;
use dashboard_common::{DashboardError, Result};
use log::{error, info};
use rand::Rng;
use std::io;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

mod args;
mod dispatcher;
pub mod model;
mod receiver;

fn main() -> Result<(), DashboardError> {
    init_logger();
    let args = Args::parse();

    let range = PriceRange::new(args.price_low, args.price_high)?;
    let dispatcher = Dispatcher::new(
        TimeSeriesGenerator::new(range),
        args.days_back,
        args.days_forward,
    );

    let (shutdown_tx, shutdown_rx) = bounded::<()>(1);
    ctrlc::set_handler(move || {
        info!("Ctrl+C received. Shutting down server...");
        let _ = shutdown_tx.try_send(());
    })
    .map_err(|e| DashboardError::Io(io::Error::other(e.to_string())))?;

    let ticker = PriceTicker::market_indices(rng_from_seed(args.seed))?;
    let handle = TickerService::start(ticker, Duration::from_millis(args.tick_ms));

    let server = CommandServer::new(&args.bind)?;
    let ctx = Arc::new(ServerContext {
        dispatcher,
        subscriptions: handle.subscriptions(),
        seed: args.seed,
    });

    run_until_shutdown(server, ctx, handle, shutdown_rx)
}

/// Serve on a background thread until `shutdown` fires (or its sender is dropped) or
/// the accept loop fails, then stop the ticker so subscribers get `Shutdown`.
fn run_until_shutdown<R: Rng>(
    server: CommandServer,
    ctx: Arc<ServerContext>,
    handle: TickerHandle<R>,
    shutdown: Receiver<()>,
) -> Result<()> {
    let (done_tx, done_rx) = bounded::<Result<()>>(1);
    thread::spawn(move || {
        let _ = done_tx.send(server.serve(ctx));
    });

    let served = select! {
        recv(shutdown) -> _ => Ok(()),
        recv(done_rx) -> served => match served {
            Ok(result) => result,
            Err(_) => Err(DashboardError::ChannelRecv("command server thread exited".to_string())),
        },
    };
    if let Err(e) = &served {
        error!("Command server stopped: {}", e);
    }

    let ticker = handle.stop()?;
    for symbol in ticker.symbols() {
        if let Ok(price) = ticker.price(symbol) {
            info!("Final {} price: {}", symbol, format_price(price));
        }
    }
    served
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
