//! Scheduled ticker task and tick broadcasting.
//!
//! `TickerService::start` moves a `PriceTicker` onto its own thread, ticks it once
//! straight away and then once per period, and broadcasts every result to all
//! subscribers over `crossbeam_channel`. Subscribers register by sending a
//! `Sender<TickEvent>` through the handle.
//!
//! Event model:
//! - `TickEvent::Tick(updates)` — one tick's worth of updates, one per tracked symbol.
//! - `TickEvent::Shutdown` — the service is stopping; consumers should finish.
//!
//! Ticks never overlap: the next one is only taken from the schedule after the
//! previous broadcast returns. Broadcast is best-effort and a subscriber whose
//! receiver is gone is dropped.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender, select, tick, unbounded};
use dashboard_common::model::tick::TickUpdate;
use dashboard_common::{DashboardError, Result};
use log::{debug, info};
use rand::Rng;

use crate::model::price_ticker::PriceTicker;

/// Message sent by the ticker thread to its subscribers.
#[derive(Debug, Clone)]
pub enum TickEvent {
    /// Updates from one tick.
    Tick(Vec<TickUpdate>),
    /// Global shutdown notification for all consumers.
    Shutdown,
}

/// Entry point for starting the ticker thread.
pub struct TickerService;

impl TickerService {
    /// Start ticking `ticker` every `period` on a background thread.
    pub fn start<R>(ticker: PriceTicker<R>, period: Duration) -> TickerHandle<R>
    where
        R: Rng + Send + 'static,
    {
        let (subscribe_tx, subscribe_rx) = unbounded::<Sender<TickEvent>>();
        let (stop_tx, stop_rx) = unbounded::<()>();

        let join = thread::spawn(move || run(ticker, period, subscribe_rx, stop_rx));

        TickerHandle {
            subscribe_tx,
            stop_tx,
            join,
        }
    }
}

/// Control side of a running ticker thread.
pub struct TickerHandle<R> {
    subscribe_tx: Sender<Sender<TickEvent>>,
    stop_tx: Sender<()>,
    join: JoinHandle<PriceTicker<R>>,
}

impl<R> TickerHandle<R> {
    /// Sender that registers new subscriber channels; cheap to clone into other threads.
    pub fn subscriptions(&self) -> Sender<Sender<TickEvent>> {
        self.subscribe_tx.clone()
    }

    /// Register a new subscriber and return its receiving end.
    pub fn subscribe(&self) -> Result<Receiver<TickEvent>> {
        subscribe(&self.subscribe_tx)
    }

    /// Stop the thread, wait for it and hand back the ticker with its final prices.
    pub fn stop(self) -> Result<PriceTicker<R>> {
        self.stop_tx
            .send(())
            .map_err(|e| DashboardError::ChannelSend(format!("ticker stop: {}", e)))?;
        self.join
            .join()
            .map_err(|_| DashboardError::ChannelRecv("ticker thread panicked".to_string()))
    }
}

/// Register through a subscription sender obtained from [`TickerHandle::subscriptions`].
pub fn subscribe(subscriptions: &Sender<Sender<TickEvent>>) -> Result<Receiver<TickEvent>> {
    let (tx, rx) = unbounded::<TickEvent>();
    subscriptions
        .send(tx)
        .map_err(|e| DashboardError::ChannelSend(format!("ticker subscribe: {}", e)))?;
    Ok(rx)
}

fn run<R: Rng>(
    mut ticker: PriceTicker<R>,
    period: Duration,
    subscribe_rx: Receiver<Sender<TickEvent>>,
    stop_rx: Receiver<()>,
) -> PriceTicker<R> {
    let mut clients: Vec<Sender<TickEvent>> = Vec::new();
    let schedule = tick(period);

    info!(
        "Ticker started for {:?}, period {:?} (Thread ID: {:?})",
        ticker.symbols(),
        period,
        thread::current().id()
    );
    broadcast(&mut clients, TickEvent::Tick(ticker.tick()));

    loop {
        select! {
            recv(stop_rx) -> _ => break,
            recv(subscribe_rx) -> msg => match msg {
                Ok(client_tx) => {
                    clients.push(client_tx);
                    info!("Ticker: new subscriber. Total subscribers: {}", clients.len());
                }
                Err(_) => break,
            },
            recv(schedule) -> _ => {
                let updates = ticker.tick();
                debug!("Tick: {:?}", updates);
                broadcast(&mut clients, TickEvent::Tick(updates));
            }
        }
    }

    // Late subscribers still get the shutdown notice.
    clients.extend(subscribe_rx.try_iter());
    broadcast(&mut clients, TickEvent::Shutdown);
    info!("Ticker stopped");
    ticker
}

fn broadcast(clients: &mut Vec<Sender<TickEvent>>, event: TickEvent) {
    let before = clients.len();
    clients.retain(|client_tx| client_tx.send(event.clone()).is_ok());
    if clients.len() < before {
        info!(
            "Ticker: dropped {} closed subscriber(s). Total subscribers: {}",
            before - clients.len(),
            clients.len()
        );
    }
}
