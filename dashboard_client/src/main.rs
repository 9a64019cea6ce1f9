//! Dashboard Client — a TCP client that asks the dashboard server for panel data and
//! prints it as text. One-shot actions (`refresh`, `predict`) print a single response;
//! `watch` subscribes to the index ticker and prints every tick until Ctrl+C.
//!
//! Usage example (CLI):
//! ```bash
//! dashboard_client --server 192.168.0.10:8090 refresh technical --symbol tsla --windows 10,20
//! dashboard_client predict msft
//! dashboard_client watch
//! ```
#![warn(missing_docs)]
mod args;
mod render;
mod sender;

use crate::args::{Action, Args};
use crate::render::{render_chart, render_panel, render_prediction, render_ticks};
use crate::sender::CommandSender;
use clap::Parser;
use dashboard_common::{DashboardError, Response, Result};
use log::{error, info};
use std::io;
use std::net::Shutdown;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

fn main() -> Result<(), DashboardError> {
    init_logger();
    let args = Args::parse();
    let request = args.action.to_request();

    if let Action::Watch = args.action {
        return watch(&args.server, &request);
    }

    let response = CommandSender::request(&args.server, &request)?;
    print_lines(render_response(response)?);
    Ok(())
}

/// Stream ticks until the server stops or the user presses Ctrl+C.
fn watch(server: &str, request: &dashboard_common::Request) -> Result<()> {
    let (stream, mut reader) = CommandSender::open(server, request)?;
    let shutdown = Arc::new(AtomicBool::new(false));
    {
        let shutdown = shutdown.clone();
        let closer = stream.try_clone()?;
        ctrlc::set_handler(move || {
            info!("Ctrl+C received. Shutting down client...");
            shutdown.store(true, Ordering::SeqCst);
            let _ = closer.shutdown(Shutdown::Both);
        })
        .map_err(|e| DashboardError::Io(io::Error::other(e.to_string())))?;
    }

    info!("Watching index prices from {}. Press Ctrl+C to exit.", server);
    match CommandSender::watch(&mut reader, |updates| print_lines(render_ticks(updates))) {
        Err(DashboardError::Io(_)) if shutdown.load(Ordering::SeqCst) => Ok(()),
        other => other,
    }
}

fn render_response(response: Response) -> Result<Vec<String>> {
    match response {
        Response::Chart { chart, indicators } => {
            let mut lines = render_chart(&chart);
            lines.push(String::new());
            lines.extend(render_panel(&indicators));
            Ok(lines)
        }
        Response::Metrics(panel) => Ok(render_panel(&panel)),
        Response::Prediction { set, chart } => {
            let mut lines = render_prediction(&set);
            lines.push(String::new());
            lines.extend(render_chart(&chart));
            Ok(lines)
        }
        Response::Ticks { updates } => Ok(render_ticks(&updates)),
        Response::Error { message } => {
            error!("Server rejected the request: {}", message);
            Err(DashboardError::Protocol(message))
        }
    }
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
