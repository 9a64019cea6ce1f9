//! TCP command server.
//!
//! Accepts client connections and serves each one on its own thread: one JSON request
//! line in, one JSON response line out, or a stream of tick lines for `subscribe`.
//! A malformed request or a failed write only ends that client's connection.
use std::io::{BufReader, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use crossbeam_channel::{Receiver, Sender};
use dashboard_common::command::{read_message, write_message};
use dashboard_common::{Request, Response, Result};
use log::{debug, error, info, warn};
use rand::rngs::StdRng;

use crate::args::rng_from_seed;
use crate::dispatcher::Dispatcher;
use crate::model::ticker_service::{self, TickEvent};

/// How long a client may take to send its request line.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything a connection handler needs, shared across connection threads.
pub struct ServerContext {
    /// Builds the non-streaming responses.
    pub dispatcher: Dispatcher,
    /// Registers tick subscribers with the ticker thread.
    pub subscriptions: Sender<Sender<TickEvent>>,
    /// Fixed seed for reproducible responses; fresh OS entropy per connection otherwise.
    pub seed: Option<u64>,
}

impl ServerContext {
    fn rng(&self) -> StdRng {
        rng_from_seed(self.seed)
    }
}

/// Listening side of the command protocol.
pub struct CommandServer {
    listener: TcpListener,
}

impl CommandServer {
    /// Bind to `bind_addr` (e.g., `0.0.0.0:8090`).
    pub fn new(bind_addr: &str) -> Result<Self> {
        let listener = TcpListener::bind(bind_addr)?;
        Ok(Self { listener })
    }

    /// Address actually bound (useful when binding port 0).
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Blocking accept loop; each connection is handled on a new thread.
    pub fn serve(self, ctx: Arc<ServerContext>) -> Result<()> {
        info!("Command TCP server is started on {}", self.listener.local_addr()?);

        for stream in self.listener.incoming() {
            match stream {
                Ok(stream) => {
                    let ctx = Arc::clone(&ctx);
                    thread::spawn(move || {
                        let peer = stream.peer_addr().ok();
                        if let Err(e) = handle_connection(stream, &ctx) {
                            warn!("Connection {:?} ended with error: {}", peer, e);
                        }
                    });
                }
                Err(e) => error!("TCP connection error: {}", e),
            }
        }
        Ok(())
    }
}

fn handle_connection(stream: TcpStream, ctx: &ServerContext) -> Result<()> {
    let peer = stream.peer_addr()?;
    stream.set_read_timeout(Some(REQUEST_TIMEOUT))?;
    let mut reader = BufReader::new(stream.try_clone()?);
    let mut writer = stream;

    let request: Request = match read_message(&mut reader) {
        Ok(Some(request)) => request,
        Ok(None) => {
            debug!("{} closed without sending a request", peer);
            return Ok(());
        }
        Err(e) => {
            write_message(&mut writer, &Response::from(&e))?;
            return Err(e);
        }
    };
    info!("Received {:?} from {}", request, peer);

    match request {
        Request::Subscribe => {
            let events = ticker_service::subscribe(&ctx.subscriptions)?;
            info!("Streaming ticks to {}", peer);
            let result = stream_ticks(&mut writer, events);
            info!("Tick stream for {} closed", peer);
            result
        }
        other => {
            let response = ctx
                .dispatcher
                .handle(&mut ctx.rng(), today(), &other)
                .unwrap_or_else(|e| {
                    warn!("Request from {} rejected: {}", peer, e);
                    Response::from(&e)
                });
            write_message(&mut writer, &response)
        }
    }
}

/// Forward every tick from `events` to `writer` as a `ticks` line until the ticker
/// shuts down or a write fails.
pub fn stream_ticks<W: Write>(writer: &mut W, events: Receiver<TickEvent>) -> Result<()> {
    for event in events.iter() {
        match event {
            TickEvent::Tick(updates) => write_message(writer, &Response::Ticks { updates })?,
            TickEvent::Shutdown => break,
        }
    }
    Ok(())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::price_ticker::PriceTicker;
    use crate::model::ticker_service::TickerService;
    use crate::model::time_series::TimeSeriesGenerator;
    use crossbeam_channel::unbounded;
    use dashboard_common::command::RefreshRequest;
    use dashboard_common::model::tick::{Direction, TickUpdate};
    use dashboard_common::tool::AnalysisTool;
    use dashboard_common::command::MAX_MESSAGE_BYTES;
    use rand::SeedableRng;

    fn spawn_server(subscriptions: Sender<Sender<TickEvent>>) -> SocketAddr {
        let server = CommandServer::new("127.0.0.1:0").unwrap();
        let addr = server.local_addr().unwrap();
        let ctx = Arc::new(ServerContext {
            dispatcher: Dispatcher::new(TimeSeriesGenerator::default(), 30, 30),
            subscriptions,
            seed: Some(61),
        });
        thread::spawn(move || server.serve(ctx));
        addr
    }

    fn exchange(addr: SocketAddr, request_line: &str) -> Response {
        let mut stream = TcpStream::connect(addr).unwrap();
        stream.write_all(request_line.as_bytes()).unwrap();
        let mut reader = BufReader::new(stream);
        read_message(&mut reader).unwrap().unwrap()
    }

    #[test]
    fn stream_ticks_writes_one_line_per_tick_until_shutdown() {
        let (tx, rx) = unbounded();
        let update = TickUpdate {
            symbol: "dow".into(),
            price: 37000.0,
            direction: Direction::Down,
        };
        tx.send(TickEvent::Tick(vec![update.clone()])).unwrap();
        tx.send(TickEvent::Tick(vec![update])).unwrap();
        tx.send(TickEvent::Shutdown).unwrap();
        tx.send(TickEvent::Tick(Vec::new())).unwrap();

        let mut out = Vec::new();
        stream_ticks(&mut out, rx).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 2);
    }

    #[test]
    fn refresh_over_tcp_returns_metrics() {
        let (subscriptions, _unused) = unbounded();
        let addr = spawn_server(subscriptions);

        let mut line =
            serde_json::to_string(&Request::Refresh(RefreshRequest::new(AnalysisTool::Fundamental)))
                .unwrap();
        line.push('\n');
        match exchange(addr, &line) {
            Response::Metrics(panel) => assert_eq!(panel.tool, AnalysisTool::Fundamental),
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[test]
    fn malformed_request_gets_error_response() {
        let (subscriptions, _unused) = unbounded();
        let addr = spawn_server(subscriptions);
        assert!(matches!(exchange(addr, "{nonsense\n"), Response::Error { .. }));
    }

    #[test]
    fn unterminated_oversized_request_gets_error_response() {
        let (subscriptions, _unused) = unbounded();
        let addr = spawn_server(subscriptions);
        let line = "a".repeat(MAX_MESSAGE_BYTES as usize);
        match exchange(addr, &line) {
            Response::Error { message } => assert!(message.contains("exceeds")),
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[test]
    fn invalid_symbol_gets_error_response() {
        let (subscriptions, _unused) = unbounded();
        let addr = spawn_server(subscriptions);
        let response = exchange(addr, "{\"type\":\"predict\",\"symbol\":\"  \"}\n");
        match response {
            Response::Error { message } => assert!(message.contains("Invalid argument")),
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[test]
    fn subscribe_over_tcp_streams_ticks() {
        let ticker = PriceTicker::market_indices(StdRng::seed_from_u64(62)).unwrap();
        let handle = TickerService::start(ticker, Duration::from_millis(10));
        let addr = spawn_server(handle.subscriptions());

        let mut stream = TcpStream::connect(addr).unwrap();
        stream.write_all(b"{\"type\":\"subscribe\"}\n").unwrap();
        let mut reader = BufReader::new(stream);
        let response: Response = read_message(&mut reader).unwrap().unwrap();
        match response {
            Response::Ticks { updates } => assert_eq!(updates.len(), 3),
            other => panic!("unexpected response: {:?}", other),
        }
        drop(reader);
        handle.stop().unwrap();
    }
}
