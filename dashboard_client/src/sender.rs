//! Talking to the dashboard server over TCP.
//!
//! One connection per action: write a single request line, then read either one
//! response line or, for a subscription, tick lines until the stream ends.
use std::io::BufReader;
use std::net::TcpStream;

use dashboard_common::command::{read_message, write_message};
use dashboard_common::model::tick::TickUpdate;
use dashboard_common::{DashboardError, Request, Response, Result};
use log::{debug, info};

/// Helper type for sending requests to the server.
pub struct CommandSender;

impl CommandSender {
    /// Connect to `server` and send `request`; returns the write half and a line reader.
    pub fn open(server: &str, request: &Request) -> Result<(TcpStream, BufReader<TcpStream>)> {
        let mut stream = TcpStream::connect(server)
            .map_err(|e| DashboardError::Protocol(format!("Failed to connect to {}: {}", server, e)))?;
        debug!("Sending {:?} to {}", request, server);
        write_message(&mut stream, request)?;
        let reader = BufReader::new(stream.try_clone()?);
        Ok((stream, reader))
    }

    /// Send a one-shot request and wait for its response.
    pub fn request(server: &str, request: &Request) -> Result<Response> {
        let (_stream, mut reader) = Self::open(server, request)?;
        read_message(&mut reader)?
            .ok_or_else(|| DashboardError::Protocol("server closed the connection".to_string()))
    }

    /// Read tick lines from `reader` and hand each batch to `on_ticks` until the server
    /// ends the stream.
    pub fn watch(
        reader: &mut BufReader<TcpStream>,
        mut on_ticks: impl FnMut(&[TickUpdate]),
    ) -> Result<()> {
        while let Some(response) = read_message::<_, Response>(reader)? {
            match response {
                Response::Ticks { updates } => on_ticks(&updates),
                Response::Error { message } => return Err(DashboardError::Protocol(message)),
                other => debug!("Ignoring unexpected message: {:?}", other),
            }
        }
        info!("Tick stream ended");
        Ok(())
    }
}
