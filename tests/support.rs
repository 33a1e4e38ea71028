use std::ffi::OsStr;
use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::path::Path;
use std::process::{Command, Output};
use std::sync::{Arc, Mutex, mpsc};
use std::thread;
use std::time::Duration;

pub const THREE_POSITIONS: &str = r#"[
  {"id":1,"deviceId":7,"fixTime":"2024-01-01T08:00:00.000+00:00","latitude":52.52,"longitude":13.405,"speed":0.0,"course":0.0},
  {"id":2,"deviceId":7,"fixTime":"2024-01-01T08:05:00.000+00:00","latitude":52.523,"longitude":13.41,"speed":12.5,"course":90.0,"address":"Alexanderplatz"},
  {"id":3,"deviceId":7,"fixTime":"2024-01-01T08:10:00.000+00:00","latitude":52.53,"longitude":13.42,"speed":8.0,"course":45.0}
]"#;

pub const DEVICES: &str = r#"[{"id":7,"name":"Truck 7","uniqueId":"veh1","status":"online"}]"#;

#[derive(Clone)]
pub struct MockReply {
    pub status_line: &'static str,
    pub body: &'static str,
}

impl MockReply {
    #[must_use]
    pub const fn ok(body: &'static str) -> Self {
        Self {
            status_line: "HTTP/1.1 200 OK",
            body,
        }
    }

    #[must_use]
    pub const fn server_error() -> Self {
        Self {
            status_line: "HTTP/1.1 500 Internal Server Error",
            body: "{}",
        }
    }
}

pub struct ServerHandle {
    shutdown: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl ServerHandle {
    /// Request lines seen so far, e.g. `GET /api/positions?... HTTP/1.1`.
    #[must_use]
    pub fn request_lines(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        let _send_result = self.shutdown.send(());
        if let Some(handle) = self.thread.take() {
            drop(handle.join());
        }
    }
}

/// Spawn a lightweight HTTP server answering `/api/positions` with `positions`
/// and `/api/devices` with the fixed device list.
///
/// # Errors
///
/// Returns an error if the listener cannot be created or configured.
pub fn spawn_http_server(positions: MockReply) -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind test server failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("set_nonblocking failed: {}", err))?;

    let (shutdown_tx, shutdown_rx) = mpsc::channel();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&requests);

    let handle = thread::spawn(move || {
        loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }

            match listener.accept() {
                Ok((stream, _)) => {
                    let reply = positions.clone();
                    let seen = Arc::clone(&seen);
                    thread::spawn(move || handle_client(stream, &reply, &seen));
                }
                Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(10));
                }
                Err(_) => break,
            }
        }
    });

    Ok((
        format!("http://{}", addr),
        ServerHandle {
            shutdown: shutdown_tx,
            thread: Some(handle),
            requests,
        },
    ))
}

/// Like [`spawn_http_server`], but skips when sockets are not permitted.
///
/// # Errors
///
/// Returns an error if the server fails for any other reason.
pub fn spawn_http_server_or_skip(
    positions: MockReply,
) -> Result<Option<(String, ServerHandle)>, String> {
    match spawn_http_server(positions) {
        Ok(result) => Ok(Some(result)),
        Err(err) if err.contains("Operation not permitted") => {
            eprintln!("Skipping e2e test: {}", err);
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

fn handle_client(mut stream: TcpStream, positions: &MockReply, seen: &Mutex<Vec<String>>) {
    drop(stream.set_nonblocking(false));
    let mut buffer = [0u8; 4096];
    let Ok(read) = stream.read(&mut buffer) else {
        return;
    };
    let request = String::from_utf8_lossy(buffer.get(..read).unwrap_or(&[])).into_owned();
    let request_line = request.lines().next().unwrap_or_default().to_owned();
    if let Ok(mut lines) = seen.lock() {
        lines.push(request_line.clone());
    }

    let reply = if request_line.starts_with("GET /api/devices") {
        MockReply::ok(DEVICES)
    } else {
        positions.clone()
    };
    let response = format!(
        "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        reply.status_line,
        reply.body.len(),
        reply.body
    );
    if stream.write_all(response.as_bytes()).is_err() {
        return;
    }
    if stream.flush().is_err() {
        return;
    }
    drop(stream.shutdown(Shutdown::Both));
}

/// Run the `trackreplay` binary inside `workdir` and capture output.
///
/// # Errors
///
/// Returns an error if the binary cannot be executed.
pub fn run_trackreplay<I, S>(workdir: &Path, args: I) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = trackreplay_bin()?;
    Command::new(bin)
        .args(args)
        .current_dir(workdir)
        .env("RUST_LOG", "error")
        .env("TZ", "UTC")
        .env_remove("TRACKREPLAY_LOG")
        .env_remove("TRACKREPLAY_SERVER")
        .env_remove("TRACKREPLAY_TOKEN")
        .env_remove("TRACKREPLAY_PASSWORD")
        .output()
        .map_err(|err| format!("run trackreplay failed: {}", err))
}

fn trackreplay_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_trackreplay").map_or_else(
        || Err("CARGO_BIN_EXE_trackreplay missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}
