//! Recording stub server shared by the integration suites.
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use axum::{Router, extract::State, http::{Method, StatusCode, Uri}};
use tokio::sync::oneshot;
use userprobe::HttpUserClient;

#[derive(Clone, Debug, PartialEq)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub body: String,
}

#[derive(Clone)]
struct Stub {
    requests: Arc<Mutex<Vec<Recorded>>>,
    reply: (StatusCode, &'static str),
}

async fn record(State(stub): State<Stub>, method: Method, uri: Uri, body: String) -> (StatusCode, &'static str) {
    stub.requests.lock().unwrap().push(Recorded { method, path: uri.path().to_owned(), body });
    stub.reply
}

pub struct StubServer {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<Recorded>>>,
    shutdown: Option<oneshot::Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl StubServer {
    /// Binds an ephemeral port and serves from a background runtime.
    /// The blocking client must not run inside a tokio context, so
    /// the server gets its own thread.
    pub fn start(status: StatusCode, body: &'static str) -> StubServer {
        StubServer::start_on("127.0.0.1:0", status, body)
    }

    pub fn start_on(addr: &str, status: StatusCode, body: &'static str) -> StubServer {
        StubServer::try_start_on(addr, status, body).unwrap()
    }

    /// Fails when `addr` cannot be bound, e.g. a real server holds the port.
    pub fn try_start_on(addr: &str, status: StatusCode, body: &'static str) -> std::io::Result<StubServer> {
        let listener = std::net::TcpListener::bind(addr)?;
        listener.set_nonblocking(true)?;
        let addr = listener.local_addr()?;

        let requests = Arc::new(Mutex::new(Vec::new()));
        let stub = Stub { requests: requests.clone(), reply: (status, body) };

        let (shutdown, stopped) = oneshot::channel::<()>();
        let thread = std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::from_std(listener).unwrap();
                let app = Router::new().fallback(record).with_state(stub);
                axum::serve(listener, app)
                    .with_graceful_shutdown(async move { stopped.await.ok(); })
                    .await
                    .unwrap();
            });
        });

        Ok(StubServer { addr, requests, shutdown: Some(shutdown), thread: Some(thread) })
    }

    pub fn url(&self) -> String {
        format!("http://{}/user", self.addr)
    }

    pub fn client(&self) -> HttpUserClient {
        HttpUserClient::new(&self.url())
    }

    pub fn recorded(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

// releases the port before the next test needs it
impl Drop for StubServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}
