//! HTTP server implementation.

use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::signal;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use log::{error, info, warn};

use crate::parser::{WireReader, read_request};
use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::router::Router;

/// An HTTP server handling one request per connection.
pub struct HttpServer {
    /// The server configuration.
    pub config: ServerConfig,
    router: Arc<Router>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        let router = Arc::new(Router::new(config.files_dir.clone()));
        Self { config, router }
    }

    /// Set up the TCP listener.
    async fn setup_listener(&self) -> Result<TcpListener, Error> {
        let listener = TcpListener::bind(&self.config.addr).await?;
        info!("Server listening on http://{addr}", addr = self.config.addr);
        info!("Serving files from {dir}", dir = self.config.files_dir.display());
        Ok(listener)
    }

    /// Set up a Ctrl+C handler for graceful shutdown.
    fn setup_ctrl_c_handler(shutdown_tx: mpsc::Sender<()>, tasks: &mut JoinSet<()>) {
        // Spawn a task to handle Ctrl+C
        tasks.spawn(async move {
            match signal::ctrl_c().await {
                Ok(()) => {
                    info!("Received Ctrl+C, initiating graceful shutdown");
                    let _ = shutdown_tx.send(()).await;
                }
                Err(e) => {
                    error!("Error setting up Ctrl+C handler: {e}");
                }
            }
        });
    }

    /// Perform graceful shutdown.
    async fn perform_shutdown(tasks: &mut JoinSet<()>) {
        // Wait for all tasks to complete (with timeout)
        info!("Waiting for {len} active connections to complete...", len = tasks.len());
        let shutdown_timeout = tokio::time::Duration::from_secs(30);
        let _ = tokio::time::timeout(shutdown_timeout, async {
            while let Some(res) = tasks.join_next().await {
                if let Err(e) = res {
                    error!("Task failed during shutdown: {e}");
                }
            }
        })
        .await;

        info!("Server shutdown complete");
    }

    /// Start the server and listen for incoming connections.
    pub async fn start(&self) -> Result<(), Error> {
        // Set up the TCP listener
        let listener = self.setup_listener().await?;

        // Create a channel for shutdown signaling
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);

        // Use JoinSet to keep track of all spawned tasks
        let mut tasks = JoinSet::new();

        // Set up a Ctrl+C handler for graceful shutdown
        Self::setup_ctrl_c_handler(shutdown_tx, &mut tasks);

        loop {
            tokio::select! {
                // Check for shutdown signal
                _ = shutdown_rx.recv() => {
                    info!("Shutting down server...");
                    break;
                }

                // Accept new connections
                accept_result = listener.accept() => {
                    match accept_result {
                        Ok((mut socket, addr)) => {
                            let router = self.router.clone();
                            tasks.spawn(async move {
                                if let Err(e) = Self::handle_connection(&mut socket, router).await {
                                    warn!("Connection from {addr} aborted: {e}");
                                }
                            });
                        },
                        Err(e) => {
                            error!("Error accepting connection: {e}");
                        }
                    }
                }
            }
        }

        // Perform graceful shutdown
        Self::perform_shutdown(&mut tasks).await;

        Ok(())
    }

    /// Serve exactly one request-response cycle on the socket.
    ///
    /// A request that fails to parse aborts the connection without writing
    /// any bytes back; the peer just sees the connection close. The caller
    /// closes the connection either way by dropping the socket.
    pub async fn handle_connection(
        socket: &mut (impl AsyncRead + AsyncWrite + Unpin),
        router: Arc<Router>,
    ) -> Result<(), Error> {
        let request = {
            let mut reader = WireReader::new(&mut *socket);
            read_request(&mut reader).await?
        };

        let response = router.route(&request).await;
        socket.write_all(&response.to_bytes()).await?;

        Ok(())
    }
}
