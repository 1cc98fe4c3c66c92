//! WebSocket relay server.
//!
//! Receives messages from clients and relays them to all other connected clients.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin dengon-server
//! cargo run --bin dengon-server -- --host 0.0.0.0 --port 3000 --evict-on-send-failure
//! ```

use std::sync::Arc;

use clap::Parser;
use dengon_server::{
    config::{DEFAULT_HOST, DEFAULT_PORT, ServerConfig},
    domain::SendFailurePolicy,
    infrastructure::registry::InMemoryConnectionRegistry,
    ui::Server,
    usecase::{
        ConnectClientUseCase, DisconnectClientUseCase, ListConnectionsUseCase,
        RelayMessageUseCase,
    },
};
use dengon_shared::{logger::setup_logger, time::SystemClock};

#[derive(Parser, Debug)]
#[command(name = "dengon-server")]
#[command(about = "WebSocket relay server that broadcasts every message to all other clients", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = DEFAULT_HOST)]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Default log level when RUST_LOG is not set
    #[arg(long, default_value = "debug")]
    log_level: String,

    /// Remove a client from the registry as soon as a relay to it fails
    #[arg(long)]
    evict_on_send_failure: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &args.log_level);

    let config = match ServerConfig::new(
        args.host,
        args.port,
        SendFailurePolicy::from_evict_flag(args.evict_on_send_failure),
    ) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };
    tracing::debug!("Server config: {:?}", config);

    // 1. Registry（インメモリ）
    let registry = Arc::new(InMemoryConnectionRegistry::new());

    // 2. UseCases
    let connect_client_usecase = Arc::new(ConnectClientUseCase::new(
        registry.clone(),
        Arc::new(SystemClock),
    ));
    let disconnect_client_usecase = Arc::new(DisconnectClientUseCase::new(registry.clone()));
    let relay_message_usecase = Arc::new(RelayMessageUseCase::new(
        registry.clone(),
        config.send_failure_policy,
    ));
    let list_connections_usecase = Arc::new(ListConnectionsUseCase::new(registry));

    // 3. Server
    let server = Server::new(
        connect_client_usecase,
        disconnect_client_usecase,
        relay_message_usecase,
        list_connections_usecase,
    );
    if let Err(e) = server.run(&config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
