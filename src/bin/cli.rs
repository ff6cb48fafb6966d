//! kvlink CLI Client
//!
//! Command-line interface for reading and writing a Redis-backed store.

use bytes::Bytes;
use clap::{Parser, Subcommand};
use kvlink::network::Connection;
use kvlink::protocol::Command;
use kvlink::{Endpoint, KeyValueStore, KvError, RedisKeyValueStore, StoreConfig};
use tracing_subscriber::{fmt, EnvFilter};

/// kvlink CLI
#[derive(Parser, Debug)]
#[command(name = "kvlink-cli")]
#[command(about = "CLI for the kvlink Redis-backed key-value store")]
#[command(version)]
struct Args {
    /// Server URI
    #[arg(short, long, default_value = "redis://127.0.0.1:6379")]
    uri: String,

    /// Treat keys and values as hex strings, and print values as hex
    #[arg(long)]
    hex: bool,

    /// Per-command timeout in milliseconds (0 disables)
    #[arg(short, long, default_value = "5000")]
    timeout_ms: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Get a value by key
    Get {
        /// The key to get
        key: String,
    },

    /// Set a key-value pair
    Put {
        /// The key to set
        key: String,

        /// The value to set
        value: String,
    },

    /// Ping the server
    Ping,
}

/// Log filter used when `RUST_LOG` is not set
const DEFAULT_LOG_FILTER: &str = "info,kvlink=debug";

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args).await {
        tracing::error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> kvlink::Result<()> {
    let config = StoreConfig::builder()
        .response_timeout_ms(args.timeout_ms)
        .build();
    let endpoint = Endpoint::Uri(args.uri.clone());

    if let Commands::Ping = args.command {
        let connection = Connection::open(&endpoint, &config).await?;
        let reply = connection.execute(Command::Ping).await?;
        println!("{}", render(reply.as_deref().unwrap_or_default(), false));
        return Ok(());
    }

    let store = RedisKeyValueStore::open_with_config(endpoint, config).await?;
    let result = execute(&store, &args).await;
    store.close()?;
    result
}

async fn execute(store: &dyn KeyValueStore, args: &Args) -> kvlink::Result<()> {
    match &args.command {
        Commands::Get { key } => match store.get(parse(key, args.hex)?).await? {
            Some(value) => println!("{}", render(&value, args.hex)),
            None => println!("(nil)"),
        },
        Commands::Put { key, value } => {
            store
                .put(parse(key, args.hex)?, parse(value, args.hex)?)
                .await?;
            println!("OK");
        }
        Commands::Ping => {}
    }
    Ok(())
}

fn parse(input: &str, hex: bool) -> kvlink::Result<Bytes> {
    if hex {
        hex::decode(input)
            .map(Bytes::from)
            .map_err(|e| KvError::Config(format!("invalid hex '{}': {}", input, e)))
    } else {
        Ok(Bytes::copy_from_slice(input.as_bytes()))
    }
}

fn render(value: &[u8], hex: bool) -> String {
    if hex {
        hex::encode(value)
    } else {
        String::from_utf8_lossy(value).into_owned()
    }
}
