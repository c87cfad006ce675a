use clap::Parser;
use dualdial_domain::CliOverrides;
use tokio::time::Instant;
use tracing::{error, info};

mod bootstrap;
mod di;
mod report;

#[derive(Parser)]
#[command(name = "dualdial")]
#[command(version)]
#[command(about = "Resolve a network address into a Happy Eyeballs dial plan")]
struct Cli {
    /// Network name (tcp, tcp4, tcp6, udp, udp4, udp6, ip, ip4, ip6)
    network: String,

    /// Address to resolve, e.g. example.com:https or [fe80::1%eth0]:80
    address: String,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Lookup timeout in milliseconds
    #[arg(short = 't', long)]
    timeout_ms: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Treat IPv4 as unavailable
    #[arg(long)]
    no_ipv4: bool,

    /// Treat IPv6 as unavailable
    #[arg(long)]
    no_ipv6: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        lookup_timeout_ms: cli.timeout_ms,
        disable_ipv4: cli.no_ipv4,
        disable_ipv6: cli.no_ipv6,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    let services = di::Services::new(&config);
    info!(
        network = %cli.network,
        address = %cli.address,
        timeout_ms = config.resolver.lookup_timeout_ms,
        "Resolving"
    );

    let deadline = Instant::now() + config.resolver.lookup_timeout();
    let addrs = services
        .resolve_addrs
        .execute(&cli.network, &cli.address, deadline)
        .await
        .map_err(|e| {
            error!(error = %e, "Resolution failed");
            anyhow::anyhow!(e)
        })?;

    print!("{}", report::render(&addrs, &services.zones));
    Ok(())
}
