use clap::Parser;
use tempserd::collectors::system::SystemSource;
use tempserd::collectors::SensorSource;
use tempserd::config::Config;
use tempserd::poller;
use tempserd::serial::SerialSink;
use tokio::sync::watch;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tempserd")]
#[command(version)]
struct Cli {
    #[arg(long, default_value = "./config.yaml")]
    config: String,
    #[arg(long)]
    print_default_config: bool,
    /// Override the configured serial port.
    #[arg(long)]
    port: Option<String>,
    /// Print the readings visible to the sensor source and exit.
    #[arg(long)]
    list_sensors: bool,
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();
    if cli.print_default_config {
        println!("{}", Config::example_yaml());
        return;
    }
    if cli.list_sensors {
        let mut source = SystemSource::new();
        for reading in source.readings() {
            println!(
                "{} | {} | {:.1}",
                reading.category,
                reading.label,
                reading.value / 10.0
            );
        }
        return;
    }

    let mut cfg = match Config::load_from_file(&cli.config) {
        Ok(cfg) => cfg,
        Err(err) => {
            error!(error = %err, "could not load configuration");
            std::process::exit(1);
        }
    };
    if let Some(port) = cli.port {
        cfg.serial_port = port;
    }

    info!(
        port = %cfg.serial_port,
        baud = cfg.baud_rate,
        interval_secs = cfg.poll_interval_secs,
        category = %cfg.sensor_category,
        label = %cfg.sensor_label,
        "starting tempserd"
    );

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let poller_task = {
        let cfg = cfg.clone();
        tokio::spawn(async move {
            let mut source = SystemSource::new();
            let mut sink = SerialSink::new(
                &cfg.serial_port,
                cfg.baud_rate,
                cfg.reconnect_initial_ms,
                cfg.reconnect_max_ms,
            );
            poller::run(&cfg, &mut source, &mut sink, shutdown_rx).await;
        })
    };

    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "could not listen for Ctrl+C");
    }
    info!("Ctrl+C received, shutting down");

    let _ = shutdown_tx.send(true);
    let _ = poller_task.await;
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
