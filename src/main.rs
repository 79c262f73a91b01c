use clap::{Parser, Subcommand};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use openstack_inventory::config::Config;
use openstack_inventory::output::{print_document, render_inventory, OutputFormat};
use openstack_inventory::processing::ResolvePolicies;
use openstack_inventory::{get_inventory, get_placement_slot, Result};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(version, about = "Cross-referenced inventory of an OpenStack tenant")]
struct Cli {
    /// log4rs configuration file
    #[arg(long, default_value = "log4rs.yml")]
    log_config: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the tenant inventory (default)
    Inventory {
        /// Snapshot file to read instead of the dated cache
        #[arg(long)]
        cache: Option<String>,
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
        /// Fail on subnets and volumes whose references do not resolve
        #[arg(long)]
        strict: bool,
    },
    /// Print the next free node index of OS_CLUSTER_NAME
    Placement {
        /// Snapshot file to take server names from
        #[arg(long)]
        cache: Option<String>,
    },
}

fn init_logging(path: &str) {
    if log4rs::init_file(path, Default::default()).is_ok() {
        return;
    }
    // stdout is reserved for the document
    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
    let config = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn));
    match config.map(log4rs::init_config) {
        Ok(Ok(_)) => {}
        Ok(Err(e)) => eprintln!("failed to initialise logging: {e}"),
        Err(e) => eprintln!("invalid logging configuration: {e}"),
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env()?;
    match cli.command.unwrap_or(Command::Inventory {
        cache: None,
        format: OutputFormat::default(),
        strict: false,
    }) {
        Command::Inventory {
            cache,
            format,
            strict,
        } => {
            let policies = if strict {
                ResolvePolicies::strict()
            } else {
                ResolvePolicies::default()
            };
            let inventory = get_inventory(cache.as_deref(), &config, policies)?;
            print_document(&render_inventory(&inventory), format)
        }
        Command::Placement { cache } => {
            let slot = get_placement_slot(cache.as_deref(), &config)?;
            println!("{}", serde_json::json!({ "node": slot.to_string() }));
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    let cli = Cli::parse();
    init_logging(&cli.log_config);
    dotenv::dotenv().ok();
    log::info!("#Start main()");

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
