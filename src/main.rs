use anyhow::Result;
use clap::{Parser, Subcommand};

use workshop::cli::{
    handle_backup_command, handle_client_command, handle_device_command, handle_report_command,
    handle_share_command,
};
use workshop::config::{paths::WorkshopPaths, settings::Settings};
use workshop::storage::Storage;

#[derive(Parser)]
#[command(
    name = "workshop",
    version,
    about = "Repair shop management from the command line",
    long_about = "Workshop tracks a device repair shop's day-to-day work: \
                  clients and their balances, devices from intake to delivery, \
                  invoice numbering, activity reports, and backups."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Client management commands
    #[command(subcommand)]
    Client(workshop::cli::ClientCommands),

    /// Device lifecycle commands
    #[command(subcommand)]
    Device(workshop::cli::DeviceCommands),

    /// Repair activity reports
    #[command(subcommand)]
    Report(workshop::cli::ReportCommands),

    /// Backup and restore commands
    #[command(subcommand)]
    Backup(workshop::cli::BackupCommands),

    /// Share receipts and status with clients
    #[command(subcommand)]
    Share(workshop::cli::ShareCommands),

    /// Initialize the workshop data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = WorkshopPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Client(cmd)) => {
            handle_client_command(&storage, cmd)?;
        }
        Some(Commands::Device(cmd)) => {
            handle_device_command(&storage, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, cmd)?;
        }
        Some(Commands::Backup(cmd)) => {
            handle_backup_command(&paths, cmd)?;
        }
        Some(Commands::Share(cmd)) => {
            handle_share_command(&storage, cmd)?;
        }
        Some(Commands::Init) => {
            println!("Initializing workshop at: {}", paths.data_dir().display());
            workshop::storage::init::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'workshop client add <name>' to register your first client.");
            println!("Run 'workshop device receive <client> <brand> <model>' for an intake.");
        }
        Some(Commands::Config) => {
            println!("Workshop Configuration");
            println!("======================");
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Image directory:  {}", paths.images_dir().display());
            println!("Backup directory: {}", paths.backup_dir().display());
            println!();
            println!("Settings:");
            println!("  Shop name:   {}", settings.shop_name);
            println!("  Currency:    {}", settings.currency_symbol);
            println!("  Date format: {}", settings.date_format);
            println!("  SMTP server: {}:{}", settings.smtp.server, settings.smtp.port);
        }
        None => {
            println!("Workshop - repair shop management from the command line");
            println!();
            println!("Run 'workshop --help' for usage information.");
            println!("Run 'workshop init' to set up the data directory.");
        }
    }

    Ok(())
}
