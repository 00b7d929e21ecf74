//! hotel-admin - command-line front end for the HotelSystem admin API

use anyhow::{Context, bail};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use hotel_admin_client::auth::rbac::{MENU_RULES, PermissionGuard, Role};
use hotel_admin_client::sdk::models::{LogQuery, ReservationStatus};
use hotel_admin_client::sdk::{ApiClient, ClientConfig, FileStorage, Session};
use hotel_admin_client::ui::{MemoryDocument, MemoryNavigator, TracingNotifier};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info};

const DEFAULT_SESSION_FILE: &str = ".hotel-admin/session.json";

#[derive(Parser)]
#[command(name = "hotel-admin", version, about = "HotelSystem admin console client")]
struct Cli {
    /// YAML configuration file
    #[arg(long, env = "HOTEL_ADMIN_CONFIG")]
    config: Option<PathBuf>,

    /// Backend origin, overrides the configuration
    #[arg(long)]
    base_url: Option<String>,

    /// File holding the persisted session
    #[arg(long)]
    session_file: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, env = "HOTEL_ADMIN_LOG_JSON")]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log in and persist the session
    Login {
        #[arg(long)]
        username: String,
        #[arg(long, env = "HOTEL_ADMIN_PASSWORD")]
        password: String,
        /// ADMIN, MANAGER, RECEPTIONIST or HOUSEKEEPING
        #[arg(long, value_parser = parse_role)]
        role: Role,
    },
    /// Forget the persisted session
    Logout,
    /// Show the persisted session
    Whoami,
    /// Menus visible to the current role
    Menus,
    #[command(subcommand)]
    Rooms(RoomsCommand),
    #[command(subcommand)]
    Reservations(ReservationsCommand),
    #[command(subcommand)]
    Guests(GuestsCommand),
    #[command(subcommand)]
    Users(UsersCommand),
    #[command(subcommand)]
    Stats(StatsCommand),
    #[command(subcommand)]
    Logs(LogsCommand),
    #[command(subcommand)]
    Settings(SettingsCommand),
}

#[derive(Subcommand)]
enum RoomsCommand {
    List,
    Get { id: i64 },
    /// Rooms free between two dates
    Available {
        #[arg(long)]
        check_in: Option<NaiveDate>,
        #[arg(long)]
        check_out: Option<NaiveDate>,
    },
}

#[derive(Subcommand)]
enum ReservationsCommand {
    List,
    Get { id: i64 },
    /// PENDING, CONFIRMED, CHECKED_IN, CHECKED_OUT or CANCELLED
    Status {
        #[arg(value_parser = parse_reservation_status)]
        status: ReservationStatus,
    },
    Checkin { id: i64 },
    Checkout { id: i64 },
    Cancel {
        id: i64,
        #[arg(long)]
        reason: Option<String>,
    },
}

#[derive(Subcommand)]
enum GuestsCommand {
    List,
    Get { id: i64 },
    Search(GuestSearch),
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct GuestSearch {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    id_card: Option<String>,
}

#[derive(Subcommand)]
enum UsersCommand {
    List,
    Get { id: i64 },
}

#[derive(Subcommand)]
enum StatsCommand {
    Today,
    Range { start: NaiveDate, end: NaiveDate },
}

#[derive(Subcommand)]
enum LogsCommand {
    Recent {
        #[arg(long, default_value_t = 50)]
        limit: u32,
    },
    List {
        #[arg(long, default_value_t = 0)]
        page: u32,
        #[arg(long, default_value_t = 20)]
        size: u32,
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        action: Option<String>,
    },
}

#[derive(Subcommand)]
enum SettingsCommand {
    List,
    Get { key: String },
}

fn parse_role(s: &str) -> Result<Role, String> {
    s.to_ascii_uppercase().parse()
}

fn parse_reservation_status(s: &str) -> Result<ReservationStatus, String> {
    serde_json::from_value(serde_json::Value::String(s.to_ascii_uppercase()))
        .map_err(|_| format!("Unknown reservation status: {}", s))
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<ClientConfig> {
    let mut config = match &cli.config {
        Some(path) => ClientConfig::from_file(path)?,
        None => ClientConfig::from_env()?,
    };
    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(path) = &cli.session_file {
        config.session_file = Some(path.clone());
    }
    config.validate()?;
    Ok(config)
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    let session_file = config
        .session_file
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_FILE));
    debug!("Using session file {}", session_file.display());

    let storage = FileStorage::open(&session_file)
        .with_context(|| format!("opening session file {}", session_file.display()))?;
    let session = Session::open(Arc::new(storage));
    let navigator = Arc::new(MemoryNavigator::new("/admin/console"));
    let client = ApiClient::new(config, session.clone(), navigator.clone())?;

    let guard = PermissionGuard::new(
        session.clone(),
        Arc::new(MemoryDocument::with_elements(
            MENU_RULES.iter().map(|rule| rule.element_id),
        )),
        navigator.clone(),
        Arc::new(TracingNotifier),
    )
    .with_dashboard_page(&client.config().dashboard_page);

    let result = dispatch(&client, &guard, cli.command).await;

    if let Some(location) = navigator.last_redirect() {
        info!("Console redirected to {}", location);
    }
    result
}

async fn dispatch(
    client: &ApiClient,
    guard: &PermissionGuard,
    command: Command,
) -> anyhow::Result<()> {
    let session = client.session();
    match command {
        Command::Login {
            username,
            password,
            role,
        } => {
            let login = client.auth().login(&username, &password, role).await?;
            print_json(&login)
        }
        Command::Logout => {
            client.auth().logout()?;
            println!("Logged out");
            Ok(())
        }
        Command::Whoami => {
            let state = session.snapshot();
            if state.token.is_none() {
                bail!("not logged in");
            }
            print_json(&serde_json::json!({
                "username": state.username,
                "role": state.role,
            }))
        }
        Command::Menus => print_json(&guard.hide_unauthorized_menus().shown),
        Command::Rooms(cmd) => match cmd {
            RoomsCommand::List => print_json(&client.rooms().get_all().await?),
            RoomsCommand::Get { id } => print_json(&client.rooms().get_by_id(id).await?),
            RoomsCommand::Available {
                check_in,
                check_out,
            } => print_json(&client.rooms().get_available(check_in, check_out).await?),
        },
        Command::Reservations(cmd) => {
            let reservations = client.reservations();
            match cmd {
                ReservationsCommand::List => print_json(&reservations.get_all().await?),
                ReservationsCommand::Get { id } => print_json(&reservations.get_by_id(id).await?),
                ReservationsCommand::Status { status } => {
                    print_json(&reservations.get_by_status(status).await?)
                }
                ReservationsCommand::Checkin { id } => {
                    print_json(&reservations.check_in(id, None).await?)
                }
                ReservationsCommand::Checkout { id } => {
                    print_json(&reservations.check_out(id, None).await?)
                }
                ReservationsCommand::Cancel { id, reason } => {
                    print_json(&reservations.cancel(id, reason.as_deref()).await?)
                }
            }
        }
        Command::Guests(cmd) => match cmd {
            GuestsCommand::List => print_json(&client.guests().get_all().await?),
            GuestsCommand::Get { id } => print_json(&client.guests().get_by_id(id).await?),
            GuestsCommand::Search(search) => {
                if let Some(name) = search.name {
                    print_json(&client.guests().search_by_name(&name).await?)
                } else if let Some(phone) = search.phone {
                    print_json(&client.guests().search_by_phone(&phone).await?)
                } else if let Some(id_card) = search.id_card {
                    print_json(&client.guests().search_by_id_card(&id_card).await?)
                } else {
                    bail!("one of --name, --phone or --id-card is required")
                }
            }
        },
        Command::Users(cmd) => {
            if !guard.check_page_access(&[Role::Admin], None) {
                bail!("user management requires the ADMIN role");
            }
            match cmd {
                UsersCommand::List => print_json(&client.users().get_all().await?),
                UsersCommand::Get { id } => print_json(&client.users().get_by_id(id).await?),
            }
        }
        Command::Stats(cmd) => match cmd {
            StatsCommand::Today => print_json(&client.statistics().get_today().await?),
            StatsCommand::Range { start, end } => {
                if end < start {
                    bail!("end date {} is before start date {}", end, start);
                }
                print_json(&client.statistics().get_date_range(start, end).await?)
            }
        },
        Command::Logs(cmd) => match cmd {
            LogsCommand::Recent { limit } => print_json(&client.logs().recent(limit).await?),
            LogsCommand::List {
                page,
                size,
                username,
                action,
            } => {
                let filter = LogQuery {
                    page,
                    size,
                    username,
                    action,
                    ..Default::default()
                };
                print_json(&client.logs().list(&filter).await?)
            }
        },
        Command::Settings(cmd) => match cmd {
            SettingsCommand::List => print_json(&client.settings().get_all().await?),
            SettingsCommand::Get { key } => print_json(&client.settings().get_by_key(&key).await?),
        },
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize logging system
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let logs = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if cli.log_json {
        logs.json().init();
    } else {
        logs.init();
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
