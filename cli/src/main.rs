use clap::{Args, Parser, Subcommand};
use internboard_cli::backend::BackendClient;
use internboard_cli::{CliError, render};
use listings::{BackendConfig, Credentials, Internship};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "internboard-cli", about = "Browse and apply to internships from the terminal")]
struct Cli {
    #[arg(long, env = "INTERNBOARD_BACKEND_URL")]
    backend_url: String,

    #[arg(long, env = "INTERNBOARD_ANON_KEY", hide_env_values = true)]
    anon_key: String,

    /// Print raw JSON instead of tables.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Internships(InternshipsCommand),
    Apply(ApplyArgs),
}

#[derive(Args, Debug)]
struct InternshipsCommand {
    #[command(subcommand)]
    command: InternshipsSubcommand,
}

#[derive(Subcommand, Debug)]
enum InternshipsSubcommand {
    List {
        /// Case-insensitive filter on title, company, and description.
        #[arg(long, short)]
        search: Option<String>,
    },
    Show {
        id: String,
    },
}

#[derive(Args, Debug)]
struct ApplyArgs {
    internship_id: String,

    #[arg(long, env = "INTERNBOARD_EMAIL")]
    email: Option<String>,

    #[arg(long, env = "INTERNBOARD_PASSWORD", hide_env_values = true)]
    password: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = BackendConfig::new(&cli.backend_url, &cli.anon_key)?;
    let client = BackendClient::new(config)?;

    match cli.command {
        Command::Internships(cmd) => run_internships(&client, cmd, cli.json).await,
        Command::Apply(args) => run_apply(&client, args).await,
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();
}

async fn run_internships(client: &BackendClient, cmd: InternshipsCommand, json: bool) -> Result<(), CliError> {
    match cmd.command {
        InternshipsSubcommand::List { search } => {
            let items = client.list_internships(None).await?;
            let query = search.unwrap_or_default();
            let shown = listings::filter_internships(&items, &query);
            if json {
                print_json(&shown)?;
            } else {
                print!("{}", render::render_table(&shown));
                println!("{}", render::render_count(shown.len(), items.len()));
            }
            Ok(())
        }
        InternshipsSubcommand::Show { id } => {
            let item = client
                .get_internship(None, &id)
                .await?
                .ok_or(CliError::NotFound(id))?;
            if json {
                print_json(&item)?;
            } else {
                print!("{}", render::render_detail(&item));
            }
            Ok(())
        }
    }
}

async fn run_apply(client: &BackendClient, args: ApplyArgs) -> Result<(), CliError> {
    let (Some(email), Some(password)) = (args.email, args.password) else {
        return Err(CliError::MissingCredentials);
    };
    let credentials = Credentials::validate(&email, &password).map_err(CliError::InvalidCredentials)?;

    let session = client.sign_in(&credentials).await?;
    tracing::info!(user = session.display_name(), "signed in");

    let internship: Internship = client
        .get_internship(Some(&session), &args.internship_id)
        .await?
        .ok_or_else(|| CliError::NotFound(args.internship_id.clone()))?;

    client.apply(&session, &internship.id).await?;
    println!("Applied to {} at {}", internship.title, internship.company);
    Ok(())
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
