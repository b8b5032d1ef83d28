//! SpendWise main entry point

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use spendwise_app::screens::{auth, profile, records};
use spendwise_app::{render_unauthenticated, App, AppError, AppResult};
use spendwise_config::Config;
use spendwise_core::{AmountOperator, FilterState, RecordDraft, RecordType, RegistrationForm};
use std::path::PathBuf;
use tokio::runtime::Runtime;

#[derive(Parser, Debug)]
#[command(name = "spendwise")]
#[command(version = "0.1.0")]
#[command(about = "A terminal client for the SpendWise personal-finance tracker", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and persist the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Register a new account
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
        #[arg(long)]
        codeword: String,
    },
    /// Drop the persisted session
    Logout,
    /// Show the income and expense tables
    Records {
        /// Show only one section: income or expense
        #[arg(long = "type")]
        record_type: Option<String>,
        /// Name or category substring, case-insensitive
        #[arg(long, default_value = "")]
        search: String,
        /// Amount comparison: >, <, >= or <=
        #[arg(long, default_value = ">")]
        operator: String,
        /// Amount threshold for the comparison
        #[arg(long)]
        amount: Option<String>,
        /// Start of the date range (YYYY-MM-DD, inclusive)
        #[arg(long)]
        from: Option<String>,
        /// End of the date range (YYYY-MM-DD, inclusive)
        #[arg(long)]
        to: Option<String>,
    },
    /// Add a record
    Add {
        /// income or expense
        #[arg(long = "type")]
        record_type: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        amount: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Date and time, e.g. 2024-05-02T13:30
        #[arg(long)]
        date: String,
    },
    /// Edit a record; omitted fields keep their current values
    Edit {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        amount: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        date: Option<String>,
    },
    /// Delete a record
    Delete {
        #[arg(long)]
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Show category suggestions
    Categories {
        #[arg(long = "type")]
        record_type: Option<String>,
    },
    /// Show profile data
    Profile,
    /// Change the account password
    ChangePassword {
        #[arg(long)]
        old_password: String,
        #[arg(long)]
        codeword: String,
        #[arg(long)]
        new_password: String,
    },
    /// Change the account email
    ChangeEmail {
        #[arg(long)]
        old_email: String,
        #[arg(long)]
        new_email: String,
        #[arg(long)]
        codeword: String,
    },
    /// Delete the account and all its records
    DeleteAccount {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = Config::load_or_default(args.config.clone())?;
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&config.logging.level),
    )
    .init();
    log::debug!("Config loaded: backend={}", config.api_base());

    let rt = Runtime::new()?;
    let mut app = App::new(config);
    let result = rt.block_on(run(&mut app, args.command));
    app.flush_notifications();

    match result {
        Ok(()) => Ok(()),
        Err(AppError::Unauthorized) => {
            println!("{}", render_unauthenticated());
            std::process::exit(1);
        }
        Err(error) => {
            log::debug!("Command failed: {}", error);
            std::process::exit(1);
        }
    }
}

async fn run(app: &mut App, command: Command) -> AppResult<()> {
    match command {
        Command::Login { email, password } => auth::login(app, &email, &password).await,
        Command::Register {
            username,
            email,
            password,
            confirm_password,
            codeword,
        } => {
            let form = RegistrationForm {
                username,
                email,
                password,
                confirm_password,
                codeword,
            };
            auth::register(app, form).await
        }
        Command::Logout => auth::logout(app),
        Command::Records {
            record_type,
            search,
            operator,
            amount,
            from,
            to,
        } => {
            let section = match record_type {
                Some(value) => Some(parse_record_type(&value)?),
                None => None,
            };
            let filter = FilterState {
                search,
                operator: parse_operator(&operator)?,
                amount: parse_amount(amount)?,
                start_date: parse_date(from)?,
                end_date: parse_date(to)?,
            };
            records::show_records(app, section, filter).await
        }
        Command::Add {
            record_type,
            name,
            category,
            amount,
            description,
            date,
        } => {
            let record_type = parse_record_type(&record_type)?;
            let draft = RecordDraft {
                name,
                category,
                amount,
                description,
                date_time: date,
            };
            records::add_record(app, record_type, draft).await
        }
        Command::Edit {
            id,
            name,
            category,
            amount,
            description,
            date,
        } => {
            let patch = records::DraftPatch {
                name,
                category,
                amount,
                description,
                date_time: date,
            };
            records::edit_record(app, id, patch).await
        }
        Command::Delete { id, yes } => records::delete_record(app, id, yes).await,
        Command::Categories { record_type } => {
            let section = match record_type {
                Some(value) => Some(parse_record_type(&value)?),
                None => None,
            };
            records::show_categories(section);
            Ok(())
        }
        Command::Profile => profile::show_profile(app).await,
        Command::ChangePassword {
            old_password,
            codeword,
            new_password,
        } => profile::change_password(app, &old_password, &codeword, &new_password).await,
        Command::ChangeEmail {
            old_email,
            new_email,
            codeword,
        } => profile::change_email(app, &old_email, &new_email, &codeword).await,
        Command::DeleteAccount { yes } => profile::delete_account(app, yes).await,
    }
}

fn parse_record_type(value: &str) -> AppResult<RecordType> {
    value.parse::<RecordType>().map_err(|message| {
        eprintln!("{}", message);
        AppError::CommandFailed
    })
}

fn parse_operator(value: &str) -> AppResult<AmountOperator> {
    value.parse::<AmountOperator>().map_err(|message| {
        eprintln!("{}", message);
        AppError::CommandFailed
    })
}

fn parse_amount(value: Option<String>) -> AppResult<Option<Decimal>> {
    match value {
        None => Ok(None),
        Some(text) => text.parse::<Decimal>().map(Some).map_err(|_| {
            eprintln!("Invalid amount filter value: {}", text);
            AppError::CommandFailed
        }),
    }
}

fn parse_date(value: Option<String>) -> AppResult<Option<chrono::NaiveDate>> {
    match value {
        None => Ok(None),
        Some(text) => chrono::NaiveDate::parse_from_str(&text, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| {
                eprintln!("Invalid date (expected YYYY-MM-DD): {}", text);
                AppError::CommandFailed
            }),
    }
}
