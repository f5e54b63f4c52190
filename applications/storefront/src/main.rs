/// Learn2Code - command-line storefront
use clap::{Parser, Subcommand};
use learn2code::commands::{self, checkout::CheckoutOptions};
use learn2code::{AppConfig, Storefront};
use learn2code_core::{CourseId, Role, StudentId};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "learn2code")]
#[command(about = "Learn2Code course storefront", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./learn2code.toml when present)
    #[arg(short, long, global = true, env = "LEARN2CODE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List courses for sale
    Courses {
        /// Only show courses whose title or description contains this
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Create an account
    Register {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
        /// PARENT or STUDENT
        #[arg(short, long)]
        role: Option<Role>,
    },
    /// Sign in and remember the session
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Inspect or change the cart
    Cart {
        #[command(subcommand)]
        action: Option<CartAction>,
    },
    /// Pay for the cart
    Checkout {
        #[arg(long)]
        billing_name: Option<String>,
        #[arg(long)]
        billing_email: Option<String>,
        #[arg(long, default_value = "visa")]
        card_brand: String,
        #[arg(long, default_value = "4242")]
        card_last4: String,
        /// Enroll the courses under this student
        #[arg(long)]
        student_id: Option<StudentId>,
    },
    /// Courses you are enrolled in
    MyCourses {
        #[arg(long)]
        student_id: Option<StudentId>,
    },
    /// Payment history
    Receipts {
        /// Print the full receipt for every payment
        #[arg(long)]
        full: bool,
    },
    /// Manage student profiles
    Students {
        #[command(subcommand)]
        action: StudentsAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show items and totals
    Show,
    /// Add a course from the catalog
    Add { course_id: CourseId },
    /// Remove a course
    Remove { course_id: CourseId },
    /// Set the quantity of a course (0 removes it)
    Set {
        course_id: CourseId,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum StudentsAction {
    /// List students
    List {
        /// Include enrollment counts
        #[arg(long)]
        with_stats: bool,
    },
    /// Add a student
    Add {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        age: Option<u32>,
        #[arg(long)]
        avatar_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing on stderr so command output stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "learn2code=info,learn2code_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;
    config.validate()?;
    tracing::debug!(base_url = %config.api.base_url, data_dir = ?config.storage.data_dir, "Configuration loaded");

    let app = Storefront::new(config)?;
    let output = match run(&app, cli.command).await {
        Ok(output) => output,
        Err(e) => {
            if let Some(hint) = e.hint() {
                eprintln!("{}", hint);
            }
            return Err(e.into());
        }
    };
    println!("{}", output);

    Ok(())
}

async fn run(app: &Storefront, command: Commands) -> learn2code::Result<String> {
    match command {
        Commands::Courses { search } => commands::catalog::courses(app, search.as_deref()).await,
        Commands::Register {
            name,
            email,
            password,
            role,
        } => commands::account::register(app, &name, &email, &password, role).await,
        Commands::Login { email, password } => {
            commands::account::login(app, &email, &password).await
        }
        Commands::Logout => commands::account::logout(app).await,
        Commands::Cart { action } => match action.unwrap_or(CartAction::Show) {
            CartAction::Show => commands::cart::show(app).await,
            CartAction::Add { course_id } => commands::cart::add(app, course_id).await,
            CartAction::Remove { course_id } => commands::cart::remove(app, course_id).await,
            CartAction::Set {
                course_id,
                quantity,
            } => commands::cart::set_quantity(app, course_id, quantity).await,
            CartAction::Clear => commands::cart::clear(app).await,
        },
        Commands::Checkout {
            billing_name,
            billing_email,
            card_brand,
            card_last4,
            student_id,
        } => {
            let options = CheckoutOptions {
                billing_name,
                billing_email,
                card_brand: Some(card_brand),
                card_last4: Some(card_last4),
                student_id,
            };
            commands::checkout::checkout(app, options).await
        }
        Commands::MyCourses { student_id } => {
            commands::catalog::my_courses(app, student_id).await
        }
        Commands::Receipts { full } => commands::checkout::receipts(app, full).await,
        Commands::Students { action } => match action {
            StudentsAction::List { with_stats } => {
                commands::students::list(app, with_stats).await
            }
            StudentsAction::Add {
                name,
                age,
                avatar_url,
            } => commands::students::add(app, &name, age, avatar_url).await,
        },
    }
}
