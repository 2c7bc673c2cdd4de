use clap::{Parser, Subcommand};
use eventhub::{
    config::AppConfig,
    db, graphql,
    repositories::{SqliteEventRepository, SqliteUserRepository},
    services::{CreateUserRequest, EventService, UserService},
};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "eventhub-cli")]
#[command(about = "CLI tool for managing eventhub data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// User management commands
    User {
        #[command(subcommand)]
        command: UserCommands,
    },

    /// Event inspection commands
    Event {
        #[command(subcommand)]
        command: EventCommands,
    },

    /// Print the GraphQL schema (SDL)
    Schema,
}

#[derive(Subcommand)]
enum UserCommands {
    /// Create a new user
    Create {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,

        /// Explicit identifier, e.g. the configured EVENT_CREATOR_ID
        #[arg(long)]
        id: Option<String>,
    },

    /// Show a user and the events they created
    Show {
        /// Email address of the user
        #[arg(short, long)]
        email: String,
    },
}

#[derive(Subcommand)]
enum EventCommands {
    /// List all events
    List,
}

fn get_password(prompt: &str) -> Result<String, Box<dyn std::error::Error>> {
    use std::io::{self, Write};
    print!("{}: ", prompt);
    io::stdout().flush()?;

    Ok(rpassword::read_password()?)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Connect to database
    let pool = db::create_pool(&config.database_url).await?;
    db::run_migrations(&pool).await?;

    // Initialize services
    let user_service = Arc::new(UserService::new(Arc::new(SqliteUserRepository::new(
        pool.clone(),
    ))));
    let event_service = Arc::new(EventService::new(
        Arc::new(SqliteEventRepository::new(pool.clone())),
        config.event_creator_id.clone(),
    ));

    match cli.command {
        Commands::User { command } => match command {
            UserCommands::Create {
                email,
                password,
                id,
            } => {
                let password = match password {
                    Some(pw) => pw,
                    None => {
                        let password = get_password("Password")?;
                        let confirm = get_password("Confirm password")?;
                        if password != confirm {
                            eprintln!("❌ Passwords do not match");
                            std::process::exit(1);
                        }
                        password
                    }
                };

                let request = CreateUserRequest {
                    id,
                    email,
                    password,
                };

                match user_service.create_user(request).await {
                    Ok(user) => {
                        println!("✅ User created successfully!");
                        println!("  ID: {}", user.id);
                        println!("  Email: {}", user.email);
                        if user.id == event_service.creator_id() {
                            println!("  New events will be attributed to this user.");
                        }
                    }
                    Err(err) => {
                        eprintln!("❌ Failed to create user: {}", err);
                        std::process::exit(1);
                    }
                }
            }

            UserCommands::Show { email } => match user_service.find_user_by_email(&email).await {
                Ok(Some(user)) => {
                    println!("  ID: {}", user.id);
                    println!("  Email: {}", user.email);
                    println!("  Created: {}", user.created_at.as_deref().unwrap_or("N/A"));

                    let events = event_service.list_events_by_creator(&user.id).await?;
                    println!("  Created events: {}", events.len());
                    for event in events {
                        println!("    {} {}", event.id, event.title);
                    }
                }
                Ok(None) => {
                    eprintln!("❌ User '{}' not found", email);
                    std::process::exit(1);
                }
                Err(err) => {
                    eprintln!("❌ Failed to find user: {}", err);
                    std::process::exit(1);
                }
            },
        },

        Commands::Event { command } => match command {
            EventCommands::List => match event_service.list_events().await {
                Ok(events) => {
                    if events.is_empty() {
                        println!("No events found.");
                    } else {
                        println!(
                            "{:<34} {:<30} {:>10} {:<26}",
                            "ID", "Title", "Price", "Date"
                        );
                        println!("{}", "-".repeat(103));
                        for event in events {
                            println!(
                                "{:<34} {:<30} {:>10.2} {:<26}",
                                event.id,
                                event.title,
                                event.price,
                                event.formatted_date()
                            );
                        }
                    }
                }
                Err(err) => {
                    eprintln!("❌ Failed to list events: {}", err);
                    std::process::exit(1);
                }
            },
        },

        Commands::Schema => {
            let schema = graphql::build_schema(event_service, user_service);
            println!("{}", schema.sdl());
        }
    }

    Ok(())
}
