//! PhotoComp CLI - Command-line client for the PhotoComp platform.

mod commands;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use photocomp_config::{init_logging, Config, Paths};
use photocomp_types::MemberRole;

/// PhotoComp CLI - Browse organizations and events, share photos.
#[derive(Parser)]
#[command(name = "photocomp")]
#[command(about = "PhotoComp CLI for organizations, events, and photo sharing")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format (text or json)
    #[arg(short, long, default_value = "text", global = true)]
    format: output::OutputFormat,

    /// API base URL (overrides the config file and PHOTOCOMP_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Login with email and password
    Login,

    /// Create an account and log in
    Register,

    /// Logout and clear the stored session
    Logout,

    /// Show session status
    Status,

    /// Browse organizations with their events
    Feed {
        /// Number of organization pages to fetch
        #[arg(short, long, default_value = "1")]
        pages: usize,
    },

    /// Manage organizations
    Orgs {
        #[command(subcommand)]
        command: OrgCommands,
    },

    /// Manage events
    Events {
        #[command(subcommand)]
        command: EventCommands,
    },

    /// Manage photos
    Photos {
        #[command(subcommand)]
        command: PhotoCommands,
    },

    /// Manage the logged-in account
    Account {
        #[command(subcommand)]
        command: AccountCommands,
    },
}

#[derive(Subcommand)]
enum OrgCommands {
    /// List organizations
    List {
        /// Fetch every page instead of just the first
        #[arg(long)]
        all: bool,
        /// Case-insensitive name/description filter
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Create an organization
    Create {
        /// Organization name
        #[arg(short, long)]
        name: String,
        /// Description
        #[arg(short, long)]
        description: Option<String>,
        /// Logo URL
        #[arg(long)]
        logo_url: Option<String>,
    },
    /// Ask to join an organization
    Join {
        /// Organization ID
        id: String,
    },
    /// List the members of an organization
    Members {
        /// Organization ID
        org: String,
    },
    /// Change a member's role
    SetRole {
        /// Organization ID
        org: String,
        /// User ID
        user: String,
        /// New role
        #[arg(value_enum)]
        role: RoleArg,
    },
    /// Remove a member from an organization
    RemoveMember {
        /// Organization ID
        org: String,
        /// User ID
        user: String,
    },
    /// List pending join requests
    Requests {
        /// Organization ID
        org: String,
    },
    /// Approve or reject a join request
    Resolve {
        /// Organization ID
        org: String,
        /// Request ID
        request: String,
        /// Approve the request (rejected without this flag)
        #[arg(long)]
        approve: bool,
    },
}

#[derive(Subcommand)]
enum EventCommands {
    /// List an organization's events
    List {
        /// Organization ID
        org: String,
        /// Fetch every page instead of just the first
        #[arg(long)]
        all: bool,
        /// Case-insensitive title/description filter
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Create an event
    Create {
        /// Organization ID
        org: String,
        /// Event title
        #[arg(short, long)]
        title: String,
        /// Description
        #[arg(short, long)]
        description: Option<String>,
        /// Location
        #[arg(short, long)]
        location: Option<String>,
        /// Date and time (RFC 3339, e.g. 2026-09-01T18:00:00Z)
        #[arg(long)]
        date: Option<String>,
    },
}

#[derive(Subcommand)]
enum PhotoCommands {
    /// List an event's photos
    List {
        /// Organization ID
        org: String,
        /// Event ID
        event: String,
    },
    /// Upload a photo to an event
    Upload {
        /// Organization ID
        org: String,
        /// Event ID
        event: String,
        /// Path to the image file
        file: PathBuf,
        /// MIME type (inferred from the file extension when omitted)
        #[arg(long)]
        content_type: Option<String>,
    },
    /// Tag users in a photo
    Tag {
        /// Organization ID
        org: String,
        /// Event ID
        event: String,
        /// Photo ID
        photo: String,
        /// User IDs to tag
        #[arg(required = true)]
        users: Vec<String>,
    },
}

#[derive(Subcommand)]
enum AccountCommands {
    /// Change the account password
    ChangePassword,
    /// Permanently delete the account
    Delete {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

/// Organization role accepted on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum RoleArg {
    Member,
    Admin,
    Owner,
}

impl From<RoleArg> for MemberRole {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Member => MemberRole::Member,
            RoleArg::Admin => MemberRole::Admin,
            RoleArg::Owner => MemberRole::Owner,
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let paths = match Paths::new() {
        Ok(paths) => paths,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut config = match Config::load(&paths) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(url) = &cli.api_url {
        config.api_base_url = url.clone();
    }

    let level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    init_logging(level);

    let ctx = match commands::CliContext::build(&config) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Login => commands::login(&ctx, &cli.format).await,
        Commands::Register => commands::register(&ctx, &cli.format).await,
        Commands::Logout => commands::logout(&ctx, &cli.format).await,
        Commands::Status => commands::status(&ctx, &config, &cli.format).await,
        Commands::Feed { pages } => commands::feed(&ctx, pages, &cli.format).await,
        Commands::Orgs { command } => match command {
            OrgCommands::List { all, search } => {
                commands::orgs_list(&ctx, all, search.as_deref(), &cli.format).await
            }
            OrgCommands::Create {
                name,
                description,
                logo_url,
            } => commands::orgs_create(&ctx, &name, description, logo_url, &cli.format).await,
            OrgCommands::Join { id } => commands::orgs_join(&ctx, &id, &cli.format).await,
            OrgCommands::Members { org } => commands::orgs_members(&ctx, &org, &cli.format).await,
            OrgCommands::SetRole { org, user, role } => {
                commands::orgs_set_role(&ctx, &org, &user, role.into(), &cli.format).await
            }
            OrgCommands::RemoveMember { org, user } => {
                commands::orgs_remove_member(&ctx, &org, &user, &cli.format).await
            }
            OrgCommands::Requests { org } => commands::orgs_requests(&ctx, &org, &cli.format).await,
            OrgCommands::Resolve {
                org,
                request,
                approve,
            } => commands::orgs_resolve(&ctx, &org, &request, approve, &cli.format).await,
        },
        Commands::Events { command } => match command {
            EventCommands::List { org, all, search } => {
                commands::events_list(&ctx, &org, all, search.as_deref(), &cli.format).await
            }
            EventCommands::Create {
                org,
                title,
                description,
                location,
                date,
            } => {
                commands::events_create(
                    &ctx,
                    &org,
                    &title,
                    description,
                    location,
                    date.as_deref(),
                    &cli.format,
                )
                .await
            }
        },
        Commands::Photos { command } => match command {
            PhotoCommands::List { org, event } => {
                commands::photos_list(&ctx, &org, &event, &cli.format).await
            }
            PhotoCommands::Upload {
                org,
                event,
                file,
                content_type,
            } => {
                commands::photos_upload(
                    &ctx,
                    &org,
                    &event,
                    &file,
                    content_type.as_deref(),
                    &cli.format,
                )
                .await
            }
            PhotoCommands::Tag {
                org,
                event,
                photo,
                users,
            } => commands::photos_tag(&ctx, &org, &event, &photo, &users, &cli.format).await,
        },
        Commands::Account { command } => match command {
            AccountCommands::ChangePassword => commands::change_password(&ctx, &cli.format).await,
            AccountCommands::Delete { yes } => {
                commands::delete_account(&ctx, yes, &cli.format).await
            }
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
