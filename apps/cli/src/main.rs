use anyhow::Context;
use clap::{Parser, Subcommand};
use lobby_config::load as load_config;
use lobby_database::{seed_database, CreateMessageRequest, MessageRepository, UserRepository};
use lobby_rooms::{CreateRoomRequest, JoinRoomRequest, UpdateRoomRequest};
use lobby_runtime::{telemetry, BackendServices};
use serde::Serialize;
use tracing::info;

#[derive(Parser)]
#[command(name = "lobby")]
#[command(about = "Room and membership backend (lists rooms by default)")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply database migrations and exit
    Migrate,
    /// Seed the database with demo users
    Seed,
    /// List users known to the database
    Users,
    /// Create a room
    CreateRoom {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
        /// Creator username, recorded in the logs
        #[arg(long)]
        username: String,
    },
    /// Show one room by id, or by name with --name
    Room {
        room_id: Option<String>,
        #[arg(long, conflicts_with = "room_id")]
        name: Option<String>,
    },
    /// List all rooms
    Rooms,
    /// List the members of a room
    Members { room_id: String },
    /// Count the members of a room
    Count { room_id: String },
    /// List a room's messages on behalf of a member
    Messages { user_id: String, room_id: String },
    /// Store a message in a room
    Post {
        room_id: String,
        user_id: String,
        content: String,
    },
    /// Add a user to a room
    Join {
        room_id: String,
        user_id: String,
        #[arg(long)]
        username: String,
    },
    /// Remove a user from a room
    Leave { room_id: String, user_id: String },
    /// Replace a room's name and description
    UpdateRoom {
        room_id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config().context("failed to load configuration")?;
    telemetry::init_tracing(&config.log).context("failed to initialise tracing")?;

    let services = BackendServices::initialise(&config)
        .await
        .context("failed to initialise backend services")?;

    let result = run(cli.command.unwrap_or(Commands::Rooms), &services).await;
    services.close().await;
    result
}

async fn run(command: Commands, services: &BackendServices) -> anyhow::Result<()> {
    let rooms = &services.rooms;

    match command {
        Commands::Migrate => {
            info!("database is up to date");
            Ok(())
        }
        Commands::Seed => {
            let outcome = seed_database(&services.db_pool)
                .await
                .context("failed to seed database")?;
            info!(?outcome, "seeding finished");
            print_json(&UserRepository::new(services.db_pool.clone()).list_all().await?)
        }
        Commands::Users => {
            print_json(&UserRepository::new(services.db_pool.clone()).list_all().await?)
        }
        Commands::CreateRoom {
            name,
            description,
            username,
        } => {
            let room = rooms
                .create_room(CreateRoomRequest {
                    username,
                    name,
                    description,
                })
                .await?;
            print_json(&room)
        }
        Commands::Room { room_id, name } => {
            let room = match (room_id, name) {
                (_, Some(name)) => rooms.get_room_by_name(&name).await?,
                (Some(room_id), None) => rooms.get_room_by_id(&room_id).await?,
                (None, None) => anyhow::bail!("pass a room id or --name"),
            };
            print_json(&room)
        }
        Commands::Rooms => print_json(&rooms.list_rooms().await?),
        Commands::Members { room_id } => print_json(&rooms.list_members(&room_id).await?),
        Commands::Count { room_id } => {
            let count = rooms.count_members(&room_id).await?;
            print_json(&serde_json::json!({ "room_id": room_id, "count": count }))
        }
        Commands::Messages { user_id, room_id } => {
            print_json(&rooms.list_messages(&user_id, &room_id).await?)
        }
        Commands::Post {
            room_id,
            user_id,
            content,
        } => {
            let message = MessageRepository::new(services.db_pool.clone())
                .create(&CreateMessageRequest {
                    room_id,
                    user_id,
                    content,
                })
                .await
                .context("failed to store message")?;
            print_json(&message)
        }
        Commands::Join {
            room_id,
            user_id,
            username,
        } => {
            rooms
                .join_room(JoinRoomRequest {
                    username,
                    room_id: room_id.clone(),
                    user_id: user_id.clone(),
                })
                .await?;
            print_json(&serde_json::json!({ "room_id": room_id, "user_id": user_id, "joined": true }))
        }
        Commands::Leave { room_id, user_id } => {
            rooms.leave_room(&room_id, &user_id).await?;
            print_json(&serde_json::json!({ "room_id": room_id, "user_id": user_id, "joined": false }))
        }
        Commands::UpdateRoom {
            room_id,
            name,
            description,
        } => {
            let updated = rooms
                .update_room(&room_id, UpdateRoomRequest { name, description })
                .await?;
            print_json(&updated)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("failed to render output")?;
    println!("{rendered}");
    Ok(())
}
