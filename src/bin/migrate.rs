use anyhow::{anyhow, Result};
use festival_bot::database::connection::DatabaseManager;
use festival_bot::database::models::{Festival, User};
use std::env;
use std::io;
use std::path::{Path, PathBuf};

const EXPECTED_TABLES: [&str; 3] = ["attendees", "festivals", "users"];

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize basic logging for the migration
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let command = args.get(1).map(|s| s.as_str()).unwrap_or("migrate");

    match command {
        "migrate" | "up" => run_migrations().await,
        "check" => check_database().await,
        "reset" => reset_database().await,
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            print_help();
            std::process::exit(1);
        }
    }
}

async fn run_migrations() -> Result<()> {
    println!("🔧 Festival Bot - Database Migration Tool");
    println!("=========================================");

    let database_url = database_url()?;
    println!("📊 Database URL: {}", mask_url(&database_url));

    if let Some(parent) = sqlite_file(&database_url).as_deref().and_then(Path::parent) {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            println!("📁 Creating directory: {}", parent.display());
            std::fs::create_dir_all(parent)?;
        }
    }

    println!("🚀 Running database migrations...");
    let db_manager = DatabaseManager::new(&database_url)
        .await
        .map_err(|e| anyhow!("Failed to connect to database: {}", e))?;

    if let Err(e) = db_manager.run_migrations().await {
        eprintln!("❌ Migration failed: {e}");
        std::process::exit(1);
    }

    println!("✅ Migrations completed successfully!");
    Ok(())
}

async fn check_database() -> Result<()> {
    println!("🔍 Checking database connection and schema...");

    let database_url = database_url()?;
    println!("📊 Database URL: {}", mask_url(&database_url));

    let db_manager = DatabaseManager::new(&database_url)
        .await
        .map_err(|e| anyhow!("Failed to connect to database: {}", e))?;

    let tables = db_manager.table_names().await?;
    let missing: Vec<&str> = EXPECTED_TABLES
        .iter()
        .copied()
        .filter(|expected| !tables.iter().any(|table| table == expected))
        .collect();

    if !missing.is_empty() {
        println!("⚠️  Missing tables: {}", missing.join(", "));
        println!("💡 Try running 'migrate up' to create the schema");
        return Ok(());
    }

    let users = User::count(&db_manager.pool).await?;
    let festivals = Festival::count(&db_manager.pool).await?;

    println!("✅ Database connection successful!");
    println!("📋 Tables: {}", tables.join(", "));
    println!("👥 {users} users, 🎪 {festivals} festivals");

    Ok(())
}

async fn reset_database() -> Result<()> {
    let database_url = database_url()?;
    let Some(db_path) = sqlite_file(&database_url) else {
        return Err(anyhow!("Reset is only supported for SQLite database files"));
    };

    println!("⚠️  WARNING: This will delete ALL users, festivals and attendance in {}!", db_path.display());
    println!("🤔 Are you sure you want to continue? (yes/no)");

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    if input.trim().to_lowercase() != "yes" {
        println!("❌ Reset cancelled.");
        return Ok(());
    }

    if db_path.exists() {
        std::fs::remove_file(&db_path)?;
        println!("🗑️  Deleted database file: {}", db_path.display());
    }

    println!("🔄 Recreating database schema...");
    run_migrations().await?;

    println!("✅ Database reset completed!");
    Ok(())
}

/// The bot token is not needed here, so only the database part of the configuration is read
fn database_url() -> Result<String> {
    dotenvy::dotenv().ok();

    if let Some(url) = env::var("DATABASE_URL").ok().filter(|url| !url.trim().is_empty()) {
        return Ok(url.trim().to_string());
    }

    match env::var("SQLITE_PATH") {
        Ok(path) if !path.trim().is_empty() => Ok(format!("sqlite:{}", path.trim())),
        _ => Err(anyhow!("DATABASE_URL (or SQLITE_PATH) must be set")),
    }
}

/// File behind a `sqlite:` URL; `None` for in-memory or non-SQLite databases
fn sqlite_file(url: &str) -> Option<PathBuf> {
    let path = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))?;
    let path = path.split('?').next().unwrap_or(path);

    if path.is_empty() || path == ":memory:" {
        None
    } else {
        Some(PathBuf::from(path))
    }
}

fn mask_url(url: &str) -> String {
    match sqlite_file(url).as_deref().and_then(Path::file_name) {
        Some(filename) => format!("sqlite:.../{}", filename.to_string_lossy()),
        None => url.to_string(),
    }
}

fn print_help() {
    println!("🎪 Festival Bot - Database Migration Tool");
    println!();
    println!("USAGE:");
    println!("    migrate [COMMAND]");
    println!();
    println!("COMMANDS:");
    println!("    migrate, up    Run database migrations (default)");
    println!("    check          Check the schema and count users and festivals");
    println!("    reset          Delete the SQLite file and recreate the schema - DESTRUCTIVE!");
    println!("    help           Show this help message");
    println!();
    println!("ENVIRONMENT:");
    println!("    DATABASE_URL   Database connection string, e.g. sqlite:./data/festivals.db");
    println!("    SQLITE_PATH    Path of the SQLite file, used when DATABASE_URL is not set");
    println!();
}
