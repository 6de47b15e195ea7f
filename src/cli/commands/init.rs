use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::errors::AppResult;
use crate::ui::messages;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the main SQLite store (participants, logs, internal journal)
///  - the pre-registered test participant
///
/// The history store is owned by the validation script and is deliberately
/// not created here.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = cfg.database.clone();

    if !cli.test {
        println!("⚙️  Initializing qrgate…");
        println!("📄 Config file : {}", Config::config_file().display());
        println!("🗄️  Database   : {}", &db_path);
    }

    let conn = Connection::open(&db_path)?;
    init_db(&conn)?;

    if let Err(e) = log::oplog(
        &conn,
        "init",
        "",
        &format!("Database initialized at {}", &db_path),
    ) {
        eprintln!("Failed to write internal log: {}", e);
    }

    messages::success(format!("Database initialized at {}", &db_path));
    Ok(())
}
