use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::slot::DbSlot;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite database and its schema
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)?;

    let cfg = Config::load();
    let db_path = cli.db.clone().unwrap_or(cfg.database);

    println!("⚙️  Initializing triplogger…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_path);

    // Opening the slot creates the schema
    DbSlot::open(&db_path)?;

    println!("✅ Database initialized at {}", &db_path);
    println!("🎉 triplogger initialization completed!");
    Ok(())
}
