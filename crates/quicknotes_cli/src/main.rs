//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `quicknotes_core` linkage and storage bootstrap.
//! - Print the persisted note board (`text` by default, `html` on request).

use quicknotes_core::db::open_db;
use quicknotes_core::{
    init_logging, AppConfig, NoteSnapshotRepository, NotesService, SqliteKvRepository,
    SystemClock,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("quicknotes_core ping={}", quicknotes_core::ping());
    println!("quicknotes_core version={}", quicknotes_core::core_version());

    let format = std::env::args().nth(1).unwrap_or_else(|| "text".to_string());
    match run(&format) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(format: &str) -> Result<(), String> {
    let config = AppConfig::from_env();
    config
        .ensure_dirs()
        .map_err(|err| format!("cannot create `{}`: {err}", config.data_dir.display()))?;

    let log_dir = config.log_dir();
    let log_dir = log_dir
        .to_str()
        .ok_or_else(|| format!("log dir `{}` is not UTF-8", log_dir.display()))?;
    // Relative data dirs cannot host logs; the board still prints.
    if let Err(err) = init_logging(config.log_level, log_dir) {
        eprintln!("warning: logging disabled: {err}");
    }

    let conn = open_db(config.db_path()).map_err(|err| err.to_string())?;
    let snapshots =
        NoteSnapshotRepository::with_key(SqliteKvRepository::new(&conn), &config.storage_key);
    let service = NotesService::open(snapshots, SystemClock);
    log::info!(
        "event=cli_render module=cli status=ok format={format} count={}",
        service.notes().len()
    );

    let view = service.view();
    match format {
        "text" => print!("{}", view.to_text()),
        "html" => println!("{}", view.to_html()),
        other => return Err(format!("unknown format `{other}`; expected text|html")),
    }
    Ok(())
}
