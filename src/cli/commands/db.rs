use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::maintenance;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    else {
        return Ok(());
    };

    if !(*migrate || *check || *vacuum || *show_info) {
        info("Nothing to do: pass --migrate, --check, --vacuum or --info");
        return Ok(());
    }

    let mut pool = DbPool::new(&cfg.database)?;

    if *migrate {
        println!("{}▶ Applying pending migrations…{}", CYAN, RESET);
        run_pending_migrations(&pool.conn)?;
        println!("{}✔ Migration completed.{}\n", GREEN, RESET);
    }

    if *show_info {
        stats::print_db_info(&mut pool, &cfg.database)?;
    }

    if *check {
        println!("{}▶ Checking database integrity…{}", CYAN, RESET);
        let verdict = maintenance::integrity_check(&mut pool)?;
        if verdict == "ok" {
            println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
        } else {
            println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, verdict);
        }
    }

    if *vacuum {
        println!("{}▶ Compacting the database file…{}", CYAN, RESET);
        maintenance::vacuum(&mut pool)?;
        println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
    }

    Ok(())
}
