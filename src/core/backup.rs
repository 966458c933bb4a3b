//! Database backup: plain file copy with optional zip compression.

use crate::db::log::record_op;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::prompt::confirm;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    pub fn backup(
        pool: &mut DbPool,
        src_db: &str,
        dest_file: &str,
        compress: bool,
    ) -> AppResult<()> {
        let src = Path::new(src_db);
        let dest = Path::new(dest_file);

        if !src.exists() {
            return Err(AppError::Other(format!(
                "No database to back up at {}",
                src.display()
            )));
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        if dest.exists() {
            let question = format!(
                "The file '{}' already exists. Overwrite it?",
                dest.display()
            );
            if !confirm(&question)? {
                println!("❌ Backup cancelled.");
                return Ok(());
            }
        }

        fs::copy(src, dest)?;
        println!("✅ Backup created: {}", dest.display());

        let final_path = if compress {
            let zipped = compress_backup(dest)?;
            if let Err(e) = fs::remove_file(dest) {
                eprintln!("⚠️  Failed to remove uncompressed backup: {}", e);
            }
            zipped
        } else {
            dest.to_path_buf()
        };

        let note = if compress {
            "Backup created and compressed"
        } else {
            "Backup created"
        };
        record_op(&pool.conn, "backup", &final_path.to_string_lossy(), note)?;

        Ok(())
    }
}

/// Zips the copied file next to itself, `.sqlite` becoming `.zip`.
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "backup.sqlite".to_string());

    let mut zip = ZipWriter::new(fs::File::create(&zip_path)?);
    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    zip.start_file(name, options).map_err(io::Error::other)?;
    io::copy(&mut fs::File::open(path)?, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    println!("📦 Compressed: {}", zip_path.display());

    Ok(zip_path)
}
