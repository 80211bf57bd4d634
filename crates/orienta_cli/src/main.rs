//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `orienta_core` wiring.
//! - Keep output deterministic for quick local sanity checks.

use orienta_core::{
    default_log_level, init_logging, open_store_in_memory, DocumentRepository,
    SqliteDocumentRepository,
};

fn main() {
    let log_dir = std::env::temp_dir().join("orienta").join("logs");
    if let Err(err) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        // The probe still works without file logs; say so and move on.
        eprintln!("orienta: logging disabled: {err}");
    }

    // Tiny probe against an in-memory store; validates bootstrap, slot
    // migrations and document seeding independently of any UI runtime.
    let conn = match open_store_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("orienta: failed to open store: {err}");
            std::process::exit(1);
        }
    };

    let documents = SqliteDocumentRepository::new(&conn);
    match documents.init() {
        Ok(document) => {
            println!("orienta_core version={}", orienta_core::core_version());
            println!(
                "document schema_version={} users={} careers={} universities={} resources={}",
                document.schema_version,
                document.users.len(),
                document.careers.len(),
                document.universities.len(),
                document.resources.len(),
            );
        }
        Err(err) => {
            eprintln!("orienta: failed to initialize document: {err}");
            std::process::exit(1);
        }
    }
}
