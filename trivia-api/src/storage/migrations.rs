use refinery::embed_migrations;

embed_migrations!("migrations");

/// Bring a connection's schema up to date.
///
/// Creates the `categories` and `questions` tables. Safe to call on every
/// start; refinery records what has already been applied.
pub fn run_migrations(conn: &mut rusqlite::Connection) -> Result<(), refinery::Error> {
    migrations::runner().run(conn).map(|_| ())
}
