// Entrypoint for the phone book CLI.
// - Keeps `main` small: load config, set up logging, hand an empty store
//   and a terminal console to the UI loop.
// - Returns `anyhow::Result` so configuration and terminal failures print
//   a readable message.

use phonebook_cli::console::TerminalConsole;
use phonebook_cli::{ui::main_menu, Config, ContactStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr; the default level keeps them off the menu screen.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(saves_dir = %config.saves_dir.display(), "Starting phone book");

    let mut store = ContactStore::new();
    let mut console = TerminalConsole::new(config.pause);

    // Blocks until the user exits or stdin closes.
    main_menu(&mut console, &mut store, &config)?;
    Ok(())
}
