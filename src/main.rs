use clap::Parser;
use log::debug;

use echo_jot::{App, Cli, HandleStore};

fn initialize_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp_secs()
        .format_module_path(true)
        .init();

    debug!("Logger initialized");
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    initialize_logger(cli.verbose);

    let store = match cli.store {
        Some(path) => HandleStore::at(path),
        None => match HandleStore::open_default() {
            Ok(store) => store,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        },
    };

    let app = App::new(store);
    if let Err(e) = app.run(cli.command).await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
