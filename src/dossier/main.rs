use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use dossier::api::DossierApi;
use dossier::config::DossierConfig;
use dossier::error::Result;
use dossier::logging;
use dossier::screen::term::TermScreen;
use dossier::store::fs::FileStore;
use dossier::view::ViewController;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let _cli = Cli::parse();
    let config = load_config()?;

    if let Err(e) = logging::init(&config) {
        eprintln!("{} logging disabled: {}", "Warning:".yellow(), e);
    }

    let store = FileStore::new(config.data_dir.clone());
    let mut controller = ViewController::new(DossierApi::new(store), config.default_subfolders);

    // The guard restores the terminal before any error reaches main.
    let (_guard, mut screen) = TermScreen::open()?;
    controller.run(&mut screen)
}

fn load_config() -> Result<DossierConfig> {
    match ProjectDirs::from("com", "dossier", "dossier") {
        Some(dirs) => DossierConfig::load(dirs.config_dir()),
        None => Ok(DossierConfig::default()),
    }
}
