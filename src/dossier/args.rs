use clap::Parser;

/// Returns the version string, including the git hash for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

/// The app is fully interactive; the only flags are --help and --version.
#[derive(Parser, Debug)]
#[command(name = "dossier", bin_name = "dossier", version = get_version())]
#[command(
    about = "Browse, create and edit dossier records in a full-screen terminal UI",
    long_about = "Browse, create and edit dossier records in a full-screen terminal UI.\n\n\
                  Records live in one folder each under the data directory \
                  (default: ./data), configurable through config.json in the \
                  user config directory."
)]
pub struct Cli {}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["dossier", "--data-dir", "x"]).is_err());
        assert!(Cli::try_parse_from(["dossier"]).is_ok());
    }
}
