use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;

/// Loads every dossier. A root that cannot be read yields an empty list and
/// an error message rather than a failed command.
pub fn run<S: RecordStore>(store: &S) -> Result<CmdResult> {
    match store.load_all() {
        Ok(records) => Ok(CmdResult::default().with_records(records)),
        Err(e) => {
            tracing::error!(error = %e, "failed to read dossier directory");
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::error(format!("Could not read dossiers: {}", e)));
            Ok(result)
        }
    }
}
