//! Check command implementation.
//!
//! The `ftsctl check` command reports the installation status of the
//! search framework: installed version, settings, the active search
//! platform and every registered content provider. Subsystem failures
//! degrade into error entries; only a broken config store aborts.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::args::CheckArgs;
use crate::config::FileConfigStore;
use crate::error::{FtsctlError, Result};
use crate::registry::load_registry;
use crate::report::render;
use crate::report::ReportBuilder;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    root: PathBuf,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(root: &Path, args: CheckArgs) -> Self {
        Self {
            root: root.to_path_buf(),
            args,
        }
    }

    /// Get the installation root path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = match FileConfigStore::load(&self.root) {
            Ok(store) => store,
            Err(FtsctlError::ConfigNotFound { path }) => {
                ui.error(&format!("No configuration found at {}", path.display()));
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        let registry = load_registry(&self.root);
        let builder = ReportBuilder::new(&store, &registry);
        let report = builder.build()?;

        if self.args.json {
            ui.message(&render::json::render(&report)?);
            return Ok(CommandResult::success());
        }

        let active = builder.active_platform();
        if let Err(err) = &active {
            debug!(%err, "no active platform for text rendering");
        }
        ui.message(render::text::render(&report, &active).trim_end_matches('\n'));

        Ok(CommandResult::success())
    }
}
