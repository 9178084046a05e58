//! Command palette wiring
//!
//! Builds action-bearing palette entries from the workspace model and
//! registers the palette commands against a host-provided registry. The
//! picker UI, the command registry and the error reporting surface are all
//! injected; this module never touches global host state.

use std::rc::Rc;

use crate::values::normalize;
use crate::workspace::{HostError, Workspace, WorkspaceProvider};

/// Command id for the apps palette
pub const APPS_COMMAND: &str = "power-tools.apps";
/// Command id for the commands palette
pub const COMMANDS_COMMAND: &str = "power-tools.commands";
/// Command id for the jobs palette
pub const JOBS_COMMAND: &str = "power-tools.jobs";

/// Label marker for a running job
pub const JOB_RUNNING_MARKER: &str = "■";
/// Label marker for a stopped job
pub const JOB_STOPPED_MARKER: &str = "▶";

/// Action invoked when a palette entry is selected
pub type PaletteAction = Box<dyn FnOnce() -> Result<(), HostError>>;

/// An action-bearing entry shown by the host picker
pub struct PaletteEntry {
    pub label: String,
    pub description: Option<String>,
    pub detail: Option<String>,
    pub action: PaletteAction,
}

/// Host-supplied picker UI
pub trait QuickPick {
    /// Show entries and return the selected one, or `None` when dismissed
    fn pick(&self, entries: Vec<PaletteEntry>, place_holder: &str) -> Option<PaletteEntry>;
}

/// A registered palette command handler
pub type CommandHandler = Box<dyn Fn()>;

/// Host-supplied command registration
pub trait CommandRegistry {
    /// Register a handler under a command id
    fn register(&mut self, command_id: &str, handler: CommandHandler);
}

/// Surface for reporting action failures to the user
pub trait ErrorSink {
    fn show_error(&self, error: HostError);
}

/// Build palette entries for all apps of all workspaces
///
/// Entries are sorted by normalized label.
pub fn app_entries(workspaces: &[Rc<dyn Workspace>]) -> Vec<PaletteEntry> {
    let mut entries: Vec<PaletteEntry> = workspaces
        .iter()
        .flat_map(|ws| ws.apps())
        .map(|app| PaletteEntry {
            label: app.name().to_string(),
            description: app.description().map(str::to_string),
            detail: app.detail().map(str::to_string),
            action: Box::new(move || app.open()),
        })
        .collect();
    entries.sort_by_key(|e| normalize(&e.label));
    entries
}

/// Build palette entries for all commands of all workspaces
///
/// The workspace root path becomes the entry detail. Entries are sorted by
/// normalized label.
pub fn command_entries(workspaces: &[Rc<dyn Workspace>]) -> Vec<PaletteEntry> {
    let mut entries: Vec<PaletteEntry> = workspaces
        .iter()
        .flat_map(|ws| {
            let detail = ws.root_path().to_string();
            ws.commands().into_iter().map(move |cmd| PaletteEntry {
                label: cmd.name().to_string(),
                description: cmd.description().map(str::to_string),
                detail: Some(detail.clone()),
                action: Box::new(move || cmd.execute()),
            })
        })
        .collect();
    entries.sort_by_key(|e| normalize(&e.label));
    entries
}

/// Build palette entries for all jobs of all workspaces
///
/// Labels carry a run-state marker; selecting an entry stops a running job
/// and starts a stopped one, re-checking the run state at invocation time.
pub fn job_entries(workspaces: &[Rc<dyn Workspace>]) -> Vec<PaletteEntry> {
    let mut entries: Vec<PaletteEntry> = workspaces
        .iter()
        .flat_map(|ws| {
            let detail = ws.root_path().to_string();
            ws.jobs().into_iter().map(move |job| {
                let marker = if job.is_running() {
                    JOB_RUNNING_MARKER
                } else {
                    JOB_STOPPED_MARKER
                };
                PaletteEntry {
                    label: format!("{} {}", marker, job.name()),
                    description: job.description().map(str::to_string),
                    detail: Some(detail.clone()),
                    action: Box::new(move || {
                        if job.is_running() {
                            job.stop()
                        } else {
                            job.start()
                        }
                    }),
                }
            })
        })
        .collect();
    entries.sort_by_key(|e| normalize(&e.label));
    entries
}

/// Register the palette commands against a host registry
///
/// Each handler re-enumerates the workspaces on every invocation, so the
/// shown entries reflect current state. Action failures are reported through
/// the error sink rather than propagated.
pub fn register_commands(
    registry: &mut dyn CommandRegistry,
    provider: Rc<dyn WorkspaceProvider>,
    picker: Rc<dyn QuickPick>,
    errors: Rc<dyn ErrorSink>,
) {
    // apps
    {
        let provider = Rc::clone(&provider);
        let picker = Rc::clone(&picker);
        let errors = Rc::clone(&errors);
        registry.register(
            APPS_COMMAND,
            Box::new(move || {
                let workspaces = provider.workspaces();
                run_picked(
                    app_entries(&workspaces),
                    "Select the app, you would like to open ...",
                    picker.as_ref(),
                    errors.as_ref(),
                );
            }),
        );
    }

    // commands
    {
        let provider = Rc::clone(&provider);
        let picker = Rc::clone(&picker);
        let errors = Rc::clone(&errors);
        registry.register(
            COMMANDS_COMMAND,
            Box::new(move || {
                let workspaces = provider.workspaces();
                run_picked(
                    command_entries(&workspaces),
                    "Select the command, you would like to execute ...",
                    picker.as_ref(),
                    errors.as_ref(),
                );
            }),
        );
    }

    // jobs
    registry.register(
        JOBS_COMMAND,
        Box::new(move || {
            let workspaces = provider.workspaces();
            run_picked(
                job_entries(&workspaces),
                "Start or stop a job, by selecting it ...",
                picker.as_ref(),
                errors.as_ref(),
            );
        }),
    );
}

/// Show entries in the picker and run the chosen action
fn run_picked(
    entries: Vec<PaletteEntry>,
    place_holder: &str,
    picker: &dyn QuickPick,
    errors: &dyn ErrorSink,
) {
    if let Some(entry) = picker.pick(entries, place_holder) {
        if let Err(e) = (entry.action)() {
            errors.show_error(e);
        }
    }
}
