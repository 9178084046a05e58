//! Narrow interfaces to the host workspace model
//!
//! The app, command and job model is defined and populated by the host;
//! this crate only consumes it through these seams. All handles are
//! reference-counted so palette actions can outlive the enumeration that
//! produced them within a single-threaded host.

use std::error::Error;
use std::rc::Rc;

/// Boxed error returned by host-side operations
pub type HostError = Box<dyn Error + Send + Sync>;

/// An app entry that can be opened from the palette
pub trait WorkspaceApp {
    fn name(&self) -> &str;
    fn description(&self) -> Option<&str> {
        None
    }
    fn detail(&self) -> Option<&str> {
        None
    }
    /// Open the app
    fn open(&self) -> Result<(), HostError>;
}

/// A command entry that can be executed from the palette
pub trait WorkspaceCommand {
    fn name(&self) -> &str;
    fn description(&self) -> Option<&str> {
        None
    }
    /// Execute the command
    fn execute(&self) -> Result<(), HostError>;
}

/// A job entry that can be started and stopped from the palette
pub trait WorkspaceJob {
    fn name(&self) -> &str;
    fn description(&self) -> Option<&str> {
        None
    }
    /// Whether the job is currently running
    fn is_running(&self) -> bool;
    /// Start the job
    fn start(&self) -> Result<(), HostError>;
    /// Stop the job
    fn stop(&self) -> Result<(), HostError>;
}

/// A workspace exposing its configured entries
pub trait Workspace {
    /// Workspace root path, shown as entry detail
    fn root_path(&self) -> &str;
    /// The workspace's apps
    fn apps(&self) -> Vec<Rc<dyn WorkspaceApp>>;
    /// The workspace's commands
    fn commands(&self) -> Vec<Rc<dyn WorkspaceCommand>>;
    /// The workspace's jobs
    fn jobs(&self) -> Vec<Rc<dyn WorkspaceJob>>;
}

/// Enumerates the currently open workspaces
pub trait WorkspaceProvider {
    /// All currently open workspaces
    fn workspaces(&self) -> Vec<Rc<dyn Workspace>>;
}
