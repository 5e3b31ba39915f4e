//! Developer reload helper.
//!
//! Runs a command and restarts it whenever a watched source file is added,
//! removed or modified. File system events come from `notify`; bursts of
//! events (an editor's save, a branch switch) are folded into one restart.

use notify::{Event, EventKind, RecursiveMode, Watcher};
use std::error::Error;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Child, Command};
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct WatchOptions {
    pub dir: PathBuf,
    /// Extension (without the dot) of the files that trigger a restart.
    pub ext: String,
    /// Quiet period after the last event before the command is restarted.
    pub debounce: Duration,
    /// Program followed by its arguments.
    pub command: Vec<String>,
}

/// Hidden directories and `target` are never watched.
fn is_ignored_name(name: &str) -> bool {
    name.starts_with('.') || name == "target"
}

fn has_ext(path: &Path, ext: &str) -> bool {
    path.extension().is_some_and(|e| e == ext)
}

/// Files under `dir` ending in `.ext`, sorted.
pub fn watched_files(dir: &Path, ext: &str) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() == 0 || !is_ignored_name(&entry.file_name().to_string_lossy())
        })
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::debug!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() && has_ext(entry.path(), ext))
        .map(|entry| entry.into_path())
        .collect();
    files.sort();
    files
}

/// Paths of an event that should trigger a restart.
///
/// Watcher errors are logged and yield nothing, so a transient failure
/// (a directory vanishing mid-save) does not end the watch.
fn relevant_paths(root: &Path, event: notify::Result<Event>, ext: &str) -> Vec<PathBuf> {
    let event = match event {
        Ok(event) => event,
        Err(e) => {
            log::warn!("Watch error: {}", e);
            return Vec::new();
        }
    };
    if matches!(event.kind, EventKind::Access(_)) {
        return Vec::new();
    }
    event
        .paths
        .into_iter()
        .filter(|path| has_ext(path, ext))
        .filter(|path| {
            let relative = path.strip_prefix(root).unwrap_or(path);
            !relative
                .parent()
                .into_iter()
                .flat_map(Path::components)
                .any(|c| is_ignored_name(&c.as_os_str().to_string_lossy()))
        })
        .collect()
}

/// The running command. Dropping it stops the process, so no exit path of
/// the watcher leaves it behind.
struct Supervised {
    child: Child,
}

fn start(command: &[String]) -> io::Result<Child> {
    let (program, args) = command.split_first().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "No command given to watch")
    })?;
    let child = Command::new(program).args(args).spawn()?;
    log::info!("Started {} (pid {})", program, child.id());
    Ok(child)
}

impl Supervised {
    fn spawn(command: &[String]) -> io::Result<Self> {
        Ok(Self {
            child: start(command)?,
        })
    }

    fn id(&self) -> u32 {
        self.child.id()
    }

    fn restart(&mut self, command: &[String]) -> io::Result<()> {
        self.stop();
        self.child = start(command)?;
        Ok(())
    }

    fn stop(&mut self) {
        if let Err(e) = self.child.kill() {
            log::debug!("Child {} already gone: {}", self.id(), e);
        }
        match self.child.wait() {
            Ok(status) => log::info!("Child {} exited: {}", self.id(), status),
            Err(e) => log::warn!("Could not reap child {}: {}", self.id(), e),
        }
    }
}

impl Drop for Supervised {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Restarts `child` for every burst of relevant events. Returns when the
/// event source goes away or a restart fails.
fn supervise(
    root: &Path,
    options: &WatchOptions,
    events: &Receiver<notify::Result<Event>>,
    child: &mut Supervised,
) -> Result<(), Box<dyn Error>> {
    loop {
        let first = events
            .recv()
            .map_err(|_| io::Error::other("File watcher stopped"))?;
        let mut changed = relevant_paths(root, first, &options.ext);
        while let Ok(next) = events.recv_timeout(options.debounce) {
            changed.extend(relevant_paths(root, next, &options.ext));
        }
        if changed.is_empty() {
            continue;
        }

        changed.sort();
        changed.dedup();
        for path in &changed {
            log::info!("Changed: {}", path.display());
        }
        crate::print_cmd_info!("Code changed", "restarting {}...", options.command.join(" "));
        child.restart(&options.command)?;
    }
}

/// Runs the command and restarts it on every change. Only returns on error,
/// after stopping the command.
pub fn run_watch(options: &WatchOptions) -> Result<(), Box<dyn Error>> {
    let root = options.dir.canonicalize()?;
    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(tx)?;
    watcher.watch(&root, RecursiveMode::Recursive)?;

    crate::print_cmd_info!(
        "Watching",
        "{} .{} files under {}",
        watched_files(&root, &options.ext).len(),
        options.ext,
        root.display()
    );
    let mut child = Supervised::spawn(&options.command)?;
    supervise(&root, options, &rx, &mut child)
}
