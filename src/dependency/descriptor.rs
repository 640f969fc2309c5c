//! Lazily initialized dependency descriptors.
//!
//! A [`Dependency`] is built from an initializer closure that fills in a
//! [`DependencySpec`]. The closure does not run until something reads the
//! descriptor, so constructing a catalog costs nothing and checks such as the
//! Linux distribution only happen for descriptors that are actually used.

use crate::dependency::result::CheckResult;
use crate::platform;
use crate::shell;
use std::fmt;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock, PoisonError};

/// Presence check for a dependency.
pub type Checker = Box<dyn Fn() -> CheckResult + Send + Sync>;

type Initializer = Box<dyn FnOnce(&mut DependencySpec) + Send>;

/// Resolved attributes of a dependency, as filled in by its initializer.
#[derive(Default)]
pub struct DependencySpec {
    /// Human-readable name.
    pub name: String,
    /// Command that installs the dependency, to be run as root.
    pub install_command: Option<String>,
    /// Free-form instructions, used when there is no install command.
    pub install_instructions: Option<String>,
    /// Extra remarks shown after the install command.
    pub install_comments: Option<String>,
    /// Where to download the dependency by hand.
    pub website: Option<String>,
    /// Remarks shown after the website.
    pub website_comments: Option<String>,
    checker: Option<Checker>,
}

impl DependencySpec {
    /// Register the presence check.
    pub fn define_checker<F>(&mut self, checker: F)
    where
        F: Fn() -> CheckResult + Send + Sync + 'static,
    {
        self.checker = Some(Box::new(checker));
    }

    /// Check for `command` on the current `PATH`.
    pub fn checks_command(&mut self, command: &str) {
        let command = command.to_string();
        self.define_checker(move || CheckResult::from_path(platform::find_command(&command)));
    }

    /// Check for `command` in an explicit list of directories.
    pub fn checks_command_in(&mut self, command: &str, search_path: Vec<PathBuf>) {
        let command = command.to_string();
        self.define_checker(move || {
            CheckResult::from_path(platform::find_command_in(&command, &search_path))
        });
    }

    /// Check that `pkg-config` knows about `module`.
    pub fn checks_pkg_config(&mut self, module: &str) {
        let module = module.to_string();
        self.define_checker(move || {
            CheckResult::from_success(shell::command_succeeds("pkg-config", &[module.as_str()]))
        });
    }

    /// Check that a shell command line exits successfully.
    pub fn checks_shell(&mut self, command_line: &str) {
        let command_line = command_line.to_string();
        self.define_checker(move || CheckResult::from_success(shell::shell_succeeds(&command_line)));
    }

    /// Whether a checker has been registered.
    pub fn has_checker(&self) -> bool {
        self.checker.is_some()
    }
}

/// A required piece of external software.
///
/// Two states: uninitialized, holding the pending initializer, and
/// initialized, holding the resolved [`DependencySpec`]. Any accessor or
/// [`check`](Self::check) moves it to the second state; it never goes back.
pub struct Dependency {
    init: Mutex<Option<Initializer>>,
    spec: OnceLock<DependencySpec>,
}

impl Dependency {
    /// Create a dependency whose attributes are filled in on first use.
    ///
    /// # Example
    ///
    /// ```
    /// use peridot::dependency::Dependency;
    ///
    /// let dep = Dependency::new(|dep| {
    ///     dep.name = "GNU Make".to_string();
    ///     dep.checks_command("make");
    ///     dep.website = Some("https://www.gnu.org/software/make/".to_string());
    /// });
    /// assert!(!dep.is_initialized());
    /// assert_eq!(dep.name(), "GNU Make");
    /// assert!(dep.is_initialized());
    /// ```
    pub fn new<F>(init: F) -> Self
    where
        F: FnOnce(&mut DependencySpec) + Send + 'static,
    {
        Self {
            init: Mutex::new(Some(Box::new(init))),
            spec: OnceLock::new(),
        }
    }

    /// Whether the initializer has already run.
    pub fn is_initialized(&self) -> bool {
        self.spec.get().is_some()
    }

    fn spec(&self) -> &DependencySpec {
        self.spec.get_or_init(|| {
            let init = self
                .init
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .take();
            let mut spec = DependencySpec::default();
            if let Some(init) = init {
                init(&mut spec);
            }
            tracing::debug!(dependency = %spec.name, "initialized dependency");
            spec
        })
    }

    /// Human-readable name.
    pub fn name(&self) -> &str {
        &self.spec().name
    }

    /// Command that installs the dependency, if known.
    pub fn install_command(&self) -> Option<&str> {
        self.spec().install_command.as_deref()
    }

    /// Free-form install instructions, if any.
    pub fn install_instructions(&self) -> Option<&str> {
        self.spec().install_instructions.as_deref()
    }

    /// Remarks shown after the install command.
    pub fn install_comments(&self) -> Option<&str> {
        self.spec().install_comments.as_deref()
    }

    /// Download page, if any.
    pub fn website(&self) -> Option<&str> {
        self.spec().website.as_deref()
    }

    /// Remarks shown after the website.
    pub fn website_comments(&self) -> Option<&str> {
        self.spec().website_comments.as_deref()
    }

    /// Check the system for this dependency.
    ///
    /// Not memoized: every call runs the checker again. A dependency without
    /// a checker is reported as not found.
    pub fn check(&self) -> CheckResult {
        let spec = self.spec();
        let result = match &spec.checker {
            Some(checker) => checker(),
            None => {
                tracing::warn!(dependency = %spec.name, "no checker defined");
                CheckResult::NotFound
            }
        };
        tracing::debug!(dependency = %spec.name, result = ?result, "checked dependency");
        result
    }
}

impl fmt::Debug for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.spec.get() {
            Some(spec) => f
                .debug_struct("Dependency")
                .field("name", &spec.name)
                .field("install_command", &spec.install_command)
                .field("website", &spec.website)
                .finish_non_exhaustive(),
            None => f.write_str("Dependency(<uninitialized>)"),
        }
    }
}
