//! Host platform detection.
//!
//! Answers the questions an installer asks before it can print useful
//! instructions: which OS family is this, which Linux distribution, what is
//! the shared-library suffix, and where on `PATH` does a command live.
//!
//! # Example
//!
//! ```
//! use peridot::platform::{self, Os, Platform};
//!
//! let platform = Platform::with_root("/nonexistent-root", Os::MacOS);
//! assert_eq!(platform.linux_distro(), None);
//! assert_eq!(platform.library_extension(), "bundle");
//!
//! // The process-wide host is detected once and then reused.
//! assert_eq!(platform::linux_distro(), platform::linux_distro());
//! ```

pub mod distro;
pub mod path;

pub use distro::{detect_distro, LinuxDistro, PackageManager};
pub use path::{
    find_command, find_command_in, is_executable, locate_beside_current_exe, parse_system_path,
    select_executable,
};

use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Operating system family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Os {
    MacOS,
    Linux,
    Windows,
    Other,
}

impl Os {
    /// Detect the OS this binary was built for.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Os::MacOS
        } else if cfg!(target_os = "linux") {
            Os::Linux
        } else if cfg!(target_os = "windows") {
            Os::Windows
        } else {
            Os::Other
        }
    }

    /// Lowercase name, as serialized.
    pub fn name(&self) -> &'static str {
        match self {
            Os::MacOS => "macos",
            Os::Linux => "linux",
            Os::Windows => "windows",
            Os::Other => "other",
        }
    }

    /// The file extension native extensions are built with on this OS.
    pub fn library_extension(&self) -> &'static str {
        match self {
            Os::MacOS => "bundle",
            _ => "so",
        }
    }
}

/// A detected host.
///
/// The distribution is read from marker files under `root` on first request
/// and cached on this value. Share one `Platform` (usually via `Arc`) between
/// everything that needs it rather than probing repeatedly.
#[derive(Debug)]
pub struct Platform {
    root: PathBuf,
    os: Os,
    distro: OnceLock<Option<LinuxDistro>>,
}

impl Platform {
    /// Detect the real host (`/` and the compiled-in OS).
    pub fn detect() -> Self {
        Self::with_root("/", Os::current())
    }

    /// Inspect a filesystem tree other than `/`, as if it belonged to `os`.
    pub fn with_root(root: impl Into<PathBuf>, os: Os) -> Self {
        Self {
            root: root.into(),
            os,
            distro: OnceLock::new(),
        }
    }

    /// The directory marker files are resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The OS family.
    pub fn os(&self) -> Os {
        self.os
    }

    /// The Linux distribution, or `None` when the OS is not Linux.
    pub fn linux_distro(&self) -> Option<LinuxDistro> {
        *self.distro.get_or_init(|| match self.os {
            Os::Linux => Some(detect_distro(&self.root)),
            _ => None,
        })
    }

    /// Native package manager for this host, if it has one we know how to phrase.
    pub fn package_manager(&self) -> Option<PackageManager> {
        self.linux_distro().and_then(|d| d.package_manager())
    }

    /// Shared library extension for this OS.
    pub fn library_extension(&self) -> &'static str {
        self.os.library_extension()
    }
}

static HOST: OnceLock<Platform> = OnceLock::new();

/// The process-wide detected host.
pub fn host() -> &'static Platform {
    HOST.get_or_init(Platform::detect)
}

/// Linux distribution of the host, memoized for the life of the process.
pub fn linux_distro() -> Option<LinuxDistro> {
    host().linux_distro()
}

/// Shared library extension of the host.
pub fn library_extension() -> &'static str {
    host().library_extension()
}

/// Whether environment variable `name` is set to a non-empty value.
pub fn env_defined(name: &str) -> bool {
    std::env::var_os(name).is_some_and(|v| !v.is_empty())
}
