//! Builtin catalog of build-tool dependencies.
//!
//! Each entry names its Debian-family and Red Hat-family package, so the
//! install command follows whatever distribution the platform reports.

use crate::dependency::descriptor::{Dependency, DependencySpec};
use crate::platform::{PackageManager, Platform};
use std::sync::Arc;

/// How a builtin dependency is detected.
#[derive(Debug, Clone, Copy)]
enum Detector {
    /// Executable on `PATH`.
    Command(&'static str),
    /// Module known to `pkg-config`.
    PkgConfig(&'static str),
}

/// Static description of a builtin dependency.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinDependency {
    /// Lookup key used on the command line and in config.
    pub key: &'static str,
    /// Display name.
    pub name: &'static str,
    detector: Detector,
    apt_package: &'static str,
    yum_package: &'static str,
    website: &'static str,
}

impl BuiltinDependency {
    /// The package name for `manager`.
    pub fn package_for(&self, manager: PackageManager) -> &'static str {
        match manager {
            PackageManager::Apt => self.apt_package,
            PackageManager::Yum => self.yum_package,
        }
    }

    /// Build a lazily initialized descriptor for this entry.
    pub fn dependency(&self, platform: Arc<Platform>) -> Dependency {
        let entry = *self;
        Dependency::new(move |dep: &mut DependencySpec| {
            dep.name = entry.name.to_string();
            match entry.detector {
                Detector::Command(command) => dep.checks_command(command),
                Detector::PkgConfig(module) => dep.checks_pkg_config(module),
            }
            dep.install_command = platform
                .package_manager()
                .map(|manager| manager.install_command(entry.package_for(manager)));
            dep.website = Some(entry.website.to_string());
        })
    }
}

/// All builtin dependencies, in the order installers check them.
pub const CATALOG: &[BuiltinDependency] = &[
    BuiltinDependency {
        key: "automake",
        name: "GNU Automake",
        detector: Detector::Command("automake"),
        apt_package: "automake",
        yum_package: "automake",
        website: "http://www.gnu.org/software/automake/",
    },
    BuiltinDependency {
        key: "autoconf",
        name: "GNU Autoconf",
        detector: Detector::Command("autoconf"),
        apt_package: "autoconf",
        yum_package: "autoconf",
        website: "http://www.gnu.org/software/autoconf/",
    },
    BuiltinDependency {
        key: "libtool",
        name: "GNU Libtool",
        detector: Detector::Command("libtool"),
        apt_package: "libtool",
        yum_package: "libtool",
        website: "http://www.gnu.org/software/libtool/",
    },
    BuiltinDependency {
        key: "git",
        name: "Git revision control system",
        detector: Detector::Command("git"),
        apt_package: "git-core",
        yum_package: "git-core",
        website: "http://www.git-scm.org/",
    },
    BuiltinDependency {
        key: "libevent",
        name: "libevent",
        detector: Detector::PkgConfig("libevent"),
        apt_package: "libevent-dev",
        yum_package: "libevent-devel",
        website: "http://www.monkey.org/~provos/libevent/",
    },
    BuiltinDependency {
        key: "check",
        name: "Check: A unit testing framework for C",
        detector: Detector::PkgConfig("check"),
        apt_package: "check",
        yum_package: "check-devel",
        website: "http://check.sourceforge.net/",
    },
    BuiltinDependency {
        key: "sqlite3",
        name: "SQLite3",
        detector: Detector::PkgConfig("sqlite3"),
        apt_package: "libsqlite3-dev",
        yum_package: "sqlite-devel",
        website: "http://www.sqlite.org/",
    },
    BuiltinDependency {
        key: "glib",
        name: "GLib",
        detector: Detector::PkgConfig("glib-2.0"),
        apt_package: "libglib2.0-dev",
        yum_package: "glib2-devel",
        website: "http://www.gtk.org/",
    },
    BuiltinDependency {
        key: "openssl",
        name: "OpenSSL headers",
        detector: Detector::PkgConfig("openssl"),
        apt_package: "libssl-dev",
        yum_package: "openssl-devel",
        website: "http://www.openssl.org/",
    },
    BuiltinDependency {
        key: "make",
        name: "Make",
        detector: Detector::Command("make"),
        apt_package: "make",
        yum_package: "make",
        website: "http://www.gnu.org/software/make/",
    },
];

/// Look up a builtin entry by key.
pub fn lookup(key: &str) -> Option<&'static BuiltinDependency> {
    CATALOG.iter().find(|entry| entry.key == key)
}

/// Build the descriptor for `key`, if it is a builtin.
pub fn by_key(key: &str, platform: &Arc<Platform>) -> Option<Dependency> {
    lookup(key).map(|entry| entry.dependency(Arc::clone(platform)))
}

/// Build descriptors for every builtin, in catalog order.
pub fn all(platform: &Arc<Platform>) -> Vec<Dependency> {
    CATALOG
        .iter()
        .map(|entry| entry.dependency(Arc::clone(platform)))
        .collect()
}
