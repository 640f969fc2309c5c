//! Linux distribution detection from release marker files.
//!
//! Install scripts branch on the returned tag, so the marker paths and the
//! substrings matched inside them are fixed.

use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::Path;

const LSB_RELEASE: &str = "etc/lsb-release";
const DEBIAN_VERSION: &str = "etc/debian_version";
const REDHAT_RELEASE: &str = "etc/redhat-release";
const SUSE_RELEASE: &str = "etc/suse-release";
const GENTOO_RELEASE: &str = "etc/gentoo-release";

/// Linux distribution family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinuxDistro {
    Ubuntu,
    Debian,
    Rhel,
    Fedora,
    Centos,
    Suse,
    Gentoo,
    Unknown,
}

/// Native package manager used to phrase install commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    /// `apt-get` (Ubuntu, Debian).
    Apt,
    /// `yum` (RHEL, Fedora, CentOS).
    Yum,
}

impl PackageManager {
    /// The package manager's executable.
    pub fn program(&self) -> &'static str {
        match self {
            PackageManager::Apt => "apt-get",
            PackageManager::Yum => "yum",
        }
    }

    /// The install command for `package`, e.g. `apt-get install make`.
    pub fn install_command(&self, package: &str) -> String {
        format!("{} install {}", self.program(), package)
    }
}

impl LinuxDistro {
    /// The short tag for this distribution (e.g. `"ubuntu"`).
    pub fn tag(&self) -> &'static str {
        match self {
            LinuxDistro::Ubuntu => "ubuntu",
            LinuxDistro::Debian => "debian",
            LinuxDistro::Rhel => "rhel",
            LinuxDistro::Fedora => "fedora",
            LinuxDistro::Centos => "centos",
            LinuxDistro::Suse => "suse",
            LinuxDistro::Gentoo => "gentoo",
            LinuxDistro::Unknown => "unknown",
        }
    }

    /// The package manager install instructions are phrased for, if any.
    pub fn package_manager(&self) -> Option<PackageManager> {
        match self {
            LinuxDistro::Ubuntu | LinuxDistro::Debian => Some(PackageManager::Apt),
            LinuxDistro::Rhel | LinuxDistro::Fedora | LinuxDistro::Centos => {
                Some(PackageManager::Yum)
            }
            LinuxDistro::Suse | LinuxDistro::Gentoo | LinuxDistro::Unknown => None,
        }
    }
}

impl fmt::Display for LinuxDistro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Identify the distribution from marker files under `root`.
///
/// Checks run in a fixed priority order; the first hit wins.
pub fn detect_distro(root: &Path) -> LinuxDistro {
    let lsb_release = read_file(&root.join(LSB_RELEASE));
    let distro = if lsb_release.contains("Ubuntu") {
        LinuxDistro::Ubuntu
    } else if root.join(DEBIAN_VERSION).exists() {
        LinuxDistro::Debian
    } else if root.join(REDHAT_RELEASE).exists() {
        // Official RHEL reads "Red Hat Enterprise Linux Server release 5.1 (Tikanga)".
        let redhat_release = read_file(&root.join(REDHAT_RELEASE));
        if redhat_release.contains("CentOS") {
            LinuxDistro::Centos
        } else if redhat_release.contains("Fedora") {
            LinuxDistro::Fedora
        } else {
            LinuxDistro::Rhel
        }
    } else if root.join(SUSE_RELEASE).exists() {
        LinuxDistro::Suse
    } else if root.join(GENTOO_RELEASE).exists() {
        LinuxDistro::Gentoo
    } else {
        LinuxDistro::Unknown
    };
    tracing::debug!(root = %root.display(), distro = %distro, "detected linux distribution");
    distro
}

/// Read a file, treating any failure as empty content.
fn read_file(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_default()
}
