//! Executable lookup on the search path.
//!
//! Lookups walk `PATH` entries directly instead of shelling out to `which`,
//! whose behavior varies across systems and is sometimes a shell builtin with
//! inconsistent exit codes.

use std::path::{Path, PathBuf};

/// Check if a path is an executable file.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Split the current `PATH` into its directories, in order.
///
/// An unset `PATH` yields an empty list.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Find `name` on the current `PATH`.
///
/// Returns the absolute path of the first executable file found, scanning
/// directories in `PATH` order.
pub fn find_command(name: &str) -> Option<PathBuf> {
    find_command_in(name, &parse_system_path())
}

/// Find `name` in an explicit list of directories.
///
/// Relative directories (including an empty `PATH` entry) are resolved
/// against the current directory, so a match is always absolute. They are
/// skipped when the current directory cannot be read.
pub fn find_command_in(name: &str, search_path: &[PathBuf]) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok();
    find_command_from(name, search_path, cwd.as_deref())
}

fn find_command_from(name: &str, search_path: &[PathBuf], cwd: Option<&Path>) -> Option<PathBuf> {
    if name.is_empty() {
        return None;
    }
    let found = search_path
        .iter()
        .filter_map(|dir| absolute_dir(dir, cwd))
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable(candidate));
    tracing::debug!(command = name, found = ?found, "searched PATH");
    found
}

fn absolute_dir(dir: &Path, cwd: Option<&Path>) -> Option<PathBuf> {
    if dir.is_absolute() {
        Some(dir.to_path_buf())
    } else {
        cwd.map(|cwd| cwd.join(dir))
    }
}

/// Look in `dir` for an executable whose file name is one of `names`.
///
/// Names are tried in the given order.
pub fn select_executable(dir: &Path, names: &[&str]) -> Option<PathBuf> {
    names
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| is_executable(candidate))
}

/// Look for an executable named `name` next to the running binary.
///
/// Build scripts use this to find companion tools installed alongside the
/// interpreter or driver that launched them.
pub fn locate_beside_current_exe(name: &str) -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    select_executable(exe.parent()?, &[name])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_fake_binary(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "#!/bin/sh\nexit 0\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
        }
    }

    #[cfg(unix)]
    fn create_non_executable_file(path: &Path) {
        use std::os::unix::fs::PermissionsExt;
        fs::write(path, "data").unwrap();
        fs::set_permissions(path, fs::Permissions::from_mode(0o644)).unwrap();
    }

    #[test]
    fn is_executable_returns_true_for_executable_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tool");
        create_fake_binary(&path);
        assert!(is_executable(&path));
    }

    #[cfg(unix)]
    #[test]
    fn is_executable_returns_false_for_non_executable_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("notes.txt");
        create_non_executable_file(&path);
        assert!(!is_executable(&path));
    }

    #[test]
    fn is_executable_returns_false_for_directory() {
        let temp = TempDir::new().unwrap();
        assert!(!is_executable(temp.path()));
    }

    #[test]
    fn is_executable_returns_false_for_nonexistent_file() {
        assert!(!is_executable(Path::new("/nonexistent/path/to/file")));
    }

    #[test]
    fn find_command_in_returns_none_when_absent() {
        let temp = TempDir::new().unwrap();
        let dirs = vec![temp.path().join("a"), temp.path().join("b")];
        assert!(find_command_in("automake", &dirs).is_none());
    }

    #[test]
    fn find_command_in_returns_single_match() {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("bin");
        create_fake_binary(&bin.join("automake"));
        let dirs = vec![temp.path().join("empty"), bin.clone()];

        let found = find_command_in("automake", &dirs);
        assert_eq!(found, Some(bin.join("automake")));
        assert_eq!(find_command_in("automake", &dirs), found);
    }

    #[test]
    fn find_command_in_prefers_earlier_directory() {
        let temp = TempDir::new().unwrap();
        let first = temp.path().join("first");
        let second = temp.path().join("second");
        create_fake_binary(&first.join("make"));
        create_fake_binary(&second.join("make"));

        let found = find_command_in("make", &[first.clone(), second]);
        assert_eq!(found, Some(first.join("make")));
    }

    #[cfg(unix)]
    #[test]
    fn find_command_in_skips_non_executable_match() {
        let temp = TempDir::new().unwrap();
        let first = temp.path().join("first");
        let second = temp.path().join("second");
        fs::create_dir_all(&first).unwrap();
        create_non_executable_file(&first.join("git"));
        create_fake_binary(&second.join("git"));

        let found = find_command_in("git", &[first, second.clone()]);
        assert_eq!(found, Some(second.join("git")));
    }

    #[test]
    fn relative_directory_resolves_against_cwd() {
        let temp = TempDir::new().unwrap();
        create_fake_binary(&temp.path().join("relbin").join("autoreconf"));

        let found = find_command_from(
            "autoreconf",
            &[PathBuf::from("relbin")],
            Some(temp.path()),
        )
        .unwrap();
        assert!(found.is_absolute());
        assert_eq!(found, temp.path().join("relbin").join("autoreconf"));
    }

    #[test]
    fn empty_entry_means_cwd() {
        let temp = TempDir::new().unwrap();
        create_fake_binary(&temp.path().join("libtoolize"));

        let found = find_command_from("libtoolize", &[PathBuf::new()], Some(temp.path()));
        assert_eq!(found, Some(temp.path().join("libtoolize")));
    }

    #[test]
    fn relative_directory_skipped_without_cwd() {
        let temp = TempDir::new().unwrap();
        create_fake_binary(&temp.path().join("make"));
        let dirs = vec![PathBuf::from("relbin"), temp.path().to_path_buf()];

        let found = find_command_from("make", &dirs, None);
        assert_eq!(found, Some(temp.path().join("make")));
    }

    #[test]
    fn find_command_in_results_are_absolute() {
        let found = find_command_in("sh", &[PathBuf::from("."), PathBuf::from("/bin")]);
        if let Some(path) = found {
            assert!(path.is_absolute());
        }
    }

    #[test]
    fn find_command_in_rejects_empty_name() {
        let temp = TempDir::new().unwrap();
        assert!(find_command_in("", &[temp.path().to_path_buf()]).is_none());
    }

    #[test]
    fn find_command_misses_nonsense_name() {
        assert!(find_command("peridot-no-such-command-12345").is_none());
    }

    #[test]
    fn select_executable_tries_names_in_order() {
        let temp = TempDir::new().unwrap();
        create_fake_binary(&temp.path().join("gem1.8"));
        create_fake_binary(&temp.path().join("gem"));

        let found = select_executable(temp.path(), &["gem1.9", "gem1.8", "gem"]);
        assert_eq!(found, Some(temp.path().join("gem1.8")));
        assert!(select_executable(temp.path(), &["rake"]).is_none());
    }
}
