//! Package identity helpers.
//!
//! Responsibilities:
//! - Read the package name from the `Cargo.toml` in the working directory.
//! - Derive an import path relative to the configured source roots when no
//!   manifest is available.
//! - Report the name of the working directory.
//!
//! Does NOT handle:
//! - Workspace manifests, inheritance, or any manifest field besides `package.name`.
//!
//! Invariants:
//! - An unreadable manifest falls back to the import path; a manifest that
//!   reads but does not parse, or has no name, yields an empty string.
//! - Source roots come from `SOURCE_PATH` via `Resolver::get`, so a `.env`
//!   file may provide them.

use std::path::{Component, Path, PathBuf};

use serde::Deserialize;

use crate::constants::{MANIFEST_FILE, SOURCE_DIR, SOURCE_PATH_VAR};
use crate::error::EnvError;
use crate::loader::Resolver;
use crate::store::EnvStore;

#[derive(Debug, Deserialize)]
struct Manifest {
    package: Option<PackageSection>,
}

#[derive(Debug, Deserialize)]
struct PackageSection {
    name: Option<String>,
}

/// Read `package.name` from the manifest at `path`.
///
/// Returns `Ok(None)` when the manifest has no package section or an empty name.
pub fn read_manifest_name(path: &Path) -> Result<Option<String>, EnvError> {
    let contents = std::fs::read_to_string(path).map_err(|source| EnvError::ManifestRead {
        path: path.to_path_buf(),
        source,
    })?;

    let manifest: Manifest = toml::from_str(&contents).map_err(|_| EnvError::ManifestParse {
        path: path.to_path_buf(),
    })?;

    Ok(manifest
        .package
        .and_then(|package| package.name)
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty()))
}

/// Import path of `path` relative to the first `<root>/src` that contains it.
///
/// A leading `/private` (the macOS temp-dir alias) is ignored. When no root
/// contains the path, the whole path is returned without its leading
/// separator. The result always uses `/` separators.
pub fn import_path(path: &Path, roots: &[PathBuf]) -> String {
    let unaliased;
    let path = match path.strip_prefix("/private") {
        Ok(rest) => {
            unaliased = Path::new("/").join(rest);
            unaliased.as_path()
        }
        Err(_) => path,
    };

    for root in roots {
        if let Ok(relative) = path.strip_prefix(root.join(SOURCE_DIR)) {
            return to_slash(relative);
        }
    }

    to_slash(path)
}

fn to_slash(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            Component::CurDir | Component::RootDir | Component::Prefix(_) => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

impl<S: EnvStore> Resolver<S> {
    /// The raw `SOURCE_PATH` value, or an empty string.
    pub fn source_path(&self) -> String {
        self.get_or(SOURCE_PATH_VAR, "")
    }

    /// `SOURCE_PATH` split on the platform's list separator.
    pub fn source_paths(&self) -> Vec<PathBuf> {
        std::env::split_paths(&self.source_path()).collect()
    }

    /// Import path of the working directory relative to the source roots.
    pub fn current_import_path(&self) -> String {
        import_path(&self.working_dir(), &self.source_paths())
    }

    /// Name of the package in the working directory.
    pub fn current_package_name(&self) -> String {
        let manifest = self.working_dir().join(MANIFEST_FILE);
        match read_manifest_name(&manifest) {
            Ok(name) => name.unwrap_or_default(),
            Err(EnvError::ManifestRead { .. }) => {
                tracing::debug!(
                    manifest = %manifest.display(),
                    "No readable manifest; deriving package from source roots"
                );
                self.current_import_path()
            }
            Err(e) => {
                tracing::debug!(error = %e, "Manifest has no usable package name");
                String::new()
            }
        }
    }

    /// Last component of the working directory, or an empty string at the root.
    pub fn current_folder_name(&self) -> String {
        self.working_dir()
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryEnv;
    use std::fs;
    use tempfile::TempDir;

    fn resolver_in(dir: &Path, pairs: &[(&str, &str)]) -> Resolver<MemoryEnv> {
        let mut all = vec![("GO_ENV", "envstage-package-unmatched-2e9b")];
        all.extend_from_slice(pairs);
        Resolver::with_store(MemoryEnv::from_pairs(all)).with_working_dir(dir)
    }

    #[test]
    fn test_read_manifest_name() {
        let temp_dir = TempDir::new().unwrap();
        let manifest = temp_dir.path().join("Cargo.toml");
        fs::write(
            &manifest,
            "[package]\nname = \"demo-service\"\nversion = \"0.1.0\"\n\n[dependencies]\nserde = \"1\"\n",
        )
        .unwrap();

        assert_eq!(
            read_manifest_name(&manifest).unwrap().as_deref(),
            Some("demo-service")
        );
    }

    #[test]
    fn test_read_manifest_without_package_section() {
        let temp_dir = TempDir::new().unwrap();
        let manifest = temp_dir.path().join("Cargo.toml");
        fs::write(&manifest, "[workspace]\nmembers = [\"crates/a\"]\n").unwrap();

        assert_eq!(read_manifest_name(&manifest).unwrap(), None);
    }

    #[test]
    fn test_read_manifest_errors() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("Cargo.toml");
        assert!(matches!(
            read_manifest_name(&missing),
            Err(EnvError::ManifestRead { .. })
        ));

        fs::write(&missing, "[package\nname = ").unwrap();
        assert!(matches!(
            read_manifest_name(&missing),
            Err(EnvError::ManifestParse { .. })
        ));
    }

    #[test]
    fn test_current_package_name_from_manifest() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("Cargo.toml"),
            "[package]\nname = \"envstage-demo\"\n",
        )
        .unwrap();

        let resolver = resolver_in(temp_dir.path(), &[]);
        assert_eq!(resolver.current_package_name(), "envstage-demo");
    }

    #[test]
    fn test_unparsable_manifest_yields_empty_name() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("Cargo.toml"), "not = [valid").unwrap();

        let resolver = resolver_in(temp_dir.path(), &[]);
        assert_eq!(resolver.current_package_name(), "");
    }

    #[cfg(unix)]
    #[test]
    fn test_missing_manifest_falls_back_to_import_path() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("workspace");
        let package_dir = root.join("src/github.com/acme/tool");
        fs::create_dir_all(&package_dir).unwrap();

        let source_path = format!("/nonexistent/root:{}", root.display());
        let resolver = resolver_in(&package_dir, &[("SOURCE_PATH", source_path.as_str())]);

        assert_eq!(resolver.source_paths().len(), 2);
        assert_eq!(resolver.current_package_name(), "github.com/acme/tool");
    }

    #[cfg(unix)]
    #[test]
    fn test_import_path_rules() {
        let roots = vec![PathBuf::from("/home/dev/code")];

        assert_eq!(
            import_path(Path::new("/home/dev/code/src/acme/tool"), &roots),
            "acme/tool"
        );
        assert_eq!(
            import_path(Path::new("/private/home/dev/code/src/acme"), &roots),
            "acme"
        );
        assert_eq!(
            import_path(Path::new("/opt/elsewhere/tool"), &roots),
            "opt/elsewhere/tool"
        );
        assert_eq!(
            import_path(Path::new("/home/dev/code/tool"), &roots),
            "home/dev/code/tool"
        );
        assert_eq!(import_path(Path::new("/opt/tool"), &[]), "opt/tool");
    }

    #[test]
    fn test_current_folder_name() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("my-service");
        fs::create_dir_all(&dir).unwrap();

        assert_eq!(resolver_in(&dir, &[]).current_folder_name(), "my-service");
    }

    #[test]
    fn test_source_path_defaults_to_empty() {
        let temp_dir = TempDir::new().unwrap();
        let resolver = resolver_in(temp_dir.path(), &[]);

        assert_eq!(resolver.source_path(), "");
    }
}
