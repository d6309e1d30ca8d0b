//! Capability-based UTF-8 file helpers for saved responses and rendered
//! output, built on `cap-std` and `camino`.
#![forbid(unsafe_code)]

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use std::io::{self, Read};

/// Open an existing UTF-8 file path using ambient authority.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Read the whole file at `path` into a string.
///
/// Used for saved Overpass responses, which are UTF-8 JSON.
pub fn read_utf8_file(path: &Utf8Path) -> io::Result<String> {
    let mut file = open_utf8_file(path)?;
    let mut body = String::new();
    file.read_to_string(&mut body)?;
    Ok(body)
}

/// Open the directory containing `path` and return it with the file name.
pub fn open_dir_and_file(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other("path should include a file name"))?
        .to_owned();
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

/// Return whether `path` is a regular file.
///
/// A missing path is reported as an [`io::ErrorKind::NotFound`] error.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = open_dir_and_file(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_file())
}

/// Create (or truncate) the file at `path`, creating missing parent
/// directories first.
pub fn create_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    ensure_parent_dir(path)?;
    let (dir, name) = open_dir_and_file(path)?;
    dir.create(name.as_str())
}

/// Ensure the parent directory for `path` exists.
///
/// Leading root, prefix and `..` components form the directory opened with
/// ambient authority; the remaining components are created beneath it.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    let (anchor, below) = split_anchor(parent);
    if below.as_str().is_empty() {
        return Ok(());
    }
    fs_utf8::Dir::open_ambient_dir(&anchor, ambient_authority())?.create_dir_all(&below)
}

/// Split `path` at its first named component.
///
/// Returns the leading anchor (`"."` when the path has none) and the rest.
fn split_anchor(path: &Utf8Path) -> (Utf8PathBuf, Utf8PathBuf) {
    let mut anchor = Utf8PathBuf::new();
    let mut below = Utf8PathBuf::new();
    for component in path.components() {
        match component {
            Utf8Component::Normal(name) => below.push(name),
            other if below.as_str().is_empty() => anchor.push(other.as_str()),
            other => below.push(other.as_str()),
        }
    }
    if anchor.as_str().is_empty() {
        anchor.push(".");
    }
    (anchor, below)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use std::io::Write;
    use tempfile::TempDir;

    #[fixture]
    fn temp_dir() -> TempDir {
        TempDir::new().expect("create temporary directory")
    }

    fn utf8_root(dir: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("temporary path is UTF-8")
    }

    #[rstest]
    fn writes_then_reads_a_file(temp_dir: TempDir) {
        let path = utf8_root(&temp_dir).join("nested/deeper/response.json");
        let mut file = create_utf8_file(&path).expect("create file in new directories");
        file.write_all(br#"{"elements":[]}"#).expect("write body");
        drop(file);

        assert!(file_is_file(&path).expect("stat file"));
        assert_eq!(
            read_utf8_file(&path).expect("read body"),
            r#"{"elements":[]}"#
        );
    }

    #[rstest]
    #[case::absent_file("absent.json")]
    #[case::absent_parent("absent/inner.json")]
    fn missing_path_reports_not_found(temp_dir: TempDir, #[case] relative: &str) {
        let err = file_is_file(&utf8_root(&temp_dir).join(relative)).expect_err("missing path");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[rstest]
    fn directory_is_not_a_file(temp_dir: TempDir) {
        let root = utf8_root(&temp_dir);
        std::fs::create_dir(root.join("saved")).expect("create directory");
        assert!(!file_is_file(&root.join("saved")).expect("stat directory"));
    }

    #[rstest]
    fn reading_a_missing_file_fails(temp_dir: TempDir) {
        let err = read_utf8_file(&utf8_root(&temp_dir).join("absent.json"))
            .expect_err("missing file");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[rstest]
    fn bare_file_name_resolves_to_current_directory() {
        let (_, name) = open_dir_and_file(Utf8Path::new("Cargo.toml")).expect("open cwd");
        assert_eq!(name, "Cargo.toml");
    }

    #[rstest]
    #[case::relative("out/reports", ".", "out/reports")]
    #[case::current_dir("./out", ".", "out")]
    #[case::parent_dirs("../../shared/out", "../..", "shared/out")]
    #[case::only_parent("..", "..", "")]
    #[case::empty("", ".", "")]
    fn split_anchor_separates_leading_components(
        #[case] path: &str,
        #[case] anchor: &str,
        #[case] below: &str,
    ) {
        let (found_anchor, found_below) = split_anchor(Utf8Path::new(path));
        assert_eq!(found_anchor, Utf8PathBuf::from(anchor));
        assert_eq!(found_below, Utf8PathBuf::from(below));
    }

    #[cfg(unix)]
    #[rstest]
    fn split_anchor_keeps_the_root_for_absolute_paths() {
        let (anchor, below) = split_anchor(Utf8Path::new("/var/tmp/parkside"));
        assert_eq!(anchor, Utf8PathBuf::from("/"));
        assert_eq!(below, Utf8PathBuf::from("var/tmp/parkside"));
    }

    #[rstest]
    fn existing_parent_is_left_alone(temp_dir: TempDir) {
        let root = utf8_root(&temp_dir);
        ensure_parent_dir(&root.join("report.txt")).expect("parent already exists");
        ensure_parent_dir(&root.join("report.txt")).expect("second call is a no-op");
        assert!(root.is_dir());
    }
}
