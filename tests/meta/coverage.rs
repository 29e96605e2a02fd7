//! Checks that `tests/unit/` mirrors `src/` file for file

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    const SOURCE_ROOT: &str = "src";
    const UNIT_ROOT: &str = "tests/unit";
    const TEST_ROOT: &str = "tests";

    /// Files that organise modules rather than hold logic
    fn is_structural(relative: &str) -> bool {
        relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs")
    }

    /// Walks `root` and returns every directory and `.rs` file relative to it
    fn layout(root: &Path) -> io::Result<BTreeSet<String>> {
        let mut found = BTreeSet::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                let relative = path
                    .strip_prefix(root)
                    .map_err(io::Error::other)?
                    .to_string_lossy()
                    .replace('\\', "/");

                if path.is_dir() {
                    found.insert(relative);
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    found.insert(relative);
                }
            }
        }

        Ok(found)
    }

    fn rust_files(root: &Path) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    files.push(path);
                }
            }
        }

        files.sort();
        Ok(files)
    }

    fn listing<'a>(entries: impl IntoIterator<Item = &'a String>, render: impl Fn(&str) -> String) -> String {
        entries
            .into_iter()
            .map(|entry| render(entry))
            .collect::<Vec<_>>()
            .join("\n")
    }

    // Tests that each source file and directory has a unit test counterpart
    // Verified by adding an empty src/spatial/scratch.rs
    #[test]
    fn test_all_src_files_have_unit_tests() {
        let sources = layout(Path::new(SOURCE_ROOT)).unwrap();
        let units = layout(Path::new(UNIT_ROOT)).unwrap();

        let missing: Vec<&String> = sources
            .iter()
            .filter(|relative| !is_structural(relative) && !units.contains(*relative))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit tests:\n{}",
            listing(missing, |relative| format!("  - src/{relative} -> tests/unit/{relative}"))
        );
    }

    // Tests that no unit test file outlives the source it covers
    // Verified by adding tests/unit/io/stale.rs
    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let sources = layout(Path::new(SOURCE_ROOT)).unwrap();
        let units = layout(Path::new(UNIT_ROOT)).unwrap();

        let orphaned: Vec<&String> = units
            .iter()
            .filter(|relative| !relative.ends_with("mod.rs") && !sources.contains(*relative))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit tests without a source file:\n{}",
            listing(orphaned, |relative| format!("  - tests/unit/{relative} (no src/{relative})"))
        );
    }

    #[test]
    fn test_all_test_files_contain_tests() {
        let empty: Vec<String> = rust_files(Path::new(TEST_ROOT))
            .unwrap()
            .into_iter()
            .filter(|path| path.file_name().is_some_and(|name| name != "mod.rs"))
            .filter(|path| {
                fs::read_to_string(path)
                    .map(|content| !content.contains("#[test]"))
                    .unwrap_or(true)
            })
            .map(|path| path.display().to_string())
            .collect();

        assert!(
            empty.is_empty(),
            "Test files without any #[test] function:\n{}",
            listing(&empty, |path| format!("  - {path}"))
        );
    }
}
