use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::{fs, io};

/// Reads a split ID list: one ID per line, trimmed, empty lines dropped,
/// file order preserved.
pub fn read_id_list(path: &Path) -> io::Result<Vec<String>> {
    let file_in = fs::File::open(path)?;
    let file_reader = BufReader::new(file_in);
    let mut ids = Vec::new();
    for line in file_reader.lines() {
        let line = line?;
        let id = line.trim();
        if !id.is_empty() {
            ids.push(id.to_string());
        }
    }
    Ok(ids)
}

/// Lists regular files in `dir` whose extension matches one of `exts`
/// (case-insensitive, without the leading dot). Output is sorted for a
/// deterministic walk order.
pub fn files_with_extensions(dir: &Path, exts: &[&str]) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let matched = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| {
                let e = e.to_lowercase();
                exts.iter().any(|want| e == want.to_lowercase())
            })
            .unwrap_or(false);
        if matched {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn id_list_preserves_order_and_drops_blanks() {
        let dir = tempfile::tempdir().unwrap();
        let list = dir.path().join("train.txt");
        fs::write(&list, "000005\n\n  000001  \n000005\n").unwrap();
        let ids = read_id_list(&list).unwrap();
        // No sorting, no deduplication.
        assert_eq!(ids, vec!["000005", "000001", "000005"]);
    }

    #[test]
    fn extension_filter_is_case_insensitive_and_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.JPG", "a.jpg", "c.png", "d.txt", "e.jpeg"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        let files = files_with_extensions(dir.path(), &["jpg", "jpeg", "png"]).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.jpg", "b.JPG", "c.png", "e.jpeg"]);
    }
}
