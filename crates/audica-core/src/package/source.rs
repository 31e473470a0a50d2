use std::collections::HashMap;
use std::io::{Read, Seek};

use zip::ZipArchive;
use zip::result::ZipError;

use crate::error::{Error, Result};

/// Named entries of a song package.
///
/// Implemented by the zip-backed `ArchiveSource` and by a plain map of entry
/// names to bytes, which is handy for tests.
pub trait EntrySource {
    /// Read an entry, `Ok(None)` when it does not exist.
    fn read_entry(&mut self, name: &str) -> Result<Option<Vec<u8>>>;

    fn entry_names(&self) -> Vec<String>;

    fn contains(&self, name: &str) -> bool {
        self.entry_names().iter().any(|n| n == name)
    }
}

/// Zip archive opened for reading.
pub struct ArchiveSource<R: Read + Seek> {
    archive: ZipArchive<R>,
}

impl<R: Read + Seek> ArchiveSource<R> {
    pub fn open(reader: R) -> Result<Self> {
        let archive = ZipArchive::new(reader).map_err(|e| Error::NotAContainer(e.to_string()))?;
        Ok(Self { archive })
    }
}

impl<R: Read + Seek> EntrySource for ArchiveSource<R> {
    fn read_entry(&mut self, name: &str) -> Result<Option<Vec<u8>>> {
        if name.is_empty() {
            return Ok(None);
        }

        let mut file = match self.archive.by_name(name) {
            Ok(file) => file,
            Err(ZipError::FileNotFound) => return Ok(None),
            Err(e) => return Err(Error::malformed(name, e)),
        };

        let mut buffer = Vec::with_capacity(file.size() as usize);
        file.read_to_end(&mut buffer)
            .map_err(|e| Error::malformed(name, e))?;
        Ok(Some(buffer))
    }

    fn entry_names(&self) -> Vec<String> {
        self.archive.file_names().map(str::to_owned).collect()
    }

    fn contains(&self, name: &str) -> bool {
        self.archive.index_for_name(name).is_some()
    }
}

impl EntrySource for HashMap<String, Vec<u8>> {
    fn read_entry(&mut self, name: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.get(name).cloned())
    }

    fn entry_names(&self) -> Vec<String> {
        self.keys().cloned().collect()
    }

    fn contains(&self, name: &str) -> bool {
        self.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use zip::ZipWriter;
    use zip::write::SimpleFileOptions;

    fn archive(entries: &[(&str, &str)]) -> Vec<u8> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in entries {
            zip.start_file(*name, SimpleFileOptions::default()).unwrap();
            zip.write_all(content.as_bytes()).unwrap();
        }
        zip.finish().unwrap().into_inner()
    }

    #[test]
    fn test_read_existing_and_missing_entries() {
        let bytes = archive(&[("song.desc", "{}"), ("song.png", "png")]);
        let mut source = ArchiveSource::open(Cursor::new(bytes)).unwrap();

        assert_eq!(source.entry_names().len(), 2);
        assert_eq!(source.read_entry("song.png").unwrap(), Some(b"png".to_vec()));
        assert_eq!(source.read_entry("expert.cues").unwrap(), None);
        assert_eq!(source.read_entry("").unwrap(), None);
        assert!(source.contains("song.desc"));
        assert!(!source.contains("expert.cues"));
    }

    #[test]
    fn test_open_garbage_is_not_a_container() {
        let result = ArchiveSource::open(Cursor::new(b"definitely not a zip".to_vec()));
        assert!(matches!(result, Err(Error::NotAContainer(_))));
    }

    #[test]
    fn test_map_source() {
        let mut source: HashMap<String, Vec<u8>> = HashMap::new();
        source.insert("song.desc".to_string(), b"{}".to_vec());

        assert!(source.contains("song.desc"));
        assert_eq!(source.read_entry("song.desc").unwrap(), Some(b"{}".to_vec()));
        assert_eq!(source.read_entry("song.mid").unwrap(), None);
        assert_eq!(source.entry_names(), vec!["song.desc".to_string()]);
    }
}
