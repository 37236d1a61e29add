//! Word list loading
//!
//! Reads a one-word-per-line file into memory using a memory map, with
//! automatic encoding detection and BOM handling. Lines keep their
//! content verbatim apart from the trailing CR/LF: embedded whitespace is
//! part of the word. Empty lines are skipped (an empty word would drive
//! the minimum word length to zero and can never be a component).
//!
//! The decomposition indexes assume set semantics, so the loader removes
//! duplicate lines by default; callers that guarantee uniqueness can skip
//! the pass.

use ahash::RandomState;
use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use hashbrown::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::Error;

/// Result of encoding detection
#[derive(Debug, Clone)]
pub struct EncodingInfo {
    /// Detected encoding name
    pub name: &'static str,
    /// Confidence level (0.0 - 1.0)
    pub confidence: f32,
    /// The encoding_rs Encoding reference
    pub encoding: &'static Encoding,
}

impl Default for EncodingInfo {
    fn default() -> Self {
        Self {
            name: "UTF-8",
            confidence: 1.0,
            encoding: encoding_rs::UTF_8,
        }
    }
}

/// Detect the encoding of a file by sampling its content
pub fn detect_encoding(path: &Path) -> std::io::Result<EncodingInfo> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    // First 64KB is enough for detection
    let mut sample = vec![0u8; 64 * 1024];
    let bytes_read = reader.read(&mut sample)?;
    sample.truncate(bytes_read);

    if bytes_read == 0 {
        return Ok(EncodingInfo::default());
    }

    if let Some(encoding) = detect_bom(&sample) {
        return Ok(EncodingInfo {
            name: encoding.name(),
            confidence: 1.0,
            encoding,
        });
    }

    let mut detector = EncodingDetector::new();
    detector.feed(&sample, true);
    let encoding = detector.guess(None, true);

    let confidence = if encoding == encoding_rs::UTF_8 {
        if std::str::from_utf8(&sample).is_ok() {
            1.0
        } else {
            0.5
        }
    } else {
        0.8
    };

    Ok(EncodingInfo {
        name: encoding.name(),
        confidence,
        encoding,
    })
}

/// Detect BOM (Byte Order Mark) at the start of content
fn detect_bom(content: &[u8]) -> Option<&'static Encoding> {
    if content.len() >= 3 && content[0..3] == [0xEF, 0xBB, 0xBF] {
        return Some(encoding_rs::UTF_8);
    }
    if content.len() >= 2 {
        if content[0..2] == [0xFE, 0xFF] {
            return Some(encoding_rs::UTF_16BE);
        }
        if content[0..2] == [0xFF, 0xFE] {
            return Some(encoding_rs::UTF_16LE);
        }
    }
    None
}

/// Memory-mapped line iterator for large wordlists
///
/// UTF-8 files are split on raw newline bytes straight out of the map.
/// Any other encoding is transcoded to UTF-8 up front: splitting the raw
/// bytes would tear multi-byte code units apart (a UTF-16 newline is
/// `0x0A 0x00`, so a byte-level split leaves a stray NUL on every line).
pub struct MmapLineIterator {
    mmap: memmap2::Mmap,
    decoded: Option<String>,
    encoding: &'static Encoding,
    position: usize,
}

impl MmapLineIterator {
    pub fn new(path: &Path) -> std::io::Result<Self> {
        let encoding_info = detect_encoding(path)?;
        let file = File::open(path)?;
        let mmap = unsafe { memmap2::Mmap::map(&file)? };

        let (decoded, position) = if encoding_info.encoding == encoding_rs::UTF_8 {
            // Skip UTF-8 BOM if present; lines come out of the map itself
            let position = if mmap.len() >= 3 && mmap[0..3] == [0xEF, 0xBB, 0xBF] {
                3
            } else {
                0
            };
            (None, position)
        } else {
            // decode() sniffs and strips the BOM itself
            let (text, _, had_errors) = encoding_info.encoding.decode(&mmap);
            if had_errors {
                log::warn!(
                    "malformed {} sequences in {:?}, replaced during transcode",
                    encoding_info.name,
                    path
                );
            }
            (Some(text.into_owned()), 0)
        };

        Ok(Self {
            mmap,
            decoded,
            encoding: encoding_info.encoding,
            position,
        })
    }

    /// Total size of the file in bytes
    pub fn size(&self) -> usize {
        self.mmap.len()
    }

    /// The detected encoding
    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }
}

impl Iterator for MmapLineIterator {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        // Already UTF-8 either way: the map itself, or the transcode
        let bytes: &[u8] = match &self.decoded {
            Some(text) => text.as_bytes(),
            None => &self.mmap,
        };

        if self.position >= bytes.len() {
            return None;
        }

        let remaining = &bytes[self.position..];
        let line_end = memchr::memchr(b'\n', remaining)
            .map(|i| i + 1)
            .unwrap_or(remaining.len());

        let line_bytes = &remaining[..line_end];

        // Strip the trailing newline and carriage return only; any other
        // whitespace belongs to the word.
        let line_bytes = line_bytes.strip_suffix(b"\n").unwrap_or(line_bytes);
        let line_bytes = line_bytes.strip_suffix(b"\r").unwrap_or(line_bytes);

        let line = match std::str::from_utf8(line_bytes) {
            Ok(s) => s.to_string(),
            Err(_) => String::from_utf8_lossy(line_bytes).into_owned(),
        };

        self.position += line_end;
        Some(line)
    }
}

/// Summary of one loaded word list
#[derive(Debug)]
pub struct LoadReport {
    /// The usable words, in file order
    pub words: Vec<String>,
    /// Lines read from the file, including empty and duplicate ones
    pub total_lines: u64,
    /// Duplicate lines dropped by the hygiene pass
    pub duplicates: u64,
    /// Empty lines skipped
    pub empty_lines: u64,
    /// Detected encoding name
    pub encoding: &'static str,
    /// File size in bytes
    pub bytes: u64,
}

/// Load a word list from a file.
///
/// With `dedup` enabled (the default), duplicate lines are dropped while
/// preserving first-seen order; the indexes require set semantics.
pub fn load_words(path: &Path, dedup: bool) -> Result<LoadReport, Error> {
    // A zero-length file cannot be mapped; report it as an empty list so
    // the index builder surfaces EmptyWordList instead of an I/O error.
    let meta = std::fs::metadata(path).map_err(|e| Error::io(path, e))?;
    if meta.len() == 0 {
        return Ok(LoadReport {
            words: Vec::new(),
            total_lines: 0,
            duplicates: 0,
            empty_lines: 0,
            encoding: "UTF-8",
            bytes: 0,
        });
    }

    let iter = MmapLineIterator::new(path).map_err(|e| Error::io(path, e))?;
    let encoding = iter.encoding().name();
    let bytes = iter.size() as u64;

    log::debug!("reading {:?} as {} ({} bytes)", path, encoding, bytes);

    let mut words = Vec::new();
    let mut seen: HashSet<String, RandomState> = HashSet::with_hasher(RandomState::new());
    let mut total_lines = 0u64;
    let mut duplicates = 0u64;
    let mut empty_lines = 0u64;

    for line in iter {
        total_lines += 1;

        if line.is_empty() {
            empty_lines += 1;
            continue;
        }

        if dedup {
            if seen.insert(line.clone()) {
                words.push(line);
            } else {
                duplicates += 1;
            }
        } else {
            words.push(line);
        }
    }

    if duplicates > 0 {
        log::warn!("dropped {} duplicate lines from {:?}", duplicates, path);
    }

    Ok(LoadReport {
        words,
        total_lines,
        duplicates,
        empty_lines,
        encoding,
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_utf8_detection() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Hello, World!").unwrap();
        writeln!(file, "Привет мир!").unwrap();

        let info = detect_encoding(file.path()).unwrap();
        assert_eq!(info.name, "UTF-8");
    }

    #[test]
    fn test_line_iterator_strips_crlf_only() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"cat\r\ndog\n  padded  \n").unwrap();

        let lines: Vec<_> = MmapLineIterator::new(file.path()).unwrap().collect();
        assert_eq!(lines, vec!["cat", "dog", "  padded  "]);
    }

    #[test]
    fn test_utf8_bom_is_skipped() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"\xEF\xBB\xBFcat\ndog\ncatdog\n").unwrap();

        let report = load_words(file.path(), true).unwrap();
        assert_eq!(report.words, vec!["cat", "dog", "catdog"]);
        assert_eq!(report.encoding, "UTF-8");
    }

    #[test]
    fn test_utf16le_wordlist_is_transcoded() {
        // A byte-level newline split would leave a stray NUL on every
        // line; the whole buffer must be transcoded before splitting.
        let mut data = vec![0xFF, 0xFE]; // UTF-16LE BOM
        for unit in "cat\ndog\ncatdog\n".encode_utf16() {
            data.extend_from_slice(&unit.to_le_bytes());
        }
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&data).unwrap();

        let report = load_words(file.path(), true).unwrap();
        assert_eq!(report.words, vec!["cat", "dog", "catdog"]);
        assert_eq!(report.encoding, "UTF-16LE");
    }

    #[test]
    fn test_utf16be_wordlist_is_transcoded() {
        let mut data = vec![0xFE, 0xFF]; // UTF-16BE BOM
        for unit in "cat\ndog\ncatdog\n".encode_utf16() {
            data.extend_from_slice(&unit.to_be_bytes());
        }
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&data).unwrap();

        let report = load_words(file.path(), true).unwrap();
        assert_eq!(report.words, vec!["cat", "dog", "catdog"]);
        assert_eq!(report.encoding, "UTF-16BE");
    }

    #[test]
    fn test_missing_trailing_newline() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"cat\ndog").unwrap();

        let lines: Vec<_> = MmapLineIterator::new(file.path()).unwrap().collect();
        assert_eq!(lines, vec!["cat", "dog"]);
    }

    #[test]
    fn test_load_skips_empty_lines_and_dedups() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"cat\n\ndog\ncat\ncatdog\n").unwrap();

        let report = load_words(file.path(), true).unwrap();
        assert_eq!(report.words, vec!["cat", "dog", "catdog"]);
        assert_eq!(report.total_lines, 5);
        assert_eq!(report.duplicates, 1);
        assert_eq!(report.empty_lines, 1);
    }

    #[test]
    fn test_load_without_dedup_keeps_everything() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"cat\ncat\n").unwrap();

        let report = load_words(file.path(), false).unwrap();
        assert_eq!(report.words, vec!["cat", "cat"]);
        assert_eq!(report.duplicates, 0);
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = load_words(Path::new("/no/such/word.list"), true);
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
