pub mod bench_data;
mod error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub use error::HuffError;
pub use error::Result;
use log::*;

pub const MAX_SYMBOL_VALUE: u32 = u8::MAX as u32;

/// number of occurences per byte value
pub type CountsTable = [u64; MAX_SYMBOL_VALUE as usize + 1];

/// creates a table with the counts of each symbol
#[inline]
pub fn count_simple(input: &[u8]) -> CountsTable {
    let mut counts = [0; 256];

    for byte in input {
        counts[*byte as usize] += 1
    }
    counts
}

/// number of byte values which occur at least once
pub fn get_num_symbols(counts: &CountsTable) -> usize {
    counts.iter().filter(|count| **count != 0).count()
}

/// sum of all counts, equals the length of the counted input
pub fn get_total(counts: &CountsTable) -> u64 {
    counts.iter().sum()
}

/// Reads the complete file at `path`.
///
/// Any failure to open or read is reported as [`HuffError::SourceRead`] carrying the path.
pub fn read_source(path: &Path) -> Result<Vec<u8>> {
    let to_source_err = |source| HuffError::SourceRead {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::open(path).map_err(to_source_err)?;
    let size_hint = file.metadata().map(|m| m.len() as usize).unwrap_or(0);

    let mut data = Vec::new();
    data.try_reserve_exact(size_hint)?;
    file.read_to_end(&mut data).map_err(to_source_err)?;
    debug!("read {} bytes from {:?}", data.len(), path);
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_simple() {
        let counts = count_simple(b"abracadabra");
        assert_eq!(counts[b'a' as usize], 5);
        assert_eq!(counts[b'b' as usize], 2);
        assert_eq!(counts[b'r' as usize], 2);
        assert_eq!(counts[b'c' as usize], 1);
        assert_eq!(counts[b'd' as usize], 1);
        assert_eq!(get_num_symbols(&counts), 5);
        assert_eq!(get_total(&counts), 11);
    }

    #[test]
    fn test_count_empty() {
        let counts = count_simple(&[]);
        assert_eq!(get_num_symbols(&counts), 0);
        assert_eq!(get_total(&counts), 0);
    }

    #[test]
    fn test_count_all_bytes() {
        let all_bytes = (0..=u8::MAX).collect::<Vec<u8>>();
        let counts = count_simple(&all_bytes);
        assert!(counts.iter().all(|count| *count == 1));
        assert_eq!(get_num_symbols(&counts), 256);
    }

    #[test]
    fn test_read_source_missing() {
        let path = Path::new("this/path/does/not/exist.txt");
        match read_source(path) {
            Err(HuffError::SourceRead { path: err_path, .. }) => assert_eq!(err_path, path),
            other => panic!("expected SourceRead, got {:?}", other),
        }
    }

    #[test]
    fn test_read_source() {
        let path = std::env::temp_dir().join(format!("common_read_source_{}", std::process::id()));
        std::fs::write(&path, b"hello").unwrap();
        let data = read_source(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(data, b"hello");
    }
}
