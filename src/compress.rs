use crate::config::CompressOptions;
use crate::header::Header;
use crate::header::HEADER_SIZE;
use bitstream::BitWriter;
use common::count_simple;
use common::get_num_symbols;
use common::get_total;
use common::read_source;
use common::HuffError;
use common::Result;
use hufflpuff::build_tree;
use hufflpuff::compress_symbols;
use hufflpuff::tree_to_table;
use hufflpuff::write_tree;
use log::*;
use std::ffi::OsString;
use std::fs;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

/// What a compression run produced.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CompressStats {
    pub input_len: u64,
    pub num_symbols: u16,
    /// bits used by the serialized tree
    pub tree_bits: u64,
    /// bits used by the codes of the input, without padding
    pub payload_bits: u64,
    /// header plus padded bitstream, in bytes
    pub output_len: u64,
}

impl CompressStats {
    pub fn ratio(&self) -> f32 {
        if self.input_len == 0 {
            return 1.0;
        }
        self.output_len as f32 / self.input_len as f32
    }
}

/// Compresses `input` into a new buffer, see [`compress_to`].
pub fn compress(input: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    out.try_reserve(HEADER_SIZE + input.len() / 2)?;
    compress_to(input, &mut out)?;
    Ok(out)
}

/// Writes header, tree and the encoded `input` to `writer`.
///
/// Nothing is written if building the tree or the code table fails.
pub fn compress_to<W: Write>(input: &[u8], mut writer: W) -> Result<CompressStats> {
    let counts = count_simple(input);
    let tree = build_tree(&counts)?;
    let table = tree.as_ref().map(tree_to_table).transpose()?;

    let header = Header {
        num_symbols: get_num_symbols(&counts) as u16,
        original_len: get_total(&counts),
    };
    header.write_to(&mut writer)?;

    let mut bit_writer = BitWriter::new(writer);
    let mut tree_bits = 0;
    if let (Some(tree), Some(table)) = (&tree, &table) {
        write_tree(tree, &mut bit_writer)?;
        tree_bits = bit_writer.bits_written();
        compress_symbols(table, input, &mut bit_writer)?;
    }
    let payload_bits = bit_writer.bits_written() - tree_bits;
    bit_writer.finish()?;

    let stats = CompressStats {
        input_len: header.original_len,
        num_symbols: header.num_symbols,
        tree_bits,
        payload_bits,
        output_len: HEADER_SIZE as u64 + (tree_bits + payload_bits + 7) / 8,
    };
    debug!("{:?}", stats);
    Ok(stats)
}

/// `path` with `suffix` appended to the file name, `data.txt` becomes `data.txt.huff`
pub fn output_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

fn temp_path(output: &Path) -> PathBuf {
    output_path(output, ".tmp")
}

/// Compresses the file at `path` to `path` + `options.suffix`.
///
/// The output is written to a temporary file next to it, which is renamed to the output path
/// only after everything was written. On error the temporary file is removed and an existing
/// output file is left untouched. An empty suffix is rejected, it would replace the source.
pub fn compress_file(path: &Path, options: &CompressOptions) -> Result<CompressStats> {
    let output = output_path(path, &options.suffix);
    if output == path {
        return Err(HuffError::OutputIsSource(output));
    }

    let input = read_source(path)?;
    if !options.force && output.exists() {
        return Err(HuffError::OutputExists(output));
    }

    let temp = temp_path(&output);
    let result = write_file(&input, &temp).and_then(|stats| {
        fs::rename(&temp, &output)?;
        Ok(stats)
    });

    match &result {
        Ok(stats) => info!(
            "{:?} -> {:?}: {} -> {} bytes, ratio {:.3}",
            path,
            output,
            stats.input_len,
            stats.output_len,
            stats.ratio()
        ),
        Err(_) => {
            if let Err(err) = fs::remove_file(&temp) {
                if err.kind() != std::io::ErrorKind::NotFound {
                    warn!("could not remove temporary file {:?}: {}", temp, err);
                }
            }
        }
    }
    result
}

fn write_file(input: &[u8], temp: &Path) -> Result<CompressStats> {
    let mut file = File::create(temp)?;
    let stats = compress_to(input, &mut file)?;
    file.sync_all()?;
    Ok(stats)
}
