use common::HuffError;
use common::Result;
use std::io;
use std::io::Read;
use std::io::Write;

pub const MAGIC: [u8; 4] = *b"HUFZ";
pub const FORMAT_VERSION: u8 = 1;
/// magic, version, number of symbols, original length
pub const HEADER_SIZE: usize = 4 + 1 + 2 + 8;

/// Byte aligned start of a compressed file, followed by the bitstream with tree and payload.
///
/// The number of symbols tells a reader when the tree is complete, the original length where the
/// payload ends and the padding starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub num_symbols: u16,
    pub original_len: u64,
}

impl Header {
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let mut bytes = [0_u8; HEADER_SIZE];
        bytes[..4].copy_from_slice(&MAGIC);
        bytes[4] = FORMAT_VERSION;
        bytes[5..7].copy_from_slice(&self.num_symbols.to_le_bytes());
        bytes[7..].copy_from_slice(&self.original_len.to_le_bytes());
        writer.write_all(&bytes)
    }

    pub fn read_from<R: Read>(reader: &mut R) -> Result<Header> {
        let mut bytes = [0_u8; HEADER_SIZE];
        reader.read_exact(&mut bytes)?;
        if bytes[..4] != MAGIC {
            return Err(HuffError::InvalidHeader("magic mismatch"));
        }
        if bytes[4] != FORMAT_VERSION {
            return Err(HuffError::InvalidHeader("unsupported version"));
        }
        let mut num_symbols = [0_u8; 2];
        num_symbols.copy_from_slice(&bytes[5..7]);
        let mut original_len = [0_u8; 8];
        original_len.copy_from_slice(&bytes[7..]);
        let header = Header {
            num_symbols: u16::from_le_bytes(num_symbols),
            original_len: u64::from_le_bytes(original_len),
        };
        if header.num_symbols as usize > hufflpuff::MAX_NUM_SYMBOLS {
            return Err(HuffError::InvalidHeader("more symbols than byte values"));
        }
        if (header.num_symbols == 0) != (header.original_len == 0) {
            return Err(HuffError::InvalidHeader("symbols and length disagree"));
        }
        Ok(header)
    }
}
