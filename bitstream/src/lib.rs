/*!

Bitstream handles the writing and reading of bits. Bits are written and read in forward order,
most significant bit first within each byte.

Some bit hacks are appplied here, it can be helpful to understand these
Bit Operations:

number of bits  >> 3 == number of bytes
number of bits  & 7 == bits used in the last byte

*/

use common::HuffError;
use std::io;
use std::io::Write;

pub type BitContainer = u64;
pub const BIT_CONTAINER_BYTES: usize = core::mem::size_of::<BitContainer>();
pub const NUM_BITS_IN_BIT_CONTAINER: u32 = BIT_CONTAINER_BYTES as u32 * 8;

/// maximum number of bits accepted by a single `write_bits` or `read_bits` call
pub const MAX_BITS_PER_CALL: u32 = 32;

/// bytes collected before they are handed to the underlying writer
const BUFFER_SIZE: usize = 8 * 1024;

#[inline]
fn low_bits_mask(nb_bits: u32) -> BitContainer {
    debug_assert!(nb_bits < NUM_BITS_IN_BIT_CONTAINER);
    (1 << nb_bits) - 1
}

/// Writes a bitstream to `W`.
///
/// Full bytes are collected in an internal buffer, the trailing partial byte is padded with zero
/// bits by [`BitWriter::finish`]. Dropping the writer without calling `finish` discards the
/// buffered bits.
#[derive(Debug)]
pub struct BitWriter<W: Write> {
    writer: W,
    /// pending bits, aligned to the least significant bit
    bit_container: BitContainer,
    /// number of pending bits in bit_container, always < 8 between calls
    bit_pos: u32,
    buffer: Vec<u8>,
    bits_written: u64,
}

impl<W: Write> BitWriter<W> {
    pub fn new(writer: W) -> Self {
        BitWriter {
            writer,
            bit_container: 0,
            bit_pos: 0,
            buffer: Vec::with_capacity(BUFFER_SIZE),
            bits_written: 0,
        }
    }

    /// Adds the `nb_bits` low bits of `value`. Higher bits of `value` are ignored.
    ///
    /// `nb_bits` can be up to 32, 0 is a no-op.
    #[inline]
    pub fn write_bits(&mut self, value: u32, nb_bits: u32) -> io::Result<()> {
        debug_assert!(nb_bits <= MAX_BITS_PER_CALL);

        self.bit_container <<= nb_bits;
        self.bit_container |= value as BitContainer & low_bits_mask(nb_bits);
        self.bit_pos += nb_bits;
        self.bits_written += nb_bits as u64;

        while self.bit_pos >= 8 {
            self.bit_pos -= 8;
            self.buffer.push((self.bit_container >> self.bit_pos) as u8);
        }
        self.bit_container &= low_bits_mask(self.bit_pos);

        if self.buffer.len() >= BUFFER_SIZE {
            self.flush_buffer()?;
        }
        Ok(())
    }

    /// Adds a code of up to 128 bits, `bits` is aligned to the least significant bit and written
    /// starting with its highest bit.
    #[inline]
    pub fn write_code(&mut self, bits: u128, number_bits: u8) -> io::Result<()> {
        let mut remaining = number_bits as u32;
        while remaining > 0 {
            let chunk = remaining.min(MAX_BITS_PER_CALL);
            remaining -= chunk;
            self.write_bits((bits >> remaining) as u32, chunk)?;
        }
        Ok(())
    }

    /// number of bits added so far, excluding padding
    pub fn bits_written(&self) -> u64 {
        self.bits_written
    }

    fn flush_buffer(&mut self) -> io::Result<()> {
        self.writer.write_all(&self.buffer)?;
        self.buffer.clear();
        Ok(())
    }

    /// Pads the last byte with zeros, writes everything out and returns the inner writer.
    pub fn finish(mut self) -> io::Result<W> {
        if self.bit_pos > 0 {
            let padding = 8 - self.bit_pos;
            self.buffer.push((self.bit_container << padding) as u8);
            self.bit_container = 0;
            self.bit_pos = 0;
        }
        self.flush_buffer()?;
        self.writer.flush()?;
        Ok(self.writer)
    }
}

/// Reads a bitstream written by [`BitWriter`].
#[derive(Debug)]
pub struct BitReader<'a> {
    input: &'a [u8],
    /// absolute position of the next bit
    bit_pos: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        BitReader { input, bit_pos: 0 }
    }

    pub fn bits_remaining(&self) -> usize {
        self.input.len() * 8 - self.bit_pos
    }

    #[inline]
    pub fn read_bit(&mut self) -> Result<bool, HuffError> {
        let byte = *self
            .input
            .get(self.bit_pos >> 3)
            .ok_or(HuffError::UnexpectedEndOfStream)?;
        let bit = (byte >> (7 - (self.bit_pos & 7))) & 1;
        self.bit_pos += 1;
        Ok(bit == 1)
    }

    /// reads `nb_bits` (up to 32), the first bit read ends up as the highest bit of the result
    #[inline]
    pub fn read_bits(&mut self, nb_bits: u32) -> Result<u32, HuffError> {
        debug_assert!(nb_bits <= MAX_BITS_PER_CALL);
        if nb_bits as usize > self.bits_remaining() {
            return Err(HuffError::UnexpectedEndOfStream);
        }
        let mut value: u32 = 0;
        for _ in 0..nb_bits {
            value = (value << 1) | self.read_bit()? as u32;
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(fun: impl FnOnce(&mut BitWriter<Vec<u8>>)) -> Vec<u8> {
        let mut writer = BitWriter::new(vec![]);
        fun(&mut writer);
        writer.finish().unwrap()
    }

    #[test]
    fn test_write_simple() {
        let out = written(|w| {
            w.write_bits(0b101, 3).unwrap();
        });
        assert_eq!(out, vec![0b1010_0000]);
    }

    #[test]
    fn test_write_byte_aligned() {
        let out = written(|w| {
            w.write_bits(0xAB, 8).unwrap();
            w.write_bits(0xCD, 8).unwrap();
        });
        assert_eq!(out, vec![0xAB, 0xCD]);
    }

    #[test]
    fn test_write_across_bytes() {
        let out = written(|w| {
            w.write_bits(1, 1).unwrap();
            w.write_bits(0b0110_0001, 8).unwrap();
            w.write_bits(0, 1).unwrap();
            w.write_bits(0b11, 2).unwrap();
        });
        // 1 01100001 0 11 + 0000 padding
        assert_eq!(out, vec![0b1011_0000, 0b1011_0000]);
    }

    #[test]
    fn test_high_bits_ignored() {
        let out = written(|w| {
            w.write_bits(0xFFFF_FFF0, 4).unwrap();
            w.write_bits(0xFFFF_FFFF, 4).unwrap();
        });
        assert_eq!(out, vec![0b0000_1111]);
    }

    #[test]
    fn test_write_32_bits() {
        let out = written(|w| {
            w.write_bits(1, 1).unwrap();
            w.write_bits(0xDEAD_BEEF, 32).unwrap();
        });
        assert_eq!(out, vec![0xEF, 0x56, 0xDF, 0x77, 0x80]);
    }

    #[test]
    fn test_write_code_long() {
        let code: u128 = (1 << 69) | 0b1011;
        let out = written(|w| {
            w.write_code(code, 70).unwrap();
        });
        assert_eq!(out.len(), 9);
        assert_eq!(out[0], 0b1000_0000);
        assert!(out[1..8].iter().all(|b| *b == 0));
        // 70 = 8 * 8 + 6, the last byte holds 6 code bits and 2 bits padding
        assert_eq!(out[8], 0b0010_1100);
    }

    #[test]
    fn test_bits_written() {
        let mut writer = BitWriter::new(vec![]);
        writer.write_bits(0, 3).unwrap();
        writer.write_code(0b1, 1).unwrap();
        writer.write_bits(7, 0).unwrap();
        assert_eq!(writer.bits_written(), 4);
        assert_eq!(writer.finish().unwrap().len(), 1);
    }

    #[test]
    fn test_empty_finish() {
        let out = written(|_| {});
        assert!(out.is_empty());
    }

    #[test]
    fn test_large_output_flushes_buffer() {
        let out = written(|w| {
            for i in 0..(BUFFER_SIZE * 3) {
                w.write_bits(i as u32, 8).unwrap();
            }
        });
        assert_eq!(out.len(), BUFFER_SIZE * 3);
        assert_eq!(out[BUFFER_SIZE + 1], 1);
    }

    #[test]
    fn test_reader() {
        let out = written(|w| {
            w.write_bits(1, 1).unwrap();
            w.write_bits(b'x' as u32, 8).unwrap();
            w.write_bits(0b10, 2).unwrap();
        });
        let mut reader = BitReader::new(&out);
        assert_eq!(reader.bits_remaining(), 16);
        assert!(reader.read_bit().unwrap());
        assert_eq!(reader.read_bits(8).unwrap(), b'x' as u32);
        assert_eq!(reader.read_bits(2).unwrap(), 0b10);
        // padding
        assert_eq!(reader.read_bits(5).unwrap(), 0);
        assert!(matches!(
            reader.read_bit(),
            Err(HuffError::UnexpectedEndOfStream)
        ));
    }

    #[test]
    fn test_reader_too_many_bits() {
        let mut reader = BitReader::new(&[0xFF]);
        assert!(reader.read_bits(9).is_err());
        // nothing consumed by the failed read
        assert_eq!(reader.read_bits(8).unwrap(), 0xFF);
    }
}
