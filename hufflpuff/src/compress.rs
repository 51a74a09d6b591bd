use crate::CodeTable;
use bitstream::BitWriter;
use bitstream::MAX_BITS_PER_CALL;
use std::io;
use std::io::Write;

/// Writes the code of every input byte, in input order.
///
/// Every byte of `input` needs a code in `table`, which is the case when the table was built
/// from the counts of `input`.
pub fn compress_symbols<W: Write>(
    table: &CodeTable,
    input: &[u8],
    writer: &mut BitWriter<W>,
) -> io::Result<()> {
    for symbol in input {
        huf_encode_symbol(*symbol, writer, table)?;
    }
    Ok(())
}

#[inline]
fn huf_encode_symbol<W: Write>(
    symbol: u8,
    writer: &mut BitWriter<W>,
    table: &CodeTable,
) -> io::Result<()> {
    let code = table[symbol as usize];
    debug_assert!(code.number_bits != 0, "no code for symbol {}", symbol);
    if code.number_bits as u32 <= MAX_BITS_PER_CALL {
        writer.write_bits(code.bits as u32, code.number_bits as u32)
    } else {
        writer.write_code(code.bits, code.number_bits)
    }
}
