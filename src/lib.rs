/*!
huffzip compresses files with a static huffman code.

The counts of all bytes of the input are used to build a huffman tree (see [`hufflpuff`]). The
output starts with a small [`Header`], followed by a bitstream containing the tree in postorder
and the code of every input byte.

```
let compressed = huffzip::compress(b"abracadabra").unwrap();
assert_eq!(&compressed[..4], b"HUFZ");
```

Output layout, integers in little endian:

| size | field                      |
|------|----------------------------|
| 4    | magic `HUFZ`               |
| 1    | format version             |
| 2    | number of symbols          |
| 8    | original length            |
| ..   | tree, payload, padding     |

*/

pub mod compress;
pub mod config;
pub mod header;

pub use crate::compress::{compress, compress_file, compress_to, output_path, CompressStats};
pub use crate::config::CompressOptions;
pub use crate::header::Header;
pub use common::{HuffError, Result};
