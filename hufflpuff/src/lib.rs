/*!
hufflpuff builds huffman trees for a single byte alphabet.

The tree is built by repeatedly merging the two nodes with the lowest count, using a fixed tie
break, so the same counts always produce the same tree. The tree can be serialized in postorder,
and turned into a table with the prefix code of every symbol.

```
use hufflpuff::{build_tree, tree_to_table};

let counts = common::count_simple(b"abracadabra");
let tree = build_tree(&counts).unwrap().expect("input has symbols");
let table = tree_to_table(&tree).unwrap();
assert_eq!(table[b'a' as usize].number_bits(), 1);
```
*/

pub mod compress;
pub mod queue;
pub mod tree;
pub use crate::compress::compress_symbols;
pub use crate::queue::PriorityQueue;
use crate::tree::BitCode;
pub use crate::tree::{build_tree, read_tree, tree_to_table, write_tree, Tree};

pub const MAX_SYMBOL_VALUE: u32 = u8::MAX as u32;
pub const MAX_NUM_SYMBOLS: usize = MAX_SYMBOL_VALUE as usize + 1;
/// a full binary tree with n leaves has n - 1 parents
pub const MAX_NUM_NODES: usize = 2 * MAX_NUM_SYMBOLS - 1;

/// Size of the code container. Inputs with a total count below 2^64 stay below 93 bits, since a
/// leaf at depth d needs a total count of at least fibonacci(d + 2).
pub const MAX_CODE_LENGTH: usize = 128;

/// prefix code per byte value
pub type CodeTable = [BitCode; MAX_NUM_SYMBOLS];
