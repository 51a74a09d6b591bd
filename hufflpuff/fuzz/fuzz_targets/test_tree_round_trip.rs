#![no_main]

use bitstream::BitReader;
use bitstream::BitWriter;
use common::count_simple;
use hufflpuff::build_tree;
use hufflpuff::read_tree;
use hufflpuff::tree_to_table;
use hufflpuff::write_tree;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let counts = count_simple(&data);
    let tree = match build_tree(&counts).unwrap() {
        Some(tree) => tree,
        None => return,
    };
    let mut writer = BitWriter::new(vec![]);
    write_tree(&tree, &mut writer).unwrap();
    let out = writer.finish().unwrap();

    let mut reader = BitReader::new(&out);
    let read = read_tree(&mut reader, tree.get_num_symbol_nodes())
        .unwrap()
        .unwrap();
    assert_eq!(tree_to_table(&tree).unwrap()[..], tree_to_table(&read).unwrap()[..]);
});
