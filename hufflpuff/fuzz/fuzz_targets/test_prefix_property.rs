#![no_main]

use common::count_simple;
use hufflpuff::build_tree;
use hufflpuff::tree::build_tree::test_prefix_property;
use hufflpuff::tree_to_table;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let counts = count_simple(&data);
    match build_tree(&counts).unwrap() {
        Some(tree) => test_prefix_property(&tree_to_table(&tree).unwrap()),
        None => assert!(data.is_empty()),
    }
});
