use log::{info, warn};
use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode};

use algo::list_comp::compare_lists;
use algo::list_gen::{generate_list, generate_string_list};
use algo::searching::{binary_search, jump_search, linear_search};
use algo::sorting::{bubble_sort, heap_sort, intro_sort, merge_sort, quick_sort};
use algo::structs::RedBlackTree;

fn initialize_logging() {
    CombinedLogger::init(vec![TermLogger::new(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])
    .expect("no other logger is installed");
}

fn main() {
    initialize_logging();

    // run every sort over the same random input and cross-check the results
    let list = generate_list(100, 1, 100_000_000);

    let mut bubbled = list.clone();
    bubble_sort(&mut bubbled);
    let mut merged = list.clone();
    merge_sort(&mut merged);
    let mut quicked = list.clone();
    quick_sort(&mut quicked);
    let mut heaped = list.clone();
    heap_sort(&mut heaped);
    let mut introed = list.clone();
    intro_sort(&mut introed);

    if compare_lists(&[&bubbled, &merged, &quicked, &heaped, &introed]) {
        info!("all five sorts agree on {} random integers", list.len());
    } else {
        warn!("sort outputs diverge");
    }

    let mut words = generate_string_list(100, 'A' as u32, 'Z' as u32 + 1);
    merge_sort(&mut words);
    if let (Some(first), Some(last)) = (words.first(), words.last()) {
        info!("sorted {} one-letter strings, spanning {first} .. {last}", words.len());
    }

    // the searches want sorted input
    let mut sorted = generate_list(100, 1, 1000);
    quick_sort(&mut sorted);

    let target = sorted[50];
    info!("binary search for {target}: {:?}", binary_search(&sorted, &target));
    let target = sorted[75];
    info!("linear search for {target}: {:?}", linear_search(&sorted, &target));
    let target = sorted[60];
    info!("jump search for {target}: {:?}", jump_search(&sorted, &target));

    // feed the red-black tree from several threads at once, then check that
    // a single in-order pass comes out ascending
    let values = generate_list(1000, 1, 1_000_000);
    let tree = RedBlackTree::new(|a: &i64, b: &i64| a < b);
    std::thread::scope(|scope| {
        for chunk in values.chunks(250) {
            let tree = &tree;
            scope.spawn(move || {
                for v in chunk {
                    tree.insert(*v);
                }
            });
        }
    });

    let mut in_order = Vec::with_capacity(tree.len());
    tree.in_order(|v| in_order.push(*v));
    let ascending = in_order.windows(2).all(|w| w[0] <= w[1]);
    if ascending {
        info!("red-black tree took {} concurrent inserts, in-order pass is sorted", tree.len());
    } else {
        warn!("red-black tree in-order pass is out of order");
    }
    info!("tree contains {}: {}", values[0], tree.search(&values[0]));
}
