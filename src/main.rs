use clap::{value_parser, Arg, Command};
use log::{debug, info};
use rand::{Rng, SeedableRng, XorShiftRng};
use randomized_bst::randomized_tree::RandomizedSet;

fn make_options_parser() -> Command {
    Command::new("randomized-bst")
        .about("Builds a randomized binary search tree and prints its shape and height")
        .arg(
            Arg::new("size")
                .short('n')
                .long("size")
                .help("Number of keys to insert")
                .value_parser(value_parser!(u32))
                .default_value("100"),
        )
        .arg(
            Arg::new("order")
                .short('o')
                .long("order")
                .help("Order in which the keys are inserted")
                .value_parser(["sequential", "shuffled"])
                .default_value("sequential"),
        )
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .help("Seed for a reproducible tree")
                .value_parser(value_parser!(u32)),
        )
}

fn main() {
    env_logger::init();

    let matches = make_options_parser().get_matches();
    let size = matches.get_one::<u32>("size").copied().unwrap_or(100);
    let shuffled = matches
        .get_one::<String>("order")
        .map_or(false, |order| order == "shuffled");

    let mut rng: XorShiftRng = match matches.get_one::<u32>("seed") {
        // a xorshift generator cannot be seeded with all zeros
        Some(&seed) => SeedableRng::from_seed([seed, seed ^ 0x9e37_79b9, 1, 1]),
        None => rand::weak_rng(),
    };
    debug!("building a tree of {} keys, shuffled: {}", size, shuffled);

    let mut keys = (0..size).collect::<Vec<u32>>();
    if shuffled {
        rng.shuffle(&mut keys);
    }

    let mut set = RandomizedSet::with_rng(rng);
    for key in keys {
        set.insert(key);
    }
    info!("built a tree of {} keys", set.len());

    print!("{}", set.tree_display());
    println!("Height: {}", set.height());
}
