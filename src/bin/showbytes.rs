extern crate structopt;
#[macro_use]
extern crate structopt_derive;

#[macro_use]
extern crate log;

extern crate repr;

use structopt::StructOpt;

use repr::inspect;

#[derive(StructOpt, Debug)]
#[structopt(name = "showbytes", about = "Prints the bytes values are stored as.")]
struct Conf {
    #[structopt(short = "i", long = "int", help = "Dump an int, its float and its address")]
    int: Option<i32>,

    #[structopt(short = "s", long = "string", help = "String to dump", default_value = "mnopqr")]
    string: String,
}

fn main() {
    let conf = Conf::from_args();

    if let Err(e) = repr::logging::init() {
        eprintln!("{}", e);
    }
    info!("Start - {:?}", conf);
    debug!("Platform byte order: {:?}", inspect::native_order());

    match conf.int {
        Some(v) => for dump in inspect::sample(v).iter() {
            println!("{}", dump);
        },
        None => println!("{}", inspect::show_string(&conf.string)),
    }
}
