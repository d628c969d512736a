extern crate structopt;
#[macro_use]
extern crate structopt_derive;

#[macro_use]
extern crate log;

extern crate repr;

use std::io;
use std::process;

use structopt::StructOpt;

use repr::reverse;

#[derive(StructOpt, Debug)]
#[structopt(name = "revarray", about = "Reverses the array 0..SIZE in place.",
            setting_raw = "::structopt::clap::AppSettings::AllowNegativeNumbers")]
struct Conf {
    #[structopt(help = "Number of elements in the array")] size: String,
}

const USAGE: &str = "usage: revarray <SIZE>";

fn main() {
    let conf = Conf::from_args();

    if let Err(e) = repr::logging::init() {
        eprintln!("{}", e);
    }

    let n = match repr::parse_size(&conf.size) {
        Ok(n) => n,
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    };
    info!("Start - {:?}", conf);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = reverse::report(n, &mut out) {
        error!("{}", e);
        process::exit(1);
    }
}
