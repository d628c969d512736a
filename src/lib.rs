#[macro_use]
extern crate log;

extern crate failure;
#[macro_use]
extern crate failure_derive;

extern crate chrono;
extern crate env_logger;

mod err;
pub use self::err::*;

pub mod inspect;
pub mod logging;
pub mod reverse;
