mod application;
mod logging;
mod presentation;

use yearpack_core::error::Result;

fn main() -> Result<()> {
    application::run()
}
