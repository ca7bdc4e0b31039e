use tracing_subscriber::EnvFilter;

use crate::session::Session;

mod display;
mod prompt;
mod session;

fn main() {
    tracing_subscriber::fmt()
        .with_line_number(true)
        .with_file(true)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    Session::new().run();
}
