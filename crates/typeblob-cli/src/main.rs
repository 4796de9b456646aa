mod cli;
mod commands;
mod logging;


use cli::{MergeParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();
    let params = MergeParams::from_matches(&matches);
    logging::init(params.verbose);
    commands::merge::run(params.into());
}
