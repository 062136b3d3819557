/*
 * Copyright 2026 Oxide Computer Company
 */

use std::io::Write;

use log::{debug, LevelFilter};

use autoscaler_flavor::flavor::{current_flavor, OPENSTACK};
use autoscaler_utils::command::SystemRunner;

fn init_logging() {
    /*
     * Logs go to stderr only, as stdout is the answer.  Nothing is logged
     * unless CHECK_FLAVOR_LOG asks for it.
     */
    let _ = env_logger::Builder::new()
        .filter_level(LevelFilter::Off)
        .parse_env(env_logger::Env::new().filter("CHECK_FLAVOR_LOG"))
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .try_init();
}

fn main() {
    init_logging();

    /*
     * The one argument is the server name, taken as raw bytes and passed on
     * untouched, even if it looks like an option or is not UTF-8.
     */
    let flavor = match std::env::args_os().nth(1) {
        Some(name) => current_flavor(&SystemRunner, OPENSTACK, &name),
        None => {
            debug!("no server name given");
            String::new()
        }
    };

    /*
     * The autoscaler reads exactly what we print, with no trailing newline,
     * and always sees a zero exit status.
     */
    let mut out = std::io::stdout().lock();
    let _ = out.write_all(flavor.as_bytes()).and_then(|_| out.flush());
}
