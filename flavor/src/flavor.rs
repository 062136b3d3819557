/*
 * Copyright 2026 Oxide Computer Company
 */

use std::ffi::OsStr;

use anyhow::{Context, Result};
use log::debug;

use autoscaler_utils::command::Runner;

use crate::server::ServerShow;

/**
 * The inventory tool, found on PATH.
 */
pub const OPENSTACK: &str = "openstack";

/**
 * Ask the inventory tool to describe the named server and pull the flavor
 * name out of the result.  A description without a usable flavor is not an
 * error; it produces an empty string.  The name is handed over exactly as
 * given, whatever it looks like.
 */
pub fn lookup<R: Runner + ?Sized>(
    runner: &R,
    cli: &str,
    name: &OsStr,
) -> Result<String> {
    let args = [
        OsStr::new("server"),
        OsStr::new("show"),
        name,
        OsStr::new("-f"),
        OsStr::new("json"),
    ];
    let out = runner.run(cli, &args)?;

    let show = ServerShow::parse(&out)
        .with_context(|| format!("describing server {name:?}"))?;

    Ok(show.flavor.identifier().to_string())
}

/**
 * As for lookup(), but any failure at all just means we do not know the
 * flavor, and we say so with an empty string.  The caller is expected to
 * treat that as "unknown" and carry on.
 */
pub fn current_flavor<R: Runner + ?Sized>(
    runner: &R,
    cli: &str,
    name: &OsStr,
) -> String {
    match lookup(runner, cli, name) {
        Ok(flavor) => {
            debug!("server {name:?} has flavor {flavor:?}");
            flavor
        }
        Err(e) => {
            debug!("flavor of server {name:?} unknown: {e:#}");
            String::new()
        }
    }
}
