/*
 * Copyright 2026 Oxide Computer Company
 */

use std::ffi::OsStr;
use std::process::{Command, Stdio};

use anyhow::{bail, Context, Result};
use log::debug;

pub trait OutputExt {
    fn error_if_failed(&self, msg: &str) -> Result<()>;
}

impl OutputExt for std::process::Output {
    fn error_if_failed(&self, msg: &str) -> Result<()> {
        if !self.status.success() {
            bail!(
                "{} failure ({}): {:?}",
                msg,
                self.status,
                String::from_utf8_lossy(&self.stderr).trim()
            );
        } else {
            Ok(())
        }
    }
}

/**
 * Something that can run an external program to completion and hand back
 * whatever it wrote on stdout.  Arguments are passed along as raw OS strings,
 * so they need not be UTF-8.  Tests substitute their own implementation so
 * that no real program needs to be installed.
 */
pub trait Runner {
    fn run(&self, program: &str, args: &[&OsStr]) -> Result<String>;
}

/**
 * Runs programs for real, blocking until they exit.  The child inherits our
 * environment, but never our stdin.
 */
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl Runner for SystemRunner {
    fn run(&self, program: &str, args: &[&OsStr]) -> Result<String> {
        debug!("exec: {program} {args:?}");

        let res = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .with_context(|| format!("could not run {program:?}"))?;

        res.error_if_failed(program)?;

        String::from_utf8(res.stdout)
            .with_context(|| format!("{program:?} produced non-UTF-8 output"))
    }
}
