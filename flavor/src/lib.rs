/*
 * Copyright 2026 Oxide Computer Company
 */

pub mod flavor;
pub mod server;
