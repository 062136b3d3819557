/*
 * Copyright 2026 Oxide Computer Company
 */

pub mod command;
