//! Shared test harness modules for the Parkside CLI.

use super::*;

mod helpers;
