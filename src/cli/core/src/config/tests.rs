/* src/cli/core/src/config/tests.rs */

use super::*;

mod parsing;
