//! Process exit codes

/// Command completed
pub const EXIT_SUCCESS: i32 = 0;

/// Command failed
pub const EXIT_ERROR: i32 = 1;

/// Command could not do what was asked, e.g. an unknown folder or prompt
pub const EXIT_WARNING: i32 = 2;

/// No vault directory is configured; run `pvault vault choose` or `pvault vault set`
pub const EXIT_SETUP_REQUIRED: i32 = 3;
