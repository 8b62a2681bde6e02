mod matcher;
mod reference;

pub use matcher::{MigrationCodes, NOT_MIGRATED};
pub use reference::{ReferenceError, load_migration_codes};
