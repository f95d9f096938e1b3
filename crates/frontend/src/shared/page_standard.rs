//! Page category constants.
//!
//! Every routed page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a001_user--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator keeps the entity part searchable: copy the id from the
//! DOM inspector and it leads to the matching `domain/` directory.

/// List of records: table with filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Detail or edit form for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Summary cards and report tables.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Account and administration pages (profile, settings, auth).
pub const PAGE_CAT_SYSTEM: &str = "system";
