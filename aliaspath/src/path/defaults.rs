//! Built-in alias table for a conventional project layout.

/// Default alias definitions, as `(name, template)` pairs.
///
/// Everything hangs off `site`; the public web directory and the paths
/// inside it hang off `web`.
pub const DEFAULT_PATHS: &[(&str, &str)] = &[
    ("site", "."),
    ("var", "%site%/var"),
    ("cache", "%var%/cache"),
    ("config", "%site%/config"),
    ("database", "%var%/database"),
    ("extensions", "%site%/extensions"),
    ("extensions_config", "%config%/extensions"),
    ("web", "%site%/public"),
    ("files", "%web%/files"),
    ("themes", "%web%/theme"),
    ("bolt_assets", "%web%/bolt-public"),
];
