//! Alias resolution and path canonicalization.
//!
//! # Key Concepts
//!
//! ## Aliases and templates
//!
//! An alias is a name bound to a template. A template is a path fragment
//! that may embed `%name%` references to other aliases:
//!
//! ```text
//! site  = .
//! web   = %site%/public
//! files = %web%/files
//! ```
//!
//! ## Resolution
//!
//! [`PathResolver::resolve`] substitutes references recursively, anchors
//! relative results to the resolver root and canonicalizes the outcome. A
//! reference that starts a template resolves to an absolute path; references
//! anywhere else resolve relative to their surroundings. Cyclic alias chains
//! are detected and reported instead of recursing forever.
//!
//! ## Canonicalization
//!
//! Canonicalization is purely textual (see [`normalize`]): separators are
//! unified, `.` and `..` are resolved, and nothing is looked up on disk.
//!
//! # Examples
//!
//! ```
//! use aliaspath::path::PathResolver;
//!
//! let mut resolver = PathResolver::with_defaults("/srv/app").unwrap();
//! resolver.define("uploads", "%files%/uploads").unwrap();
//!
//! assert_eq!(resolver.resolve("uploads").unwrap(), "/srv/app/public/files/uploads");
//!
//! resolver.define("a", "%b%/x").unwrap();
//! resolver.define("b", "%a%/y").unwrap();
//! assert!(resolver.resolve("a").is_err());
//! ```

mod defaults;
pub mod normalize;
pub mod resolver;
pub mod template;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use defaults::DEFAULT_PATHS;
pub use resolver::{PathResolver, ROOT_ALIAS};
