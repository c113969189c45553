//! Alias resolution.
//!
//! This module provides the `PathResolver` type, which maps alias names to
//! path templates and resolves names or templates into canonical paths.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::error::{Error, Result};
use crate::path::defaults::DEFAULT_PATHS;
use crate::path::{normalize, template};

/// Reserved alias name holding the resolver root.
pub const ROOT_ALIAS: &str = "root";

/// Resolves path aliases against a fixed root.
///
/// A resolver owns a table of alias names to templates. Templates may embed
/// `%name%` references to other aliases; resolving a name or template
/// substitutes those references recursively, anchors relative results to
/// the root and canonicalizes the outcome.
///
/// Resolution only needs `&self`: each call tracks the aliases it is
/// currently expanding on its own, so a shared resolver can serve
/// concurrent callers.
///
/// # Examples
///
/// ```
/// use aliaspath::PathResolver;
///
/// let resolver = PathResolver::with_defaults("/srv/app").unwrap();
///
/// assert_eq!(resolver.resolve("files").unwrap(), "/srv/app/public/files");
/// assert_eq!(resolver.resolve("%var%/log").unwrap(), "/srv/app/var/log");
/// assert_eq!(resolver.raw("web"), Some("%site%/public"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResolver {
    /// Alias name to raw template, `root` included.
    aliases: BTreeMap<String, String>,
    /// Canonical absolute root that relative results are anchored to.
    root: String,
}

impl PathResolver {
    /// Create a resolver.
    ///
    /// An empty `paths` table is replaced by [`PathResolver::default_paths`];
    /// a non-empty one is used as is, without merging the defaults in. The
    /// canonical `root` is stored under the reserved `root` alias,
    /// overwriting any entry of that name in `paths`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A template references its own alias ([`Error::SelfReference`])
    /// - `root` is relative after canonicalization ([`Error::InvalidRoot`])
    ///
    /// # Examples
    ///
    /// ```
    /// use aliaspath::PathResolver;
    /// use std::collections::BTreeMap;
    ///
    /// let mut paths = BTreeMap::new();
    /// paths.insert("uploads".to_string(), "data/uploads".to_string());
    ///
    /// let resolver = PathResolver::new("/srv/app/./", paths).unwrap();
    /// assert_eq!(resolver.root(), "/srv/app");
    /// assert_eq!(resolver.raw("web"), None);
    ///
    /// assert!(PathResolver::new("relative", BTreeMap::new()).is_err());
    /// ```
    pub fn new(root: &str, paths: BTreeMap<String, String>) -> Result<Self> {
        let paths = if paths.is_empty() {
            Self::default_paths()
        } else {
            paths
        };

        let mut resolver = Self {
            aliases: BTreeMap::new(),
            root: String::new(),
        };
        for (name, raw) in &paths {
            resolver.define(name, raw)?;
        }

        let canonical = normalize::canonicalize(root);
        if normalize::is_relative(&canonical) {
            return Err(Error::InvalidRoot {
                root: root.to_string(),
                reason: format!("root must be an absolute path, got '{canonical}'"),
            });
        }

        log::debug!(
            "created path resolver at {canonical} with {} alias(es)",
            resolver.aliases.len()
        );
        resolver
            .aliases
            .insert(ROOT_ALIAS.to_string(), canonical.clone());
        resolver.root = canonical;

        Ok(resolver)
    }

    /// Create a resolver seeded with the built-in alias table.
    ///
    /// # Errors
    ///
    /// Returns an error if `root` is not absolute.
    pub fn with_defaults(root: &str) -> Result<Self> {
        Self::new(root, BTreeMap::new())
    }

    /// The built-in alias table.
    ///
    /// # Examples
    ///
    /// ```
    /// use aliaspath::PathResolver;
    ///
    /// let defaults = PathResolver::default_paths();
    /// assert_eq!(defaults["files"], "%web%/files");
    /// assert!(!defaults.contains_key("root"));
    /// ```
    #[must_use]
    pub fn default_paths() -> BTreeMap<String, String> {
        DEFAULT_PATHS
            .iter()
            .map(|(name, raw)| ((*name).to_string(), (*raw).to_string()))
            .collect()
    }

    /// Define or replace an alias.
    ///
    /// Only direct self-reference is rejected here. Longer cycles such as
    /// `a -> b -> a` can be defined and fail when resolved.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SelfReference`] if `template` contains `%name%`.
    ///
    /// # Examples
    ///
    /// ```
    /// use aliaspath::PathResolver;
    ///
    /// let mut resolver = PathResolver::with_defaults("/srv/app").unwrap();
    /// resolver.define("logs", "%var%/log").unwrap();
    /// assert_eq!(resolver.resolve("logs").unwrap(), "/srv/app/var/log");
    ///
    /// assert!(resolver.define("loop", "%loop%/x").is_err());
    /// ```
    pub fn define(&mut self, name: &str, template: &str) -> Result<()> {
        if template::contains_token(template, name) {
            return Err(Error::SelfReference {
                name: name.to_string(),
                template: template.to_string(),
            });
        }

        log::trace!("defining alias {name} = {template}");
        self.aliases.insert(name.to_string(), template.to_string());
        Ok(())
    }

    /// Resolve an alias name or template to an absolute canonical path.
    ///
    /// Equivalent to `resolve_with(path, true, "")`.
    ///
    /// # Errors
    ///
    /// Returns an error if a referenced alias is undefined or an alias
    /// chain is cyclic.
    pub fn resolve(&self, path: &str) -> Result<String> {
        self.resolve_with(path, true, "")
    }

    /// Resolve an alias name or template.
    ///
    /// If `path` is a defined alias it is replaced by its template. Each
    /// `%alias%` token is then resolved recursively and substituted. A token
    /// that starts the template resolves to an absolute path; any other
    /// token resolves relative, so `static/%web%` stays relative to its own
    /// context. When `absolute` is set a relative result is joined onto the
    /// root. A non-empty `additional` is appended as a final segment before
    /// canonicalization.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A token names an undefined alias ([`Error::UndefinedAlias`])
    /// - An alias is reached again while it is being resolved
    ///   ([`Error::RecursionDetected`])
    ///
    /// # Examples
    ///
    /// ```
    /// use aliaspath::PathResolver;
    ///
    /// let resolver = PathResolver::with_defaults("/srv/app").unwrap();
    ///
    /// assert_eq!(
    ///     resolver.resolve_with("web", true, "css/app.css").unwrap(),
    ///     "/srv/app/public/css/app.css"
    /// );
    /// assert_eq!(
    ///     resolver.resolve_with("relative/./path", false, "").unwrap(),
    ///     "relative/path"
    /// );
    /// ```
    pub fn resolve_with(&self, path: &str, absolute: bool, additional: &str) -> Result<String> {
        let mut resolving = HashSet::new();
        self.resolve_guarded(path, absolute, additional, &mut resolving)
    }

    /// Resolve every defined alias, `root` included.
    ///
    /// Each alias is resolved as an independent absolute call.
    ///
    /// # Errors
    ///
    /// Returns the first resolution error encountered.
    pub fn resolve_all(&self) -> Result<BTreeMap<String, String>> {
        self.aliases
            .keys()
            .map(|name| Ok((name.clone(), self.resolve(name)?)))
            .collect()
    }

    /// The raw template of an alias, or `None` if it is not defined.
    #[must_use]
    pub fn raw(&self, name: &str) -> Option<&str> {
        self.aliases.get(name).map(String::as_str)
    }

    /// Every raw template except the reserved `root` entry.
    #[must_use]
    pub fn raw_all(&self) -> BTreeMap<String, String> {
        self.aliases
            .iter()
            .filter(|(name, _)| name.as_str() != ROOT_ALIAS)
            .map(|(name, raw)| (name.clone(), raw.clone()))
            .collect()
    }

    /// Alias names except `root`, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.raw_all().into_keys().collect()
    }

    /// Whether an alias is defined.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.aliases.contains_key(name)
    }

    /// The canonical root relative results are anchored to.
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Aliases referenced directly by an alias's template.
    ///
    /// Returns `None` if `name` is not defined.
    #[must_use]
    pub fn references(&self, name: &str) -> Option<BTreeSet<String>> {
        if name == ROOT_ALIAS && self.is_pristine_root() {
            return Some(BTreeSet::new());
        }
        self.raw(name).map(template::references)
    }

    /// Whether the `root` entry still holds the construction-time root.
    fn is_pristine_root(&self) -> bool {
        self.aliases.get(ROOT_ALIAS) == Some(&self.root)
    }

    fn resolve_guarded(
        &self,
        path: &str,
        absolute: bool,
        additional: &str,
        resolving: &mut HashSet<String>,
    ) -> Result<String> {
        // The root is a path, not a template
        let substituted = if path == ROOT_ALIAS && self.is_pristine_root() {
            self.root.clone()
        } else {
            let raw = self.aliases.get(path).map_or(path, String::as_str);
            self.substitute(raw, resolving)?
        };

        let mut resolved = if absolute {
            normalize::make_absolute(&substituted, &self.root)
        } else {
            substituted
        };

        if !additional.is_empty() {
            resolved = normalize::join(&resolved, additional);
        }

        Ok(normalize::canonicalize(&resolved))
    }

    /// Replace every `%alias%` token in `raw` with its resolution.
    fn substitute(&self, raw: &str, resolving: &mut HashSet<String>) -> Result<String> {
        let mut output = String::with_capacity(raw.len());
        let mut cursor = 0;

        for token in template::tokens(raw) {
            if !self.aliases.contains_key(token.alias) {
                return Err(Error::UndefinedAlias {
                    alias: token.alias.to_string(),
                    path: raw.to_string(),
                });
            }
            if resolving.contains(token.alias) {
                return Err(Error::RecursionDetected {
                    alias: token.alias.to_string(),
                    path: raw.to_string(),
                });
            }

            resolving.insert(token.alias.to_string());
            let result = self.resolve_guarded(token.alias, token.is_leading, "", resolving);
            resolving.remove(token.alias);
            let replacement = result?;

            log::trace!("%{}% -> {replacement}", token.alias);
            output.push_str(&raw[cursor..token.range.start]);
            output.push_str(&replacement);
            cursor = token.range.end;
        }

        output.push_str(&raw[cursor..]);
        Ok(output)
    }
}
