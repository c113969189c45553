//! Explain command implementation.
//!
//! Prints the aliases an alias is built from as a tree:
//!
//! ```text
//! files  %web%/files  =>  /srv/app/public/files
//! └── web  %site%/public  =>  /srv/app/public
//!     └── site  .  =>  /srv/app
//! ```

use crate::error::CliError;
use crate::utils::{load_resolver, GlobalOptions};
use aliaspath::PathResolver;
use clap::Args;

/// Show how an alias is assembled from other aliases.
#[derive(Args)]
pub struct ExplainCommand {
    /// Alias to explain
    #[arg(value_name = "NAME")]
    pub name: String,
}

impl ExplainCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let resolver = load_resolver(global)?;

        if !resolver.contains(&self.name) {
            return Err(CliError::SemanticFailure(format!(
                "Alias '{}' is not defined",
                self.name
            )));
        }

        let mut lines = Vec::new();
        let mut stack = Vec::new();
        render(&resolver, &self.name, "", "", &mut stack, &mut lines);
        println!("{}", lines.join("\n"));

        // Report the failure after showing where it comes from
        resolver.resolve(&self.name)?;
        Ok(())
    }
}

/// Appends the tree for `name` to `lines`.
///
/// `stack` holds the aliases on the current branch so a cycle is printed
/// once instead of followed.
fn render(
    resolver: &PathResolver,
    name: &str,
    head: &str,
    indent: &str,
    stack: &mut Vec<String>,
    lines: &mut Vec<String>,
) {
    let Some(raw) = resolver.raw(name) else {
        lines.push(format!("{head}{name}  (undefined)"));
        return;
    };

    if stack.iter().any(|seen| seen == name) {
        lines.push(format!("{head}{name}  (cycle)"));
        return;
    }

    let resolved = resolver
        .resolve(name)
        .unwrap_or_else(|e| format!("error: {e}"));
    lines.push(format!("{head}{name}  {raw}  =>  {resolved}"));

    let children: Vec<String> = resolver
        .references(name)
        .unwrap_or_default()
        .into_iter()
        .collect();

    stack.push(name.to_string());
    for (i, child) in children.iter().enumerate() {
        let last = i + 1 == children.len();
        let branch = if last { "└── " } else { "├── " };
        let next = if last { "    " } else { "│   " };
        render(
            resolver,
            child,
            &format!("{indent}{branch}"),
            &format!("{indent}{next}"),
            stack,
            lines,
        );
    }
    stack.pop();
}
