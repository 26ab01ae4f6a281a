//! Alias resolution.
//!
//! A value may point at another variable, which may point at another, and
//! so on. The resolver follows that chain within one mode, bounded by
//! [`MAX_ALIAS_DEPTH`] hops, so cycles end as "no value".

use tracing::debug;

use crate::format::{FormatContext, format_value};
use crate::graph::{RawValue, VariableRecord};
use crate::names::normalize;

/// Hops beyond this many resolve to no value.
pub const MAX_ALIAS_DEPTH: usize = 10;

/// Read access to variables by id.
pub trait VariableLookup {
    fn lookup(&self, id: &str) -> Option<&VariableRecord>;
}

/// Turns raw values into CSS text, following aliases as needed.
pub struct Resolver<'a, L: VariableLookup + ?Sized> {
    lookup: &'a L,
    preserve_alias: bool,
}

impl<'a, L: VariableLookup + ?Sized> Resolver<'a, L> {
    /// A resolver that flattens alias chains down to a literal.
    pub fn flattening(lookup: &'a L) -> Self {
        Self { lookup, preserve_alias: false }
    }

    /// A resolver that renders an alias as `var(--target)` instead of
    /// following it.
    pub fn preserving_aliases(lookup: &'a L) -> Self {
        Self { lookup, preserve_alias: true }
    }

    /// Resolve `raw` for `mode_id`. `ctx` names the variable owning `raw`.
    pub fn resolve(
        &self,
        raw: Option<&RawValue>,
        mode_id: &str,
        ctx: FormatContext<'_>,
    ) -> Option<String> {
        self.resolve_at(raw, mode_id, ctx, 0)
    }

    fn resolve_at(
        &self,
        raw: Option<&RawValue>,
        mode_id: &str,
        ctx: FormatContext<'_>,
        depth: usize,
    ) -> Option<String> {
        if depth > MAX_ALIAS_DEPTH {
            debug!(
                "Alias chain through '{}' exceeds {} hops, dropping",
                ctx.variable_name, MAX_ALIAS_DEPTH
            );
            return None;
        }

        let raw = raw?;
        let Some(alias) = raw.as_alias() else {
            return format_value(raw, ctx);
        };

        let Some(target) = self.lookup.lookup(&alias.id) else {
            debug!("Alias target {} of '{}' not found", alias.id, ctx.variable_name);
            return None;
        };

        if self.preserve_alias {
            return Some(format!("var(--{})", normalize(&target.name)));
        }

        // Formatting context moves to the target: the innermost variable
        // decides how a number is rendered.
        self.resolve_at(
            target.value_for_mode(mode_id),
            mode_id,
            FormatContext::new(&target.collection_name, &target.name),
            depth + 1,
        )
    }
}
