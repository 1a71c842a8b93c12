use std::collections::HashMap;

use crate::model::DeclKind;

/// Maps declaration kinds to `d`-domain directive names.
///
/// Only registered kinds produce output; a member whose kind has no entry
/// is omitted entirely, with no diagnostic. [`DeclKind::Import`] is never
/// registered as a directive since public imports render as a listing
/// inside their parent instead.
#[derive(Debug, Clone)]
pub struct Registry {
    directives: HashMap<DeclKind, &'static str>,
}

impl Registry {
    /// Registry with the full default directive set.
    pub fn with_defaults() -> Self {
        let mut registry = Self {
            directives: HashMap::new(),
        };
        registry.register(DeclKind::Module, "module");
        registry.register(DeclKind::Function, "function");
        registry.register(DeclKind::Class, "class");
        registry.register(DeclKind::Struct, "struct");
        registry.register(DeclKind::Variable, "variable");
        registry.register(DeclKind::Enum, "enum");
        registry.register(DeclKind::Alias, "alias");
        registry.register(DeclKind::Template, "template");
        registry
    }

    /// Registry with no kinds registered.
    pub fn empty() -> Self {
        Self {
            directives: HashMap::new(),
        }
    }

    /// Registers (or replaces) the directive name for a kind.
    pub fn register(&mut self, kind: DeclKind, directive: &'static str) {
        self.directives.insert(kind, directive);
    }

    /// Directive name for `kind`, or `None` when the kind is unregistered.
    pub fn directive(&self, kind: DeclKind) -> Option<&'static str> {
        self.directives.get(&kind).copied()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
