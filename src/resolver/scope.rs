use std::collections::HashMap;

use crate::symbol::SymbolId;

struct ScopeFrame {
    vars: HashMap<String, SymbolId>,
    top: u32,
}

/// An append-only stack of lexical scopes with integer cursors instead of
/// a parent-linked ownership chain: `open` pushes a frame seeded from the
/// enclosing frame's running offset, `close` pops it.
pub(super) struct ScopeStack {
    frames: Vec<ScopeFrame>,
}

impl ScopeStack {
    pub(super) fn new() -> Self {
        Self { frames: Vec::new() }
    }

    pub(super) fn open(&mut self) {
        let top = self.frames.last().map(|f| f.top).unwrap_or(0);
        self.frames.push(ScopeFrame {
            vars: HashMap::new(),
            top,
        });
    }

    pub(super) fn close(&mut self) {
        self.frames.pop();
    }

    pub(super) fn current_top(&self) -> u32 {
        self.frames.last().map(|f| f.top).unwrap_or(0)
    }

    pub(super) fn is_declared_in_current_scope(&self, name: &str) -> bool {
        self.frames.last().is_some_and(|f| f.vars.contains_key(name))
    }

    /// Reserves `size` bytes above the current scope's running offset and
    /// binds `name` to `id` in that scope. Returns the byte offset
    /// (positive magnitude, used by the caller to build `-k(%ebp)`).
    pub(super) fn declare(&mut self, name: &str, id: SymbolId, size: u32) -> u32 {
        let frame = self.frames.last_mut().expect("declare requires an open scope");
        frame.top += size;
        frame.vars.insert(name.to_string(), id);
        frame.top
    }

    /// Binds `name` to `id` in the current scope without consuming any
    /// stack space — used for `static` locals, which resolve to a
    /// globally-allocated symbol rather than a frame slot.
    pub(super) fn bind_without_offset(&mut self, name: &str, id: SymbolId) {
        let frame = self.frames.last_mut().expect("bind requires an open scope");
        frame.vars.insert(name.to_string(), id);
    }

    pub(super) fn find(&self, name: &str) -> Option<SymbolId> {
        self.frames.iter().rev().find_map(|f| f.vars.get(name).copied())
    }
}
