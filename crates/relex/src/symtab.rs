//! Symbol table and scope tracking over raw token streams.
//!
//! The tracker walks the scanner's token strings recognizing declaration
//! and assignment shapes; it never looks inside the automaton core.

use std::fmt;

/// A recorded declaration.
#[derive(Debug, Clone)]
pub struct Symbol {
    pub name: String,
    pub ty: String,
    pub value: String,
    pub scope: String,
}

/// Flat list of symbols, insert-or-update by name.
#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol; an existing symbol with the same name only has its
    /// value refreshed.
    pub fn add(&mut self, name: &str, ty: &str, value: &str, scope: &str) {
        for symbol in &mut self.symbols {
            if symbol.name == name {
                symbol.value = value.to_owned();
                return;
            }
        }
        self.symbols.push(Symbol {
            name: name.to_owned(),
            ty: ty.to_owned(),
            value: value.to_owned(),
            scope: scope.to_owned(),
        });
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.symbols
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.value.as_str())
    }

    pub fn update_value(&mut self, name: &str, value: &str) {
        if let Some(symbol) = self.symbols.iter_mut().find(|s| s.name == name) {
            symbol.value = value.to_owned();
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols.iter().any(|s| s.name == name)
    }

    pub fn ty(&self, name: &str) -> Option<&str> {
        self.symbols
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.ty.as_str())
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }
}

impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:-<52}", "")?;
        writeln!(f, "{:<15} {:<12} {:<15} {:<10}", "Name", "Type", "Value", "Scope")?;
        writeln!(f, "{:-<52}", "")?;
        for s in &self.symbols {
            writeln!(f, "{:<15} {:<12} {:<15} {:<10}", s.name, s.ty, s.value, s.scope)?;
        }
        Ok(())
    }
}

fn is_data_type(token: &str) -> bool {
    matches!(token, "int" | "float" | "char" | "bool")
}

fn is_identifier(token: &str) -> bool {
    let mut chars = token.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn is_operator(token: &str) -> bool {
    token.len() == 1 && "+-*/%^=".contains(token)
}

/// Walks a token stream recording declarations into a [`SymbolTable`].
#[derive(Debug, Default)]
pub struct ScopeTracker {
    table: SymbolTable,
}

impl ScopeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(&self) -> &SymbolTable {
        &self.table
    }

    /// Consume a token stream, recording declarations, assignments,
    /// function shapes, constants, and operators as they appear.
    pub fn process_tokens(&mut self, tokens: &[String]) {
        let mut current_type: Option<String> = None;
        let mut scope = "Global";

        let mut i = 0;
        while i < tokens.len() {
            let token = tokens[i].trim();
            if token.is_empty() {
                i += 1;
                continue;
            }

            if token.starts_with("//") {
                break;
            }
            if token.starts_with("/*") {
                while i < tokens.len() && !tokens[i].ends_with("*/") {
                    i += 1;
                }
                i += 1;
                continue;
            }

            // Identifier followed by '(' introduces a function and a
            // local scope.
            if is_identifier(token)
                && !is_data_type(token)
                && tokens.get(i + 1).is_some_and(|next| next == "(")
            {
                self.table.add(token, "Function", "N/A", scope);
                scope = "Local";
                i += 1;
                continue;
            }

            if is_data_type(token) {
                current_type = Some(token.to_owned());
                i += 1;
                continue;
            }

            if let Some(ty) = current_type.take() {
                if is_identifier(token) {
                    let mut value = "undefined".to_owned();
                    if tokens.get(i + 1).is_some_and(|next| next == "=") {
                        if let Some(assigned) = tokens.get(i + 2) {
                            value = assigned.clone();
                            i += 2;
                        }
                    }
                    self.table.add(token, &ty, &value, scope);
                    i += 1;
                    continue;
                }
                current_type = Some(ty);
            }

            if token == "final" {
                if let Some(name) = tokens.get(i + 2) {
                    self.table.add(name, "Constant", "N/A", scope);
                    i += 3;
                    continue;
                }
            }

            if is_identifier(token) && tokens.get(i + 1).is_some_and(|next| next == "=") {
                let value = tokens
                    .get(i + 2)
                    .cloned()
                    .unwrap_or_else(|| "undefined".to_owned());
                if self.table.contains(token) {
                    self.table.update_value(token, &value);
                } else {
                    self.table.add(token, "Unknown", &value, scope);
                }
                i += 3;
                continue;
            }

            if is_operator(token) {
                self.table.add(token, "Operator", "N/A", scope);
            }

            i += 1;
        }
    }
}
