//! SurrealQL statement builder.
//!
//! Statements are fixed templates over [`Identifier`] tokens, never free-form
//! strings. A [`Batch`] pairs each statement with a [`Slot`] naming its role,
//! so the position of a statement's result can be looked up by name.

use std::fmt;

use crate::adapter::Identifier;

/// A single SurrealQL statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `INFO FOR KV;` lists namespaces.
    InfoForKv,
    /// `INFO FOR DB;` lists tables of the current database.
    InfoForDb,
    /// `DEFINE NAMESPACE <ns>;`
    DefineNamespace(Identifier),
    /// `DEFINE DATABASE <db>;` within the current namespace.
    DefineDatabase(Identifier),
    /// `USE NS <ns>;`
    UseNamespace(Identifier),
    /// `USE NS <ns> DB <db>;`
    UseDatabase {
        namespace: Identifier,
        database: Identifier,
    },
    /// `REMOVE NAMESPACE <ns>;`
    RemoveNamespace(Identifier),
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InfoForKv => f.write_str("INFO FOR KV;"),
            Self::InfoForDb => f.write_str("INFO FOR DB;"),
            Self::DefineNamespace(ns) => write!(f, "DEFINE NAMESPACE {};", ns),
            Self::DefineDatabase(db) => write!(f, "DEFINE DATABASE {};", db),
            Self::UseNamespace(ns) => write!(f, "USE NS {};", ns),
            Self::UseDatabase {
                namespace,
                database,
            } => write!(f, "USE NS {} DB {};", namespace, database),
            Self::RemoveNamespace(ns) => write!(f, "REMOVE NAMESPACE {};", ns),
        }
    }
}

/// Role of a statement within a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Namespace listing (`INFO FOR KV`).
    Namespaces,
    /// Session context switch (`USE ...`).
    Context,
    /// Namespace definition.
    DefineNamespace,
    /// Database definition.
    DefineDatabase,
    /// Table listing (`INFO FOR DB`).
    Tables,
    /// Namespace removal.
    RemoveNamespace,
}

impl Slot {
    /// Get the slot name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Namespaces => "namespaces",
            Self::Context => "context",
            Self::DefineNamespace => "define_namespace",
            Self::DefineDatabase => "define_database",
            Self::Tables => "tables",
            Self::RemoveNamespace => "remove_namespace",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered statements submitted as one request body.
///
/// The backend returns one result per statement in submission order; the
/// batch is the authority on which position holds which [`Slot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    entries: Vec<(Slot, Statement)>,
}

impl Batch {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn push(mut self, slot: Slot, statement: Statement) -> Self {
        debug_assert!(
            self.position(slot).is_none(),
            "slot {slot} appears twice in one batch"
        );
        self.entries.push((slot, statement));
        self
    }

    /// `INFO FOR KV;`
    pub fn info_for_kv() -> Self {
        Self::new().push(Slot::Namespaces, Statement::InfoForKv)
    }

    /// `DEFINE NAMESPACE <name>; USE NS <name>; DEFINE DATABASE <name>;`
    ///
    /// Creates a namespace and a database of the same name in one round trip.
    pub fn define_namespace_and_database(name: &Identifier) -> Self {
        Self::new()
            .push(Slot::DefineNamespace, Statement::DefineNamespace(name.clone()))
            .push(Slot::Context, Statement::UseNamespace(name.clone()))
            .push(Slot::DefineDatabase, Statement::DefineDatabase(name.clone()))
    }

    /// `USE NS <namespace> DB <database>; INFO FOR DB;`
    ///
    /// The table listing lands at position 1.
    pub fn info_for_db(namespace: &Identifier, database: &Identifier) -> Self {
        Self::new()
            .push(
                Slot::Context,
                Statement::UseDatabase {
                    namespace: namespace.clone(),
                    database: database.clone(),
                },
            )
            .push(Slot::Tables, Statement::InfoForDb)
    }

    /// `REMOVE NAMESPACE <name>;`
    pub fn remove_namespace(name: &Identifier) -> Self {
        Self::new().push(Slot::RemoveNamespace, Statement::RemoveNamespace(name.clone()))
    }

    /// Number of statements in the batch.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the batch holds no statements.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Result position of the statement filling `slot`.
    pub fn position(&self, slot: Slot) -> Option<usize> {
        self.entries.iter().position(|(s, _)| *s == slot)
    }

    /// Slots in submission order.
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.entries.iter().map(|(slot, _)| *slot)
    }

    /// Statements in submission order.
    pub fn statements(&self) -> impl Iterator<Item = &Statement> + '_ {
        self.entries.iter().map(|(_, statement)| statement)
    }

    /// Render the request body.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Batch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, statement) in self.statements().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}
