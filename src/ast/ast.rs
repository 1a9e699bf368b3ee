use std::{fmt::Display, slice::Iter};

use super::statements::Statement;

/// Root of the tree: every statement that parsed, in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn iter(&self) -> Iter<'_, Statement> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// One token-free line per statement, see [`Statement::dump`].
    pub fn dump(&self) -> String {
        self.iter()
            .map(|stmt| stmt.dump() + "\n")
            .collect()
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for stmt in self.iter() {
            writeln!(f, "{}", stmt)?;
        }

        Ok(())
    }
}
