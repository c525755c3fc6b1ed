use std::fmt::{self, Display, Formatter};

use itertools::Itertools;

use crate::frontend::Term;

/// The equations entered so far, in input order.
#[derive(Debug, Default)]
pub struct EquationSystem {
    equations: Vec<Box<[Term]>>,
}

impl EquationSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, terms: Box<[Term]>) {
        self.equations.push(terms);
    }

    pub fn len(&self) -> usize {
        self.equations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.equations.is_empty()
    }

    pub fn equations(&self) -> &[Box<[Term]>] {
        &self.equations
    }
}

impl Display for EquationSystem {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for terms in &self.equations {
            writeln!(f, "{}", terms.iter().join(""))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::EquationSystem;
    use crate::frontend::parse_line;

    #[test]
    fn renders_one_equation_per_line() {
        let mut system = EquationSystem::new();
        assert!(system.is_empty());
        assert_eq!(system.to_string(), "");

        system.push(parse_line("3x -4y +z").unwrap());
        system.push(parse_line("-a").unwrap());
        assert_eq!(system.len(), 2);
        assert_eq!(system.equations()[1][0].coefficient, -1);
        assert_eq!(system.to_string(), "+3x-4y+1z\n-1a\n");
    }
}
