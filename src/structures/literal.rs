/*!
A literal, taken to be a named proposition paired with a boolean.

The boolean of a literal holds whether negation has been applied to the proposition.
So, for example, the literal 'It is raining' *is true* pairs the proposition 'It is raining' with
`false`, while ¬(It is raining) pairs the same proposition with `true`.

Two literals *complement* each other when they are built over the same proposition with opposite
booleans, and the elimination of complementary pairs is the single inference of resolution.

# Example

```rust
# use stoat_res::structures::literal::Literal;
let rain = Literal::new("rain", false);
let dry = rain.negate();

assert!(rain.complements(&dry));
assert!(!rain.complements(&rain));
assert_eq!(dry.to_string(), "¬(rain)");
```
*/

use std::borrow::Borrow;

/// A named proposition paired with a boolean, the boolean holding whether negation has been
/// applied to the proposition.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Literal {
    /// The name of the proposition.
    name: String,

    /// Whether negation has been applied to the proposition.
    negated: bool,
}

impl Literal {
    pub fn new(name: impl Into<String>, negated: bool) -> Self {
        Literal {
            name: name.into(),
            negated,
        }
    }

    /// The name of the proposition of the literal.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether negation has been applied to the proposition of the literal.
    pub fn negated(&self) -> bool {
        self.negated
    }

    /// A fresh literal over the same proposition with the opposite negation.
    pub fn negate(&self) -> Self {
        Literal {
            name: self.name.clone(),
            negated: !self.negated,
        }
    }

    /// Whether the literal and `other` are built over the same proposition with opposite
    /// negations.
    pub fn complements(&self, other: impl Borrow<Literal>) -> bool {
        let other = other.borrow();
        self.name == other.name && self.negated != other.negated
    }
}

impl std::ops::Not for Literal {
    type Output = Literal;

    fn not(self) -> Self::Output {
        Literal {
            name: self.name,
            negated: !self.negated,
        }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.negated {
            true => write!(f, "¬({})", self.name),
            false => write!(f, "{}", self.name),
        }
    }
}
