//! Small expression-shaped replacements for `if`/`else` and `match` chains.
//!
//! These exist for call sites that build a value from a series of eagerly
//! evaluated alternatives, e.g. table-driven defaults. For anything lazy or
//! side-effecting, a plain `if` or `match` is the right tool.

/// Returns `if_output` when the condition holds, `else_output` otherwise.
///
/// ```
/// use kitbag::condition::ternary;
///
/// assert_eq!(ternary(true, "a", "b"), "a");
/// assert_eq!(ternary(false, "a", "b"), "b");
/// ```
pub fn ternary<T>(condition: bool, if_output: T, else_output: T) -> T {
    if condition {
        if_output
    } else {
        else_output
    }
}

/// A chained conditional started by [`when`]. First satisfied branch wins.
#[derive(Debug, Clone)]
pub struct IfChain<T> {
    value: Option<T>,
}

/// Starts a `when … or_when … otherwise` chain.
///
/// ```
/// use kitbag::condition::when;
///
/// let grade = |score: u32| {
///     when(score >= 90, "A")
///         .or_when(score >= 80, "B")
///         .otherwise("C")
/// };
/// assert_eq!(grade(95), "A");
/// assert_eq!(grade(85), "B");
/// assert_eq!(grade(42), "C");
/// ```
pub fn when<T>(condition: bool, value: T) -> IfChain<T> {
    IfChain {
        value: condition.then_some(value),
    }
}

impl<T> IfChain<T> {
    /// Adds another branch, taken only if no earlier branch matched.
    pub fn or_when(self, condition: bool, value: T) -> Self {
        match self.value {
            Some(_) => self,
            None => when(condition, value),
        }
    }

    /// Ends the chain, falling back to `value` if no branch matched.
    pub fn otherwise(self, value: T) -> T {
        self.value.unwrap_or(value)
    }
}

/// A chained equality switch started by [`switch`]. First matching case wins.
#[derive(Debug, Clone)]
pub struct SwitchChain<T, R> {
    subject: T,
    value: Option<R>,
}

/// Starts a `switch … case … default` chain over an equality subject.
///
/// ```
/// use kitbag::condition::switch;
///
/// let name = switch(2).case(1, "one").case(2, "two").default("many");
/// assert_eq!(name, "two");
/// ```
pub fn switch<T: PartialEq, R>(subject: T) -> SwitchChain<T, R> {
    SwitchChain {
        subject,
        value: None,
    }
}

impl<T: PartialEq, R> SwitchChain<T, R> {
    /// Adds a case, taken only if no earlier case matched the subject.
    pub fn case(mut self, candidate: T, result: R) -> Self {
        if self.value.is_none() && self.subject == candidate {
            self.value = Some(result);
        }
        self
    }

    /// Ends the chain, falling back to `result` if no case matched.
    pub fn default(self, result: R) -> R {
        self.value.unwrap_or(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ternary() {
        assert_eq!(ternary(true, "if", "else"), "if");
        assert_eq!(ternary(false, "if", "else"), "else");
    }

    #[test]
    fn test_when_chain() {
        let result = when(true, "if").or_when(false, "else if").otherwise("else");
        assert_eq!(result, "if");

        let result = when(true, "if").or_when(true, "else if").otherwise("else");
        assert_eq!(result, "if");

        let result = when(false, "if").or_when(true, "else if").otherwise("else");
        assert_eq!(result, "else if");

        let result = when(false, "if")
            .or_when(false, "else if")
            .otherwise("else");
        assert_eq!(result, "else");
    }

    #[test]
    fn test_switch_case() {
        assert_eq!(switch(42).case(42, 1).case(1, 2).default(3), 1);
        assert_eq!(switch(42).case(42, 1).case(42, 2).default(3), 1);
        assert_eq!(switch(42).case(1, 1).case(42, 2).default(3), 2);
        assert_eq!(switch(42).case(1, 1).case(1, 2).default(3), 3);
    }
}
