use super::SymExpr;

/// An iterator that iteratively traverses the tree of expressions in left-to-right post-order
/// (i.e. depth-first).
///
/// This iterator is created by [`SymExpr::post_order_iter`].
pub struct ExprIter<'a> {
    stack: Vec<&'a SymExpr>,
    last_visited: Option<&'a SymExpr>,
}

impl<'a> ExprIter<'a> {
    /// Creates a new iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn new(expr: &'a SymExpr) -> Self {
        Self {
            stack: vec![expr],
            last_visited: None,
        }
    }

    /// Pops the current expression in the stack and marks it as the last visited expression.
    fn visit(&mut self) -> Option<&'a SymExpr> {
        self.last_visited = Some(self.stack.pop()?);
        self.last_visited
    }

    /// Returns true if the given expression matches the last visited expression.
    fn is_last_visited(&self, expr: &'a SymExpr) -> bool {
        match self.last_visited {
            Some(last_visited) => std::ptr::eq(last_visited, expr),
            None => false,
        }
    }
}

impl<'a> Iterator for ExprIter<'a> {
    type Item = &'a SymExpr;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let expr = *self.stack.last()?;
            let children = expr.children();

            // a leaf, or a node whose children have all been visited
            let done = match children.last() {
                Some(last) => self.is_last_visited(*last),
                None => true,
            };
            if done {
                return self.visit();
            }
            self.stack.extend(children.into_iter().rev());
        }
    }
}

/// An iterator that traverses the tree of expressions in left-to-right pre-order, yielding each
/// node before its children.
///
/// This iterator is created by [`SymExpr::pre_order_iter`].
pub struct PreOrderIter<'a> {
    stack: Vec<&'a SymExpr>,
}

impl<'a> PreOrderIter<'a> {
    /// Creates a new pre-order iterator rooted at the given expression.
    pub fn new(expr: &'a SymExpr) -> Self {
        Self { stack: vec![expr] }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = &'a SymExpr;

    fn next(&mut self) -> Option<Self::Item> {
        let expr = self.stack.pop()?;
        self.stack.extend(expr.children().into_iter().rev());
        Some(expr)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn sample() -> SymExpr {
        // factorial(n + 1) * k
        SymExpr::Mul(vec![
            SymExpr::factorial(SymExpr::Add(vec![SymExpr::symbol("n"), SymExpr::number(1)])),
            SymExpr::symbol("k"),
        ])
    }

    #[test]
    fn post_order() {
        let expr = sample();
        let visited = expr.post_order_iter().map(ToString::to_string).collect::<Vec<_>>();
        assert_eq!(visited, vec![
            "n",
            "1",
            "n + 1",
            "factorial(n + 1)",
            "k",
            "factorial(n + 1)*k",
        ]);
    }

    #[test]
    fn pre_order() {
        let expr = sample();
        let visited = expr.pre_order_iter().map(ToString::to_string).collect::<Vec<_>>();
        assert_eq!(visited, vec![
            "factorial(n + 1)*k",
            "factorial(n + 1)",
            "n + 1",
            "n",
            "1",
            "k",
        ]);
    }
}
