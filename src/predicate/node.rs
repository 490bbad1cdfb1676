//! Composable predicate trees with AND/OR/NOT logic.
use crate::predicate::affine::Inequality;
use crate::predicate::traits::Predicate;
use std::fmt::Write;
use std::ops::Not;
use std::sync::Arc;

/// Predicate tree node: leaf (concrete predicate) or combinator.
///
/// Digit regions are conjunctions of a lower and an upper bound, sometimes
/// a disjunction of two such pairs when one column needs its own bounds:
/// - **Leaf**: Wraps a concrete [`Predicate`], usually an [`Inequality`]
/// - **All**: AND logic – every child must hold
/// - **Any**: OR logic – at least one child must hold
/// - **Not**: negation of the child
///
/// Note: Uses `Arc` so tables can be cloned and shared across threads
/// without deep-copying leaves.
#[derive(Debug, Clone)]
pub enum PredicateNode {
    Leaf(Arc<dyn Predicate>),
    Not(Arc<PredicateNode>),
    All(Vec<PredicateNode>),
    Any(Vec<PredicateNode>),
}

impl PredicateNode {
    pub fn leaf(predicate: impl Predicate + 'static) -> Self {
        PredicateNode::Leaf(Arc::new(predicate))
    }

    /// Creates a conjunction node (AND logic). An empty conjunction holds everywhere.
    pub fn all<I: Into<PredicateNode>>(children: impl IntoIterator<Item = I>) -> Self {
        PredicateNode::All(children.into_iter().map(Into::into).collect())
    }

    /// Creates a disjunction node (OR logic). An empty disjunction holds nowhere.
    pub fn any<I: Into<PredicateNode>>(children: impl IntoIterator<Item = I>) -> Self {
        PredicateNode::Any(children.into_iter().map(Into::into).collect())
    }

    /// Recursively evaluates the tree at `(x, t)`.
    pub fn evaluate(&self, x: i64, t: i64) -> bool {
        match self {
            PredicateNode::Leaf(predicate) => predicate.holds(x, t),
            PredicateNode::Not(child) => !child.evaluate(x, t),
            PredicateNode::All(children) => children.iter().all(|c| c.evaluate(x, t)),
            PredicateNode::Any(children) => children.iter().any(|c| c.evaluate(x, t)),
        }
    }

    pub fn stringify(&self) -> String {
        match self {
            PredicateNode::Leaf(predicate) => predicate.stringify(),
            PredicateNode::Not(child) => format!("¬({})", child.stringify()),
            PredicateNode::All(children) => format!(
                "({})",
                children
                    .iter()
                    .map(|c| c.stringify())
                    .collect::<Vec<_>>()
                    .join(" ∧ ")
            ),
            PredicateNode::Any(children) => format!(
                "({})",
                children
                    .iter()
                    .map(|c| c.stringify())
                    .collect::<Vec<_>>()
                    .join(" ∨ ")
            ),
        }
    }

    /// Renders the tree structure one node per line.
    ///
    /// # Arguments
    ///
    /// * `indent` - The current indentation level (use 0 for the root)
    pub fn render_tree(&self, indent: usize) -> String {
        let mut out = String::new();
        self.render_into(&mut out, indent);
        out
    }

    fn render_into(&self, out: &mut String, indent: usize) {
        let prefix = "  ".repeat(indent);
        match self {
            PredicateNode::Leaf(predicate) => {
                let _ = writeln!(out, "{}└─ {}", prefix, predicate.stringify());
            }
            PredicateNode::Not(child) => {
                let _ = writeln!(out, "{}└─ Not", prefix);
                child.render_into(out, indent + 1);
            }
            PredicateNode::All(children) => {
                let _ = writeln!(out, "{}└─ All", prefix);
                for child in children {
                    child.render_into(out, indent + 1);
                }
            }
            PredicateNode::Any(children) => {
                let _ = writeln!(out, "{}└─ Any", prefix);
                for child in children {
                    child.render_into(out, indent + 1);
                }
            }
        }
    }

    /// Number of leaf predicates in the tree.
    pub fn leaf_count(&self) -> usize {
        match self {
            PredicateNode::Leaf(_) => 1,
            PredicateNode::Not(child) => child.leaf_count(),
            PredicateNode::All(children) | PredicateNode::Any(children) => {
                children.iter().map(|c| c.leaf_count()).sum()
            }
        }
    }
}

impl Predicate for PredicateNode {
    fn holds(&self, x: i64, t: i64) -> bool {
        PredicateNode::evaluate(self, x, t)
    }

    fn stringify(&self) -> String {
        PredicateNode::stringify(self)
    }
}

impl From<Inequality> for PredicateNode {
    fn from(inequality: Inequality) -> Self {
        PredicateNode::leaf(inequality)
    }
}

impl Not for PredicateNode {
    type Output = Self;

    fn not(self) -> Self {
        PredicateNode::Not(Arc::new(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{FnPredicate, LinearForm};

    fn band(lo: i64, hi: i64) -> PredicateNode {
        let t = LinearForm::t();
        PredicateNode::all([t.ge(LinearForm::from(lo)), t.le(LinearForm::from(hi))])
    }

    #[test]
    fn test_all_node() {
        let node = band(-2, 3);
        assert!(node.evaluate(0, -2));
        assert!(node.evaluate(0, 3));
        assert!(!node.evaluate(0, 4));
        assert_eq!(node.leaf_count(), 2);
    }

    #[test]
    fn test_any_node() {
        let node = PredicateNode::any([band(0, 1), band(5, 6)]);
        assert!(node.evaluate(0, 1));
        assert!(node.evaluate(0, 6));
        assert!(!node.evaluate(0, 3));
        assert_eq!(node.leaf_count(), 4);
    }

    #[test]
    fn test_not_node() {
        let node = !band(0, 1);
        assert!(node.evaluate(0, -1));
        assert!(!node.evaluate(0, 0));
    }

    #[test]
    fn test_empty_combinators() {
        assert!(PredicateNode::all(Vec::<PredicateNode>::new()).evaluate(0, 0));
        assert!(!PredicateNode::any(Vec::<PredicateNode>::new()).evaluate(0, 0));
    }

    #[test]
    fn test_fn_leaf() {
        let node = PredicateNode::leaf(FnPredicate::new("x == t", |x, t| x == t));
        assert!(node.evaluate(4, 4));
        assert!(!node.evaluate(4, 5));
        assert_eq!(node.stringify(), "x == t");
    }

    #[test]
    fn test_stringify_and_render() {
        let node = PredicateNode::any([band(0, 1), !band(5, 6)]);
        let s = node.stringify();
        assert!(s.contains(" ∨ "));
        assert!(s.contains(" ∧ "));
        assert!(s.contains("¬("));

        let tree = node.render_tree(0);
        assert!(tree.starts_with("└─ Any\n"));
        assert!(tree.contains("\n  └─ Not\n"));
        assert_eq!(tree.lines().count(), 8);
    }

    #[test]
    fn test_predicate_trait_impl_does_not_recurse() {
        let node = band(0, 10);
        let as_trait: Arc<dyn Predicate> = Arc::new(node);
        assert!(as_trait.holds(0, 5));
        assert!(!as_trait.holds(0, 11));
    }
}
