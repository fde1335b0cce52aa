//! Positional node paths.
//!
//! A [`NodePath`] walks element children step by step, the way an XPath
//! expression such as `/div[2]/span[1]` does. Positions are 1-based and only
//! count siblings with the same tag.

use scraper::ElementRef;
use std::fmt;

/// One child step of a [`NodePath`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    tag: &'static str,
    position: Option<usize>,
}

impl Step {
    /// Matches every child element named `tag`.
    #[must_use]
    pub const fn any(tag: &'static str) -> Self {
        Self {
            tag,
            position: None,
        }
    }

    /// Matches the `position`-th (1-based) child element named `tag`.
    #[must_use]
    pub const fn nth(tag: &'static str, position: usize) -> Self {
        Self {
            tag,
            position: Some(position),
        }
    }

    fn select<'a>(&self, node: ElementRef<'a>) -> Vec<ElementRef<'a>> {
        let mut matching = node
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|child| child.value().name() == self.tag);

        match self.position {
            Some(position) => position
                .checked_sub(1)
                .and_then(|index| matching.nth(index))
                .into_iter()
                .collect(),
            None => matching.collect(),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(position) => write!(f, "/{}[{}]", self.tag, position),
            None => write!(f, "/{}", self.tag),
        }
    }
}

/// A fixed sequence of child steps, relative to an entry node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodePath(&'static [Step]);

impl NodePath {
    /// Creates a path from its steps.
    #[must_use]
    pub const fn new(steps: &'static [Step]) -> Self {
        Self(steps)
    }

    /// Returns the steps of this path.
    #[must_use]
    pub fn steps(&self) -> &'static [Step] {
        self.0
    }

    /// Returns every node the path reaches from `from`, in document order.
    #[must_use]
    pub fn find_all<'a>(&self, from: ElementRef<'a>) -> Vec<ElementRef<'a>> {
        let mut current = vec![from];
        for step in self.0 {
            current = current.into_iter().flat_map(|node| step.select(node)).collect();
            if current.is_empty() {
                break;
            }
        }
        current
    }

    /// Returns the first node the path reaches from `from`.
    #[must_use]
    pub fn find_first<'a>(&self, from: ElementRef<'a>) -> Option<ElementRef<'a>> {
        self.find_all(from).into_iter().next()
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|step| write!(f, "{step}"))
    }
}
