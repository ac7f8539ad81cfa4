//! An unbalanced binary search tree and its traversal family.
//!
//! Nothing here rebalances: the shape of the tree, and with it the
//! `O(depth)` cost of every operation, is decided entirely by insertion
//! order. Inserting sorted input produces a list. The depth-first walks
//! and the printer recurse once per level, so a deep enough list-shaped
//! tree can exhaust the call stack; dropping the tree is iterative and
//! has no such limit.
//!
//! # Examples
//!
//! ```
//! use bstree::{Error, Tree};
//!
//! let mut tree = Tree::new();
//! for word in ["cherry", "apple", "pear"] {
//!     tree.insert(word)?;
//! }
//!
//! // Duplicates are rejected, not merged.
//! assert_eq!(tree.insert("apple"), Err(Error::DuplicateKey));
//!
//! // The inorder walk renders elements in ascending order.
//! let mut out = String::new();
//! tree.inorder(&mut out, bstree::DEFAULT_SEPARATOR)?;
//! assert_eq!(out, "apple  cherry  pear  ");
//!
//! tree.remove(&"cherry")?;
//! assert!(!tree.search(&"cherry"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use std::mem;

use crate::error::{Error, Result};

/// Separator written after each element of a traversal when the caller has
/// no better preference: two spaces.
pub const DEFAULT_SEPARATOR: &str = "  ";

/// Horizontal step, in columns, between a node and its children in
/// [`Tree::graph`] output.
const GRAPH_INDENT: usize = 8;

/// An owning edge: the parent's child slot (or the tree's root slot) that
/// exclusively owns a subtree.
type Link<T> = Option<Box<Node<T>>>;

/// An unbalanced binary search tree storing one copy of each element.
///
/// For every node, all elements in its left subtree compare strictly less
/// than its own element and all elements in its right subtree strictly
/// greater. That ordering is the only structural invariant; see the
/// [module docs](self) for the cost implications.
#[derive(Debug, Clone)]
pub struct Tree<T> {
    root: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        // `Box` would free the nodes by recursing one call frame per level,
        // which overflows the stack on degenerate (list-shaped) trees.
        // Detach children onto a worklist so every node drops childless.
        let mut pending = Vec::new();
        pending.extend(self.root.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Returns `true` while the tree stores no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.is_empty());
    ///
    /// tree.insert(1)?;
    /// assert!(!tree.is_empty());
    ///
    /// tree.remove(&1)?;
    /// assert!(tree.is_empty());
    /// # Ok::<(), bstree::Error>(())
    /// ```
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Reports whether `item` is stored in the tree.
    ///
    /// Descends from the root, going left when `item` is smaller than the
    /// current node's element and right when it is greater. Runs in
    /// `O(depth)` and never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2)?;
    ///
    /// assert!(tree.search(&2));
    /// assert!(!tree.search(&42));
    /// # Ok::<(), bstree::Error>(())
    /// ```
    pub fn search(&self, item: &T) -> bool
    where
        T: Ord,
    {
        let mut link = &self.root;
        while let Some(node) = link {
            link = match item.cmp(&node.item) {
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Returns the depth at which `item` sits, with the root at level 0,
    /// or `None` if the tree does not contain it.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for item in [5, 3, 8, 1] {
    ///     tree.insert(item)?;
    /// }
    ///
    /// assert_eq!(tree.level(&5), Some(0));
    /// assert_eq!(tree.level(&8), Some(1));
    /// assert_eq!(tree.level(&1), Some(2));
    /// assert_eq!(tree.level(&7), None);
    /// # Ok::<(), bstree::Error>(())
    /// ```
    pub fn level(&self, item: &T) -> Option<usize>
    where
        T: Ord,
    {
        let mut link = &self.root;
        let mut depth = 0;
        while let Some(node) = link {
            link = match item.cmp(&node.item) {
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
                Ordering::Equal => return Some(depth),
            };
            depth += 1;
        }
        None
    }

    /// Inserts `item`, growing the tree by exactly one leaf.
    ///
    /// The descent remembers only the link it is about to fill, which is
    /// the left or right slot of the last node compared (or the root slot
    /// of an empty tree). An equal element anywhere along the way rejects
    /// the insertion with [`Error::DuplicateKey`] before anything is
    /// allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::{Error, Tree};
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.insert(1), Ok(()));
    /// assert_eq!(tree.insert(1), Err(Error::DuplicateKey));
    ///
    /// assert!(tree.search(&1));
    /// ```
    pub fn insert(&mut self, item: T) -> Result<()>
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match item.cmp(&node.item) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return Err(Error::DuplicateKey),
            };
        }
        *link = Some(Box::new(Node::new(item)));
        Ok(())
    }

    /// Removes `item`, shrinking the tree by exactly one node.
    ///
    /// Fails with [`Error::KeyNotFound`] when `item` is absent, leaving the
    /// tree untouched. A node with two children is not unlinked itself:
    /// its element is replaced by its inorder successor's (the smallest
    /// element of its right subtree) and the successor's node, which has at
    /// most a right child, is spliced out instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::{Error, Tree};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1)?;
    ///
    /// assert_eq!(tree.remove(&1), Ok(()));
    /// assert_eq!(tree.remove(&1), Err(Error::KeyNotFound));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn remove(&mut self, item: &T) -> Result<()>
    where
        T: Ord,
    {
        let link = Self::locate(&mut self.root, item).ok_or(Error::KeyNotFound)?;
        Self::unlink(link);
        Ok(())
    }

    /// Writes every element in ascending order to `out`, each followed by
    /// `separator` (the last one included).
    ///
    /// Visits the left subtree, then the node, then the right subtree. An
    /// empty tree writes nothing. Only the sink can fail.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::{Tree, DEFAULT_SEPARATOR};
    ///
    /// let mut tree = Tree::new();
    /// for item in [2, 1, 3] {
    ///     tree.insert(item)?;
    /// }
    ///
    /// let mut out = String::new();
    /// tree.inorder(&mut out, DEFAULT_SEPARATOR)?;
    /// assert_eq!(out, "1  2  3  ");
    ///
    /// out.clear();
    /// tree.inorder(&mut out, ", ")?;
    /// assert_eq!(out, "1, 2, 3, ");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn inorder<W>(&self, out: &mut W, separator: &str) -> fmt::Result
    where
        T: fmt::Display,
        W: fmt::Write,
    {
        Self::inorder_node(&self.root, out, separator)
    }

    /// Writes every element in preorder (node, left subtree, right subtree)
    /// to `out`, each followed by `separator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::{Tree, DEFAULT_SEPARATOR};
    ///
    /// let mut tree = Tree::new();
    /// for item in [2, 1, 3] {
    ///     tree.insert(item)?;
    /// }
    ///
    /// let mut out = String::new();
    /// tree.preorder(&mut out, DEFAULT_SEPARATOR)?;
    /// assert_eq!(out, "2  1  3  ");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn preorder<W>(&self, out: &mut W, separator: &str) -> fmt::Result
    where
        T: fmt::Display,
        W: fmt::Write,
    {
        Self::preorder_node(&self.root, out, separator)
    }

    /// Writes every element in postorder (left subtree, right subtree,
    /// node) to `out`, each followed by `separator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::{Tree, DEFAULT_SEPARATOR};
    ///
    /// let mut tree = Tree::new();
    /// for item in [2, 1, 3] {
    ///     tree.insert(item)?;
    /// }
    ///
    /// let mut out = String::new();
    /// tree.postorder(&mut out, DEFAULT_SEPARATOR)?;
    /// assert_eq!(out, "1  3  2  ");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn postorder<W>(&self, out: &mut W, separator: &str) -> fmt::Result
    where
        T: fmt::Display,
        W: fmt::Write,
    {
        Self::postorder_node(&self.root, out, separator)
    }

    /// Writes every element in breadth-first order (top to bottom, left to
    /// right within a level) to `out`, each followed by `separator`.
    ///
    /// Unlike the depth-first walks this one runs on an explicit queue, so
    /// its space cost is the width of the widest level rather than call
    /// frames per level of depth.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::{Tree, DEFAULT_SEPARATOR};
    ///
    /// let mut tree = Tree::new();
    /// for item in [5, 3, 8, 1, 4, 7, 9] {
    ///     tree.insert(item)?;
    /// }
    ///
    /// let mut out = String::new();
    /// tree.levelorder(&mut out, DEFAULT_SEPARATOR)?;
    /// assert_eq!(out, "5  3  8  1  4  7  9  ");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn levelorder<W>(&self, out: &mut W, separator: &str) -> fmt::Result
    where
        T: fmt::Display,
        W: fmt::Write,
    {
        let mut queue = VecDeque::new();
        queue.extend(self.root.as_deref());
        while let Some(node) = queue.pop_front() {
            write!(out, "{}{}", node.item, separator)?;
            queue.extend(node.left.as_deref());
            queue.extend(node.right.as_deref());
        }
        Ok(())
    }

    /// Writes a sideways rendering of the tree's structure to `out`, one
    /// node per line: the right subtree above, the left subtree below,
    /// each level pushed eight columns further right. Absent children
    /// print as `_` so missing links stay visible; an empty tree is a
    /// single `_`.
    ///
    /// This is a diagnostic aid, not part of the logical contract.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for item in [2, 1, 3] {
    ///     tree.insert(item)?;
    /// }
    ///
    /// let mut out = String::new();
    /// tree.graph(&mut out)?;
    /// let lines: Vec<&str> = out.lines().collect();
    /// assert_eq!(lines, [
    ///     "                _",
    ///     "        3",
    ///     "                _",
    ///     " 2",
    ///     "                _",
    ///     "        1",
    ///     "                _",
    /// ]);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn graph<W>(&self, out: &mut W) -> fmt::Result
    where
        T: fmt::Display,
        W: fmt::Write,
    {
        Self::graph_node(&self.root, 0, out)
    }

    /// Descends to the owning link of the node holding `item`.
    ///
    /// The owning link is all the parent information deletion needs: it is
    /// the left or right slot of the parent node, or the tree's root slot
    /// when the item sits at the root. Returns `None` when `item` is
    /// absent.
    fn locate<'a>(mut link: &'a mut Link<T>, item: &T) -> Option<&'a mut Link<T>>
    where
        T: Ord,
    {
        // Each step probes through a shared borrow and only then reborrows
        // the winning child slot; the cursor itself is the sole long-lived
        // mutable borrow.
        loop {
            match link.as_deref().map(|node| item.cmp(&node.item)) {
                None => return None,
                Some(Ordering::Equal) => return Some(link),
                Some(Ordering::Less) => {
                    link = &mut link.as_mut().expect("a comparison implies a node").left;
                }
                Some(Ordering::Greater) => {
                    link = &mut link.as_mut().expect("a comparison implies a node").right;
                }
            }
        }
    }

    /// Splices the node owned by `link` out of the tree, freeing exactly
    /// one node. No-op on an empty link.
    fn unlink(link: &mut Link<T>) {
        if let Some(node) = link {
            if node.left.is_some() && node.right.is_some() {
                // A node with two children cannot be unlinked directly.
                // Swap its item with the inorder successor's and splice the
                // successor's node out instead; being leftmost, it has no
                // left child, so that is the one-child case further down.
                let succ_link = Self::leftmost_link(&mut node.right);
                let mut succ = succ_link.take().expect("right subtree implies a successor");
                debug_assert!(succ.left.is_none());
                mem::swap(&mut node.item, &mut succ.item);
                *succ_link = succ.right;
                return;
            }
        }
        if let Some(node) = link.take() {
            *link = node.left.or(node.right);
        }
    }

    /// Walks to the link owning the leftmost node of the subtree under
    /// `link`; returns `link` itself if that subtree is empty.
    fn leftmost_link(mut link: &mut Link<T>) -> &mut Link<T> {
        // Same discipline as `locate`: probe through a shared borrow, then
        // reborrow the child slot, so no borrow outlives its step.
        while link.as_deref().map_or(false, |node| node.left.is_some()) {
            link = &mut link.as_mut().expect("the loop guard saw a node").left;
        }
        link
    }

    fn inorder_node<W>(link: &Link<T>, out: &mut W, separator: &str) -> fmt::Result
    where
        T: fmt::Display,
        W: fmt::Write,
    {
        if let Some(node) = link {
            Self::inorder_node(&node.left, out, separator)?;
            write!(out, "{}{}", node.item, separator)?;
            Self::inorder_node(&node.right, out, separator)?;
        }
        Ok(())
    }

    fn preorder_node<W>(link: &Link<T>, out: &mut W, separator: &str) -> fmt::Result
    where
        T: fmt::Display,
        W: fmt::Write,
    {
        if let Some(node) = link {
            write!(out, "{}{}", node.item, separator)?;
            Self::preorder_node(&node.left, out, separator)?;
            Self::preorder_node(&node.right, out, separator)?;
        }
        Ok(())
    }

    fn postorder_node<W>(link: &Link<T>, out: &mut W, separator: &str) -> fmt::Result
    where
        T: fmt::Display,
        W: fmt::Write,
    {
        if let Some(node) = link {
            Self::postorder_node(&node.left, out, separator)?;
            Self::postorder_node(&node.right, out, separator)?;
            write!(out, "{}{}", node.item, separator)?;
        }
        Ok(())
    }

    /// Renders the subtree under `link` at `indent` columns. The padding
    /// is at least one space wide, so the root's value column is never
    /// flush left.
    fn graph_node<W>(link: &Link<T>, indent: usize, out: &mut W) -> fmt::Result
    where
        T: fmt::Display,
        W: fmt::Write,
    {
        match link {
            Some(node) => {
                Self::graph_node(&node.right, indent + GRAPH_INDENT, out)?;
                writeln!(out, "{:>width$}{}", " ", node.item, width = indent)?;
                Self::graph_node(&node.left, indent + GRAPH_INDENT, out)
            }
            None => writeln!(out, "{:>width$}_", " ", width = indent),
        }
    }
}

/// A `Node` owns one element and, through its child links, both subtrees.
#[derive(Debug, Clone)]
struct Node<T> {
    item: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    /// A fresh leaf holding `item`, with both links empty.
    fn new(item: T) -> Self {
        Self {
            item,
            left: None,
            right: None,
        }
    }
}


#[cfg(test)]
mod quicktests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::test::quick::Op;

    /// Applies a list of operations to a tree and an ordered-set model,
    /// checking each observable outcome against the model's. This way a
    /// random smattering of inserts and removes must leave both holding
    /// exactly the same elements.
    fn do_ops<T>(ops: &[Op<T>], tree: &mut Tree<T>, model: &mut BTreeSet<T>)
    where
        T: Ord + Clone,
    {
        for op in ops {
            match op {
                Op::Insert(item) => {
                    assert_eq!(tree.insert(item.clone()).is_ok(), model.insert(item.clone()));
                }
                Op::Remove(item) => {
                    assert_eq!(tree.remove(item).is_ok(), model.remove(item));
                }
                Op::Search(item) => {
                    assert_eq!(tree.search(item), model.contains(item));
                }
            }
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut model = BTreeSet::new();

            do_ops(&ops, &mut tree, &mut model);
            model.iter().all(|item| tree.search(item))
        }
    }

    quickcheck::quickcheck! {
        fn inorder_renders_the_sorted_element_set(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut model = BTreeSet::new();

            do_ops(&ops, &mut tree, &mut model);

            let mut rendered = String::new();
            tree.inorder(&mut rendered, " ").unwrap();
            let expected: String = model.iter().map(|item| format!("{} ", item)).collect();
            rendered == expected
        }
    }

    quickcheck::quickcheck! {
        fn level_agrees_with_search(ops: Vec<Op<i8>>, probes: Vec<i8>) -> bool {
            let mut tree = Tree::new();
            let mut model = BTreeSet::new();

            do_ops(&ops, &mut tree, &mut model);
            probes
                .iter()
                .all(|item| tree.level(item).is_some() == tree.search(item))
        }
    }
}
