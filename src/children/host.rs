//! Host framework seam for child manipulation.

use super::project::ChildProps;

/// Adapter over a component-tree framework's children API.
///
/// The projector only counts, indexes, clones and maps children; it never
/// inspects them. Implement this for whichever tree the application renders.
/// [`ElementHost`](super::ElementHost) is the in-crate implementation over
/// [`Element`](super::Element).
pub trait ChildHost {
    /// The container a component holds its children in.
    type Children;
    /// A single child node.
    type Child: Clone;

    /// Number of children in `children`.
    fn child_count(&self, children: &Self::Children) -> usize;

    /// The child at `index`, or `None` if out of range.
    fn child_at<'a>(&self, children: &'a Self::Children, index: usize) -> Option<&'a Self::Child>;

    /// Returns a copy of `child` with `props` merged over its own properties.
    ///
    /// The copy keeps the child's identity and type.
    fn clone_with_props(&self, child: &Self::Child, props: &ChildProps) -> Self::Child;

    /// Applies `f` to every child, preserving order and count.
    fn map_children<F>(&self, children: &Self::Children, f: F) -> Vec<Self::Child>
    where
        F: FnMut(&Self::Child) -> Self::Child;
}
