use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Component selection: which vector components are drawn
// ---------------------------------------------------------------------------

/// Visibility of the vector components of the loaded dataset.
///
/// Stores the *hidden* indices, so a freshly loaded dataset shows everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentFilter {
    component_count: usize,
    hidden: BTreeSet<usize>,
}

impl ComponentFilter {
    /// All components visible.
    pub fn new(component_count: usize) -> Self {
        ComponentFilter {
            component_count,
            hidden: BTreeSet::new(),
        }
    }

    /// Keep the current selection when the component count is unchanged
    /// (e.g. on reload), otherwise show everything again.
    pub fn reset_for(&mut self, component_count: usize) {
        if component_count != self.component_count {
            *self = ComponentFilter::new(component_count);
        }
    }

    pub fn component_count(&self) -> usize {
        self.component_count
    }

    pub fn is_visible(&self, index: usize) -> bool {
        index < self.component_count && !self.hidden.contains(&index)
    }

    pub fn set_visible(&mut self, index: usize, visible: bool) {
        if index >= self.component_count {
            return;
        }
        if visible {
            self.hidden.remove(&index);
        } else {
            self.hidden.insert(index);
        }
    }

    pub fn show_all(&mut self) {
        self.hidden.clear();
    }

    pub fn hide_all(&mut self) {
        self.hidden = (0..self.component_count).collect();
    }

    /// Indices of the components to draw, ascending.
    pub fn visible_indices(&self) -> Vec<usize> {
        (0..self.component_count)
            .filter(|i| !self.hidden.contains(i))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_visible_by_default() {
        let filter = ComponentFilter::new(3);
        assert_eq!(filter.visible_indices(), vec![0, 1, 2]);
        assert!(!filter.is_visible(3));
    }

    #[test]
    fn test_hide_and_bulk() {
        let mut filter = ComponentFilter::new(4);
        filter.set_visible(1, false);
        filter.set_visible(3, false);
        assert_eq!(filter.visible_indices(), vec![0, 2]);

        filter.set_visible(1, true);
        assert_eq!(filter.visible_indices(), vec![0, 1, 2]);

        filter.hide_all();
        assert!(filter.visible_indices().is_empty());
        filter.show_all();
        assert_eq!(filter.visible_indices(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut filter = ComponentFilter::new(2);
        filter.set_visible(5, false);
        assert_eq!(filter, ComponentFilter::new(2));
    }

    #[test]
    fn test_reset_on_shape_change() {
        let mut filter = ComponentFilter::new(3);
        filter.set_visible(0, false);

        filter.reset_for(3);
        assert_eq!(filter.visible_indices(), vec![1, 2]);

        filter.reset_for(2);
        assert_eq!(filter.visible_indices(), vec![0, 1]);
        assert_eq!(filter.component_count(), 2);
    }
}
