use tracing::warn;

/// Caller-supplied section before indices are assigned.
#[derive(Debug, Clone)]
pub struct SectionData<T> {
    pub title: String,
    pub data: Vec<T>,
    pub index: Option<usize>,
}

impl<T> SectionData<T> {
    pub fn new(title: impl Into<String>, data: Vec<T>) -> Self {
        Self {
            title: title.into(),
            data,
            index: None,
        }
    }
}

/// A titled group of list items; the unit a tab represents.
///
/// `index` is always the section's position in the list, so it can be used
/// directly as a tab index, a scroll target and a visibility key.
#[derive(Debug, Clone, PartialEq)]
pub struct Section<T> {
    pub index: usize,
    pub title: String,
    pub items: Vec<T>,
}

impl<T> Section<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Attach indices to caller sections, keeping insertion order.
///
/// An omitted index is filled in from the position. An explicit index that
/// disagrees with the position is replaced by the position and logged.
pub fn index_sections<T>(data: impl IntoIterator<Item = SectionData<T>>) -> Vec<Section<T>> {
    data.into_iter()
        .enumerate()
        .map(|(position, section)| {
            if let Some(explicit) = section.index.filter(|&index| index != position) {
                warn!(
                    title = %section.title,
                    explicit,
                    position,
                    "Section index does not match its position; using the position"
                );
            }
            Section {
                index: position,
                title: section.title,
                items: section.data,
            }
        })
        .collect()
}
