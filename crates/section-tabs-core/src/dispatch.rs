use crate::section::Section;
use crate::synchronizer::ScrollCommand;
use thiserror::Error;
use tracing::{debug, warn};

/// Imperative scroll capability of the underlying sectioned list.
pub trait ListHandle {
    /// `false` until the list is mounted and measured.
    fn is_ready(&self) -> bool;

    fn scroll_to_location(&mut self, request: ScrollToLocation);
}

/// Scroll request handed to a [`ListHandle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollToLocation {
    pub section_index: usize,
    pub item_index: usize,
    pub view_offset: f32,
    pub animated: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("section index {index} is out of range for {len} sections")]
    OutOfRangeIndex { index: usize, len: usize },
    #[error("list handle is not ready for scrolling")]
    HandleNotReady,
}

/// Issue `command` against `handle`, reporting why it was dropped.
///
/// Nothing is queued: a dropped command is simply re-issued by the next tap.
pub fn try_dispatch<T, H>(
    command: &ScrollCommand,
    sections: &[Section<T>],
    handle: &mut H,
) -> Result<ScrollToLocation, DispatchError>
where
    H: ListHandle + ?Sized,
{
    let index = command.target_section_index;
    if index >= sections.len() {
        return Err(DispatchError::OutOfRangeIndex {
            index,
            len: sections.len(),
        });
    }
    if !handle.is_ready() {
        return Err(DispatchError::HandleNotReady);
    }

    let request = ScrollToLocation {
        section_index: index,
        item_index: 0,
        view_offset: command.view_offset,
        animated: command.animated,
    };
    handle.scroll_to_location(request);
    Ok(request)
}

/// Fire-and-forget variant of [`try_dispatch`]; failures are only logged.
pub fn dispatch<T, H>(command: &ScrollCommand, sections: &[Section<T>], handle: &mut H)
where
    H: ListHandle + ?Sized,
{
    match try_dispatch(command, sections, handle) {
        Ok(request) => debug!(
            section = request.section_index,
            view_offset = request.view_offset,
            animated = request.animated,
            "Dispatched scroll to section"
        ),
        Err(err @ DispatchError::OutOfRangeIndex { .. }) => {
            warn!("Dropping scroll command: {err}");
        }
        Err(err @ DispatchError::HandleNotReady) => {
            debug!("Dropping scroll command: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::{SectionData, index_sections};

    #[derive(Default)]
    struct RecordingHandle {
        ready: bool,
        requests: Vec<ScrollToLocation>,
    }

    impl ListHandle for RecordingHandle {
        fn is_ready(&self) -> bool {
            self.ready
        }

        fn scroll_to_location(&mut self, request: ScrollToLocation) {
            self.requests.push(request);
        }
    }

    fn three_sections() -> Vec<Section<u32>> {
        index_sections(vec![
            SectionData::new("A", vec![1, 2]),
            SectionData::new("B", vec![3]),
            SectionData::new("C", vec![4, 5, 6]),
        ])
    }

    #[test]
    fn out_of_range_is_a_silent_no_op() {
        let sections = three_sections();
        let mut handle = RecordingHandle {
            ready: true,
            ..Default::default()
        };
        let command = ScrollCommand::to_section(5);

        dispatch(&command, &sections, &mut handle);
        assert!(handle.requests.is_empty());
        assert_eq!(
            try_dispatch(&command, &sections, &mut handle),
            Err(DispatchError::OutOfRangeIndex { index: 5, len: 3 })
        );
    }

    #[test]
    fn unready_handle_drops_the_command() {
        let sections = three_sections();
        let mut handle = RecordingHandle::default();
        let command = ScrollCommand::to_section(1);

        assert_eq!(
            try_dispatch(&command, &sections, &mut handle),
            Err(DispatchError::HandleNotReady)
        );
        handle.ready = true;
        dispatch(&command, &sections, &mut handle);
        assert_eq!(handle.requests.len(), 1, "dropped command must not be replayed");
    }

    #[test]
    fn scrolls_to_first_item_of_section() {
        let sections = three_sections();
        let mut handle = RecordingHandle {
            ready: true,
            ..Default::default()
        };
        let command = ScrollCommand::to_section(2)
            .with_view_offset(12.0)
            .with_animated(false);

        dispatch(&command, &sections, &mut handle);
        assert_eq!(
            handle.requests,
            vec![ScrollToLocation {
                section_index: 2,
                item_index: 0,
                view_offset: 12.0,
                animated: false,
            }]
        );
    }

    #[test]
    fn empty_sections_reject_everything() {
        let sections: Vec<Section<u32>> = Vec::new();
        let mut handle = RecordingHandle {
            ready: true,
            ..Default::default()
        };
        assert!(matches!(
            try_dispatch(&ScrollCommand::to_section(0), &sections, &mut handle),
            Err(DispatchError::OutOfRangeIndex { index: 0, len: 0 })
        ));
    }
}
