use super::state::{TAB_SCROLL_ID, TAB_STRIP_HEIGHT_PX};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Row, button, container, scrollable};
use iced::{Element, Length, Theme};
use section_tabs_core::Section;

/// One tab as handed to the renderer.
#[derive(Debug, PartialEq)]
pub(in crate::app) struct TabEntry<'a, T> {
    pub(in crate::app) section: &'a Section<T>,
    pub(in crate::app) is_active: bool,
}

pub(in crate::app) fn tab_entries<T>(
    sections: &[Section<T>],
    active_index: usize,
) -> Vec<TabEntry<'_, T>> {
    sections
        .iter()
        .map(|section| TabEntry {
            section,
            is_active: section.index == active_index,
        })
        .collect()
}

/// Horizontal offset that centers tab `index` in a strip `strip_width` wide.
pub(in crate::app) fn reveal_offset(index: usize, tab_width: f32, strip_width: f32) -> f32 {
    if !(tab_width.is_finite() && strip_width.is_finite()) {
        return 0.0;
    }
    let center = (index as f32 + 0.5) * tab_width;
    (center - strip_width / 2.0).max(0.0)
}

/// Scrollable strip with one fixed-width button per section.
///
/// `render_tab(section, is_active)` draws the label; pressing a tab publishes
/// `on_press(index)` and nothing else.
pub(in crate::app) fn tab_bar<'a, T, Message, F, P>(
    sections: &'a [Section<T>],
    active_index: usize,
    tab_width: f32,
    render_tab: F,
    on_press: P,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
    F: Fn(&'a Section<T>, bool) -> Element<'a, Message>,
    P: Fn(usize) -> Message,
{
    let tabs = tab_entries(sections, active_index).into_iter().fold(
        Row::new().align_y(Vertical::Center),
        |row, tab| {
            let style: fn(&Theme, button::Status) -> button::Style = if tab.is_active {
                button::primary
            } else {
                button::text
            };
            let label = container(render_tab(tab.section, tab.is_active))
                .width(Length::Fill)
                .align_x(Horizontal::Center);
            row.push(
                button(label)
                    .style(style)
                    .width(Length::Fixed(tab_width))
                    .on_press(on_press(tab.section.index)),
            )
        },
    );

    scrollable(tabs)
        .id(TAB_SCROLL_ID.clone())
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new().width(2).scroller_width(2),
        ))
        .width(Length::Fill)
        .height(Length::Fixed(TAB_STRIP_HEIGHT_PX))
        .into()
}
