use super::messages::Message;
use super::state::{
    App, CONTENT_SPACING_PX, HEADER_BAR_HEIGHT_PX, ITEM_DETAIL_FONT_SIZE_PX,
    ITEM_NAME_FONT_SIZE_PX, LIST_SCROLL_ID, PAGE_PADDING_PX, SECTION_TITLE_FONT_SIZE_PX,
};
use super::tab_bar::tab_bar;
use crate::config::ThemeMode;
use crate::menu::MenuItem;
use iced::alignment::Vertical;
use iced::widget::text::Wrapping;
use iced::widget::{Column, button, column, container, horizontal_space, row, scrollable, text};
use iced::{Element, Length};
use section_tabs_core::Section;
use std::time::Instant;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let theme_label = match self.config.theme {
            ThemeMode::Night => "Day Mode",
            ThemeMode::Day => "Night Mode",
        };
        let title = if self.menu.restaurant.is_empty() {
            "Menu"
        } else {
            self.menu.restaurant.as_str()
        };
        let header = row![
            text(title).size(SECTION_TITLE_FONT_SIZE_PX),
            horizontal_space(),
            button(theme_label).on_press(Message::ToggleTheme),
        ]
        .spacing(10)
        .align_y(Vertical::Center)
        .height(Length::Fixed(HEADER_BAR_HEIGHT_PX))
        .width(Length::Fill);

        let body: Element<'_, Message> = if self.menu.loading {
            container(text("Loading menu...")).padding(8).into()
        } else if let Some(error) = &self.menu.error {
            container(text(format!("Could not load menu: {error}")))
                .padding(8)
                .into()
        } else if self.menu.sections.is_empty() {
            container(text("This menu has no sections.")).padding(8).into()
        } else {
            column![
                tab_bar(
                    &self.menu.sections,
                    self.tabs.active_index(),
                    self.config.tab_width,
                    |section, _is_active| text(section.title.as_str())
                        .size(ITEM_NAME_FONT_SIZE_PX)
                        .wrapping(Wrapping::None)
                        .into(),
                    Message::TabPressed,
                ),
                self.section_list(),
            ]
            .spacing(CONTENT_SPACING_PX)
            .height(Length::Fill)
            .into()
        };

        column![header, body]
            .spacing(CONTENT_SPACING_PX)
            .padding(PAGE_PADDING_PX)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn section_list(&self) -> Element<'_, Message> {
        let rows = self
            .menu
            .sections
            .iter()
            .fold(Column::new(), |list, section| {
                let list = list.push(self.section_header(section));
                section
                    .items
                    .iter()
                    .fold(list, |list, item| list.push(self.menu_row(item)))
            });

        scrollable(rows.width(Length::Fill))
            .id(LIST_SCROLL_ID.clone())
            .on_scroll(|viewport| Message::ListScrolled {
                offset_y: viewport.absolute_offset().y,
                viewport_height: viewport.bounds().height,
                content_height: viewport.content_bounds().height,
                bounds: viewport.bounds(),
                at: Instant::now(),
            })
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn section_header<'a>(&self, section: &'a Section<MenuItem>) -> Element<'a, Message> {
        container(text(section.title.as_str()).size(SECTION_TITLE_FONT_SIZE_PX))
            .width(Length::Fill)
            .height(Length::Fixed(self.config.section_header_height))
            .align_y(Vertical::Center)
            .style(container::rounded_box)
            .padding([0, 8])
            .into()
    }

    // Rows must keep the configured height; the list geometry assumes it.
    fn menu_row<'a>(&self, item: &'a MenuItem) -> Element<'a, Message> {
        let details = column![
            text(item.name.as_str()).size(ITEM_NAME_FONT_SIZE_PX),
            text(item.description.as_str())
                .size(ITEM_DETAIL_FONT_SIZE_PX)
                .wrapping(Wrapping::None),
        ]
        .spacing(2)
        .width(Length::Fill);

        container(
            row![
                details,
                text(format!("${:.2}", item.price)).size(ITEM_NAME_FONT_SIZE_PX)
            ]
            .spacing(8)
            .align_y(Vertical::Center),
        )
        .width(Length::Fill)
        .height(Length::Fixed(self.config.item_height))
        .align_y(Vertical::Center)
        .padding([0, 8])
        .clip(true)
        .into()
    }
}
