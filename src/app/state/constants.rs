use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;

/// Fixed chrome above the list; used to estimate the list viewport before the
/// first scroll report.
pub(crate) const PAGE_PADDING_PX: f32 = 12.0;
pub(crate) const HEADER_BAR_HEIGHT_PX: f32 = 40.0;
pub(crate) const TAB_STRIP_HEIGHT_PX: f32 = 48.0;
pub(crate) const CONTENT_SPACING_PX: f32 = 8.0;
/// Window y coordinate of the list's top edge.
pub(crate) const LIST_TOP_PX: f32 =
    PAGE_PADDING_PX + HEADER_BAR_HEIGHT_PX + CONTENT_SPACING_PX + TAB_STRIP_HEIGHT_PX
        + CONTENT_SPACING_PX;
pub(crate) const CHROME_HEIGHT_PX: f32 = PAGE_PADDING_PX * 2.0
    + HEADER_BAR_HEIGHT_PX
    + TAB_STRIP_HEIGHT_PX
    + CONTENT_SPACING_PX * 2.0;

pub(crate) const SECTION_TITLE_FONT_SIZE_PX: f32 = 20.0;
pub(crate) const ITEM_NAME_FONT_SIZE_PX: f32 = 16.0;
pub(crate) const ITEM_DETAIL_FONT_SIZE_PX: f32 = 13.0;

/// Animation frames are driven at roughly display rate.
pub(crate) const FRAME_INTERVAL_MS: u64 = 16;

pub(crate) static LIST_SCROLL_ID: Lazy<ScrollId> = Lazy::new(|| ScrollId::new("menu-list"));
pub(crate) static TAB_SCROLL_ID: Lazy<ScrollId> = Lazy::new(|| ScrollId::new("menu-tabs"));
