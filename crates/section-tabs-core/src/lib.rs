//! Framework-neutral core of the synchronized section list / tab bar.
//!
//! A sectioned vertical list and a horizontal tab strip are kept in sync in
//! both directions:
//! - `visibility` picks the section that dominates the viewport,
//! - `synchronizer` owns the active tab and the tap suppression flag,
//! - `dispatch` turns a tab tap into a scroll request against a [`ListHandle`],
//! - `coordinator` wires the three together behind four public events.
//!
//! `geometry` and `viewability` provide the list-side collaborators (fixed-row
//! layout and the minimum-time / minimum-percentage gate) for hosts that do not
//! have a viewability engine of their own.

pub mod coordinator;
pub mod dispatch;
pub mod geometry;
pub mod section;
pub mod synchronizer;
pub mod viewability;
pub mod visibility;

pub use coordinator::{CoordinatorConfig, SectionTabs};
pub use dispatch::{DispatchError, ListHandle, ScrollToLocation, dispatch, try_dispatch};
pub use geometry::{ItemFrame, ListGeometry};
pub use section::{Section, SectionData, index_sections};
pub use synchronizer::{ActiveIndexState, ScrollCommand, TabSynchronizer};
pub use viewability::{ViewabilityConfig, ViewabilityTracker, visible_percent};
pub use visibility::{VisibleItemSample, compute_winner};
