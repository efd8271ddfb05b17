use std::path::PathBuf;

mod core;
mod scroll;
mod tabs;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug, Clone, PartialEq)]
pub(in crate::app) enum Effect {
    /// Bring the list to `offset_y`, eased or in one jump.
    ScrollList { offset_y: f32, animated: bool },
    /// Move the list scrollable without any settle signal (animation frames,
    /// layout resets).
    SnapList(f32),
    /// Keep tab `index` visible inside the horizontal strip.
    RevealTab(usize),
    LoadMenu(PathBuf),
}
