//! GPUI presentation shell (feature `gpui`).
//!
//! - `sheet` - the `BottomSheet` view: backdrop, drag handle, content region
//! - `surface` - `SheetSurface` implementation that eases offsets per frame

mod sheet;
mod surface;

pub use sheet::BottomSheet;
pub use surface::{OffsetAnimation, ShellSurface};
