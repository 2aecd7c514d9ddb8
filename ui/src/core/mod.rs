//! Platform-agnostic state machines behind the page: locale, rotation,
//! carousel, scroll flag and hover registry, plus the timer that drives them.

pub mod carousel;
pub mod hover;
pub mod locale;
pub mod platform;
pub mod rotation;
pub mod scroll;
pub mod timer;
pub mod timing;

pub use carousel::{CarouselController, CarouselWindow, WindowSlot};
pub use hover::HoverRegistry;
pub use locale::{Locale, LocaleStore, TextDirection};
pub use rotation::{Direction, RotationState};
pub use scroll::ScrollFlag;
pub use timer::{CancelToken, IntervalTimer};
