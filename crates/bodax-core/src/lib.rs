pub mod carousel;
pub mod clock;
pub mod config;
pub mod countdown;
pub mod error;
pub mod geometry;
pub mod models;
pub mod prefs;
pub mod reveal;
pub mod roster;
pub mod schedule;
pub mod seed;
pub mod signal;
pub mod slide;
pub mod source;
pub mod viewport;

pub use carousel::{CarouselController, DisplayItem, ItemRenderer};
pub use clock::{Clock, Millis, SystemClock};
pub use config::{AppConfig, EasingType};
pub use error::{Error, Result};
pub use models::{Match, Player, Streamer, Team};
pub use prefs::{AppContext, ConsentState};
pub use reveal::{RevealEngine, RevealOptions};
pub use source::{JsonSnapshotSource, MatchSource, Snapshot, StaticSource};
pub use viewport::{ElementHandle, Viewport};
