mod chord;
mod collection;
mod favorite;
mod lesson;
mod progression;

pub use chord::Chord;
pub use collection::{Collection, Document, Record};
pub use favorite::{Favorite, FavoriteKind};
pub use lesson::{Lesson, Level};
pub use progression::Progression;
