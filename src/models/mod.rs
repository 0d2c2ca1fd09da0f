pub mod habit;
pub mod media;
pub mod reflection;
pub mod reward;
pub mod user;

pub use habit::HabitEntry;
pub use media::{MediaKind, MediaLog};
pub use reflection::{Mood, Reflection};
pub use reward::{RequirementType, Reward};
pub use user::User;
