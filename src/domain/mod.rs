pub mod item;
pub mod load;

pub use item::FeedItem;
pub use load::{LoadError, LoadResult};
