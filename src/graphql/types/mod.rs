pub mod category;
pub mod search;
pub mod show;

pub use category::ShowCategory;
pub use search::SearchFilter;
pub use show::Show;
