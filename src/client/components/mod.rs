pub mod brand_card;
pub mod brand_shelf;
pub mod error_message;
pub mod info_pill;
pub mod navbar;
pub mod page;
pub mod result_pill;
pub mod section_header;
pub mod series_card;
pub mod series_carousel;
pub mod skeletons;
pub mod variant_card;

pub use brand_card::BrandCard;
pub use brand_shelf::BrandShelf;
pub use error_message::ErrorMessage;
pub use info_pill::InfoPill;
pub use navbar::Navbar;
pub use page::Page;
pub use result_pill::{ResultPill, ResultTarget};
pub use section_header::SectionHeader;
pub use series_card::SeriesCard;
pub use series_carousel::SeriesCarousel;
pub use skeletons::{CardGridSkeleton, HeaderSkeleton, ShelfSkeleton};
pub use variant_card::{VariantCard, VariantDisplay};
