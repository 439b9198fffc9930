pub mod a001_product;
pub mod a002_category;
pub mod a003_sizes;
pub mod a004_colors;
pub mod a005_discount;
pub mod a006_faq;
pub mod a007_contact;
pub mod a008_team;
pub mod a009_news;
pub mod resource;

pub use resource::ResourceKind;
