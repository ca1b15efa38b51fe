//! Stock preflight cases

pub mod home_listing;
pub mod random_file;

pub use home_listing::FileListingCase;
pub use random_file::RandomFileCase;
