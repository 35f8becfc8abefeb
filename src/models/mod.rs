pub mod movie;

pub use movie::{seed_catalog, Movie, MovieListing};
