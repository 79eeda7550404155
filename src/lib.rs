pub mod dataset;
pub mod email;
pub mod output;

pub use dataset::{DatasetShape, GenerateOptions, Summary, generate_asset_data};
pub use email::{generate_email, random_email};
