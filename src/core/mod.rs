pub mod counter;
pub mod discount;
pub mod posts;

pub use crate::domain::model::{DiscountRequest, Post, PostsSummary};
pub use crate::domain::ports::{HttpClient, HttpResponse};
pub use crate::utils::error::Result;
