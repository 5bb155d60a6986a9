mod analytics;
mod asset;
mod order;
mod portfolio;
mod user;

pub use analytics::ApiResponse;
pub use asset::{Asset, CreateAsset};
pub use order::{CreateOrder, Order, Side};
pub use portfolio::{CreatePortfolio, Portfolio};
pub use user::{LoginRequest, RegisterRequest, Role, TokenResponse, UpdateProfileRequest, User};
