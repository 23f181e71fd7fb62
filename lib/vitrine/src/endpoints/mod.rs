//! Per-resource endpoint groups.
//!
//! Each group is a thin borrow of the [`Storefront`](crate::Storefront):
//! methods assemble a route and parameters, then delegate to the shared
//! dispatch path. No business logic lives here.

mod account;
mod authentication;
mod cart;
mod checkout;
mod countries;
mod digital_assets;
mod menus;
mod order;
mod pages;
mod products;
mod taxons;
mod wishlists;

pub use account::{Account, AccountConfirmation, AccountConfirmationDocument};
pub use authentication::{Authentication, OauthToken};
pub use cart::Cart;
pub use checkout::Checkout;
pub use countries::Countries;
pub use digital_assets::DigitalAssets;
pub use menus::Menus;
pub use order::Order;
pub use pages::Pages;
pub use products::Products;
pub use taxons::Taxons;
pub use wishlists::Wishlists;
