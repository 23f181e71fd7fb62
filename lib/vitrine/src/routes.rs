//! Storefront route construction.
//!
//! Pure string templating: each function renders one API path, with caller
//! input percent-escaped so ids, slugs, and tokens cannot break out of
//! their path segment.

use vitrine_core::query::percent_encode;

const STOREFRONT: &str = "api/v2/storefront";
const OAUTH: &str = "oauth";

fn seg(value: &str) -> String {
    percent_encode(value)
}

pub(crate) fn oauth_token_path() -> String {
    format!("{OAUTH}/token")
}

pub(crate) fn oauth_revoke_path() -> String {
    format!("{OAUTH}/revoke")
}

pub(crate) fn account_path() -> String {
    format!("{STOREFRONT}/account")
}

pub(crate) fn account_confirm_path(confirmation_token: &str) -> String {
    format!("{STOREFRONT}/account_confirmations/{}", seg(confirmation_token))
}

pub(crate) fn account_credit_cards_path() -> String {
    format!("{STOREFRONT}/account/credit_cards")
}

pub(crate) fn account_default_credit_card_path() -> String {
    format!("{STOREFRONT}/account/credit_cards/default")
}

pub(crate) fn account_completed_orders_path() -> String {
    format!("{STOREFRONT}/account/orders")
}

pub(crate) fn account_completed_order_path(order_number: &str) -> String {
    format!("{STOREFRONT}/account/orders/{}", seg(order_number))
}

pub(crate) fn account_addresses_path() -> String {
    format!("{STOREFRONT}/account/addresses")
}

pub(crate) fn account_address_path(address_id: &str) -> String {
    format!("{STOREFRONT}/account/addresses/{}", seg(address_id))
}

pub(crate) fn forgot_password_path() -> String {
    format!("{STOREFRONT}/passwords")
}

pub(crate) fn reset_password_path(reset_token: &str) -> String {
    format!("{STOREFRONT}/passwords/{}", seg(reset_token))
}

pub(crate) fn cart_path() -> String {
    format!("{STOREFRONT}/cart")
}

pub(crate) fn cart_add_item_path() -> String {
    format!("{STOREFRONT}/cart/add_item")
}

pub(crate) fn cart_remove_item_path(line_item_id: &str) -> String {
    format!("{STOREFRONT}/cart/remove_line_item/{}", seg(line_item_id))
}

pub(crate) fn cart_empty_path() -> String {
    format!("{STOREFRONT}/cart/empty")
}

pub(crate) fn cart_set_quantity_path() -> String {
    format!("{STOREFRONT}/cart/set_quantity")
}

pub(crate) fn cart_apply_coupon_code_path() -> String {
    format!("{STOREFRONT}/cart/apply_coupon_code")
}

pub(crate) fn cart_remove_coupon_code_path(coupon_code: &str) -> String {
    format!("{STOREFRONT}/cart/remove_coupon_code/{}", seg(coupon_code))
}

pub(crate) fn cart_remove_all_coupons_path() -> String {
    format!("{STOREFRONT}/cart/remove_coupon_codes")
}

pub(crate) fn cart_estimate_shipping_rates_path() -> String {
    format!("{STOREFRONT}/cart/estimate_shipping_rates")
}

pub(crate) fn cart_associate_path() -> String {
    format!("{STOREFRONT}/cart/associate")
}

pub(crate) fn cart_change_currency_path() -> String {
    format!("{STOREFRONT}/cart/change_currency")
}

pub(crate) fn checkout_path() -> String {
    format!("{STOREFRONT}/checkout")
}

pub(crate) fn checkout_next_path() -> String {
    format!("{STOREFRONT}/checkout/next")
}

pub(crate) fn checkout_advance_path() -> String {
    format!("{STOREFRONT}/checkout/advance")
}

pub(crate) fn checkout_complete_path() -> String {
    format!("{STOREFRONT}/checkout/complete")
}

pub(crate) fn checkout_add_store_credit_path() -> String {
    format!("{STOREFRONT}/checkout/add_store_credit")
}

pub(crate) fn checkout_remove_store_credit_path() -> String {
    format!("{STOREFRONT}/checkout/remove_store_credit")
}

pub(crate) fn checkout_payment_methods_path() -> String {
    format!("{STOREFRONT}/checkout/payment_methods")
}

pub(crate) fn checkout_shipping_rates_path() -> String {
    format!("{STOREFRONT}/checkout/shipping_rates")
}

pub(crate) fn checkout_select_shipping_method_path() -> String {
    format!("{STOREFRONT}/checkout/select_shipping_method")
}

pub(crate) fn checkout_add_payment_path() -> String {
    format!("{STOREFRONT}/checkout/create_payment")
}

pub(crate) fn countries_path() -> String {
    format!("{STOREFRONT}/countries")
}

pub(crate) fn country_path(iso: &str) -> String {
    format!("{STOREFRONT}/countries/{}", seg(iso))
}

pub(crate) fn default_country_path() -> String {
    format!("{STOREFRONT}/countries/default")
}

pub(crate) fn digital_asset_download_path(asset_token: &str) -> String {
    format!("{STOREFRONT}/digitals/{}", seg(asset_token))
}

pub(crate) fn menus_path() -> String {
    format!("{STOREFRONT}/menus")
}

pub(crate) fn menu_path(id: &str) -> String {
    format!("{STOREFRONT}/menus/{}", seg(id))
}

pub(crate) fn order_status_path(order_number: &str) -> String {
    format!("{STOREFRONT}/order_status/{}", seg(order_number))
}

pub(crate) fn pages_path() -> String {
    format!("{STOREFRONT}/pages")
}

pub(crate) fn page_path(slug: &str) -> String {
    format!("{STOREFRONT}/pages/{}", seg(slug))
}

pub(crate) fn products_path() -> String {
    format!("{STOREFRONT}/products")
}

pub(crate) fn product_path(id: &str) -> String {
    format!("{STOREFRONT}/products/{}", seg(id))
}

pub(crate) fn taxons_path() -> String {
    format!("{STOREFRONT}/taxons")
}

pub(crate) fn taxon_path(id: &str) -> String {
    format!("{STOREFRONT}/taxons/{}", seg(id))
}

pub(crate) fn wishlists_path() -> String {
    format!("{STOREFRONT}/wishlists")
}

pub(crate) fn wishlist_path(wishlist_token: &str) -> String {
    format!("{STOREFRONT}/wishlists/{}", seg(wishlist_token))
}

pub(crate) fn default_wishlist_path() -> String {
    format!("{STOREFRONT}/wishlists/default")
}

pub(crate) fn wishlist_add_item_path(wishlist_token: &str) -> String {
    format!("{STOREFRONT}/wishlists/{}/add_item", seg(wishlist_token))
}

pub(crate) fn wishlist_set_item_quantity_path(wishlist_token: &str, item_id: &str) -> String {
    format!(
        "{STOREFRONT}/wishlists/{}/set_item_quantity/{}",
        seg(wishlist_token),
        seg(item_id)
    )
}

pub(crate) fn wishlist_remove_item_path(wishlist_token: &str, item_id: &str) -> String {
    format!(
        "{STOREFRONT}/wishlists/{}/remove_item/{}",
        seg(wishlist_token),
        seg(item_id)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_paths() {
        assert_eq!(products_path(), "api/v2/storefront/products");
        assert_eq!(cart_path(), "api/v2/storefront/cart");
        assert_eq!(oauth_token_path(), "oauth/token");
        assert_eq!(default_country_path(), "api/v2/storefront/countries/default");
    }

    #[test]
    fn interpolated_segments() {
        assert_eq!(product_path("42"), "api/v2/storefront/products/42");
        assert_eq!(
            wishlist_set_item_quantity_path("wl_1", "9"),
            "api/v2/storefront/wishlists/wl_1/set_item_quantity/9"
        );
    }

    #[test]
    fn segments_are_escaped() {
        assert_eq!(
            page_path("about us/legal"),
            "api/v2/storefront/pages/about%20us%2Flegal"
        );
        assert_eq!(
            cart_remove_coupon_code_path("10%OFF"),
            "api/v2/storefront/cart/remove_coupon_code/10%25OFF"
        );
    }
}
