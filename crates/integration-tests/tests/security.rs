//! Sanitization, validation and rate limiting as the checkout uses them.

use std::time::{Duration, Instant};

use quickcart_checkout::models::{CheckoutForm, CustomerInfo};
use quickcart_checkout::security::{
    CspNonce, RateLimiter, SanitizeKind, generate_csp_header, sanitize_for_sql, sanitize_user_input,
    validate_email, validate_name,
};
use quickcart_checkout::{RateLimitConfig, validate_checkout_form, validate_shipping_details};
use quickcart_integration_tests::{jane_doe, main_street};

// =============================================================================
// Sanitization
// =============================================================================

#[test]
fn test_script_tags_stripped_from_names() {
    let cleaned = sanitize_user_input("<script>John</script>", SanitizeKind::Name);
    assert_eq!(cleaned, "scriptJohnscript");
}

#[test]
fn test_sql_denylist() {
    assert_eq!(sanitize_for_sql("Robert'); DROP TABLE Students;--"), "Robert)  TABLE Students");
}

#[test]
fn test_primitives_agree_with_form_rules() {
    assert!(validate_email("jane@doe.com"));
    assert!(!validate_email("jane@doe"));
    assert!(validate_name("O'Neil"));
    assert!(!validate_name("Jane2"));
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn test_checkout_form_errors() {
    let result = validate_checkout_form(&CustomerInfo {
        first_name: String::new(),
        last_name: "Doe".to_string(),
        email: "bad".to_string(),
        phone: String::new(),
    });
    assert!(!result.is_valid);
    assert_eq!(result.error("firstName"), Some("firstName is required"));
    assert_eq!(result.error("email"), Some("Please enter a valid email address"));

    let result = validate_checkout_form(&jane_doe());
    assert!(result.is_valid);
    assert!(result.errors.is_empty());
}

#[test]
fn test_shipping_details() {
    let form = CheckoutForm {
        customer_info: jane_doe(),
        address: main_street(),
    };
    assert!(validate_shipping_details(&form).is_valid);

    let mut form = form;
    form.customer_info.phone = "12".to_string();
    form.address.zip_code = String::new();
    let result = validate_shipping_details(&form);
    assert_eq!(result.error("phone"), Some("phone must be at least 7 characters"));
    assert_eq!(result.error("zipCode"), Some("zipCode is required"));
    assert_eq!(result.error("street"), None);
}

// =============================================================================
// Rate Limiting and Headers
// =============================================================================

#[test]
fn test_rate_limiter_window() {
    let limiter = RateLimiter::new(RateLimitConfig {
        max_requests: 5,
        window: Duration::from_secs(60),
        max_keys: 10,
    });
    let start = Instant::now();
    for _ in 0..5 {
        assert!(limiter.check_at("jane@doe.com", start));
    }
    assert!(!limiter.check_at("jane@doe.com", start + Duration::from_secs(59)));
    assert!(limiter.check_at("jane@doe.com", start + Duration::from_secs(60)));
}

#[test]
fn test_csp_header_with_nonce() {
    let nonce = CspNonce::generate();
    let header = generate_csp_header(Some(&nonce));
    assert!(header.contains("frame-ancestors 'none'"));
    assert!(header.contains(nonce.value()));
}
