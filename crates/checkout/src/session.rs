//! Checkout orchestration.
//!
//! A [`CheckoutSession`] borrows the cart, selection and step stores for the
//! lifetime of one checkout, owns the draft form, and coordinates the
//! information → delivery → summary flow up to order placement.
//!
//! # Order status
//!
//! Placement progress is published as an [`OrderStatus`] through a
//! `tokio::sync::watch` channel:
//!
//! ```text
//! Idle ──place_order──▶ Submitting ──ok──▶ Placed
//!                           │
//!                           └──err──▶ Failed
//! ```
//!
//! Precondition failures (missing selection, empty cart, invalid form, rate
//! limit) are returned before `Submitting` and leave the status untouched.
//! Dropping the `place_order` future while it waits on the backend abandons the
//! placement: the stores are only cleared once the backend has accepted, and
//! the status drops back from `Submitting` to `Idle`.

use std::collections::BTreeMap;

use chrono::Utc;
use tokio::sync::watch;
use tracing::{error, info, instrument, warn};

use quickcart_core::{CheckoutStep, CityId, DeliveryTier, OrderId, OrderStatus, Price};

use crate::config::StepNavigation;
use crate::error::{CheckoutError, NavigationError, SelectionError};
use crate::models::{Address, CheckoutForm, CustomerInfo, Order, UserProfile};
use crate::pricing::{DeliveryOptionView, PriceBreakdown, delivery_option_views};
use crate::security::{RateLimiter, SanitizeKind, sanitize_user_input};
use crate::services::{ApiError, ApiResponse, Catalog, OrderPlacement};
use crate::stores::{CartStore, CheckoutSelectionStore, CheckoutStepStore, UserStore};
use crate::validation::{ValidationResult, validate_checkout_form, validate_shipping_details};

/// One buyer's pass through checkout.
pub struct CheckoutSession<'a, P> {
    cart: &'a mut CartStore,
    selection: &'a mut CheckoutSelectionStore,
    steps: &'a mut CheckoutStepStore,
    placement: P,
    rate_limiter: Option<&'a RateLimiter>,
    navigation: StepNavigation,
    user: Option<UserProfile>,
    form: CheckoutForm,
    status: watch::Sender<OrderStatus>,
}

impl<P> std::fmt::Debug for CheckoutSession<'_, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckoutSession")
            .field("step", &self.steps.current_step())
            .field("items", &self.cart.item_count())
            .field("city", &self.selection.selected_city_id())
            .field("tier", &self.selection.selected_delivery_type())
            .field("status", &*self.status.borrow())
            .finish_non_exhaustive()
    }
}

impl<'a, P: OrderPlacement> CheckoutSession<'a, P> {
    /// Start a session over the given stores with a blank form.
    pub fn new(
        cart: &'a mut CartStore,
        selection: &'a mut CheckoutSelectionStore,
        steps: &'a mut CheckoutStepStore,
        placement: P,
    ) -> Self {
        Self {
            cart,
            selection,
            steps,
            placement,
            rate_limiter: None,
            navigation: StepNavigation::default(),
            user: None,
            form: CheckoutForm::default(),
            status: watch::Sender::new(OrderStatus::Idle),
        }
    }

    /// Pre-fill the form from the signed-in user, if any.
    #[must_use]
    pub fn with_user(mut self, users: &UserStore) -> Self {
        self.user = users.user().cloned();
        self.form = CheckoutForm::prefilled(self.user.as_ref());
        self
    }

    /// Limit order placement per buyer email.
    #[must_use]
    pub fn with_rate_limiter(mut self, limiter: &'a RateLimiter) -> Self {
        self.rate_limiter = Some(limiter);
        self
    }

    /// Set the step jump policy.
    #[must_use]
    pub fn with_navigation(mut self, navigation: StepNavigation) -> Self {
        self.navigation = navigation;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn cart(&self) -> &CartStore {
        self.cart
    }

    #[must_use]
    pub fn selection(&self) -> &CheckoutSelectionStore {
        self.selection
    }

    #[must_use]
    pub fn current_step(&self) -> CheckoutStep {
        self.steps.current_step()
    }

    #[must_use]
    pub const fn form(&self) -> &CheckoutForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut CheckoutForm {
        &mut self.form
    }

    pub fn set_customer_info(&mut self, customer_info: CustomerInfo) {
        self.form.customer_info = customer_info;
    }

    pub fn set_address(&mut self, address: Address) {
        self.form.address = address;
    }

    /// Current order status.
    #[must_use]
    pub fn status(&self) -> OrderStatus {
        *self.status.borrow()
    }

    /// Watch order status changes.
    #[must_use]
    pub fn subscribe_status(&self) -> watch::Receiver<OrderStatus> {
        self.status.subscribe()
    }

    // =========================================================================
    // Delivery
    // =========================================================================

    /// Select a city; any chosen tier is cleared.
    pub fn select_city(&mut self, id: Option<CityId>) {
        self.selection.set_selected_city(id);
    }

    /// Select a delivery tier for the current city.
    ///
    /// # Errors
    ///
    /// Returns `SelectionError` if the tier is not offered in the selected
    /// city; the selection is unchanged.
    pub fn select_delivery_tier(&mut self, tier: Option<DeliveryTier>) -> Result<(), SelectionError> {
        self.selection.set_selected_delivery_type(tier)
    }

    /// Tiers offered by the selected city; empty without one.
    #[must_use]
    pub fn available_tiers(&self) -> Vec<DeliveryTier> {
        self.selection
            .selected_city()
            .map(CheckoutSelectionStore::available_delivery_types)
            .unwrap_or_default()
    }

    /// Rows for the delivery tier picker.
    #[must_use]
    pub fn delivery_options(&self) -> Vec<DeliveryOptionView> {
        delivery_option_views(self.selection.selected_city())
    }

    /// Subtotal, delivery and total for the current cart and selection.
    #[must_use]
    pub fn pricing(&self) -> PriceBreakdown {
        PriceBreakdown::quote(self.cart, self.selection)
    }

    // =========================================================================
    // Step validation and navigation
    // =========================================================================

    /// Validate the information step: names and email.
    #[must_use]
    pub fn validate_information(&self) -> ValidationResult {
        validate_checkout_form(&self.form.customer_info)
    }

    /// Validate the delivery step: a known city and an offered tier.
    #[must_use]
    pub fn validate_delivery(&self) -> ValidationResult {
        let mut errors = BTreeMap::new();
        if self.selection.selected_city().is_none() {
            errors.insert("city".to_string(), "Please select a city".to_string());
        }
        if !self.selection.is_complete() {
            errors.insert(
                "deliveryType".to_string(),
                "Please select a delivery type".to_string(),
            );
        }

        ValidationResult {
            is_valid: errors.is_empty(),
            errors,
            sanitized_data: BTreeMap::new(),
        }
    }

    /// Validate phone and address fields.
    #[must_use]
    pub fn validate_shipping(&self) -> ValidationResult {
        validate_shipping_details(&self.form)
    }

    /// Validate the fields owned by `step`. The summary step owns none.
    #[must_use]
    pub fn validate_step(&self, step: CheckoutStep) -> ValidationResult {
        match step {
            CheckoutStep::Information => self.validate_information(),
            CheckoutStep::Delivery => self.validate_delivery(),
            CheckoutStep::Summary => ValidationResult {
                is_valid: true,
                ..ValidationResult::default()
            },
        }
    }

    /// Advance one step if the current step validates. No-op on the last step.
    ///
    /// # Errors
    ///
    /// Returns `NavigationError::StepIncomplete` with the current step's
    /// field errors.
    pub fn next_step(&mut self) -> Result<(), NavigationError> {
        let current = self.steps.current_step();
        let Some(next) = current.next() else {
            return Ok(());
        };
        self.ensure_complete(current, next)?;
        self.steps.next_step();
        Ok(())
    }

    /// Go back one step. Never blocked.
    pub fn prev_step(&mut self) {
        self.steps.prev_step();
    }

    /// Jump directly to `step`, subject to the navigation policy.
    ///
    /// # Errors
    ///
    /// Under [`StepNavigation::Guarded`], returns
    /// `NavigationError::StepIncomplete` for a forward jump past a step that
    /// does not validate. Jumping back or staying put is never blocked.
    pub fn go_to_step(&mut self, step: CheckoutStep) -> Result<(), NavigationError> {
        let forward = step.index() > self.steps.current_step().index();
        if forward && self.navigation == StepNavigation::Guarded {
            for earlier in CheckoutStep::ORDER
                .into_iter()
                .filter(|s| s.index() < step.index())
            {
                self.ensure_complete(earlier, step)?;
            }
        }
        self.steps.set_current_step(step);
        Ok(())
    }

    fn ensure_complete(
        &self,
        blocking: CheckoutStep,
        requested: CheckoutStep,
    ) -> Result<(), NavigationError> {
        let result = self.validate_step(blocking);
        if result.is_valid {
            return Ok(());
        }
        Err(NavigationError::StepIncomplete {
            requested,
            blocking,
            errors: result.errors,
        })
    }

    // =========================================================================
    // Placement
    // =========================================================================

    /// Place the order.
    ///
    /// On success the cart is cleared, the selection reset and the status set
    /// to `Placed`. The step store and form are kept until
    /// [`start_new_checkout`](Self::start_new_checkout).
    ///
    /// # Errors
    ///
    /// Precondition failures are returned without changing any state:
    /// `MissingSelection`, `Selection`, `EmptyCart`, `InvalidForm` and
    /// `RateLimited`, checked in that order. A backend failure sets the
    /// status to `Failed`, leaves the stores untouched and is returned as
    /// `CheckoutError::Placement`.
    #[instrument(skip_all)]
    pub async fn place_order(&mut self) -> Result<Order, CheckoutError> {
        let order = self.prepare_order()?;

        if let Some(limiter) = self.rate_limiter
            && !limiter.check(&order.customer_info.email)
        {
            return Err(CheckoutError::RateLimited);
        }

        self.status.send_replace(OrderStatus::Submitting);
        let _abandoned = SubmittingGuard(&self.status);
        let order_id = order.id;

        let placed = self
            .placement
            .place_order(order)
            .await
            .and_then(ApiResponse::into_result);

        match placed {
            Ok(order) => {
                self.cart.clear_cart();
                self.selection.reset_checkout();
                self.status.send_replace(OrderStatus::Placed);
                info!(
                    order_id = %order.id,
                    total = %order.total,
                    city_id = %order.city_id,
                    delivery = %order.delivery_type,
                    "Order placed"
                );
                Ok(order)
            }
            Err(e) => {
                self.status.send_replace(OrderStatus::Failed);
                error!(%order_id, error = %e, "Order placement failed");
                Err(e.into())
            }
        }
    }

    /// Check preconditions and build the order from sanitized form data.
    fn prepare_order(&self) -> Result<Order, CheckoutError> {
        let (Some(city), Some(tier)) = (
            self.selection.selected_city(),
            self.selection.selected_delivery_type(),
        ) else {
            warn!("Order attempted without city and delivery selection");
            return Err(CheckoutError::MissingSelection);
        };

        let Some(delivery_price) = city.delivery.price(tier) else {
            return Err(SelectionError::TierUnavailable {
                city: city.name.clone(),
                tier,
            }
            .into());
        };

        if self.cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let validation = self.validate_information();
        if !validation.is_valid {
            return Err(CheckoutError::InvalidForm(validation.errors));
        }

        let sanitized = |field: &str| {
            validation
                .sanitized_data
                .get(field)
                .cloned()
                .unwrap_or_default()
        };
        let customer_info = CustomerInfo {
            first_name: sanitized("firstName"),
            last_name: sanitized("lastName"),
            email: sanitized("email"),
            phone: sanitize_user_input(&self.form.customer_info.phone, SanitizeKind::Phone),
        };

        let address = &self.form.address;
        let address = Address {
            street: sanitize_user_input(&address.street, SanitizeKind::Text),
            apartment: address
                .apartment
                .as_deref()
                .map(|apartment| sanitize_user_input(apartment, SanitizeKind::Text))
                .filter(|apartment| !apartment.is_empty()),
            zip_code: sanitize_user_input(&address.zip_code, SanitizeKind::Zip),
        };

        let subtotal = self.cart.total();
        Ok(Order {
            id: OrderId::generate(),
            items: self.cart.items().to_vec(),
            customer_info,
            address,
            city_id: city.id,
            delivery_type: tier,
            delivery_price: Price::usd(delivery_price),
            subtotal: Price::usd(subtotal),
            total: Price::usd(subtotal + delivery_price),
            created_at: Utc::now(),
        })
    }

    /// Begin a fresh checkout after an order: status `Idle`, first step and
    /// a form pre-filled from the user again.
    pub fn start_new_checkout(&mut self) {
        self.status.send_replace(OrderStatus::Idle);
        self.steps.reset_steps();
        self.form = CheckoutForm::prefilled(self.user.as_ref());
    }
}

/// Puts a status still at `Submitting` back to `Idle` when dropped, so a
/// cancelled `place_order` leaves no placement in flight.
struct SubmittingGuard<'s>(&'s watch::Sender<OrderStatus>);

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        let reset = self.0.send_if_modified(|status| {
            if !status.is_submitting() {
                return false;
            }
            *status = OrderStatus::Idle;
            true
        });
        if reset {
            warn!("Order placement abandoned before the backend answered");
        }
    }
}

/// Load the catalog into a fresh cart and the selection's city list.
///
/// # Errors
///
/// Returns `ApiError` if either catalog call fails; stores are only written
/// after both calls succeed.
#[instrument(skip_all)]
pub async fn load_catalog(
    catalog: &impl Catalog,
    cart: &mut CartStore,
    selection: &mut CheckoutSelectionStore,
) -> Result<(), ApiError> {
    let (items, cities) = tokio::try_join!(catalog.get_cart_items(), catalog.get_cities())?;
    let items = items.into_result()?;
    let cities = cities.into_result()?;

    info!(items = items.len(), cities = cities.len(), "Catalog loaded");
    for item in items {
        cart.add_item(item);
    }
    selection.set_cities(cities);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use rust_decimal::Decimal;

    use super::*;
    use crate::config::RateLimitConfig;
    use crate::services::{MockApi, seed};

    struct Rejecting;

    impl OrderPlacement for Rejecting {
        async fn place_order(&self, _order: Order) -> Result<ApiResponse<Order>, ApiError> {
            Err(ApiError::Unavailable("connection refused".to_string()))
        }
    }

    fn stores() -> (CartStore, CheckoutSelectionStore, CheckoutStepStore) {
        (
            CartStore::with_items(seed::cart_items()),
            CheckoutSelectionStore::with_cities(seed::cities()),
            CheckoutStepStore::new(),
        )
    }

    fn fill_form<P: OrderPlacement>(session: &mut CheckoutSession<'_, P>) {
        session.set_customer_info(CustomerInfo {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "Jane@Doe.com".to_string(),
            phone: "+1 555 0100".to_string(),
        });
        session.set_address(Address {
            street: "1 Main St".to_string(),
            apartment: Some(String::new()),
            zip_code: "10001".to_string(),
        });
    }

    #[tokio::test(start_paused = true)]
    async fn test_place_order_end_to_end() {
        let (mut cart, mut selection, mut steps) = stores();
        let mut session = CheckoutSession::new(&mut cart, &mut selection, &mut steps, MockApi::default());
        fill_form(&mut session);
        session.select_city(Some(CityId::new(1)));
        session.select_delivery_tier(Some(DeliveryTier::Regular)).unwrap();
        assert_eq!(session.pricing().total.to_string(), "$2647.50");

        let mut status = session.subscribe_status();
        let observe = async {
            status.changed().await.unwrap();
            *status.borrow_and_update()
        };
        let (observed, placed) = tokio::join!(observe, session.place_order());

        assert_eq!(observed, OrderStatus::Submitting);
        let order = placed.unwrap();
        assert_eq!(order.total.amount, Decimal::new(264_750, 2));
        assert_eq!(order.customer_info.email, "jane@doe.com");
        assert_eq!(order.address.apartment, None);
        assert_eq!(session.status(), OrderStatus::Placed);
        assert!(session.cart().is_empty());
        assert_eq!(session.selection().selected_city_id(), None);
        assert_eq!(session.selection().delivery_price(), Decimal::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_placement_returns_to_idle() {
        let (mut cart, mut selection, mut steps) = stores();
        let mut session = CheckoutSession::new(&mut cart, &mut selection, &mut steps, MockApi::default());
        fill_form(&mut session);
        session.select_city(Some(CityId::new(1)));
        session.select_delivery_tier(Some(DeliveryTier::Regular)).unwrap();
        let mut status = session.subscribe_status();

        let placed = tokio::time::timeout(Duration::from_millis(10), session.place_order()).await;

        assert!(placed.is_err());
        assert_eq!(session.status(), OrderStatus::Idle);
        assert!(status.has_changed().unwrap());
        assert_eq!(*status.borrow_and_update(), OrderStatus::Idle);
        assert_eq!(session.cart().item_count(), 3);
        assert_eq!(session.selection().selected_delivery_type(), Some(DeliveryTier::Regular));

        let order = session.place_order().await.unwrap();
        assert_eq!(order.items.len(), 3);
        assert_eq!(session.status(), OrderStatus::Placed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_place_order_without_selection_is_noop() {
        let (mut cart, mut selection, mut steps) = stores();
        let mut session = CheckoutSession::new(&mut cart, &mut selection, &mut steps, MockApi::instant());
        fill_form(&mut session);
        session.select_city(Some(CityId::new(1)));

        let err = session.place_order().await.unwrap_err();
        assert!(matches!(err, CheckoutError::MissingSelection));
        assert_eq!(session.status(), OrderStatus::Idle);
        assert_eq!(session.cart().item_count(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_place_order_rejects_invalid_form() {
        let (mut cart, mut selection, mut steps) = stores();
        let mut session = CheckoutSession::new(&mut cart, &mut selection, &mut steps, MockApi::instant());
        session.select_city(Some(CityId::new(2)));
        session.select_delivery_tier(Some(DeliveryTier::Slow)).unwrap();

        let err = session.place_order().await.unwrap_err();
        let CheckoutError::InvalidForm(errors) = err else {
            panic!("expected InvalidForm, got {err:?}");
        };
        assert!(errors.contains_key("firstName"));
        assert!(errors.contains_key("email"));
        assert_eq!(session.status(), OrderStatus::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_place_order_empty_cart() {
        let (_, mut selection, mut steps) = stores();
        let mut cart = CartStore::new();
        let mut session = CheckoutSession::new(&mut cart, &mut selection, &mut steps, MockApi::instant());
        fill_form(&mut session);
        session.select_city(Some(CityId::new(1)));
        session.select_delivery_tier(Some(DeliveryTier::Fast)).unwrap();

        assert!(matches!(
            session.place_order().await,
            Err(CheckoutError::EmptyCart)
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_placement_keeps_stores() {
        let (mut cart, mut selection, mut steps) = stores();
        let mut session = CheckoutSession::new(&mut cart, &mut selection, &mut steps, Rejecting);
        fill_form(&mut session);
        session.select_city(Some(CityId::new(1)));
        session.select_delivery_tier(Some(DeliveryTier::Fast)).unwrap();

        let err = session.place_order().await.unwrap_err();
        assert!(matches!(err, CheckoutError::Placement(ApiError::Unavailable(_))));
        assert_eq!(session.status(), OrderStatus::Failed);
        assert_eq!(session.cart().item_count(), 3);
        assert_eq!(session.selection().selected_delivery_type(), Some(DeliveryTier::Fast));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rate_limited_by_email() {
        let limiter = RateLimiter::new(RateLimitConfig {
            max_requests: 1,
            window: Duration::from_secs(60),
            max_keys: 100,
        });
        assert!(limiter.check("jane@doe.com"));

        let (mut cart, mut selection, mut steps) = stores();
        let mut session = CheckoutSession::new(&mut cart, &mut selection, &mut steps, MockApi::instant())
            .with_rate_limiter(&limiter);
        fill_form(&mut session);
        session.select_city(Some(CityId::new(1)));
        session.select_delivery_tier(Some(DeliveryTier::Slow)).unwrap();

        assert!(matches!(
            session.place_order().await,
            Err(CheckoutError::RateLimited)
        ));
        assert_eq!(session.status(), OrderStatus::Idle);
    }

    #[test]
    fn test_next_step_requires_valid_information() {
        let (mut cart, mut selection, mut steps) = stores();
        let mut session = CheckoutSession::new(&mut cart, &mut selection, &mut steps, MockApi::instant());

        let err = session.next_step().unwrap_err();
        let NavigationError::StepIncomplete { blocking, errors, .. } = err;
        assert_eq!(blocking, CheckoutStep::Information);
        assert_eq!(errors.get("firstName").map(String::as_str), Some("firstName is required"));
        assert_eq!(session.current_step(), CheckoutStep::Information);

        fill_form(&mut session);
        session.next_step().unwrap();
        assert_eq!(session.current_step(), CheckoutStep::Delivery);
    }

    #[test]
    fn test_guarded_jump_forward_blocked_back_allowed() {
        let (mut cart, mut selection, mut steps) = stores();
        let mut session = CheckoutSession::new(&mut cart, &mut selection, &mut steps, MockApi::instant());
        fill_form(&mut session);

        let err = session.go_to_step(CheckoutStep::Summary).unwrap_err();
        let NavigationError::StepIncomplete { blocking, errors, .. } = err;
        assert_eq!(blocking, CheckoutStep::Delivery);
        assert_eq!(errors.get("city").map(String::as_str), Some("Please select a city"));

        session.go_to_step(CheckoutStep::Delivery).unwrap();
        session.go_to_step(CheckoutStep::Information).unwrap();
        assert_eq!(session.current_step(), CheckoutStep::Information);
    }

    #[test]
    fn test_guarded_jump_back_after_editing_earlier_step() {
        let (mut cart, mut selection, mut steps) = stores();
        let mut session = CheckoutSession::new(&mut cart, &mut selection, &mut steps, MockApi::instant());
        fill_form(&mut session);
        session.select_city(Some(CityId::new(1)));
        session.select_delivery_tier(Some(DeliveryTier::Fast)).unwrap();
        session.go_to_step(CheckoutStep::Summary).unwrap();

        session.form_mut().customer_info.first_name.clear();
        session.go_to_step(CheckoutStep::Delivery).unwrap();
        assert_eq!(session.current_step(), CheckoutStep::Delivery);
        session.go_to_step(CheckoutStep::Delivery).unwrap();

        let err = session.go_to_step(CheckoutStep::Summary).unwrap_err();
        let NavigationError::StepIncomplete { blocking, .. } = err;
        assert_eq!(blocking, CheckoutStep::Information);
        assert_eq!(session.current_step(), CheckoutStep::Delivery);
    }

    #[test]
    fn test_free_navigation_jumps_anywhere() {
        let (mut cart, mut selection, mut steps) = stores();
        let mut session = CheckoutSession::new(&mut cart, &mut selection, &mut steps, MockApi::instant())
            .with_navigation(StepNavigation::Free);
        session.go_to_step(CheckoutStep::Summary).unwrap();
        assert_eq!(session.current_step(), CheckoutStep::Summary);
    }

    #[test]
    fn test_user_prefill_and_new_checkout() {
        let (mut cart, mut selection, mut steps) = stores();
        let users = UserStore::with_mock_user();
        let mut session = CheckoutSession::new(&mut cart, &mut selection, &mut steps, MockApi::instant())
            .with_user(&users);
        assert_eq!(session.form().customer_info.first_name, "Donald");

        session.form_mut().customer_info.first_name = "Scrooge".to_string();
        session.go_to_step(CheckoutStep::Delivery).unwrap();
        session.start_new_checkout();
        assert_eq!(session.form().customer_info.first_name, "Donald");
        assert_eq!(session.current_step(), CheckoutStep::Information);
        assert_eq!(session.status(), OrderStatus::Idle);
    }

    #[test]
    fn test_available_tiers_follow_city() {
        let (mut cart, mut selection, mut steps) = stores();
        let mut session = CheckoutSession::new(&mut cart, &mut selection, &mut steps, MockApi::instant());
        assert!(session.available_tiers().is_empty());

        session.select_city(Some(CityId::new(6)));
        assert_eq!(session.available_tiers(), vec![DeliveryTier::Fast]);
        assert!(session.select_delivery_tier(Some(DeliveryTier::Slow)).is_err());
        assert_eq!(session.delivery_options()[0].price, "$45");
    }

    #[tokio::test(start_paused = true)]
    async fn test_load_catalog() {
        let mut cart = CartStore::new();
        let mut selection = CheckoutSelectionStore::new();
        load_catalog(&MockApi::default(), &mut cart, &mut selection)
            .await
            .unwrap();
        assert_eq!(cart.total(), Decimal::new(262_750, 2));
        assert_eq!(selection.cities().len(), 10);
    }
}
