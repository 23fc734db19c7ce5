//! The domain store: all client-side state and the commands that mutate it.
//!
//! Commands run synchronously to completion; there is no interleaving and no
//! locking. Derived values (`cart_total`, `cart_item_count`, ...) are plain
//! functions recomputed from current state on every read. After every cart
//! or session mutation the store mirrors the affected snapshot through the
//! persistence adapter; those writes are fire-and-forget and can never fail
//! a command.
//!
//! The one asynchronous concern, description generation, is split into a
//! synchronous begin/finish handshake so the store itself never suspends:
//! [`PosStore::begin_description_generation`] hands the caller a product
//! name and raises the in-flight flag, the caller awaits the generator, and
//! [`PosStore::finish_description_generation`] records the outcome.

pub mod seed;

use rust_decimal::Decimal;
use tracing::{debug, info};

use polimarket_core::{Price, ProductId, Role, Username};

use crate::models::{CartItem, CurrentUser, Product, ProductDraft, SellerDraft, User};
use crate::storage::{Persistence, keys};

/// Login failure message (bad username or password).
const LOGIN_ERROR: &str = "Usuario o contraseña incorrectos.";

/// Add-seller failure message (duplicate username).
const DUPLICATE_USERNAME_ERROR: &str = "El nombre de usuario ya existe.";

/// Transient view state: which panels are open and which product is
/// selected.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Product whose detail panel is open, if any.
    pub selected: Option<ProductId>,
    /// Whether the product detail panel is open.
    pub detail_open: bool,
    /// Whether the add-product form is open.
    pub add_product_open: bool,
    /// Whether the manage-sellers panel is open.
    pub manage_sellers_open: bool,
}

/// State of the AI description panel for the selected product.
#[derive(Debug, Clone, Default)]
pub struct AiPanel {
    /// Generated description text; empty until a generation finishes.
    pub description: String,
    /// Whether a generation request is in flight.
    pub generating: bool,
}

/// The domain store.
///
/// Owns the catalog, cart, user list, session, and transient form/view
/// state, and exposes every user-facing command plus the derived read-only
/// views. Business-rule failures (bad credentials, duplicate usernames) are
/// recorded as observable message slots rather than returned as errors;
/// validation failures block their command silently.
pub struct PosStore {
    catalog: Vec<Product>,
    cart: Vec<CartItem>,
    users: Vec<User>,
    session: Option<CurrentUser>,
    login_error: Option<String>,
    add_seller_error: Option<String>,
    new_product: ProductDraft,
    new_seller: SellerDraft,
    view: ViewState,
    ai: AiPanel,
    persistence: Persistence,
}

impl PosStore {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Build a store over the given persistence adapter.
    ///
    /// Restores the cart and session snapshots (missing or malformed content
    /// loads as empty/none) and installs the seed catalog and user list.
    #[must_use]
    pub fn new(persistence: Persistence) -> Self {
        let cart: Vec<CartItem> = persistence.load(keys::CART).unwrap_or_default();
        let session: Option<CurrentUser> = persistence.load(keys::SESSION);

        debug!(
            cart_lines = cart.len(),
            restored_session = session.is_some(),
            "store initialized"
        );

        Self {
            catalog: seed::catalog(),
            cart,
            users: seed::users(),
            session,
            login_error: None,
            add_seller_error: None,
            new_product: ProductDraft::default(),
            new_seller: SellerDraft::default(),
            view: ViewState::default(),
            ai: AiPanel::default(),
            persistence,
        }
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    /// Attempt to log in with exact-match credentials.
    ///
    /// Credentials are compared as plain strings by explicit demo design
    /// (see [`User`]). On success the session holds the password-free
    /// projection, the login error clears, and the session is persisted; on
    /// failure the login error slot is set and the session is untouched.
    pub fn login(&mut self, username: &str, password: &str) -> bool {
        let found = self
            .users
            .iter()
            .find(|u| u.username.as_str() == username && u.password == password);

        match found {
            Some(user) => {
                info!(username, "login succeeded");
                self.session = Some(user.to_current());
                self.login_error = None;
                self.persist_session();
                true
            }
            None => {
                debug!(username, "login failed");
                self.login_error = Some(LOGIN_ERROR.to_owned());
                false
            }
        }
    }

    /// Clear the session unconditionally and drop the persisted snapshot.
    pub fn logout(&mut self) {
        self.session = None;
        self.persist_session();
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Add one unit of a product to the cart.
    ///
    /// No-op when the product is unknown or has no stock. The first add
    /// snapshots the product's name and price; later catalog edits do not
    /// flow into existing lines.
    pub fn add_to_cart(&mut self, product_id: &ProductId) {
        let Some(product) = self.catalog.iter().find(|p| &p.id == product_id) else {
            debug!(%product_id, "add_to_cart ignored, unknown product");
            return;
        };

        if product.stock <= 0 {
            debug!(%product_id, "add_to_cart ignored, out of stock");
            return;
        }

        if let Some(line) = self.cart.iter_mut().find(|l| &l.product_id == product_id) {
            line.quantity += 1;
        } else {
            self.cart.push(CartItem {
                product_id: product.id.clone(),
                name: product.name.clone(),
                price: product.price,
                quantity: 1,
            });
        }

        self.persist_cart();
    }

    /// Apply a signed quantity delta to a cart line.
    ///
    /// A resulting quantity of zero or less removes the line entirely.
    /// Unknown product ids are a no-op.
    pub fn update_quantity(&mut self, product_id: &ProductId, delta: i64) {
        let Some(index) = self.cart.iter().position(|l| &l.product_id == product_id) else {
            return;
        };

        let Some(line) = self.cart.get_mut(index) else {
            return;
        };

        let new_quantity = i64::from(line.quantity) + delta;
        if new_quantity > 0 {
            line.quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
        } else {
            self.cart.remove(index);
        }

        self.persist_cart();
    }

    /// Settle the cart against catalog stock.
    ///
    /// Decrements each matching product's stock by the line quantity, clears
    /// the cart, and returns the pre-clear total for confirmation. Stock is
    /// not clamped: checking out more units than are on hand drives it
    /// negative. Returns `None` on an empty cart, which also makes a
    /// repeated invocation a no-op.
    pub fn checkout(&mut self) -> Option<Price> {
        if self.cart.is_empty() {
            return None;
        }

        let total = self.cart_total();

        for line in &self.cart {
            if let Some(product) = self.catalog.iter_mut().find(|p| p.id == line.product_id) {
                product.stock -= i64::from(line.quantity);
            }
        }

        info!(%total, lines = self.cart.len(), "checkout complete");
        self.cart.clear();
        self.persist_cart();
        Some(total)
    }

    // =========================================================================
    // Catalog management
    // =========================================================================

    /// Submit the add-product form.
    ///
    /// Rejected without any state change unless the draft is valid. On
    /// success the product gets a freshly generated id, is prepended to the
    /// catalog (newest first), and the form closes with a reset draft.
    pub fn submit_new_product(&mut self) -> bool {
        if !self.new_product.is_valid() {
            return false;
        }

        let draft = std::mem::take(&mut self.new_product);
        let (Some(price), Some(stock)) = (draft.price, draft.stock) else {
            // unreachable: is_valid() requires both fields
            return false;
        };

        let product = Product {
            id: ProductId::generate(),
            name: draft.name,
            price: Price::new(price),
            stock,
            image_url: draft.image_url,
        };

        info!(id = %product.id, name = %product.name, "product added");
        self.catalog.insert(0, product);
        self.view.add_product_open = false;
        true
    }

    // =========================================================================
    // Seller management
    // =========================================================================

    /// Submit the add-seller form.
    ///
    /// Invalid drafts are rejected silently (the validity flag is the only
    /// signal). A username that collides case-insensitively with any
    /// existing user sets the add-seller error and leaves state untouched.
    /// New sellers get the fixed default password.
    pub fn submit_new_seller(&mut self) -> bool {
        if !self.new_seller.is_valid() {
            return false;
        }

        let Ok(username) = Username::parse(&self.new_seller.username) else {
            // unreachable: is_valid() requires a non-blank username
            return false;
        };

        if self.users.iter().any(|u| u.username.eq_ignore_case(&username)) {
            debug!(%username, "add seller rejected, duplicate username");
            self.add_seller_error = Some(DUPLICATE_USERNAME_ERROR.to_owned());
            return false;
        }

        let draft = std::mem::take(&mut self.new_seller);
        info!(%username, "seller added");
        self.users.push(User {
            username,
            password: seed::DEFAULT_PASSWORD.to_owned(),
            role: Role::Seller,
            name: draft.name,
        });
        self.add_seller_error = None;
        true
    }

    /// Remove every user whose username matches `username` exactly.
    ///
    /// The operation itself carries no role check; callers are expected to
    /// offer deletion only for seller rows, as the original interface does.
    /// Unknown usernames are a no-op.
    pub fn delete_seller(&mut self, username: &Username) {
        let before = self.users.len();
        self.users.retain(|u| &u.username != username);
        if self.users.len() != before {
            info!(%username, "seller deleted");
        }
    }

    // =========================================================================
    // Product detail & description generation
    // =========================================================================

    /// Open the product detail panel, clearing any previous AI description.
    ///
    /// Returns `false` (and changes nothing) for an unknown id.
    pub fn open_product(&mut self, product_id: &ProductId) -> bool {
        if !self.catalog.iter().any(|p| &p.id == product_id) {
            return false;
        }

        self.view.selected = Some(product_id.clone());
        self.view.detail_open = true;
        self.ai.description.clear();
        true
    }

    /// Close the product detail panel.
    pub fn close_product(&mut self) {
        self.view.detail_open = false;
        self.view.selected = None;
    }

    /// Start a description generation for the selected product.
    ///
    /// Returns the product name to generate for and raises the in-flight
    /// flag. Returns `None` when nothing is selected or a generation is
    /// already in flight: a second trigger while one is pending is ignored.
    pub fn begin_description_generation(&mut self) -> Option<String> {
        if self.ai.generating {
            debug!("description generation already in flight, ignoring");
            return None;
        }

        let selected = self.view.selected.as_ref()?;
        let product = self.catalog.iter().find(|p| &p.id == selected)?;
        let name = product.name.clone();

        self.ai.generating = true;
        self.ai.description.clear();
        Some(name)
    }

    /// Record the outcome of a generation started with
    /// [`Self::begin_description_generation`] and lower the in-flight flag.
    pub fn finish_description_generation(&mut self, description: String) {
        self.ai.description = description;
        self.ai.generating = false;
    }

    // =========================================================================
    // Panels & form buffers
    // =========================================================================

    /// Open the add-product form.
    pub fn open_add_product_form(&mut self) {
        self.view.add_product_open = true;
    }

    /// Close the add-product form, discarding the draft.
    pub fn close_add_product_form(&mut self) {
        self.view.add_product_open = false;
        self.new_product = ProductDraft::default();
    }

    /// Open the manage-sellers panel, clearing a stale add-seller error.
    pub fn open_manage_sellers(&mut self) {
        self.add_seller_error = None;
        self.view.manage_sellers_open = true;
    }

    /// Close the manage-sellers panel.
    pub fn close_manage_sellers(&mut self) {
        self.view.manage_sellers_open = false;
    }

    /// Replace the product draft's name.
    pub fn set_new_product_name(&mut self, name: impl Into<String>) {
        self.new_product.name = name.into();
    }

    /// Replace the product draft's price (`None` for unparseable input).
    pub fn set_new_product_price(&mut self, price: Option<Decimal>) {
        self.new_product.price = price;
    }

    /// Replace the product draft's stock (`None` for unparseable input).
    pub fn set_new_product_stock(&mut self, stock: Option<i64>) {
        self.new_product.stock = stock;
    }

    /// Replace the product draft's image URL.
    pub fn set_new_product_image_url(&mut self, image_url: impl Into<String>) {
        self.new_product.image_url = image_url.into();
    }

    /// Replace the seller draft's name, clearing any stale error.
    pub fn set_new_seller_name(&mut self, name: impl Into<String>) {
        self.new_seller.name = name.into();
        self.add_seller_error = None;
    }

    /// Replace the seller draft's username, clearing any stale error.
    pub fn set_new_seller_username(&mut self, username: impl Into<String>) {
        self.new_seller.username = username.into();
        self.add_seller_error = None;
    }

    // =========================================================================
    // Derived views (recomputed on every read)
    // =========================================================================

    /// Total of price × quantity over all cart lines.
    #[must_use]
    pub fn cart_total(&self) -> Price {
        self.cart.iter().map(CartItem::line_total).sum()
    }

    /// Total number of units in the cart.
    #[must_use]
    pub fn cart_item_count(&self) -> u32 {
        self.cart.iter().map(|l| l.quantity).sum()
    }

    /// Users with the seller role.
    pub fn sellers(&self) -> impl Iterator<Item = &User> {
        self.users.iter().filter(|u| u.role == Role::Seller)
    }

    /// Whether the product draft passes every field predicate.
    #[must_use]
    pub fn new_product_valid(&self) -> bool {
        self.new_product.is_valid()
    }

    /// Whether the seller draft passes every field predicate.
    #[must_use]
    pub fn new_seller_valid(&self) -> bool {
        self.new_seller.is_valid()
    }

    // =========================================================================
    // State accessors
    // =========================================================================

    /// The full ordered catalog.
    #[must_use]
    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    /// The current cart lines.
    #[must_use]
    pub fn cart(&self) -> &[CartItem] {
        &self.cart
    }

    /// The authoritative user list.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// The logged-in user's projection, if any.
    #[must_use]
    pub fn session(&self) -> Option<&CurrentUser> {
        self.session.as_ref()
    }

    /// The last login failure message, if any.
    #[must_use]
    pub fn login_error(&self) -> Option<&str> {
        self.login_error.as_deref()
    }

    /// The last add-seller failure message, if any.
    #[must_use]
    pub fn add_seller_error(&self) -> Option<&str> {
        self.add_seller_error.as_deref()
    }

    /// The add-product draft buffer.
    #[must_use]
    pub fn new_product(&self) -> &ProductDraft {
        &self.new_product
    }

    /// The add-seller draft buffer.
    #[must_use]
    pub fn new_seller(&self) -> &SellerDraft {
        &self.new_seller
    }

    /// The transient view state.
    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// The AI description panel state.
    #[must_use]
    pub fn ai(&self) -> &AiPanel {
        &self.ai
    }

    // =========================================================================
    // Persistence side effects
    // =========================================================================

    /// Mirror the cart after a mutation.
    fn persist_cart(&self) {
        self.persistence.save(keys::CART, &self.cart);
    }

    /// Mirror the session after a change. A cleared session removes the key
    /// rather than writing an empty value.
    fn persist_session(&self) {
        match &self.session {
            Some(user) => self.persistence.save(keys::SESSION, user),
            None => self.persistence.remove(keys::SESSION),
        }
    }
}
