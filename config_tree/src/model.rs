//! Explicit capabilities for tenant and creator field conventions.
//!
//! Models opt in to the conventions by implementing [`TenantScoped`] or
//! [`CreatorScoped`] and exposing them through [`Model`]. A model that embeds
//! another model carrying the fields delegates to it:
//!
//! ```rust
//! use config_tree::model::{Model, TenantScoped, stamp_tenant, supports_multi_tenant};
//!
//! #[derive(Default)]
//! struct Tenancy {
//!     tenant_id: Option<String>,
//! }
//!
//! impl TenantScoped for Tenancy {
//!     fn tenant_id(&self) -> Option<&str> {
//!         self.tenant_id.as_deref()
//!     }
//!
//!     fn set_tenant_id(&mut self, id: String) {
//!         self.tenant_id = Some(id);
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Order {
//!     tenancy: Tenancy,
//!     total: u64,
//! }
//!
//! impl Model for Order {
//!     fn tenant_scope(&self) -> Option<&dyn TenantScoped> {
//!         Some(&self.tenancy)
//!     }
//!
//!     fn tenant_scope_mut(&mut self) -> Option<&mut dyn TenantScoped> {
//!         Some(&mut self.tenancy)
//!     }
//! }
//!
//! let mut order = Order::default();
//! assert!(supports_multi_tenant(&order));
//! assert!(stamp_tenant(&mut order, "acme"));
//! assert_eq!(order.tenancy.tenant_id(), Some("acme"));
//! ```

/// A model carrying a tenant identifier.
pub trait TenantScoped {
    /// Current tenant identifier, if assigned.
    fn tenant_id(&self) -> Option<&str>;

    /// Assign the tenant identifier.
    fn set_tenant_id(&mut self, id: String);
}

/// A model recording which principal created it.
pub trait CreatorScoped {
    /// Current creator identifier, if assigned.
    fn creator_id(&self) -> Option<&str>;

    /// Assign the creator identifier.
    fn set_creator_id(&mut self, id: String);
}

/// Access to the optional capabilities of a model.
///
/// Every accessor defaults to `None`; models override the ones they support.
pub trait Model {
    /// Tenant capability, when the model is tenant scoped.
    fn tenant_scope(&self) -> Option<&dyn TenantScoped> {
        None
    }

    /// Mutable tenant capability, when the model is tenant scoped.
    fn tenant_scope_mut(&mut self) -> Option<&mut dyn TenantScoped> {
        None
    }

    /// Creator capability, when the model records its creator.
    fn creator_scope(&self) -> Option<&dyn CreatorScoped> {
        None
    }

    /// Mutable creator capability, when the model records its creator.
    fn creator_scope_mut(&mut self) -> Option<&mut dyn CreatorScoped> {
        None
    }
}

/// A fresh zero-value instance of the same concrete type.
///
/// Implemented for every [`Default`] type.
pub trait FreshInstance {
    /// Construct a new, empty instance of `Self`.
    #[must_use]
    fn fresh(&self) -> Self;
}

impl<T: Default> FreshInstance for T {
    fn fresh(&self) -> Self {
        Self::default()
    }
}

/// Whether `model` follows the tenant convention.
#[must_use]
pub fn supports_multi_tenant(model: &dyn Model) -> bool {
    model.tenant_scope().is_some()
}

/// Whether `model` follows the creator convention.
#[must_use]
pub fn supports_creator(model: &dyn Model) -> bool {
    model.creator_scope().is_some()
}

/// Assign the tenant identifier when `model` is tenant scoped.
///
/// Returns `true` when the identifier was applied.
pub fn stamp_tenant(model: &mut dyn Model, id: impl Into<String>) -> bool {
    model.tenant_scope_mut().is_some_and(|scope| {
        scope.set_tenant_id(id.into());
        true
    })
}

/// Assign the creator identifier when `model` records its creator.
///
/// Returns `true` when the identifier was applied.
pub fn stamp_creator(model: &mut dyn Model, id: impl Into<String>) -> bool {
    model.creator_scope_mut().is_some_and(|scope| {
        scope.set_creator_id(id.into());
        true
    })
}
