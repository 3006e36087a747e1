//! Prototype registry
//!
//! Owns one canonical blank record per member kind and hands out
//! independent value copies. A caller holding only a registry (or only a
//! [`MemberKind`]) produces records without naming the concrete type,
//! which keeps call sites swappable for a stand-in registry in tests.

use crate::models::{Customer, Member, MemberKind, Staff};

/// Holder of the canonical blank templates.
///
/// The registry owns its templates for its whole lifetime; every record
/// handed out is an independent copy owned by the caller.
#[derive(Debug, Clone, Default)]
pub struct MemberRegistry {
    customer_template: Customer,
    staff_template: Staff,
}

impl MemberRegistry {
    /// Registry with pristine blank templates.
    pub fn new() -> Self {
        Self {
            customer_template: Customer::new(),
            staff_template: Staff::new(),
        }
    }

    /// A fresh customer, value-copied from the template.
    pub fn customer(&self) -> Customer {
        self.customer_template.clone()
    }

    /// A fresh staff record, value-copied from the template.
    pub fn staff(&self) -> Staff {
        self.staff_template.clone()
    }

    /// A fresh blank record of the requested kind.
    pub fn blank(&self, kind: MemberKind) -> Member {
        match kind {
            MemberKind::Customer => Member::Customer(self.customer()),
            MemberKind::Staff => Member::Staff(self.staff()),
        }
    }
}
