//! Member Model
//!
//! A gym member is either a paying [`Customer`] or a [`Staff`] employee.
//! Both carry the same common fields (name, address, membership ID,
//! bracelet ID); everything else lives on the concrete struct. [`Member`]
//! closes the two kinds into one tagged variant, so a record's kind is
//! fixed at construction and no later operation can change it.
//!
//! Fields are deliberately unvalidated: records accept whatever they are
//! given, and callers that need stricter rules add them on top.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::util::IdSource;

/// Gym credits granted to every newly constructed customer.
pub const STARTING_GYM_CREDITS: i32 = 20;

/// Member kind discriminator
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberKind {
    /// Paying client
    #[default]
    Customer,
    /// Gym employee
    Staff,
}

/// Customer subscription tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionLevel {
    #[default]
    Inactive,
    Basic,
    Premium,
    Deluxe,
}

/// Staff security clearance
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Clearance {
    #[default]
    General,
    Manager,
    Administrator,
}

/// Paying gym client.
///
/// A freshly constructed customer is blank apart from the starter credit
/// balance; fill it in with [`Customer::initialize`] or by assigning
/// fields directly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    pub name: String,
    pub address: String,
    /// Drawn from the ID source at initialization; may be overridden.
    pub membership_id: u64,
    /// Identifies the physical access bracelet.
    pub bracelet_id: u64,
    pub credit_card_number: u64,
    /// Prepaid balance. May go negative; no floor is enforced.
    pub gym_credits: i32,
    pub subscription_level: SubscriptionLevel,
}

impl Customer {
    /// Blank customer: empty strings, zero IDs, starter credit balance.
    pub fn new() -> Self {
        Self {
            name: String::new(),
            address: String::new(),
            membership_id: 0,
            bracelet_id: 0,
            credit_card_number: 0,
            gym_credits: STARTING_GYM_CREDITS,
            subscription_level: SubscriptionLevel::Inactive,
        }
    }

    /// Fills in a blank customer.
    ///
    /// Draws a fresh membership ID from `ids` and assigns every supplied
    /// field. The credit balance set at construction is left untouched.
    /// Not idempotent: a second call re-draws the ID and overwrites the
    /// fields again.
    pub fn initialize(
        &mut self,
        ids: &mut dyn IdSource,
        name: impl Into<String>,
        address: impl Into<String>,
        credit_card_number: u64,
        bracelet_id: u64,
        subscription_level: SubscriptionLevel,
    ) {
        self.membership_id = ids.next_id();
        self.name = name.into();
        self.address = address.into();
        self.credit_card_number = credit_card_number;
        self.bracelet_id = bracelet_id;
        self.subscription_level = subscription_level;
    }

    /// Adds to the prepaid balance.
    pub fn add_gym_credits(&mut self, amount: i32) {
        self.gym_credits += amount;
    }

    /// Deducts from the prepaid balance. The result may be negative.
    pub fn deduct_gym_credits(&mut self, amount: i32) {
        self.gym_credits -= amount;
    }
}

impl Default for Customer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "{}", self.address)?;
        writeln!(f, "{}", self.membership_id)?;
        writeln!(f, "{}", self.bracelet_id)?;
        writeln!(f, "{}", self.credit_card_number)?;
        write!(f, "{}", self.gym_credits)
    }
}

/// Gym employee.
///
/// Shares the common member fields and adds an employee ID and a security
/// clearance. Like [`Customer`], a fresh record is blank until
/// [`Staff::initialize`] runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Staff {
    pub name: String,
    pub address: String,
    /// Drawn from the ID source at initialization; may be overridden.
    pub membership_id: u64,
    /// Identifies the physical access bracelet.
    pub bracelet_id: u64,
    pub employee_id: u64,
    pub clearance: Clearance,
}

impl Staff {
    /// Blank staff record: empty strings, zero IDs, general clearance.
    pub fn new() -> Self {
        Self {
            name: String::new(),
            address: String::new(),
            membership_id: 0,
            bracelet_id: 0,
            employee_id: 0,
            clearance: Clearance::General,
        }
    }

    /// Fills in a blank staff record.
    ///
    /// Draws fresh membership and employee IDs from `ids`. The credit-card
    /// argument is accepted but never consulted; staff keep no card on
    /// file and the parameter only keeps the two initialize signatures
    /// interchangeable at call sites.
    pub fn initialize(
        &mut self,
        ids: &mut dyn IdSource,
        name: impl Into<String>,
        address: impl Into<String>,
        _credit_card_number: u64,
        bracelet_id: u64,
        clearance: Clearance,
    ) {
        self.membership_id = ids.next_id();
        self.employee_id = ids.next_id();
        self.name = name.into();
        self.address = address.into();
        self.bracelet_id = bracelet_id;
        self.clearance = clearance;
    }
}

impl Default for Staff {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Staff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "{}", self.address)?;
        writeln!(f, "{}", self.membership_id)?;
        writeln!(f, "{}", self.bracelet_id)?;
        write!(f, "{}", self.employee_id)
    }
}

/// A gym member of either kind.
///
/// The variant is the kind: constructing the record decides it once, and
/// the common-field interface below dispatches over it. Holding a
/// `Member` is how callers stay agnostic of the concrete kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Member {
    Customer(Customer),
    Staff(Staff),
}

impl Member {
    /// Which kind this record was constructed as.
    pub fn kind(&self) -> MemberKind {
        match self {
            Member::Customer(_) => MemberKind::Customer,
            Member::Staff(_) => MemberKind::Staff,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Member::Customer(c) => &c.name,
            Member::Staff(s) => &s.name,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        match self {
            Member::Customer(c) => c.name = name.into(),
            Member::Staff(s) => s.name = name.into(),
        }
    }

    pub fn address(&self) -> &str {
        match self {
            Member::Customer(c) => &c.address,
            Member::Staff(s) => &s.address,
        }
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        match self {
            Member::Customer(c) => c.address = address.into(),
            Member::Staff(s) => s.address = address.into(),
        }
    }

    pub fn membership_id(&self) -> u64 {
        match self {
            Member::Customer(c) => c.membership_id,
            Member::Staff(s) => s.membership_id,
        }
    }

    pub fn set_membership_id(&mut self, id: u64) {
        match self {
            Member::Customer(c) => c.membership_id = id,
            Member::Staff(s) => s.membership_id = id,
        }
    }

    pub fn bracelet_id(&self) -> u64 {
        match self {
            Member::Customer(c) => c.bracelet_id,
            Member::Staff(s) => s.bracelet_id,
        }
    }

    pub fn set_bracelet_id(&mut self, id: u64) {
        match self {
            Member::Customer(c) => c.bracelet_id = id,
            Member::Staff(s) => s.bracelet_id = id,
        }
    }

    /// The customer profile, if this is a customer record.
    pub fn as_customer(&self) -> Option<&Customer> {
        match self {
            Member::Customer(c) => Some(c),
            Member::Staff(_) => None,
        }
    }

    /// Mutable customer profile, if this is a customer record.
    pub fn as_customer_mut(&mut self) -> Option<&mut Customer> {
        match self {
            Member::Customer(c) => Some(c),
            Member::Staff(_) => None,
        }
    }

    /// The staff profile, if this is a staff record.
    pub fn as_staff(&self) -> Option<&Staff> {
        match self {
            Member::Customer(_) => None,
            Member::Staff(s) => Some(s),
        }
    }

    /// Mutable staff profile, if this is a staff record.
    pub fn as_staff_mut(&mut self) -> Option<&mut Staff> {
        match self {
            Member::Customer(_) => None,
            Member::Staff(s) => Some(s),
        }
    }
}

impl From<Customer> for Member {
    fn from(customer: Customer) -> Self {
        Member::Customer(customer)
    }
}

impl From<Staff> for Member {
    fn from(staff: Staff) -> Self {
        Member::Staff(staff)
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Member::Customer(c) => fmt::Display::fmt(c, f),
            Member::Staff(s) => fmt::Display::fmt(s, f),
        }
    }
}
