//! Member record codec
//!
//! Encodes one [`Member`] into a self-contained binary message and
//! decodes it back. The message carries the four common fields, a kind
//! discriminator, and exactly one sub-message matching the discriminator;
//! the sub-message for the other kind is never written.
//!
//! Wire-level enum codes are fixed and independent of in-memory ordering.
//! Decoding maps an unrecognized code to the lowest code's value instead
//! of failing, and skips field numbers it does not know.

use shared::models::{Clearance, Customer, Member, MemberKind, Staff, SubscriptionLevel};

use crate::error::{Result, StoreError};
use crate::wire::{self, WIRE_LEN, WIRE_VARINT, WireReader};

// Outer message fields
const F_NAME: u32 = 1;
const F_ADDRESS: u32 = 2;
const F_MEMBERSHIP_ID: u32 = 3;
const F_BRACELET_ID: u32 = 4;
const F_MEMBER_KIND: u32 = 5;
const F_CUSTOMER: u32 = 6;
const F_STAFF: u32 = 7;

// Customer sub-message fields
const F_CREDIT_CARD_NUM: u32 = 1;
const F_GYM_CREDITS: u32 = 2;
const F_SUBSCRIPTION_LEVEL: u32 = 3;

// Staff sub-message fields
const F_EMPLOYEE_ID: u32 = 1;
const F_STAFF_CLEARANCE: u32 = 2;

fn kind_to_wire(kind: MemberKind) -> u64 {
    match kind {
        MemberKind::Customer => 0,
        MemberKind::Staff => 1,
    }
}

fn kind_from_wire(code: u64) -> MemberKind {
    match code {
        1 => MemberKind::Staff,
        _ => MemberKind::Customer,
    }
}

fn subscription_to_wire(level: SubscriptionLevel) -> u64 {
    match level {
        SubscriptionLevel::Inactive => 0,
        SubscriptionLevel::Basic => 1,
        SubscriptionLevel::Premium => 2,
        SubscriptionLevel::Deluxe => 3,
    }
}

fn subscription_from_wire(code: u64) -> SubscriptionLevel {
    match code {
        1 => SubscriptionLevel::Basic,
        2 => SubscriptionLevel::Premium,
        3 => SubscriptionLevel::Deluxe,
        _ => SubscriptionLevel::Inactive,
    }
}

fn clearance_to_wire(clearance: Clearance) -> u64 {
    match clearance {
        Clearance::General => 0,
        Clearance::Manager => 1,
        Clearance::Administrator => 2,
    }
}

fn clearance_from_wire(code: u64) -> Clearance {
    match code {
        1 => Clearance::Manager,
        2 => Clearance::Administrator,
        _ => Clearance::General,
    }
}

/// Encodes a member into a standalone byte buffer.
///
/// Every field of the record's kind is written explicitly, including
/// zero values; only the non-matching sub-message is absent.
pub fn encode(member: &Member) -> Vec<u8> {
    let mut buf = Vec::with_capacity(64);
    wire::put_str(&mut buf, F_NAME, member.name());
    wire::put_str(&mut buf, F_ADDRESS, member.address());
    wire::put_uint(&mut buf, F_MEMBERSHIP_ID, member.membership_id());
    wire::put_uint(&mut buf, F_BRACELET_ID, member.bracelet_id());
    wire::put_uint(&mut buf, F_MEMBER_KIND, kind_to_wire(member.kind()));
    match member {
        Member::Customer(c) => wire::put_bytes(&mut buf, F_CUSTOMER, &encode_customer(c)),
        Member::Staff(s) => wire::put_bytes(&mut buf, F_STAFF, &encode_staff(s)),
    }
    buf
}

fn encode_customer(c: &Customer) -> Vec<u8> {
    let mut buf = Vec::with_capacity(16);
    wire::put_uint(&mut buf, F_CREDIT_CARD_NUM, c.credit_card_number);
    wire::put_int(&mut buf, F_GYM_CREDITS, i64::from(c.gym_credits));
    wire::put_uint(
        &mut buf,
        F_SUBSCRIPTION_LEVEL,
        subscription_to_wire(c.subscription_level),
    );
    buf
}

fn encode_staff(s: &Staff) -> Vec<u8> {
    let mut buf = Vec::with_capacity(16);
    wire::put_uint(&mut buf, F_EMPLOYEE_ID, s.employee_id);
    wire::put_uint(&mut buf, F_STAFF_CLEARANCE, clearance_to_wire(s.clearance));
    buf
}

/// Decodes a member from an encoded buffer.
///
/// Returns a fully owned record. Fields absent from the input keep their
/// construction-time defaults; a sub-message that does not match the kind
/// discriminator is ignored.
pub fn decode(bytes: &[u8]) -> Result<Member> {
    let mut reader = WireReader::new(bytes);
    let mut name = String::new();
    let mut address = String::new();
    let mut membership_id = 0u64;
    let mut bracelet_id = 0u64;
    let mut kind = MemberKind::default();
    let mut customer: Option<Customer> = None;
    let mut staff: Option<Staff> = None;

    while let Some((field, wire_type)) = reader.tag()? {
        match (field, wire_type) {
            (F_NAME, WIRE_LEN) => name = read_string(&mut reader)?,
            (F_ADDRESS, WIRE_LEN) => address = read_string(&mut reader)?,
            (F_MEMBERSHIP_ID, WIRE_VARINT) => membership_id = reader.varint()?,
            (F_BRACELET_ID, WIRE_VARINT) => bracelet_id = reader.varint()?,
            (F_MEMBER_KIND, WIRE_VARINT) => kind = kind_from_wire(reader.varint()?),
            (F_CUSTOMER, WIRE_LEN) => customer = Some(decode_customer(reader.bytes()?)?),
            (F_STAFF, WIRE_LEN) => staff = Some(decode_staff(reader.bytes()?)?),
            (_, other) => reader.skip(other)?,
        }
    }

    let mut member = match kind {
        MemberKind::Customer => Member::Customer(customer.unwrap_or_default()),
        MemberKind::Staff => Member::Staff(staff.unwrap_or_default()),
    };
    member.set_name(name);
    member.set_address(address);
    member.set_membership_id(membership_id);
    member.set_bracelet_id(bracelet_id);
    Ok(member)
}

fn decode_customer(bytes: &[u8]) -> Result<Customer> {
    let mut reader = WireReader::new(bytes);
    let mut c = Customer::new();
    while let Some((field, wire_type)) = reader.tag()? {
        match (field, wire_type) {
            (F_CREDIT_CARD_NUM, WIRE_VARINT) => c.credit_card_number = reader.varint()?,
            (F_GYM_CREDITS, WIRE_VARINT) => c.gym_credits = reader.varint()? as i32,
            (F_SUBSCRIPTION_LEVEL, WIRE_VARINT) => {
                c.subscription_level = subscription_from_wire(reader.varint()?)
            }
            (_, other) => reader.skip(other)?,
        }
    }
    Ok(c)
}

fn decode_staff(bytes: &[u8]) -> Result<Staff> {
    let mut reader = WireReader::new(bytes);
    let mut s = Staff::new();
    while let Some((field, wire_type)) = reader.tag()? {
        match (field, wire_type) {
            (F_EMPLOYEE_ID, WIRE_VARINT) => s.employee_id = reader.varint()?,
            (F_STAFF_CLEARANCE, WIRE_VARINT) => {
                s.clearance = clearance_from_wire(reader.varint()?)
            }
            (_, other) => reader.skip(other)?,
        }
    }
    Ok(s)
}

fn read_string(reader: &mut WireReader<'_>) -> Result<String> {
    let bytes = reader.bytes()?;
    String::from_utf8(bytes.to_vec())
        .map_err(|_| StoreError::Malformed("string field is not UTF-8".into()))
}
