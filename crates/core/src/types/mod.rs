//! Core domain types for the store.

mod customer;
mod descriptor;
mod email;
mod line_item;
mod phone;
mod pincode;
mod step;

pub use customer::{CustomerInfo, MobileNumber, MobileNumberError};
pub use descriptor::PaymentIntentDescriptor;
pub use email::{Email, EmailError};
pub use line_item::{CartLineItem, CartTotals, cart_totals};
pub use phone::{PhoneNumber, PhoneNumberError};
pub use pincode::{Pincode, PincodeError};
pub use step::CheckoutStep;
