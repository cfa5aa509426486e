use core::fmt::{Debug, Display};

use num_traits::Zero;

/// A trait representing a payment amount or channel capacity, typically an integer number of
/// satoshis.
pub trait Amount: Copy + Ord + Zero + Debug + Display + Default {}

impl Amount for u64 {}

impl Amount for i64 {}

impl Amount for i32 {}
