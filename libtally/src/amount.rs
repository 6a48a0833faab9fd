use std::cmp::Ordering;
use std::ops::{Add, Neg, Sub};

/// A monetary value counted in integer minor units (cents), or an `Unfixed`
/// placeholder whose value will be inferred so its transaction balances.
///
/// Arithmetic on an unfixed amount is a programming error; resolve
/// placeholders through [`Transaction::normalized_entries`][crate::Transaction::normalized_entries]
/// before summing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Amount {
    Fixed(i64),
    Unfixed,
}

impl Amount {
    pub const ZERO: Amount = Amount::Fixed(0);

    pub fn is_fixed(&self) -> bool {
        matches!(self, Amount::Fixed(_))
    }

    pub fn is_zero(&self) -> bool {
        *self == Amount::ZERO
    }

    /// Cent count of a fixed amount. Panics on an unfixed amount.
    pub fn cents(&self) -> i64 {
        match self {
            Amount::Fixed(cents) => *cents,
            Amount::Unfixed => panic!("cents of an unfixed amount"),
        }
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        Amount::Fixed(self.cents() + rhs.cents())
    }
}

impl Sub for Amount {
    type Output = Amount;

    fn sub(self, rhs: Amount) -> Amount {
        Amount::Fixed(self.cents() - rhs.cents())
    }
}

impl Neg for Amount {
    type Output = Amount;

    fn neg(self) -> Amount {
        Amount::Fixed(-self.cents())
    }
}

impl PartialOrd for Amount {
    fn partial_cmp(&self, other: &Amount) -> Option<Ordering> {
        match (self, other) {
            (Amount::Fixed(a), Amount::Fixed(b)) => a.partial_cmp(b),
            (Amount::Unfixed, Amount::Unfixed) => Some(Ordering::Equal),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::amount::Amount;

    #[test]
    fn arithmetic_on_fixed_amounts() {
        assert_eq!(Amount::Fixed(10) + Amount::Fixed(20), Amount::Fixed(30));
        assert_eq!(Amount::Fixed(30) - Amount::Fixed(20), Amount::Fixed(10));
        assert_eq!(-Amount::Fixed(10), Amount::Fixed(-10));
    }

    #[test]
    fn zero_is_fixed_zero_only() {
        assert!(Amount::Fixed(0).is_zero());
        assert!(Amount::ZERO.is_zero());
        assert!(!Amount::Fixed(1).is_zero());
        assert!(!Amount::Unfixed.is_zero());
    }

    #[test]
    fn unfixed_is_never_fixed_nor_equal_to_zero() {
        assert!(!Amount::Unfixed.is_fixed());
        assert!(Amount::Fixed(0).is_fixed());
        assert_ne!(Amount::Unfixed, Amount::Fixed(0));
        assert_eq!(Amount::Unfixed, Amount::Unfixed);
    }

    #[test]
    fn ordering_by_cent_value() {
        assert!(Amount::Fixed(-1) < Amount::Fixed(0));
        assert!(Amount::Fixed(200) > Amount::Fixed(150));
        assert!(Amount::Unfixed.partial_cmp(&Amount::Fixed(0)).is_none());
    }

    #[test]
    #[should_panic(expected = "cents of an unfixed amount")]
    fn unfixed_arithmetic_panics() {
        let _ = Amount::Unfixed + Amount::Fixed(1);
    }
}
