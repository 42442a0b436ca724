use num_rational::BigRational;

/// Every value on the data stack is an exact rational.
/// Integers have a denominator of one and print without it.
pub type Val = BigRational;
