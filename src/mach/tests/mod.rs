use crate::mach::{Runtime, Val};
use num_bigint::BigInt;

mod arith_test;
mod stack_word_test;

fn stack_of(runtime: &Runtime) -> Vec<String> {
    runtime.stack().iter().map(|v| v.to_string()).collect()
}

fn val(n: i64) -> Val {
    Val::from_integer(BigInt::from(n))
}
