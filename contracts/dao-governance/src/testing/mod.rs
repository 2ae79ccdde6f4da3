// Assert that a result's full error chain contains the given text.
// Errors raised inside a sub-message are wrapped by the contract that
// dispatched it, so they can not be downcast directly.
macro_rules! is_error {
    ($x:expr => $e:tt) => {
        assert!(format!("{:#}", $x.unwrap_err()).contains($e))
    };
}

mod contracts;
mod execute;
mod instantiate;
mod queries;

pub(crate) const CREATOR_ADDR: &str = "minter";
pub(crate) const ALICE: &str = "alice";
pub(crate) const BOB: &str = "bob";
pub(crate) const CAROL: &str = "carol";
pub(crate) const DEV: &str = "dev";
