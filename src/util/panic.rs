/// Asserts that running the provided block panics, catching the panic so that the rest of the test
/// can continue. With `contains`, the panic message must also include the given text.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "block was expected to panic")
    };
    ($run:block, $msg:literal) => {
        assert!(std::panic::catch_unwind(|| $run).is_err(), $msg);
    };
    ($run:block, contains $expected:expr) => {{
        let Err(payload) = std::panic::catch_unwind(|| $run) else {
            panic!("block was expected to panic");
        };
        let message = match payload.downcast_ref::<String>() {
            Some(message) => message.as_str(),
            None => payload.downcast_ref::<&str>().copied().unwrap_or_default(),
        };
        assert!(
            message.contains($expected),
            "panic message {message:?} doesn't contain {:?}",
            $expected
        );
    }};
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
