/// Macro for asserting token streams.
/// Used as: tokens!(source [, flags] => | <token> [=> <message>], ..)
/// Each | entry asserts the next token in the stream; the
/// stream must be exhausted once every entry has matched.
macro_rules! tokens {
    ($source:expr => $( | $expected:expr $(=> $msg:literal)? ),+ $(,)? ) => {
        tokens!($source, crate::scanner::flag::O_ZEROED => $( | $expected $(=> $msg)? ),+ )
    };
    ($source:expr, $opts:expr => $( | $expected:expr $(=> $msg:literal)? ),+ $(,)? ) => {{
        let mut iter = crate::scan_with($source, $opts);

        $(
            match iter.next()
            {
                Some(Ok(entry)) => assert_eq!(entry.into_token(), $expected $(, $msg)?),
                Some(Err(error)) => panic!("unexpected scan error: {}", error),
                None => panic!("stream ended early, expected: {:?}", $expected),
            }
        )+

        assert!(iter.next().is_none(), "expected stream to be finished");
    }};
}

/// New cow pointer from the given expr
macro_rules! cow {
    ($from:expr) => {
        std::borrow::Cow::from($from)
    };
}
