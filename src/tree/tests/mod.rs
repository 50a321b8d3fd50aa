//! Tree builder and loading tests: document assembly,
//! anchors, tags and the scalar typing rules.

mod load;

use crate::value::{Mapping, Value};

/// Logging is ambient; switch it on for any test run that
/// wants it (RUST_LOG=trace)
fn init()
{
    let _ = env_logger::builder().is_test(true).try_init();
}

fn s(text: &str) -> Value
{
    Value::Str(text.into())
}

fn seq(items: Vec<Value>) -> Value
{
    Value::Seq(items)
}

fn map(pairs: Vec<(&str, Value)>) -> Value
{
    Value::Map(
        pairs
            .into_iter()
            .map(|(key, value)| (s(key), value))
            .collect::<Mapping>(),
    )
}
