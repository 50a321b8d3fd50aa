//! Token stream tests, split by area: scalars,
//! collections, documents, keys, anchors, tags and
//! whitespace handling.

#[macro_use]
mod macros;

mod anchor;
mod scalar;

use pretty_assertions::assert_eq;

use crate::{
    scan,
    token::{Marker, ScalarStyle::*, Token::*},
};

#[test]
fn stream_brackets()
{
    for source in &["", "a", "a: 1", "- 1", "# just a comment"]
    {
        let tokens: Vec<_> = scan(source).collect::<Result<_, _>>().expect(source);

        assert!(
            matches!(tokens.first().map(|e| e.token()), Some(StreamStart)),
            "stream must open with StreamStart: {:?}",
            source
        );
        assert!(
            matches!(tokens.last().map(|e| e.token()), Some(StreamEnd)),
            "stream must close with StreamEnd: {:?}",
            source
        );
        assert_eq!(
            tokens
                .iter()
                .filter(|e| Marker::from(e.token()) == Marker::StreamEnd)
                .count(),
            1,
            "StreamEnd must be unique: {:?}",
            source
        );
    }
}

#[test]
fn stream_empty()
{
    tokens!("" =>
        | StreamStart  => "expected start of stream",
        | StreamEnd    => "expected end of stream",
    );
}

#[test]
fn entry_positions()
{
    let mut iter = scan("- a: 1");

    let stream_start = iter.next().expect("stream start").expect("no error");
    assert_eq!(Marker::from(stream_start.token()), Marker::StreamStart);

    let entry = iter.next().expect("block entry").expect("no error");
    assert_eq!((entry.line(), entry.indent()), (1, 0));

    let key = iter.next().expect("key").expect("no error");
    assert_eq!(Marker::from(key.token()), Marker::Key);
    assert_eq!((key.line(), key.indent()), (1, 2));

    let scalar = iter.next().expect("scalar").expect("no error");
    assert_eq!((scalar.line(), scalar.indent()), (1, 5));
}

#[test]
fn entry_display()
{
    let entries: Vec<_> = scan("a: 1")
        .collect::<Result<_, _>>()
        .expect("valid stream");

    assert_eq!(format!("{}", entries[0]), "StreamStart[1,1]");
    assert_eq!(format!("{}", entries[1]), "Key[1,1] a");
    assert_eq!(format!("{}", entries[2]), "Scalar[1,4] 1");
}
