//! Test cases specific to scalar types. This module
//! contains three modules: plain, flow and block, one per
//! scalar category.

use super::*;

mod plain
{
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn scalar_simple()
    {
        tokens!("hello from a plain scalar" =>
            | StreamStart                                        => "expected start of stream",
            | Scalar(cow!("hello from a plain scalar"), Plain)   => "expected a plain scalar",
            | StreamEnd                                          => "expected end of stream",
        );
    }

    #[test]
    fn scalar_trimmed()
    {
        tokens!("  some text   " =>
            | StreamStart,
            | Scalar(cow!("some text"), Plain) => "plain scalars are trimmed",
            | StreamEnd,
        );
    }

    #[test]
    fn scalar_trailing_comment_stripped()
    {
        tokens!("value # a comment" =>
            | StreamStart,
            | Scalar(cow!("value"), Plain) => "the comment is not part of the scalar",
            | StreamEnd,
        );
    }

    #[test]
    fn scalar_leading_dash()
    {
        // '-' without a following blank is no block entry
        tokens!("-5" =>
            | StreamStart,
            | Scalar(cow!("-5"), Plain),
            | StreamEnd,
        );
    }

    #[test]
    fn scalar_multi_line()
    {
        tokens!("some\ntext" =>
            | StreamStart,
            | Scalar(cow!("some"), Plain),
            | Scalar(cow!("text"), Plain) => "each line yields its own token",
            | StreamEnd,
        );
    }
}

mod flow
{
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::scan;

    #[test]
    fn scalar_single_simple()
    {
        tokens!("'hello world, single quoted flow scalar'" =>
            | StreamStart                                                 => "expected start of stream",
            | Scalar(cow!("hello world, single quoted flow scalar"), SingleQuote),
            | StreamEnd                                                   => "expected end of stream",
        );
    }

    #[test]
    fn scalar_single_escaped_quote()
    {
        tokens!("'it''s ok'" =>
            | StreamStart,
            | Scalar(cow!("it's ok"), SingleQuote) => "'' collapses to a literal apostrophe",
            | StreamEnd,
        );
    }

    #[test]
    fn scalar_single_empty()
    {
        tokens!("''" =>
            | StreamStart,
            | Scalar(cow!(""), SingleQuote),
            | StreamEnd,
        );
    }

    #[test]
    fn scalar_double_simple()
    {
        tokens!(r#""line0 line1\nline3\tline4""# =>
            | StreamStart,
            | Scalar(cow!("line0 line1\nline3\tline4"), DoubleQuote),
            | StreamEnd,
        );
    }

    #[test]
    fn scalar_double_empty()
    {
        tokens!(r#""""# =>
            | StreamStart,
            | Scalar(cow!(""), DoubleQuote),
            | StreamEnd,
        );
    }

    #[test]
    fn scalar_double_escaped_quote()
    {
        tokens!(r#""say \"hi\"""# =>
            | StreamStart,
            | Scalar(cow!("say \"hi\""), DoubleQuote),
            | StreamEnd,
        );
    }

    #[test]
    fn scalar_double_unicode_escapes()
    {
        tokens!(r#""\x41B\U00000043""# =>
            | StreamStart,
            | Scalar(cow!("ABC"), DoubleQuote),
            | StreamEnd,
        );
    }

    #[test]
    fn scalar_multi_line_folds()
    {
        tokens!("'line0\nline1'" =>
            | StreamStart,
            | Scalar(cow!("line0 line1"), SingleQuote) => "lines inside quotes fold with one space",
            | StreamEnd,
        );
    }

    #[test]
    fn scalar_runaway_errors()
    {
        let mut iter = scan("'never closed");

        assert!(matches!(
            iter.next().expect("stream start").expect("no error").into_token(),
            StreamStart
        ));

        let error = iter
            .next()
            .expect("an error item")
            .expect_err("a runaway string must error");

        assert_eq!(
            error.message(),
            "Unexpected end, runaway string at line 1?"
        );
        assert_eq!(error.line(), Some(1));
    }
}

mod block
{
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::scan;

    #[test]
    fn scalar_literal_simple()
    {
        tokens!("text: |\n  line1\n  line2\n" =>
            | StreamStart,
            | Key(Some(cow!("text"))),
            | Scalar(cow!("line1\nline2\n"), Literal) => "literal style preserves line breaks",
            | StreamEnd,
        );
    }

    #[test]
    fn scalar_folded_simple()
    {
        tokens!("text: >\n  line1\n  line2\n" =>
            | StreamStart,
            | Key(Some(cow!("text"))),
            | Scalar(cow!("line1 line2\n"), Folded) => "folded style joins with one space",
            | StreamEnd,
        );
    }

    #[test]
    fn scalar_literal_strip()
    {
        tokens!("a: |-\n  x\n" =>
            | StreamStart,
            | Key(Some(cow!("a"))),
            | Scalar(cow!("x"), Literal) => "strip chomping drops the trailing break",
            | StreamEnd,
        );
    }

    #[test]
    fn scalar_literal_keep()
    {
        tokens!("a: |+\n  x\n\nb: 1" =>
            | StreamStart,
            | Key(Some(cow!("a"))),
            | Scalar(cow!("x\n\n"), Literal) => "keep chomping preserves trailing breaks",
            | Key(Some(cow!("b"))) => "the terminating line is scanned normally",
            | Scalar(cow!("1"), Plain),
            | StreamEnd,
        );
    }

    #[test]
    fn scalar_literal_explicit_indent()
    {
        tokens!("a: |2\n   x\n" =>
            | StreamStart,
            | Key(Some(cow!("a"))),
            | Scalar(cow!(" x\n"), Literal) => "content beyond the explicit indent is kept",
            | StreamEnd,
        );
    }

    #[test]
    fn scalar_folded_blank_line_breaks()
    {
        tokens!("a: >\n  one\n\n  two\n" =>
            | StreamStart,
            | Key(Some(cow!("a"))),
            | Scalar(cow!("one\ntwo\n"), Folded) => "a blank line folds to a line break",
            | StreamEnd,
        );
    }

    #[test]
    fn scalar_header_overlong_errors()
    {
        let error = scan("a: |+2x\n  y")
            .find_map(|result| result.err())
            .expect("an overlong header must error");

        assert_eq!(
            error.message(),
            "Invalid literal style '|+2x', should be less than 3 chars"
        );
    }

    #[test]
    fn scalar_header_ambiguous_errors()
    {
        let error = scan("a: |+-\n  y")
            .find_map(|result| result.err())
            .expect("both chomping indicators must error");

        assert_eq!(error.message(), "Ambiguous literal style '|+-'");
    }

    #[test]
    fn scalar_header_bad_digit_errors()
    {
        let error = scan("a: |0\n  y")
            .find_map(|result| result.err())
            .expect("a zero indent must error");

        assert_eq!(error.message(), "Indent must be between 1 and 9");
    }
}
