//! Strict media query grammar on top of `cssparser` tokens.
//!
//! ```text
//! media_query_list := media_query ( "," media_query )*
//! media_query      := [ "only" | "not" ] media_type ( "and" expression )*
//!                   | expression ( "and" expression )*
//! expression       := "(" feature [ ":" value ] ")"
//! ```

use cssparser::{ParseError, Parser, ParserInput, Token};

use super::error::MediaQueryError;
use super::types::{MediaExpression, MediaModifier, MediaQuery, MediaQueryList};

/// Parses a comma-separated media query list.
///
/// Keywords and feature names are matched ASCII case-insensitively. Values are
/// kept as raw text; they must be non-empty and may not contain nested blocks.
///
/// # Examples
///
/// ```
/// use gridstart_core::media::parse_media_query_list;
///
/// let list = parse_media_query_list("screen and (min-width: 48em)").unwrap();
/// assert_eq!(list.queries.len(), 1);
/// assert_eq!(list.queries[0].media_type(), "screen");
///
/// assert!(parse_media_query_list("48em").is_err());
/// ```
pub fn parse_media_query_list(input: &str) -> Result<MediaQueryList, MediaQueryError> {
    if input.trim().is_empty() {
        return Err(MediaQueryError::Empty);
    }

    let mut parser_input = ParserInput::new(input);
    let mut parser = Parser::new(&mut parser_input);

    parser
        .parse_comma_separated(parse_media_query)
        .map(|queries| MediaQueryList { queries })
        .map_err(|err| MediaQueryError::Invalid {
            query: input.to_string(),
            line: err.location.line,
            column: err.location.column,
        })
}

fn parse_media_query<'i>(parser: &mut Parser<'i, '_>) -> Result<MediaQuery, ParseError<'i, ()>> {
    let mut expressions = Vec::new();

    let (modifier, media_type) = match parser.try_parse(parse_expression) {
        Ok(expression) => {
            expressions.push(expression);
            (None, None)
        }
        Err(_) => {
            let modifier = parser.try_parse(parse_modifier).ok();
            let media_type = parser.expect_ident()?.to_ascii_lowercase();
            (modifier, Some(media_type))
        }
    };

    while parser
        .try_parse(|input| input.expect_ident_matching("and"))
        .is_ok()
    {
        expressions.push(parse_expression(parser)?);
    }

    Ok(MediaQuery {
        modifier,
        media_type,
        expressions,
    })
}

fn parse_modifier<'i>(parser: &mut Parser<'i, '_>) -> Result<MediaModifier, ParseError<'i, ()>> {
    let ident = parser.expect_ident()?.clone();

    if ident.eq_ignore_ascii_case("only") {
        Ok(MediaModifier::Only)
    } else if ident.eq_ignore_ascii_case("not") {
        Ok(MediaModifier::Not)
    } else {
        Err(parser.new_custom_error(()))
    }
}

fn parse_expression<'i>(
    parser: &mut Parser<'i, '_>,
) -> Result<MediaExpression, ParseError<'i, ()>> {
    let start = parser.position();
    parser.expect_parenthesis_block()?;
    let expression = parser.parse_nested_block(parse_expression_body)?;

    // The tokenizer closes blocks implicitly at end of input.
    if !parser.slice_from(start).ends_with(')') {
        return Err(parser.new_custom_error(()));
    }

    Ok(expression)
}

fn parse_expression_body<'i>(
    parser: &mut Parser<'i, '_>,
) -> Result<MediaExpression, ParseError<'i, ()>> {
    let name = parser.expect_ident()?.to_ascii_lowercase();

    let value = if parser.try_parse(Parser::expect_colon).is_ok() {
        Some(parse_feature_value(parser)?)
    } else {
        None
    };

    Ok(MediaExpression::new(name, value))
}

fn parse_feature_value<'i>(parser: &mut Parser<'i, '_>) -> Result<String, ParseError<'i, ()>> {
    let start = parser.position();
    let mut token_count = 0usize;

    while !parser.is_exhausted() {
        let token = parser.next()?.clone();
        match token {
            Token::Function(_)
            | Token::ParenthesisBlock
            | Token::SquareBracketBlock
            | Token::CurlyBracketBlock
            | Token::CloseParenthesis
            | Token::CloseSquareBracket
            | Token::CloseCurlyBracket
            | Token::BadUrl(_)
            | Token::BadString(_)
            | Token::Semicolon => return Err(parser.new_unexpected_token_error(token)),
            _ => token_count += 1,
        }
    }

    if token_count == 0 {
        return Err(parser.new_custom_error(()));
    }

    Ok(parser.slice_from(start).trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{MediaModifier, RangePrefix};

    #[test]
    fn parses_media_type_only() {
        let list = parse_media_query_list("screen").unwrap();
        assert_eq!(list.queries.len(), 1);
        assert_eq!(list.queries[0].media_type(), "screen");
        assert!(list.queries[0].expressions.is_empty());
    }

    #[test]
    fn parses_type_with_min_width() {
        let list = parse_media_query_list("screen and (min-width: 500px)").unwrap();
        let query = &list.queries[0];

        assert_eq!(query.media_type(), "screen");
        assert_eq!(query.expressions.len(), 1);
        assert_eq!(query.expressions[0].prefix, Some(RangePrefix::Min));
        assert_eq!(query.expressions[0].feature, "width");
        assert_eq!(query.expressions[0].value.as_deref(), Some("500px"));
    }

    #[test]
    fn parses_device_width_feature() {
        let list = parse_media_query_list("screen and (min-device-width: 480px)").unwrap();
        assert_eq!(list.queries[0].expressions[0].feature, "device-width");
    }

    #[test]
    fn parses_modifier_and_multiple_expressions() {
        let list =
            parse_media_query_list("only screen and (min-width: 48em) and (max-width: 60em)")
                .unwrap();
        let query = &list.queries[0];

        assert_eq!(query.modifier, Some(MediaModifier::Only));
        assert_eq!(query.expressions.len(), 2);
        assert_eq!(query.expressions[1].prefix, Some(RangePrefix::Max));
    }

    #[test]
    fn parses_not_modifier() {
        let list = parse_media_query_list("not print").unwrap();
        assert!(list.queries[0].is_inverse());
        assert_eq!(list.queries[0].media_type(), "print");
    }

    #[test]
    fn parses_bare_expression() {
        let list = parse_media_query_list("(min-width: 48em)").unwrap();
        assert_eq!(list.queries[0].media_type, None);
        assert_eq!(list.queries[0].media_type(), "all");
    }

    #[test]
    fn parses_boolean_feature() {
        let list = parse_media_query_list("screen and (color)").unwrap();
        assert_eq!(list.queries[0].expressions[0].value, None);
    }

    #[test]
    fn parses_comma_separated_list() {
        let list = parse_media_query_list("print, screen and (min-width: 30em)").unwrap();
        assert_eq!(list.queries.len(), 2);
        assert_eq!(list.queries[0].media_type(), "print");
        assert_eq!(list.queries[1].media_type(), "screen");
    }

    #[test]
    fn parses_ratio_value() {
        let list = parse_media_query_list("screen and (min-aspect-ratio: 16/9)").unwrap();
        assert_eq!(list.queries[0].expressions[0].value.as_deref(), Some("16/9"));
    }

    #[test]
    fn keywords_are_case_insensitive() {
        let list = parse_media_query_list("ONLY Screen AND (MIN-WIDTH: 30em)").unwrap();
        let query = &list.queries[0];

        assert_eq!(query.modifier, Some(MediaModifier::Only));
        assert_eq!(query.media_type(), "screen");
        assert_eq!(query.expressions[0].feature, "width");
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(parse_media_query_list(""), Err(MediaQueryError::Empty));
        assert_eq!(parse_media_query_list("   "), Err(MediaQueryError::Empty));
    }

    #[test]
    fn rejects_bare_dimension() {
        assert!(matches!(
            parse_media_query_list("48em"),
            Err(MediaQueryError::Invalid { .. })
        ));
    }

    #[test]
    fn rejects_trailing_words() {
        assert!(parse_media_query_list("not a query").is_err());
    }

    #[test]
    fn rejects_dangling_and() {
        assert!(parse_media_query_list("screen and").is_err());
    }

    #[test]
    fn rejects_missing_value_after_colon() {
        assert!(parse_media_query_list("screen and (min-width:)").is_err());
    }

    #[test]
    fn rejects_unclosed_expression() {
        assert!(parse_media_query_list("screen and (min-width: 480px").is_err());
    }

    #[test]
    fn rejects_extra_closing_parenthesis() {
        assert!(parse_media_query_list("screen and (min-width: 48em))").is_err());
    }

    #[test]
    fn rejects_nested_blocks_in_value() {
        assert!(parse_media_query_list("screen and (min-width: calc(1px + 2em))").is_err());
    }

    #[test]
    fn rejects_empty_list_entry() {
        assert!(parse_media_query_list("screen,").is_err());
    }

    #[test]
    fn rejects_modifier_without_media_type() {
        assert!(parse_media_query_list("only (min-width: 48em)").is_err());
    }

    #[test]
    fn invalid_error_carries_query() {
        match parse_media_query_list("48em") {
            Err(MediaQueryError::Invalid { query, .. }) => assert_eq!(query, "48em"),
            other => panic!("expected invalid error, got {other:?}"),
        }
    }
}
