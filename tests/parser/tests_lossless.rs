//! The CST must reproduce its input exactly.

use rstest::rstest;

use crate::helpers::source_fixtures::*;
use impex::parser::{parse, tokenize};

#[rstest]
#[case(EMPTY)]
#[case(ONLY_BLANK_LINES)]
#[case(ONLY_COMMENTS)]
#[case(SINGLE_HEADER)]
#[case(TWO_BLOCKS)]
#[case(MACROS_AND_USER_RIGHTS)]
#[case(COMMENTED_BLOCK)]
#[case(MIXED_LINE_ENDINGS)]
#[case("INSERT A;b[unique=true\n;1")]
#[case("$$$\r;;[[]]")]
fn test_lossless(#[case] source: &str) {
    assert_eq!(parse(source).syntax().text().to_string(), source);

    let tokens: String = tokenize(source).iter().map(|t| t.text).collect();
    assert_eq!(tokens, source);
}
