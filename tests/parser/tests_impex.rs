//! Impex parser tests: line shapes, header structure and error recovery.

use rstest::rstest;

use crate::helpers::source_fixtures::*;
use impex::parser::{
    AstNode, HeaderMode, Line, MacroDeclaration, SourceFile, SyntaxKind, parse,
};

fn source_file(source: &str) -> SourceFile {
    let parse = parse(source);
    assert!(parse.ok(), "errors in {:?}: {:?}", source, parse.errors);
    SourceFile::cast(parse.syntax()).unwrap()
}

fn line_kinds(source: &str) -> Vec<SyntaxKind> {
    source_file(source)
        .lines()
        .map(|l| l.syntax().kind())
        .collect()
}

#[rstest]
#[case("INSERT Product;code", HeaderMode::Insert)]
#[case("update Product;code", HeaderMode::Update)]
#[case("Insert_Update Product;code", HeaderMode::InsertUpdate)]
#[case("REMOVE Product;code", HeaderMode::Remove)]
fn test_header_modes(#[case] source: &str, #[case] mode: HeaderMode) {
    let header = source_file(source).header_lines().next().unwrap();
    assert_eq!(header.mode(), Some(mode));
    assert_eq!(header.header_type().unwrap().name(), "Product");
}

#[test]
fn test_two_blocks_lines() {
    assert_eq!(
        line_kinds(TWO_BLOCKS),
        vec![
            SyntaxKind::HEADER_LINE,
            SyntaxKind::VALUE_LINE,
            SyntaxKind::VALUE_LINE,
            SyntaxKind::VALUE_LINE,
            SyntaxKind::VALUE_LINE,
            SyntaxKind::HEADER_LINE,
            SyntaxKind::VALUE_LINE,
        ]
    );
}

#[test]
fn test_macros_and_user_rights_lines() {
    assert_eq!(
        line_kinds(MACROS_AND_USER_RIGHTS),
        vec![
            SyntaxKind::MACRO_DECLARATION,
            SyntaxKind::MACRO_DECLARATION,
            SyntaxKind::USER_RIGHTS_MACRO,
            SyntaxKind::VALUE_LINE,
            SyntaxKind::VALUE_LINE,
            SyntaxKind::VALUE_LINE,
            SyntaxKind::USER_RIGHTS_MACRO,
        ]
    );
}

#[test]
fn test_macro_declaration_name() {
    let file = source_file(MACROS_AND_USER_RIGHTS);
    let names: Vec<_> = file
        .syntax()
        .children()
        .filter_map(MacroDeclaration::cast)
        .filter_map(|m| m.name())
        .collect();
    assert_eq!(names, vec!["$catalog", "$catalogVersion"]);
}

#[test]
fn test_header_parameters() {
    let file = source_file(
        "INSERT_UPDATE Product;catalogVersion(catalog(id),version)[unique=true];code[unique=true];name[lang=en]",
    );
    let header = file.header_lines().next().unwrap();
    let params: Vec<_> = header
        .parameters()
        .map(|p| (p.name().to_string(), p.modifiers().count()))
        .collect();
    assert_eq!(
        params,
        vec![
            ("catalogVersion(catalog(id),version)".to_string(), 1),
            ("code".to_string(), 1),
            ("name".to_string(), 1),
        ]
    );
}

#[test]
fn test_value_line_groups() {
    let file = source_file("Product;p1;;\"Quoted; value\"");
    let Some(Line::Value(line)) = file.lines().next() else {
        panic!("expected a value line");
    };
    let values: Vec<_> = line.value_groups().map(|g| g.value()).collect();
    assert_eq!(values, vec!["p1", "", "\"Quoted; value\""]);
}

#[rstest]
#[case::missing_type("INSERT ;code", "expected header type")]
#[case::unclosed_modifiers("INSERT A;code[unique=true", "expected `]`")]
#[case::attribute_without_key("INSERT A;code[=x]", "expected attribute name")]
fn test_syntax_errors(#[case] source: &str, #[case] message: &str) {
    let parse = parse(source);
    assert_eq!(parse.errors.len(), 1, "errors: {:?}", parse.errors);
    assert_eq!(parse.errors[0].message, message);
    // Error ranges stay inside the document
    assert!(usize::from(parse.errors[0].range.end()) <= source.len());
}

#[test]
fn test_user_rights_start_and_end() {
    let file = source_file(MACROS_AND_USER_RIGHTS);
    let rights: Vec<_> = file
        .lines()
        .filter_map(|l| match l {
            Line::UserRights(u) => Some((u.is_start(), u.is_end())),
            _ => None,
        })
        .collect();
    assert_eq!(rights, vec![(true, false), (false, true)]);
}
