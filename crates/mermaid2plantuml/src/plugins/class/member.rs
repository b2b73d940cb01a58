//! Class member grammar
//!
//! One class body line becomes one [`ClassMember`]. Three shapes are
//! accepted, tried in this order:
//!
//! - method: `[vis][void ]name(params)`
//! - attribute: `[vis]name: Type`
//! - attribute: `[vis]Type name`
//!
//! `Type` may carry a Mermaid generic suffix such as `List~Product~`, which
//! is kept verbatim.

use chumsky::prelude::*;
use chumsky::text::ident;

use super::database::{ClassMember, Visibility};
use crate::core::chumsky_utils::{inline_whitespace, inline_whitespace_required};

/// Parse one trimmed class body line into a member.
///
/// Returns `None` when the line matches none of the member shapes; the
/// caller decides whether that is an error.
pub fn parse_member(line: &str) -> Option<ClassMember> {
    member_parser().parse(line.trim()).into_result().ok()
}

fn member_parser<'src>() -> impl Parser<'src, &'src str, ClassMember> + Clone {
    let ws = inline_whitespace();
    let ws_required = inline_whitespace_required();

    // Visibility prefix: + - # ~ (public when omitted)
    let visibility = one_of("+-#~")
        .or_not()
        .map(|c: Option<char>| c.and_then(Visibility::from_char).unwrap_or_default());

    let name = ident().map(|s: &str| s.to_string());

    // Type with optional generic suffix: List~Product~, Map~String,Integer~
    let generic = just('~')
        .then(none_of("~").repeated().at_least(1))
        .then(just('~'));
    let type_name = ident()
        .then(generic.or_not())
        .to_slice()
        .map(|s: &str| s.to_string());

    // "void" return type, any case, is dropped so `void foo()` reads like `foo()`
    let void_keyword = ident()
        .filter(|word: &&str| word.eq_ignore_ascii_case("void"))
        .then(ws_required.clone());

    let parameters = none_of(")")
        .repeated()
        .to_slice()
        .map(|s: &str| s.trim().to_string())
        .delimited_by(just('('), just(')'));

    let method = visibility
        .clone()
        .then_ignore(void_keyword.or_not())
        .then(name.clone())
        .then_ignore(ws.clone())
        .then(parameters)
        .map(|((visibility, name), parameters)| ClassMember::Method {
            visibility,
            name,
            parameters,
        });

    let colon_attribute = visibility
        .clone()
        .then(name.clone())
        .then_ignore(ws.clone())
        .then_ignore(just(':'))
        .then_ignore(ws.clone())
        .then(type_name.clone())
        .map(|((visibility, name), member_type)| ClassMember::Attribute {
            visibility,
            name,
            member_type,
        });

    let typed_attribute = visibility
        .then(type_name)
        .then_ignore(ws_required)
        .then(name)
        .map(|((visibility, member_type), name)| ClassMember::Attribute {
            visibility,
            name,
            member_type,
        });

    choice((method, colon_attribute, typed_attribute))
        .then_ignore(ws)
        .then_ignore(end())
}
