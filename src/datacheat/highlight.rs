//! # Syntax Highlighting
//!
//! Snippets are split into classified [`Span`]s; turning a span kind into a
//! colour is the renderer's job. Highlighting is presentation only: the
//! renderer shows plain code whenever a [`Highlighter`] declines.
//!
//! [`SyntaxHighlighter`] parses snippets with syntect. SQL uses the bundled
//! definition; Power Query M and DAX use the definitions under `syntaxes/`.
//! Scopes map onto [`TokenKind`]s, and text no scope classifies is split into
//! words, whitespace and punctuation. Concatenating the span texts gives back
//! the input exactly.

use crate::model::Language;
use once_cell::sync::Lazy;
use syntect::easy::ScopeRangeIterator;
use syntect::parsing::{
    ParseState, ParseSyntaxError, ScopeStack, SyntaxDefinition, SyntaxReference, SyntaxSet,
};
use syntect::util::LinesWithEndings;

const POWER_QUERY_SYNTAX: &str = include_str!("syntaxes/powerquery.sublime-syntax");
const DAX_SYNTAX: &str = include_str!("syntaxes/dax.sublime-syntax");

/// Bundled syntaxes plus M and DAX. `None` if a definition fails to load, in
/// which case every snippet is left plain.
static SYNTAX_SET: Lazy<Option<SyntaxSet>> = Lazy::new(|| load_syntax_set().ok());

fn load_syntax_set() -> Result<SyntaxSet, ParseSyntaxError> {
    let mut builder = SyntaxSet::load_defaults_newlines().into_builder();
    builder.add(SyntaxDefinition::load_from_str(POWER_QUERY_SYNTAX, true, None)?);
    builder.add(SyntaxDefinition::load_from_str(DAX_SYNTAX, true, None)?);
    Ok(builder.build())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    Function,
    String,
    Number,
    Comment,
    Operator,
    Punctuation,
    Identifier,
    Whitespace,
}

impl TokenKind {
    /// Adjacent spans of these kinds belong to one token.
    fn joins(self) -> bool {
        matches!(
            self,
            TokenKind::Comment | TokenKind::String | TokenKind::Whitespace
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub kind: TokenKind,
    pub text: String,
}

pub trait Highlighter {
    /// Splits `code` into spans, or `None` when the snippet cannot be
    /// highlighted for `language`.
    fn highlight(&self, code: &str, language: Language) -> Option<Vec<Span>>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SyntaxHighlighter;

impl Highlighter for SyntaxHighlighter {
    fn highlight(&self, code: &str, language: Language) -> Option<Vec<Span>> {
        let syntax_set = SYNTAX_SET.as_ref()?;
        let syntax = syntax_set.find_syntax_by_name(language.syntax_name())?;
        tokenize(code, syntax, syntax_set)
    }
}

fn tokenize(code: &str, syntax: &SyntaxReference, syntax_set: &SyntaxSet) -> Option<Vec<Span>> {
    let mut state = ParseState::new(syntax);
    let mut stack = ScopeStack::new();
    let mut spans = Vec::new();

    for line in LinesWithEndings::from(code) {
        let ops = state.parse_line(line, syntax_set).ok()?;
        for (range, op) in ScopeRangeIterator::new(&ops, line) {
            stack.apply(op).ok()?;
            if range.is_empty() {
                continue;
            }
            push_region(&mut spans, &line[range], classify(&stack));
        }
    }
    Some(spans)
}

/// Kind for text under `stack`, or `None` when no scope says anything.
/// Comments and strings win over whatever they contain.
fn classify(stack: &ScopeStack) -> Option<TokenKind> {
    let names: Vec<String> = stack.as_slice().iter().map(|s| s.build_string()).collect();
    let has = |prefix: &str| names.iter().any(|n| n.starts_with(prefix));

    let kind = if has("comment") {
        TokenKind::Comment
    } else if has("string") {
        TokenKind::String
    } else if has("constant.numeric") {
        TokenKind::Number
    } else if has("support.function")
        || has("entity.name.function")
        || has("variable.function")
    {
        TokenKind::Function
    } else if has("keyword.operator") {
        TokenKind::Operator
    } else if has("keyword") || has("storage") || has("constant.language") {
        TokenKind::Keyword
    } else if has("variable") {
        TokenKind::Identifier
    } else if has("punctuation") {
        TokenKind::Punctuation
    } else {
        return None;
    };
    Some(kind)
}

fn push_region(spans: &mut Vec<Span>, text: &str, kind: Option<TokenKind>) {
    let Some(kind) = kind else {
        for (kind, word) in words(text) {
            push(spans, kind, word);
        }
        return;
    };

    if text.trim().is_empty() && !kind.joins() {
        push(spans, TokenKind::Whitespace, text);
        return;
    }
    // line endings stand alone so comments and strings end with the line
    let body = text.trim_end_matches(['\r', '\n']);
    push(spans, kind, body);
    push(spans, TokenKind::Whitespace, &text[body.len()..]);
}

fn push(spans: &mut Vec<Span>, kind: TokenKind, text: &str) {
    if text.is_empty() {
        return;
    }
    match spans.last_mut() {
        Some(last) if last.kind == kind && kind.joins() => last.text.push_str(text),
        _ => spans.push(Span {
            kind,
            text: text.to_string(),
        }),
    }
}

/// Splits unscoped text into runs of whitespace, word characters and
/// everything else.
fn words(text: &str) -> Vec<(TokenKind, &str)> {
    let class = |c: char| {
        if c.is_whitespace() {
            TokenKind::Whitespace
        } else if c.is_alphanumeric() || c == '_' {
            TokenKind::Identifier
        } else {
            TokenKind::Punctuation
        }
    };

    let mut out = Vec::new();
    let mut start = 0;
    let mut current: Option<TokenKind> = None;
    for (i, c) in text.char_indices() {
        let kind = class(c);
        match current {
            Some(prev) if prev == kind => {}
            Some(prev) => {
                out.push((prev, &text[start..i]));
                start = i;
                current = Some(kind);
            }
            None => current = Some(kind),
        }
    }
    if let Some(kind) = current {
        out.push((kind, &text[start..]));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn spans(code: &str, language: Language) -> Vec<Span> {
        SyntaxHighlighter.highlight(code, language).unwrap()
    }

    fn kinds_of(spans: &[Span], kind: TokenKind) -> Vec<&str> {
        spans
            .iter()
            .filter(|s| s.kind == kind)
            .map(|s| s.text.as_str())
            .collect()
    }

    #[test]
    fn every_language_has_a_syntax() {
        let syntax_set = SYNTAX_SET.as_ref().unwrap();
        for language in Language::ALL {
            assert!(
                syntax_set.find_syntax_by_name(language.syntax_name()).is_some(),
                "no syntax for {}",
                language
            );
        }
    }

    #[test]
    fn spans_reassemble_every_builtin_snippet() {
        let catalog = catalog::builtin().unwrap();
        for entry in catalog.entries() {
            let code = entry.code.as_deref().unwrap_or_default();
            let language = Language::from_prefix(entry.language()).unwrap();
            let joined: String = spans(code, language).iter().map(|s| s.text.as_str()).collect();
            assert_eq!(joined, code, "lossy highlighting for {}", entry.id);
        }
    }

    #[test]
    fn sql_comments_keywords_and_strings() {
        let out = spans(
            "-- top rows\nSELECT name FROM t WHERE name = 'O''Brien';",
            Language::Sql,
        );
        assert_eq!(kinds_of(&out, TokenKind::Comment), vec!["-- top rows"]);
        let keywords = kinds_of(&out, TokenKind::Keyword);
        for keyword in ["SELECT", "FROM", "WHERE"] {
            assert!(keywords.contains(&keyword), "{} not a keyword", keyword);
        }
        assert!(kinds_of(&out, TokenKind::String).contains(&"'O''Brien'"));
        assert!(kinds_of(&out, TokenKind::Identifier).contains(&"name"));
    }

    #[test]
    fn sql_keywords_ignore_case() {
        let out = spans("select n from t", Language::Sql);
        let keywords = kinds_of(&out, TokenKind::Keyword);
        assert!(keywords.contains(&"select"));
        assert!(keywords.contains(&"from"));
    }

    #[test]
    fn numbers_with_fractions() {
        let out = spans("Total = 10 + 2.5", Language::Dax);
        assert_eq!(kinds_of(&out, TokenKind::Number), vec!["10", "2.5"]);
    }

    #[test]
    fn m_dotted_functions_and_case_sensitive_keywords() {
        let out = spans(
            "let\n    Rows = Table.SelectRows(t, each [Column1] > 100)\nin\n    Rows",
            Language::PowerQuery,
        );
        assert_eq!(kinds_of(&out, TokenKind::Function), vec!["Table.SelectRows"]);
        assert_eq!(kinds_of(&out, TokenKind::Keyword), vec!["let", "each", "in"]);
        assert!(kinds_of(&out, TokenKind::Identifier).contains(&"[Column1]"));
        assert_eq!(kinds_of(&out, TokenKind::Operator), vec!["=", ">"]);

        let upper = spans("LET x", Language::PowerQuery);
        assert!(kinds_of(&upper, TokenKind::Keyword).is_empty());
    }

    #[test]
    fn m_quoted_identifiers_and_strings() {
        let out = spans(r##"#"Changed Type" = "a ""b"""##, Language::PowerQuery);
        assert_eq!(out[0].kind, TokenKind::Identifier);
        assert_eq!(out[0].text, r#"#"Changed Type""#);
        assert_eq!(kinds_of(&out, TokenKind::String), vec![r#""a ""b""""#]);
    }

    #[test]
    fn dax_tables_columns_and_strings() {
        let out = spans(
            "Sales in Category = CALCULATE([Total Sales], 'Product'[Category] = \"Electronics\")",
            Language::Dax,
        );
        assert_eq!(kinds_of(&out, TokenKind::Function), vec!["CALCULATE"]);
        assert_eq!(kinds_of(&out, TokenKind::String), vec!["\"Electronics\""]);
        let idents = kinds_of(&out, TokenKind::Identifier);
        assert!(idents.contains(&"[Total Sales]"));
        assert!(idents.contains(&"'Product'"));
        assert!(idents.contains(&"[Category]"));
        assert_eq!(kinds_of(&out, TokenKind::Keyword), vec!["in"]);
    }

    #[test]
    fn comments_end_at_the_line_break() {
        let out = spans("// Year-to-date\nTotal = 1", Language::Dax);
        assert_eq!(kinds_of(&out, TokenKind::Comment), vec!["// Year-to-date"]);
        assert_eq!(out[1], Span {
            kind: TokenKind::Whitespace,
            text: "\n".into(),
        });
    }

    #[test]
    fn unterminated_runs_take_the_rest() {
        let out = spans("x = \"oops", Language::Dax);
        assert_eq!(kinds_of(&out, TokenKind::String), vec!["\"oops"]);
        let out = spans("/* open", Language::Dax);
        assert_eq!(kinds_of(&out, TokenKind::Comment), vec!["/* open"]);
    }

    #[test]
    fn operators_group_together() {
        let out = spans("a <= b", Language::Dax);
        assert_eq!(kinds_of(&out, TokenKind::Operator), vec!["<="]);
    }

    #[test]
    fn unscoped_text_splits_into_words() {
        assert_eq!(
            words("t, x"),
            vec![
                (TokenKind::Identifier, "t"),
                (TokenKind::Punctuation, ","),
                (TokenKind::Whitespace, " "),
                (TokenKind::Identifier, "x"),
            ]
        );
    }
}
