use crate::tokenizer::{Token, TokenCategory};

/// Space separated lexemes of `tokens`
pub fn render(tokens: &[Token]) -> String {
    render_with(tokens, |_, lexeme| lexeme)
}

/// Like [`render`], but each lexeme is passed through `format` along with its category first
pub fn render_with<F>(tokens: &[Token], mut format: F) -> String
where
    F: FnMut(TokenCategory, String) -> String,
{
    tokens
        .iter()
        .map(|token| format(token.category(), token.lexeme()))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use crate::{
        converter::to_postfix,
        tokenizer::{tokenize, TokenCategory},
    };
    use pretty_assertions::assert_eq;

    use super::{render, render_with};

    #[test]
    fn postfix() {
        let tokens = tokenize("(10 - 2) * 3").expect("should tokenize");
        assert_eq!(render(&tokens), "( 10 - 2 ) * 3");
        assert_eq!(render(&to_postfix(tokens)), "10 2 - 3 *");
    }

    #[test]
    fn empty() {
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn with_categories() {
        let tokens = tokenize("(1+2)").expect("should tokenize");
        let rendered = render_with(&tokens, |category, lexeme| match category {
            TokenCategory::Number => format!("n{lexeme}"),
            TokenCategory::Brace => format!("b{lexeme}"),
            TokenCategory::Operator => format!("o{lexeme}"),
        });
        assert_eq!(rendered, "b( n1 o+ n2 b)");
    }
}
