use proc_macro::TokenStream;
use syn::{parenthesized, parse::Parse, parse_macro_input, Ident, LitChar, LitInt, Token};

use quote::quote;

/// Generates the closed `Operator` enum from a table of binary operators.
///
/// Each row is `(Variant, 'symbol', priority)`, and the generated type gets
/// `ALL`, `from_char`, `symbol`, `priority` and a `Display` impl printing the symbol.
#[proc_macro]
pub fn make_operators(input: TokenStream) -> TokenStream {
    let MakeOperatorsInput { operators } = parse_macro_input!(input as MakeOperatorsInput);

    let variants = operators
        .iter()
        .map(|op| op.variant.clone())
        .collect::<Vec<_>>();

    let symbols = operators
        .iter()
        .map(|op| op.symbol.clone())
        .collect::<Vec<_>>();

    let priorities = operators.iter().map(|op| op.priority).collect::<Vec<_>>();

    let count = operators.len();

    // 1. enum construction
    let my_enum = quote! {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum Operator {
            #(  #variants  ),*
        }
    };

    let my_enum_impl = quote! {
        impl Operator {
            pub const ALL: [Self; #count] = [ #( Self::#variants ),* ];

            #[must_use]
            pub const fn from_char(c: char) -> Option<Self> {
                match c {
                    #( #symbols => Some(Self::#variants), )*
                    _ => None,
                }
            }

            #[must_use]
            pub const fn symbol(self) -> char {
                match self {
                    #( Self::#variants => #symbols ),*
                }
            }

            /// Binding strength; a higher value binds tighter.
            #[must_use]
            pub const fn priority(self) -> u8 {
                match self {
                    #( Self::#variants => #priorities ),*
                }
            }
        }
    };

    let my_enum_display_impl = quote! {
        impl std::fmt::Display for Operator {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.symbol())
            }
        }
    };

    let result = quote! {
        #my_enum

        #my_enum_impl

        #my_enum_display_impl
    };

    result.into()
}

impl Parse for MakeOperatorsInput {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let ops = input.parse_terminated(OperatorDataInput::parse, Token![,])?;
        Ok(Self {
            operators: ops.into_iter().collect(),
        })
    }
}

impl Parse for OperatorDataInput {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let content;
        parenthesized!(content in input);
        let variant = content.parse::<Ident>()?;
        content.parse::<Token![,]>()?;
        let symbol = content.parse::<LitChar>()?;
        content.parse::<Token![,]>()?;
        let priority = content.parse::<LitInt>()?.base10_parse::<u8>()?;
        Ok(Self {
            variant,
            symbol,
            priority,
        })
    }
}

/// Parses something like this:
/// make_operators! (
///     (Add, '+', 1),
///     (Multiply, '*', 2),
/// )
struct MakeOperatorsInput {
    operators: Vec<OperatorDataInput>,
}

struct OperatorDataInput {
    /// The enum variant of the operator enum
    variant: Ident,
    symbol: LitChar,
    priority: u8,
}
