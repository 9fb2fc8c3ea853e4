use proc_macro::TokenStream;
use quote::quote;

/// Split a `#rrggbb` or `rrggbb` literal into its three bytes.
fn hex_bytes(value: &str) -> Option<[u8; 3]> {
    let digits = value.strip_prefix('#').unwrap_or(value);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some([byte(0)?, byte(2)?, byte(4)?])
}

/// Build a `wcag_contrast::Color` from a hex string literal, checked at
/// compile time.
///
/// ```ignore
/// const SUCCESS: Color = color!("#2e7d32");
/// ```
#[proc_macro]
pub fn color(input: TokenStream) -> TokenStream {
    let literal = syn::parse_macro_input!(input as syn::LitStr);

    let Some([red, green, blue]) = hex_bytes(&literal.value()) else {
        return syn::Error::new(
            literal.span(),
            "expected a color with exactly 6 hex digits, optionally prefixed with `#`",
        )
        .to_compile_error()
        .into();
    };

    quote! {
        ::wcag_contrast::Color::new(#red, #green, #blue)
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_valid_literals() {
        assert_eq!(hex_bytes("#2e7d32"), Some([0x2e, 0x7d, 0x32]));
        assert_eq!(hex_bytes("FFFFFF"), Some([255, 255, 255]));
    }

    #[test]
    fn rejects_malformed_literals() {
        assert_eq!(hex_bytes("#zzz"), None);
        assert_eq!(hex_bytes("#12345g"), None);
        assert_eq!(hex_bytes("##123456"), None);
        assert_eq!(hex_bytes("#1234567"), None);
    }
}
