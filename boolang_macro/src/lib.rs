extern crate proc_macro;
use boolang_lib::{report, run};
use proc_macro::TokenStream;
use quote::quote;
use regex::Regex;
use syn::{parse_macro_input, ItemFn};

/// Runs the boolang program written as the string body of the function at compile time.
/// The body is replaced by the values printed by the program, as a `Vec<bool>`.
/// Any error of the program becomes a compile error.
#[proc_macro_attribute]
pub fn boolang(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input_fn = parse_macro_input!(item as ItemFn);
    let attrs = &input_fn.attrs;
    let vis = &input_fn.vis;
    let sig = &input_fn.sig;

    let body = &input_fn.block;

    let quoted_body = quote! {#body}.to_string();
    let body_tokens_regex = Regex::new(r#"(?s)\"(.*?)\""#).unwrap();
    let mut boolang_code = String::new();
    for cap in body_tokens_regex.captures_iter(&quoted_body) {
        if let Some(matched) = cap.get(1) {
            boolang_code.push_str(matched.as_str());
            boolang_code.push('\n');
        }
    }

    let printed = match run(boolang_code.as_str()) {
        Ok(values) => values,
        Err(e) => {
            let error_message = report(&e);
            return TokenStream::from(quote! { compile_error!(#error_message); });
        }
    };

    let new_body = quote! {
        {
            vec![#(#printed),*]
        }
    };

    let output = quote! {
        #(#attrs)*
        #vis #sig
        #new_body
    };

    TokenStream::from(output)
}
