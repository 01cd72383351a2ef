//! Procedural macros for the aoc-solver library

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{DeriveInput, Lit, parse_macro_input};

/// Derive macro for automatically registering solvers with the plugin system
///
/// This macro generates the necessary code to register a solver with the inventory
/// system, allowing `RegistryBuilder::register_all_plugins` to discover it.
///
/// # Attributes
///
/// - `year`: Required. The puzzle year (e.g., 2023)
/// - `day`: Required. The day number (1-25), checked at compile time
/// - `tags`: Optional. Array of string literals (e.g., ["easy", "parsing"])
///
/// # Requirements
///
/// The type must be a unit struct implementing the `Solver` trait.
///
/// # Example
///
/// ```ignore
/// use aoc_solver::{AocParser, AutoRegisterSolver, ParseError, SolveError, Solver};
///
/// #[derive(AutoRegisterSolver)]
/// #[aoc(year = 2023, day = 1, tags = ["easy", "parsing"])]
/// struct Day1Solver;
///
/// impl Solver for Day1Solver {
///     // ... implementation
/// }
/// ```
#[proc_macro_derive(AutoRegisterSolver, attributes(aoc))]
pub fn derive_auto_register_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;

    let aoc_attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("aoc"))
        .ok_or_else(|| {
            syn::Error::new(
                Span::call_site(),
                "AutoRegisterSolver derive macro requires #[aoc(...)] attribute",
            )
        })?;

    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut tags: Vec<String> = Vec::new();

    aoc_attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("year") {
            let value: Lit = meta.value()?.parse()?;
            match value {
                Lit::Int(lit_int) => year = Some(lit_int.base10_parse()?),
                other => return Err(syn::Error::new_spanned(other, "year must be an integer")),
            }
        } else if meta.path.is_ident("day") {
            let value: Lit = meta.value()?.parse()?;
            match value {
                Lit::Int(lit_int) => {
                    let parsed: u8 = lit_int.base10_parse()?;
                    if !(1..=25).contains(&parsed) {
                        return Err(syn::Error::new_spanned(
                            lit_int,
                            "day must be between 1 and 25",
                        ));
                    }
                    day = Some(parsed);
                }
                other => return Err(syn::Error::new_spanned(other, "day must be an integer")),
            }
        } else if meta.path.is_ident("tags") {
            // tags = ["a", "b"]
            let _ = meta.value()?;
            let content;
            syn::bracketed!(content in meta.input);
            while !content.is_empty() {
                let lit: Lit = content.parse()?;
                match lit {
                    Lit::Str(lit_str) => tags.push(lit_str.value()),
                    other => {
                        return Err(syn::Error::new_spanned(
                            other,
                            "tags must be string literals",
                        ));
                    }
                }
                if content.peek(syn::Token![,]) {
                    let _: syn::Token![,] = content.parse()?;
                }
            }
        } else {
            return Err(meta.error("unsupported #[aoc] key, expected year, day or tags"));
        }
        Ok(())
    })?;

    let year = year.ok_or_else(|| syn::Error::new_spanned(aoc_attr, "missing `year`"))?;
    let day = day.ok_or_else(|| syn::Error::new_spanned(aoc_attr, "missing `day`"))?;
    let tag_strs = tags.iter().map(String::as_str);

    Ok(quote! {
        // Compile-time check that the type implements Solver trait
        const _: () = {
            trait MustImplementSolver: ::aoc_solver::Solver {}
            impl MustImplementSolver for #name {}
        };

        ::aoc_solver::inventory::submit! {
            ::aoc_solver::SolverPlugin {
                year: #year,
                day: #day,
                solver: &#name,
                tags: &[#(#tag_strs),*],
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand_str(input: proc_macro2::TokenStream) -> syn::Result<proc_macro2::TokenStream> {
        expand(&syn::parse2(input)?)
    }

    #[test]
    fn test_string_tags_accepted() {
        let expanded = expand_str(quote! {
            #[aoc(year = 2023, day = 5, tags = ["grid", "bfs"])]
            struct Day05;
        })
        .unwrap()
        .to_string();
        assert!(expanded.contains("\"grid\""));
        assert!(expanded.contains("\"bfs\""));
    }

    #[test]
    fn test_non_string_tag_rejected() {
        let err = expand_str(quote! {
            #[aoc(year = 2023, day = 5, tags = ["grid", 7])]
            struct Day05;
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "tags must be string literals");
    }

    #[test]
    fn test_day_out_of_range_rejected() {
        let err = expand_str(quote! {
            #[aoc(year = 2023, day = 26)]
            struct Day26;
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "day must be between 1 and 25");
    }
}
