use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Fields, Lit, Meta};

/// Derive macro that generates a companion grid struct for a per-cell
/// record. All fields in the source struct must be `f64`.
///
/// The generated struct has the same fields as `ndarray::Array2<f64>`, one
/// grid per field, along with `from_cells`, `uniform`, `cell`, `shape`,
/// `get`, `named` and `into_named`. A `field_names()` associated function is
/// added to both structs; the order is the declaration order.
///
/// Use `#[grid(name = "CustomName")]` to override the default companion
/// name (`{StructName}Grids`). The deriving crate must depend on `ndarray`.
#[proc_macro_derive(GridFields, attributes(grid))]
pub fn derive_grid_fields(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;

    let grid_name = extract_grid_name(&input).unwrap_or_else(|| format_ident!("{}Grids", name));

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return syn::Error::new_spanned(
                    name,
                    "GridFields can only be derived for structs with named fields",
                )
                .to_compile_error()
                .into();
            }
        },
        _ => {
            return syn::Error::new_spanned(name, "GridFields can only be derived for structs")
                .to_compile_error()
                .into();
        }
    };

    if fields.is_empty() {
        return syn::Error::new_spanned(name, "GridFields struct must have at least one field")
            .to_compile_error()
            .into();
    }

    let mut field_names = Vec::new();
    let mut field_idents = Vec::new();
    let mut field_docs: Vec<Vec<&Attribute>> = Vec::new();
    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        if !is_f64_type(&field.ty) {
            return syn::Error::new_spanned(&field.ty, "GridFields derive: all fields must be f64")
                .to_compile_error()
                .into();
        }
        field_names.push(ident.to_string());
        field_idents.push(ident);
        field_docs.push(
            field
                .attrs
                .iter()
                .filter(|a| a.path().is_ident("doc"))
                .collect(),
        );
    }

    let first_field = &field_idents[0];
    let n_fields = field_idents.len();
    let field_name_strs: Vec<&str> = field_names.iter().map(|s| s.as_str()).collect();
    let grid_doc = format!("Grid companion of [`{}`], one `Array2<f64>` per field.", name);

    let expanded = quote! {
        #[doc = #grid_doc]
        #[derive(Debug, Clone, PartialEq)]
        pub struct #grid_name {
            #(
                #(#field_docs)*
                pub #field_idents: ::ndarray::Array2<f64>,
            )*
        }

        impl #grid_name {
            /// Number of grids in the set.
            pub const LEN: usize = #n_fields;

            /// Scatter row-major per-cell records into grids of `shape`.
            ///
            /// Panics if `cells.len() != rows * cols`.
            pub fn from_cells(shape: (usize, usize), cells: &[#name]) -> Self {
                assert_eq!(
                    cells.len(),
                    shape.0 * shape.1,
                    "expected {} cells for shape {:?}, got {}",
                    shape.0 * shape.1,
                    shape,
                    cells.len()
                );
                let ncols = shape.1;
                Self {
                    #(
                        #field_idents: ::ndarray::Array2::from_shape_fn(shape, |(r, c)| {
                            cells[r * ncols + c].#field_idents
                        }),
                    )*
                }
            }

            /// Every cell set to the same record.
            pub fn uniform(shape: (usize, usize), cell: &#name) -> Self {
                Self {
                    #( #field_idents: ::ndarray::Array2::from_elem(shape, cell.#field_idents), )*
                }
            }

            /// Gather the record at `(row, col)`.
            pub fn cell(&self, idx: (usize, usize)) -> #name {
                #name {
                    #( #field_idents: self.#field_idents[[idx.0, idx.1]], )*
                }
            }

            /// Shape of the first grid (all grids share it by construction).
            pub fn shape(&self) -> (usize, usize) {
                self.#first_field.dim()
            }

            /// Returns the grid names, in declaration order.
            pub fn field_names() -> &'static [&'static str] {
                &[#(#field_name_strs),*]
            }

            /// Look up a grid by name.
            pub fn get(&self, name: &str) -> Option<&::ndarray::Array2<f64>> {
                match name {
                    #( #field_name_strs => Some(&self.#field_idents), )*
                    _ => None,
                }
            }

            /// Borrow every grid with its name, in declaration order.
            pub fn named(&self) -> Vec<(&'static str, &::ndarray::Array2<f64>)> {
                vec![#( (#field_name_strs, &self.#field_idents) ),*]
            }

            /// Consume the set into named grids, in declaration order.
            pub fn into_named(self) -> Vec<(&'static str, ::ndarray::Array2<f64>)> {
                vec![#( (#field_name_strs, self.#field_idents) ),*]
            }
        }

        impl #name {
            /// Returns the field names of this record.
            pub fn field_names() -> &'static [&'static str] {
                &[#(#field_name_strs),*]
            }
        }
    };

    expanded.into()
}

fn extract_grid_name(input: &DeriveInput) -> Option<proc_macro2::Ident> {
    for attr in &input.attrs {
        if attr.path().is_ident("grid") {
            let nested = attr
                .parse_args_with(
                    syn::punctuated::Punctuated::<syn::Meta, syn::Token![,]>::parse_terminated,
                )
                .ok()?;
            for meta in nested {
                if let Meta::NameValue(nv) = meta {
                    if nv.path.is_ident("name") {
                        if let syn::Expr::Lit(expr_lit) = &nv.value {
                            if let Lit::Str(lit_str) = &expr_lit.lit {
                                return Some(format_ident!("{}", lit_str.value()));
                            }
                        }
                    }
                }
            }
        }
    }
    None
}

fn is_f64_type(ty: &syn::Type) -> bool {
    if let syn::Type::Path(type_path) = ty {
        type_path.path.is_ident("f64")
    } else {
        false
    }
}
