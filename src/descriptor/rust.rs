//! syn-backed class descriptor for Rust source files.

use crate::common::text::{snake_case, split_identifier};
use crate::core::errors::{Error, Result};
use crate::descriptor::{ClassDescriptor, MethodDescriptor, ParamDescriptor};
use std::fs;
use std::path::{Path, PathBuf};

/// Descriptor resolved from a Rust source file. The target may be a struct
/// or an enum; its declared surface is the set of `pub fn`s in inherent impl
/// blocks (trait impls are inherited surface, not declarations).
#[derive(Debug, Clone)]
pub struct RustClassDescriptor {
    fully_qualified_name: String,
    short_name: String,
    namespace: String,
    source_file: PathBuf,
    methods: Vec<MethodDescriptor>,
    constructor_params: Vec<ParamDescriptor>,
}

impl RustClassDescriptor {
    /// Resolves `class` to a source file and extracts its declared surface.
    ///
    /// An explicit `source` must be an existing regular file. Without one,
    /// the conventional candidate files from [`candidate_files`] are probed
    /// in order.
    pub fn resolve(class: &str, source: Option<&Path>) -> Result<Self> {
        let source_file = match source {
            Some(path) => {
                if !path.is_file() {
                    return Err(Error::SourceNotReadable {
                        path: path.to_path_buf(),
                        source: None,
                    });
                }
                path.to_path_buf()
            }
            None => locate_source_file(class)?,
        };

        log::debug!("reading target source from {}", source_file.display());
        let content = fs::read_to_string(&source_file).map_err(|err| Error::SourceNotReadable {
            path: source_file.clone(),
            source: Some(err),
        })?;

        Self::from_source(&content, source_file, class)
    }

    /// Builds a descriptor from already-loaded source text.
    pub fn from_source(content: &str, source_file: PathBuf, class: &str) -> Result<Self> {
        let (namespace, short_name) = split_identifier(class);

        let file = syn::parse_file(content).map_err(|err| Error::Parse {
            path: source_file.clone(),
            source: err,
        })?;

        let mut extraction = Extraction::default();
        extract_from_items(&file.items, &short_name, &mut extraction);

        if !extraction.type_found {
            return Err(Error::ClassMissingFromSource {
                class: class.to_string(),
                path: source_file,
            });
        }

        Ok(Self {
            fully_qualified_name: class.to_string(),
            short_name,
            namespace,
            source_file,
            methods: extraction.methods,
            constructor_params: extraction.constructor_params,
        })
    }
}

impl ClassDescriptor for RustClassDescriptor {
    fn fully_qualified_name(&self) -> &str {
        &self.fully_qualified_name
    }

    fn short_name(&self) -> &str {
        &self.short_name
    }

    fn namespace(&self) -> &str {
        &self.namespace
    }

    fn source_file(&self) -> &Path {
        &self.source_file
    }

    fn methods(&self) -> &[MethodDescriptor] {
        &self.methods
    }

    fn constructor_params(&self) -> &[ParamDescriptor] {
        &self.constructor_params
    }
}

/// Conventional source file locations for a target identifier: the short
/// name snake_cased, and the full module path with `::` separators replaced
/// by path separators.
pub fn candidate_files(class: &str) -> Vec<PathBuf> {
    let (_, short) = split_identifier(class);
    vec![
        PathBuf::from(format!("{}.rs", snake_case(&short))),
        PathBuf::from(format!(
            "{}.rs",
            class
                .split("::")
                .map(snake_case)
                .collect::<Vec<_>>()
                .join("/")
        )),
    ]
}

fn locate_source_file(class: &str) -> Result<PathBuf> {
    let candidates = candidate_files(class);
    candidates
        .iter()
        .find(|candidate| candidate.is_file())
        .cloned()
        .ok_or_else(|| Error::ClassNotFound {
            class: class.to_string(),
            tried: candidates,
        })
}

#[derive(Default)]
struct Extraction {
    type_found: bool,
    methods: Vec<MethodDescriptor>,
    constructor_params: Vec<ParamDescriptor>,
}

fn extract_from_items(items: &[syn::Item], short: &str, out: &mut Extraction) {
    for item in items {
        match item {
            syn::Item::Struct(s) if s.ident == short => out.type_found = true,
            syn::Item::Enum(e) if e.ident == short => out.type_found = true,
            syn::Item::Impl(imp) if imp.trait_.is_none() && impl_targets(imp, short) => {
                collect_impl_methods(imp, short, out);
            }
            syn::Item::Mod(m) => {
                if let Some((_, items)) = &m.content {
                    extract_from_items(items, short, out);
                }
            }
            _ => {}
        }
    }
}

fn impl_targets(imp: &syn::ItemImpl, short: &str) -> bool {
    match &*imp.self_ty {
        syn::Type::Path(tp) => tp
            .path
            .segments
            .last()
            .map(|segment| segment.ident == short)
            .unwrap_or(false),
        _ => false,
    }
}

fn collect_impl_methods(imp: &syn::ItemImpl, short: &str, out: &mut Extraction) {
    for item in &imp.items {
        let syn::ImplItem::Fn(f) = item else {
            continue;
        };

        let name = f.sig.ident.to_string();
        let is_static = f.sig.receiver().is_none();
        let is_constructor = name == "new";
        let parameters = extract_params(&f.sig);

        // Constructor parameters feed dependency planning even when `new`
        // itself is not public.
        if is_constructor && is_static {
            out.constructor_params = parameters.clone();
        }

        if !matches!(f.vis, syn::Visibility::Public(_)) {
            continue;
        }

        out.methods.push(MethodDescriptor {
            name,
            is_static,
            is_abstract: false,
            is_constructor,
            declaring_class: short.to_string(),
            doc: doc_text(&f.attrs),
            parameters,
        });
    }
}

fn extract_params(sig: &syn::Signature) -> Vec<ParamDescriptor> {
    sig.inputs
        .iter()
        .filter_map(|input| match input {
            syn::FnArg::Receiver(_) => None,
            syn::FnArg::Typed(pat_type) => Some(ParamDescriptor {
                name: param_name(&pat_type.pat),
                class_type: class_type_of(&pat_type.ty),
            }),
        })
        .collect()
}

fn param_name(pat: &syn::Pat) -> String {
    match pat {
        syn::Pat::Ident(ident) => ident.ident.to_string(),
        _ => "_".to_string(),
    }
}

/// A parameter counts as class-typed when its declared type (behind any
/// reference sigils) is a plain path with an uppercase final segment and no
/// generic arguments. `String` and `Self` are value types here, not
/// mockable collaborators.
fn class_type_of(ty: &syn::Type) -> Option<String> {
    match ty {
        syn::Type::Reference(reference) => class_type_of(&reference.elem),
        syn::Type::Path(tp) if tp.qself.is_none() => {
            let last = tp.path.segments.last()?;
            if !matches!(last.arguments, syn::PathArguments::None) {
                return None;
            }
            let ident = last.ident.to_string();
            if !ident.chars().next()?.is_uppercase() {
                return None;
            }
            if matches!(ident.as_str(), "String" | "Self") {
                return None;
            }
            Some(
                tp.path
                    .segments
                    .iter()
                    .map(|segment| segment.ident.to_string())
                    .collect::<Vec<_>>()
                    .join("::"),
            )
        }
        _ => None,
    }
}

fn doc_text(attrs: &[syn::Attribute]) -> String {
    attrs
        .iter()
        .filter_map(|attr| {
            if !attr.path().is_ident("doc") {
                return None;
            }
            match &attr.meta {
                syn::Meta::NameValue(nv) => match &nv.value {
                    syn::Expr::Lit(syn::ExprLit {
                        lit: syn::Lit::Str(s),
                        ..
                    }) => Some(s.value()),
                    _ => None,
                },
                _ => None,
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
