//! Name-keyed registry of ClickHouse type handles.

use std::collections::HashMap;
use std::sync::Arc;

use crate::constant::{MAX_TYPE_DEPTH, type_name};
use crate::error::{Error, Result};
use crate::opts::Opts;
use crate::protocol::{TypeHandle, TypeResolver};
use crate::types::*;

/// Maps ClickHouse type names to their [`TypeHandle`]
///
/// Scalar types are looked up by exact name. Parametric names such as
/// `FixedString(16)`, `Nullable(T)`, `Array(T)` and `DateTime('UTC')` are parsed on
/// lookup and built from their arguments.
///
/// A registry is immutable once shared, so one instance can serve any number of
/// concurrent decode and encode calls.
#[derive(Debug, Clone)]
pub struct Registry {
    opts: Opts,
    types: HashMap<String, Arc<dyn TypeHandle>>,
}

impl Registry {
    /// Create a registry with all built-in types, configured by `opts`
    pub fn new(opts: Opts) -> Self {
        let mut registry = Self {
            opts,
            types: HashMap::new(),
        };
        registry.register(Arc::new(UInt8));
        registry.register(Arc::new(UInt16));
        registry.register(Arc::new(UInt32));
        registry.register(Arc::new(UInt64::new(registry.opts.uint64)));
        registry.register(Arc::new(Int8));
        registry.register(Arc::new(Int16));
        registry.register(Arc::new(Int32));
        registry.register(Arc::new(Int64));
        registry.register(Arc::new(Float32));
        registry.register(Arc::new(Float64));
        registry.register(Arc::new(Bool));
        registry.register(Arc::new(StringType));
        registry.register(Arc::new(Date));
        registry.register(Arc::new(DateTime::default()));
        registry.register(Arc::new(Uuid));
        registry
    }

    /// Add or replace a handle, keyed by its `name()`
    pub fn register(&mut self, handle: Arc<dyn TypeHandle>) {
        self.types.insert(handle.name().to_string(), handle);
    }

    pub fn opts(&self) -> &Opts {
        &self.opts
    }

    /// Look up the handle for `name`
    ///
    /// Names match exactly, without trimming or normalization, so a resolved handle's
    /// `name()` is always the string it was resolved from. An unknown nested argument
    /// reports the whole `name`.
    pub fn get_from_name(&self, name: &str) -> Result<Arc<dyn TypeHandle>> {
        self.build(name, 0).map_err(|e| match e {
            Error::UnknownType(_) => Error::UnknownType(name.to_string()),
            other => other,
        })
    }

    /// `depth` counts the `Nullable`/`Array` wrappers enclosing `name`
    fn build(&self, name: &str, depth: usize) -> Result<Arc<dyn TypeHandle>> {
        if let Some(handle) = self.types.get(name) {
            return Ok(Arc::clone(handle));
        }

        let unknown = || Error::UnknownType(name.to_string());
        let (base, args) = split_parametric(name).ok_or_else(unknown)?;
        let handle: Arc<dyn TypeHandle> = match base {
            type_name::NULLABLE | type_name::ARRAY if depth >= MAX_TYPE_DEPTH => {
                return Err(unknown());
            }
            type_name::NULLABLE => Arc::new(Nullable::new(self.build(args, depth + 1)?)),
            type_name::ARRAY => Arc::new(Array::new(self.build(args, depth + 1)?)),
            type_name::FIXED_STRING => {
                // canonical digits only, e.g. no sign or leading zeros
                let len = args
                    .parse::<usize>()
                    .ok()
                    .filter(|len| len.to_string() == args)
                    .ok_or_else(unknown)?;
                Arc::new(FixedString::new(len, self.opts.fixed_string))
            }
            type_name::DATETIME => {
                let tz = args
                    .strip_prefix('\'')
                    .and_then(|s| s.strip_suffix('\''))
                    .ok_or_else(unknown)?;
                Arc::new(DateTime::new(Some(tz.to_string())))
            }
            _ => return Err(unknown()),
        };
        tracing::trace!(type_name = name, depth, "built parametric type");
        Ok(handle)
    }
}

/// Split `Base(args)` into `("Base", "args")`
fn split_parametric(name: &str) -> Option<(&str, &str)> {
    let (base, rest) = name.split_once('(')?;
    let args = rest.strip_suffix(')')?;
    Some((base, args))
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(Opts::default())
    }
}

impl TypeResolver for Registry {
    fn resolve(&self, type_name: &str) -> Result<Arc<dyn TypeHandle>> {
        self.get_from_name(type_name)
    }
}
