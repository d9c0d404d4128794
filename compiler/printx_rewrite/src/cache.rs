//! Process-wide memoization of rewritten templates.
//!
//! Each distinct (template, records) pair is rewritten once; later calls
//! return the same leaked `&'static CStr`. The number of entries is bounded
//! by the number of distinct call sites and argument types in the program.

use std::ffi::CStr;
use std::sync::OnceLock;

use parking_lot::Mutex;
use printx_ir::SpecifierList;
use rustc_hash::FxHashMap;

use crate::{transform, Failure};

type FormatCache = Mutex<FxHashMap<(&'static str, SpecifierList), &'static CStr>>;

static GLOBAL_FORMAT_CACHE: OnceLock<FormatCache> = OnceLock::new();

fn format_cache() -> &'static FormatCache {
    GLOBAL_FORMAT_CACHE.get_or_init(|| Mutex::new(FxHashMap::default()))
}

/// The rewritten form of `template`, computed at most once per process.
pub fn intern(template: &'static str, records: &SpecifierList) -> Result<&'static CStr, Failure> {
    let key = (template, *records);
    let mut cache = format_cache().lock();
    if let Some(&format) = cache.get(&key) {
        return Ok(format);
    }
    let format: &'static CStr = Box::leak(transform(template, records)?.into_boxed_c_str());
    tracing::debug!(template, ?format, entries = cache.len() + 1, "format cached");
    cache.insert(key, format);
    Ok(format)
}
