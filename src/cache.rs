//! Parsed-tree cache for repeated evaluation
//!
//! Callers that evaluate the same expression text over and over (rule
//! engines, per-record filters) pay the parse cost once; subsequent calls
//! clone the cached tree. Keys are whole expression strings.

use ahash::AHashMap;
use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::ast::Tree;
use crate::error::Result;
use crate::evaluator::Bindings;
use crate::parser;

/// Global tree cache with fast hashing (ahash)
static TREE_CACHE: Lazy<RwLock<AHashMap<String, Tree>>> =
    Lazy::new(|| RwLock::new(AHashMap::with_capacity(256)));

/// Get or parse an expression, reusing the cached tree for repeated texts
///
/// Failed parses are not cached; every call with a malformed expression
/// re-reports its error.
#[inline]
pub fn get_or_parse(text: &str) -> Result<Tree> {
    {
        let cache = TREE_CACHE.read();
        if let Some(tree) = cache.get(text) {
            return Ok(tree.clone());
        }
    }

    let tree = parser::parse(text)?;

    {
        let mut cache = TREE_CACHE.write();
        cache.insert(text.to_string(), tree.clone());
    }

    Ok(tree)
}

/// Parse (cached) and evaluate in one call
#[inline]
pub fn evaluate_str(text: &str, bindings: &Bindings) -> Result<bool> {
    let tree = get_or_parse(text)?;
    tree.evaluate(bindings)
}

/// Drop all cached trees
pub fn clear() {
    TREE_CACHE.write().clear();
}

/// Number of cached trees
pub fn len() -> usize {
    TREE_CACHE.read().len()
}
