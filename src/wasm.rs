//! Expose comparison and reconciliation to WebAssembly so the review screen
//! can run the engine in the browser.
use wasm_bindgen::prelude::*;

use crate::{
    BuiltinTokenizer, ComparisonOptions, ComparisonResult, DisagreementId, Reconciler, Side,
    utils::string_or_nothing::string_or_nothing,
};

#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc<'_> = wee_alloc::WeeAlloc::INIT;

/// Compare two documents and return the `ComparisonResult` serialized as
/// JSON (`segmentsA`, `segmentsB`, `diffTable`).
///
/// # Errors
///
/// If the comparison fails or the result can't be serialized.
#[wasm_bindgen(js_name = compareDocuments)]
pub fn compare_documents(
    a: &str,
    b: &str,
    tokenizer: BuiltinTokenizer,
) -> Result<String, JsError> {
    set_panic_hook();

    let options = ComparisonOptions {
        tokenizer,
        ..ComparisonOptions::default()
    };
    let result = crate::compare_with_options(a, b, &options)?;

    Ok(serde_json::to_string(&result)?)
}

/// Heuristically determine if the given data is a binary or a text file's
/// content.
#[wasm_bindgen(js_name = isBinary)]
#[must_use]
pub fn is_binary(data: &[u8]) -> bool {
    set_panic_hook();

    string_or_nothing(data).is_none()
}

/// WASM wrapper around `crate::Reconciler`.
#[wasm_bindgen(js_name = Reconciler)]
#[derive(Debug)]
pub struct JsReconciler {
    inner: Reconciler,
}

#[wasm_bindgen(js_class = Reconciler)]
impl JsReconciler {
    /// Start a session from the JSON returned by `compareDocuments`.
    ///
    /// # Errors
    ///
    /// If the JSON isn't a consistent comparison result.
    #[wasm_bindgen(constructor)]
    pub fn new(comparison_json: &str) -> Result<JsReconciler, JsError> {
        set_panic_hook();

        let comparison: ComparisonResult = serde_json::from_str(comparison_json)?;
        Ok(Self {
            inner: Reconciler::new(comparison)?,
        })
    }

    /// # Errors
    ///
    /// If there's no disagreement with this id.
    pub fn select(&mut self, id: DisagreementId, side: Side) -> Result<(), JsError> {
        Ok(self.inner.select(id, side)?)
    }

    #[wasm_bindgen(js_name = isComplete)]
    #[must_use]
    pub fn is_complete(&self) -> bool { self.inner.is_complete() }

    #[wasm_bindgen(js_name = resolvedCount)]
    #[must_use]
    pub fn resolved_count(&self) -> usize { self.inner.resolved_count() }

    #[must_use]
    pub fn total(&self) -> usize { self.inner.total() }

    #[must_use]
    pub fn progress(&self) -> f64 { self.inner.progress() }

    #[wasm_bindgen(js_name = unresolvedIds)]
    #[must_use]
    pub fn unresolved_ids(&self) -> Vec<DisagreementId> { self.inner.unresolved_ids() }

    /// # Errors
    ///
    /// If any disagreement is still unresolved.
    pub fn assemble(&self) -> Result<String, JsError> { Ok(self.inner.assemble()?) }

    /// The merged document as JSON spans tagged with their origin.
    ///
    /// # Errors
    ///
    /// If any disagreement is still unresolved.
    #[wasm_bindgen(js_name = assembleSpans)]
    pub fn assemble_spans(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&self.inner.assemble_spans()?)?)
    }
}

fn set_panic_hook() {
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
