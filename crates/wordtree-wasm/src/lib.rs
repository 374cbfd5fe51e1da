// WASM bindings for the wordtree dictionary compiler.
//
// Word lists arrive as plain JavaScript arrays, either all strings or all
// `{ w, f }` objects, and are deserialized with serde-wasm-bindgen into the
// same `RawEntry` shape the native API accepts. Validation errors surface
// as thrown `Error`s carrying the compiler's message.
//
// Usage from JavaScript:
//
//   const blob = compileWordList(["cat", "car"]);              // => Uint8Array
//   const blob2 = compileWordList([{ w: "cat", f: 0.4 }]);
//   compileWordList(["cat"], { defaultFrequency: 0.5 });
//   describeWordList(["cat"]);   // => { words: 1, nodes: 4, ... }
//   dumpWordList(["cat"]);       // => "[0] { ch: c, f: 10 }\n..."

use js_sys::Uint8Array;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use wordtree_core::entry::{self, RawEntry};
use wordtree_core::frequency::DEFAULT_FREQUENCY;
use wordtree_tst::{CompileOptions, Dictionary, DictionaryCompiler};

/// Serializable representation of compile statistics.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsCompileStats {
    words: usize,
    nodes: usize,
    max_word_length: usize,
    distinct_chars: usize,
    blob_len: usize,
}

fn to_js_error(e: impl std::fmt::Display) -> JsError {
    JsError::new(&e.to_string())
}

/// Reads an optional options object; `undefined` and `null` mean defaults.
fn compiler_from(options: JsValue) -> Result<DictionaryCompiler, JsError> {
    if options.is_undefined() || options.is_null() {
        return Ok(DictionaryCompiler::default());
    }
    let options: CompileOptions = serde_wasm_bindgen::from_value(options).map_err(to_js_error)?;
    Ok(DictionaryCompiler::new(options))
}

fn entries_from(words: JsValue) -> Result<Vec<RawEntry>, JsError> {
    serde_wasm_bindgen::from_value(words).map_err(to_js_error)
}

fn build(words: JsValue, options: JsValue) -> Result<Dictionary, JsError> {
    let compiler = compiler_from(options)?;
    let raw = entries_from(words)?;
    let entries =
        entry::normalize(&raw, compiler.options().default_frequency).map_err(to_js_error)?;
    compiler.build(&entries).map_err(to_js_error)
}

/// Compile a word list into a dictionary blob.
///
/// `words` is an array of strings or an array of `{ w, f }` objects.
/// `options` may be omitted; it accepts `{ defaultFrequency }`.
#[wasm_bindgen(js_name = "compileWordList")]
pub fn compile_word_list(words: JsValue, options: JsValue) -> Result<Uint8Array, JsError> {
    let compiler = compiler_from(options)?;
    let raw = entries_from(words)?;
    let blob = compiler.compile_raw(&raw).map_err(to_js_error)?;
    Ok(Uint8Array::from(blob.as_slice()))
}

/// Compile a word list and return its size figures instead of the blob.
///
/// Returns an object with fields `words`, `nodes`, `maxWordLength`,
/// `distinctChars`, `blobLen`.
#[wasm_bindgen(js_name = "describeWordList")]
pub fn describe_word_list(words: JsValue, options: JsValue) -> Result<JsValue, JsError> {
    let stats = build(words, options)?.stats();
    let js_stats = JsCompileStats {
        words: stats.words,
        nodes: stats.nodes,
        max_word_length: stats.max_word_length,
        distinct_chars: stats.distinct_chars,
        blob_len: stats.blob_len,
    };
    serde_wasm_bindgen::to_value(&js_stats).map_err(to_js_error)
}

/// Compile a word list and return one line per node record, in blob order.
#[wasm_bindgen(js_name = "dumpWordList")]
pub fn dump_word_list(words: JsValue, options: JsValue) -> Result<String, JsError> {
    Ok(build(words, options)?.dump())
}

/// Frequency given to bare words when no options are passed.
#[wasm_bindgen(js_name = "defaultFrequency")]
pub fn default_frequency() -> f64 {
    DEFAULT_FREQUENCY
}
