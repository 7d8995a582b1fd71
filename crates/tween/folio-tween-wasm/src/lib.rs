use std::cell::RefCell;
use std::collections::HashMap;

use js_sys::{Function, JSON};
use serde::Serialize;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use folio_tween_core::{parse_stored_tween_json_with, Config, TweenError, TweenId, TweenSet};

/// Tween owner for a browser frame loop. Call `update(performance.now())`
/// from `requestAnimationFrame` and apply the returned changes to the sprite.
///
/// JS completion callbacks are held here rather than in the core set and run
/// after the set is released, so a callback may call back into this object
/// (for example `add` the next tween).
#[wasm_bindgen]
pub struct FolioTween {
    core: RefCell<TweenSet>,
    callbacks: RefCell<HashMap<TweenId, Function>>,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

/// Plain JS objects instead of `Map`s for string-keyed data.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    value
        .serialize(&swb::Serializer::json_compatible())
        .map_err(|e| JsError::new(&format!("serialize error: {e}")))
}

#[wasm_bindgen]
impl FolioTween {
    /// Create a new tween owner. Pass a config object or undefined/null for defaults.
    /// Example:
    ///   new FolioTween({ default_duration_ms: 600, snap_to_end: true })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<FolioTween, JsError> {
        console_error_panic_hook::set_once();

        let cfg: Config = if jsvalue_is_undefined_or_null(&config) {
            Config::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };

        Ok(FolioTween {
            core: RefCell::new(TweenSet::new(cfg)),
            callbacks: RefCell::new(HashMap::new()),
        })
    }

    /// Add a tween described by stored tween JSON
    /// (`{ duration?, easing?, start: {...}, end: {...}, then? }`). Returns its id.
    #[wasm_bindgen]
    pub fn add(&self, spec_json: JsValue) -> Result<u32, JsError> {
        if jsvalue_is_undefined_or_null(&spec_json) {
            return Err(JsError::new("add: spec is null/undefined"));
        }
        let s = JSON::stringify(&spec_json)
            .map_err(|e| JsError::new(&format!("add stringify error: {:?}", e)))?
            .as_string()
            .ok_or_else(|| JsError::new("add: stringify produced non-string"))?;
        let mut core = self.core.borrow_mut();
        let spec = parse_stored_tween_json_with(&s, core.config())
            .map_err(|e| JsError::new(&format!("add: {e}")))?;
        Ok(core.insert(spec).0)
    }

    /// Register (or replace) the completion callback of an active tween.
    #[wasm_bindgen(js_name = on_complete)]
    pub fn on_complete(&self, id: u32, callback: Function) -> Result<(), JsError> {
        let id = TweenId(id);
        if !self.core.borrow().contains(id) {
            return Err(JsError::new(&TweenError::UnknownTween { id }.to_string()));
        }
        self.callbacks.borrow_mut().insert(id, callback);
        Ok(())
    }

    /// Advance every tween to `timestamp` (ms). Returns `{ changes, events }`.
    ///
    /// Completion callbacks run after the frame has been computed, in
    /// completion order, and may re-enter this object.
    #[wasm_bindgen]
    pub fn update(&self, timestamp: f64) -> Result<JsValue, JsError> {
        let (out, completed) = {
            let mut core = self.core.borrow_mut();
            let outputs = core.update(timestamp);
            (to_js(outputs)?, outputs.completed().collect::<Vec<_>>())
        };

        let ready: Vec<Function> = {
            let mut callbacks = self.callbacks.borrow_mut();
            completed
                .iter()
                .filter_map(|id| callbacks.remove(id))
                .collect()
        };
        for callback in ready {
            if let Err(e) = callback.call0(&JsValue::UNDEFINED) {
                console_error(&format!("tween on_complete threw: {:?}", e));
            }
        }
        Ok(out)
    }

    /// Current values of a tween as `{ name: value }`, or undefined when it is not active.
    #[wasm_bindgen]
    pub fn values(&self, id: u32) -> Result<JsValue, JsError> {
        match self.core.borrow().current_values(TweenId(id)) {
            Some(values) => to_js(values),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    #[wasm_bindgen]
    pub fn contains(&self, id: u32) -> bool {
        self.core.borrow().contains(TweenId(id))
    }

    /// Abandon a tween without running its callback. Returns whether it was active.
    #[wasm_bindgen]
    pub fn remove(&self, id: u32) -> bool {
        let id = TweenId(id);
        self.callbacks.borrow_mut().remove(&id);
        self.core.borrow_mut().remove(id).is_some()
    }

    #[wasm_bindgen]
    pub fn len(&self) -> usize {
        self.core.borrow().len()
    }

    #[wasm_bindgen(js_name = is_empty)]
    pub fn is_empty(&self) -> bool {
        self.core.borrow().is_empty()
    }
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = error)]
    fn console_error(s: &str);
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
